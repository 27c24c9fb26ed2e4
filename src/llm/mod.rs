//! Summarization gateway: one chat completion call per request, no retries.

pub mod client;
pub mod messages;

pub use client::{LlmClient, LlmError};
pub use messages::{ChatMessage, ChatRequest, ChatResponse};
