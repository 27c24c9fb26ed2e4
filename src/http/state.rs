use crate::llm::LlmClient;
use crate::mail::Mailer;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Summarization gateway (Groq chat completions)
    pub summarizer: Arc<LlmClient>,

    /// Outbound mail transport for sharing summaries
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(summarizer: Arc<LlmClient>, mailer: Arc<dyn Mailer>) -> Self {
        Self { summarizer, mailer }
    }
}
