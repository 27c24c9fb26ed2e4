pub mod config;
pub mod http;
pub mod llm;
pub mod mail;

pub use config::Config;
pub use http::{create_router, AppState};
pub use llm::LlmClient;
pub use mail::{Email, Mailer, SmtpMailer};
