//! Notification gateway: sharing summaries over email.
//!
//! The [`Mailer`] trait is the single "send email" capability the service
//! needs; [`SmtpMailer`] is the production implementation backed by an SMTP
//! relay. Recipient parsing and message assembly live here so every
//! implementation dispatches the same thing.

mod smtp;

pub use smtp::SmtpMailer;

use async_trait::async_trait;
use thiserror::Error;

/// Subject line used for every summary notification
pub const SUMMARY_SUBJECT: &str = "Meeting Notes Summary";

#[derive(Debug, Error)]
pub enum MailError {
    /// The recipient list parsed to zero non-empty addresses
    #[error("no valid recipient addresses")]
    NoRecipients,

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// A single assembled email notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl Email {
    /// Assemble the notification for a generated summary: fixed subject, the
    /// summary text as the body.
    pub fn summary_notification(recipients: Vec<String>, summary: impl Into<String>) -> Self {
        Self {
            recipients,
            subject: SUMMARY_SUBJECT.to_string(),
            body: summary.into(),
        }
    }
}

/// Outbound mail transport.
///
/// One implementation per delivery mechanism; handlers depend on the trait so
/// tests can observe dispatched mail without a live relay.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Dispatch one email. Synchronous from the caller's point of view: the
    /// future resolves once the transport has accepted or rejected the send.
    async fn send(&self, email: &Email) -> Result<(), MailError>;
}

/// Split a comma-separated recipient list into trimmed addresses. Empty
/// entries are dropped; order is preserved.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}
