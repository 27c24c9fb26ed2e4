use super::{Email, MailError, Mailer};
use crate::config::Config;
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

/// Mail transport backed by an SMTP relay.
///
/// The underlying lettre transport is built once from configuration and
/// reused for every send; connections are established per dispatch.
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    /// Build the transport from configuration: STARTTLS relay when the TLS
    /// flag is set, plain connection otherwise. Does not open a connection.
    pub fn new(config: &Config) -> Result<Self, MailError> {
        let sender: Mailbox = config
            .mail_username
            .parse()
            .map_err(|_| MailError::InvalidAddress(config.mail_username.clone()))?;

        let credentials = Credentials::new(
            config.mail_username.clone(),
            config.mail_password.clone(),
        );

        let builder = if config.mail_use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.mail_server)
                .map_err(|e| MailError::Smtp(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.mail_server)
        };

        let transport = builder
            .port(config.mail_port)
            .credentials(credentials)
            .build();

        Ok(Self { transport, sender })
    }

    /// Assemble the RFC 5322 message: configured sender, one To entry per
    /// recipient, subject and body from `email`.
    fn build_message(&self, email: &Email) -> Result<Message, MailError> {
        if email.recipients.is_empty() {
            return Err(MailError::NoRecipients);
        }

        let mut builder = Message::builder()
            .from(self.sender.clone())
            .subject(email.subject.clone());

        for recipient in &email.recipients {
            let mailbox: Mailbox = recipient
                .parse()
                .map_err(|_| MailError::InvalidAddress(recipient.clone()))?;
            builder = builder.to(mailbox);
        }

        builder
            .body(email.body.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let message = self.build_message(email)?;

        info!(
            "Sending \"{}\" to {} recipient(s)",
            email.subject,
            email.recipients.len()
        );

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        info!("Email dispatched successfully");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            groq_api_key: "gsk-test".to_string(),
            mail_server: "smtp.example.com".to_string(),
            mail_port: 587,
            mail_use_tls: true,
            mail_username: "notes@example.com".to_string(),
            mail_password: "hunter2".to_string(),
            secret_key: "secret".to_string(),
            http_port: 5000,
        }
    }

    #[test]
    fn test_build_message_headers_and_body() {
        let mailer = SmtpMailer::new(&test_config()).unwrap();
        let email = Email::summary_notification(
            vec!["a@x.com".to_string(), "b@y.com".to_string()],
            "Decisions: ship it.",
        );

        let message = mailer.build_message(&email).unwrap();
        let rendered = String::from_utf8_lossy(&message.formatted()).to_string();

        assert!(rendered.contains("Subject: Meeting Notes Summary"));
        assert!(rendered.contains("From: notes@example.com"));
        assert!(rendered.contains("a@x.com"));
        assert!(rendered.contains("b@y.com"));
        assert!(rendered.contains("Decisions: ship it."));
    }

    #[test]
    fn test_build_message_rejects_empty_recipient_list() {
        let mailer = SmtpMailer::new(&test_config()).unwrap();
        let email = Email::summary_notification(vec![], "body");

        let err = mailer.build_message(&email).unwrap_err();
        assert!(matches!(err, MailError::NoRecipients));
    }

    #[test]
    fn test_build_message_rejects_malformed_address() {
        let mailer = SmtpMailer::new(&test_config()).unwrap();
        let email =
            Email::summary_notification(vec!["not-an-address".to_string()], "body");

        let err = mailer.build_message(&email).unwrap_err();
        assert!(matches!(err, MailError::InvalidAddress(addr) if addr == "not-an-address"));
    }

    #[test]
    fn test_new_rejects_unparsable_sender() {
        let config = Config {
            mail_username: "not an address".to_string(),
            ..test_config()
        };

        let err = SmtpMailer::new(&config).unwrap_err();
        assert!(matches!(err, MailError::InvalidAddress(_)));
    }

    #[test]
    fn test_new_builds_plaintext_transport_when_tls_disabled() {
        let config = Config {
            mail_use_tls: false,
            ..test_config()
        };

        assert!(SmtpMailer::new(&config).is_ok());
    }
}
