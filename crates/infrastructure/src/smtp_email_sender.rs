//! SMTP email sender using the `lettre` crate.
//!
//! Every internal failure, from address parsing to transport errors, is
//! converted into a `DeliveryReport` with `success = false`; nothing
//! crosses the email boundary as an error.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use staffly_application::{DeliveryReport, EmailSender, OutboundEmail};
use tracing::warn;

/// SMTP email sender configuration.
#[derive(Debug, Clone)]
pub struct SmtpEmailConfig {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port.
    pub port: u16,
    /// SMTP username.
    pub username: String,
    /// SMTP password.
    pub password: String,
    /// Sender address used when the message carries no override.
    pub from_address: String,
}

/// Production email sender using SMTP.
#[derive(Debug, Clone)]
pub struct SmtpEmailSender {
    config: SmtpEmailConfig,
}

impl SmtpEmailSender {
    /// Creates a new SMTP email sender.
    #[must_use]
    pub fn new(config: SmtpEmailConfig) -> Self {
        Self { config }
    }

    fn build_message(&self, email: &OutboundEmail) -> Result<Message, String> {
        let from_address = email
            .from
            .as_deref()
            .unwrap_or(self.config.from_address.as_str());
        let from = from_address
            .parse()
            .map_err(|error| format!("invalid from address '{from_address}': {error}"))?;

        let to = email
            .to
            .parse()
            .map_err(|error| format!("invalid recipient address '{}': {error}", email.to))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .map_err(|error| format!("failed to build email: {error}"))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, email: OutboundEmail) -> DeliveryReport {
        let message = match self.build_message(&email) {
            Ok(message) => message,
            Err(reason) => {
                warn!(to = email.to.as_str(), reason = reason.as_str(), "email rejected");
                return DeliveryReport::failed(reason);
            }
        };

        let credentials =
            Credentials::new(self.config.username.clone(), self.config.password.clone());

        let mailer = match AsyncSmtpTransport::<Tokio1Executor>::relay(self.config.host.as_str()) {
            Ok(builder) => builder
                .port(self.config.port)
                .credentials(credentials)
                .build(),
            Err(error) => {
                let reason = format!("failed to create SMTP transport: {error}");
                warn!(reason = reason.as_str(), "email rejected");
                return DeliveryReport::failed(reason);
            }
        };

        match mailer.send(message).await {
            Ok(_) => DeliveryReport::delivered(format!("delivered email to {}", email.to)),
            Err(error) => {
                let reason = format!("failed to send email: {error}");
                warn!(to = email.to.as_str(), reason = reason.as_str(), "email rejected");
                DeliveryReport::failed(reason)
            }
        }
    }
}
