//! Console email sender for development. Logs emails to tracing output.

use async_trait::async_trait;
use staffly_application::{DeliveryReport, EmailSender, OutboundEmail};
use tracing::info;

/// Development email sender that logs messages instead of delivering them.
#[derive(Debug, Clone, Default)]
pub struct ConsoleEmailSender;

impl ConsoleEmailSender {
    /// Creates a new console email sender.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for ConsoleEmailSender {
    async fn send(&self, email: OutboundEmail) -> DeliveryReport {
        info!(
            to = email.to.as_str(),
            subject = email.subject.as_str(),
            "--- EMAIL (console) ---\nTo: {}\nSubject: {}\n\n{}\n--- END EMAIL ---",
            email.to,
            email.subject,
            email.html_body
        );

        DeliveryReport::delivered(format!("logged email to {}", email.to))
    }
}
