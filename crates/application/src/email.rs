//! Outbound email port.

use async_trait::async_trait;

/// One outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Recipient address.
    pub to: String,
    /// Optional sender override; adapters fall back to their configured
    /// sender when absent.
    pub from: Option<String>,
    /// Subject line.
    pub subject: String,
    /// HTML message body.
    pub html_body: String,
}

/// Structured delivery outcome.
///
/// The email boundary never propagates an error: adapter-internal failures
/// are converted into a report with `success = false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Whether the message was handed off for delivery.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
}

impl DeliveryReport {
    /// Builds a successful report.
    #[must_use]
    pub fn delivered(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Builds a failure report.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Outbound email sender port.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Attempts delivery and reports the outcome. Never errors.
    async fn send(&self, email: OutboundEmail) -> DeliveryReport;
}
