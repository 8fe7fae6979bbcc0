//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod console_email_sender;
mod document_templates;
mod in_memory_snapshot_store;
mod json_file_snapshot_store;
mod offer_dispatch;
mod reqwest_api_client;
mod smtp_email_sender;

pub use console_email_sender::ConsoleEmailSender;
pub use document_templates::{
    interview_invitation_html, offer_letter_html, reimbursement_statement_html,
};
pub use in_memory_snapshot_store::InMemorySnapshotStore;
pub use json_file_snapshot_store::JsonFileSnapshotStore;
pub use offer_dispatch::send_offer_letter;
pub use reqwest_api_client::ReqwestApiClient;
pub use smtp_email_sender::{SmtpEmailConfig, SmtpEmailSender};
