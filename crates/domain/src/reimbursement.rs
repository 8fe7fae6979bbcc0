//! Reimbursement claim records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::ymd;

/// Lifecycle status of a reimbursement claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReimbursementStatus {
    /// Filed and awaiting review.
    Submitted,
    /// Approved for payment.
    Approved,
    /// Declined.
    Rejected,
    /// Paid out.
    Paid,
}

impl ReimbursementStatus {
    /// Returns the display label for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Paid => "Paid",
        }
    }
}

/// One reimbursement claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reimbursement {
    /// Unique record id.
    pub id: String,
    /// Claiming employee display name.
    pub employee: String,
    /// Expense category, e.g. "Travel".
    pub category: String,
    /// Claimed amount in euro cents.
    pub amount_cents: i64,
    /// Date the claim was filed.
    pub submitted_on: NaiveDate,
    /// Free-form claim note.
    pub note: String,
    /// Claim lifecycle status.
    pub status: ReimbursementStatus,
}

impl Reimbursement {
    /// Returns the fixed seed set for the reimbursement collection.
    #[must_use]
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: "e27b9f40-5c18-4d6a-b093-f4a1c8e62d75".to_owned(),
                employee: "Priya Raghavan".to_owned(),
                category: "Travel".to_owned(),
                amount_cents: 18_450,
                submitted_on: ymd(2025, 7, 21),
                note: "Client onboarding visit, train fare".to_owned(),
                status: ReimbursementStatus::Submitted,
            },
            Self {
                id: "49c6d2e8-0a73-4f51-86b9-3e0d7c5a1f92".to_owned(),
                employee: "Jonas Beck".to_owned(),
                category: "Equipment".to_owned(),
                amount_cents: 7_999,
                submitted_on: ymd(2025, 7, 3),
                note: "Replacement headset".to_owned(),
                status: ReimbursementStatus::Approved,
            },
            Self {
                id: "8d05a1c7-6e39-42b4-9f80-b27e4d6c0a53".to_owned(),
                employee: "Mara Lindqvist".to_owned(),
                category: "Training".to_owned(),
                amount_cents: 42_000,
                submitted_on: ymd(2025, 6, 10),
                note: "Conference registration".to_owned(),
                status: ReimbursementStatus::Paid,
            },
        ]
    }
}
