//! Applicant records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::ymd;

/// Offer pipeline status of an applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    /// Application received.
    Applied,
    /// Invited to interview.
    Interview,
    /// Offer letter sent.
    OfferSent,
    /// Offer accepted and onboarded.
    Hired,
    /// Application declined.
    Rejected,
}

impl OfferStatus {
    /// Returns the display label for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::OfferSent => "Offer sent",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }
}

/// One applicant in the hiring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// Unique record id.
    pub id: String,
    /// Applicant display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Job posting this application targets. Advisory reference only;
    /// never validated against the job collection.
    pub job_id: String,
    /// Date the application arrived.
    pub applied_on: NaiveDate,
    /// Expected yearly salary in euro cents.
    pub expected_salary_cents: i64,
    /// Offer pipeline status.
    pub status: OfferStatus,
}

impl Applicant {
    /// Returns the fixed seed set for the applicant collection.
    #[must_use]
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: "1f8e6a03-9d52-4c7b-84f1-6b3d0e9a5c27".to_owned(),
                name: "Leila Haddad".to_owned(),
                email: "leila.haddad@mailbox.test".to_owned(),
                phone: "+31 6 2041 8837".to_owned(),
                job_id: "7c9a4f0e-31d2-4a6b-9b51-0f6f2a8c1d3e".to_owned(),
                applied_on: ymd(2025, 6, 20),
                expected_salary_cents: 7_800_000,
                status: OfferStatus::Interview,
            },
            Self {
                id: "74b2c5d9-3e06-48a1-b58f-90c7d2e4a6f3".to_owned(),
                name: "Viktor Andersen".to_owned(),
                email: "v.andersen@mailbox.test".to_owned(),
                phone: "+45 31 88 02 76".to_owned(),
                job_id: "7c9a4f0e-31d2-4a6b-9b51-0f6f2a8c1d3e".to_owned(),
                applied_on: ymd(2025, 6, 27),
                expected_salary_cents: 8_200_000,
                status: OfferStatus::OfferSent,
            },
            Self {
                id: "ac50d8e1-7f24-4b69-93a5-1e8c6f0b2d47".to_owned(),
                name: "Rosa Jimenez".to_owned(),
                email: "rosa.jimenez@mailbox.test".to_owned(),
                phone: "+34 612 40 77 19".to_owned(),
                job_id: "2e5b8d17-6c44-4f9a-8e02-b3a91c7f5d20".to_owned(),
                applied_on: ymd(2025, 7, 1),
                expected_salary_cents: 4_100_000,
                status: OfferStatus::Applied,
            },
        ]
    }
}
