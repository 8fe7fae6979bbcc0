//! Job posting records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::ymd;

/// Lifecycle status of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Accepting applicants.
    Open,
    /// Temporarily not accepting applicants.
    OnHold,
    /// No longer accepting applicants.
    Closed,
}

impl JobStatus {
    /// Returns the display label for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::OnHold => "On hold",
            Self::Closed => "Closed",
        }
    }
}

/// One job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique record id.
    pub id: String,
    /// Position title.
    pub title: String,
    /// Owning department name.
    pub department: String,
    /// Work location.
    pub location: String,
    /// Employment type, e.g. "Full-time".
    pub employment_type: String,
    /// Number of open positions.
    pub openings: u32,
    /// Date the posting went live.
    pub posted_on: NaiveDate,
    /// Posting lifecycle status.
    pub status: JobStatus,
}

impl Job {
    /// Returns the fixed seed set for the job collection.
    #[must_use]
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: "7c9a4f0e-31d2-4a6b-9b51-0f6f2a8c1d3e".to_owned(),
                title: "Senior Backend Engineer".to_owned(),
                department: "Engineering".to_owned(),
                location: "Remote".to_owned(),
                employment_type: "Full-time".to_owned(),
                openings: 2,
                posted_on: ymd(2025, 6, 2),
                status: JobStatus::Open,
            },
            Self {
                id: "2e5b8d17-6c44-4f9a-8e02-b3a91c7f5d20".to_owned(),
                title: "Payroll Specialist".to_owned(),
                department: "Finance".to_owned(),
                location: "Rotterdam".to_owned(),
                employment_type: "Part-time".to_owned(),
                openings: 1,
                posted_on: ymd(2025, 6, 16),
                status: JobStatus::Open,
            },
            Self {
                id: "a41f6c88-0d7e-49b3-b6c5-52e09d4a7f11".to_owned(),
                title: "Talent Acquisition Lead".to_owned(),
                department: "People Operations".to_owned(),
                location: "Rotterdam".to_owned(),
                employment_type: "Full-time".to_owned(),
                openings: 1,
                posted_on: ymd(2025, 5, 12),
                status: JobStatus::OnHold,
            },
        ]
    }
}
