//! Project records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::ymd;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Scoped but not started.
    Planned,
    /// In progress.
    Active,
    /// Delivered.
    Completed,
}

impl ProjectStatus {
    /// Returns the display label for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

/// One project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique record id.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Owning department name.
    pub department: String,
    /// Project lead display name.
    pub lead: String,
    /// Target completion date.
    pub due_on: NaiveDate,
    /// Project lifecycle status.
    pub status: ProjectStatus,
}

impl Project {
    /// Returns the fixed seed set for the project collection.
    #[must_use]
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: "f60a2d8b-4c17-4e95-b3d0-81c5a7e9f242".to_owned(),
                name: "Benefits Platform Migration".to_owned(),
                department: "People Operations".to_owned(),
                lead: "Ingrid Walser".to_owned(),
                due_on: ymd(2025, 9, 30),
                status: ProjectStatus::Active,
            },
            Self {
                id: "0b7e5c39-8f12-46da-9a84-d2f60b1c4e57".to_owned(),
                name: "Quarterly Close Automation".to_owned(),
                department: "Finance".to_owned(),
                lead: "Tomas Okafor".to_owned(),
                due_on: ymd(2025, 10, 15),
                status: ProjectStatus::Planned,
            },
            Self {
                id: "c48d1f76-2b0a-4593-8c6e-5a9d3e7f0b18".to_owned(),
                name: "Internal API Gateway".to_owned(),
                department: "Engineering".to_owned(),
                lead: "Mara Lindqvist".to_owned(),
                due_on: ymd(2025, 7, 1),
                status: ProjectStatus::Completed,
            },
        ]
    }
}
