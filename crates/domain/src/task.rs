//! Task records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::ymd;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Returns the display label for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "To do",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }
}

/// One task assigned inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Unique record id.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Owning project name.
    pub project: String,
    /// Assignee display name.
    pub assignee: String,
    /// Due date.
    pub due_on: NaiveDate,
    /// Task lifecycle status.
    pub status: TaskStatus,
}

impl TaskRecord {
    /// Returns the fixed seed set for the task collection.
    #[must_use]
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: "3a8f0c5d-9b21-4e76-a4d8-7c15e2b9f064".to_owned(),
                title: "Export legacy benefits data".to_owned(),
                project: "Benefits Platform Migration".to_owned(),
                assignee: "Priya Raghavan".to_owned(),
                due_on: ymd(2025, 8, 8),
                status: TaskStatus::InProgress,
            },
            Self {
                id: "b95d2e70-6f48-4a13-8b6c-04d7f1a3c582".to_owned(),
                title: "Draft close checklist".to_owned(),
                project: "Quarterly Close Automation".to_owned(),
                assignee: "Tomas Okafor".to_owned(),
                due_on: ymd(2025, 8, 22),
                status: TaskStatus::Todo,
            },
            Self {
                id: "6e14c9a2-0d83-45fb-97e5-2a8b6d0f4c31".to_owned(),
                title: "Decommission staging gateway".to_owned(),
                project: "Internal API Gateway".to_owned(),
                assignee: "Mara Lindqvist".to_owned(),
                due_on: ymd(2025, 7, 4),
                status: TaskStatus::Done,
            },
        ]
    }
}
