//! Department records.

use serde::{Deserialize, Serialize};

/// One department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique record id.
    pub id: String,
    /// Department name.
    pub name: String,
    /// Department head display name.
    pub head: String,
    /// Current staff count.
    pub headcount: u32,
}

impl Department {
    /// Returns the fixed seed set for the department collection.
    #[must_use]
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: "d3f1b5a9-7e20-4c8d-a614-9b0c2e5f7a83".to_owned(),
                name: "Engineering".to_owned(),
                head: "Mara Lindqvist".to_owned(),
                headcount: 34,
            },
            Self {
                id: "58c2e7d0-1a4f-4b96-8d73-c5e9f0a21b64".to_owned(),
                name: "Finance".to_owned(),
                head: "Tomas Okafor".to_owned(),
                headcount: 11,
            },
            Self {
                id: "91b0d6c4-3f58-47e2-a9c1-7d24e8b5f036".to_owned(),
                name: "People Operations".to_owned(),
                head: "Ingrid Walser".to_owned(),
                headcount: 8,
            },
        ]
    }
}
