//! Per-user employee profile.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Profile data maintained for the signed-in user, keyed by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Display name shown on the profile page.
    pub display_name: String,
    /// The profile key. Two profiles are the same profile exactly when
    /// their emails are equal.
    pub email: String,
    /// Job title, editable by the user.
    pub job_title: String,
    /// Contact phone number, editable by the user.
    pub phone: String,
    /// Emergency contact line, editable by the user.
    pub emergency_contact: String,
}

impl EmployeeProfile {
    /// Builds the initial profile for a freshly authenticated identity.
    #[must_use]
    pub fn for_identity(identity: &Identity) -> Self {
        Self {
            display_name: identity.name().to_owned(),
            email: identity.email().as_str().to_owned(),
            job_title: String::new(),
            phone: String::new(),
            emergency_contact: String::new(),
        }
    }
}
