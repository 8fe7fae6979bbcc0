//! Derived profile state keyed by the signed-in user's email.

use async_trait::async_trait;
use staffly_domain::{EmployeeProfile, Identity};
use tokio::sync::RwLock;
use tracing::debug;

use crate::session::{SessionObserver, SessionSnapshot};

#[derive(Debug)]
struct ProfileState {
    profile: EmployeeProfile,
    dirty: bool,
}

/// Re-initializes the employee profile whenever the session identity moves
/// to a different user.
///
/// "Different" is decided by email equality, never by object identity:
/// re-notifying with the same email keeps the current profile, including
/// unsaved local edits.
#[derive(Debug, Default)]
pub struct ProfileSynchronizer {
    state: RwLock<Option<ProfileState>>,
}

impl ProfileSynchronizer {
    /// Creates an empty synchronizer with no profile loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(None),
        }
    }

    /// Initializes the profile for an identity.
    ///
    /// Idempotent per email: a repeat call for the already-loaded email is
    /// a no-op that preserves unsaved edits; a different email replaces the
    /// profile with a fresh one built from the identity.
    pub async fn initialize_for(&self, identity: &Identity) {
        let mut state = self.state.write().await;

        if let Some(existing) = state.as_ref()
            && existing.profile.email == identity.email().as_str()
        {
            return;
        }

        debug!(user = identity.email().as_str(), "profile initialized");
        *state = Some(ProfileState {
            profile: EmployeeProfile::for_identity(identity),
            dirty: false,
        });
    }

    /// Drops the profile (sign-out).
    pub async fn clear(&self) {
        *self.state.write().await = None;
    }

    /// Returns the current profile, if one is loaded.
    pub async fn profile(&self) -> Option<EmployeeProfile> {
        self.state
            .read()
            .await
            .as_ref()
            .map(|state| state.profile.clone())
    }

    /// Applies a local edit to the loaded profile and marks it unsaved.
    ///
    /// Returns whether a profile was loaded to edit.
    pub async fn edit(&self, mutate: impl FnOnce(&mut EmployeeProfile)) -> bool {
        let mut state = self.state.write().await;

        let Some(state) = state.as_mut() else {
            return false;
        };

        mutate(&mut state.profile);
        state.dirty = true;
        true
    }

    /// Returns whether the loaded profile carries unsaved edits.
    pub async fn has_unsaved_edits(&self) -> bool {
        self.state
            .read()
            .await
            .as_ref()
            .is_some_and(|state| state.dirty)
    }
}

#[async_trait]
impl SessionObserver for ProfileSynchronizer {
    async fn session_changed(&self, snapshot: &SessionSnapshot) {
        if snapshot.loading {
            return;
        }

        match snapshot.user.as_ref() {
            Some(user) => self.initialize_for(user).await,
            None => self.clear().await,
        }
    }
}
