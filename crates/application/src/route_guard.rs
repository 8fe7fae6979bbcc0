//! Redirect decisions derived from the session `(user, loading)` pair.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::session::{SessionObserver, SessionSnapshot};

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration has not settled; no decision may be taken yet.
    Pending,
    /// The current surface may be shown.
    Stay,
    /// The user must be sent to the login surface.
    RedirectToLogin,
}

/// Decides, on every session change, whether the current surface requires a
/// redirect to the login surface.
///
/// State machine: `Unknown (loading)` → `Authenticated (user present)` |
/// `Unauthenticated (no user, not loading)`. Only the unauthenticated state
/// away from the login surface redirects; while `loading` no transition
/// happens at all.
pub struct RouteGuard {
    login_surface: String,
    location: RwLock<String>,
    decision: RwLock<GuardDecision>,
}

impl RouteGuard {
    /// Creates a guard for a login surface path, starting on `location`.
    #[must_use]
    pub fn new(login_surface: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            login_surface: login_surface.into(),
            location: RwLock::new(location.into()),
            decision: RwLock::new(GuardDecision::Pending),
        }
    }

    /// Records a navigation to a new surface.
    pub async fn set_location(&self, location: impl Into<String>) {
        *self.location.write().await = location.into();
    }

    /// Returns the surface the guard currently considers active.
    pub async fn location(&self) -> String {
        self.location.read().await.clone()
    }

    /// Returns the latest evaluated decision.
    pub async fn decision(&self) -> GuardDecision {
        *self.decision.read().await
    }

    /// Evaluates the guard against a session snapshot.
    ///
    /// A redirect also moves the recorded location to the login surface, so
    /// repeated unauthenticated evaluations settle on `Stay`.
    pub async fn evaluate(&self, snapshot: &SessionSnapshot) -> GuardDecision {
        let location = self.location.read().await.clone();
        let next = decide(
            snapshot.user.is_some(),
            snapshot.loading,
            location == self.login_surface,
        );

        if next == GuardDecision::RedirectToLogin {
            debug!(from = location.as_str(), "redirecting to login");
            *self.location.write().await = self.login_surface.clone();
        }

        *self.decision.write().await = next;
        next
    }
}

/// Pure decision function over `(user present, loading, on login surface)`.
fn decide(user_present: bool, loading: bool, on_login_surface: bool) -> GuardDecision {
    if loading {
        return GuardDecision::Pending;
    }

    if user_present || on_login_surface {
        return GuardDecision::Stay;
    }

    GuardDecision::RedirectToLogin
}

#[async_trait]
impl SessionObserver for RouteGuard {
    async fn session_changed(&self, snapshot: &SessionSnapshot) {
        self.evaluate(snapshot).await;
    }
}
