//! Session store: the authenticated identity and its role-switch surface.

use std::sync::Arc;

use async_trait::async_trait;
use staffly_core::AppResult;
use staffly_domain::{Identity, Role, RoleValue, switch_target_roles};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::snapshot::{SnapshotStore, decode_state_field, encode_state_field};

/// Durable storage key for the session snapshot.
pub const AUTH_STORE_NAME: &str = "auth-storage";

const USER_FIELD: &str = "user";

/// The `(user, loading)` pair consumers decide on.
///
/// `loading` is `true` from process start until the store has attempted to
/// rehydrate a persisted identity; while it is `true` no consumer may treat
/// the absent user as a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// The authenticated identity, when present.
    pub user: Option<Identity>,
    /// Whether hydration is still in progress.
    pub loading: bool,
}

/// Receives the session snapshot after every completed session change.
///
/// Observers are registered at composition time; the session store notifies
/// them after hydration and after each mutation, so derived state
/// re-evaluates on every change rather than once at startup.
#[async_trait]
pub trait SessionObserver: Send + Sync {
    /// Called with the post-change snapshot.
    async fn session_changed(&self, snapshot: &SessionSnapshot);
}

/// Owns the authenticated identity and the hydration flag.
pub struct SessionService {
    storage: Arc<dyn SnapshotStore>,
    state: RwLock<SessionSnapshot>,
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl SessionService {
    /// Creates a session store in its pre-hydration state
    /// (`user = None`, `loading = true`).
    #[must_use]
    pub fn new(storage: Arc<dyn SnapshotStore>) -> Self {
        Self {
            storage,
            state: RwLock::new(SessionSnapshot {
                user: None,
                loading: true,
            }),
            observers: Vec::new(),
        }
    }

    /// Registers an observer. Composition-time only: observers registered
    /// after hydration miss the initial notification.
    pub fn register_observer(&mut self, observer: Arc<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Attempts to restore a persisted identity, then clears `loading`.
    ///
    /// An absent or corrupt auth snapshot settles into the unauthenticated
    /// state; a corrupt snapshot is also cleared so it cannot resurface. A
    /// restored identity has its current role normalized back to the base
    /// role.
    pub async fn hydrate(&self) -> AppResult<()> {
        let raw = match self.storage.load(AUTH_STORE_NAME).await {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "auth snapshot load failed, settling unauthenticated");
                None
            }
        };

        let restored = match raw.as_deref() {
            None => None,
            Some(payload) => {
                let identity = decode_state_field::<Identity>(USER_FIELD, payload);
                if identity.is_none() {
                    warn!("auth snapshot is malformed, clearing it");
                    self.storage.clear(AUTH_STORE_NAME).await?;
                }
                identity
            }
        };

        {
            let mut state = self.state.write().await;
            state.user = restored.map(|mut identity| {
                identity.normalize_rehydrated();
                info!(user = identity.email().as_str(), "session rehydrated");
                identity
            });
            state.loading = false;
        }

        self.notify().await;
        Ok(())
    }

    /// Signs an identity in: `current_role` falls back to the base role,
    /// the identity is persisted, and `loading` is cleared.
    pub async fn login(&self, mut identity: Identity) -> AppResult<()> {
        identity.normalize_rehydrated();

        {
            let mut state = self.state.write().await;
            self.persist(&identity).await?;
            info!(user = identity.email().as_str(), "signed in");
            state.user = Some(identity);
            state.loading = false;
        }

        self.notify().await;
        Ok(())
    }

    /// Signs the current user out and clears the durable auth snapshot, so
    /// the next hydration cannot resurrect the previous identity.
    pub async fn logout(&self) -> AppResult<()> {
        {
            let mut state = self.state.write().await;
            self.storage.clear(AUTH_STORE_NAME).await?;
            if let Some(user) = state.user.take() {
                info!(user = user.email().as_str(), "signed out");
            }
        }

        self.notify().await;
        Ok(())
    }

    /// Adopts `target` as the current role when the switch matrix permits
    /// it.
    ///
    /// Returns whether the session now carries `target`. An impermissible
    /// target, or the absence of a signed-in user, leaves the state
    /// unchanged and reports `false` without an error. Switching to the
    /// already current role succeeds as a no-op.
    pub async fn set_current_role(&self, target: RoleValue) -> AppResult<bool> {
        {
            let mut state = self.state.write().await;

            let Some(user) = state.user.as_mut() else {
                return Ok(false);
            };

            if !user.switch_current_role(target) {
                debug!(
                    base = user.base_role().as_str(),
                    target = target.as_str(),
                    "role switch rejected by the permission matrix"
                );
                return Ok(false);
            }

            self.persist(user).await?;
            debug!(role = target.as_str(), "current role switched");
        }

        self.notify().await;
        Ok(true)
    }

    /// Returns the roles the signed-in user may switch into, resolved to
    /// catalog entries in catalog order.
    ///
    /// Empty when the base role has no switch targets or no user is signed
    /// in.
    pub async fn available_roles_for_switching(&self) -> Vec<&'static Role> {
        match self.state.read().await.user.as_ref() {
            Some(user) => switch_target_roles(user.base_role()),
            None => Vec::new(),
        }
    }

    /// Returns the current `(user, loading)` pair.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.clone()
    }

    async fn persist(&self, identity: &Identity) -> AppResult<()> {
        let payload = encode_state_field(USER_FIELD, identity)?;
        self.storage.save(AUTH_STORE_NAME, payload).await
    }

    async fn notify(&self) {
        let snapshot = self.snapshot().await;
        for observer in &self.observers {
            observer.session_changed(&snapshot).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use staffly_core::AppResult;
    use staffly_domain::{EmailAddress, Identity, RoleValue};
    use tokio::sync::Mutex;

    use crate::snapshot::SnapshotStore;

    use super::{AUTH_STORE_NAME, SessionObserver, SessionService, SessionSnapshot};

    #[derive(Default)]
    struct FakeSnapshotStore {
        payloads: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl SnapshotStore for FakeSnapshotStore {
        async fn load(&self, store_name: &str) -> AppResult<Option<String>> {
            Ok(self.payloads.lock().await.get(store_name).cloned())
        }

        async fn save(&self, store_name: &str, payload: String) -> AppResult<()> {
            self.payloads
                .lock()
                .await
                .insert(store_name.to_owned(), payload);
            Ok(())
        }

        async fn clear(&self, store_name: &str) -> AppResult<()> {
            self.payloads.lock().await.remove(store_name);
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingObserver {
        notifications: AtomicUsize,
    }

    #[async_trait]
    impl SessionObserver for CountingObserver {
        async fn session_changed(&self, _snapshot: &SessionSnapshot) {
            self.notifications.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn identity(role: RoleValue) -> Identity {
        let email = EmailAddress::new("avery@staffly.test")
            .unwrap_or_else(|_| panic!("valid test email"));
        Identity::new("u-1", "Avery Quinn", email, role)
    }

    async fn signed_in(
        storage: Arc<FakeSnapshotStore>,
        role: RoleValue,
    ) -> SessionService {
        let service = SessionService::new(storage);
        service
            .hydrate()
            .await
            .unwrap_or_else(|_| panic!("hydrate"));
        service
            .login(identity(role))
            .await
            .unwrap_or_else(|_| panic!("login"));
        service
    }

    #[tokio::test]
    async fn hydration_without_snapshot_settles_unauthenticated() {
        let service = SessionService::new(Arc::new(FakeSnapshotStore::default()));
        assert!(service.snapshot().await.loading);

        service
            .hydrate()
            .await
            .unwrap_or_else(|_| panic!("hydrate"));

        let snapshot = service.snapshot().await;
        assert!(!snapshot.loading);
        assert!(snapshot.user.is_none());
    }

    #[tokio::test]
    async fn hydration_restores_identity_and_normalizes_current_role() {
        let storage = Arc::new(FakeSnapshotStore::default());
        let service = signed_in(Arc::clone(&storage), RoleValue::Admin).await;
        let switched = service
            .set_current_role(RoleValue::Manager)
            .await
            .unwrap_or_else(|_| panic!("switch"));
        assert!(switched);

        let reloaded = SessionService::new(storage);
        reloaded
            .hydrate()
            .await
            .unwrap_or_else(|_| panic!("hydrate"));

        let snapshot = reloaded.snapshot().await;
        let user = snapshot.user.unwrap_or_else(|| panic!("user restored"));
        assert_eq!(user.base_role(), RoleValue::Admin);
        assert_eq!(user.current_role(), RoleValue::Admin);
    }

    #[tokio::test]
    async fn corrupt_auth_snapshot_settles_unauthenticated_and_is_cleared() {
        let storage = Arc::new(FakeSnapshotStore::default());
        storage
            .payloads
            .lock()
            .await
            .insert(AUTH_STORE_NAME.to_owned(), "][ nonsense".to_owned());

        let service = SessionService::new(Arc::clone(&storage) as Arc<dyn SnapshotStore>);
        service
            .hydrate()
            .await
            .unwrap_or_else(|_| panic!("hydrate"));

        assert!(service.snapshot().await.user.is_none());
        assert!(!storage.payloads.lock().await.contains_key(AUTH_STORE_NAME));
    }

    #[tokio::test]
    async fn teamlead_cannot_switch_to_admin() {
        let storage = Arc::new(FakeSnapshotStore::default());
        let service = signed_in(storage, RoleValue::TeamLead).await;

        let switched = service
            .set_current_role(RoleValue::Admin)
            .await
            .unwrap_or_else(|_| panic!("switch"));

        assert!(!switched);
        let snapshot = service.snapshot().await;
        assert_eq!(
            snapshot.user.map(|user| user.current_role()),
            Some(RoleValue::TeamLead)
        );
    }

    #[tokio::test]
    async fn admin_switches_to_manager_and_back() {
        let storage = Arc::new(FakeSnapshotStore::default());
        let service = signed_in(storage, RoleValue::Admin).await;

        assert!(
            service
                .set_current_role(RoleValue::Manager)
                .await
                .unwrap_or_else(|_| panic!("switch"))
        );
        assert_eq!(
            service.snapshot().await.user.map(|user| user.current_role()),
            Some(RoleValue::Manager)
        );

        assert!(
            service
                .set_current_role(RoleValue::Admin)
                .await
                .unwrap_or_else(|_| panic!("switch"))
        );
        assert_eq!(
            service.snapshot().await.user.map(|user| user.current_role()),
            Some(RoleValue::Admin)
        );
    }

    #[tokio::test]
    async fn switching_to_the_current_role_is_an_idempotent_success() {
        let storage = Arc::new(FakeSnapshotStore::default());
        let service = signed_in(storage, RoleValue::Manager).await;

        let switched = service
            .set_current_role(RoleValue::Manager)
            .await
            .unwrap_or_else(|_| panic!("switch"));

        assert!(switched);
        assert_eq!(
            service.snapshot().await.user.map(|user| user.current_role()),
            Some(RoleValue::Manager)
        );
    }

    #[tokio::test]
    async fn employee_has_no_switchable_roles() {
        let storage = Arc::new(FakeSnapshotStore::default());
        let service = signed_in(storage, RoleValue::Employee).await;

        assert!(service.available_roles_for_switching().await.is_empty());
    }

    #[tokio::test]
    async fn admin_sees_targets_in_catalog_order() {
        let storage = Arc::new(FakeSnapshotStore::default());
        let service = signed_in(storage, RoleValue::Admin).await;

        let values: Vec<RoleValue> = service
            .available_roles_for_switching()
            .await
            .iter()
            .map(|role| role.value())
            .collect();
        assert_eq!(
            values,
            vec![RoleValue::Manager, RoleValue::TeamLead, RoleValue::Employee]
        );
    }

    #[tokio::test]
    async fn logout_clears_the_durable_snapshot() {
        let storage = Arc::new(FakeSnapshotStore::default());
        let service = signed_in(Arc::clone(&storage), RoleValue::Admin).await;

        service.logout().await.unwrap_or_else(|_| panic!("logout"));

        let reloaded = SessionService::new(storage);
        reloaded
            .hydrate()
            .await
            .unwrap_or_else(|_| panic!("hydrate"));
        assert!(reloaded.snapshot().await.user.is_none());
    }

    #[tokio::test]
    async fn observers_are_notified_on_every_session_change() {
        let observer = Arc::new(CountingObserver::default());
        let mut service = SessionService::new(Arc::new(FakeSnapshotStore::default()));
        service.register_observer(Arc::clone(&observer) as Arc<dyn SessionObserver>);

        service
            .hydrate()
            .await
            .unwrap_or_else(|_| panic!("hydrate"));
        service
            .login(identity(RoleValue::Admin))
            .await
            .unwrap_or_else(|_| panic!("login"));
        service
            .set_current_role(RoleValue::Manager)
            .await
            .unwrap_or_else(|_| panic!("switch"));
        service.logout().await.unwrap_or_else(|_| panic!("logout"));

        assert_eq!(observer.notifications.load(Ordering::SeqCst), 4);
    }
}
