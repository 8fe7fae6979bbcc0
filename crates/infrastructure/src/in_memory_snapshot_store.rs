//! In-memory snapshot store for tests and development.

use std::collections::HashMap;

use async_trait::async_trait;
use staffly_application::SnapshotStore;
use staffly_core::AppResult;
use tokio::sync::RwLock;

/// Snapshot store backed by a process-local map.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    payloads: RwLock<HashMap<String, String>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            payloads: RwLock::new(HashMap::new()),
        }
    }

    /// Seeds a payload before hydration, bypassing the port.
    pub async fn preload(&self, store_name: impl Into<String>, payload: impl Into<String>) {
        self.payloads
            .write()
            .await
            .insert(store_name.into(), payload.into());
    }

    /// Returns whether a payload exists for the store.
    pub async fn contains(&self, store_name: &str) -> bool {
        self.payloads.read().await.contains_key(store_name)
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self, store_name: &str) -> AppResult<Option<String>> {
        Ok(self.payloads.read().await.get(store_name).cloned())
    }

    async fn save(&self, store_name: &str, payload: String) -> AppResult<()> {
        self.payloads
            .write()
            .await
            .insert(store_name.to_owned(), payload);
        Ok(())
    }

    async fn clear(&self, store_name: &str) -> AppResult<()> {
        self.payloads.write().await.remove(store_name);
        Ok(())
    }
}
