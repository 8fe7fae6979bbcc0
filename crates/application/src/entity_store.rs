//! Generic persisted-collection store with hydration and reseed.
//!
//! One `EntityStore` owns one named collection. Every mutating operation
//! writes the full collection back through the snapshot port before it
//! returns, and mutations are serialized by a single writer lock, so the
//! persisted snapshot always reflects the most recent completed mutation.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use staffly_core::AppResult;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::snapshot::{SnapshotStore, decode_state_field, encode_state_field};

/// Binds a domain record type to its collection: storage key, envelope
/// field, seed set and id accessors.
pub trait EntityRecord:
    Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Durable storage key for this collection.
    const STORE_NAME: &'static str;

    /// Collection field name inside the snapshot envelope state.
    const COLLECTION_FIELD: &'static str;

    /// Fixed seed set used when the snapshot is absent, empty or corrupt.
    fn seed_collection() -> Vec<Self>;

    /// Returns the unique record id.
    fn id(&self) -> &str;

    /// Assigns a freshly generated record id.
    fn assign_id(&mut self, id: String);
}

/// Persisted store owning one collection of records.
pub struct EntityStore<R: EntityRecord> {
    storage: Arc<dyn SnapshotStore>,
    records: RwLock<Vec<R>>,
}

impl<R: EntityRecord> EntityStore<R> {
    /// Loads the collection from durable storage, reseeding when the
    /// snapshot is absent, holds an empty collection, or fails to decode.
    ///
    /// Runs to completion before the store value exists, so no consumer can
    /// observe the pre-reseed state. A reseed is written back through
    /// immediately.
    pub async fn hydrate(storage: Arc<dyn SnapshotStore>) -> AppResult<Self> {
        let raw = match storage.load(R::STORE_NAME).await {
            Ok(raw) => raw,
            Err(error) => {
                warn!(
                    store = R::STORE_NAME,
                    %error,
                    "snapshot load failed, falling back to seed data"
                );
                None
            }
        };

        let restored = raw
            .as_deref()
            .and_then(|payload| decode_state_field::<Vec<R>>(R::COLLECTION_FIELD, payload));

        let (records, reseeded) = match restored {
            Some(records) if !records.is_empty() => (records, false),
            Some(_) => {
                info!(store = R::STORE_NAME, "snapshot holds an empty collection, reseeding");
                (R::seed_collection(), true)
            }
            None => {
                if raw.is_some() {
                    warn!(store = R::STORE_NAME, "snapshot is malformed, reseeding");
                } else {
                    info!(store = R::STORE_NAME, "no snapshot found, seeding initial data");
                }
                (R::seed_collection(), true)
            }
        };

        let store = Self {
            storage,
            records: RwLock::new(records),
        };

        if reseeded {
            let records = store.records.read().await;
            store.persist(records.as_slice()).await?;
        }

        Ok(store)
    }

    /// Returns the collection, most recent first.
    pub async fn list(&self) -> Vec<R> {
        self.records.read().await.clone()
    }

    /// Returns the number of records in the collection.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns the record with the given id, if present.
    pub async fn get(&self, id: &str) -> Option<R> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Returns the records matching a predicate, preserving collection
    /// order.
    pub async fn filter(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Prepends a record to the collection and persists it.
    ///
    /// A record without an id is assigned a fresh UUID, unique even under
    /// rapid successive inserts. Returns the stored record.
    pub async fn add(&self, mut record: R) -> AppResult<R> {
        let mut records = self.records.write().await;

        if record.id().is_empty() {
            record.assign_id(Uuid::new_v4().to_string());
        }

        records.insert(0, record.clone());
        self.persist(records.as_slice()).await?;

        Ok(record)
    }

    /// Applies a field mutator to the record with the given id and
    /// persists the collection.
    ///
    /// Returns whether a record was touched; an unknown id is a silent
    /// no-op, never an error.
    pub async fn update(&self, id: &str, mutate: impl FnOnce(&mut R)) -> AppResult<bool> {
        let mut records = self.records.write().await;

        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            return Ok(false);
        };

        mutate(record);
        self.persist(records.as_slice()).await?;

        Ok(true)
    }

    /// Removes the record with the given id and persists the collection.
    ///
    /// Returns whether a record was removed; an unknown id is a silent
    /// no-op.
    pub async fn remove(&self, id: &str) -> AppResult<bool> {
        let mut records = self.records.write().await;

        let Some(index) = records.iter().position(|record| record.id() == id) else {
            return Ok(false);
        };

        records.remove(index);
        self.persist(records.as_slice()).await?;

        Ok(true)
    }

    async fn persist(&self, records: &[R]) -> AppResult<()> {
        let payload = encode_state_field(R::COLLECTION_FIELD, &records)?;
        self.storage.save(R::STORE_NAME, payload).await?;
        debug!(
            store = R::STORE_NAME,
            records = records.len(),
            "collection persisted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests;
