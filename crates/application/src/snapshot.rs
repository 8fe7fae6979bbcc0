//! Durable snapshot port and the persisted envelope layout.
//!
//! Every store persists one logical record addressed by its store name,
//! holding a JSON envelope `{ "state": { <field>: ... }, "version": n }`.
//! Decoding is deliberately forgiving: any malformed payload decodes to
//! "absent" so hydration can recover locally instead of surfacing an error.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use staffly_core::{AppError, AppResult};

/// Envelope version written by this process.
pub const SNAPSHOT_VERSION: u32 = 0;

/// Durable storage port: one payload per store name.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the raw payload for a store, or `None` when no snapshot
    /// exists.
    async fn load(&self, store_name: &str) -> AppResult<Option<String>>;

    /// Replaces the payload for a store.
    async fn save(&self, store_name: &str, payload: String) -> AppResult<()>;

    /// Removes the payload for a store. Removing an absent payload is not
    /// an error.
    async fn clear(&self, store_name: &str) -> AppResult<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    state: Map<String, Value>,
    version: u32,
}

/// Encodes one state field into the persisted envelope layout.
pub fn encode_state_field<T: Serialize>(field: &str, value: &T) -> AppResult<String> {
    let encoded = serde_json::to_value(value)
        .map_err(|error| AppError::Internal(format!("failed to encode '{field}': {error}")))?;

    let mut state = Map::new();
    state.insert(field.to_owned(), encoded);

    serde_json::to_string(&Envelope {
        state,
        version: SNAPSHOT_VERSION,
    })
    .map_err(|error| AppError::Internal(format!("failed to encode envelope: {error}")))
}

/// Decodes one state field from a persisted envelope payload.
///
/// Returns `None` for any malformation: unparseable JSON, a missing field,
/// or a field that no longer matches the expected shape.
#[must_use]
pub fn decode_state_field<T: DeserializeOwned>(field: &str, payload: &str) -> Option<T> {
    let envelope: Envelope = serde_json::from_str(payload).ok()?;
    let value = envelope.state.get(field)?.clone();
    serde_json::from_value(value).ok()
}
