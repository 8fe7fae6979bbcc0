//! Thin HTTP-client port for the out-of-scope backend service.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use staffly_core::{AppError, AppResult};

/// Backend HTTP client port.
///
/// Every call resolves to the `data` payload of the backend response;
/// failures propagate as errors carrying the backend message. The port
/// performs exactly one attempt per call.
#[async_trait]
pub trait HttpApi: Send + Sync {
    /// Issues a GET request.
    async fn get(&self, path: &str) -> AppResult<Value>;

    /// Issues a POST request with a JSON body.
    async fn post(&self, path: &str, body: Value) -> AppResult<Value>;

    /// Issues a PUT request with a JSON body.
    async fn put(&self, path: &str, body: Value) -> AppResult<Value>;

    /// Issues a DELETE request.
    async fn delete(&self, path: &str) -> AppResult<Value>;
}

/// Read-through fetch of a whole collection from the backend.
///
/// One attempt, no retry; a payload that does not decode into the record
/// type is an error, not a reseed.
pub async fn fetch_collection<R: DeserializeOwned>(
    api: &dyn HttpApi,
    path: &str,
) -> AppResult<Vec<R>> {
    let data = api.get(path).await?;
    serde_json::from_value(data)
        .map_err(|error| AppError::Internal(format!("unexpected collection shape at '{path}': {error}")))
}
