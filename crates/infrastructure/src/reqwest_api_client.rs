//! Backend HTTP client adapter built on `reqwest`.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use staffly_application::HttpApi;
use staffly_core::{AppError, AppResult};
use url::Url;

/// Response envelope returned by the backend: `{ "data": ... }`.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    data: Value,
}

/// HTTP client for the portal backend.
#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestApiClient {
    /// Creates a client against a backend base URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|error| AppError::Validation(format!("invalid api path '{path}': {error}")))
    }

    async fn unwrap_response(&self, response: reqwest::Response) -> AppResult<Value> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| AppError::Internal(format!("failed to read api response: {error}")))?;

        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED => AppError::Unauthorized(body),
                StatusCode::FORBIDDEN => AppError::Forbidden(body),
                StatusCode::NOT_FOUND => AppError::NotFound(body),
                _ => AppError::Internal(format!("api returned {status}: {body}")),
            });
        }

        let envelope: ApiEnvelope = serde_json::from_str(body.as_str())
            .map_err(|error| AppError::Internal(format!("malformed api envelope: {error}")))?;

        Ok(envelope.data)
    }
}

#[async_trait]
impl HttpApi for ReqwestApiClient {
    async fn get(&self, path: &str) -> AppResult<Value> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .send()
            .await
            .map_err(|error| AppError::Internal(format!("api request failed: {error}")))?;

        self.unwrap_response(response).await
    }

    async fn post(&self, path: &str, body: Value) -> AppResult<Value> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .json(&body)
            .send()
            .await
            .map_err(|error| AppError::Internal(format!("api request failed: {error}")))?;

        self.unwrap_response(response).await
    }

    async fn put(&self, path: &str, body: Value) -> AppResult<Value> {
        let response = self
            .client
            .put(self.endpoint(path)?)
            .json(&body)
            .send()
            .await
            .map_err(|error| AppError::Internal(format!("api request failed: {error}")))?;

        self.unwrap_response(response).await
    }

    async fn delete(&self, path: &str) -> AppResult<Value> {
        let response = self
            .client
            .delete(self.endpoint(path)?)
            .send()
            .await
            .map_err(|error| AppError::Internal(format!("api request failed: {error}")))?;

        self.unwrap_response(response).await
    }
}
