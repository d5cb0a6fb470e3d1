//! reqwest adapter for [`RawApiPort`].

use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use rpgpt_shared::ErrorResponse;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Engine address used when `RPGPT_ENGINE_URL` is unset.
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:5001";

/// Long enough for a slow completion on `POST /api/choice`.
const REQUEST_TIMEOUT_SECS: u64 = 180;

#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: Url,
}

impl ApiAdapter {
    pub fn new(base_url: Url) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, base_url }
    }

    /// Parse `raw` as the engine base URL.
    pub fn from_url(raw: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        Ok(Self::new(base_url))
    }

    /// Read `RPGPT_ENGINE_URL`, falling back to [`DEFAULT_ENGINE_URL`].
    pub fn from_env() -> Result<Self, ApiError> {
        let raw = std::env::var("RPGPT_ENGINE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENGINE_URL.to_string());
        Self::from_url(&raw)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }
}

#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        decode(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        decode(response).await
    }
}

async fn decode(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

    if !status.is_success() {
        return Err(ApiError::HttpError {
            status: status.as_u16(),
            message: error_message(&text),
        });
    }
    serde_json::from_str(&text).map_err(|e| ApiError::ParseError(e.to_string()))
}

/// The `error` field of an engine error body, or the raw body otherwise.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_route_paths() {
        let adapter = ApiAdapter::from_url("http://localhost:5001").unwrap();
        assert_eq!(
            adapter.endpoint(rpgpt_shared::routes::STATE).unwrap().as_str(),
            "http://localhost:5001/api/state"
        );
    }

    #[test]
    fn test_absolute_route_replaces_base_path() {
        let adapter = ApiAdapter::from_url("http://example.com/ignored/").unwrap();
        assert_eq!(
            adapter.endpoint("/api/choice").unwrap().as_str(),
            "http://example.com/api/choice"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ApiAdapter::from_url("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_error_message_prefers_error_field() {
        assert_eq!(error_message(r#"{"error":"Invalid choice"}"#), "Invalid choice");
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
    }
}
