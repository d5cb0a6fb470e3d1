//! Raw API Port - Object-safe HTTP boundary
//!
//! Typed request/response handling lives in the application services, so the
//! port itself deals only in `serde_json::Value` and can sit behind
//! `Arc<dyn RawApiPort>`.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    /// GET `path` (relative to the engine URL) and decode the JSON body.
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// POST `body` as JSON to `path` and decode the JSON response.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}
