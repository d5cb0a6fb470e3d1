//! Errors shared by every engine call.

/// Failure talking to the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The engine answered with a non-2xx status
    #[error("Engine returned {status}: {message}")]
    HttpError { status: u16, message: String },
    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
