//! Error types for port operations.

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    /// The request never produced an HTTP response (connect, timeout, I/O).
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    /// The service answered with a non-success status.
    #[error("LLM service returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The body could not be decoded or carried no completion.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Whether sending the same request again could plausibly succeed.
    ///
    /// Rate limits and server-side failures are transient; auth failures and
    /// rejected requests are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RequestFailed(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidResponse(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> LlmError {
        LlmError::Status {
            status: code,
            message: String::new(),
        }
    }

    #[test]
    fn test_transient_classification() {
        assert!(LlmError::RequestFailed("connection reset".into()).is_transient());
        assert!(status(429).is_transient());
        assert!(status(503).is_transient());
        assert!(!status(400).is_transient());
        assert!(!status(401).is_transient());
        assert!(!LlmError::InvalidResponse("no choices".into()).is_transient());
    }
}
