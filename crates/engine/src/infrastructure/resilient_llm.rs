//! Retrying wrapper around a completion client
//!
//! Re-sends a request after transient failures (see [`LlmError::is_transient`])
//! with exponential backoff and jitter. With `max_retries == 0` it is a
//! transparent pass-through.

use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest, LlmResponse};

/// Backoff settings for [`ResilientLlmClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Extra attempts after the first one
    pub max_retries: u32,
    /// Delay before the first retry
    pub base_delay_ms: u64,
    /// Ceiling for the exponential delay
    pub max_delay_ms: u64,
    /// Fraction (0.0-1.0) of the delay randomised in either direction
    pub jitter_factor: f64,
}

impl RetryConfig {
    /// Delay before retry number `retry` (1-based), before jitter.
    pub fn backoff_ms(&self, retry: u32) -> u64 {
        let factor = 2u64.saturating_pow(retry.saturating_sub(1));
        self.base_delay_ms
            .saturating_mul(factor)
            .min(self.max_delay_ms)
    }

    fn jittered_ms(&self, retry: u32) -> u64 {
        let delay = self.backoff_ms(retry);
        let spread = (delay as f64 * self.jitter_factor) as i64;
        if spread <= 0 {
            return delay;
        }
        let offset = rand::thread_rng().gen_range(-spread..=spread);
        (delay as i64 + offset).max(0) as u64
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 500,
            max_delay_ms: 8_000,
            jitter_factor: 0.2,
        }
    }
}

/// Completion client that retries transient failures of an inner client.
pub struct ResilientLlmClient {
    inner: Arc<dyn LlmPort>,
    config: RetryConfig,
}

impl ResilientLlmClient {
    pub fn new(inner: Arc<dyn LlmPort>, config: RetryConfig) -> Self {
        Self { inner, config }
    }
}

#[async_trait]
impl LlmPort for ResilientLlmClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let mut retry = 0;
        loop {
            let error = match self.inner.generate(request.clone()).await {
                Ok(response) => {
                    if retry > 0 {
                        tracing::info!(retries = retry, "Completion succeeded after retry");
                    }
                    return Ok(response);
                }
                Err(e) => e,
            };

            if !error.is_transient() {
                tracing::error!(error = %error, "Completion failed with non-retryable error");
                return Err(error);
            }
            if retry >= self.config.max_retries {
                tracing::error!(
                    attempts = retry + 1,
                    error = %error,
                    "Completion failed after all retry attempts"
                );
                return Err(error);
            }

            retry += 1;
            let delay = self.config.jittered_ms(retry);
            tracing::warn!(
                retry,
                max_retries = self.config.max_retries,
                delay_ms = delay,
                error = %error,
                "Completion failed, retrying"
            );
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails with `error` for the first `failures` calls, then answers.
    struct FlakyLlm {
        failures: u32,
        calls: AtomicU32,
        error: LlmError,
    }

    impl FlakyLlm {
        fn new(failures: u32, error: LlmError) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
                error,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmPort for FlakyLlm {
        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(self.error.clone())
            } else {
                Ok(LlmResponse::text("Story: You press on.\nChoices:\n1. Rest"))
            }
        }
    }

    fn fast(max_retries: u32) -> RetryConfig {
        RetryConfig {
            max_retries,
            base_delay_ms: 1,
            max_delay_ms: 5,
            jitter_factor: 0.0,
        }
    }

    fn unavailable() -> LlmError {
        LlmError::Status {
            status: 503,
            message: "overloaded".into(),
        }
    }

    #[tokio::test]
    async fn test_disabled_makes_a_single_attempt() {
        let flaky = Arc::new(FlakyLlm::new(1, unavailable()));
        let client = ResilientLlmClient::new(flaky.clone(), fast(0));

        assert!(client.generate(LlmRequest::new("Go north")).await.is_err());
        assert_eq!(flaky.calls(), 1);
    }

    #[tokio::test]
    async fn test_recovers_from_transient_failures() {
        let flaky = Arc::new(FlakyLlm::new(2, unavailable()));
        let client = ResilientLlmClient::new(flaky.clone(), fast(3));

        let response = client.generate(LlmRequest::new("Go north")).await.unwrap();

        assert!(response.content.starts_with("Story:"));
        assert_eq!(flaky.calls(), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let flaky = Arc::new(FlakyLlm::new(10, LlmError::RequestFailed("timeout".into())));
        let client = ResilientLlmClient::new(flaky.clone(), fast(2));

        assert!(client.generate(LlmRequest::new("Go north")).await.is_err());
        assert_eq!(flaky.calls(), 3);
    }

    #[tokio::test]
    async fn test_auth_failure_is_not_retried() {
        let flaky = Arc::new(FlakyLlm::new(
            10,
            LlmError::Status {
                status: 401,
                message: "bad key".into(),
            },
        ));
        let client = ResilientLlmClient::new(flaky.clone(), fast(3));

        let err = client.generate(LlmRequest::new("Go north")).await.unwrap_err();

        assert!(matches!(err, LlmError::Status { status: 401, .. }));
        assert_eq!(flaky.calls(), 1);
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let config = RetryConfig {
            max_retries: 5,
            base_delay_ms: 500,
            max_delay_ms: 3_000,
            jitter_factor: 0.0,
        };

        assert_eq!(config.backoff_ms(1), 500);
        assert_eq!(config.backoff_ms(2), 1_000);
        assert_eq!(config.backoff_ms(3), 2_000);
        assert_eq!(config.backoff_ms(4), 3_000);
        assert_eq!(config.jittered_ms(4), 3_000);
    }
}
