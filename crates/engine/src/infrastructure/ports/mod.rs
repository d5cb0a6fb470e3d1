//! Port traits for infrastructure boundaries.
//!
//! The completion service is the only abstraction in the engine; everything
//! else is concrete. Any OpenAI-compatible server can sit behind `LlmPort`.

mod error;
mod external;

pub use error::LlmError;
pub use external::{FinishReason, LlmPort, LlmRequest, LlmResponse, TokenUsage};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockLlmPort;
