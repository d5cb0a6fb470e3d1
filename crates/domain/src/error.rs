//! Unified error types for the domain layer
//!
//! Provides a common error type for game state operations, so adapters can
//! map failures to transport responses without string matching.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The submitted choice is empty or not among the currently offered choices
    #[error("Invalid choice: {0:?}")]
    InvalidChoice(String),

    /// A replacement game state failed the shape check
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

impl DomainError {
    /// Create an invalid choice error
    pub fn invalid_choice(choice: impl Into<String>) -> Self {
        Self::InvalidChoice(choice.into())
    }

    /// Create an invalid state error.
    ///
    /// # Example
    /// ```ignore
    /// if !value.is_object() {
    ///     return Err(DomainError::invalid_state("expected a JSON object"));
    /// }
    /// ```
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
