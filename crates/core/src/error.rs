//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: callers surface the message and keep
/// working with the unmodified snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller-supplied input was rejected (blank name, bad quantity).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The named item is not part of the snapshot.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Stable machine-readable code (used in HTTP error bodies).
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidInput(_) => "invalid_input",
            DomainError::NotFound(_) => "not_found",
        }
    }
}
