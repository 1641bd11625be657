//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only recoverable failures live here. Misuse that indicates a programming
/// bug (such as building an identifier from an unsupported input) is rejected
/// at compile time instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Human-readable reason without the error-kind prefix.
    pub fn reason(&self) -> &str {
        match self {
            DomainError::Validation(msg) => msg,
        }
    }
}
