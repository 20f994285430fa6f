//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A price input could not be parsed as a finite number.
    #[error("invalid price: {0}")]
    InvalidPrice(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
