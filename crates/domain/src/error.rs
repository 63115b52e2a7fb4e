//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while reading matcher configuration.
///
/// Matching itself never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The offset mode name is not recognised.
    #[error("invalid offset mode: {0} (expected `occurrence` or `first-occurrence`)")]
    InvalidOffsetMode(String),

    /// The offset unit name is not recognised.
    #[error("invalid offset unit: {0} (expected `utf8`, `utf16` or `chars`)")]
    InvalidOffsetUnit(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
