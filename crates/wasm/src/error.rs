//! Binding error types

use thiserror::Error;

/// Errors raised while moving values across the JavaScript boundary.
///
/// Surfaced to the host as a thrown `Error`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The settings object passed by the host could not be read.
    #[error("invalid matcher settings: {0}")]
    InvalidSettings(String),

    /// A result could not be converted into a JavaScript value.
    #[error("failed to convert result: {0}")]
    Conversion(String),
}

/// Result type alias for binding operations.
pub type BindingResult<T> = Result<T, BindingError>;
