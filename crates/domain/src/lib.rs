//! Envregex Domain - Core value types
//!
//! This crate defines the value objects produced by the placeholder matcher.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod placeholder;
pub mod settings;

pub use error::{DomainError, DomainResult};
pub use placeholder::{CLOSE_DELIMITER, OPEN_DELIMITER, PlaceholderMatch, Segment};
pub use settings::{MatcherSettings, OffsetMode, OffsetUnit};
