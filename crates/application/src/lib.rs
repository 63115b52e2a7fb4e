//! Envregex Application - Placeholder matching
//!
//! Detects `{{variable}}` placeholders in strings such as file paths and
//! reports where each occurrence sits.

pub mod matcher;

pub use matcher::{PlaceholderMatcher, contains_placeholder, find_all_placeholders};
