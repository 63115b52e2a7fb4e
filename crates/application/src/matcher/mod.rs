//! Placeholder matching module
//!
//! Provides detection and extraction of `{{variable}}` placeholders in strings.
//!
//! # Usage
//!
//! ```
//! use envregex_application::matcher::PlaceholderMatcher;
//! use envregex_domain::MatcherSettings;
//!
//! let matcher = PlaceholderMatcher::new(MatcherSettings::for_javascript());
//!
//! let found = matcher.find_all_placeholders("/data/{{region}}/{{bucket}}");
//! assert_eq!(found[0].matching_string, "{{region}}");
//! assert_eq!(found[0].inner(), "region");
//! assert_eq!(found[1].lead_offset, 17);
//! ```

pub mod engine;
pub mod offsets;
pub mod pattern;

pub use engine::{PlaceholderMatcher, contains_placeholder, find_all_placeholders};
pub use offsets::OffsetConverter;
pub use pattern::{PLACEHOLDER_SOURCE, placeholder_pattern};
