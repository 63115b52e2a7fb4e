//! Pattern for {{variable}} syntax
//!
//! Holds the single compiled regular expression shared by every matcher.

use std::sync::LazyLock;

use regex::Regex;

/// Source of the placeholder pattern.
///
/// An occurrence opens with `{{` and ends at the first `}}` that follows.
/// The body is empty or starts with a non-`}` character, and any single `}`
/// inside it sits between two non-`}` characters.
pub const PLACEHOLDER_SOURCE: &str = r"\{\{(?:[^}]+(?:\}[^}]+)*)?\}\}";

#[allow(clippy::expect_used)]
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PLACEHOLDER_SOURCE).expect("placeholder pattern is a valid regex")
});

/// Returns the process-wide compiled pattern.
#[must_use]
pub fn placeholder_pattern() -> &'static Regex {
    &PLACEHOLDER_PATTERN
}
