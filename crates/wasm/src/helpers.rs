//! Host-facing operations
//!
//! Everything the exports need, expressed over Rust values. Offsets are
//! UTF-16 code units unless the host asks otherwise, so they index
//! JavaScript strings directly.

use envregex_application::PlaceholderMatcher;
use envregex_domain::{MatcherSettings, OffsetMode, OffsetUnit, PlaceholderMatch, Segment};
use serde::{Deserialize, Serialize};

/// Settings object accepted from the host. Omitted fields keep the
/// JavaScript defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSettings {
    /// Offset mode override.
    #[serde(default)]
    pub offset_mode: Option<OffsetMode>,

    /// Offset unit override.
    #[serde(default)]
    pub offset_unit: Option<OffsetUnit>,
}

impl HostSettings {
    /// Applies the overrides on top of the JavaScript defaults.
    #[must_use]
    pub fn resolve(self) -> MatcherSettings {
        let defaults = MatcherSettings::for_javascript();
        MatcherSettings::new(
            self.offset_mode.unwrap_or(defaults.offset_mode),
            self.offset_unit.unwrap_or(defaults.offset_unit),
        )
    }
}

fn js_matcher() -> PlaceholderMatcher {
    PlaceholderMatcher::new(MatcherSettings::for_javascript())
}

/// Returns true if `path` contains a placeholder.
#[must_use]
pub fn contains_env_variable(path: &str) -> bool {
    js_matcher().contains_placeholder(path)
}

/// Returns every placeholder in `path` with UTF-16 offsets.
#[must_use]
pub fn match_all_env_variables(path: &str) -> Vec<PlaceholderMatch> {
    js_matcher().find_all_placeholders(path)
}

/// Returns every placeholder in `path` using host-supplied settings.
#[must_use]
pub fn match_all_env_variables_with(path: &str, settings: HostSettings) -> Vec<PlaceholderMatch> {
    PlaceholderMatcher::new(settings.resolve()).find_all_placeholders(path)
}

/// Cuts `path` into literal and placeholder segments with UTF-16 offsets.
#[must_use]
pub fn split_env_variables(path: &str) -> Vec<Segment> {
    js_matcher().split_segments(path)
}
