//! Matcher Settings Domain Model
//!
//! Controls how occurrence offsets are reported to callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How the lead offset of an occurrence is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetMode {
    /// Position of this occurrence in the left-to-right scan (default).
    #[default]
    Occurrence,
    /// Position of the first occurrence of the matched text anywhere in the input.
    ///
    /// Repeated placeholders all report the offset of the earliest one.
    FirstOccurrence,
}

impl OffsetMode {
    /// Returns the kebab-case name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Occurrence => "occurrence",
            Self::FirstOccurrence => "first-occurrence",
        }
    }
}

impl fmt::Display for OffsetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OffsetMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "occurrence" => Ok(Self::Occurrence),
            "first-occurrence" | "first_occurrence" => Ok(Self::FirstOccurrence),
            other => Err(DomainError::InvalidOffsetMode(other.to_string())),
        }
    }
}

/// The unit offsets are counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetUnit {
    /// UTF-8 bytes, usable directly for slicing a Rust `str` (default).
    #[default]
    Utf8,
    /// UTF-16 code units, the index unit of JavaScript strings.
    Utf16,
    /// Unicode scalar values.
    Chars,
}

impl OffsetUnit {
    /// Returns the kebab-case name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf16 => "utf16",
            Self::Chars => "chars",
        }
    }

    /// Number of units `ch` occupies.
    #[must_use]
    pub const fn width_of(self, ch: char) -> usize {
        match self {
            Self::Utf8 => ch.len_utf8(),
            Self::Utf16 => ch.len_utf16(),
            Self::Chars => 1,
        }
    }
}

impl fmt::Display for OffsetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OffsetUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" | "bytes" => Ok(Self::Utf8),
            "utf16" | "utf-16" => Ok(Self::Utf16),
            "chars" | "char" => Ok(Self::Chars),
            other => Err(DomainError::InvalidOffsetUnit(other.to_string())),
        }
    }
}

/// Settings for a placeholder matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatcherSettings {
    /// How lead offsets are determined.
    #[serde(default)]
    pub offset_mode: OffsetMode,

    /// Unit offsets are counted in.
    #[serde(default)]
    pub offset_unit: OffsetUnit,
}

impl MatcherSettings {
    /// Creates settings from explicit values.
    #[must_use]
    pub const fn new(offset_mode: OffsetMode, offset_unit: OffsetUnit) -> Self {
        Self {
            offset_mode,
            offset_unit,
        }
    }

    /// Settings for callers indexing JavaScript strings.
    #[must_use]
    pub const fn for_javascript() -> Self {
        Self::new(OffsetMode::Occurrence, OffsetUnit::Utf16)
    }

    /// Returns a copy with a different offset mode.
    #[must_use]
    pub const fn with_offset_mode(mut self, offset_mode: OffsetMode) -> Self {
        self.offset_mode = offset_mode;
        self
    }

    /// Returns a copy with a different offset unit.
    #[must_use]
    pub const fn with_offset_unit(mut self, offset_unit: OffsetUnit) -> Self {
        self.offset_unit = offset_unit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_settings() {
        let settings = MatcherSettings::default();
        assert_eq!(settings.offset_mode, OffsetMode::Occurrence);
        assert_eq!(settings.offset_unit, OffsetUnit::Utf8);
    }

    #[test]
    fn test_javascript_settings_use_utf16() {
        let settings = MatcherSettings::for_javascript();
        assert_eq!(settings.offset_unit, OffsetUnit::Utf16);
        assert_eq!(settings.offset_mode, OffsetMode::Occurrence);
    }

    #[test]
    fn test_parse_offset_mode() {
        assert_eq!("occurrence".parse::<OffsetMode>(), Ok(OffsetMode::Occurrence));
        assert_eq!(
            "First-Occurrence".parse::<OffsetMode>(),
            Ok(OffsetMode::FirstOccurrence)
        );
        assert_eq!(
            "last".parse::<OffsetMode>(),
            Err(DomainError::InvalidOffsetMode("last".to_string()))
        );
    }

    #[test]
    fn test_parse_offset_unit() {
        assert_eq!("utf16".parse::<OffsetUnit>(), Ok(OffsetUnit::Utf16));
        assert_eq!("bytes".parse::<OffsetUnit>(), Ok(OffsetUnit::Utf8));
        assert_eq!("chars".parse::<OffsetUnit>(), Ok(OffsetUnit::Chars));
        assert!("words".parse::<OffsetUnit>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for mode in [OffsetMode::Occurrence, OffsetMode::FirstOccurrence] {
            assert_eq!(mode.to_string().parse::<OffsetMode>(), Ok(mode));
        }
        for unit in [OffsetUnit::Utf8, OffsetUnit::Utf16, OffsetUnit::Chars] {
            assert_eq!(unit.to_string().parse::<OffsetUnit>(), Ok(unit));
        }
    }

    #[test]
    fn test_unit_widths() {
        assert_eq!(OffsetUnit::Utf8.width_of('é'), 2);
        assert_eq!(OffsetUnit::Utf16.width_of('😀'), 2);
        assert_eq!(OffsetUnit::Utf16.width_of('é'), 1);
        assert_eq!(OffsetUnit::Chars.width_of('😀'), 1);
    }

    #[test]
    fn test_deserialize_partial_settings() {
        let settings: MatcherSettings =
            serde_json::from_str(r#"{"offsetUnit":"utf16"}"#).unwrap();
        assert_eq!(settings, MatcherSettings::for_javascript());

        let settings: MatcherSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, MatcherSettings::default());
    }

    #[test]
    fn test_serialize_settings() {
        let json = serde_json::to_string(
            &MatcherSettings::default().with_offset_mode(OffsetMode::FirstOccurrence),
        )
        .unwrap();
        assert_eq!(json, r#"{"offsetMode":"first-occurrence","offsetUnit":"utf8"}"#);
    }
}
