//! Placeholder match types
//!
//! Value objects describing `{{variable}}` occurrences located in a string.

use serde::{Deserialize, Serialize};

/// Opening delimiter of a placeholder.
pub const OPEN_DELIMITER: &str = "{{";

/// Closing delimiter of a placeholder.
pub const CLOSE_DELIMITER: &str = "}}";

/// One located placeholder occurrence.
///
/// Offsets are counted in the unit the matcher was configured with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderMatch {
    /// Where the occurrence begins.
    pub lead_offset: usize,

    /// Where the occurrence ends (exclusive).
    pub end_offset: usize,

    /// The exact matched text, delimiters included.
    pub matching_string: String,
}

impl PlaceholderMatch {
    /// Creates a new match.
    #[must_use]
    pub fn new(lead_offset: usize, end_offset: usize, matching_string: impl Into<String>) -> Self {
        Self {
            lead_offset,
            end_offset,
            matching_string: matching_string.into(),
        }
    }

    /// Returns the text between the delimiters, untrimmed.
    ///
    /// ```
    /// use envregex_domain::PlaceholderMatch;
    ///
    /// let m = PlaceholderMatch::new(0, 10, "{{ host }}");
    /// assert_eq!(m.inner(), " host ");
    /// ```
    #[must_use]
    pub fn inner(&self) -> &str {
        self.matching_string
            .strip_prefix(OPEN_DELIMITER)
            .and_then(|rest| rest.strip_suffix(CLOSE_DELIMITER))
            .unwrap_or_default()
    }

    /// Returns true for the bare `{{}}` placeholder.
    #[must_use]
    pub fn is_empty_placeholder(&self) -> bool {
        self.matching_string == "{{}}"
    }

    /// Length of the occurrence in offset units.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end_offset.saturating_sub(self.lead_offset)
    }

    /// True when the offsets span nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A piece of an input cut at every placeholder boundary.
///
/// Concatenating the text of all segments in order reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// Text outside any placeholder.
    Literal {
        /// The literal text.
        text: String,
    },
    /// A placeholder occurrence.
    Placeholder {
        /// The occurrence.
        #[serde(flatten)]
        placeholder: PlaceholderMatch,
    },
}

impl Segment {
    /// Creates a literal segment.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal { text: text.into() }
    }

    /// Creates a placeholder segment.
    #[must_use]
    pub const fn placeholder(placeholder: PlaceholderMatch) -> Self {
        Self::Placeholder { placeholder }
    }

    /// Returns the segment's source text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal { text } => text,
            Self::Placeholder { placeholder } => &placeholder.matching_string,
        }
    }

    /// Returns true if this segment is a placeholder.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}
