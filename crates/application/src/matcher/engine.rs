//! Placeholder matching engine
//!
//! Detects and extracts `{{variable}}` occurrences using the shared pattern.

use std::ops::Range;

use envregex_domain::{MatcherSettings, OffsetMode, PlaceholderMatch, Segment};
use tracing::{debug, trace};

use super::offsets::OffsetConverter;
use super::pattern::placeholder_pattern;

/// Finds `{{variable}}` placeholders in strings.
///
/// The matcher carries only its settings; the compiled pattern is shared by
/// every instance, so matchers are cheap to create and safe to use from any
/// number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderMatcher {
    settings: MatcherSettings,
}

impl PlaceholderMatcher {
    /// Creates a matcher with the given settings.
    #[must_use]
    pub const fn new(settings: MatcherSettings) -> Self {
        Self { settings }
    }

    /// Returns the matcher's settings.
    #[must_use]
    pub const fn settings(&self) -> MatcherSettings {
        self.settings
    }

    /// Returns true if at least one placeholder occurs in `input`.
    ///
    /// ```
    /// use envregex_application::matcher::PlaceholderMatcher;
    ///
    /// let matcher = PlaceholderMatcher::default();
    /// assert!(matcher.contains_placeholder("/srv/{{env}}/data"));
    /// assert!(!matcher.contains_placeholder("{{incomplete"));
    /// ```
    #[must_use]
    pub fn contains_placeholder(&self, input: &str) -> bool {
        let found = placeholder_pattern().is_match(input);
        trace!(len = input.len(), found, "checked for placeholders");
        found
    }

    /// Returns every placeholder in `input`, in left-to-right order.
    ///
    /// ```
    /// use envregex_application::matcher::PlaceholderMatcher;
    ///
    /// let found = PlaceholderMatcher::default().find_all_placeholders("a{{x}}b{{y}}c");
    /// assert_eq!(found.len(), 2);
    /// assert_eq!(found[0].matching_string, "{{x}}");
    /// assert_eq!(found[0].lead_offset, 1);
    /// assert_eq!(found[1].matching_string, "{{y}}");
    /// assert_eq!(found[1].lead_offset, 7);
    /// ```
    #[must_use]
    pub fn find_all_placeholders(&self, input: &str) -> Vec<PlaceholderMatch> {
        let found: Vec<PlaceholderMatch> = self.scan(input).map(|(_, m)| m).collect();
        debug!(len = input.len(), count = found.len(), "extracted placeholders");
        found
    }

    /// Cuts `input` into literal and placeholder segments.
    ///
    /// Empty literals between adjacent placeholders are omitted.
    #[must_use]
    pub fn split_segments(&self, input: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for (span, placeholder) in self.scan(input) {
            if span.start > last_end {
                segments.push(Segment::literal(&input[last_end..span.start]));
            }
            last_end = span.end;
            segments.push(Segment::placeholder(placeholder));
        }

        if last_end < input.len() {
            segments.push(Segment::literal(&input[last_end..]));
        }

        debug!(len = input.len(), count = segments.len(), "split into segments");
        segments
    }

    /// Yields each occurrence's byte span alongside its reported match.
    fn scan<'a>(
        &self,
        input: &'a str,
    ) -> impl Iterator<Item = (Range<usize>, PlaceholderMatch)> + 'a {
        let settings = self.settings;
        let mut converter = OffsetConverter::new(input, settings.offset_unit);

        placeholder_pattern().find_iter(input).map(move |m| {
            let text = m.as_str();
            let lead = match settings.offset_mode {
                OffsetMode::Occurrence => m.start(),
                OffsetMode::FirstOccurrence => input.find(text).unwrap_or_else(|| m.start()),
            };
            let lead_offset = converter.convert(lead);
            let end_offset = converter.convert(lead + text.len());
            trace!(lead_offset, end_offset, text, "placeholder occurrence");
            (m.range(), PlaceholderMatch::new(lead_offset, end_offset, text))
        })
    }
}

/// Returns true if `input` contains a placeholder.
#[must_use]
pub fn contains_placeholder(input: &str) -> bool {
    PlaceholderMatcher::default().contains_placeholder(input)
}

/// Returns every placeholder in `input` with UTF-8 byte offsets.
#[must_use]
pub fn find_all_placeholders(input: &str) -> Vec<PlaceholderMatch> {
    PlaceholderMatcher::default().find_all_placeholders(input)
}
