//! Offset conversion
//!
//! The regex engine reports UTF-8 byte offsets. Hosts index strings in
//! other units, so offsets are translated before they leave the matcher.

use envregex_domain::OffsetUnit;

/// Translates byte offsets of one input into a target unit.
///
/// Walks forward from the last converted position, so a left-to-right
/// sequence of offsets costs one pass over the input in total.
#[derive(Debug)]
pub struct OffsetConverter<'a> {
    input: &'a str,
    unit: OffsetUnit,
    byte_pos: usize,
    unit_pos: usize,
}

impl<'a> OffsetConverter<'a> {
    /// Creates a converter for `input`.
    #[must_use]
    pub const fn new(input: &'a str, unit: OffsetUnit) -> Self {
        Self {
            input,
            unit,
            byte_pos: 0,
            unit_pos: 0,
        }
    }

    /// Converts a byte offset on a char boundary of the input.
    ///
    /// Offsets past the end of the input are clamped to its length.
    pub fn convert(&mut self, byte_offset: usize) -> usize {
        if self.unit == OffsetUnit::Utf8 {
            return byte_offset.min(self.input.len());
        }

        if byte_offset < self.byte_pos {
            self.byte_pos = 0;
            self.unit_pos = 0;
        }

        let target = byte_offset.min(self.input.len());
        let Some(window) = self.input.get(self.byte_pos..target) else {
            return self.unit_pos;
        };

        let unit = self.unit;
        self.unit_pos += window.chars().map(|ch| unit.width_of(ch)).sum::<usize>();
        self.byte_pos = target;
        self.unit_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_utf8_is_identity() {
        let mut conv = OffsetConverter::new("héllo", OffsetUnit::Utf8);
        assert_eq!(conv.convert(3), 3);
        assert_eq!(conv.convert(0), 0);
    }

    #[test]
    fn test_utf16_counts_code_units() {
        // 'é' is 2 bytes / 1 unit, '😀' is 4 bytes / 2 units
        let input = "é😀x";
        let mut conv = OffsetConverter::new(input, OffsetUnit::Utf16);
        assert_eq!(conv.convert(2), 1);
        assert_eq!(conv.convert(6), 3);
        assert_eq!(conv.convert(7), 4);
    }

    #[test]
    fn test_chars_counts_scalar_values() {
        let mut conv = OffsetConverter::new("é😀x", OffsetUnit::Chars);
        assert_eq!(conv.convert(6), 2);
        assert_eq!(conv.convert(7), 3);
    }

    #[test]
    fn test_backwards_offset_restarts() {
        let mut conv = OffsetConverter::new("ééé", OffsetUnit::Chars);
        assert_eq!(conv.convert(6), 3);
        assert_eq!(conv.convert(2), 1);
        assert_eq!(conv.convert(4), 2);
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let mut conv = OffsetConverter::new("ab", OffsetUnit::Utf16);
        assert_eq!(conv.convert(10), 2);
    }
}
