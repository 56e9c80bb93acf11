//! Maps offsets in processed text back to host-file offsets.
//!
//! The template tokenizer decodes character references and collapses `\r\n`.
//! Each byte it drops is recorded as a *gap*: the host offset of a byte that
//! has no counterpart in the processed text. A decoded character always sits
//! at the front of its raw span and the gaps trail it, so a processed index
//! maps past every gap at or before its shifted host position.

use crate::{ByteOffset, Locator, Position, SourceLocation, Span};
use std::rc::Rc;
use text_size::TextSize;

/// Gap-aware offset calculator for a region of processed text.
///
/// A calculator is cheap to clone; sub-calculators created with
/// [`after_offset`](Self::after_offset) and [`shift`](Self::shift) share the
/// gap list and line index with their parent.
#[derive(Debug, Clone)]
pub struct LocationCalculator {
    locator: Rc<Locator>,
    /// Sorted host offsets of dropped bytes.
    gap_offsets: Rc<[u32]>,
    /// Host offset at which processed index 0 begins.
    base_offset: u32,
    /// Number of gaps before `base_offset`.
    base_index_of_gap: usize,
    /// Added to every processed index before mapping.
    shift_offset: i64,
}

impl LocationCalculator {
    /// Creates a calculator whose processed index 0 is the template start.
    pub fn new(locator: Rc<Locator>, gap_offsets: Rc<[u32]>) -> Self {
        let base_offset = locator.origin().offset;
        let base_index_of_gap = gap_offsets.partition_point(|&g| g < base_offset);
        Self {
            locator,
            gap_offsets,
            base_offset,
            base_index_of_gap,
            shift_offset: 0,
        }
    }

    /// Returns a calculator whose processed index 0 maps to host `offset`.
    pub fn after_offset(&self, offset: ByteOffset) -> Self {
        let base_offset = u32::from(offset);
        Self {
            locator: Rc::clone(&self.locator),
            gap_offsets: Rc::clone(&self.gap_offsets),
            base_offset,
            base_index_of_gap: self.gap_offsets.partition_point(|&g| g < base_offset),
            shift_offset: 0,
        }
    }

    /// Returns a calculator that adds `delta` to every index before mapping.
    ///
    /// Used to strip wrapper boilerplate: parsing `0(` + code + `)` maps through
    /// `shift(-2)`.
    pub fn shift(&self, delta: i64) -> Self {
        Self {
            shift_offset: self.shift_offset + delta,
            ..self.clone()
        }
    }

    /// The line index shared by every calculator of this template.
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Host offset of processed index `index`.
    ///
    /// Indices that fall before the region (wrapper boilerplate) clamp to the
    /// region start.
    pub fn offset_with_gap(&self, index: usize) -> ByteOffset {
        let shifted = (index as i64 + self.shift_offset).max(0) as u32;
        let target = i64::from(self.base_offset + shifted);
        let gaps = &self.gap_offsets[self.base_index_of_gap..];

        // Gap `j` is skipped iff `gaps[j] - j <= target`; gaps are distinct and
        // sorted, so that key never decreases and a binary search finds the count.
        let (mut lo, mut hi) = (0, gaps.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if i64::from(gaps[mid]) - mid as i64 <= target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        TextSize::from(self.base_offset + shifted + lo as u32)
    }

    /// How much to add to processed index `index` to get its host offset.
    pub fn fix_offset(&self, index: usize) -> i64 {
        i64::from(u32::from(self.offset_with_gap(index))) - index as i64
    }

    /// Host span of the processed range `[start, end)`.
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.offset_with_gap(start), self.offset_with_gap(end))
    }

    /// Host position of processed index `index`.
    pub fn position(&self, index: usize) -> Position {
        self.locator.position(self.offset_with_gap(index))
    }

    /// Host location of the processed range `[start, end)`.
    pub fn location(&self, start: usize, end: usize) -> SourceLocation {
        self.locator.location(self.span(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceOrigin;
    use pretty_assertions::assert_eq;

    fn calculator(text: &str, origin: SourceOrigin, gaps: &[u32]) -> LocationCalculator {
        LocationCalculator::new(Rc::new(Locator::new(text, origin)), Rc::from(gaps))
    }

    #[test]
    fn test_no_gaps_is_identity_plus_origin() {
        let calc = calculator("abc", SourceOrigin::new(10, 1, 0), &[]);
        assert_eq!(calc.offset_with_gap(0), TextSize::from(10));
        assert_eq!(calc.offset_with_gap(2), TextSize::from(12));
        assert_eq!(calc.fix_offset(2), 10);
    }

    #[test]
    fn test_matches_gap_walk_over_many_references() {
        // Forty `&amp;` references, each leaving four gaps.
        let text = "x&amp;".repeat(40);
        let gaps: Vec<u32> = (0..40u32)
            .flat_map(|i| (i * 6 + 2..i * 6 + 6).collect::<Vec<_>>())
            .collect();
        let calc = calculator(&text, SourceOrigin::default(), &gaps);
        for index in 0..80usize {
            let mut expected = index as u32;
            for &gap in &gaps {
                if gap > expected {
                    break;
                }
                expected += 1;
            }
            assert_eq!(calc.offset_with_gap(index), TextSize::from(expected), "{index}");
        }
        assert_eq!(calc.offset_with_gap(80), TextSize::from(240));
    }

    #[test]
    fn test_skips_gaps_of_decoded_reference() {
        // "a&lt;b" is processed as "a<b"; bytes 2..5 (`lt;`) are gaps.
        let calc = calculator("a&lt;b", SourceOrigin::default(), &[2, 3, 4]);
        assert_eq!(calc.offset_with_gap(1), TextSize::from(1));
        assert_eq!(calc.offset_with_gap(2), TextSize::from(5));
        assert_eq!(calc.span(0, 3), Span::new(0u32, 6u32));
    }

    #[test]
    fn test_after_offset_ignores_earlier_gaps() {
        // The `&lt;` gaps (2..5) precede the region starting at 6.
        let calc = calculator("x&lt; &amp;y", SourceOrigin::default(), &[2, 3, 4, 7, 8, 9, 10]);
        let sub = calc.after_offset(TextSize::from(6));
        assert_eq!(sub.offset_with_gap(0), TextSize::from(6));
        assert_eq!(sub.offset_with_gap(1), TextSize::from(11));
    }

    #[test]
    fn test_shift_strips_wrapper_and_clamps() {
        let calc = calculator("foo", SourceOrigin::new(100, 1, 0), &[]);
        let wrapped = calc.shift(-2);
        assert_eq!(wrapped.offset_with_gap(2), TextSize::from(100));
        assert_eq!(wrapped.offset_with_gap(4), TextSize::from(102));
        assert_eq!(wrapped.offset_with_gap(0), TextSize::from(100));
    }

    #[test]
    fn test_sub_calculators_do_not_mutate_parent() {
        let calc = calculator("abcdef", SourceOrigin::default(), &[]);
        let _ = calc.after_offset(TextSize::from(3)).shift(-1);
        assert_eq!(calc.offset_with_gap(1), TextSize::from(1));
    }

    #[test]
    fn test_position_uses_host_lines() {
        let calc = calculator("a\nb&amp;c", SourceOrigin::new(0, 5, 2), &[4, 5, 6, 7]);
        assert_eq!(calc.position(0), Position::new(5, 2));
        // processed "a\nb&c": index 4 is `c` at raw offset 8.
        assert_eq!(calc.position(4), Position::new(6, 6));
    }
}
