//! Span and byte offset types for source positions.

use text_size::{TextRange, TextSize};

/// A byte offset into the host file.
pub type ByteOffset = TextSize;

/// A half-open byte range `[start, end)` in host-file coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// The start byte offset (inclusive).
    pub start: ByteOffset,
    /// The end byte offset (exclusive).
    pub end: ByteOffset,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[inline]
    pub fn new(start: impl Into<ByteOffset>, end: impl Into<ByteOffset>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Creates a span from `usize` offsets.
    ///
    /// Template texts are bounded by `u32::MAX` bytes, which `LineIndex::new`
    /// asserts once per template.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        Self::new(start as u32, end as u32)
    }

    /// Creates an empty span at the given offset.
    #[inline]
    pub fn empty(offset: impl Into<ByteOffset>) -> Self {
        let offset = offset.into();
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Start offset as `usize`.
    #[inline]
    pub fn lo(&self) -> usize {
        u32::from(self.start) as usize
    }

    /// End offset as `usize`.
    #[inline]
    pub fn hi(&self) -> usize {
        u32::from(self.end) as usize
    }

    /// Returns the length of this span in bytes.
    #[inline]
    pub fn len(&self) -> TextSize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if this span contains the given offset.
    #[inline]
    pub fn contains(&self, offset: ByteOffset) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns true if this span contains the given span entirely.
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns a span covering both this span and another.
    #[inline]
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: std::cmp::min(self.start, other.start),
            end: std::cmp::max(self.end, other.end),
        }
    }

    /// Returns this span with its end moved to `end`.
    #[inline]
    pub fn with_end(self, end: ByteOffset) -> Span {
        Span {
            start: self.start,
            end,
        }
    }

    /// Returns the text this span covers, given the host text it points into
    /// and the host offset at which `text` begins.
    pub fn slice<'a>(&self, text: &'a str, text_offset: ByteOffset) -> &'a str {
        let base = u32::from(text_offset) as usize;
        let lo = self.lo().saturating_sub(base).min(text.len());
        let hi = self.hi().saturating_sub(base).clamp(lo, text.len());
        text.get(lo..hi).unwrap_or_default()
    }

    /// Converts this span to a `TextRange`.
    #[inline]
    pub fn to_range(self) -> TextRange {
        TextRange::new(self.start, self.end)
    }
}

impl From<TextRange> for Span {
    fn from(range: TextRange) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
        }
    }
}

impl From<Span> for TextRange {
    fn from(span: Span) -> Self {
        TextRange::new(span.start, span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains() {
        let span = Span::new(5u32, 15u32);
        assert!(!span.contains(TextSize::from(4)));
        assert!(span.contains(TextSize::from(5)));
        assert!(!span.contains(TextSize::from(15)));
        assert!(span.contains_span(Span::new(6u32, 15u32)));
        assert!(!span.contains_span(Span::new(4u32, 10u32)));
    }

    #[test]
    fn test_span_cover() {
        let covered = Span::new(5u32, 10u32).cover(Span::new(8u32, 20u32));
        assert_eq!(covered, Span::new(5u32, 20u32));
    }

    #[test]
    fn test_span_slice_with_host_offset() {
        // The template text starts at host offset 100.
        let text = "<div>hi</div>";
        let span = Span::new(105u32, 107u32);
        assert_eq!(span.slice(text, TextSize::from(100)), "hi");
    }

    #[test]
    fn test_span_slice_out_of_range_is_empty() {
        let span = Span::new(50u32, 60u32);
        assert_eq!(span.slice("abc", TextSize::from(0)), "");
    }
}
