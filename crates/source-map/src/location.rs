//! Host-file positions for a template embedded in a larger source file.

use crate::{ByteOffset, LineIndex, Span};
use text_size::TextSize;

/// Where the template text begins inside the host file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceOrigin {
    /// Byte offset of the first template byte in the host file.
    pub offset: u32,
    /// 1-based line of the first template byte.
    pub line: u32,
    /// 0-based byte column of the first template byte.
    pub column: u32,
}

impl SourceOrigin {
    /// Creates a new origin.
    pub fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl Default for SourceOrigin {
    fn default() -> Self {
        Self::new(0, 1, 0)
    }
}

/// A line/column position in the host file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// 1-based line.
    pub line: u32,
    /// 0-based byte column.
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Start and end positions of a node or token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    /// Position of the first byte.
    pub start: Position,
    /// Position just past the last byte.
    pub end: Position,
}

/// Converts template-relative and host offsets into host positions.
#[derive(Debug, Clone)]
pub struct Locator {
    origin: SourceOrigin,
    index: LineIndex,
    len: u32,
}

impl Locator {
    /// Indexes `text`, which starts at `origin` in the host file.
    pub fn new(text: &str, origin: SourceOrigin) -> Self {
        let index = LineIndex::new(text);
        Self {
            origin,
            index,
            len: text.len() as u32,
        }
    }

    /// The origin of the template text.
    #[inline]
    pub fn origin(&self) -> SourceOrigin {
        self.origin
    }

    /// Converts a template-relative index to a host offset.
    #[inline]
    pub fn host(&self, index: usize) -> ByteOffset {
        TextSize::from(self.origin.offset + index as u32)
    }

    /// Converts a host offset back to a template-relative index.
    #[inline]
    pub fn relative(&self, offset: ByteOffset) -> usize {
        u32::from(offset).saturating_sub(self.origin.offset) as usize
    }

    /// Host span of the whole template text.
    pub fn full_span(&self) -> Span {
        Span::new(self.host(0), self.host(self.len as usize))
    }

    /// Host position of a host offset.
    pub fn position(&self, offset: ByteOffset) -> Position {
        let lc = self.index.line_col(TextSize::from(self.relative(offset) as u32));
        let column = if lc.line == 0 {
            self.origin.column + lc.col
        } else {
            lc.col
        };
        Position::new(self.origin.line + lc.line, column)
    }

    /// Host location of a span.
    pub fn location(&self, span: Span) -> SourceLocation {
        SourceLocation {
            start: self.position(span.start),
            end: self.position(span.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_shifts_first_line_only() {
        let locator = Locator::new("ab\ncd", SourceOrigin::new(40, 3, 12));
        assert_eq!(locator.position(TextSize::from(41)), Position::new(3, 13));
        assert_eq!(locator.position(TextSize::from(44)), Position::new(4, 1));
    }

    #[test]
    fn test_location_of_span() {
        let locator = Locator::new("<p>\n</p>", SourceOrigin::default());
        let loc = locator.location(Span::new(0u32, 8u32));
        assert_eq!(loc.start, Position::new(1, 0));
        assert_eq!(loc.end, Position::new(2, 4));
    }
}
