//! Source positions for template parsing.
//!
//! Templates are parsed out of a larger host file, and the tokenizer rewrites
//! the text it consumes (character references are decoded, `\r\n` collapses to
//! `\n`). This crate provides the types that keep every reported position
//! pointing at the original host file:
//!
//! - [`Span`]: half-open byte ranges in host coordinates
//! - [`LineIndex`] and [`Locator`]: offset to line/column conversion
//! - [`LocationCalculator`]: maps offsets in processed (decoded) text back to
//!   host offsets by re-inserting the elided bytes ("gaps")

mod calculator;
mod line_index;
mod location;
mod span;

pub use calculator::LocationCalculator;
pub use line_index::{LineCol, LineIndex};
pub use location::{Locator, Position, SourceLocation, SourceOrigin};
pub use span::{ByteOffset, Span};
