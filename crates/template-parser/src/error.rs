//! Parse error types.
//!
//! Every error the pipeline produces, from the tokenizer up to the embedded
//! expression parsers, is normalized to [`ParseError`] with host-file
//! coordinates and appended to the template's error list. None of them abort
//! the parse.

use source_map::{ByteOffset, Position};
use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{kind}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Host byte offset of the error.
    pub index: u32,
    /// 1-based host line.
    pub line: u32,
    /// 0-based host column.
    pub column: u32,
}

impl ParseError {
    /// Creates a new parse error at a host offset.
    pub fn new(kind: ParseErrorKind, offset: ByteOffset, position: Position) -> Self {
        Self {
            kind,
            index: offset.into(),
            line: position.line,
            column: position.column,
        }
    }

    /// The stable error code, e.g. `"duplicate-attribute"`.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The human-readable message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// The kind of parse error.
///
/// Tokenizer errors use the names of the markup tokenization errors they
/// correspond to; template-specific errors are prefixed with `x-`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseErrorKind {
    #[error("comment closed abruptly with '>'")]
    AbruptClosingOfEmptyComment,
    #[error("numeric character reference has no digits")]
    AbsenceOfDigitsInNumericCharacterReference,
    #[error("CDATA section is only allowed in foreign content")]
    CdataInHtmlContent,
    #[error("character reference is outside the unicode range")]
    CharacterReferenceOutsideUnicodeRange,
    #[error("control character in input stream")]
    ControlCharacterInInputStream,
    #[error("character reference to a control character")]
    ControlCharacterReference,
    #[error("unexpected end of file before tag name")]
    EofBeforeTagName,
    #[error("unexpected end of file in CDATA section")]
    EofInCdata,
    #[error("unexpected end of file in comment")]
    EofInComment,
    #[error("unexpected end of file in tag")]
    EofInTag,
    #[error("comment closed with '--!>'")]
    IncorrectlyClosedComment,
    #[error("comment must start with '<!--'")]
    IncorrectlyOpenedComment,
    #[error("invalid first character of tag name")]
    InvalidFirstCharacterOfTagName,
    #[error("attribute value is missing after '='")]
    MissingAttributeValue,
    #[error("end tag name is missing")]
    MissingEndTagName,
    #[error("missing semicolon after character reference")]
    MissingSemicolonAfterCharacterReference,
    #[error("missing whitespace between attributes")]
    MissingWhitespaceBetweenAttributes,
    #[error("nested comment")]
    NestedComment,
    #[error("character reference to a noncharacter")]
    NoncharacterCharacterReference,
    #[error("noncharacter in input stream")]
    NoncharacterInInputStream,
    #[error("character reference to U+0000")]
    NullCharacterReference,
    #[error("character reference to a surrogate")]
    SurrogateCharacterReference,
    #[error("unexpected character in attribute name")]
    UnexpectedCharacterInAttributeName,
    #[error("unexpected character in unquoted attribute value")]
    UnexpectedCharacterInUnquotedAttributeValue,
    #[error("unexpected '=' before attribute name")]
    UnexpectedEqualsSignBeforeAttributeName,
    #[error("unexpected null character")]
    UnexpectedNullCharacter,
    #[error("unexpected '?' instead of tag name")]
    UnexpectedQuestionMarkInsteadOfTagName,
    #[error("unexpected '/' in tag")]
    UnexpectedSolidusInTag,
    #[error("unknown named character reference")]
    UnknownNamedCharacterReference,
    #[error("interpolation is missing its closing '}}}}'")]
    MissingInterpolationEnd,

    #[error("duplicate attribute: {name}")]
    DuplicateAttribute {
        /// The duplicated attribute name.
        name: String,
    },
    #[error("end tag must not have attributes")]
    EndTagWithAttributes,
    #[error("end tag must not be self-closing")]
    EndTagWithTrailingSolidus,
    #[error("invalid end tag: </{name}> has no matching start tag")]
    InvalidEndTag {
        /// The end tag name.
        name: String,
    },
    #[error("invalid namespace in {name} attribute")]
    InvalidNamespace {
        /// The attribute name (`xmlns` or `xmlns:xlink`).
        name: String,
    },

    #[error("invalid directive: {message}")]
    InvalidDirective {
        /// A description of the problem.
        message: String,
    },
    #[error("{message}")]
    ExpressionError {
        /// The message reported by the expression grammar.
        message: String,
    },
}

impl ParseErrorKind {
    /// The stable kebab-case error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AbruptClosingOfEmptyComment => "abrupt-closing-of-empty-comment",
            Self::AbsenceOfDigitsInNumericCharacterReference => {
                "absence-of-digits-in-numeric-character-reference"
            }
            Self::CdataInHtmlContent => "cdata-in-html-content",
            Self::CharacterReferenceOutsideUnicodeRange => {
                "character-reference-outside-unicode-range"
            }
            Self::ControlCharacterInInputStream => "control-character-in-input-stream",
            Self::ControlCharacterReference => "control-character-reference",
            Self::EofBeforeTagName => "eof-before-tag-name",
            Self::EofInCdata => "eof-in-cdata",
            Self::EofInComment => "eof-in-comment",
            Self::EofInTag => "eof-in-tag",
            Self::IncorrectlyClosedComment => "incorrectly-closed-comment",
            Self::IncorrectlyOpenedComment => "incorrectly-opened-comment",
            Self::InvalidFirstCharacterOfTagName => "invalid-first-character-of-tag-name",
            Self::MissingAttributeValue => "missing-attribute-value",
            Self::MissingEndTagName => "missing-end-tag-name",
            Self::MissingSemicolonAfterCharacterReference => {
                "missing-semicolon-after-character-reference"
            }
            Self::MissingWhitespaceBetweenAttributes => "missing-whitespace-between-attributes",
            Self::NestedComment => "nested-comment",
            Self::NoncharacterCharacterReference => "noncharacter-character-reference",
            Self::NoncharacterInInputStream => "noncharacter-in-input-stream",
            Self::NullCharacterReference => "null-character-reference",
            Self::SurrogateCharacterReference => "surrogate-character-reference",
            Self::UnexpectedCharacterInAttributeName => "unexpected-character-in-attribute-name",
            Self::UnexpectedCharacterInUnquotedAttributeValue => {
                "unexpected-character-in-unquoted-attribute-value"
            }
            Self::UnexpectedEqualsSignBeforeAttributeName => {
                "unexpected-equals-sign-before-attribute-name"
            }
            Self::UnexpectedNullCharacter => "unexpected-null-character",
            Self::UnexpectedQuestionMarkInsteadOfTagName => {
                "unexpected-question-mark-instead-of-tag-name"
            }
            Self::UnexpectedSolidusInTag => "unexpected-solidus-in-tag",
            Self::UnknownNamedCharacterReference => "unknown-named-character-reference",
            Self::MissingInterpolationEnd => "x-missing-interpolation-end",
            Self::DuplicateAttribute { .. } => "duplicate-attribute",
            Self::EndTagWithAttributes => "end-tag-with-attributes",
            Self::EndTagWithTrailingSolidus => "end-tag-with-trailing-solidus",
            Self::InvalidEndTag { .. } => "x-invalid-end-tag",
            Self::InvalidNamespace { .. } => "x-invalid-namespace",
            Self::InvalidDirective { .. } => "x-invalid-directive",
            Self::ExpressionError { .. } => "x-expression-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::TextSize;

    #[test]
    fn test_error_display_and_code() {
        let error = ParseError::new(
            ParseErrorKind::DuplicateAttribute {
                name: "class".to_string(),
            },
            TextSize::from(15),
            Position::new(1, 15),
        );
        assert_eq!(error.to_string(), "duplicate attribute: class");
        assert_eq!(error.code(), "duplicate-attribute");
        assert_eq!((error.index, error.line, error.column), (15, 1, 15));
    }

    #[test]
    fn test_interpolation_message_braces() {
        assert_eq!(
            ParseErrorKind::MissingInterpolationEnd.to_string(),
            "interpolation is missing its closing '}}'"
        );
    }
}
