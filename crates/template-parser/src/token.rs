//! Low-level tokens produced by the tokenizer.

use source_map::{SourceLocation, Span};

/// A committed token.
///
/// `value` is the processed text: character references decoded, `\r\n`
/// collapsed, quotes stripped from attribute values. `span` always covers the
/// raw source bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The processed value.
    pub value: String,
    /// The host span of the raw token text.
    pub span: Span,
    /// The host line/column location.
    pub loc: SourceLocation,
}

/// Lexical token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// `=` between an attribute name and its value.
    Association,
    /// `<?...>` or `<!...>` that is not a real comment.
    BogusComment,
    /// Content of `<![CDATA[...]]>` in foreign content.
    CDataText,
    /// `<!--...-->`, value is the comment body.
    Comment,
    /// `</name`, value is the raw name.
    EndTagOpen,
    /// An attribute name.
    Identifier,
    /// An attribute value, without quotes.
    Literal,
    /// Text inside an RCDATA element (`textarea`, `title`).
    RcDataText,
    /// Text inside a raw text element (`script`, `style`, ...).
    RawText,
    /// `/>`
    SelfClosingTagClose,
    /// `>`
    TagClose,
    /// `<name`, value is the raw name.
    TagOpen,
    /// Character data.
    Text,
    /// A run of whitespace.
    Whitespace,
    /// `{{`
    InterpolationStart,
    /// `}}`
    InterpolationEnd,
}

impl TokenKind {
    /// The token type name exposed to tree consumers.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Association => "HTMLAssociation",
            TokenKind::BogusComment => "HTMLBogusComment",
            TokenKind::CDataText => "HTMLCDataText",
            TokenKind::Comment => "HTMLComment",
            TokenKind::EndTagOpen => "HTMLEndTagOpen",
            TokenKind::Identifier => "HTMLIdentifier",
            TokenKind::Literal => "HTMLLiteral",
            TokenKind::RcDataText => "HTMLRCDataText",
            TokenKind::RawText => "HTMLRawText",
            TokenKind::SelfClosingTagClose => "HTMLSelfClosingTagClose",
            TokenKind::TagClose => "HTMLTagClose",
            TokenKind::TagOpen => "HTMLTagOpen",
            TokenKind::Text => "HTMLText",
            TokenKind::Whitespace => "HTMLWhitespace",
            TokenKind::InterpolationStart => "VExpressionStart",
            TokenKind::InterpolationEnd => "VExpressionEnd",
        }
    }

    /// Returns true for tokens that carry character data.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            TokenKind::Text
                | TokenKind::Whitespace
                | TokenKind::RcDataText
                | TokenKind::RawText
                | TokenKind::CDataText
        )
    }

    /// Returns true for comment tokens.
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::BogusComment)
    }
}
