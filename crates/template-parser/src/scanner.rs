//! Shallow JavaScript scanner for directive values.
//!
//! Finds the structural split points the expression grammar cannot see on its
//! own: the top-level `|` of a filter chain and the `in`/`of` keyword of a
//! `v-for` value. Strings, template literals, comments and regex literals are
//! skipped as single tokens so that their contents never split anything.

use logos::Logos;
use source_map::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos, Default)]
pub enum JsTokenKind {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    #[regex(r"'([^'\\\n]|\\[^\n])*'")]
    String,

    #[regex(r"`([^`\\]|\\[^\n]|\\\n)*`")]
    Template,

    /// A regex literal; produced by the scanner, never by the lexer.
    Regex,

    #[token("||")]
    OrOr,

    #[token("|")]
    Pipe,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("/")]
    Slash,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[regex(r"[0-9][0-9A-Za-z_.]*")]
    Number,

    /// Any other punctuation or character.
    #[default]
    Other,
}

impl JsTokenKind {
    fn is_trivia(self) -> bool {
        matches!(
            self,
            JsTokenKind::Whitespace | JsTokenKind::LineComment | JsTokenKind::BlockComment
        )
    }

    fn opens(self) -> bool {
        matches!(
            self,
            JsTokenKind::LParen | JsTokenKind::LBracket | JsTokenKind::LBrace
        )
    }

    fn closes(self) -> bool {
        matches!(
            self,
            JsTokenKind::RParen | JsTokenKind::RBracket | JsTokenKind::RBrace
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsToken {
    pub kind: JsTokenKind,
    /// Byte range within the scanned code.
    pub span: Span,
}

/// Determines if a `/` after `prev` starts a regex literal rather than a
/// division.
fn could_start_regex(prev: Option<JsTokenKind>) -> bool {
    !matches!(
        prev,
        Some(
            JsTokenKind::Ident
                | JsTokenKind::Number
                | JsTokenKind::String
                | JsTokenKind::Template
                | JsTokenKind::Regex
                | JsTokenKind::RParen
                | JsTokenKind::RBracket
                | JsTokenKind::RBrace
        )
    )
}

/// Length of the regex literal body and flags following an opening `/`, or
/// `None` if the literal is unterminated on its line.
fn regex_literal_len(rest: &str) -> Option<usize> {
    let mut in_char_class = false;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' => in_char_class = true,
            ']' => in_char_class = false,
            '/' if !in_char_class => {
                let flags = rest[i + 1..]
                    .bytes()
                    .take_while(|b| b.is_ascii_alphabetic())
                    .count();
                return Some(i + 1 + flags);
            }
            '\n' => return None,
            _ => {}
        }
    }
    None
}

/// Tokenizes a JavaScript fragment.
pub struct JsScanner<'src> {
    inner: logos::Lexer<'src, JsTokenKind>,
    prev: Option<JsTokenKind>,
}

impl<'src> JsScanner<'src> {
    pub fn new(code: &'src str) -> Self {
        Self {
            inner: JsTokenKind::lexer(code),
            prev: None,
        }
    }
}

impl Iterator for JsScanner<'_> {
    type Item = JsToken;

    fn next(&mut self) -> Option<JsToken> {
        let mut kind = self.inner.next()?.unwrap_or(JsTokenKind::Other);
        if kind == JsTokenKind::Slash && could_start_regex(self.prev) {
            if let Some(len) = regex_literal_len(self.inner.remainder()) {
                self.inner.bump(len);
                kind = JsTokenKind::Regex;
            }
        }
        if !kind.is_trivia() {
            self.prev = Some(kind);
        }
        let span = self.inner.span();
        Some(JsToken {
            kind,
            span: Span::from_usize(span.start, span.end),
        })
    }
}

/// Splits a filter chain on top-level `|`.
///
/// Returns the byte spans of the expression followed by each filter; a
/// single span means there is no filter.
pub fn split_filters(code: &str) -> Vec<Span> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for token in JsScanner::new(code) {
        match token.kind {
            kind if kind.opens() => depth += 1,
            kind if kind.closes() => depth = depth.saturating_sub(1),
            JsTokenKind::Pipe if depth == 0 => {
                parts.push(Span::from_usize(start, token.span.lo()));
                start = token.span.hi();
            }
            _ => {}
        }
    }
    parts.push(Span::from_usize(start, code.len()));
    parts
}

/// Finds the `in` or `of` keyword of a `v-for` value.
///
/// The keyword must be at bracket depth zero and follow whitespace or a `)`.
pub fn find_for_separator(code: &str) -> Option<Span> {
    let mut depth = 0usize;
    let mut prev: Option<JsTokenKind> = None;
    for token in JsScanner::new(code) {
        match token.kind {
            kind if kind.opens() => depth += 1,
            kind if kind.closes() => depth = depth.saturating_sub(1),
            JsTokenKind::Ident
                if depth == 0
                    && matches!(&code[token.span.lo()..token.span.hi()], "in" | "of")
                    && matches!(prev, Some(JsTokenKind::Whitespace | JsTokenKind::RParen)) =>
            {
                return Some(token.span);
            }
            _ => {}
        }
        prev = Some(token.kind);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parts(code: &str) -> Vec<&str> {
        split_filters(code)
            .into_iter()
            .map(|span| &code[span.lo()..span.hi()])
            .collect()
    }

    #[test]
    fn test_split_filters() {
        assert_eq!(parts("a | b | c(1)"), vec!["a ", " b ", " c(1)"]);
        assert_eq!(parts("a || b"), vec!["a || b"]);
        assert_eq!(parts("f(a | b) | g"), vec!["f(a | b) ", " g"]);
    }

    #[test]
    fn test_split_skips_literals() {
        assert_eq!(parts("'a|b' | f"), vec!["'a|b' ", " f"]);
        assert_eq!(parts("`x|${y}` | f"), vec!["`x|${y}` ", " f"]);
        assert_eq!(parts("/a|b/g.test(x) | f"), vec!["/a|b/g.test(x) ", " f"]);
        assert_eq!(parts("a / b | f"), vec!["a / b ", " f"]);
    }

    #[test]
    fn test_for_separator() {
        let code = "(item, index) in items";
        let span = find_for_separator(code).unwrap();
        assert_eq!(&code[span.lo()..span.hi()], "in");
        assert_eq!(span.lo(), 14);

        assert_eq!(find_for_separator("x of xs").map(|s| s.lo()), Some(2));
        assert_eq!(find_for_separator("(a)in b").map(|s| s.lo()), Some(3));
        assert_eq!(find_for_separator("index in list").map(|s| s.lo()), Some(6));
        assert_eq!(find_for_separator("{ in: x } in list").map(|s| s.lo()), Some(10));
        assert_eq!(find_for_separator("items"), None);
    }
}
