//! Aggregates low-level tokens into tags, text runs and mustaches.

use crate::error::{ParseError, ParseErrorKind};
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;
use source_map::{SourceLocation, Span};
use std::collections::VecDeque;

/// An attribute of a start tag: name, and value if one was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeToken {
    /// The [`TokenKind::Identifier`] token.
    pub key: Token,
    /// The [`TokenKind::Literal`] token.
    pub value: Option<Token>,
    pub span: Span,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTagToken {
    pub raw_name: String,
    pub self_closing: bool,
    pub attributes: Vec<AttributeToken>,
    pub span: Span,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndTagToken {
    pub raw_name: String,
    pub span: Span,
    pub loc: SourceLocation,
}

/// A run of contiguous character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToken {
    pub value: String,
    pub span: Span,
    pub loc: SourceLocation,
}

/// `{{ ... }}`. `value` is the processed text between the markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MustacheToken {
    pub value: String,
    pub start: Token,
    pub end: Token,
    pub span: Span,
    pub loc: SourceLocation,
}

/// A semantic unit of template markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntermediateToken {
    StartTag(StartTagToken),
    EndTag(EndTagToken),
    Text(TextToken),
    Mustache(MustacheToken),
}

impl IntermediateToken {
    pub fn span(&self) -> Span {
        match self {
            IntermediateToken::StartTag(t) => t.span,
            IntermediateToken::EndTag(t) => t.span,
            IntermediateToken::Text(t) => t.span,
            IntermediateToken::Mustache(t) => t.span,
        }
    }
}

#[derive(Debug)]
enum Pending {
    StartTag(StartTagToken),
    EndTag(EndTagToken),
    Text(TextToken),
}

fn extend(span: &mut Span, loc: &mut SourceLocation, token: &Token) {
    span.end = token.span.end;
    loc.end = token.loc.end;
}

/// Wraps a [`Tokenizer`] and emits [`IntermediateToken`]s.
pub struct IntermediateTokenizer<'a> {
    tokenizer: Tokenizer<'a>,
    current: Option<Pending>,
    /// A start tag attribute is open and may still receive a value.
    attribute_open: bool,
    expression_start: Option<Token>,
    expression_tokens: Vec<Token>,
    output: VecDeque<IntermediateToken>,
    tokens: Vec<Token>,
    comments: Vec<Token>,
    errors: Vec<ParseError>,
    done: bool,
}

impl<'a> IntermediateTokenizer<'a> {
    pub fn new(tokenizer: Tokenizer<'a>) -> Self {
        Self {
            tokenizer,
            current: None,
            attribute_open: false,
            expression_start: None,
            expression_tokens: Vec::new(),
            output: VecDeque::new(),
            tokens: Vec::new(),
            comments: Vec::new(),
            errors: Vec::new(),
            done: false,
        }
    }

    /// The wrapped tokenizer, for state switches driven by the tree builder.
    pub fn tokenizer_mut(&mut self) -> &mut Tokenizer<'a> {
        &mut self.tokenizer
    }

    /// Consumes the tokenizer, returning the tokens, comments, sorted gap
    /// offsets and errors of both layers.
    pub fn finish(self) -> (Vec<Token>, Vec<Token>, Vec<u32>, Vec<ParseError>) {
        let (gaps, mut errors) = self.tokenizer.finish();
        errors.extend(self.errors);
        (self.tokens, self.comments, gaps, errors)
    }

    /// Returns the next intermediate token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<IntermediateToken> {
        loop {
            if let Some(token) = self.output.pop_front() {
                return Some(token);
            }
            if self.done {
                return None;
            }
            match self.tokenizer.next_token() {
                Some(token) => self.process(token),
                None => {
                    self.commit();
                    self.done = true;
                }
            }
        }
    }

    fn report(&mut self, kind: ParseErrorKind, token: &Token) {
        self.errors
            .push(ParseError::new(kind, token.span.start, token.loc.start));
    }

    /// Moves the pending unit to the output, flushing an unterminated
    /// interpolation into it as text.
    fn commit(&mut self) {
        self.attribute_open = false;
        let mut pending = self.current.take();

        if let Some(start) = self.expression_start.take() {
            let tokens = std::mem::take(&mut self.expression_tokens);
            let last = tokens.last().unwrap_or(&start).clone();
            let mut value = start.value.clone();
            for token in &tokens {
                value.push_str(&token.value);
            }
            match pending.as_mut() {
                Some(Pending::Text(text)) => {
                    text.value.push_str(&value);
                    extend(&mut text.span, &mut text.loc, &last);
                }
                Some(_) => {
                    self.emit(pending.take());
                    pending = Some(Pending::Text(TextToken {
                        value,
                        span: Span::new(start.span.start, last.span.end),
                        loc: SourceLocation {
                            start: start.loc.start,
                            end: last.loc.end,
                        },
                    }));
                }
                None => {
                    pending = Some(Pending::Text(TextToken {
                        value,
                        span: Span::new(start.span.start, last.span.end),
                        loc: SourceLocation {
                            start: start.loc.start,
                            end: last.loc.end,
                        },
                    }));
                }
            }
        }

        self.emit(pending);
    }

    fn emit(&mut self, pending: Option<Pending>) {
        let token = match pending {
            Some(Pending::StartTag(tag)) => IntermediateToken::StartTag(tag),
            Some(Pending::EndTag(tag)) => IntermediateToken::EndTag(tag),
            Some(Pending::Text(text)) => IntermediateToken::Text(text),
            None => return,
        };
        self.output.push_back(token);
    }

    fn process(&mut self, token: Token) {
        match token.kind {
            TokenKind::Comment | TokenKind::BogusComment => self.comments.push(token),
            TokenKind::TagOpen => {
                self.tokens.push(token.clone());
                self.commit();
                self.current = Some(Pending::StartTag(StartTagToken {
                    raw_name: token.value,
                    self_closing: false,
                    attributes: Vec::new(),
                    span: token.span,
                    loc: token.loc,
                }));
            }
            TokenKind::EndTagOpen => {
                self.tokens.push(token.clone());
                self.commit();
                self.current = Some(Pending::EndTag(EndTagToken {
                    raw_name: token.value,
                    span: token.span,
                    loc: token.loc,
                }));
            }
            TokenKind::Identifier => self.process_identifier(token),
            TokenKind::Association => self.process_tag_part(token),
            TokenKind::Literal => self.process_literal(token),
            TokenKind::TagClose | TokenKind::SelfClosingTagClose => self.process_tag_close(token),
            TokenKind::InterpolationStart => self.process_interpolation_start(token),
            TokenKind::InterpolationEnd => self.process_interpolation_end(token),
            TokenKind::Whitespace if self.in_tag() => self.process_tag_part(token),
            TokenKind::Text
            | TokenKind::Whitespace
            | TokenKind::RcDataText
            | TokenKind::RawText
            | TokenKind::CDataText => {
                self.tokens.push(token.clone());
                self.process_text(token);
            }
        }
    }

    fn in_tag(&self) -> bool {
        matches!(
            self.current,
            Some(Pending::StartTag(_)) | Some(Pending::EndTag(_))
        )
    }

    /// Extends the pending tag over a token that carries no attribute data.
    fn process_tag_part(&mut self, token: Token) {
        match self.current.as_mut() {
            Some(Pending::StartTag(tag)) => extend(&mut tag.span, &mut tag.loc, &token),
            Some(Pending::EndTag(tag)) => extend(&mut tag.span, &mut tag.loc, &token),
            _ => {}
        }
        self.tokens.push(token);
    }

    fn process_text(&mut self, token: Token) {
        if self.expression_start.is_some() {
            self.expression_tokens.push(token);
            return;
        }
        if let Some(Pending::Text(text)) = self.current.as_mut() {
            if text.span.end == token.span.start {
                text.value.push_str(&token.value);
                extend(&mut text.span, &mut text.loc, &token);
                return;
            }
        }
        self.commit();
        self.current = Some(Pending::Text(TextToken {
            value: token.value,
            span: token.span,
            loc: token.loc,
        }));
    }

    fn process_identifier(&mut self, token: Token) {
        self.tokens.push(token.clone());
        match self.current.as_mut() {
            Some(Pending::StartTag(tag)) => {
                extend(&mut tag.span, &mut tag.loc, &token);
                let duplicate = tag
                    .attributes
                    .iter()
                    .any(|a| a.key.value.eq_ignore_ascii_case(&token.value));
                tag.attributes.push(AttributeToken {
                    span: token.span,
                    loc: token.loc,
                    key: token.clone(),
                    value: None,
                });
                self.attribute_open = true;
                if duplicate {
                    self.report(
                        ParseErrorKind::DuplicateAttribute {
                            name: token.value.to_ascii_lowercase(),
                        },
                        &token,
                    );
                }
            }
            Some(Pending::EndTag(tag)) => {
                extend(&mut tag.span, &mut tag.loc, &token);
                self.report(ParseErrorKind::EndTagWithAttributes, &token);
            }
            _ => debug_assert!(false, "attribute name outside of a tag"),
        }
    }

    fn process_literal(&mut self, token: Token) {
        self.tokens.push(token.clone());
        match self.current.as_mut() {
            Some(Pending::StartTag(tag)) => {
                extend(&mut tag.span, &mut tag.loc, &token);
                if self.attribute_open {
                    if let Some(attribute) = tag.attributes.last_mut() {
                        extend(&mut attribute.span, &mut attribute.loc, &token);
                        attribute.value = Some(token);
                    }
                }
                self.attribute_open = false;
            }
            Some(Pending::EndTag(tag)) => extend(&mut tag.span, &mut tag.loc, &token),
            _ => debug_assert!(false, "attribute value outside of a tag"),
        }
    }

    fn process_tag_close(&mut self, token: Token) {
        self.tokens.push(token.clone());
        let self_closing = token.kind == TokenKind::SelfClosingTagClose;
        match self.current.as_mut() {
            Some(Pending::StartTag(tag)) => {
                extend(&mut tag.span, &mut tag.loc, &token);
                tag.self_closing = self_closing;
            }
            Some(Pending::EndTag(tag)) => {
                extend(&mut tag.span, &mut tag.loc, &token);
                if self_closing {
                    self.report(ParseErrorKind::EndTagWithTrailingSolidus, &token);
                }
            }
            _ => debug_assert!(false, "tag close outside of a tag"),
        }
        self.commit();
    }

    fn process_interpolation_start(&mut self, token: Token) {
        self.tokens.push(token.clone());
        if self.expression_start.is_some() {
            self.process_text(token);
            return;
        }
        let separated = match &self.current {
            Some(Pending::Text(text)) => text.span.end != token.span.start,
            Some(_) => true,
            None => false,
        };
        if separated {
            self.commit();
        }
        self.expression_start = Some(token);
    }

    fn process_interpolation_end(&mut self, token: Token) {
        self.tokens.push(token.clone());
        let Some(start) = self.expression_start.take() else {
            self.process_text(token);
            return;
        };

        if self.expression_tokens.is_empty() {
            // `{{}}` is plain text.
            self.process_text(start);
            self.process_text(token);
            return;
        }

        let tokens = std::mem::take(&mut self.expression_tokens);
        let value: String = tokens.iter().map(|t| t.value.as_str()).collect();
        self.commit();
        let span = Span::new(start.span.start, token.span.end);
        let loc = SourceLocation {
            start: start.loc.start,
            end: token.loc.end,
        };
        self.output.push_back(IntermediateToken::Mustache(MustacheToken {
            value,
            start,
            end: token,
            span,
            loc,
        }));
    }
}

impl Iterator for IntermediateTokenizer<'_> {
    type Item = IntermediateToken;

    fn next(&mut self) -> Option<IntermediateToken> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use source_map::{Locator, SourceOrigin};
    use std::rc::Rc;

    fn run(text: &str) -> (Vec<IntermediateToken>, Vec<&'static str>) {
        let locator = Rc::new(Locator::new(text, SourceOrigin::default()));
        let mut intermediate = IntermediateTokenizer::new(Tokenizer::new(text, locator));
        let tokens: Vec<IntermediateToken> = intermediate.by_ref().collect();
        let (_, _, _, errors) = intermediate.finish();
        (tokens, errors.iter().map(|e| e.code()).collect())
    }

    fn texts(tokens: &[IntermediateToken]) -> Vec<String> {
        tokens
            .iter()
            .filter_map(|t| match t {
                IntermediateToken::Text(text) => Some(text.value.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_text_merges_when_contiguous() {
        let (tokens, _) = run("a b&amp;c<!-- x -->d");
        assert_eq!(texts(&tokens), vec!["a b&c".to_string(), "d".to_string()]);
    }

    #[test]
    fn test_start_tag_attributes() {
        let (tokens, errors) = run(r#"<input type="text" disabled>"#);
        assert!(errors.is_empty());
        let IntermediateToken::StartTag(tag) = &tokens[0] else {
            panic!("expected a start tag, got {:?}", tokens[0]);
        };
        assert_eq!(tag.raw_name, "input");
        assert!(!tag.self_closing);
        assert_eq!(tag.attributes.len(), 2);
        assert_eq!(tag.attributes[0].key.value, "type");
        assert_eq!(
            tag.attributes[0].value.as_ref().map(|v| v.value.as_str()),
            Some("text")
        );
        assert_eq!(tag.attributes[1].value, None);
        assert_eq!(tag.span, Span::from_usize(0, 28));
    }

    #[test]
    fn test_duplicate_attribute_keeps_both() {
        let (tokens, errors) = run(r#"<div class="a" CLASS="b">"#);
        assert_eq!(errors, vec!["duplicate-attribute"]);
        let IntermediateToken::StartTag(tag) = &tokens[0] else {
            panic!("expected a start tag");
        };
        assert_eq!(tag.attributes.len(), 2);
    }

    #[test]
    fn test_end_tag_errors() {
        let (_, errors) = run(r#"<a></a href="x">"#);
        assert_eq!(errors, vec!["end-tag-with-attributes"]);
        let (_, errors) = run("<a></a/>");
        assert_eq!(errors, vec!["end-tag-with-trailing-solidus"]);
    }

    #[test]
    fn test_mustache() {
        let (tokens, _) = run("a {{ b }}c");
        assert_eq!(tokens.len(), 3);
        let IntermediateToken::Mustache(mustache) = &tokens[1] else {
            panic!("expected a mustache, got {:?}", tokens[1]);
        };
        assert_eq!(mustache.value, " b ");
        assert_eq!(mustache.span, Span::from_usize(2, 9));
        assert_eq!(mustache.start.span, Span::from_usize(2, 4));
        assert_eq!(texts(&tokens), vec!["a ".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_empty_mustache_is_text() {
        let (tokens, errors) = run("a{{}}b");
        assert!(errors.is_empty());
        assert_eq!(texts(&tokens), vec!["a{{}}b".to_string()]);
    }

    #[test]
    fn test_unterminated_mustache_is_text() {
        let (tokens, errors) = run("x {{ foo");
        assert_eq!(errors, vec!["x-missing-interpolation-end"]);
        assert_eq!(texts(&tokens), vec!["x {{ foo".to_string()]);
        assert_eq!(tokens[0].span(), Span::from_usize(0, 8));
    }
}
