//! Character-level template tokenizer.
//!
//! A markup tokenization state machine covering data, RCDATA, raw text, tags,
//! attributes, comments, CDATA and character references, plus three
//! interpolation states for `{{ ... }}`. Each state handler consumes one code
//! point and returns the next state.
//!
//! Token spans cover raw source bytes. Values are processed: character
//! references are decoded and `\r\n` collapses to `\n`. Every raw byte that
//! has no counterpart in a value is recorded as a gap (see
//! [`source_map::LocationCalculator`]).

use crate::chars::{
    c1_replacement, is_control, is_digit, is_disallowed_control, is_hex_digit, is_letter,
    is_letter_or_digit, is_noncharacter, is_surrogate, is_whitespace,
};
use crate::entities;
use crate::error::{ParseError, ParseErrorKind};
use crate::namespace::Namespace;
use crate::token::{Token, TokenKind};
use source_map::{Locator, Span};
use std::collections::VecDeque;
use std::rc::Rc;

/// Tokenizer states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Data,
    RcData,
    RawText,
    TagOpen,
    EndTagOpen,
    TagName,
    RcDataLessThanSign,
    RcDataEndTagOpen,
    RcDataEndTagName,
    RawTextLessThanSign,
    RawTextEndTagOpen,
    RawTextEndTagName,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueDoubleQuoted,
    AttributeValueSingleQuoted,
    AttributeValueUnquoted,
    AfterAttributeValueQuoted,
    SelfClosingStartTag,
    BogusComment,
    MarkupDeclarationOpen,
    CommentStart,
    CommentStartDash,
    Comment,
    CommentLessThanSign,
    CommentLessThanSignBang,
    CommentLessThanSignBangDash,
    CommentLessThanSignBangDashDash,
    CommentEndDash,
    CommentEnd,
    CommentEndBang,
    CdataSection,
    CdataSectionBracket,
    CdataSectionEnd,
    CharacterReference,
    NamedCharacterReference,
    AmbiguousAmpersand,
    NumericCharacterReference,
    HexadecimalCharacterReferenceStart,
    DecimalCharacterReferenceStart,
    HexadecimalCharacterReference,
    DecimalCharacterReference,
    InterpolationStart,
    InterpolationData,
    InterpolationEnd,
}

impl State {
    fn is_attribute_value(self) -> bool {
        matches!(
            self,
            State::AttributeValueDoubleQuoted
                | State::AttributeValueSingleQuoted
                | State::AttributeValueUnquoted
        )
    }

    /// The kind of character data token produced in this state.
    fn text_kind(self) -> TokenKind {
        match self {
            State::RcData => TokenKind::RcDataText,
            State::RawText => TokenKind::RawText,
            _ => TokenKind::Text,
        }
    }
}

/// A token that is still being built.
#[derive(Debug)]
struct PendingToken {
    kind: TokenKind,
    start: usize,
    value: String,
}

/// The template tokenizer.
pub struct Tokenizer<'a> {
    text: &'a str,
    locator: Rc<Locator>,
    state: State,
    /// State to return to after a character reference.
    return_state: State,
    /// State to return to after an interpolation.
    interpolation_return: State,
    /// Index of the next code point.
    offset: usize,
    /// Index of the current code point.
    cp_start: usize,
    cp: Option<char>,
    reconsume: bool,
    finished: bool,
    current: Option<PendingToken>,
    /// Character data held back while a raw text end tag is being sniffed.
    provisional: Option<PendingToken>,
    committed: VecDeque<Token>,
    /// Start of a multi-character construct (`<`, `/>`, `{{`, `}}`).
    mark: usize,
    ref_start: usize,
    interpolation_start: usize,
    char_code: u32,
    end_tag_name: String,
    last_start_tag_name: String,
    expression_enabled: bool,
    namespace: Namespace,
    gaps: Vec<u32>,
    errors: Vec<ParseError>,
    trace: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `text`, whose host position is described by
    /// `locator`.
    pub fn new(text: &'a str, locator: Rc<Locator>) -> Self {
        Self {
            text,
            locator,
            state: State::Data,
            return_state: State::Data,
            interpolation_return: State::Data,
            offset: 0,
            cp_start: 0,
            cp: None,
            reconsume: false,
            finished: false,
            current: None,
            provisional: None,
            committed: VecDeque::new(),
            mark: 0,
            ref_start: 0,
            interpolation_start: 0,
            char_code: 0,
            end_tag_name: String::new(),
            last_start_tag_name: String::new(),
            expression_enabled: true,
            namespace: Namespace::Html,
            gaps: Vec::new(),
            errors: Vec::new(),
            trace: false,
        }
    }

    /// Logs every state transition at trace level.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Switches the state, e.g. to [`State::RawText`] after `<script>`.
    pub fn set_state(&mut self, state: State) {
        self.trace_transition(state);
        self.state = state;
    }

    /// Enables or disables `{{ }}` recognition.
    pub fn set_expression_enabled(&mut self, enabled: bool) {
        self.expression_enabled = enabled;
    }

    /// Sets the namespace of the current element; CDATA sections are only
    /// recognized in foreign content.
    pub fn set_namespace(&mut self, namespace: Namespace) {
        self.namespace = namespace;
    }

    /// Consumes the tokenizer, returning the sorted gap offsets and errors.
    pub fn finish(self) -> (Vec<u32>, Vec<ParseError>) {
        let mut gaps = self.gaps;
        gaps.sort_unstable();
        gaps.dedup();
        (gaps, self.errors)
    }

    /// Returns the next committed token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.committed.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.advance();
            }

            let next = self.step(self.cp);
            self.trace_transition(next);
            self.state = next;

            if self.cp.is_none() && !self.reconsume {
                if let Some(provisional) = self.provisional.take() {
                    self.commit(provisional, self.text.len());
                }
                if let Some(current) = self.current.take() {
                    self.commit(current, self.text.len());
                }
                self.finished = true;
            }
        }
    }

    // === Input ===

    fn advance(&mut self) {
        self.cp_start = self.offset;
        let Some(c) = self.text[self.offset..].chars().next() else {
            self.cp = None;
            return;
        };
        self.offset += c.len_utf8();

        let c = if c == '\r' {
            if self.text.as_bytes().get(self.offset) == Some(&b'\n') {
                let gap = self.host(self.offset);
                self.gaps.push(gap);
                self.offset += 1;
            }
            '\n'
        } else {
            c
        };

        let cp = c as u32;
        if cp == 0 {
            self.report(ParseErrorKind::UnexpectedNullCharacter);
        } else if is_disallowed_control(cp) {
            self.report(ParseErrorKind::ControlCharacterInInputStream);
        } else if is_noncharacter(cp) {
            self.report(ParseErrorKind::NoncharacterInInputStream);
        }
        self.cp = Some(c);
    }

    /// Processes the current code point again in `state`.
    fn reconsume_in(&mut self, state: State) -> State {
        self.reconsume = true;
        state
    }

    fn host(&self, index: usize) -> u32 {
        u32::from(self.locator.host(index))
    }

    fn report(&mut self, kind: ParseErrorKind) {
        self.report_at(kind, self.cp_start);
    }

    fn report_at(&mut self, kind: ParseErrorKind, index: usize) {
        let offset = self.locator.host(index);
        let position = self.locator.position(offset);
        self.errors.push(ParseError::new(kind, offset, position));
    }

    fn trace_transition(&self, next: State) {
        if self.trace && next != self.state {
            log::trace!("tokenizer: {:?} -> {:?} at {}", self.state, next, self.cp_start);
        }
    }

    // === Token building ===

    fn commit(&mut self, token: PendingToken, end: usize) {
        debug_assert!(token.start <= end, "token ends before it starts");
        if token.kind == TokenKind::TagOpen {
            self.last_start_tag_name = token.value.to_ascii_lowercase();
        }
        let span = Span::new(self.locator.host(token.start), self.locator.host(end));
        self.committed.push_back(Token {
            kind: token.kind,
            value: token.value,
            span,
            loc: self.locator.location(span),
        });
    }

    /// Starts a token at raw index `start`, committing the current one.
    fn start_token_at(&mut self, kind: TokenKind, start: usize) {
        if let Some(current) = self.current.take() {
            self.commit(current, start);
        }
        self.current = Some(PendingToken {
            kind,
            start,
            value: String::new(),
        });
    }

    fn start_token(&mut self, kind: TokenKind) {
        self.start_token_at(kind, self.cp_start);
    }

    /// Commits the current token, ending after the current code point.
    fn end_token(&mut self) {
        match self.current.take() {
            Some(current) => self.commit(current, self.offset),
            None => unreachable!("end_token without a pending token"),
        }
    }

    fn push_char(&mut self, c: char) {
        if let Some(current) = self.current.as_mut() {
            current.value.push(c);
        }
    }

    fn push_str(&mut self, s: &str) {
        if let Some(current) = self.current.as_mut() {
            current.value.push_str(s);
        }
    }

    /// Appends `s` to a token of `kind`, starting one at `start` if the
    /// current token is of another kind.
    fn append_as(&mut self, kind: TokenKind, s: &str, start: usize) {
        if self.current.as_ref().map(|t| t.kind) != Some(kind) {
            self.start_token_at(kind, start);
        }
        self.push_str(s);
    }

    /// Appends a data character, splitting whitespace runs into their own
    /// tokens.
    fn append_data(&mut self, text_kind: TokenKind, c: char) {
        let kind = if is_whitespace(c) {
            TokenKind::Whitespace
        } else {
            text_kind
        };
        let mut buf = [0u8; 4];
        self.append_as(kind, c.encode_utf8(&mut buf), self.cp_start);
    }

    /// Appends whitespace inside a tag.
    fn append_tag_whitespace(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.append_as(TokenKind::Whitespace, c.encode_utf8(&mut buf), self.cp_start);
    }

    /// Appends character-reference output to the token of the return state.
    fn flush_reference(&mut self, s: &str) {
        if self.return_state.is_attribute_value() {
            self.push_str(s);
        } else {
            let kind = self.return_state.text_kind();
            self.append_as(kind, s, self.ref_start);
        }
    }

    /// Appends the decoded reference `[ref_start, end)` and records the raw
    /// bytes after it as gaps. A decoded form longer than the raw text is
    /// kept raw.
    fn flush_decoded(&mut self, decoded: &str, end: usize) {
        let text = self.text;
        let raw = &text[self.ref_start..end];
        if decoded.len() <= raw.len() {
            let decoded_len = decoded.len();
            self.flush_reference(decoded);
            for index in self.ref_start + decoded_len..end {
                let gap = self.host(index);
                self.gaps.push(gap);
            }
        } else {
            self.flush_reference(raw);
        }
    }

    fn start_reference(&mut self, return_state: State) -> State {
        self.return_state = return_state;
        self.ref_start = self.cp_start;
        State::CharacterReference
    }

    fn start_interpolation(&mut self, return_state: State) -> State {
        self.interpolation_return = return_state;
        self.mark = self.cp_start;
        State::InterpolationStart
    }

    fn is_appropriate_end_tag(&self) -> bool {
        !self.last_start_tag_name.is_empty()
            && self.end_tag_name.eq_ignore_ascii_case(&self.last_start_tag_name)
    }

    // === States ===

    fn step(&mut self, cp: Option<char>) -> State {
        match self.state {
            State::Data => self.data(cp),
            State::RcData => self.rcdata(cp),
            State::RawText => self.rawtext(cp),
            State::TagOpen => self.tag_open(cp),
            State::EndTagOpen => self.end_tag_open(cp),
            State::TagName => self.tag_name(cp),
            State::RcDataLessThanSign => self.text_less_than_sign(cp, State::RcData),
            State::RawTextLessThanSign => self.text_less_than_sign(cp, State::RawText),
            State::RcDataEndTagOpen => self.text_end_tag_open(cp, State::RcData),
            State::RawTextEndTagOpen => self.text_end_tag_open(cp, State::RawText),
            State::RcDataEndTagName => self.text_end_tag_name(cp, State::RcData),
            State::RawTextEndTagName => self.text_end_tag_name(cp, State::RawText),
            State::BeforeAttributeName => self.before_attribute_name(cp),
            State::AttributeName => self.attribute_name(cp),
            State::AfterAttributeName => self.after_attribute_name(cp),
            State::BeforeAttributeValue => self.before_attribute_value(cp),
            State::AttributeValueDoubleQuoted => self.attribute_value_quoted(cp, '"'),
            State::AttributeValueSingleQuoted => self.attribute_value_quoted(cp, '\''),
            State::AttributeValueUnquoted => self.attribute_value_unquoted(cp),
            State::AfterAttributeValueQuoted => self.after_attribute_value_quoted(cp),
            State::SelfClosingStartTag => self.self_closing_start_tag(cp),
            State::BogusComment => self.bogus_comment(cp),
            State::MarkupDeclarationOpen => self.markup_declaration_open(cp),
            State::CommentStart => self.comment_start(cp),
            State::CommentStartDash => self.comment_start_dash(cp),
            State::Comment => self.comment(cp),
            State::CommentLessThanSign => self.comment_less_than_sign(cp),
            State::CommentLessThanSignBang => self.comment_less_than_sign_bang(cp),
            State::CommentLessThanSignBangDash => self.comment_less_than_sign_bang_dash(cp),
            State::CommentLessThanSignBangDashDash => {
                self.comment_less_than_sign_bang_dash_dash(cp)
            }
            State::CommentEndDash => self.comment_end_dash(cp),
            State::CommentEnd => self.comment_end(cp),
            State::CommentEndBang => self.comment_end_bang(cp),
            State::CdataSection => self.cdata_section(cp),
            State::CdataSectionBracket => self.cdata_section_bracket(cp),
            State::CdataSectionEnd => self.cdata_section_end(cp),
            State::CharacterReference => self.character_reference(cp),
            State::NamedCharacterReference => self.named_character_reference(cp),
            State::AmbiguousAmpersand => self.ambiguous_ampersand(cp),
            State::NumericCharacterReference => self.numeric_character_reference(cp),
            State::HexadecimalCharacterReferenceStart => {
                self.numeric_reference_start(cp, State::HexadecimalCharacterReference)
            }
            State::DecimalCharacterReferenceStart => {
                self.numeric_reference_start(cp, State::DecimalCharacterReference)
            }
            State::HexadecimalCharacterReference => self.numeric_reference_digits(cp, 16),
            State::DecimalCharacterReference => self.numeric_reference_digits(cp, 10),
            State::InterpolationStart => self.interpolation_start(cp),
            State::InterpolationData => self.interpolation_data(cp),
            State::InterpolationEnd => self.interpolation_end(cp),
        }
    }

    fn data(&mut self, cp: Option<char>) -> State {
        match cp {
            None => State::Data,
            Some('<') => {
                self.mark = self.cp_start;
                State::TagOpen
            }
            Some('&') => self.start_reference(State::Data),
            Some('{') if self.expression_enabled => self.start_interpolation(State::Data),
            Some(c) => {
                self.append_data(TokenKind::Text, c);
                State::Data
            }
        }
    }

    fn rcdata(&mut self, cp: Option<char>) -> State {
        match cp {
            None => State::RcData,
            Some('<') => {
                self.mark = self.cp_start;
                State::RcDataLessThanSign
            }
            Some('&') => self.start_reference(State::RcData),
            Some('{') if self.expression_enabled => self.start_interpolation(State::RcData),
            Some(c) => {
                self.append_data(TokenKind::RcDataText, c);
                State::RcData
            }
        }
    }

    fn rawtext(&mut self, cp: Option<char>) -> State {
        match cp {
            None => State::RawText,
            Some('<') => {
                self.mark = self.cp_start;
                State::RawTextLessThanSign
            }
            Some(c) => {
                self.append_data(TokenKind::RawText, c);
                State::RawText
            }
        }
    }

    fn tag_open(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('!') => State::MarkupDeclarationOpen,
            Some('/') => State::EndTagOpen,
            Some(c) if is_letter(c) => {
                self.start_token_at(TokenKind::TagOpen, self.mark);
                self.reconsume_in(State::TagName)
            }
            Some('?') => {
                self.report(ParseErrorKind::UnexpectedQuestionMarkInsteadOfTagName);
                self.start_token_at(TokenKind::BogusComment, self.mark);
                self.reconsume_in(State::BogusComment)
            }
            None => {
                self.report(ParseErrorKind::EofBeforeTagName);
                self.append_as(TokenKind::Text, "<", self.mark);
                self.reconsume_in(State::Data)
            }
            Some(_) => {
                self.report(ParseErrorKind::InvalidFirstCharacterOfTagName);
                self.append_as(TokenKind::Text, "<", self.mark);
                self.reconsume_in(State::Data)
            }
        }
    }

    fn end_tag_open(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(c) if is_letter(c) => {
                self.start_token_at(TokenKind::EndTagOpen, self.mark);
                self.reconsume_in(State::TagName)
            }
            Some('>') => {
                self.report(ParseErrorKind::MissingEndTagName);
                State::Data
            }
            None => {
                self.report(ParseErrorKind::EofBeforeTagName);
                self.append_as(TokenKind::Text, "</", self.mark);
                self.reconsume_in(State::Data)
            }
            Some(_) => {
                self.report(ParseErrorKind::InvalidFirstCharacterOfTagName);
                self.start_token_at(TokenKind::BogusComment, self.mark);
                self.reconsume_in(State::BogusComment)
            }
        }
    }

    fn tag_name(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(c) if is_whitespace(c) => {
                self.start_token(TokenKind::Whitespace);
                self.push_char(c);
                State::BeforeAttributeName
            }
            Some('/') => {
                self.mark = self.cp_start;
                State::SelfClosingStartTag
            }
            Some('>') => {
                self.start_token(TokenKind::TagClose);
                self.end_token();
                State::Data
            }
            None => {
                self.report(ParseErrorKind::EofInTag);
                State::Data
            }
            Some(c) => {
                self.push_char(c);
                State::TagName
            }
        }
    }

    fn text_less_than_sign(&mut self, cp: Option<char>, text_state: State) -> State {
        match cp {
            Some('/') => {
                self.end_tag_name.clear();
                self.provisional = self.current.take();
                if text_state == State::RcData {
                    State::RcDataEndTagOpen
                } else {
                    State::RawTextEndTagOpen
                }
            }
            _ => {
                self.append_as(text_state.text_kind(), "<", self.mark);
                self.reconsume_in(text_state)
            }
        }
    }

    /// Puts the held-back character data back and appends the sniffed
    /// `</name` to it.
    fn restore_provisional(&mut self, text_state: State) {
        debug_assert!(self.current.is_none(), "token started during end tag sniffing");
        self.current = self.provisional.take();
        let mut raw = String::with_capacity(self.end_tag_name.len() + 2);
        raw.push_str("</");
        raw.push_str(&self.end_tag_name);
        self.append_as(text_state.text_kind(), &raw, self.mark);
    }

    /// Commits the held-back character data and opens the end tag token.
    fn promote_provisional(&mut self) {
        if let Some(provisional) = self.provisional.take() {
            self.commit(provisional, self.mark);
        }
        let name = std::mem::take(&mut self.end_tag_name);
        self.start_token_at(TokenKind::EndTagOpen, self.mark);
        self.push_str(&name);
    }

    fn text_end_tag_open(&mut self, cp: Option<char>, text_state: State) -> State {
        match cp {
            Some(c) if is_letter(c) => self.reconsume_in(if text_state == State::RcData {
                State::RcDataEndTagName
            } else {
                State::RawTextEndTagName
            }),
            _ => {
                self.restore_provisional(text_state);
                self.reconsume_in(text_state)
            }
        }
    }

    fn text_end_tag_name(&mut self, cp: Option<char>, text_state: State) -> State {
        match cp {
            Some(c) if is_whitespace(c) && self.is_appropriate_end_tag() => {
                self.promote_provisional();
                self.start_token(TokenKind::Whitespace);
                self.push_char(c);
                State::BeforeAttributeName
            }
            Some('/') if self.is_appropriate_end_tag() => {
                self.promote_provisional();
                self.mark = self.cp_start;
                State::SelfClosingStartTag
            }
            Some('>') if self.is_appropriate_end_tag() => {
                self.promote_provisional();
                self.start_token(TokenKind::TagClose);
                self.end_token();
                State::Data
            }
            Some(c) if is_letter(c) => {
                self.end_tag_name.push(c);
                self.state
            }
            _ => {
                self.restore_provisional(text_state);
                self.reconsume_in(text_state)
            }
        }
    }

    fn before_attribute_name(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(c) if is_whitespace(c) => {
                self.append_tag_whitespace(c);
                State::BeforeAttributeName
            }
            Some('/') | Some('>') | None => self.reconsume_in(State::AfterAttributeName),
            Some('=') => {
                self.report(ParseErrorKind::UnexpectedEqualsSignBeforeAttributeName);
                self.start_token(TokenKind::Identifier);
                self.push_char('=');
                State::AttributeName
            }
            Some(_) => {
                self.start_token(TokenKind::Identifier);
                self.reconsume_in(State::AttributeName)
            }
        }
    }

    fn attribute_name(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(c) if is_whitespace(c) => self.reconsume_in(State::AfterAttributeName),
            Some('/') | Some('>') | None => self.reconsume_in(State::AfterAttributeName),
            Some('=') => {
                self.start_token(TokenKind::Association);
                self.end_token();
                State::BeforeAttributeValue
            }
            Some(c) => {
                if matches!(c, '"' | '\'' | '<') {
                    self.report(ParseErrorKind::UnexpectedCharacterInAttributeName);
                }
                self.push_char(c);
                State::AttributeName
            }
        }
    }

    fn after_attribute_name(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(c) if is_whitespace(c) => {
                self.append_tag_whitespace(c);
                State::AfterAttributeName
            }
            Some('/') => {
                self.mark = self.cp_start;
                State::SelfClosingStartTag
            }
            Some('=') => {
                self.start_token(TokenKind::Association);
                self.end_token();
                State::BeforeAttributeValue
            }
            Some('>') => {
                self.start_token(TokenKind::TagClose);
                self.end_token();
                State::Data
            }
            None => {
                self.report(ParseErrorKind::EofInTag);
                State::Data
            }
            Some(_) => {
                self.start_token(TokenKind::Identifier);
                self.reconsume_in(State::AttributeName)
            }
        }
    }

    fn before_attribute_value(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(c) if is_whitespace(c) => {
                self.append_tag_whitespace(c);
                State::BeforeAttributeValue
            }
            Some('"') => {
                self.start_token(TokenKind::Literal);
                State::AttributeValueDoubleQuoted
            }
            Some('\'') => {
                self.start_token(TokenKind::Literal);
                State::AttributeValueSingleQuoted
            }
            Some('>') => {
                self.report(ParseErrorKind::MissingAttributeValue);
                self.start_token(TokenKind::TagClose);
                self.end_token();
                State::Data
            }
            None => self.reconsume_in(State::AttributeValueUnquoted),
            Some(_) => {
                self.start_token(TokenKind::Literal);
                self.reconsume_in(State::AttributeValueUnquoted)
            }
        }
    }

    fn attribute_value_quoted(&mut self, cp: Option<char>, quote: char) -> State {
        match cp {
            Some(c) if c == quote => {
                self.end_token();
                State::AfterAttributeValueQuoted
            }
            Some('&') => self.start_reference(self.state),
            None => {
                self.report(ParseErrorKind::EofInTag);
                State::Data
            }
            Some(c) => {
                self.push_char(c);
                self.state
            }
        }
    }

    fn attribute_value_unquoted(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(c) if is_whitespace(c) => {
                self.start_token(TokenKind::Whitespace);
                self.push_char(c);
                State::BeforeAttributeName
            }
            Some('&') => self.start_reference(State::AttributeValueUnquoted),
            Some('>') => {
                self.start_token(TokenKind::TagClose);
                self.end_token();
                State::Data
            }
            None => {
                self.report(ParseErrorKind::EofInTag);
                State::Data
            }
            Some(c) => {
                if matches!(c, '"' | '\'' | '<' | '=' | '`') {
                    self.report(ParseErrorKind::UnexpectedCharacterInUnquotedAttributeValue);
                }
                self.push_char(c);
                State::AttributeValueUnquoted
            }
        }
    }

    fn after_attribute_value_quoted(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(c) if is_whitespace(c) => {
                self.start_token(TokenKind::Whitespace);
                self.push_char(c);
                State::BeforeAttributeName
            }
            Some('/') => {
                self.mark = self.cp_start;
                State::SelfClosingStartTag
            }
            Some('>') => {
                self.start_token(TokenKind::TagClose);
                self.end_token();
                State::Data
            }
            None => {
                self.report(ParseErrorKind::EofInTag);
                State::Data
            }
            Some(_) => {
                self.report(ParseErrorKind::MissingWhitespaceBetweenAttributes);
                self.reconsume_in(State::BeforeAttributeName)
            }
        }
    }

    fn self_closing_start_tag(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('>') => {
                self.start_token_at(TokenKind::SelfClosingTagClose, self.mark);
                self.end_token();
                State::Data
            }
            None => {
                self.report(ParseErrorKind::EofInTag);
                State::Data
            }
            Some(_) => {
                self.report(ParseErrorKind::UnexpectedSolidusInTag);
                self.reconsume_in(State::BeforeAttributeName)
            }
        }
    }

    fn bogus_comment(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('>') => {
                self.end_token();
                State::Data
            }
            None => State::Data,
            Some(c) => {
                self.push_char(c);
                State::BogusComment
            }
        }
    }

    fn markup_declaration_open(&mut self, cp: Option<char>) -> State {
        let rest = &self.text[self.cp_start..];
        if rest.starts_with("--") {
            self.offset = self.cp_start + 2;
            self.start_token_at(TokenKind::Comment, self.mark);
            return State::CommentStart;
        }
        if rest.starts_with("[CDATA[") {
            if self.namespace.is_foreign() {
                self.offset = self.cp_start + "[CDATA[".len();
                self.start_token_at(TokenKind::CDataText, self.mark);
                return State::CdataSection;
            }
            self.report(ParseErrorKind::CdataInHtmlContent);
        } else {
            self.report(ParseErrorKind::IncorrectlyOpenedComment);
        }
        self.start_token_at(TokenKind::BogusComment, self.mark);
        if cp.is_none() {
            return State::Data;
        }
        self.reconsume_in(State::BogusComment)
    }

    fn comment_start(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('-') => State::CommentStartDash,
            Some('>') => {
                self.report(ParseErrorKind::AbruptClosingOfEmptyComment);
                self.end_token();
                State::Data
            }
            _ => self.reconsume_in(State::Comment),
        }
    }

    fn comment_start_dash(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('-') => State::CommentEnd,
            Some('>') => {
                self.report(ParseErrorKind::AbruptClosingOfEmptyComment);
                self.end_token();
                State::Data
            }
            None => {
                self.report(ParseErrorKind::EofInComment);
                State::Data
            }
            Some(_) => {
                self.push_char('-');
                self.reconsume_in(State::Comment)
            }
        }
    }

    fn comment(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('<') => {
                self.push_char('<');
                State::CommentLessThanSign
            }
            Some('-') => State::CommentEndDash,
            None => {
                self.report(ParseErrorKind::EofInComment);
                State::Data
            }
            Some(c) => {
                self.push_char(c);
                State::Comment
            }
        }
    }

    fn comment_less_than_sign(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('!') => {
                self.push_char('!');
                State::CommentLessThanSignBang
            }
            Some('<') => {
                self.push_char('<');
                State::CommentLessThanSign
            }
            _ => self.reconsume_in(State::Comment),
        }
    }

    fn comment_less_than_sign_bang(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('-') => State::CommentLessThanSignBangDash,
            _ => self.reconsume_in(State::Comment),
        }
    }

    fn comment_less_than_sign_bang_dash(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('-') => State::CommentLessThanSignBangDashDash,
            _ => self.reconsume_in(State::CommentEndDash),
        }
    }

    fn comment_less_than_sign_bang_dash_dash(&mut self, cp: Option<char>) -> State {
        if !matches!(cp, Some('>') | None) {
            self.report(ParseErrorKind::NestedComment);
        }
        self.reconsume_in(State::CommentEnd)
    }

    fn comment_end_dash(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('-') => State::CommentEnd,
            None => {
                self.report(ParseErrorKind::EofInComment);
                State::Data
            }
            Some(_) => {
                self.push_char('-');
                self.reconsume_in(State::Comment)
            }
        }
    }

    fn comment_end(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('>') => {
                self.end_token();
                State::Data
            }
            Some('!') => State::CommentEndBang,
            Some('-') => {
                self.push_char('-');
                State::CommentEnd
            }
            None => {
                self.report(ParseErrorKind::EofInComment);
                State::Data
            }
            Some(_) => {
                self.push_str("--");
                self.reconsume_in(State::Comment)
            }
        }
    }

    fn comment_end_bang(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('-') => {
                self.push_str("--!");
                State::CommentEndDash
            }
            Some('>') => {
                self.report(ParseErrorKind::IncorrectlyClosedComment);
                self.end_token();
                State::Data
            }
            None => {
                self.report(ParseErrorKind::EofInComment);
                State::Data
            }
            Some(_) => {
                self.push_str("--!");
                self.reconsume_in(State::Comment)
            }
        }
    }

    fn cdata_section(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(']') => State::CdataSectionBracket,
            None => {
                self.report(ParseErrorKind::EofInCdata);
                State::Data
            }
            Some(c) => {
                self.push_char(c);
                State::CdataSection
            }
        }
    }

    fn cdata_section_bracket(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(']') => State::CdataSectionEnd,
            _ => {
                self.push_char(']');
                self.reconsume_in(State::CdataSection)
            }
        }
    }

    fn cdata_section_end(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(']') => {
                self.push_char(']');
                State::CdataSectionEnd
            }
            Some('>') => {
                self.end_token();
                State::Data
            }
            _ => {
                self.push_str("]]");
                self.reconsume_in(State::CdataSection)
            }
        }
    }

    fn character_reference(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(c) if is_letter_or_digit(c) => self.reconsume_in(State::NamedCharacterReference),
            Some('#') => State::NumericCharacterReference,
            _ => {
                self.flush_reference("&");
                self.reconsume_in(self.return_state)
            }
        }
    }

    fn named_character_reference(&mut self, _cp: Option<char>) -> State {
        let text = self.text;
        let Some(found) = entities::match_named(&text[self.cp_start..]) else {
            self.flush_reference("&");
            return self.reconsume_in(State::AmbiguousAmpersand);
        };

        let end = self.cp_start + found.len;
        let next = text[end..].chars().next();
        let keep_raw = self.return_state.is_attribute_value()
            && !found.terminated
            && next.map_or(false, |c| c == '=' || is_letter_or_digit(c));

        if keep_raw {
            self.flush_reference(&text[self.ref_start..end]);
        } else {
            if !found.terminated {
                self.report_at(ParseErrorKind::MissingSemicolonAfterCharacterReference, end);
            }
            self.flush_decoded(found.value, end);
        }
        self.offset = end;
        self.return_state
    }

    fn ambiguous_ampersand(&mut self, cp: Option<char>) -> State {
        match cp {
            Some(c) if is_letter_or_digit(c) => {
                let mut buf = [0u8; 4];
                self.flush_reference(c.encode_utf8(&mut buf));
                State::AmbiguousAmpersand
            }
            Some(';') => {
                self.report(ParseErrorKind::UnknownNamedCharacterReference);
                self.reconsume_in(self.return_state)
            }
            _ => self.reconsume_in(self.return_state),
        }
    }

    fn numeric_character_reference(&mut self, cp: Option<char>) -> State {
        self.char_code = 0;
        match cp {
            Some('x') | Some('X') => State::HexadecimalCharacterReferenceStart,
            _ => self.reconsume_in(State::DecimalCharacterReferenceStart),
        }
    }

    fn numeric_reference_start(&mut self, cp: Option<char>, digits: State) -> State {
        let valid = match (cp, digits) {
            (Some(c), State::HexadecimalCharacterReference) => is_hex_digit(c),
            (Some(c), _) => is_digit(c),
            (None, _) => false,
        };
        if valid {
            return self.reconsume_in(digits);
        }
        self.report(ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference);
        let text = self.text;
        self.flush_reference(&text[self.ref_start..self.cp_start]);
        self.reconsume_in(self.return_state)
    }

    fn numeric_reference_digits(&mut self, cp: Option<char>, radix: u32) -> State {
        match cp {
            Some(c) if c.is_digit(radix) => {
                let digit = c.to_digit(radix).unwrap_or(0);
                self.char_code = (self.char_code * radix + digit).min(0x11_0000);
                self.state
            }
            Some(';') => {
                self.finish_numeric_reference(self.offset);
                self.return_state
            }
            _ => {
                self.report(ParseErrorKind::MissingSemicolonAfterCharacterReference);
                self.finish_numeric_reference(self.cp_start);
                self.reconsume_in(self.return_state)
            }
        }
    }

    fn finish_numeric_reference(&mut self, end: usize) {
        let code = self.char_code;
        let c = if code == 0 {
            self.report(ParseErrorKind::NullCharacterReference);
            char::REPLACEMENT_CHARACTER
        } else if code > 0x10_FFFF {
            self.report(ParseErrorKind::CharacterReferenceOutsideUnicodeRange);
            char::REPLACEMENT_CHARACTER
        } else if is_surrogate(code) {
            self.report(ParseErrorKind::SurrogateCharacterReference);
            char::REPLACEMENT_CHARACTER
        } else {
            if is_noncharacter(code) {
                self.report(ParseErrorKind::NoncharacterCharacterReference);
            } else if code == 0x0D
                || (is_control(code) && !matches!(code, 0x09 | 0x0A | 0x0C | 0x20))
            {
                self.report(ParseErrorKind::ControlCharacterReference);
            }
            c1_replacement(code)
                .or_else(|| char::from_u32(code))
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        };
        let mut buf = [0u8; 4];
        self.flush_decoded(c.encode_utf8(&mut buf), end);
    }

    fn interpolation_start(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('{') => {
                self.start_token_at(TokenKind::InterpolationStart, self.mark);
                self.push_str("{{");
                self.end_token();
                self.interpolation_start = self.mark;
                State::InterpolationData
            }
            _ => {
                let kind = self.interpolation_return.text_kind();
                self.append_as(kind, "{", self.mark);
                self.reconsume_in(self.interpolation_return)
            }
        }
    }

    fn interpolation_data(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('}') => {
                self.mark = self.cp_start;
                State::InterpolationEnd
            }
            Some('&') => self.start_reference(State::InterpolationData),
            None => {
                self.report_at(ParseErrorKind::MissingInterpolationEnd, self.interpolation_start);
                self.reconsume_in(self.interpolation_return)
            }
            Some(c) => {
                self.append_data(TokenKind::Text, c);
                State::InterpolationData
            }
        }
    }

    fn interpolation_end(&mut self, cp: Option<char>) -> State {
        match cp {
            Some('}') => {
                self.start_token_at(TokenKind::InterpolationEnd, self.mark);
                self.push_str("}}");
                self.end_token();
                self.interpolation_return
            }
            _ => {
                self.append_as(TokenKind::Text, "}", self.mark);
                self.reconsume_in(State::InterpolationData)
            }
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use source_map::SourceOrigin;

    fn tokenizer(text: &str) -> Tokenizer<'_> {
        Tokenizer::new(text, Rc::new(Locator::new(text, SourceOrigin::default())))
    }

    fn kinds_and_values(text: &str) -> Vec<(TokenKind, String)> {
        tokenizer(text).map(|t| (t.kind, t.value)).collect()
    }

    fn error_codes(text: &str) -> Vec<&'static str> {
        let mut tokenizer = tokenizer(text);
        while tokenizer.next_token().is_some() {}
        let (_, errors) = tokenizer.finish();
        errors.iter().map(|e| e.code()).collect()
    }

    #[test]
    fn test_simple_element() {
        assert_eq!(
            kinds_and_values(r#"<div class="a">hi there</div>"#),
            vec![
                (TokenKind::TagOpen, "div".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::Identifier, "class".to_string()),
                (TokenKind::Association, String::new()),
                (TokenKind::Literal, "a".to_string()),
                (TokenKind::TagClose, String::new()),
                (TokenKind::Text, "hi".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::Text, "there".to_string()),
                (TokenKind::EndTagOpen, "div".to_string()),
                (TokenKind::TagClose, String::new()),
            ]
        );
    }

    #[test]
    fn test_spans_are_raw() {
        let tokens: Vec<Token> = tokenizer(r#"<a href='x'/>"#).collect();
        let literal = &tokens[4];
        assert_eq!(literal.kind, TokenKind::Literal);
        assert_eq!(literal.span, Span::from_usize(8, 11));
        let close = &tokens[5];
        assert_eq!(close.kind, TokenKind::SelfClosingTagClose);
        assert_eq!(close.span, Span::from_usize(11, 13));
    }

    #[test]
    fn test_interpolation() {
        assert_eq!(
            kinds_and_values("a{{ b }}"),
            vec![
                (TokenKind::Text, "a".to_string()),
                (TokenKind::InterpolationStart, "{{".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::Text, "b".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::InterpolationEnd, "}}".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_braces_are_text() {
        assert_eq!(
            kinds_and_values("{a}"),
            vec![(TokenKind::Text, "{a}".to_string())]
        );
    }

    #[test]
    fn test_interpolation_disabled() {
        let mut tokenizer = tokenizer("{{a}}");
        tokenizer.set_expression_enabled(false);
        let values: Vec<String> = tokenizer.map(|t| t.value).collect();
        assert_eq!(values, vec!["{{a}}".to_string()]);
    }

    #[test]
    fn test_unterminated_interpolation() {
        assert_eq!(error_codes("{{ foo"), vec!["x-missing-interpolation-end"]);
    }

    #[test]
    fn test_named_reference_records_gaps() {
        let mut tokenizer = tokenizer("a&lt;b");
        let tokens: Vec<Token> = tokenizer.by_ref().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, "a<b");
        assert_eq!(tokens[0].span, Span::from_usize(0, 6));
        let (gaps, errors) = tokenizer.finish();
        assert_eq!(gaps, vec![2, 3, 4]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_html5_named_references() {
        assert_eq!(
            kinds_and_values("&lbrace;&check;"),
            vec![(TokenKind::Text, "{\u{2713}".to_string())]
        );
        assert!(error_codes("&lbrace;&check;").is_empty());
    }

    #[test]
    fn test_two_code_point_reference_gaps() {
        let mut tokenizer = tokenizer("&NotEqualTilde;");
        let tokens: Vec<Token> = tokenizer.by_ref().collect();
        assert_eq!(tokens[0].value, "\u{2242}\u{338}");
        let (gaps, errors) = tokenizer.finish();
        assert_eq!(gaps, (5..15).collect::<Vec<u32>>());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(
            kinds_and_values("&#65;&#x42;&#128;"),
            vec![(TokenKind::Text, "AB\u{20AC}".to_string())]
        );
        assert_eq!(error_codes("&#0;"), vec!["null-character-reference"]);
        assert_eq!(
            error_codes("&#x110000;"),
            vec!["character-reference-outside-unicode-range"]
        );
        assert_eq!(
            error_codes("&#;"),
            vec!["absence-of-digits-in-numeric-character-reference"]
        );
    }

    #[test]
    fn test_legacy_reference_in_attribute() {
        let values: Vec<String> = tokenizer(r#"<a href="?a=1&copy=2&amp">"#)
            .filter(|t| t.kind == TokenKind::Literal)
            .map(|t| t.value)
            .collect();
        assert_eq!(values, vec!["?a=1&copy=2&".to_string()]);
    }

    #[test]
    fn test_unknown_reference() {
        assert_eq!(
            kinds_and_values("&foo;"),
            vec![(TokenKind::Text, "&foo;".to_string())]
        );
        assert_eq!(error_codes("&foo;"), vec!["unknown-named-character-reference"]);
    }

    #[test]
    fn test_crlf_collapses_with_gap() {
        let mut tokenizer = tokenizer("a\r\nb");
        let tokens: Vec<Token> = tokenizer.by_ref().collect();
        let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["a", "\n", "b"]);
        assert_eq!(tokens[1].span, Span::from_usize(1, 3));
        let (gaps, _) = tokenizer.finish();
        assert_eq!(gaps, vec![2]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            kinds_and_values("<!-- hi --><?php x ?>"),
            vec![
                (TokenKind::Comment, " hi ".to_string()),
                (TokenKind::BogusComment, "?php x ?".to_string()),
            ]
        );
        assert_eq!(
            error_codes("<!-->"),
            vec!["abrupt-closing-of-empty-comment"]
        );
        assert_eq!(error_codes("<!-- a"), vec!["eof-in-comment"]);
    }

    #[test]
    fn test_cdata_only_in_foreign_content() {
        assert_eq!(error_codes("<![CDATA[x]]>"), vec!["cdata-in-html-content"]);

        let mut tokenizer = tokenizer("<![CDATA[x<y]]>");
        tokenizer.set_namespace(Namespace::Svg);
        let tokens: Vec<(TokenKind, String)> = tokenizer.map(|t| (t.kind, t.value)).collect();
        assert_eq!(tokens, vec![(TokenKind::CDataText, "x<y".to_string())]);
    }

    #[test]
    fn test_raw_text_end_tag_sniffing() {
        let mut tokenizer = tokenizer("<script>a</b></script>");
        let mut out = Vec::new();
        while let Some(token) = tokenizer.next_token() {
            if token.kind == TokenKind::TagClose && out.len() == 1 {
                tokenizer.set_state(State::RawText);
            }
            out.push((token.kind, token.value));
        }
        assert_eq!(
            out,
            vec![
                (TokenKind::TagOpen, "script".to_string()),
                (TokenKind::TagClose, String::new()),
                (TokenKind::RawText, "a</b>".to_string()),
                (TokenKind::EndTagOpen, "script".to_string()),
                (TokenKind::TagClose, String::new()),
            ]
        );
    }

    #[test]
    fn test_tag_errors() {
        assert_eq!(error_codes("<div"), vec!["eof-in-tag"]);
        assert_eq!(error_codes("< div"), vec!["invalid-first-character-of-tag-name"]);
        assert_eq!(
            error_codes("<?x>"),
            vec!["unexpected-question-mark-instead-of-tag-name"]
        );
        assert_eq!(error_codes("<a / b>"), vec!["unexpected-solidus-in-tag"]);
        assert_eq!(
            error_codes(r#"<a b="c"d>"#),
            vec!["missing-whitespace-between-attributes"]
        );
        assert_eq!(error_codes("<a b=>"), vec!["missing-attribute-value"]);
    }

    #[test]
    fn test_null_is_kept() {
        assert_eq!(
            kinds_and_values("a\0b"),
            vec![(TokenKind::Text, "a\0b".to_string())]
        );
        assert_eq!(error_codes("a\0b"), vec!["unexpected-null-character"]);
    }

    #[test]
    fn test_tokens_do_not_overlap() {
        let text = r#"<div :a="b" @c='d'>x &amp; {{ y }}<br/><!-- c --></div>"#;
        let tokens: Vec<Token> = tokenizer(text).collect();
        for pair in tokens.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start, "{:?}", pair);
        }
    }
}
