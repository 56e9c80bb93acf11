//! Directive recognition and conversion.
//!
//! The tree builder records every attribute whose name looks like a directive.
//! Once the tree and the gap list are complete, each of them is rewritten into
//! a [`VDirective`]: the name is decomposed into name, argument and modifiers,
//! and the value is parsed by the sub-parser its directive calls for.

use crate::ast::{
    ScriptLang, VDirective, VDirectiveArgument, VDirectiveKey, VExpressionContainer, VIdentifier,
    VPlainAttribute, Variable,
};
use crate::error::{ParseError, ParseErrorKind};
use crate::script::{self, ParsedValue};
use once_cell::sync::Lazy;
use regex::Regex;
use source_map::{ByteOffset, LocationCalculator, Locator, Span};
use text_size::TextSize;

/// `v-name...` or a shorthand sigil, not ending in a sigil.
///
/// A name with a trailing sigil such as `v-on:click.` stays a plain
/// attribute, so the key parser only ever sees empty inner modifiers.
static DIRECTIVE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:v-|[.:@#]).*[^.:@#]$").expect("valid regex"));

/// Whether the attribute `raw_name` on element `element_name` is a directive.
pub(crate) fn is_directive(raw_name: &str, element_name: &str) -> bool {
    DIRECTIVE_NAME.is_match(raw_name)
        || raw_name == "slot-scope"
        || (element_name == "template" && raw_name == "scope")
}

/// Shared inputs of every conversion in one template.
pub(crate) struct DirectiveContext<'a> {
    /// The template text.
    pub text: &'a str,
    /// Calculator for the whole template.
    pub calc: &'a LocationCalculator,
    pub lang: ScriptLang,
    pub filters: bool,
}

impl DirectiveContext<'_> {
    fn locator(&self) -> &Locator {
        self.calc.locator()
    }

    /// Identifier for `raw[start..end]` of an attribute name at `base`.
    fn identifier(&self, base: ByteOffset, raw: &str, start: usize, end: usize) -> VIdentifier {
        self.named_identifier(base, start, end, &raw[start..end], &raw[start..end])
    }

    fn named_identifier(
        &self,
        base: ByteOffset,
        start: usize,
        end: usize,
        name: &str,
        raw_name: &str,
    ) -> VIdentifier {
        let span = Span::new(base + size(start), base + size(end));
        VIdentifier {
            name: name.to_string(),
            raw_name: raw_name.to_string(),
            span,
            loc: self.locator().location(span),
        }
    }

    fn invalid(&self, offset: ByteOffset, message: &str) -> ParseError {
        log::debug!("invalid directive at {}: {}", u32::from(offset), message);
        ParseError::new(
            ParseErrorKind::InvalidDirective {
                message: message.to_string(),
            },
            offset,
            self.locator().position(offset),
        )
    }
}

fn size(n: usize) -> TextSize {
    TextSize::from(n as u32)
}

/// A directive built from a plain attribute.
#[derive(Debug)]
pub(crate) struct ConvertedDirective {
    pub directive: VDirective,
    /// Variables the directive declares on its element.
    pub variables: Vec<Variable>,
    pub errors: Vec<ParseError>,
}

/// Rewrites `attribute` into a directive.
pub(crate) fn convert(attribute: &VPlainAttribute, ctx: &DirectiveContext<'_>) -> ConvertedDirective {
    let mut errors = Vec::new();
    let key = parse_key(&attribute.key, ctx, &mut errors);

    let name = key.name.name.as_str();
    let has_argument = key.argument.is_some();
    log::debug!(
        "converting {} to directive '{}'",
        attribute.key.raw_name,
        name
    );

    let mut variables = Vec::new();
    let value = attribute.value.as_ref().map(|literal| {
        let code = literal.value.as_str();
        let calc = value_calculator(literal.span, ctx);
        let parsed = match name {
            "for" => script::parse_v_for(code, &calc, ctx.lang),
            "on" if has_argument => script::parse_v_on(code, &calc, ctx.lang),
            "slot" | "slot-scope" | "scope" => script::parse_slot_scope(code, &calc, ctx.lang),
            "bind" => script::parse_expression(code, &calc, ctx.lang, ctx.filters),
            _ => script::parse_expression(code, &calc, ctx.lang, false),
        };
        let parsed = parsed.unwrap_or_else(|err| {
            errors.push(err);
            ParsedValue::default()
        });
        variables = parsed.variables;
        VExpressionContainer {
            expression: parsed.expression,
            references: parsed.references,
            span: literal.span,
            loc: literal.loc,
        }
    });

    ConvertedDirective {
        directive: VDirective {
            key,
            value,
            span: attribute.span,
            loc: attribute.loc,
        },
        variables,
        errors,
    }
}

/// A calculator whose index 0 is the first character of the value, past the
/// opening quote.
fn value_calculator(span: Span, ctx: &DirectiveContext<'_>) -> LocationCalculator {
    let start = ctx.locator().relative(span.start);
    let quoted = matches!(ctx.text.as_bytes().get(start), Some(b'"' | b'\''));
    let offset = if quoted { span.start + size(1) } else { span.start };
    ctx.calc.after_offset(offset)
}

/// Decomposes an attribute name into a [`VDirectiveKey`].
///
/// Attribute names never contain character references, so index `i` of the
/// raw name is host offset `key.span.start + i`.
fn parse_key(
    key: &VIdentifier,
    ctx: &DirectiveContext<'_>,
    errors: &mut Vec<ParseError>,
) -> VDirectiveKey {
    let raw = key.raw_name.as_str();
    let base = key.span.start;
    let mut modifiers = Vec::new();

    // The name, and where the argument (if any) begins.
    let (name, mut i, argument_follows) = match raw.as_bytes().first() {
        Some(b':') => (ctx.named_identifier(base, 0, 1, "bind", ":"), 1, true),
        Some(b'@') => (ctx.named_identifier(base, 0, 1, "on", "@"), 1, true),
        Some(b'#') => (ctx.named_identifier(base, 0, 1, "slot", "#"), 1, true),
        Some(b'.') => {
            modifiers.push(ctx.named_identifier(base, 0, 1, "prop", "."));
            (ctx.named_identifier(base, 0, 1, "bind", "."), 1, true)
        }
        _ if raw.starts_with("v-") => {
            let end = raw[2..]
                .find([':', '.'])
                .map_or(raw.len(), |n| n + 2);
            let name = ctx.identifier(base, raw, 2, end);
            match raw.as_bytes().get(end) {
                Some(b':') => (name, end + 1, true),
                _ => (name, end, false),
            }
        }
        // `slot-scope` and `scope`.
        _ => (ctx.identifier(base, raw, 0, raw.len()), raw.len(), false),
    };

    let mut argument = None;
    if argument_follows {
        if raw[i..].starts_with('[') {
            match matching_bracket(&raw[i..]) {
                Some(close) => {
                    let end = i + close + 1;
                    argument = Some(VDirectiveArgument::Dynamic(dynamic_argument(
                        raw, base, i, end, ctx, errors,
                    )));
                    i = end;
                    if i < raw.len() && raw.as_bytes()[i] != b'.' {
                        errors.push(ctx.invalid(
                            base + size(i),
                            "a dynamic argument must be followed by '.' or the end of the name",
                        ));
                        i = raw[i..].find('.').map_or(raw.len(), |n| n + i);
                    }
                }
                None => {
                    errors.push(ctx.invalid(base + size(i), "unterminated dynamic argument"));
                    i = raw.len();
                }
            }
        } else {
            let end = raw[i..].find('.').map_or(raw.len(), |n| n + i);
            if end > i {
                argument = Some(VDirectiveArgument::Static(ctx.identifier(base, raw, i, end)));
            }
            i = end;
        }
    }

    // Modifiers: `.a.b`; every segment must be non-empty.
    while i < raw.len() {
        debug_assert_eq!(raw.as_bytes()[i], b'.');
        let start = i + 1;
        let end = raw[start..].find('.').map_or(raw.len(), |n| n + start);
        if end == start {
            errors.push(ctx.invalid(base + size(i), "unexpected '.'"));
        } else {
            modifiers.push(ctx.identifier(base, raw, start, end));
        }
        i = end;
    }

    VDirectiveKey {
        name,
        argument,
        modifiers,
        span: key.span,
        loc: key.loc,
    }
}

/// Index of the `]` closing the `[` at the start of `text`.
fn matching_bracket(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parses `[expr]` at `raw[start..end]` as an expression container.
fn dynamic_argument(
    raw: &str,
    base: ByteOffset,
    start: usize,
    end: usize,
    ctx: &DirectiveContext<'_>,
    errors: &mut Vec<ParseError>,
) -> VExpressionContainer {
    let span = Span::new(base + size(start), base + size(end));
    let code = &raw[start + 1..end - 1];
    let calc = ctx.calc.after_offset(base + size(start + 1));
    let parsed = script::parse_expression(code, &calc, ctx.lang, false).unwrap_or_else(|err| {
        errors.push(err);
        ParsedValue::default()
    });
    VExpressionContainer {
        expression: parsed.expression,
        references: parsed.references,
        span,
        loc: ctx.locator().location(span),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use source_map::SourceOrigin;
    use std::rc::Rc;

    fn key_of(raw: &str) -> (VDirectiveKey, Vec<ParseError>) {
        let locator = Rc::new(Locator::new(raw, SourceOrigin::default()));
        let calc = LocationCalculator::new(locator, Rc::from(Vec::new()));
        let ctx = DirectiveContext {
            text: raw,
            calc: &calc,
            lang: ScriptLang::JavaScript,
            filters: true,
        };
        let span = Span::from_usize(0, raw.len());
        let key = VIdentifier {
            name: raw.to_string(),
            raw_name: raw.to_string(),
            span,
            loc: calc.locator().location(span),
        };
        let mut errors = Vec::new();
        let parsed = parse_key(&key, &ctx, &mut errors);
        (parsed, errors)
    }

    fn describe(key: &VDirectiveKey) -> (String, Option<String>, Vec<String>) {
        let argument = key.argument.as_ref().map(|a| match a {
            VDirectiveArgument::Static(id) => id.name.clone(),
            VDirectiveArgument::Dynamic(_) => "[dynamic]".to_string(),
        });
        let modifiers = key.modifiers.iter().map(|m| m.name.clone()).collect();
        (key.name.name.clone(), argument, modifiers)
    }

    #[test]
    fn test_recognizes_directives() {
        assert!(is_directive("v-if", "div"));
        assert!(is_directive(":foo", "div"));
        assert!(is_directive("@click", "div"));
        assert!(is_directive("#default", "template"));
        assert!(is_directive(".prop", "div"));
        assert!(is_directive("slot-scope", "div"));
        assert!(is_directive("scope", "template"));
        assert!(!is_directive("scope", "div"));
        assert!(!is_directive("class", "div"));
        assert!(!is_directive(":", "div"));
        assert!(!is_directive("v-", "div"));
    }

    #[test]
    fn test_full_syntax() {
        let (key, errors) = key_of("v-on:click.stop.prevent");
        assert!(errors.is_empty());
        assert_eq!(
            describe(&key),
            (
                "on".to_string(),
                Some("click".to_string()),
                vec!["stop".to_string(), "prevent".to_string()]
            )
        );
        assert_eq!(key.name.span, Span::from_usize(2, 4));
        assert_eq!(key.modifiers[1].span, Span::from_usize(16, 23));
    }

    #[test]
    fn test_shorthands() {
        assert_eq!(
            describe(&key_of(":value").0),
            ("bind".to_string(), Some("value".to_string()), vec![])
        );
        assert_eq!(
            describe(&key_of("@input.lazy").0),
            ("on".to_string(), Some("input".to_string()), vec!["lazy".to_string()])
        );
        assert_eq!(
            describe(&key_of("#header").0),
            ("slot".to_string(), Some("header".to_string()), vec![])
        );
        assert_eq!(
            describe(&key_of(".textContent").0),
            (
                "bind".to_string(),
                Some("textContent".to_string()),
                vec!["prop".to_string()]
            )
        );
    }

    #[test]
    fn test_modifiers_without_argument() {
        let (key, errors) = key_of("v-model.trim");
        assert!(errors.is_empty());
        assert_eq!(
            describe(&key),
            ("model".to_string(), None, vec!["trim".to_string()])
        );
    }

    #[test]
    fn test_dynamic_argument() {
        let (key, errors) = key_of("v-bind:[attrName].camel");
        assert!(errors.is_empty());
        let Some(VDirectiveArgument::Dynamic(container)) = &key.argument else {
            panic!("expected a dynamic argument");
        };
        assert_eq!(container.span, Span::from_usize(7, 17));
        assert_eq!(container.references.len(), 1);
        assert_eq!(container.references[0].name(), "attrName");
        assert_eq!(container.references[0].span(), Span::from_usize(8, 16));
        assert_eq!(key.modifiers.len(), 1);
    }

    #[test]
    fn test_empty_modifier_is_reported() {
        let (key, errors) = key_of("v-on:click..stop");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), "x-invalid-directive");
        assert_eq!(errors[0].index, 10);
        assert_eq!(describe(&key).1, Some("click".to_string()));
        assert_eq!(key.modifiers.len(), 1);
        assert_eq!(key.modifiers[0].name, "stop");
    }

    #[test]
    fn test_trailing_sigil_is_not_a_directive() {
        assert!(!is_directive("v-on:click.", "div"));
        assert!(!is_directive(":", "div"));
        assert!(is_directive("v-on:click.stop", "div"));
    }

    #[test]
    fn test_bad_dynamic_argument_terminator() {
        let (_, errors) = key_of(":[name]x");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), "x-invalid-directive");
        assert_eq!(errors[0].index, 7);
    }

    #[test]
    fn test_legacy_scope_names() {
        let (key, errors) = key_of("slot-scope");
        assert!(errors.is_empty());
        assert_eq!(describe(&key), ("slot-scope".to_string(), None, vec![]));
    }
}
