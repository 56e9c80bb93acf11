//! Embedded expression parsing.
//!
//! Directive values and mustaches are parsed with swc by wrapping the
//! fragment in a minimal synthetic program (`0(` + code + `)` for a plain
//! expression, a function body for an event handler, and so on), then pulling
//! the interesting node back out. Spans are rewritten from positions in the
//! synthetic source to host offsets through the fragment's
//! [`LocationCalculator`], so the wrapper never shows up in a reported range.

mod scope;

use crate::ast::{
    span_of, Reference, ScriptLang, VExpression, VFilter, VFilterSequenceExpression,
    VForExpression, VOnExpression, VSlotScopeExpression, Variable, VariableKind,
};
use crate::error::{ParseError, ParseErrorKind};
use crate::scanner::{find_for_separator, split_filters};
use once_cell::sync::Lazy;
use regex::Regex;
use scope::{bound_idents, ReferenceCollector};
use source_map::{ByteOffset, LocationCalculator, Span};
use std::sync::Arc;
use swc_common::{BytePos, FileName, SourceMap, Span as SwcSpan, Spanned};
use swc_ecma_ast::{Callee, Expr, ExprOrSpread, ForHead, Function, Lit, Pat, Script, Stmt, UnaryOp};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};
use swc_ecma_visit::{VisitMut, VisitMutWith, VisitWith};

/// `x => ...`, `(a, b) => ...` or `function (...)`.
static IS_FUNCTION_EXPRESSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([\w$]+|\([^)]*?\))\s*=>|^function\s*\(").expect("valid regex")
});

/// `foo`, `foo.bar`, `foo['bar']`, `foo[0]`, `foo[bar]`.
static IS_SIMPLE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*|\['[^']*?'\]|\["[^"]*?"\]|\[\d+\]|\[[A-Za-z_$][\w$]*\])*$"#,
    )
    .expect("valid regex")
});

/// The result of parsing one embedded fragment.
#[derive(Debug, Default)]
pub(crate) struct ParsedValue {
    /// `None` for an empty fragment.
    pub expression: Option<VExpression>,
    /// References out of the fragment, in source order.
    pub references: Vec<Reference>,
    /// Variables the fragment declares (`v-for` aliases, scope parameters).
    pub variables: Vec<Variable>,
}

/// Parses a mustache or an attribute value as an expression.
///
/// `calc` maps indices of `code` to host offsets. With `filters` set, a
/// top-level `|` chain becomes a [`VFilterSequenceExpression`].
pub(crate) fn parse_expression(
    code: &str,
    calc: &LocationCalculator,
    lang: ScriptLang,
    filters: bool,
) -> Result<ParsedValue, ParseError> {
    if code.trim().is_empty() {
        return Ok(ParsedValue::default());
    }

    if filters {
        let parts = split_filters(code);
        if parts.len() > 1 {
            return parse_filter_sequence(code, &parts, calc, lang);
        }
    }

    let expression = parse_plain(code, calc, lang)?;
    let mut collector = ReferenceCollector::new(&[]);
    expression.visit_with(&mut collector);
    Ok(ParsedValue {
        expression: Some(VExpression::Expression(expression)),
        references: collector.finish(),
        variables: Vec::new(),
    })
}

/// Parses a `v-for` value: `alias in iterable` or `(a, b, c) of iterable`.
pub(crate) fn parse_v_for(
    code: &str,
    calc: &LocationCalculator,
    lang: ScriptLang,
) -> Result<ParsedValue, ParseError> {
    if code.trim().is_empty() {
        return Ok(ParsedValue::default());
    }

    let Some(separator) = find_for_separator(code) else {
        return Err(expression_error(
            calc,
            0,
            "Expected 'in' or 'of' in v-for expression",
        ));
    };

    let (left_start, left_end) = trimmed_range(&code[..separator.lo()]);
    if left_start >= left_end {
        return Err(expression_error(calc, 0, "Expected an alias in v-for expression"));
    }
    let alias = &code[left_start..left_end];
    let has_parens = alias.len() >= 2 && alias.starts_with('(') && alias.ends_with(')');
    let (inner_start, inner_end) = if has_parens {
        (left_start + 1, left_end - 1)
    } else {
        (left_start, left_end)
    };

    let left = parse_aliases(
        &code[inner_start..inner_end],
        &calc.shift(inner_start as i64),
        lang,
    )?;

    let right_code = &code[separator.hi()..];
    let right = parse_plain(right_code, &calc.shift(separator.hi() as i64), lang)?;
    let right_end = separator.hi() + right_code.trim_end().len();

    let mut collector = ReferenceCollector::new(&[]);
    right.visit_with(&mut collector);
    let mut references = collector.finish();
    let mut collector = ReferenceCollector::new(&[]);
    collector.declare_params(&left);
    references.extend(collector.finish());
    references.sort_by_key(|r| r.id.span.lo);

    let variables = declared_variables(&left, VariableKind::Iteration);

    Ok(ParsedValue {
        expression: Some(VExpression::For(VForExpression {
            left,
            right,
            has_parens,
            left_span: calc.span(left_start, left_end),
            span: calc.span(left_start, right_end),
        })),
        references,
        variables,
    })
}

/// Parses a `v-on` value.
///
/// Function expressions and member paths are kept as plain expressions; any
/// other fragment is a statement list with `$event` in scope.
pub(crate) fn parse_v_on(
    code: &str,
    calc: &LocationCalculator,
    lang: ScriptLang,
) -> Result<ParsedValue, ParseError> {
    let (start, end) = trimmed_range(code);
    if start >= end {
        return Ok(ParsedValue::default());
    }

    let trimmed = &code[start..end];
    if IS_FUNCTION_EXPRESSION.is_match(trimmed) || IS_SIMPLE_PATH.is_match(trimmed) {
        return parse_expression(code, calc, lang, false);
    }

    let script = parse_wrapped("void function($event){", code, "\n}", calc, lang)?;
    let Some(body) = wrapped_function(script).and_then(|f| f.body).map(|b| b.stmts) else {
        return Err(expression_error(calc, 0, "Unexpected token"));
    };

    let mut collector = ReferenceCollector::new(&["$event"]);
    body.visit_with(&mut collector);

    Ok(ParsedValue {
        expression: Some(VExpression::On(VOnExpression {
            body,
            span: calc.span(start, end),
        })),
        references: collector.finish(),
        variables: Vec::new(),
    })
}

/// Parses a `slot-scope`, `scope` or `v-slot` value as a parameter list.
///
/// An empty list declares nothing and yields no expression.
pub(crate) fn parse_slot_scope(
    code: &str,
    calc: &LocationCalculator,
    lang: ScriptLang,
) -> Result<ParsedValue, ParseError> {
    let (start, end) = trimmed_range(code);
    if start >= end {
        return Ok(ParsedValue::default());
    }

    let script = parse_wrapped("void function(", code, "\n) {}", calc, lang)?;
    let Some(function) = wrapped_function(script) else {
        return Err(expression_error(calc, 0, "Unexpected token"));
    };
    let params: Vec<Pat> = function.params.into_iter().map(|p| p.pat).collect();
    if params.is_empty() {
        return Ok(ParsedValue::default());
    }

    let mut collector = ReferenceCollector::new(&[]);
    collector.declare_params(&params);
    let variables = declared_variables(&params, VariableKind::Scope);

    Ok(ParsedValue {
        expression: Some(VExpression::SlotScope(VSlotScopeExpression {
            params,
            span: calc.span(start, end),
        })),
        references: collector.finish(),
        variables,
    })
}

fn parse_filter_sequence(
    code: &str,
    parts: &[Span],
    calc: &LocationCalculator,
    lang: ScriptLang,
) -> Result<ParsedValue, ParseError> {
    let head = parts[0];
    let expression = parse_plain(
        &code[head.lo()..head.hi()],
        &calc.shift(head.lo() as i64),
        lang,
    )?;

    let mut filters = Vec::with_capacity(parts.len() - 1);
    for part in &parts[1..] {
        let text = &code[part.lo()..part.hi()];
        if text.trim().is_empty() {
            return Err(expression_error(calc, part.lo(), "Expected a filter"));
        }
        let filter = parse_plain(text, &calc.shift(part.lo() as i64), lang)?;
        filters.push(into_filter(*filter, calc, part.lo())?);
    }

    let mut collector = ReferenceCollector::new(&[]);
    expression.visit_with(&mut collector);
    for filter in &filters {
        filter.arguments.visit_with(&mut collector);
    }

    let span = filters
        .iter()
        .fold(span_of(&*expression), |span, filter| span.cover(filter.span));

    Ok(ParsedValue {
        expression: Some(VExpression::Filter(VFilterSequenceExpression {
            expression,
            filters,
            span,
        })),
        references: collector.finish(),
        variables: Vec::new(),
    })
}

/// A filter is a bare name or a call on a bare name.
fn into_filter(expr: Expr, calc: &LocationCalculator, index: usize) -> Result<VFilter, ParseError> {
    match expr {
        Expr::Ident(callee) => Ok(VFilter {
            span: span_of(&callee),
            callee,
            arguments: Vec::new(),
        }),
        Expr::Call(call) => {
            let span = span_of(&call);
            match call.callee {
                Callee::Expr(callee) => match *callee {
                    Expr::Ident(callee) => Ok(VFilter {
                        callee,
                        arguments: call.args,
                        span,
                    }),
                    _ => Err(host_error(calc, span.lo() as u32, "Expected a filter name")),
                },
                _ => Err(host_error(calc, span.lo() as u32, "Expected a filter name")),
            }
        }
        _ => Err(expression_error(calc, index, "Expected a filter name or call")),
    }
}

/// Parses the aliases of a `v-for` as the elements of an array pattern.
fn parse_aliases(
    code: &str,
    calc: &LocationCalculator,
    lang: ScriptLang,
) -> Result<Vec<Pat>, ParseError> {
    let script = parse_wrapped("for(let [", code, "] of 0);", calc, lang)?;
    let mut body = script.body.into_iter();
    let (Some(Stmt::ForOf(for_of)), None) = (body.next(), body.next()) else {
        return Err(expression_error(calc, code.len(), "Unexpected token"));
    };
    let ForHead::VarDecl(decl) = for_of.left else {
        return Err(expression_error(calc, 0, "Unexpected token"));
    };
    let Some(Pat::Array(array)) = decl.decls.into_iter().next().map(|d| d.name) else {
        return Err(expression_error(calc, 0, "Unexpected token"));
    };
    Ok(array.elems.into_iter().flatten().collect())
}

/// Parses `code` as exactly one expression.
fn parse_plain(
    code: &str,
    calc: &LocationCalculator,
    lang: ScriptLang,
) -> Result<Box<Expr>, ParseError> {
    let script = parse_wrapped("0(", code, "\n)", calc, lang)?;
    let mut body = script.body.into_iter();
    let (Some(Stmt::Expr(stmt)), None) = (body.next(), body.next()) else {
        return Err(expression_error(calc, 0, "Unexpected token"));
    };
    let Expr::Call(call) = *stmt.expr else {
        return Err(expression_error(calc, 0, "Unexpected token"));
    };
    if !matches!(&call.callee, Callee::Expr(callee) if matches!(**callee, Expr::Lit(Lit::Num(_)))) {
        return Err(expression_error(calc, 0, "Unexpected token"));
    }

    let mut args = call.args.into_iter();
    match (args.next(), args.next()) {
        (None, _) => Err(expression_error(calc, 0, "Expected an expression")),
        (Some(_), Some(extra)) => Err(host_error(
            calc,
            span_of(&*extra.expr).lo() as u32,
            "Unexpected token",
        )),
        (Some(ExprOrSpread { spread: Some(spread), .. }), None) => {
            Err(host_error(calc, spread.lo.0, "Unexpected spread"))
        }
        (Some(arg), None) => Ok(arg.expr),
    }
}

/// Unwraps `void function (...) {...}`.
fn wrapped_function(script: Script) -> Option<Box<Function>> {
    let mut body = script.body.into_iter();
    let (Some(Stmt::Expr(stmt)), None) = (body.next(), body.next()) else {
        return None;
    };
    let Expr::Unary(unary) = *stmt.expr else {
        return None;
    };
    if unary.op != UnaryOp::Void {
        return None;
    }
    match *unary.arg {
        Expr::Fn(fn_expr) => Some(fn_expr.function),
        _ => None,
    }
}

fn syntax(lang: ScriptLang) -> Syntax {
    match lang {
        ScriptLang::TypeScript => Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        }),
        ScriptLang::JavaScript => Syntax::Es(EsSyntax {
            jsx: false,
            ..Default::default()
        }),
    }
}

/// Parses `prefix + code + suffix` as a script and rewrites every span to
/// host offsets. Positions inside the wrapper clamp to the fragment bounds.
fn parse_wrapped(
    prefix: &str,
    code: &str,
    suffix: &str,
    calc: &LocationCalculator,
    lang: ScriptLang,
) -> Result<Script, ParseError> {
    let cm: Arc<SourceMap> = Default::default();
    let fm = cm.new_source_file(
        FileName::Custom("template-expression".into()).into(),
        format!("{prefix}{code}{suffix}"),
    );
    let remapper = SpanRemapper {
        calc: calc.shift(-(prefix.len() as i64)),
        file_start: fm.start_pos,
        lo: prefix.len(),
        hi: prefix.len() + code.len(),
    };

    let mut parser = Parser::new(syntax(lang), StringInput::from(&*fm), None);
    let result = parser.parse_script();
    let recovered = parser.take_errors();

    let mut script = match result {
        Ok(script) => script,
        Err(err) => return Err(remapper.error(&err)),
    };
    if let Some(err) = recovered.first() {
        return Err(remapper.error(err));
    }

    let mut remapper = remapper;
    script.visit_mut_with(&mut remapper);
    Ok(script)
}

/// Rewrites swc positions in a wrapped source to host offsets.
struct SpanRemapper {
    /// Maps wrapped-source indices; the prefix is already shifted out.
    calc: LocationCalculator,
    file_start: BytePos,
    /// Bounds of the fragment inside the wrapped source.
    lo: usize,
    hi: usize,
}

impl SpanRemapper {
    fn host(&self, pos: BytePos) -> ByteOffset {
        let index = pos.0.saturating_sub(self.file_start.0) as usize;
        self.calc.offset_with_gap(index.clamp(self.lo, self.hi))
    }

    fn error(&self, err: &swc_ecma_parser::error::Error) -> ParseError {
        let offset = self.host(err.span().lo);
        let message = err.kind().msg().to_string();
        log::debug!("expression parse failed at {}: {}", u32::from(offset), message);
        ParseError::new(
            ParseErrorKind::ExpressionError { message },
            offset,
            self.calc.locator().position(offset),
        )
    }
}

impl VisitMut for SpanRemapper {
    fn visit_mut_span(&mut self, span: &mut SwcSpan) {
        if span.is_dummy() {
            return;
        }
        span.lo = BytePos(self.host(span.lo).into());
        span.hi = BytePos(self.host(span.hi).into());
    }
}

fn declared_variables(pats: &[Pat], kind: VariableKind) -> Vec<Variable> {
    let mut idents = Vec::new();
    for pat in pats {
        bound_idents(pat, &mut idents);
    }
    idents
        .into_iter()
        .map(|id| Variable {
            id,
            kind,
            references: Vec::new(),
        })
        .collect()
}

/// Byte range of `code` without leading and trailing whitespace.
fn trimmed_range(code: &str) -> (usize, usize) {
    let start = code.len() - code.trim_start().len();
    let end = code.trim_end().len();
    (start, end.max(start))
}

/// An expression error at index `index` of the fragment.
fn expression_error(calc: &LocationCalculator, index: usize, message: &str) -> ParseError {
    let offset = calc.offset_with_gap(index);
    log::debug!("expression error at {}: {}", u32::from(offset), message);
    ParseError::new(
        ParseErrorKind::ExpressionError {
            message: message.to_string(),
        },
        offset,
        calc.locator().position(offset),
    )
}

/// An expression error at an already remapped host offset.
fn host_error(calc: &LocationCalculator, offset: u32, message: &str) -> ParseError {
    let offset = ByteOffset::from(offset);
    log::debug!("expression error at {}: {}", u32::from(offset), message);
    ParseError::new(
        ParseErrorKind::ExpressionError {
            message: message.to_string(),
        },
        offset,
        calc.locator().position(offset),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ReferenceMode;
    use pretty_assertions::assert_eq;
    use source_map::{Locator, SourceOrigin};
    use std::rc::Rc;

    /// A calculator for `text` placed at host offset `base`, no gaps.
    fn calculator(text: &str, base: u32) -> LocationCalculator {
        let locator = Locator::new(text, SourceOrigin::new(base, 1, base));
        LocationCalculator::new(Rc::new(locator), Rc::from(Vec::new()))
    }

    fn names(references: &[Reference]) -> Vec<(&str, ReferenceMode)> {
        references.iter().map(|r| (r.name(), r.mode)).collect()
    }

    #[test]
    fn test_plain_expression_spans_are_host_offsets() {
        let code = "a + b";
        let parsed =
            parse_expression(code, &calculator(code, 100), ScriptLang::JavaScript, true).unwrap();
        let expression = parsed.expression.unwrap();
        assert_eq!(expression.type_name(), "Expression");
        assert_eq!(expression.span(), Span::new(100u32, 105u32));
        assert_eq!(
            names(&parsed.references),
            vec![("a", ReferenceMode::Read), ("b", ReferenceMode::Read)]
        );
        assert_eq!(parsed.references[1].span(), Span::new(104u32, 105u32));
    }

    #[test]
    fn test_empty_expression_is_null() {
        let parsed =
            parse_expression("  ", &calculator("  ", 0), ScriptLang::JavaScript, true).unwrap();
        assert!(parsed.expression.is_none());
        assert!(parsed.references.is_empty());
    }

    #[test]
    fn test_syntax_error_is_located_in_host() {
        let code = "a +";
        let err = parse_expression(code, &calculator(code, 10), ScriptLang::JavaScript, true)
            .unwrap_err();
        assert_eq!(err.code(), "x-expression-error");
        assert!((10..=13).contains(&err.index), "index {}", err.index);
    }

    #[test]
    fn test_two_expressions_are_rejected() {
        let code = "a, b";
        let err = parse_expression(code, &calculator(code, 0), ScriptLang::JavaScript, false)
            .unwrap_err();
        assert_eq!(err.code(), "x-expression-error");
        assert_eq!(err.index, 3);

        let code = "(a, b)";
        assert!(
            parse_expression(code, &calculator(code, 0), ScriptLang::JavaScript, false).is_ok()
        );

        let code = "a), (b";
        let err = parse_expression(code, &calculator(code, 0), ScriptLang::JavaScript, false)
            .unwrap_err();
        assert_eq!(err.code(), "x-expression-error");
    }

    #[test]
    fn test_local_bindings_are_not_references() {
        let code = "items.map(item => item.id + offset)";
        let parsed =
            parse_expression(code, &calculator(code, 0), ScriptLang::JavaScript, false).unwrap();
        assert_eq!(
            names(&parsed.references),
            vec![("items", ReferenceMode::Read), ("offset", ReferenceMode::Read)]
        );
    }

    #[test]
    fn test_single_assignment_is_read_write() {
        let code = "count += step";
        let parsed =
            parse_expression(code, &calculator(code, 0), ScriptLang::JavaScript, false).unwrap();
        assert_eq!(
            names(&parsed.references),
            vec![("count", ReferenceMode::ReadWrite), ("step", ReferenceMode::Read)]
        );
    }

    #[test]
    fn test_assignment_modes() {
        let code = "count += step; total = 1; i++";
        let parsed = parse_v_on(code, &calculator(code, 0), ScriptLang::JavaScript).unwrap();
        assert_eq!(
            names(&parsed.references),
            vec![
                ("count", ReferenceMode::ReadWrite),
                ("step", ReferenceMode::Read),
                ("total", ReferenceMode::Write),
                ("i", ReferenceMode::ReadWrite),
            ]
        );
    }

    #[test]
    fn test_filter_sequence() {
        let code = "message | capitalize | truncate(limit)";
        let parsed =
            parse_expression(code, &calculator(code, 0), ScriptLang::JavaScript, true).unwrap();
        let Some(VExpression::Filter(sequence)) = parsed.expression else {
            panic!("expected a filter sequence");
        };
        assert_eq!(sequence.filters.len(), 2);
        assert_eq!(&*sequence.filters[0].callee.sym, "capitalize");
        assert_eq!(&*sequence.filters[1].callee.sym, "truncate");
        assert_eq!(sequence.filters[1].arguments.len(), 1);
        assert_eq!(sequence.span, Span::new(0u32, code.len() as u32));
        assert_eq!(
            names(&parsed.references),
            vec![("message", ReferenceMode::Read), ("limit", ReferenceMode::Read)]
        );
    }

    #[test]
    fn test_logical_or_is_not_a_filter() {
        let code = "a || b";
        let parsed =
            parse_expression(code, &calculator(code, 0), ScriptLang::JavaScript, true).unwrap();
        assert_eq!(parsed.expression.unwrap().type_name(), "Expression");
    }

    #[test]
    fn test_filters_disabled() {
        let code = "a | b";
        let parsed =
            parse_expression(code, &calculator(code, 0), ScriptLang::JavaScript, false).unwrap();
        assert_eq!(parsed.expression.unwrap().type_name(), "Expression");
    }

    #[test]
    fn test_v_for_with_parens() {
        let code = "(val, idx) in list";
        let parsed = parse_v_for(code, &calculator(code, 50), ScriptLang::JavaScript).unwrap();
        let Some(VExpression::For(for_expr)) = parsed.expression else {
            panic!("expected a v-for expression");
        };
        assert!(for_expr.has_parens);
        assert_eq!(for_expr.left.len(), 2);
        assert_eq!(for_expr.left_span, Span::new(50u32, 60u32));
        assert_eq!(for_expr.span, Span::new(50u32, 68u32));
        assert_eq!(span_of(&*for_expr.right), Span::new(64u32, 68u32));

        let variables: Vec<_> = parsed.variables.iter().map(|v| v.name()).collect();
        assert_eq!(variables, vec!["val", "idx"]);
        assert_eq!(parsed.variables[0].span(), Span::new(51u32, 54u32));
        assert_eq!(names(&parsed.references), vec![("list", ReferenceMode::Read)]);
    }

    #[test]
    fn test_v_for_destructuring_and_of() {
        let code = "{ id, name = fallback } of users";
        let parsed = parse_v_for(code, &calculator(code, 0), ScriptLang::JavaScript).unwrap();
        let Some(VExpression::For(for_expr)) = &parsed.expression else {
            panic!("expected a v-for expression");
        };
        assert!(!for_expr.has_parens);
        let variables: Vec<_> = parsed.variables.iter().map(|v| v.name()).collect();
        assert_eq!(variables, vec!["id", "name"]);
        assert_eq!(
            names(&parsed.references),
            vec![("fallback", ReferenceMode::Read), ("users", ReferenceMode::Read)]
        );
    }

    #[test]
    fn test_v_for_alias_does_not_shadow_iterable() {
        let code = "node in node.children";
        let parsed = parse_v_for(code, &calculator(code, 0), ScriptLang::JavaScript).unwrap();
        assert_eq!(names(&parsed.references), vec![("node", ReferenceMode::Read)]);
        assert_eq!(parsed.references[0].span(), Span::new(8u32, 12u32));
    }

    #[test]
    fn test_v_for_without_separator() {
        let err = parse_v_for("items", &calculator("items", 0), ScriptLang::JavaScript)
            .unwrap_err();
        assert_eq!(err.code(), "x-expression-error");
        assert_eq!(err.index, 0);
    }

    #[test]
    fn test_v_on_statements_declare_event() {
        let code = "count++; emit($event)";
        let parsed = parse_v_on(code, &calculator(code, 0), ScriptLang::JavaScript).unwrap();
        let Some(VExpression::On(on)) = &parsed.expression else {
            panic!("expected a v-on expression");
        };
        assert_eq!(on.body.len(), 2);
        assert_eq!(on.span, Span::new(0u32, code.len() as u32));
        assert_eq!(
            names(&parsed.references),
            vec![("count", ReferenceMode::ReadWrite), ("emit", ReferenceMode::Read)]
        );
    }

    #[test]
    fn test_v_on_path_and_function_stay_expressions() {
        for code in ["handlers.click", "items[0]", "() => go(1)", "e => go(e)"] {
            let parsed = parse_v_on(code, &calculator(code, 0), ScriptLang::JavaScript).unwrap();
            assert_eq!(parsed.expression.unwrap().type_name(), "Expression", "{code}");
        }
    }

    #[test]
    fn test_slot_scope() {
        let code = "{ item, index }";
        let parsed = parse_slot_scope(code, &calculator(code, 0), ScriptLang::JavaScript).unwrap();
        assert_eq!(
            parsed.expression.as_ref().map(|e| e.type_name()),
            Some("VSlotScopeExpression")
        );
        let variables: Vec<_> = parsed.variables.iter().map(|v| v.name()).collect();
        assert_eq!(variables, vec!["item", "index"]);
        assert!(parsed.variables.iter().all(|v| v.kind == VariableKind::Scope));
    }

    #[test]
    fn test_empty_slot_scope_is_null() {
        let parsed = parse_slot_scope("", &calculator("", 0), ScriptLang::JavaScript).unwrap();
        assert!(parsed.expression.is_none());
        assert!(parsed.variables.is_empty());
    }

    #[test]
    fn test_typescript_expression() {
        let code = "(value as number) + 1";
        let parsed =
            parse_expression(code, &calculator(code, 0), ScriptLang::TypeScript, true).unwrap();
        assert_eq!(names(&parsed.references), vec![("value", ReferenceMode::Read)]);
    }
}
