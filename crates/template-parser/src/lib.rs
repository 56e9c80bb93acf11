//! Location-exact parser for Vue-style templates.
//!
//! This crate parses the template block of a single-file component into a
//! tree whose every node, token and error carries host-file coordinates:
//! - HTML-aware tokenizer with character references and interpolation
//! - Tree builder with implied end tags, void, raw-text and foreign elements
//! - Directive keys, `v-for`, `v-on`, scope parameters and filter chains
//! - Embedded expressions parsed with swc, with references resolved to the
//!   variables declared by enclosing elements
//!
//! Nothing here aborts: malformed input yields a best-effort tree plus
//! errors.
//!
//! # Example
//!
//! ```
//! use template_parser::{parse, NodeKind};
//!
//! let result = parse(r#"<ul><li v-for="item in items">{{ item.name }}</li></ul>"#);
//! assert!(result.errors.is_empty());
//!
//! let ul = result.ast.children(result.ast.root())[0];
//! let li = result.ast.children(ul)[0];
//! assert!(matches!(result.ast[li].kind, NodeKind::Element(_)));
//! assert_eq!(result.ast.element(li).unwrap().variables[0].name(), "item");
//! ```

mod ast;
mod chars;
mod directive;
mod entities;
mod error;
mod intermediate;
mod namespace;
mod parser;
mod scanner;
mod script;
mod token;
mod tokenizer;
mod visitor;

pub use ast::*;
pub use error::{ParseError, ParseErrorKind};
pub use namespace::Namespace;
pub use source_map::{ByteOffset, Position, SourceLocation, SourceOrigin, Span};
pub use token::{Token, TokenKind};
pub use visitor::{visitor_keys, walk, Visitor};

use rayon::prelude::*;

/// Options for parsing a template.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Where the template text starts in the host file.
    pub origin: SourceOrigin,
    /// Grammar for embedded expressions.
    pub script_lang: ScriptLang,
    /// Whether `|` filter chains are recognized in mustaches and `v-bind`.
    pub filters: bool,
    /// Whether to log tokenizer state transitions.
    pub trace: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            origin: SourceOrigin::default(),
            script_lang: ScriptLang::JavaScript,
            filters: true,
            trace: false,
        }
    }
}

/// The result of parsing a template.
#[derive(Debug)]
pub struct ParseResult {
    /// The template tree.
    pub ast: Ast,
    /// All tokens except comments, in source order.
    pub tokens: Vec<Token>,
    /// Comment tokens, in source order.
    pub comments: Vec<Token>,
    /// Errors, sorted by host offset.
    pub errors: Vec<ParseError>,
}

/// One template of a batch.
#[derive(Debug, Clone)]
pub struct TemplateInput {
    pub text: String,
    pub options: ParseOptions,
}

impl TemplateInput {
    pub fn new(text: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }
}

/// Parses a template with default options.
pub fn parse(text: &str) -> ParseResult {
    parse_with_options(text, &ParseOptions::default())
}

/// Parses a template with custom options.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> ParseResult {
    parser::TemplateParser::new(text, options).parse()
}

/// Parses independent templates in parallel. Results keep the input order.
pub fn parse_all(inputs: &[TemplateInput]) -> Vec<ParseResult> {
    inputs
        .par_iter()
        .map(|input| parse_with_options(&input.text, &input.options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty() {
        let result = parse("");
        assert!(result.errors.is_empty());
        assert!(result.tokens.is_empty());
        assert_eq!(result.ast[result.ast.root()].span, Span::from_usize(0, 0));
    }

    #[test]
    fn test_parse_simple_element() {
        let result = parse("<div>hello</div>");
        assert!(result.errors.is_empty());
        assert_eq!(result.ast.children(result.ast.root()).len(), 1);
    }

    #[test]
    fn test_origin_shifts_everything() {
        let options = ParseOptions {
            origin: SourceOrigin::new(10, 2, 10),
            ..ParseOptions::default()
        };
        let result = parse_with_options("<b>{{ x }}</b>", &options);
        let b = result.ast.children(result.ast.root())[0];
        assert_eq!(result.ast[b].span, Span::from_usize(10, 24));
        assert_eq!(result.ast[b].loc.start, Position::new(2, 10));

        let mustache = result.ast.children(b)[0];
        let NodeKind::ExpressionContainer(container) = &result.ast[mustache].kind else {
            panic!("expected a mustache");
        };
        assert_eq!(container.references[0].span(), Span::from_usize(16, 17));
    }

    #[test]
    fn test_filters_option() {
        let options = ParseOptions {
            filters: false,
            ..ParseOptions::default()
        };
        let result = parse_with_options("<p>{{ a | b }}</p>", &options);
        assert!(result.errors.is_empty());
        let p = result.ast.children(result.ast.root())[0];
        let NodeKind::ExpressionContainer(container) = &result.ast[result.ast.children(p)[0]].kind
        else {
            panic!("expected a mustache");
        };
        assert_eq!(container.expression.as_ref().map(|e| e.type_name()), Some("Expression"));
    }

    #[test]
    fn test_comment_with_apostrophe_in_expression() {
        let source = r#"<div @click="() => {
    // it's a comment with 'quotes'
    count++
}"></div>"#;
        let result = parse(source);
        assert!(
            result.errors.is_empty(),
            "Expected no errors, got: {:?}",
            result.errors
        );
    }

    #[test]
    fn test_parse_all_keeps_order() {
        let inputs = vec![
            TemplateInput::new("<a></a>", ParseOptions::default()),
            TemplateInput::new("<b>", ParseOptions::default()),
            TemplateInput::new("</c>", ParseOptions::default()),
        ];
        let results = parse_all(&inputs);
        let names: Vec<usize> = results.iter().map(|r| r.errors.len()).collect();
        assert_eq!(names, vec![0, 0, 1]);
        let b = results[1].ast.children(results[1].ast.root())[0];
        assert_eq!(results[1].ast.element(b).unwrap().name, "b");
    }
}
