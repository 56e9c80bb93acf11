//! Tree builder.
//!
//! Pulls intermediate tokens and builds the element tree with an explicit
//! stack of open elements. Directive attributes and mustaches are only
//! recorded during this pass; they are parsed once tokenization is complete
//! and the full gap list is known.

use crate::ast::{
    Ast, Node, NodeId, NodeKind, VAttribute, VDirectiveArgument, VElement, VEndTag, VExpressionContainer,
    VIdentifier, VLiteral, VPlainAttribute, VStartTag, VText, VariableRef,
};
use crate::directive::{self, DirectiveContext};
use crate::error::{ParseError, ParseErrorKind};
use crate::intermediate::{
    AttributeToken, EndTagToken, IntermediateToken, IntermediateTokenizer, MustacheToken,
    StartTagToken, TextToken,
};
use crate::namespace::{adjust_attribute_name, adjust_element_name, Namespace};
use crate::script;
use crate::tokenizer::{State, Tokenizer};
use crate::{ParseOptions, ParseResult};
use source_map::{ByteOffset, LocationCalculator, Locator, Span};
use std::rc::Rc;

/// HTML void elements; they never have children or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is raw text.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "script", "style", "xmp",
];

/// Elements whose content is text with character references.
const RCDATA_ELEMENTS: &[&str] = &["textarea", "title"];

/// Elements that implicitly close an open `<p>`.
const NON_PHRASING_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "base", "blockquote", "body", "caption", "col", "colgroup",
    "dd", "details", "dialog", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer",
    "form", "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html",
    "legend", "li", "menuitem", "meta", "optgroup", "option", "param", "rp", "rt", "source",
    "style", "summary", "tbody", "td", "tfoot", "th", "thead", "title", "tr", "track",
];

/// Elements implicitly closed by a sibling of the same name.
const CAN_BE_LEFT_OPEN: &[&str] = &[
    "colgroup", "li", "option", "p", "source", "td", "tfoot", "th", "thead", "tr",
];

fn is_dt_or_dd(name: &str) -> bool {
    name == "dt" || name == "dd"
}

/// Foreign elements whose content is parsed as HTML.
fn is_html_integration_point(element: &VElement) -> bool {
    match element.namespace {
        Namespace::MathMl => {
            element.name == "annotation-xml"
                && element.attribute("encoding").is_some_and(|attr| {
                    attr.value.as_ref().is_some_and(|value| {
                        value.value.eq_ignore_ascii_case("text/html")
                            || value.value.eq_ignore_ascii_case("application/xhtml+xml")
                    })
                })
        }
        Namespace::Svg => matches!(element.name.as_str(), "foreignObject" | "desc" | "title"),
        _ => false,
    }
}

fn is_mathml_text_integration_point(element: &VElement) -> bool {
    element.namespace == Namespace::MathMl
        && matches!(element.name.as_str(), "mi" | "mo" | "mn" | "ms" | "mtext")
}

/// A mustache waiting for its expression.
#[derive(Debug)]
struct PendingMustache {
    node: NodeId,
    value: String,
    /// Host offset of the first character after `{{`.
    start: ByteOffset,
}

/// Builds the template tree.
pub(crate) struct TemplateParser<'a> {
    text: &'a str,
    options: &'a ParseOptions,
    locator: Rc<Locator>,
    tokens: IntermediateTokenizer<'a>,
    ast: Ast,
    /// Open elements, innermost last.
    stack: Vec<NodeId>,
    /// The element whose `v-pre` disabled interpolation, while it is open.
    v_pre: Option<NodeId>,
    /// Attributes to convert to directives: `(element, attribute index)`.
    directives: Vec<(NodeId, usize)>,
    mustaches: Vec<PendingMustache>,
    errors: Vec<ParseError>,
}

impl<'a> TemplateParser<'a> {
    pub(crate) fn new(text: &'a str, options: &'a ParseOptions) -> Self {
        let locator = Rc::new(Locator::new(text, options.origin));
        let tokenizer = Tokenizer::new(text, Rc::clone(&locator)).with_trace(options.trace);
        let span = locator.full_span();
        let ast = Ast::new(span, locator.location(span));
        Self {
            text,
            options,
            locator,
            tokens: IntermediateTokenizer::new(tokenizer),
            ast,
            stack: Vec::new(),
            v_pre: None,
            directives: Vec::new(),
            mustaches: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn parse(mut self) -> ParseResult {
        while let Some(token) = self.tokens.next_token() {
            if self.options.trace {
                log::trace!("tree builder: {} open, token at {:?}", self.stack.len(), token.span());
            }
            match token {
                IntermediateToken::StartTag(tag) => self.on_start_tag(tag),
                IntermediateToken::EndTag(tag) => self.on_end_tag(tag),
                IntermediateToken::Text(text) => self.on_text(text),
                IntermediateToken::Mustache(mustache) => self.on_mustache(mustache),
            }
        }
        while let Some(id) = self.stack.pop() {
            self.close_element(id);
        }
        self.update_root_span();

        let TemplateParser {
            text,
            options,
            locator,
            tokens,
            mut ast,
            directives,
            mustaches,
            errors: tree_errors,
            ..
        } = self;

        let (tokens, comments, gaps, mut errors) = tokens.finish();
        errors.extend(tree_errors);

        let calc = LocationCalculator::new(locator, Rc::from(gaps));
        let ctx = DirectiveContext {
            text,
            calc: &calc,
            lang: options.script_lang,
            filters: options.filters,
        };
        convert_directives(&mut ast, &directives, &ctx, &mut errors);
        parse_mustaches(&mut ast, mustaches, &ctx, &mut errors);
        resolve_references(&mut ast);

        errors.sort_by_key(|e| e.index);
        ParseResult {
            ast,
            tokens,
            comments,
            errors,
        }
    }

    fn current(&self) -> NodeId {
        self.stack.last().copied().unwrap_or_else(|| self.ast.root())
    }

    fn current_element(&self) -> Option<&VElement> {
        self.stack.last().and_then(|&id| self.ast.element(id))
    }

    fn current_namespace(&self) -> Namespace {
        self.current_element()
            .map_or(Namespace::Html, |element| element.namespace)
    }

    fn report(&mut self, kind: ParseErrorKind, offset: ByteOffset) {
        let position = self.locator.position(offset);
        self.errors.push(ParseError::new(kind, offset, position));
    }

    fn on_start_tag(&mut self, tag: StartTagToken) {
        let lower = tag.raw_name.to_ascii_lowercase();
        self.close_implied(&lower);

        let parent = self.current();
        let namespace = self.detect_namespace(&lower, &tag);
        let name = adjust_element_name(&tag.raw_name, namespace);
        let attributes: Vec<VAttribute> = tag
            .attributes
            .iter()
            .map(|attr| VAttribute::Attribute(self.plain_attribute(attr, namespace)))
            .collect();
        self.check_namespace_attributes(&attributes, namespace);

        let is_void = namespace == Namespace::Html && VOID_ELEMENTS.contains(&name.as_str());
        let element = VElement {
            name,
            raw_name: tag.raw_name,
            namespace,
            start_tag: VStartTag {
                self_closing: tag.self_closing,
                attributes,
                span: tag.span,
                loc: tag.loc,
            },
            end_tag: None,
            children: Vec::new(),
            variables: Vec::new(),
        };
        let id = self
            .ast
            .append(parent, Node::new(NodeKind::Element(element), tag.span, tag.loc));
        self.schedule_directives(id);

        if tag.self_closing || is_void {
            self.close_element(id);
            return;
        }

        self.stack.push(id);
        self.tokens.tokenizer_mut().set_namespace(namespace);
        if namespace == Namespace::Html {
            if RAW_TEXT_ELEMENTS.contains(&lower.as_str()) {
                self.tokens.tokenizer_mut().set_state(State::RawText);
            } else if RCDATA_ELEMENTS.contains(&lower.as_str()) {
                self.tokens.tokenizer_mut().set_state(State::RcData);
            }
        }
    }

    /// Closes the current element if the start tag `name` implies its end.
    fn close_implied(&mut self, name: &str) {
        let Some(element) = self.current_element() else {
            return;
        };
        if element.namespace != Namespace::Html {
            return;
        }
        let current = element.name.as_str();
        let implied = (current == "p" && NON_PHRASING_ELEMENTS.contains(&name))
            || (current == name && CAN_BE_LEFT_OPEN.contains(&name))
            || (is_dt_or_dd(name) && is_dt_or_dd(current));
        if implied {
            if let Some(id) = self.stack.pop() {
                self.close_element(id);
                self.sync_namespace();
            }
        }
    }

    fn detect_namespace(&self, name: &str, tag: &StartTagToken) -> Namespace {
        let mut namespace = self.current_namespace();

        if namespace.is_foreign() {
            if let Some(parent) = self.current_element() {
                if parent.namespace == Namespace::MathMl
                    && parent.name == "annotation-xml"
                    && name == "svg"
                {
                    return Namespace::Svg;
                }
                if is_html_integration_point(parent)
                    || (is_mathml_text_integration_point(parent)
                        && name != "mglyph"
                        && name != "malignmark")
                {
                    namespace = Namespace::Html;
                }
            }
        }

        if namespace == Namespace::Html {
            match name {
                "svg" => return Namespace::Svg,
                "math" => return Namespace::MathMl,
                _ => {}
            }
        }

        if name == "template" {
            let declared = tag
                .attributes
                .iter()
                .find(|attr| attr.key.value.eq_ignore_ascii_case("xmlns"))
                .and_then(|attr| attr.value.as_ref())
                .and_then(|value| Namespace::from_uri(&value.value));
            if let Some(ns @ (Namespace::Html | Namespace::Svg | Namespace::MathMl)) = declared {
                return ns;
            }
        }

        namespace
    }

    fn plain_attribute(&self, attr: &AttributeToken, namespace: Namespace) -> VPlainAttribute {
        VPlainAttribute {
            key: VIdentifier {
                name: adjust_attribute_name(&attr.key.value, namespace),
                raw_name: attr.key.value.clone(),
                span: attr.key.span,
                loc: attr.key.loc,
            },
            value: attr.value.as_ref().map(|value| VLiteral {
                value: value.value.clone(),
                span: value.span,
                loc: value.loc,
            }),
            span: attr.span,
            loc: attr.loc,
        }
    }

    /// `xmlns` must name the element's namespace and `xmlns:xlink` the XLink
    /// namespace.
    fn check_namespace_attributes(&mut self, attributes: &[VAttribute], namespace: Namespace) {
        for attribute in attributes {
            let VAttribute::Attribute(attr) = attribute else {
                continue;
            };
            let expected = match attr.key.name.as_str() {
                "xmlns" => namespace.uri(),
                "xmlns:xlink" => Namespace::XLink.uri(),
                _ => continue,
            };
            let value = attr.value.as_ref().map_or("", |v| v.value.as_str());
            if value != expected {
                self.report(
                    ParseErrorKind::InvalidNamespace {
                        name: attr.key.name.clone(),
                    },
                    attr.key.span.start,
                );
            }
        }
    }

    /// Records the attributes of `id` that become directives.
    ///
    /// Inside a `v-pre` subtree nothing is converted; on the `v-pre` element
    /// itself only the `v-pre` attribute is.
    fn schedule_directives(&mut self, id: NodeId) {
        if self.v_pre.is_some() {
            return;
        }
        let Some(element) = self.ast.element(id) else {
            return;
        };

        let has_v_pre = element.start_tag.attributes.iter().any(|attribute| {
            matches!(attribute, VAttribute::Attribute(attr) if attr.key.raw_name == "v-pre")
        });
        for (index, attribute) in element.start_tag.attributes.iter().enumerate() {
            let VAttribute::Attribute(attr) = attribute else {
                continue;
            };
            let raw_name = attr.key.raw_name.as_str();
            let scheduled = if has_v_pre {
                raw_name == "v-pre"
            } else {
                directive::is_directive(raw_name, &element.name)
            };
            if scheduled {
                self.directives.push((id, index));
            }
        }

        if has_v_pre {
            log::debug!("v-pre on <{}>, interpolation disabled", element.name);
            self.v_pre = Some(id);
            self.tokens.tokenizer_mut().set_expression_enabled(false);
        }
    }

    fn on_end_tag(&mut self, tag: EndTagToken) {
        let position = self.stack.iter().rposition(|&id| {
            self.ast
                .element(id)
                .is_some_and(|element| element.name.eq_ignore_ascii_case(&tag.raw_name))
        });
        let Some(position) = position else {
            self.report(
                ParseErrorKind::InvalidEndTag {
                    name: tag.raw_name.to_ascii_lowercase(),
                },
                tag.span.start,
            );
            return;
        };

        let target = self.stack[position];
        if let Some(element) = self.ast.element_mut(target) {
            element.end_tag = Some(VEndTag {
                span: tag.span,
                loc: tag.loc,
            });
        }
        while self.stack.len() > position {
            if let Some(id) = self.stack.pop() {
                self.close_element(id);
            }
        }
        self.sync_namespace();
    }

    fn on_text(&mut self, text: TextToken) {
        let parent = self.current();
        self.ast.append(
            parent,
            Node::new(
                NodeKind::Text(VText { value: text.value }),
                text.span,
                text.loc,
            ),
        );
    }

    fn on_mustache(&mut self, mustache: MustacheToken) {
        let parent = self.current();
        let container = VExpressionContainer {
            expression: None,
            references: Vec::new(),
            span: mustache.span,
            loc: mustache.loc,
        };
        let node = self.ast.append(
            parent,
            Node::new(
                NodeKind::ExpressionContainer(container),
                mustache.span,
                mustache.loc,
            ),
        );
        self.mustaches.push(PendingMustache {
            node,
            value: mustache.value,
            start: mustache.start.span.end,
        });
    }

    /// Fixes the end of a closed element: its end tag, else its last child,
    /// else its start tag.
    fn close_element(&mut self, id: NodeId) {
        let end = self.ast.element(id).map(|element| {
            if let Some(end_tag) = &element.end_tag {
                (end_tag.span.end, end_tag.loc.end)
            } else if let Some(&last) = element.children.last() {
                let child = &self.ast[last];
                (child.span.end, child.loc.end)
            } else {
                (element.start_tag.span.end, element.start_tag.loc.end)
            }
        });
        if let Some((offset, position)) = end {
            let node = self.ast.node_mut(id);
            node.span = node.span.with_end(offset);
            node.loc.end = position;
        }

        if self.v_pre == Some(id) {
            self.v_pre = None;
            self.tokens.tokenizer_mut().set_expression_enabled(true);
        }
    }

    fn sync_namespace(&mut self) {
        let namespace = self.current_namespace();
        self.tokens.tokenizer_mut().set_namespace(namespace);
    }

    /// The root spans its first to its last child.
    fn update_root_span(&mut self) {
        let root = self.ast.root();
        let children = self.ast.children(root);
        let span = match (children.first(), children.last()) {
            (Some(&first), Some(&last)) => {
                Span::new(self.ast[first].span.start, self.ast[last].span.end)
            }
            _ => Span::empty(self.locator.host(0)),
        };
        let loc = self.locator.location(span);
        let node = self.ast.node_mut(root);
        node.span = span;
        node.loc = loc;
    }
}

fn convert_directives(
    ast: &mut Ast,
    directives: &[(NodeId, usize)],
    ctx: &DirectiveContext<'_>,
    errors: &mut Vec<ParseError>,
) {
    for &(id, index) in directives {
        let Some(element) = ast.element(id) else {
            continue;
        };
        let Some(VAttribute::Attribute(attribute)) = element.start_tag.attributes.get(index) else {
            continue;
        };
        let converted = directive::convert(attribute, ctx);
        errors.extend(converted.errors);
        if let Some(element) = ast.element_mut(id) {
            element.start_tag.attributes[index] = VAttribute::Directive(converted.directive);
            element.variables.extend(converted.variables);
        }
    }
}

fn parse_mustaches(
    ast: &mut Ast,
    mustaches: Vec<PendingMustache>,
    ctx: &DirectiveContext<'_>,
    errors: &mut Vec<ParseError>,
) {
    for mustache in mustaches {
        let calc = ctx.calc.after_offset(mustache.start);
        let parsed = match script::parse_expression(&mustache.value, &calc, ctx.lang, ctx.filters)
        {
            Ok(parsed) => parsed,
            Err(err) => {
                errors.push(err);
                continue;
            }
        };
        if let NodeKind::ExpressionContainer(container) = &mut ast.node_mut(mustache.node).kind {
            container.expression = parsed.expression;
            container.references = parsed.references;
        }
    }
}

/// Where an expression container lives.
#[derive(Debug, Clone, Copy)]
enum ContainerSlot {
    /// A mustache node.
    Node(NodeId),
    /// The value of attribute `.1` of element `.0`.
    Value(NodeId, usize),
    /// The dynamic argument of attribute `.1` of element `.0`.
    Argument(NodeId, usize),
}

fn container_mut(ast: &mut Ast, slot: ContainerSlot) -> Option<&mut VExpressionContainer> {
    let (id, index, argument) = match slot {
        ContainerSlot::Node(id) => {
            return match &mut ast.node_mut(id).kind {
                NodeKind::ExpressionContainer(container) => Some(container),
                _ => None,
            };
        }
        ContainerSlot::Value(id, index) => (id, index, false),
        ContainerSlot::Argument(id, index) => (id, index, true),
    };
    let element = ast.element_mut(id)?;
    let VAttribute::Directive(directive) = element.start_tag.attributes.get_mut(index)? else {
        return None;
    };
    if argument {
        match directive.key.argument.as_mut()? {
            VDirectiveArgument::Dynamic(container) => Some(container),
            VDirectiveArgument::Static(_) => None,
        }
    } else {
        directive.value.as_mut()
    }
}

/// Binds every reference to the nearest enclosing variable of the same name.
///
/// A reference is looked up starting at `scope` and then through its
/// ancestors. The values of `v-for` and scope directives start at the parent
/// of their element, since the variables they declare are not in scope in
/// their own value.
fn resolve_references(ast: &mut Ast) {
    let mut resolved: Vec<(ContainerSlot, usize, VariableRef)> = Vec::new();

    let view: &Ast = ast;
    for (id, node) in view.iter() {
        match &node.kind {
            NodeKind::ExpressionContainer(container) => {
                find_variables(view, node.parent, container, ContainerSlot::Node(id), &mut resolved);
            }
            NodeKind::Element(element) => {
                for (index, attribute) in element.start_tag.attributes.iter().enumerate() {
                    let VAttribute::Directive(directive) = attribute else {
                        continue;
                    };
                    if let Some(VDirectiveArgument::Dynamic(container)) =
                        &directive.key.argument
                    {
                        let slot = ContainerSlot::Argument(id, index);
                        find_variables(view, Some(id), container, slot, &mut resolved);
                    }
                    if let Some(container) = &directive.value {
                        let declares = matches!(
                            directive.key.name.name.as_str(),
                            "for" | "slot" | "slot-scope" | "scope"
                        );
                        let scope = if declares { node.parent } else { Some(id) };
                        let slot = ContainerSlot::Value(id, index);
                        find_variables(view, scope, container, slot, &mut resolved);
                    }
                }
            }
            _ => {}
        }
    }

    for (slot, index, variable) in resolved {
        let Some(reference) = container_mut(ast, slot).and_then(|c| c.references.get_mut(index))
        else {
            continue;
        };
        reference.variable = Some(variable);
        let ident = reference.id.clone();
        if let Some(element) = ast.element_mut(variable.element) {
            if let Some(declared) = element.variables.get_mut(variable.index) {
                declared.references.push(ident);
            }
        }
    }
}

fn find_variables(
    ast: &Ast,
    scope: Option<NodeId>,
    container: &VExpressionContainer,
    slot: ContainerSlot,
    resolved: &mut Vec<(ContainerSlot, usize, VariableRef)>,
) {
    for (index, reference) in container.references.iter().enumerate() {
        let chain = scope
            .into_iter()
            .chain(scope.into_iter().flat_map(|id| ast.ancestors(id)));
        for element_id in chain {
            let Some(element) = ast.element(element_id) else {
                continue;
            };
            if let Some(variable) = element
                .variables
                .iter()
                .rposition(|v| v.name() == reference.name())
            {
                resolved.push((
                    slot,
                    index,
                    VariableRef {
                        element: element_id,
                        index: variable,
                    },
                ));
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::VExpression;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> ParseResult {
        let options = ParseOptions::default();
        TemplateParser::new(text, &options).parse()
    }

    fn element_names(result: &ParseResult, parent: NodeId) -> Vec<String> {
        result
            .ast
            .children(parent)
            .iter()
            .filter_map(|&id| result.ast.element(id).map(|e| e.name.clone()))
            .collect()
    }

    fn codes(result: &ParseResult) -> Vec<&'static str> {
        result.errors.iter().map(|e| e.code()).collect()
    }

    #[test]
    fn test_nested_elements() {
        let result = parse("<div><span>hi</span></div>");
        assert!(result.errors.is_empty());
        let root = result.ast.root();
        assert_eq!(element_names(&result, root), vec!["div"]);
        let div = result.ast.children(root)[0];
        assert_eq!(element_names(&result, div), vec!["span"]);
        assert_eq!(result.ast[div].span, Span::from_usize(0, 26));
        assert_eq!(result.ast[root].span, Span::from_usize(0, 26));
    }

    #[test]
    fn test_paragraph_auto_close() {
        let result = parse("<p>a<div>b</div>");
        let root = result.ast.root();
        assert_eq!(element_names(&result, root), vec!["p", "div"]);
        let p = result.ast.children(root)[0];
        assert!(result.ast.element(p).unwrap().end_tag.is_none());
        assert_eq!(result.ast[p].span, Span::from_usize(0, 4));
    }

    #[test]
    fn test_list_items_left_open() {
        let result = parse("<ul><li>a<li>b</ul>");
        assert!(result.errors.is_empty());
        let ul = result.ast.children(result.ast.root())[0];
        assert_eq!(element_names(&result, ul), vec!["li", "li"]);
    }

    #[test]
    fn test_dt_dd_close_each_other() {
        let result = parse("<dl><dt>a<dd>b<dt>c</dl>");
        let dl = result.ast.children(result.ast.root())[0];
        assert_eq!(element_names(&result, dl), vec!["dt", "dd", "dt"]);
    }

    #[test]
    fn test_void_and_self_closing() {
        let result = parse("<div><br><input/><my-comp/>x</div>");
        assert!(result.errors.is_empty());
        let div = result.ast.children(result.ast.root())[0];
        assert_eq!(element_names(&result, div), vec!["br", "input", "my-comp"]);
        assert_eq!(result.ast.children(div).len(), 4);
    }

    #[test]
    fn test_unmatched_end_tag() {
        let result = parse("<div></span></div>");
        assert_eq!(codes(&result), vec!["x-invalid-end-tag"]);
        assert_eq!(result.errors[0].index, 5);
        let div = result.ast.children(result.ast.root())[0];
        assert!(result.ast.element(div).unwrap().end_tag.is_some());
    }

    #[test]
    fn test_end_tag_closes_open_descendants() {
        let result = parse("<div><span>a</div>");
        assert!(result.errors.is_empty());
        let div = result.ast.children(result.ast.root())[0];
        let span = result.ast.children(div)[0];
        assert!(result.ast.element(span).unwrap().end_tag.is_none());
        assert_eq!(result.ast[span].span, Span::from_usize(5, 12));
    }

    #[test]
    fn test_raw_text_element() {
        let result = parse("<script>if (a < b) {{ x }}</script><p>{{ y }}</p>");
        let root = result.ast.root();
        let script = result.ast.children(root)[0];
        let children = result.ast.children(script);
        assert_eq!(children.len(), 1);
        let NodeKind::Text(text) = &result.ast[children[0]].kind else {
            panic!("expected raw text");
        };
        assert_eq!(text.value, "if (a < b) {{ x }}");
        let p = result.ast.children(root)[1];
        assert_eq!(result.ast[result.ast.children(p)[0]].type_name(), "VExpressionContainer");
    }

    #[test]
    fn test_rcdata_decodes_references() {
        let result = parse("<textarea>a &amp; <b></textarea>");
        let textarea = result.ast.children(result.ast.root())[0];
        let NodeKind::Text(text) = &result.ast[result.ast.children(textarea)[0]].kind else {
            panic!("expected text");
        };
        assert_eq!(text.value, "a & <b>");
    }

    #[test]
    fn test_svg_namespace() {
        let result = parse("<svg viewbox=\"0 0 1 1\"><foreignobject><div></div></foreignobject></svg>");
        let svg = result.ast.children(result.ast.root())[0];
        let svg_el = result.ast.element(svg).unwrap();
        assert_eq!(svg_el.namespace, Namespace::Svg);
        assert!(svg_el.attribute("viewBox").is_some());
        let foreign = result.ast.children(svg)[0];
        let foreign_el = result.ast.element(foreign).unwrap();
        assert_eq!(foreign_el.name, "foreignObject");
        assert_eq!(foreign_el.namespace, Namespace::Svg);
        let div = result.ast.children(foreign)[0];
        assert_eq!(result.ast.element(div).unwrap().namespace, Namespace::Html);
    }

    #[test]
    fn test_math_namespace() {
        let result = parse("<math><mi>x</mi></math>");
        let math = result.ast.children(result.ast.root())[0];
        assert_eq!(result.ast.element(math).unwrap().namespace, Namespace::MathMl);
    }

    #[test]
    fn test_template_xmlns_override() {
        let result = parse("<template xmlns=\"http://www.w3.org/2000/svg\"><circle/></template>");
        assert!(result.errors.is_empty());
        let template = result.ast.children(result.ast.root())[0];
        assert_eq!(result.ast.element(template).unwrap().namespace, Namespace::Svg);
    }

    #[test]
    fn test_invalid_namespace_attribute() {
        let result = parse("<svg xmlns=\"http://example.com\"></svg>");
        assert_eq!(codes(&result), vec!["x-invalid-namespace"]);
        assert_eq!(result.errors[0].index, 5);
    }

    #[test]
    fn test_directives_are_converted() {
        let result = parse("<input :value=\"msg\" class=\"a\" @input=\"msg = $event\">");
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        let input = result.ast.children(result.ast.root())[0];
        let attributes = &result.ast.element(input).unwrap().start_tag.attributes;
        let kinds: Vec<bool> = attributes.iter().map(|a| a.is_directive()).collect();
        assert_eq!(kinds, vec![true, false, true]);
    }

    #[test]
    fn test_v_pre_keeps_subtree_plain() {
        let result = parse("<div v-pre :a=\"b\"><span :c=\"d\">{{ raw }}</span></div><p>{{ x }}</p>");
        let root = result.ast.root();
        let div = result.ast.children(root)[0];
        let element = result.ast.element(div).unwrap();
        let kinds: Vec<bool> = element.start_tag.attributes.iter().map(|a| a.is_directive()).collect();
        assert_eq!(kinds, vec![true, false]);

        let span = result.ast.children(div)[0];
        let span_el = result.ast.element(span).unwrap();
        assert!(!span_el.start_tag.attributes[0].is_directive());
        let text = result.ast.children(span)[0];
        assert_eq!(result.ast[text].type_name(), "VText");

        let p = result.ast.children(root)[1];
        assert_eq!(result.ast[result.ast.children(p)[0]].type_name(), "VExpressionContainer");
    }

    #[test]
    fn test_references_resolve_to_v_for_variables() {
        let result = parse("<li v-for=\"item in items\" :key=\"item.id\">{{ item.name }} {{ other }}</li>");
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        let li = result.ast.children(result.ast.root())[0];
        let element = result.ast.element(li).unwrap();
        assert_eq!(element.variables.len(), 1);
        // `:key` and the first mustache.
        assert_eq!(element.variables[0].references.len(), 2);

        let VAttribute::Directive(v_for) = &element.start_tag.attributes[0] else {
            panic!("expected v-for");
        };
        let container = v_for.value.as_ref().unwrap();
        assert!(matches!(container.expression, Some(VExpression::For(_))));
        assert_eq!(container.references[0].name(), "items");
        assert!(container.references[0].variable.is_none());

        let mustaches: Vec<_> = result
            .ast
            .children(li)
            .iter()
            .filter_map(|&id| match &result.ast[id].kind {
                NodeKind::ExpressionContainer(c) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(
            mustaches[0].references[0].variable,
            Some(VariableRef { element: li, index: 0 })
        );
        assert!(mustaches[1].references[0].variable.is_none());
    }

    #[test]
    fn test_expression_error_keeps_directive() {
        let result = parse("<div :a=\"b +\"></div>");
        assert_eq!(codes(&result), vec!["x-expression-error"]);
        let div = result.ast.children(result.ast.root())[0];
        let VAttribute::Directive(directive) = &result.ast.element(div).unwrap().start_tag.attributes[0]
        else {
            panic!("expected a directive");
        };
        assert!(directive.value.as_ref().unwrap().expression.is_none());
    }

    #[test]
    fn test_empty_value_has_null_expression() {
        let result = parse("<div v-if=\"\"></div>");
        assert!(result.errors.is_empty());
        let div = result.ast.children(result.ast.root())[0];
        let VAttribute::Directive(directive) = &result.ast.element(div).unwrap().start_tag.attributes[0]
        else {
            panic!("expected a directive");
        };
        let container = directive.value.as_ref().unwrap();
        assert!(container.expression.is_none());
        assert_eq!(container.span, Span::from_usize(10, 12));
    }
}
