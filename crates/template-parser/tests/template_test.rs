//! End-to-end tests over the public parse API.

use pretty_assertions::assert_eq;
use template_parser::{
    parse, parse_with_options, Ast, NodeId, NodeKind, ParseOptions, ReferenceMode, ScriptLang,
    SourceOrigin, Span, VAttribute, VDirective, VDirectiveArgument, VElement, VExpression,
    VExpressionContainer, VariableKind,
};

fn element(ast: &Ast, id: NodeId) -> &VElement {
    ast.element(id)
        .unwrap_or_else(|| panic!("expected an element, got {}", ast[id].type_name()))
}

fn child_elements(ast: &Ast, id: NodeId) -> Vec<NodeId> {
    ast.children(id)
        .iter()
        .copied()
        .filter(|&child| ast.element(child).is_some())
        .collect()
}

fn directive(attribute: &VAttribute) -> &VDirective {
    match attribute {
        VAttribute::Directive(directive) => directive,
        VAttribute::Attribute(attr) => panic!("expected a directive, got {}", attr.key.name),
    }
}

fn mustache(ast: &Ast, id: NodeId) -> &VExpressionContainer {
    match &ast[id].kind {
        NodeKind::ExpressionContainer(container) => container,
        _ => panic!("expected a mustache, got {}", ast[id].type_name()),
    }
}

fn slice(text: &str, span: Span) -> &str {
    &text[span.lo()..span.hi()]
}

#[test]
fn test_round_trip_element_with_directives() {
    let text = r#"<div :foo="a" @click="b()" v-for="x in xs"><span>{{x}}</span></div>"#;
    let result = parse(text);
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    let ast = &result.ast;
    let top = child_elements(ast, ast.root());
    assert_eq!(top.len(), 1);
    let div = element(ast, top[0]);
    assert_eq!(div.name, "div");

    let keys: Vec<(String, Option<String>)> = div
        .start_tag
        .attributes
        .iter()
        .map(|attribute| {
            let key = &directive(attribute).key;
            let argument = key.argument.as_ref().map(|argument| match argument {
                VDirectiveArgument::Static(name) => name.name.clone(),
                VDirectiveArgument::Dynamic(_) => "<dynamic>".to_string(),
            });
            (key.name.name.clone(), argument)
        })
        .collect();
    assert_eq!(
        keys,
        vec![
            ("bind".to_string(), Some("foo".to_string())),
            ("on".to_string(), Some("click".to_string())),
            ("for".to_string(), None),
        ]
    );

    assert_eq!(div.variables.len(), 1);
    assert_eq!(div.variables[0].name(), "x");
    assert_eq!(div.variables[0].kind, VariableKind::Iteration);
    assert_eq!(div.variables[0].kind.as_str(), "iteration");

    let span_id = child_elements(ast, top[0])[0];
    assert_eq!(element(ast, span_id).name, "span");
    let children = ast.children(span_id);
    assert_eq!(children.len(), 1);
    let container = mustache(ast, children[0]);
    assert_eq!(container.references.len(), 1);
    let reference = &container.references[0];
    assert_eq!(reference.name(), "x");
    assert_eq!(reference.mode, ReferenceMode::Read);
    let variable = reference.variable.expect("x resolves to the v-for variable");
    assert_eq!(variable.element, top[0]);
    assert_eq!(variable.index, 0);
    assert_eq!(div.variables[0].references.len(), 1);
}

#[test]
fn test_sibling_paragraphs_stay_siblings() {
    let result = parse("<p>a<b>b</b></p><p>c</p>");
    assert!(result.errors.is_empty());
    let top = child_elements(&result.ast, result.ast.root());
    let names: Vec<&str> = top
        .iter()
        .map(|&id| element(&result.ast, id).name.as_str())
        .collect();
    assert_eq!(names, vec!["p", "p"]);
}

#[test]
fn test_paragraph_closed_without_end_tag() {
    let result = parse("<p>a<p>b");
    assert!(result.errors.is_empty());
    let top = child_elements(&result.ast, result.ast.root());
    assert_eq!(top.len(), 2);
    assert!(element(&result.ast, top[0]).end_tag.is_none());
}

#[test]
fn test_duplicate_attribute() {
    let result = parse(r#"<div class="a" class="b"></div>"#);
    let codes: Vec<&str> = result.errors.iter().map(|e| e.code()).collect();
    assert_eq!(codes, vec!["duplicate-attribute"]);
    assert_eq!(result.errors[0].index, 15);

    let div = child_elements(&result.ast, result.ast.root())[0];
    assert_eq!(element(&result.ast, div).start_tag.attributes.len(), 2);
}

#[test]
fn test_unterminated_interpolation() {
    let result = parse("<p>{{ foo");
    let codes: Vec<&str> = result.errors.iter().map(|e| e.code()).collect();
    assert_eq!(codes, vec!["x-missing-interpolation-end"]);
    assert_eq!(result.errors[0].index, 3);

    let p = child_elements(&result.ast, result.ast.root())[0];
    let children = result.ast.children(p);
    assert_eq!(children.len(), 1);
    let NodeKind::Text(text) = &result.ast[children[0]].kind else {
        panic!("expected text");
    };
    assert_eq!(text.value, "{{ foo");
    assert_eq!(result.ast[p].span, Span::from_usize(0, 9));
}

#[test]
fn test_v_for_alias_grouping_is_preserved() {
    let text = r#"<li v-for="(val, idx) in list"></li>"#;
    let result = parse(text);
    assert!(result.errors.is_empty());

    let li_id = child_elements(&result.ast, result.ast.root())[0];
    let li = element(&result.ast, li_id);
    let names: Vec<&str> = li.variables.iter().map(|v| v.name()).collect();
    assert_eq!(names, vec!["val", "idx"]);

    let container = directive(&li.start_tag.attributes[0]).value.as_ref().unwrap();
    let Some(VExpression::For(for_expression)) = &container.expression else {
        panic!("expected a v-for expression");
    };
    assert!(for_expression.has_parens);
    assert_eq!(slice(text, for_expression.left_span), "(val, idx)");
    assert_eq!(slice(text, for_expression.span), "(val, idx) in list");
    assert_eq!(slice(text, li.variables[1].span()), "idx");
}

#[test]
fn test_ranges_nest_and_siblings_are_ordered() {
    let text = r#"<div id="a"><p>x{{ y }}</p>
  <ul><li v-for="i in n" :key="i">{{ i }}</li><li>z</li></ul>
  <svg><circle r="1"/></svg>
</div>"#;
    let result = parse(text);
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    let ast = &result.ast;
    for (id, node) in ast.iter() {
        if let Some(parent) = node.parent {
            assert!(
                ast[parent].span.contains_span(node.span),
                "{} {:?} escapes its parent {:?}",
                node.type_name(),
                node.span,
                ast[parent].span
            );
        }
        for pair in ast.children(id).windows(2) {
            assert!(ast[pair[0]].span.end <= ast[pair[1]].span.start);
        }
    }
    let root = &ast[ast.root()];
    assert_eq!(root.span, Span::from_usize(0, text.len()));
}

#[test]
fn test_tokens_do_not_overlap() {
    let text = r#"<div :a="b" @c='d'>x &amp; {{ y }}<br/><!-- c --></div>"#;
    let result = parse(text);
    for pair in result.tokens.windows(2) {
        assert!(pair[0].span.end <= pair[1].span.start, "{:?}", pair);
    }
    assert_eq!(result.comments.len(), 1);
    assert_eq!(result.comments[0].value, " c ");
}

#[test]
fn test_plain_text_tokens_match_source() {
    let text = "<p>hello world</p><pre>a\tb</pre>";
    let result = parse(text);
    for token in result.tokens.iter().filter(|t| t.kind.is_text()) {
        assert_eq!(slice(text, token.span), token.value);
    }
}

#[test]
fn test_references_map_across_decoded_entities() {
    let text = "<p>{{ a &amp;&amp; b }}</p>";
    let result = parse(text);
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    let p = child_elements(&result.ast, result.ast.root())[0];
    let container = mustache(&result.ast, result.ast.children(p)[0]);
    let spans: Vec<&str> = container
        .references
        .iter()
        .map(|r| slice(text, r.span()))
        .collect();
    assert_eq!(spans, vec!["a", "b"]);
    let expression = container.expression.as_ref().unwrap();
    assert_eq!(slice(text, expression.span()), "a &amp;&amp; b");
}

#[test]
fn test_crlf_inside_attribute_value() {
    let text = "<div :a=\"x +\r\n y\"></div>";
    let result = parse(text);
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    let div = element(&result.ast, child_elements(&result.ast, result.ast.root())[0]);
    let container = directive(&div.start_tag.attributes[0]).value.as_ref().unwrap();
    let names: Vec<(&str, &str)> = container
        .references
        .iter()
        .map(|r| (r.name(), slice(text, r.span())))
        .collect();
    assert_eq!(names, vec![("x", "x"), ("y", "y")]);
    assert_eq!(container.references[1].span(), Span::from_usize(15, 16));
}

#[test]
fn test_filter_sequence() {
    let text = "<p>{{ price | currency('$') | upper }}</p>";
    let result = parse(text);
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    let p = child_elements(&result.ast, result.ast.root())[0];
    let container = mustache(&result.ast, result.ast.children(p)[0]);
    let Some(VExpression::Filter(sequence)) = &container.expression else {
        panic!("expected a filter sequence");
    };
    let callees: Vec<&str> = sequence.filters.iter().map(|f| &*f.callee.sym).collect();
    assert_eq!(callees, vec!["currency", "upper"]);
    assert_eq!(slice(text, sequence.filters[0].span), "currency('$')");
    let references: Vec<&str> = container.references.iter().map(|r| r.name()).collect();
    assert_eq!(references, vec!["price"]);
}

#[test]
fn test_v_on_statements_and_event() {
    let text = r#"<button @click="count++; emit('x', $event)"></button>"#;
    let result = parse(text);
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    let button = element(&result.ast, child_elements(&result.ast, result.ast.root())[0]);
    let container = directive(&button.start_tag.attributes[0]).value.as_ref().unwrap();
    let Some(VExpression::On(handler)) = &container.expression else {
        panic!("expected a handler");
    };
    assert_eq!(handler.body.len(), 2);
    let references: Vec<(&str, ReferenceMode)> = container
        .references
        .iter()
        .map(|r| (r.name(), r.mode))
        .collect();
    assert_eq!(
        references,
        vec![("count", ReferenceMode::ReadWrite), ("emit", ReferenceMode::Read)]
    );
}

#[test]
fn test_slot_scope_variables() {
    let text = r#"<template slot-scope="{ item, index }"><b>{{ item }}{{ index }}</b></template>"#;
    let result = parse(text);
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    let template_id = child_elements(&result.ast, result.ast.root())[0];
    let template = element(&result.ast, template_id);
    let kinds: Vec<(&str, VariableKind)> = template
        .variables
        .iter()
        .map(|v| (v.name(), v.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![("item", VariableKind::Scope), ("index", VariableKind::Scope)]
    );
    assert!(template.variables.iter().all(|v| v.references.len() == 1));
}

#[test]
fn test_nested_v_for_resolves_innermost() {
    let text = r#"<ul v-for="x in xs"><li v-for="x in x.children">{{ x }}</li></ul>"#;
    let result = parse(text);
    assert!(result.errors.is_empty());

    let ul = child_elements(&result.ast, result.ast.root())[0];
    let li = child_elements(&result.ast, ul)[0];

    let inner_for = directive(&element(&result.ast, li).start_tag.attributes[0]);
    let right = &inner_for.value.as_ref().unwrap().references[0];
    assert_eq!(right.variable.map(|v| v.element), Some(ul));

    let container = mustache(&result.ast, result.ast.children(li)[0]);
    assert_eq!(container.references[0].variable.map(|v| v.element), Some(li));
}

#[test]
fn test_directive_shape_error_keeps_directive() {
    let text = r#"<input v-model..trim="value">"#;
    let result = parse(text);
    let codes: Vec<&str> = result.errors.iter().map(|e| e.code()).collect();
    assert_eq!(codes, vec!["x-invalid-directive"]);
    assert_eq!(result.errors[0].index, 14);

    let input = element(&result.ast, child_elements(&result.ast, result.ast.root())[0]);
    let directive = directive(&input.start_tag.attributes[0]);
    assert_eq!(directive.key.name.name, "model");
    assert!(directive.value.as_ref().unwrap().expression.is_some());
}

#[test]
fn test_empty_modifier_on_event_directive() {
    let text = r#"<div v-on:click..stop="go()"></div>"#;
    let result = parse(text);
    let codes: Vec<&str> = result.errors.iter().map(|e| e.code()).collect();
    assert_eq!(codes, vec!["x-invalid-directive"]);
    assert_eq!(result.errors[0].index, 15);

    let div = element(&result.ast, child_elements(&result.ast, result.ast.root())[0]);
    let key = &directive(&div.start_tag.attributes[0]).key;
    assert_eq!(key.name.name, "on");
    let modifiers: Vec<&str> = key.modifiers.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(modifiers, vec!["stop"]);
}

#[test]
fn test_trailing_dot_stays_plain_attribute() {
    let result = parse(r#"<div v-on:click.="x"></div>"#);
    assert!(result.errors.is_empty());
    let div = element(&result.ast, child_elements(&result.ast, result.ast.root())[0]);
    assert!(!div.start_tag.attributes[0].is_directive());
}

#[test]
fn test_html5_named_references_in_text() {
    let result = parse("<p>&lbrace;&check;&rarr;&NewLine;</p>");
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    let p = child_elements(&result.ast, result.ast.root())[0];
    let text: String = result
        .ast
        .children(p)
        .iter()
        .filter_map(|&id| match &result.ast[id].kind {
            NodeKind::Text(text) => Some(text.value.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(text, "{\u{2713}\u{2192}\n");
    assert_eq!(result.ast[p].span, Span::from_usize(0, 37));
}

#[test]
fn test_v_pre_subtree() {
    let text = r#"<div v-pre><p :title="t">{{ not parsed }}</p></div>"#;
    let result = parse(text);
    assert!(result.errors.is_empty());

    let div_id = child_elements(&result.ast, result.ast.root())[0];
    assert!(element(&result.ast, div_id).start_tag.attributes[0].is_directive());
    let p = child_elements(&result.ast, div_id)[0];
    assert!(!element(&result.ast, p).start_tag.attributes[0].is_directive());
    let NodeKind::Text(text_node) = &result.ast[result.ast.children(p)[0]].kind else {
        panic!("expected text");
    };
    assert_eq!(text_node.value, "{{ not parsed }}");
}

#[test]
fn test_svg_names_are_adjusted() {
    let text = r#"<svg viewbox="0 0 10 10"><lineargradient gradientunits="x"/></svg>"#;
    let result = parse(text);
    assert!(result.errors.is_empty());
    let svg_id = child_elements(&result.ast, result.ast.root())[0];
    let gradient = element(&result.ast, child_elements(&result.ast, svg_id)[0]);
    assert_eq!(gradient.name, "linearGradient");
    assert_eq!(gradient.raw_name, "lineargradient");
    assert!(gradient.attribute("gradientUnits").is_some());
}

#[test]
fn test_script_content_is_raw() {
    let text = "<script>let a = '<div>{{ b }}';</script><div></div>";
    let result = parse(text);
    let top = child_elements(&result.ast, result.ast.root());
    assert_eq!(top.len(), 2);
    let script = top[0];
    let children = result.ast.children(script);
    assert_eq!(children.len(), 1);
    assert_eq!(result.ast[children[0]].type_name(), "VText");
}

#[test]
fn test_unmatched_end_tag_is_ignored() {
    let result = parse("<div></p></div>");
    let codes: Vec<&str> = result.errors.iter().map(|e| e.code()).collect();
    assert_eq!(codes, vec!["x-invalid-end-tag"]);
    let div = child_elements(&result.ast, result.ast.root())[0];
    assert!(element(&result.ast, div).end_tag.is_some());
}

#[test]
fn test_expression_errors_are_sorted_and_located() {
    let text = "<a :x=\"1 +\">\n{{ ) }}</a>";
    let result = parse(text);
    let located: Vec<(&str, u32)> = result
        .errors
        .iter()
        .map(|e| (e.code(), e.line))
        .collect();
    assert_eq!(
        located,
        vec![("x-expression-error", 1), ("x-expression-error", 2)]
    );
    assert!(result.errors[0].index < result.errors[1].index);
}

#[test]
fn test_typescript_expressions() {
    let options = ParseOptions {
        script_lang: ScriptLang::TypeScript,
        origin: SourceOrigin::new(100, 5, 2),
        ..ParseOptions::default()
    };
    let result = parse_with_options("<p>{{ (value as string).length }}</p>", &options);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let p = child_elements(&result.ast, result.ast.root())[0];
    let container = mustache(&result.ast, result.ast.children(p)[0]);
    assert_eq!(container.references[0].span(), Span::from_usize(107, 112));
}
