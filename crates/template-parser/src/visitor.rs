//! Tree traversal.
//!
//! [`visitor_keys`] names, per node type, the fields a generic tree walker
//! descends into and in which order. [`walk`] drives a [`Visitor`] over an
//! [`Ast`] in exactly that order.

use crate::ast::{Ast, NodeId, NodeKind, VAttribute, VDirectiveArgument, VExpressionContainer};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

static VISITOR_KEYS: Lazy<IndexMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    IndexMap::from([
        ("VTemplateRoot", &["children"][..]),
        ("VElement", &["startTag", "children", "endTag"][..]),
        ("VStartTag", &["attributes"][..]),
        ("VEndTag", &[][..]),
        ("VAttribute", &["key", "value"][..]),
        ("VDirective", &["key", "value"][..]),
        ("VDirectiveKey", &["name", "argument", "modifiers"][..]),
        ("VIdentifier", &[][..]),
        ("VLiteral", &[][..]),
        ("VText", &[][..]),
        ("VExpressionContainer", &["expression"][..]),
        ("VForExpression", &["left", "right"][..]),
        ("VOnExpression", &["body"][..]),
        ("VSlotScopeExpression", &["params"][..]),
        ("VFilterSequenceExpression", &["expression", "filters"][..]),
        ("VFilter", &["callee", "arguments"][..]),
    ])
});

/// The traversable child fields of every template node type.
pub fn visitor_keys() -> &'static IndexMap<&'static str, &'static [&'static str]> {
    &VISITOR_KEYS
}

/// Callbacks for [`walk`]. Every method defaults to doing nothing.
pub trait Visitor {
    /// Called before the children of an arena node.
    fn enter_node(&mut self, _ast: &Ast, _id: NodeId) {}

    /// Called after the children of an arena node.
    fn leave_node(&mut self, _ast: &Ast, _id: NodeId) {}

    /// Called for each attribute of a start tag, in source order.
    fn visit_attribute(&mut self, _ast: &Ast, _element: NodeId, _attribute: &VAttribute) {}

    /// Called for each mustache, directive value and dynamic argument.
    fn visit_expression_container(&mut self, _ast: &Ast, _container: &VExpressionContainer) {}
}

/// Walks the whole tree depth-first, in visitor-key order.
///
/// Driven by an explicit stack, so any tree [`crate::parse`] returns can be
/// walked regardless of its depth.
pub fn walk<V: Visitor + ?Sized>(ast: &Ast, visitor: &mut V) {
    // (node, children already pushed)
    let mut stack: Vec<(NodeId, bool)> = vec![(ast.root(), false)];
    while let Some((id, entered)) = stack.pop() {
        if entered {
            visitor.leave_node(ast, id);
            continue;
        }

        visitor.enter_node(ast, id);
        stack.push((id, true));
        let children: &[NodeId] = match &ast[id].kind {
            NodeKind::Root(root) => &root.children,
            NodeKind::Element(element) => {
                visit_start_tag(ast, id, &element.start_tag.attributes, visitor);
                &element.children
            }
            NodeKind::ExpressionContainer(container) => {
                visitor.visit_expression_container(ast, container);
                &[]
            }
            NodeKind::Text(_) => &[],
        };
        stack.extend(children.iter().rev().map(|&child| (child, false)));
    }
}

fn visit_start_tag<V: Visitor + ?Sized>(
    ast: &Ast,
    element: NodeId,
    attributes: &[VAttribute],
    visitor: &mut V,
) {
    for attribute in attributes {
        visitor.visit_attribute(ast, element, attribute);
        if let VAttribute::Directive(directive) = attribute {
            if let Some(VDirectiveArgument::Dynamic(container)) = &directive.key.argument {
                visitor.visit_expression_container(ast, container);
            }
            if let Some(container) = &directive.value {
                visitor.visit_expression_container(ast, container);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        fn enter_node(&mut self, ast: &Ast, id: NodeId) {
            self.events.push(format!("enter {}", ast[id].type_name()));
        }

        fn leave_node(&mut self, ast: &Ast, id: NodeId) {
            self.events.push(format!("leave {}", ast[id].type_name()));
        }

        fn visit_attribute(&mut self, _ast: &Ast, _element: NodeId, attribute: &VAttribute) {
            let kind = if attribute.is_directive() {
                "directive"
            } else {
                "attribute"
            };
            self.events.push(kind.to_string());
        }

        fn visit_expression_container(&mut self, _ast: &Ast, container: &VExpressionContainer) {
            let kind = container
                .expression
                .as_ref()
                .map_or("null", |expression| expression.type_name());
            self.events.push(format!("container {kind}"));
        }
    }

    #[test]
    fn test_element_keys_order() {
        assert_eq!(
            visitor_keys().get("VElement").copied(),
            Some(&["startTag", "children", "endTag"][..])
        );
        assert_eq!(visitor_keys().get_index(0).map(|(k, _)| *k), Some("VTemplateRoot"));
    }

    #[test]
    fn test_walk_order() {
        let result = parse("<div id=\"a\" :[key]=\"b\">x{{ c }}</div>");
        let mut recorder = Recorder::default();
        walk(&result.ast, &mut recorder);
        assert_eq!(
            recorder.events,
            vec![
                "enter VTemplateRoot",
                "enter VElement",
                "attribute",
                "directive",
                "container Expression",
                "container Expression",
                "enter VText",
                "leave VText",
                "enter VExpressionContainer",
                "container Expression",
                "leave VExpressionContainer",
                "leave VElement",
                "leave VTemplateRoot",
            ]
        );
    }

    #[derive(Default)]
    struct DepthCounter {
        depth: usize,
        max_depth: usize,
        leaves: usize,
    }

    impl Visitor for DepthCounter {
        fn enter_node(&mut self, _ast: &Ast, _id: NodeId) {
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
        }

        fn leave_node(&mut self, _ast: &Ast, _id: NodeId) {
            self.depth -= 1;
            self.leaves += 1;
        }
    }

    #[test]
    fn test_walk_deeply_nested_tree() {
        let result = parse(&"<div>".repeat(100_000));
        let mut counter = DepthCounter::default();
        walk(&result.ast, &mut counter);
        assert_eq!(counter.max_depth, 100_001);
        assert_eq!(counter.leaves, result.ast.len());
        assert_eq!(counter.depth, 0);
    }
}
