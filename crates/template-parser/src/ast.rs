//! AST types for templates.
//!
//! The tree is an arena: nodes live in [`Ast`] and refer to each other by
//! [`NodeId`]. `parent` is a plain index, children are index lists. Embedded
//! expressions are swc AST nodes whose spans are host-file byte offsets
//! (`BytePos(n)` is host offset `n`).

use crate::namespace::Namespace;
use source_map::{SourceLocation, Span};
use std::ops::Index;
use swc_common::Spanned;
use swc_ecma_ast::{Expr, ExprOrSpread, Ident, Pat, Stmt};

/// The expression grammar used for embedded expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptLang {
    /// JavaScript (default).
    #[default]
    JavaScript,
    /// TypeScript.
    TypeScript,
}

/// Index of a node in an [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A parsed template: the root node and everything below it.
#[derive(Debug, Clone)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    /// Creates a tree holding only an empty root.
    pub(crate) fn new(span: Span, loc: SourceLocation) -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root(VTemplateRoot::default()),
                parent: None,
                span,
                loc,
            }],
        }
    }

    /// The [`VTemplateRoot`] node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// All nodes in creation (document) order, with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Child ids of the root or an element; empty for leaves.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.node(id).kind {
            NodeKind::Root(root) => &root.children,
            NodeKind::Element(element) => &element.children,
            _ => &[],
        }
    }

    pub fn element(&self, id: NodeId) -> Option<&VElement> {
        match &self.node(id).kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn element_mut(&mut self, id: NodeId) -> Option<&mut VElement> {
        match &mut self.node_mut(id).kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Ancestors of `id`, nearest first, ending at the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Appends `node` as the last child of `parent`.
    pub(crate) fn append(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.parent = Some(parent);
        self.nodes.push(node);
        match &mut self.node_mut(parent).kind {
            NodeKind::Root(root) => root.children.push(id),
            NodeKind::Element(element) => element.children.push(id),
            _ => debug_assert!(false, "only the root and elements have children"),
        }
        id
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.node(id)
    }
}

/// A node and its location.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    pub span: Span,
    pub loc: SourceLocation,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, span: Span, loc: SourceLocation) -> Self {
        Self {
            kind,
            parent: None,
            span,
            loc,
        }
    }

    /// The node type name exposed to tree consumers.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Root(_) => "VTemplateRoot",
            NodeKind::Element(_) => "VElement",
            NodeKind::Text(_) => "VText",
            NodeKind::ExpressionContainer(_) => "VExpressionContainer",
        }
    }
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Root(VTemplateRoot),
    Element(VElement),
    Text(VText),
    /// A mustache.
    ExpressionContainer(VExpressionContainer),
}

/// The root of one template block.
#[derive(Debug, Clone, Default)]
pub struct VTemplateRoot {
    pub children: Vec<NodeId>,
}

/// Character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VText {
    /// Processed text, character references decoded.
    pub value: String,
}

/// An element.
#[derive(Debug, Clone)]
pub struct VElement {
    /// The element name, case-adjusted for its namespace.
    pub name: String,
    /// The element name as written.
    pub raw_name: String,
    pub namespace: Namespace,
    pub start_tag: VStartTag,
    /// `None` for void, self-closing and implicitly closed elements.
    pub end_tag: Option<VEndTag>,
    pub children: Vec<NodeId>,
    /// Variables declared by `v-for` and scope attributes on this element.
    pub variables: Vec<Variable>,
}

impl VElement {
    /// Finds a plain attribute by (adjusted) name.
    pub fn attribute(&self, name: &str) -> Option<&VPlainAttribute> {
        self.start_tag.attributes.iter().find_map(|a| match a {
            VAttribute::Attribute(attr) if attr.key.name == name => Some(attr),
            _ => None,
        })
    }

    /// Finds a directive by name, e.g. `"bind"` or `"for"`.
    pub fn directive(&self, name: &str) -> Option<&VDirective> {
        self.start_tag.attributes.iter().find_map(|a| match a {
            VAttribute::Directive(dir) if dir.key.name.name == name => Some(dir),
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct VStartTag {
    pub self_closing: bool,
    pub attributes: Vec<VAttribute>,
    pub span: Span,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VEndTag {
    pub span: Span,
    pub loc: SourceLocation,
}

/// An attribute or a directive.
#[derive(Debug, Clone)]
pub enum VAttribute {
    Attribute(VPlainAttribute),
    Directive(VDirective),
}

impl VAttribute {
    pub fn span(&self) -> Span {
        match self {
            VAttribute::Attribute(attr) => attr.span,
            VAttribute::Directive(dir) => dir.span,
        }
    }

    pub fn loc(&self) -> SourceLocation {
        match self {
            VAttribute::Attribute(attr) => attr.loc,
            VAttribute::Directive(dir) => dir.loc,
        }
    }

    pub fn is_directive(&self) -> bool {
        matches!(self, VAttribute::Directive(_))
    }
}

/// A plain `name="value"` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VPlainAttribute {
    pub key: VIdentifier,
    pub value: Option<VLiteral>,
    pub span: Span,
    pub loc: SourceLocation,
}

/// A directive: `v-name:argument.modifier="expression"` or a shorthand.
#[derive(Debug, Clone)]
pub struct VDirective {
    pub key: VDirectiveKey,
    /// `None` when no value was written.
    pub value: Option<VExpressionContainer>,
    pub span: Span,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VIdentifier {
    /// The name, case-adjusted for attributes; directive parts keep their case.
    pub name: String,
    pub raw_name: String,
    pub span: Span,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VLiteral {
    /// The processed value without quotes.
    pub value: String,
    pub span: Span,
    pub loc: SourceLocation,
}

/// The decomposed name of a directive.
#[derive(Debug, Clone)]
pub struct VDirectiveKey {
    /// The directive name without `v-`; shorthands are expanded (`:` is `bind`).
    pub name: VIdentifier,
    pub argument: Option<VDirectiveArgument>,
    pub modifiers: Vec<VIdentifier>,
    pub span: Span,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone)]
pub enum VDirectiveArgument {
    /// `v-bind:foo`
    Static(VIdentifier),
    /// `v-bind:[foo]`
    Dynamic(VExpressionContainer),
}

/// An embedded expression and the references it makes.
#[derive(Debug, Clone)]
pub struct VExpressionContainer {
    /// `None` for empty values and for fragments that failed to parse.
    pub expression: Option<VExpression>,
    /// Every identifier use in the expression, in source order.
    pub references: Vec<Reference>,
    pub span: Span,
    pub loc: SourceLocation,
}

/// The shapes an embedded expression can take.
#[derive(Debug, Clone)]
pub enum VExpression {
    /// A plain expression.
    Expression(Box<Expr>),
    /// `alias in iterable`
    For(VForExpression),
    /// An event handler statement list.
    On(VOnExpression),
    /// A scope parameter list.
    SlotScope(VSlotScopeExpression),
    /// `expression | filter | filter(args)`
    Filter(VFilterSequenceExpression),
}

impl VExpression {
    pub fn span(&self) -> Span {
        match self {
            VExpression::Expression(expr) => span_of(&**expr),
            VExpression::For(e) => e.span,
            VExpression::On(e) => e.span,
            VExpression::SlotScope(e) => e.span,
            VExpression::Filter(e) => e.span,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            VExpression::Expression(_) => "Expression",
            VExpression::For(_) => "VForExpression",
            VExpression::On(_) => "VOnExpression",
            VExpression::SlotScope(_) => "VSlotScopeExpression",
            VExpression::Filter(_) => "VFilterSequenceExpression",
        }
    }
}

/// `(item, index) in items`
#[derive(Debug, Clone)]
pub struct VForExpression {
    /// One pattern per alias.
    pub left: Vec<Pat>,
    pub right: Box<Expr>,
    /// Whether the aliases were written in parentheses.
    pub has_parens: bool,
    /// The alias text as written, parentheses included.
    pub left_span: Span,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct VOnExpression {
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct VSlotScopeExpression {
    pub params: Vec<Pat>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct VFilterSequenceExpression {
    pub expression: Box<Expr>,
    pub filters: Vec<VFilter>,
    pub span: Span,
}

/// One `| name(args)` stage of a filter chain.
#[derive(Debug, Clone)]
pub struct VFilter {
    pub callee: Ident,
    pub arguments: Vec<ExprOrSpread>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// Declared by `v-for`.
    Iteration,
    /// Declared by `slot-scope`, `v-slot` or `scope`.
    Scope,
}

impl VariableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableKind::Iteration => "iteration",
            VariableKind::Scope => "scope",
        }
    }
}

/// A template-scoped binding.
#[derive(Debug, Clone)]
pub struct Variable {
    pub id: Ident,
    pub kind: VariableKind,
    /// The identifiers that resolved to this variable.
    pub references: Vec<Ident>,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.id.sym
    }

    pub fn span(&self) -> Span {
        span_of(&self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceMode {
    Read,
    Write,
    ReadWrite,
}

impl ReferenceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceMode::Read => "r",
            ReferenceMode::Write => "w",
            ReferenceMode::ReadWrite => "rw",
        }
    }
}

/// Points at a [`Variable`] declared on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableRef {
    pub element: NodeId,
    /// Index into the element's `variables`.
    pub index: usize,
}

/// An identifier use inside an embedded expression.
#[derive(Debug, Clone)]
pub struct Reference {
    pub id: Ident,
    pub mode: ReferenceMode,
    /// The template variable it resolves to, `None` for free identifiers.
    pub variable: Option<VariableRef>,
}

impl Reference {
    pub fn name(&self) -> &str {
        &self.id.sym
    }

    pub fn span(&self) -> Span {
        span_of(&self.id)
    }
}

/// Host span of an swc node.
pub fn span_of<T: Spanned + ?Sized>(node: &T) -> Span {
    let span = node.span();
    Span::new(span.lo.0, span.hi.0)
}
