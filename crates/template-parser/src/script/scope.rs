//! Reference collection for embedded expressions.
//!
//! Walks an swc AST and records every identifier the expression uses that is
//! not declared inside the expression itself. Names introduced by arrow
//! functions, function expressions, blocks and patterns are tracked in a
//! frame stack so that `items.map(x => x.id)` references `items` but not `x`.

use crate::ast::{Reference, ReferenceMode};
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use swc_ecma_ast::*;
use swc_ecma_visit::{Visit, VisitWith};

#[derive(Debug, Default)]
struct Frame {
    declared: FxHashSet<SmolStr>,
    /// References not yet known to resolve inside this frame.
    pending: Vec<(Ident, ReferenceMode)>,
    is_function: bool,
}

/// Collects the references an expression makes to its surroundings.
#[derive(Debug)]
pub(crate) struct ReferenceCollector {
    frames: Vec<Frame>,
    through: Vec<(Ident, ReferenceMode)>,
}

impl ReferenceCollector {
    /// Creates a collector whose outermost frame already declares `names`.
    pub(crate) fn new(names: &[&str]) -> Self {
        let mut root = Frame {
            is_function: true,
            ..Frame::default()
        };
        root.declared.extend(names.iter().map(|n| SmolStr::new(n)));
        Self {
            frames: vec![root],
            through: Vec::new(),
        }
    }

    /// Declares the bindings of `pat` in the outermost frame, visiting
    /// default values and computed keys as reads.
    pub(crate) fn declare_params(&mut self, pats: &[Pat]) {
        for pat in pats {
            self.declare_pat(pat, false);
        }
    }

    /// Finishes the walk; references come back in source order.
    pub(crate) fn finish(mut self) -> Vec<Reference> {
        while !self.frames.is_empty() {
            self.pop_frame();
        }
        let mut through = self.through;
        through.sort_by_key(|(id, _)| id.span.lo);
        through
            .into_iter()
            .map(|(id, mode)| Reference {
                id,
                mode,
                variable: None,
            })
            .collect()
    }

    fn push_frame(&mut self, is_function: bool) {
        self.frames.push(Frame {
            is_function,
            ..Frame::default()
        });
    }

    fn pop_frame(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        let unresolved = frame
            .pending
            .into_iter()
            .filter(|(id, _)| !frame.declared.contains(&*id.sym));
        match self.frames.last_mut() {
            Some(parent) => parent.pending.extend(unresolved),
            None => self.through.extend(unresolved),
        }
    }

    fn reference(&mut self, ident: &Ident, mode: ReferenceMode) {
        if let Some(frame) = self.frames.last_mut() {
            frame.pending.push((ident.clone(), mode));
        }
    }

    fn declare(&mut self, ident: &Ident, is_var: bool) {
        let name = SmolStr::new(ident.sym.as_ref());
        let frame = if is_var {
            self.frames.iter_mut().rev().find(|f| f.is_function)
        } else {
            self.frames.last_mut()
        };
        if let Some(frame) = frame {
            frame.declared.insert(name);
        }
    }

    fn declare_pat(&mut self, pat: &Pat, is_var: bool) {
        match pat {
            Pat::Ident(binding) => self.declare(&binding.id, is_var),
            Pat::Array(array) => {
                for elem in array.elems.iter().flatten() {
                    self.declare_pat(elem, is_var);
                }
            }
            Pat::Rest(rest) => self.declare_pat(&rest.arg, is_var),
            Pat::Object(object) => {
                for prop in &object.props {
                    match prop {
                        ObjectPatProp::KeyValue(kv) => {
                            kv.key.visit_with(self);
                            self.declare_pat(&kv.value, is_var);
                        }
                        ObjectPatProp::Assign(assign) => {
                            self.declare(&assign.key.id, is_var);
                            assign.value.visit_with(self);
                        }
                        ObjectPatProp::Rest(rest) => self.declare_pat(&rest.arg, is_var),
                    }
                }
            }
            Pat::Assign(assign) => {
                self.declare_pat(&assign.left, is_var);
                assign.right.visit_with(self);
            }
            Pat::Expr(expr) => expr.visit_with(self),
            Pat::Invalid(_) => {}
        }
    }

    /// Records the targets of a destructuring assignment.
    fn write_pat(&mut self, pat: &Pat) {
        match pat {
            Pat::Ident(binding) => self.reference(&binding.id, ReferenceMode::Write),
            Pat::Array(array) => {
                for elem in array.elems.iter().flatten() {
                    self.write_pat(elem);
                }
            }
            Pat::Rest(rest) => self.write_pat(&rest.arg),
            Pat::Object(object) => self.write_object_pat(object),
            Pat::Assign(assign) => {
                self.write_pat(&assign.left);
                assign.right.visit_with(self);
            }
            Pat::Expr(expr) => match expr.as_ref() {
                Expr::Ident(ident) => self.reference(ident, ReferenceMode::Write),
                other => other.visit_with(self),
            },
            Pat::Invalid(_) => {}
        }
    }

    fn write_object_pat(&mut self, object: &ObjectPat) {
        for prop in &object.props {
            match prop {
                ObjectPatProp::KeyValue(kv) => {
                    kv.key.visit_with(self);
                    self.write_pat(&kv.value);
                }
                ObjectPatProp::Assign(assign) => {
                    self.reference(&assign.key.id, ReferenceMode::Write);
                    assign.value.visit_with(self);
                }
                ObjectPatProp::Rest(rest) => self.write_pat(&rest.arg),
            }
        }
    }
}

impl Visit for ReferenceCollector {
    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(ident) => self.reference(ident, ReferenceMode::Read),
            _ => expr.visit_children_with(self),
        }
    }

    fn visit_prop(&mut self, prop: &Prop) {
        match prop {
            Prop::Shorthand(ident) => self.reference(ident, ReferenceMode::Read),
            _ => prop.visit_children_with(self),
        }
    }

    fn visit_assign_expr(&mut self, expr: &AssignExpr) {
        match &expr.left {
            AssignTarget::Simple(SimpleAssignTarget::Ident(binding)) => {
                let mode = if expr.op == AssignOp::Assign {
                    ReferenceMode::Write
                } else {
                    ReferenceMode::ReadWrite
                };
                self.reference(&binding.id, mode);
            }
            AssignTarget::Pat(AssignTargetPat::Array(array)) => {
                for elem in array.elems.iter().flatten() {
                    self.write_pat(elem);
                }
            }
            AssignTarget::Pat(AssignTargetPat::Object(object)) => self.write_object_pat(object),
            other => other.visit_with(self),
        }
        expr.right.visit_with(self);
    }

    fn visit_update_expr(&mut self, expr: &UpdateExpr) {
        match expr.arg.as_ref() {
            Expr::Ident(ident) => self.reference(ident, ReferenceMode::ReadWrite),
            other => other.visit_with(self),
        }
    }

    fn visit_arrow_expr(&mut self, arrow: &ArrowExpr) {
        self.push_frame(true);
        for param in &arrow.params {
            self.declare_pat(param, false);
        }
        arrow.body.visit_with(self);
        self.pop_frame();
    }

    fn visit_function(&mut self, function: &Function) {
        self.push_frame(true);
        if let Some(frame) = self.frames.last_mut() {
            frame.declared.insert(SmolStr::new_static("arguments"));
        }
        function.decorators.visit_with(self);
        for param in &function.params {
            param.decorators.visit_with(self);
            self.declare_pat(&param.pat, false);
        }
        function.body.visit_with(self);
        self.pop_frame();
    }

    fn visit_constructor(&mut self, ctor: &Constructor) {
        ctor.key.visit_with(self);
        self.push_frame(true);
        for param in &ctor.params {
            match param {
                ParamOrTsParamProp::Param(param) => self.declare_pat(&param.pat, false),
                ParamOrTsParamProp::TsParamProp(prop) => match &prop.param {
                    TsParamPropParam::Ident(binding) => self.declare(&binding.id, false),
                    TsParamPropParam::Assign(assign) => {
                        self.declare_pat(&assign.left, false);
                        assign.right.visit_with(self);
                    }
                },
            }
        }
        ctor.body.visit_with(self);
        self.pop_frame();
    }

    fn visit_setter_prop(&mut self, setter: &SetterProp) {
        setter.key.visit_with(self);
        self.push_frame(true);
        self.declare_pat(&setter.param, false);
        setter.body.visit_with(self);
        self.pop_frame();
    }

    fn visit_fn_expr(&mut self, expr: &FnExpr) {
        self.push_frame(false);
        if let Some(ident) = &expr.ident {
            self.declare(ident, false);
        }
        expr.function.visit_with(self);
        self.pop_frame();
    }

    fn visit_fn_decl(&mut self, decl: &FnDecl) {
        self.declare(&decl.ident, false);
        decl.function.visit_with(self);
    }

    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        self.declare(&decl.ident, false);
        decl.class.visit_with(self);
    }

    fn visit_class_expr(&mut self, expr: &ClassExpr) {
        self.push_frame(false);
        if let Some(ident) = &expr.ident {
            self.declare(ident, false);
        }
        expr.class.visit_with(self);
        self.pop_frame();
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        let is_var = decl.kind == VarDeclKind::Var;
        for declarator in &decl.decls {
            self.declare_pat(&declarator.name, is_var);
            declarator.init.visit_with(self);
        }
    }

    fn visit_block_stmt(&mut self, block: &BlockStmt) {
        self.push_frame(false);
        block.stmts.visit_with(self);
        self.pop_frame();
    }

    fn visit_catch_clause(&mut self, clause: &CatchClause) {
        self.push_frame(false);
        if let Some(param) = &clause.param {
            self.declare_pat(param, false);
        }
        clause.body.visit_with(self);
        self.pop_frame();
    }

    fn visit_for_stmt(&mut self, stmt: &ForStmt) {
        self.push_frame(false);
        stmt.visit_children_with(self);
        self.pop_frame();
    }

    fn visit_for_in_stmt(&mut self, stmt: &ForInStmt) {
        self.push_frame(false);
        self.visit_for_head_target(&stmt.left);
        stmt.right.visit_with(self);
        stmt.body.visit_with(self);
        self.pop_frame();
    }

    fn visit_for_of_stmt(&mut self, stmt: &ForOfStmt) {
        self.push_frame(false);
        self.visit_for_head_target(&stmt.left);
        stmt.right.visit_with(self);
        stmt.body.visit_with(self);
        self.pop_frame();
    }
}

impl ReferenceCollector {
    fn visit_for_head_target(&mut self, head: &ForHead) {
        match head {
            ForHead::Pat(pat) => self.write_pat(pat),
            other => other.visit_with(self),
        }
    }
}

/// Appends every identifier bound by `pat` to `out`, in source order.
pub(crate) fn bound_idents(pat: &Pat, out: &mut Vec<Ident>) {
    match pat {
        Pat::Ident(binding) => out.push(binding.id.clone()),
        Pat::Array(array) => {
            for elem in array.elems.iter().flatten() {
                bound_idents(elem, out);
            }
        }
        Pat::Rest(rest) => bound_idents(&rest.arg, out),
        Pat::Object(object) => {
            for prop in &object.props {
                match prop {
                    ObjectPatProp::KeyValue(kv) => bound_idents(&kv.value, out),
                    ObjectPatProp::Assign(assign) => out.push(assign.key.id.clone()),
                    ObjectPatProp::Rest(rest) => bound_idents(&rest.arg, out),
                }
            }
        }
        Pat::Assign(assign) => bound_idents(&assign.left, out),
        Pat::Expr(_) | Pat::Invalid(_) => {}
    }
}
