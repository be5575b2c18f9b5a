//! Structural equality between one pattern node and one candidate node.
//!
//! Dispatch is by the pattern node's kind; both sides must agree on kind
//! (wildcards aside) or the match fails.  Composite kinds recurse field by
//! field, literal kinds compare exactly, and ordered sibling groups funnel
//! through the sequence matcher.  Failure is an ordinary `Ok(false)`; `Err`
//! is reserved for pattern and type-resolution faults.

use trawl_core::{
    EngineError, ListKind, MatchMode, Node, NodeKind, TypeRelation, WildcardSpec,
};

use crate::matcher::context::MatchCtx;
use crate::typeres::resolve_type;

/// Wraps an expression in a statement, keeping the expression's span.
pub(crate) fn stmt_wrap(expr: &Node) -> Node {
    Node::new(
        NodeKind::ExprStmt {
            expr: Box::new(expr.clone()),
        },
        expr.span,
    )
}

/// Flattens a loop or conditional header into a synthesised statement list:
/// initialiser, condition as an expression statement, post statement.
fn header_stmts(init: Option<&Node>, cond: Option<&Node>, post: Option<&Node>) -> Node {
    let mut stmts = Vec::new();
    if let Some(init) = init {
        stmts.push(init.clone());
    }
    if let Some(cond) = cond {
        stmts.push(stmt_wrap(cond));
    }
    if let Some(post) = post {
        stmts.push(post.clone());
    }
    Node::list(ListKind::Stmt, stmts)
}

/// Returns whether a header position holds nothing but a bare
/// multi-wildcard, honouring the relaxed-mode gate: the loop-header
/// reinterpretation only applies in relaxed mode, and only when the
/// position is the wildcard itself.
fn header_wildcard(ctx: &MatchCtx<'_>, position: &Node) -> bool {
    ctx.mode == MatchMode::Relaxed
        && matches!(&position.kind, NodeKind::Wildcard(spec) if spec.multi)
}

impl MatchCtx<'_> {
    /// Matches one pattern node against one candidate node.
    ///
    /// Re-seats the ambient scope unconditionally when the candidate
    /// introduces one, regardless of the eventual outcome, because type
    /// constraints lower in the same subtree resolve against it.
    pub(crate) fn match_node(
        &mut self,
        pattern: &Node,
        candidate: &Node,
    ) -> Result<bool, EngineError> {
        if candidate.introduces_scope() {
            self.scope = self.info.scope_of(candidate);
        }
        match &pattern.kind {
            NodeKind::Wildcard(spec) => self.match_wildcard(spec, candidate),

            NodeKind::Ident { name } => Ok(candidate.is_ident_named(name)),

            NodeKind::BasicLit { lit, value } => Ok(matches!(
                &candidate.kind,
                NodeKind::BasicLit {
                    lit: c_lit,
                    value: c_value,
                } if c_lit == lit && c_value == value
            )),

            NodeKind::CompositeLit { ty, elts } => {
                let NodeKind::CompositeLit {
                    ty: c_ty,
                    elts: c_elts,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_opt(ty.as_deref(), c_ty.as_deref())?
                    && self.match_seq(elts, c_elts, ListKind::Expr)?)
            }

            NodeKind::FuncLit { ty, body } => {
                let NodeKind::FuncLit {
                    ty: c_ty,
                    body: c_body,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_node(ty, c_ty)? && self.match_node(body, c_body)?)
            }

            NodeKind::Paren { expr } => {
                let NodeKind::Paren { expr: c_expr } = &candidate.kind else {
                    return Ok(false);
                };
                self.match_node(expr, c_expr)
            }

            NodeKind::Unary { op, expr } => {
                let NodeKind::Unary {
                    op: c_op,
                    expr: c_expr,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(op == c_op && self.match_node(expr, c_expr)?)
            }

            NodeKind::Binary { op, lhs, rhs } => {
                let NodeKind::Binary {
                    op: c_op,
                    lhs: c_lhs,
                    rhs: c_rhs,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(op == c_op
                    && self.match_node(lhs, c_lhs)?
                    && self.match_node(rhs, c_rhs)?)
            }

            NodeKind::Call {
                callee,
                args,
                spread,
            } => {
                let NodeKind::Call {
                    callee: c_callee,
                    args: c_args,
                    spread: c_spread,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(spread == c_spread
                    && self.match_node(callee, c_callee)?
                    && self.match_seq(args, c_args, ListKind::Expr)?)
            }

            NodeKind::KeyValue { key, value } => {
                let NodeKind::KeyValue {
                    key: c_key,
                    value: c_value,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_node(key, c_key)? && self.match_node(value, c_value)?)
            }

            NodeKind::Star { expr } => {
                let NodeKind::Star { expr: c_expr } = &candidate.kind else {
                    return Ok(false);
                };
                self.match_node(expr, c_expr)
            }

            NodeKind::Selector { expr, field } => {
                let NodeKind::Selector {
                    expr: c_expr,
                    field: c_field,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_node(expr, c_expr)? && self.match_node(field, c_field)?)
            }

            NodeKind::Index { expr, index } => {
                let NodeKind::Index {
                    expr: c_expr,
                    index: c_index,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_node(expr, c_expr)? && self.match_node(index, c_index)?)
            }

            NodeKind::SliceExpr {
                expr,
                low,
                high,
                max,
            } => {
                let NodeKind::SliceExpr {
                    expr: c_expr,
                    low: c_low,
                    high: c_high,
                    max: c_max,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_node(expr, c_expr)?
                    && self.match_opt(low.as_deref(), c_low.as_deref())?
                    && self.match_opt(high.as_deref(), c_high.as_deref())?
                    && self.match_opt(max.as_deref(), c_max.as_deref())?)
            }

            NodeKind::TypeAssert { expr, ty } => {
                let NodeKind::TypeAssert {
                    expr: c_expr,
                    ty: c_ty,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_node(expr, c_expr)? && self.match_opt(ty.as_deref(), c_ty.as_deref())?)
            }

            NodeKind::Ellipsis { elt } => {
                let NodeKind::Ellipsis { elt: c_elt } = &candidate.kind else {
                    return Ok(false);
                };
                self.match_opt(elt.as_deref(), c_elt.as_deref())
            }

            NodeKind::ArrayType { len, elt } => {
                let NodeKind::ArrayType {
                    len: c_len,
                    elt: c_elt,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_opt(len.as_deref(), c_len.as_deref())? && self.match_node(elt, c_elt)?)
            }

            NodeKind::MapType { key, value } => {
                let NodeKind::MapType {
                    key: c_key,
                    value: c_value,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_node(key, c_key)? && self.match_node(value, c_value)?)
            }

            NodeKind::StructType { fields } => {
                let NodeKind::StructType { fields: c_fields } = &candidate.kind else {
                    return Ok(false);
                };
                self.match_pair_list(fields, c_fields)
            }

            NodeKind::Field { names, ty } => {
                let NodeKind::Field {
                    names: c_names,
                    ty: c_ty,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_seq(names, c_names, ListKind::Ident)? && self.match_node(ty, c_ty)?)
            }

            NodeKind::FuncType { params, results } => {
                let NodeKind::FuncType {
                    params: c_params,
                    results: c_results,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                if !self.match_pair_list(params, c_params)? {
                    return Ok(false);
                }
                match (results, c_results) {
                    (None, None) => Ok(true),
                    (Some(p), Some(c)) => self.match_pair_list(p, c),
                    _ => Ok(false),
                }
            }

            NodeKind::InterfaceType { methods } => {
                let NodeKind::InterfaceType { methods: c_methods } = &candidate.kind else {
                    return Ok(false);
                };
                self.match_pair_list(methods, c_methods)
            }

            NodeKind::ChanType { dir, elem } => {
                let NodeKind::ChanType {
                    dir: c_dir,
                    elem: c_elem,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(dir == c_dir && self.match_node(elem, c_elem)?)
            }

            NodeKind::ExprStmt { expr } => {
                // Prefer matching a bare wildcard as the whole statement,
                // since the statement is the parent.
                if let NodeKind::Wildcard(spec) = &expr.kind {
                    return self.match_wildcard(spec, candidate);
                }
                let NodeKind::ExprStmt { expr: c_expr } = &candidate.kind else {
                    return Ok(false);
                };
                self.match_node(expr, c_expr)
            }

            NodeKind::DeclStmt { decl } => {
                let NodeKind::DeclStmt { decl: c_decl } = &candidate.kind else {
                    return Ok(false);
                };
                self.match_node(decl, c_decl)
            }

            NodeKind::EmptyStmt => Ok(matches!(candidate.kind, NodeKind::EmptyStmt)),

            NodeKind::Labeled { label, stmt } => {
                let NodeKind::Labeled {
                    label: c_label,
                    stmt: c_stmt,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_node(label, c_label)? && self.match_node(stmt, c_stmt)?)
            }

            NodeKind::Send { chan, value } => {
                let NodeKind::Send {
                    chan: c_chan,
                    value: c_value,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_node(chan, c_chan)? && self.match_node(value, c_value)?)
            }

            NodeKind::IncDec { op, expr } => {
                let NodeKind::IncDec {
                    op: c_op,
                    expr: c_expr,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(op == c_op && self.match_node(expr, c_expr)?)
            }

            NodeKind::Assign { op, lhs, rhs } => {
                let NodeKind::Assign {
                    op: c_op,
                    lhs: c_lhs,
                    rhs: c_rhs,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(op == c_op
                    && self.match_seq(lhs, c_lhs, ListKind::Expr)?
                    && self.match_seq(rhs, c_rhs, ListKind::Expr)?)
            }

            NodeKind::Spawn { call } => {
                let NodeKind::Spawn { call: c_call } = &candidate.kind else {
                    return Ok(false);
                };
                self.match_node(call, c_call)
            }

            NodeKind::Defer { call } => {
                let NodeKind::Defer { call: c_call } = &candidate.kind else {
                    return Ok(false);
                };
                self.match_node(call, c_call)
            }

            NodeKind::Return { results } => {
                let NodeKind::Return { results: c_results } = &candidate.kind else {
                    return Ok(false);
                };
                self.match_seq(results, c_results, ListKind::Expr)
            }

            NodeKind::Branch { kind, label } => {
                let NodeKind::Branch {
                    kind: c_kind,
                    label: c_label,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(kind == c_kind && self.match_opt(label.as_deref(), c_label.as_deref())?)
            }

            NodeKind::Block { stmts } => self.match_block(stmts, candidate),

            NodeKind::If {
                init,
                cond,
                body,
                else_branch,
            } => self.match_if(
                init.as_deref(),
                cond,
                body,
                else_branch.as_deref(),
                candidate,
            ),

            NodeKind::CaseClause { list, body } => {
                let NodeKind::CaseClause {
                    list: c_list,
                    body: c_body,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_seq(list, c_list, ListKind::Expr)?
                    && self.match_seq(body, c_body, ListKind::Stmt)?)
            }

            NodeKind::Switch { init, tag, body } => {
                self.match_switch(init.as_deref(), tag.as_deref(), body, candidate)
            }

            NodeKind::TypeSwitch { init, assign, body } => {
                let NodeKind::TypeSwitch {
                    init: c_init,
                    assign: c_assign,
                    body: c_body,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_opt(init.as_deref(), c_init.as_deref())?
                    && self.match_node(assign, c_assign)?
                    && self.match_node(body, c_body)?)
            }

            NodeKind::CommClause { comm, body } => {
                let NodeKind::CommClause {
                    comm: c_comm,
                    body: c_body,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_opt(comm.as_deref(), c_comm.as_deref())?
                    && self.match_seq(body, c_body, ListKind::Stmt)?)
            }

            NodeKind::Select { body } => {
                let NodeKind::Select { body: c_body } = &candidate.kind else {
                    return Ok(false);
                };
                self.match_node(body, c_body)
            }

            NodeKind::For {
                init,
                cond,
                post,
                body,
            } => self.match_for(
                init.as_deref(),
                cond.as_deref(),
                post.as_deref(),
                body,
                candidate,
            ),

            NodeKind::RangeLoop {
                key,
                value,
                expr,
                body,
            } => {
                let NodeKind::RangeLoop {
                    key: c_key,
                    value: c_value,
                    expr: c_expr,
                    body: c_body,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_opt(key.as_deref(), c_key.as_deref())?
                    && self.match_opt(value.as_deref(), c_value.as_deref())?
                    && self.match_node(expr, c_expr)?
                    && self.match_node(body, c_body)?)
            }

            NodeKind::DeclGroup { keyword, specs } => {
                if self.mode == MatchMode::Relaxed
                    && let [only] = specs.as_slice()
                    && self.match_node(only, candidate)?
                {
                    return Ok(true);
                }
                let NodeKind::DeclGroup {
                    keyword: c_keyword,
                    specs: c_specs,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(keyword == c_keyword && self.match_seq(specs, c_specs, ListKind::Spec)?)
            }

            NodeKind::FuncDecl {
                recv,
                name,
                ty,
                body,
            } => {
                let NodeKind::FuncDecl {
                    recv: c_recv,
                    name: c_name,
                    ty: c_ty,
                    body: c_body,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                let recv_ok = match (recv, c_recv) {
                    (None, None) => true,
                    (Some(p), Some(c)) => self.match_node(p, c)?,
                    _ => false,
                };
                Ok(recv_ok
                    && self.match_node(name, c_name)?
                    && self.match_node(ty, c_ty)?
                    && self.match_opt(body.as_deref(), c_body.as_deref())?)
            }

            NodeKind::ValueSpec { names, ty, values } => {
                self.match_value_spec(names, ty.as_deref(), values, candidate)
            }

            NodeKind::ImportSpec { alias, path } => {
                let NodeKind::ImportSpec {
                    alias: c_alias,
                    path: c_path,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_opt(alias.as_deref(), c_alias.as_deref())?
                    && self.match_node(path, c_path)?)
            }

            NodeKind::File {
                name,
                decls,
                imports,
            } => {
                let NodeKind::File {
                    name: c_name,
                    decls: c_decls,
                    imports: c_imports,
                } = &candidate.kind
                else {
                    return Ok(false);
                };
                Ok(self.match_node(name, c_name)?
                    && self.match_pair_list(decls, c_decls)?
                    && self.match_pair_list(imports, c_imports)?)
            }

            NodeKind::List(list) => {
                let NodeKind::List(c_list) = &candidate.kind else {
                    return Ok(false);
                };
                if list.kind != c_list.kind {
                    return Ok(false);
                }
                self.match_seq(&list.nodes, &c_list.nodes, c_list.kind)
            }
        }
    }

    /// Applies a wildcard spec to a single candidate node.
    ///
    /// Multi-wildcards never match in single-node position; they are
    /// consumed by the sequence matcher.
    pub(crate) fn match_wildcard(
        &mut self,
        spec: &WildcardSpec,
        candidate: &Node,
    ) -> Result<bool, EngineError> {
        if spec.multi {
            return Ok(false);
        }
        if spec.is_discard() {
            return Ok(true);
        }
        if !spec.name_rules.is_empty() {
            let NodeKind::Ident { name } = &candidate.kind else {
                return Ok(false);
            };
            if !spec.name_rules.iter().all(|rule| rule.is_match(name)) {
                return Ok(false);
            }
        }
        if !spec.type_rules.is_empty() || spec.comparable {
            if !candidate.is_expr() {
                return Ok(false);
            }
            let Some(found) = self.info.type_of(candidate) else {
                return Ok(false);
            };
            if spec.comparable && !self.info.is_comparable(&found) {
                return Ok(false);
            }
            for rule in &spec.type_rules {
                let want = resolve_type(self.info, self.scope, &rule.ty)?;
                let holds = match rule.relation {
                    TypeRelation::Identical => self.info.identical(&found, &want),
                    TypeRelation::AssignableTo => self.info.assignable_to(&found, &want),
                    TypeRelation::ConvertibleTo => self.info.convertible_to(&found, &want),
                };
                if !holds {
                    return Ok(false);
                }
            }
        }
        if let Some(prev) = self.bindings.get(&spec.name).cloned() {
            // Repeated uses of one capture must agree.
            return self.match_node(&prev, candidate);
        }
        self.bindings.record(&spec.name, candidate.clone());
        Ok(true)
    }

    /// Compares optional sub-trees.
    ///
    /// Strict mode: both absent is a trivial match, presence mismatch
    /// fails.  Relaxed mode: an absent side additionally matches an
    /// identifier literally named `_`.
    pub(crate) fn match_opt(
        &mut self,
        pattern: Option<&Node>,
        candidate: Option<&Node>,
    ) -> Result<bool, EngineError> {
        match (pattern, candidate) {
            (None, None) => Ok(true),
            (Some(p), Some(c)) => self.match_node(p, c),
            (None, Some(present)) | (Some(present), None) => {
                Ok(self.mode == MatchMode::Relaxed && present.is_ident_named("_"))
            }
        }
    }

    /// Matches two sibling groups positionally: equal lengths, no wildcard
    /// absorption.  Used for field lists and top-level declarations.
    fn match_pair_list(&mut self, patterns: &[Node], candidates: &[Node]) -> Result<bool, EngineError> {
        if patterns.len() != candidates.len() {
            return Ok(false);
        }
        for (p, c) in patterns.iter().zip(candidates) {
            if !self.match_node(p, c)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Matches an ordered sibling group through the sequence matcher.
    pub(crate) fn match_seq(
        &mut self,
        patterns: &[Node],
        candidates: &[Node],
        kind: ListKind,
    ) -> Result<bool, EngineError> {
        Ok(self.match_list(patterns, candidates, kind, false)?.is_some())
    }

    fn match_block(&mut self, stmts: &[Node], candidate: &Node) -> Result<bool, EngineError> {
        if self.mode == MatchMode::Relaxed {
            // A block pattern may match a bare statement list directly.
            let view = Node::list(ListKind::Stmt, stmts.to_vec());
            if self.match_node(&view, candidate)? {
                return Ok(true);
            }
        }
        let NodeKind::Block { stmts: c_stmts } = &candidate.kind else {
            return Ok(false);
        };
        self.match_seq(stmts, c_stmts, ListKind::Stmt)
    }

    fn match_if(
        &mut self,
        init: Option<&Node>,
        cond: &Node,
        body: &Node,
        else_branch: Option<&Node>,
        candidate: &Node,
    ) -> Result<bool, EngineError> {
        let NodeKind::If {
            init: c_init,
            cond: c_cond,
            body: c_body,
            else_branch: c_else,
        } = &candidate.kind
        else {
            return Ok(false);
        };
        if init.is_none() && header_wildcard(self, cond) {
            let left = Node::list(ListKind::Stmt, vec![stmt_wrap(cond)]);
            let right = header_stmts(c_init.as_deref(), Some(c_cond), None);
            return Ok(self.match_node(&left, &right)? && self.match_node(body, c_body)?);
        }
        Ok(self.match_opt(init, c_init.as_deref())?
            && self.match_node(cond, c_cond)?
            && self.match_node(body, c_body)?
            && self.match_opt(else_branch, c_else.as_deref())?)
    }

    fn match_switch(
        &mut self,
        init: Option<&Node>,
        tag: Option<&Node>,
        body: &Node,
        candidate: &Node,
    ) -> Result<bool, EngineError> {
        let NodeKind::Switch {
            init: c_init,
            tag: c_tag,
            body: c_body,
        } = &candidate.kind
        else {
            return Ok(false);
        };
        if init.is_none()
            && let Some(tag_node) = tag
            && header_wildcard(self, tag_node)
        {
            let left = Node::list(ListKind::Stmt, vec![stmt_wrap(tag_node)]);
            let right = header_stmts(c_init.as_deref(), c_tag.as_deref(), None);
            return Ok(self.match_node(&left, &right)? && self.match_node(body, c_body)?);
        }
        Ok(self.match_opt(init, c_init.as_deref())?
            && self.match_opt(tag, c_tag.as_deref())?
            && self.match_node(body, c_body)?)
    }

    fn match_for(
        &mut self,
        init: Option<&Node>,
        cond: Option<&Node>,
        post: Option<&Node>,
        body: &Node,
        candidate: &Node,
    ) -> Result<bool, EngineError> {
        let NodeKind::For {
            init: c_init,
            cond: c_cond,
            post: c_post,
            body: c_body,
        } = &candidate.kind
        else {
            return Ok(false);
        };
        if init.is_none()
            && post.is_none()
            && let Some(cond_node) = cond
            && header_wildcard(self, cond_node)
        {
            let left = Node::list(ListKind::Stmt, vec![stmt_wrap(cond_node)]);
            let right = header_stmts(c_init.as_deref(), c_cond.as_deref(), c_post.as_deref());
            return Ok(self.match_node(&left, &right)? && self.match_node(body, c_body)?);
        }
        Ok(self.match_opt(init, c_init.as_deref())?
            && self.match_opt(cond, c_cond.as_deref())?
            && self.match_opt(post, c_post.as_deref())?
            && self.match_node(body, c_body)?)
    }

    fn match_value_spec(
        &mut self,
        names: &[Node],
        ty: Option<&Node>,
        values: &[Node],
        candidate: &Node,
    ) -> Result<bool, EngineError> {
        let NodeKind::ValueSpec {
            names: c_names,
            ty: c_ty,
            values: c_values,
        } = &candidate.kind
        else {
            return Ok(false);
        };
        if !self.match_opt(ty, c_ty.as_deref())? {
            return Ok(false);
        }
        if self.mode == MatchMode::Relaxed
            && let [only_name] = names
        {
            // A one-name spec may match its name/value pair at any
            // position of a wider spec.
            for (i, c_name) in c_names.iter().enumerate() {
                if !self.match_node(only_name, c_name)? {
                    continue;
                }
                let value_ok = match (values.first(), c_values.get(i)) {
                    (None, _) => true,
                    (Some(p), Some(c)) => self.match_node(p, c)?,
                    (Some(_), None) => false,
                };
                if value_ok {
                    return Ok(true);
                }
            }
        }
        Ok(self.match_seq(names, c_names, ListKind::Ident)?
            && self.match_seq(values, c_values, ListKind::Expr)?)
    }
}
