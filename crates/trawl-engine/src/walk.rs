//! Whole-tree traversal, match collection, and filtering.
//!
//! Every candidate root is traversed in pre-order.  At each visited node a
//! fresh top-level attempt is made — against the node itself and against
//! every structurally meaningful list embedded in it — with a brand-new
//! capture environment, so sibling attempts can never contaminate each
//! other.  Matches are recorded by source span, first occurrence wins, and
//! discovery order is preserved.
//!
//! When a root is itself a sibling list, adapter views let a lone
//! expression pattern match one element of a comma-separated list or one
//! statement of an implicit single-expression statement, before the pattern
//! is tried against the whole list.

use std::collections::HashSet;

use tracing::warn;

use trawl_core::{
    EngineConfig, EngineError, ListKind, MatchMode, Node, NodeKind, ScopeId, Span, TypeInfo,
};

use crate::matcher::context::MatchCtx;
use crate::matcher::node::stmt_wrap;

/// Traversal state for one pattern applied over one candidate set.
///
/// Tracks the ambient lexical scope as the walk descends, re-seating it on
/// entry to scope-introducing nodes and restoring it on the way out, so
/// every attempt starts from the innermost scope enclosing its position.
pub(crate) struct WalkCtx<'t> {
    mode: MatchMode,
    info: &'t dyn TypeInfo,
    scope: Option<ScopeId>,
    visited: usize,
    limit: usize,
    warned: bool,
}

impl<'t> WalkCtx<'t> {
    pub(crate) fn new(config: &EngineConfig, info: &'t dyn TypeInfo) -> Self {
        Self {
            mode: config.mode(),
            info,
            scope: None,
            visited: 0,
            limit: config.max_visited_nodes(),
            warned: false,
        }
    }

    /// Collects every distinct match of `pattern` inside the roots,
    /// deduplicated by source span in discovery order.
    pub(crate) fn collect(
        &mut self,
        pattern: &Node,
        roots: &[Node],
    ) -> Result<Vec<Node>, EngineError> {
        let mut found = Vec::new();
        let mut seen: HashSet<Span> = HashSet::new();
        for root in roots {
            self.walk_root_collect(pattern, root, &mut found, &mut seen)?;
        }
        Ok(found)
    }

    /// Returns whether `pattern` matches anywhere inside `root`, stopping
    /// at the first success.
    pub(crate) fn matches_anywhere(
        &mut self,
        pattern: &Node,
        root: &Node,
    ) -> Result<bool, EngineError> {
        if let NodeKind::List(list) = &root.kind {
            for view in adapter_views(pattern, root) {
                if self.attempt_hit(&view, root)? {
                    return Ok(true);
                }
            }
            if self.attempt_hit(pattern, root)? {
                return Ok(true);
            }
            for elem in &list.nodes {
                if self.walk_any(pattern, elem)? {
                    return Ok(true);
                }
            }
            return Ok(false);
        }
        self.walk_any(pattern, root)
    }

    fn walk_root_collect(
        &mut self,
        pattern: &Node,
        root: &Node,
        found: &mut Vec<Node>,
        seen: &mut HashSet<Span>,
    ) -> Result<(), EngineError> {
        if let NodeKind::List(list) = &root.kind {
            for view in adapter_views(pattern, root) {
                self.attempt_collect(&view, root, found, seen)?;
            }
            self.attempt_collect(pattern, root, found, seen)?;
            for elem in &list.nodes {
                self.walk_collect(pattern, elem, found, seen)?;
            }
            return Ok(());
        }
        self.walk_collect(pattern, root, found, seen)
    }

    fn walk_collect(
        &mut self,
        pattern: &Node,
        node: &Node,
        found: &mut Vec<Node>,
        seen: &mut HashSet<Span>,
    ) -> Result<(), EngineError> {
        self.tick();
        let saved = self.scope;
        if node.introduces_scope() {
            self.scope = self.info.scope_of(node);
        }
        self.attempt_collect(pattern, node, found, seen)?;
        for list in embedded_lists(node) {
            self.attempt_collect(pattern, &list, found, seen)?;
        }
        for child in node.children() {
            self.walk_collect(pattern, child, found, seen)?;
        }
        self.scope = saved;
        Ok(())
    }

    fn walk_any(&mut self, pattern: &Node, node: &Node) -> Result<bool, EngineError> {
        self.tick();
        let saved = self.scope;
        if node.introduces_scope() {
            self.scope = self.info.scope_of(node);
        }
        let hit = 'search: {
            if self.attempt_hit(pattern, node)? {
                break 'search true;
            }
            for list in embedded_lists(node) {
                if self.attempt_hit(pattern, &list)? {
                    break 'search true;
                }
            }
            for child in node.children() {
                if self.walk_any(pattern, child)? {
                    break 'search true;
                }
            }
            false
        };
        self.scope = saved;
        Ok(hit)
    }

    fn attempt_collect(
        &mut self,
        pattern: &Node,
        candidate: &Node,
        found: &mut Vec<Node>,
        seen: &mut HashSet<Span>,
    ) -> Result<(), EngineError> {
        let mut ctx = MatchCtx::new(self.mode, self.info, self.scope);
        if let Some(node) = ctx.top_match(pattern, candidate)?
            && seen.insert(node.span)
        {
            found.push(node);
        }
        Ok(())
    }

    fn attempt_hit(&mut self, pattern: &Node, candidate: &Node) -> Result<bool, EngineError> {
        let mut ctx = MatchCtx::new(self.mode, self.info, self.scope);
        Ok(ctx.top_match(pattern, candidate)?.is_some())
    }

    fn tick(&mut self) {
        self.visited += 1;
        if !self.warned && self.visited > self.limit {
            self.warned = true;
            warn!(limit = self.limit, "walk exceeded its visited-node limit");
        }
    }
}

/// Synthesised pattern views tried against a list root, so a lone capture
/// can match one element of an expression list or one statement of an
/// implicit single-expression statement list.
fn adapter_views(pattern: &Node, root: &Node) -> Vec<Node> {
    if !matches!(root.kind, NodeKind::List(_)) || !pattern.is_expr() {
        return Vec::new();
    }
    vec![
        Node::list(ListKind::Expr, vec![pattern.clone()]),
        Node::list(ListKind::Stmt, vec![stmt_wrap(pattern)]),
    ]
}

/// The structurally meaningful lists embedded in a node, as owned list
/// views.  Empty slots are skipped.
fn embedded_lists(node: &Node) -> Vec<Node> {
    let mut lists = Vec::new();
    let mut add = |kind: ListKind, nodes: &[Node]| {
        if !nodes.is_empty() {
            lists.push(Node::list(kind, nodes.to_vec()));
        }
    };
    match &node.kind {
        NodeKind::CompositeLit { elts, .. } => add(ListKind::Expr, elts),
        NodeKind::Call { args, .. } => add(ListKind::Expr, args),
        NodeKind::Assign { lhs, rhs, .. } => {
            add(ListKind::Expr, lhs);
            add(ListKind::Expr, rhs);
        }
        NodeKind::Return { results } => add(ListKind::Expr, results),
        NodeKind::ValueSpec { values, .. } => add(ListKind::Expr, values),
        NodeKind::Block { stmts } => add(ListKind::Stmt, stmts),
        NodeKind::CaseClause { list, body } => {
            add(ListKind::Expr, list);
            add(ListKind::Stmt, body);
        }
        NodeKind::CommClause { body, .. } => add(ListKind::Stmt, body),
        _ => {}
    }
    lists
}
