//! Matching state threaded through one top-level attempt.

use trawl_core::{EngineError, ListKind, MatchMode, Node, NodeKind, ScopeId, TypeInfo};

use crate::matcher::bindings::Bindings;

/// Mutable state for one top-level match attempt: the capture environment
/// and the innermost lexical scope reached so far.
///
/// A fresh context is created per attempt, so independent attempts can
/// never contaminate each other's captures; parallel evaluation across
/// candidates only needs one context per worker.
pub(crate) struct MatchCtx<'t> {
    pub(crate) info: &'t dyn TypeInfo,
    pub(crate) mode: MatchMode,
    pub(crate) bindings: Bindings,
    pub(crate) scope: Option<ScopeId>,
}

impl<'t> MatchCtx<'t> {
    pub(crate) fn new(mode: MatchMode, info: &'t dyn TypeInfo, scope: Option<ScopeId>) -> Self {
        Self {
            info,
            mode,
            bindings: Bindings::new(),
            scope,
        }
    }

    /// Runs one top-level attempt, yielding the matched node when it
    /// succeeds.
    ///
    /// When both sides are statement lists the partial sequence matcher is
    /// used, so a short statement pattern can align with a contiguous
    /// sub-range of a longer block; the returned node then covers only that
    /// sub-range.  Otherwise an ordinary single-node match is attempted and
    /// the candidate itself is returned.
    pub(crate) fn top_match(
        &mut self,
        pattern: &Node,
        candidate: &Node,
    ) -> Result<Option<Node>, EngineError> {
        if let (NodeKind::List(p_list), NodeKind::List(c_list)) = (&pattern.kind, &candidate.kind)
            && p_list.kind == ListKind::Stmt
            && c_list.kind == ListKind::Stmt
        {
            let Some(range) = self.match_list(&p_list.nodes, &c_list.nodes, ListKind::Stmt, true)?
            else {
                return Ok(None);
            };
            let nodes = c_list.nodes.get(range).map(<[Node]>::to_vec).unwrap_or_default();
            return Ok(Some(Node::list(ListKind::Stmt, nodes)));
        }
        if self.match_node(pattern, candidate)? {
            return Ok(Some(candidate.clone()));
        }
        Ok(None)
    }
}
