//! Backtracking sequence matching over sibling lists.
//!
//! Matches a pattern list against a candidate list where pattern elements
//! may be ordinary nodes or multi-wildcards absorbing a variable-length run
//! of candidates.  The matcher is greedy-by-retry: a multi-wildcard first
//! tries an empty window, and every mismatch downstream grows the window by
//! one candidate from an explicit checkpoint.  Checkpoints form a stack, so
//! an exhausted window backtracks into the previous wildcard rather than
//! failing outright, and each checkpoint carries a full snapshot of the
//! capture environment restored verbatim on resume.
//!
//! Every structurally ordered sibling group funnels through this one
//! algorithm: argument lists, statement blocks, identifier groups, and
//! declaration groups.

use std::ops::Range;

use trawl_core::{EngineError, ListKind, Node};

use crate::matcher::bindings::Bindings;
use crate::matcher::context::MatchCtx;

/// One resumption point: the wildcard's pattern position, the candidate
/// cursor to retry from (growing by one per resume), the start of the
/// wildcard's capture window, and the bindings to restore.
struct Checkpoint {
    pat_idx: usize,
    resume: usize,
    window_start: usize,
    saved: Bindings,
    leading: bool,
}

/// Cursor state mutated by [`MatchCtx::match_list`]'s backtracking loop.
struct Cursors {
    pat_idx: usize,
    cand_idx: usize,
    partial_start: usize,
    wild: Option<String>,
    wild_start: usize,
}

impl MatchCtx<'_> {
    /// Matches a pattern list against a candidate list.
    ///
    /// Returns the matched candidate subrange, or `None` on mismatch.  In
    /// partial mode (top-level statement-range matching only) the pattern
    /// may align with any contiguous sub-range: leading candidates are
    /// skipped through an implicit checkpoint and trailing candidates are
    /// accepted once the pattern is exhausted with no wildcard in effect.
    ///
    /// Two empty lists match trivially; an empty pattern never matches a
    /// non-empty candidate list.
    pub(crate) fn match_list(
        &mut self,
        patterns: &[Node],
        candidates: &[Node],
        kind: ListKind,
        partial: bool,
    ) -> Result<Option<Range<usize>>, EngineError> {
        if patterns.is_empty() {
            if candidates.is_empty() {
                return Ok(Some(0..0));
            }
            return Ok(None);
        }

        let mut stack: Vec<Checkpoint> = Vec::new();
        let mut cur = Cursors {
            pat_idx: 0,
            cand_idx: 0,
            partial_start: 0,
            wild: None,
            wild_start: 0,
        };
        let mut partial_end = candidates.len();
        let mut leading_pushed = false;

        while cur.pat_idx < patterns.len() || cur.cand_idx < candidates.len() {
            if let Some(pat) = patterns.get(cur.pat_idx) {
                if let Some(spec) = pat.as_wildcard().filter(|spec| spec.multi) {
                    // A new wildcard opens its window here; re-trying the
                    // same wildcard keeps the window start it already has.
                    if cur.wild.as_deref() != Some(spec.name.as_str()) {
                        cur.wild = Some(spec.name.clone());
                        cur.wild_start = cur.cand_idx;
                    }
                    stack.push(Checkpoint {
                        pat_idx: cur.pat_idx,
                        resume: cur.cand_idx + 1,
                        window_start: cur.wild_start,
                        saved: self.bindings.clone(),
                        leading: false,
                    });
                    cur.pat_idx += 1;
                    continue;
                }
                if partial && cur.pat_idx == 0 && !leading_pushed {
                    // Implicit leading slack, as if the pattern started
                    // with a discarded multi-wildcard.
                    stack.push(Checkpoint {
                        pat_idx: 0,
                        resume: cur.cand_idx + 1,
                        window_start: 0,
                        saved: self.bindings.clone(),
                        leading: true,
                    });
                    leading_pushed = true;
                    cur.partial_start = cur.cand_idx;
                }
                if cur.cand_idx < candidates.len()
                    && self.window_consistent(&cur, candidates, kind)?
                    && let Some(cand) = candidates.get(cur.cand_idx)
                    && self.match_node(pat, cand)?
                {
                    cur.wild = None;
                    cur.pat_idx += 1;
                    cur.cand_idx += 1;
                    continue;
                }
            }
            if partial && cur.pat_idx == patterns.len() && cur.wild.is_none() {
                // Trailing candidates are slack in partial mode.
                partial_end = cur.cand_idx;
                break;
            }
            if !self.backtrack(&mut stack, &mut cur, patterns, candidates) {
                return Ok(None);
            }
        }

        if !self.window_consistent(&cur, candidates, kind)? {
            return Ok(None);
        }
        Ok(Some(cur.partial_start..partial_end))
    }

    /// Restores the most recent viable checkpoint, growing its window by
    /// one candidate.  Exhausted checkpoints are popped so backtracking
    /// continues into the previous wildcard.
    fn backtrack(
        &mut self,
        stack: &mut Vec<Checkpoint>,
        cur: &mut Cursors,
        patterns: &[Node],
        candidates: &[Node],
    ) -> bool {
        while let Some(top) = stack.last_mut() {
            if top.resume > candidates.len() {
                stack.pop();
                continue;
            }
            self.bindings = top.saved.clone();
            cur.cand_idx = top.resume;
            top.resume += 1;
            if top.leading {
                cur.pat_idx = 0;
                cur.partial_start = cur.cand_idx;
                cur.wild = None;
            } else {
                cur.pat_idx = top.pat_idx + 1;
                cur.wild_start = top.window_start;
                cur.wild = patterns
                    .get(top.pat_idx)
                    .and_then(Node::as_wildcard)
                    .map(|spec| spec.name.clone());
            }
            return true;
        }
        false
    }

    /// Checks the pending wildcard window against any prior binding of the
    /// same name and records it.
    ///
    /// The window is recorded on every attempt; the governing checkpoint's
    /// snapshot rolls it back on backtrack, and the last call before the
    /// match returns records the final extent.
    fn window_consistent(
        &mut self,
        cur: &Cursors,
        candidates: &[Node],
        kind: ListKind,
    ) -> Result<bool, EngineError> {
        let Some(name) = cur.wild.as_deref() else {
            return Ok(true);
        };
        if name == "_" {
            return Ok(true);
        }
        let window = candidates
            .get(cur.wild_start..cur.cand_idx)
            .unwrap_or_default()
            .to_vec();
        let list = Node::list(kind, window);
        if let Some(prev) = self.bindings.get(name).cloned()
            && !self.match_node(&prev, &list)?
        {
            return Ok(false);
        }
        self.bindings.record(name, list);
        Ok(true)
    }
}
