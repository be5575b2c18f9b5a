//! Pattern matching engine for finding code structures.
//!
//! This module implements the structural matcher: node-level equality with
//! wildcard binding and type constraints, backtracking sequence matching
//! over sibling lists, and the single-pattern entry points the pipeline
//! stages are built from.

pub(crate) mod bindings;
pub(crate) mod context;
pub(crate) mod node;
pub(crate) mod sequence;

use trawl_core::{EngineConfig, EngineError, Node, Pattern, TypeInfo};

use crate::walk::WalkCtx;

/// Applies one compiled pattern to candidate trees.
///
/// A matcher borrows its type-information provider; candidates and the
/// provider are read-only, so matchers for independent candidate sets can
/// run in parallel as long as each owns its own instance.
pub struct Matcher<'t> {
    config: EngineConfig,
    info: &'t dyn TypeInfo,
}

impl<'t> Matcher<'t> {
    /// Creates a matcher with the given configuration and provider.
    #[must_use]
    pub const fn new(config: EngineConfig, info: &'t dyn TypeInfo) -> Self {
        Self { config, info }
    }

    /// Finds all matches of the pattern inside the roots.
    ///
    /// Matches are deduplicated by source span and returned in discovery
    /// order.  A match is a clone of the matched node, or a statement list
    /// covering the matched sub-range when a statement pattern aligned
    /// partially inside a longer sequence.
    ///
    /// # Errors
    ///
    /// Propagates pattern and type-resolution faults; a structural
    /// mismatch is not an error.
    pub fn find_all(&self, pattern: &Pattern, roots: &[Node]) -> Result<Vec<Node>, EngineError> {
        let mut walk = WalkCtx::new(&self.config, self.info);
        walk.collect(pattern.root(), roots)
    }

    /// Returns whether the pattern matches anywhere inside the candidate,
    /// stopping at the first success.
    ///
    /// # Errors
    ///
    /// Propagates pattern and type-resolution faults; a structural
    /// mismatch is not an error.
    pub fn matches_within(
        &self,
        pattern: &Pattern,
        candidate: &Node,
    ) -> Result<bool, EngineError> {
        let mut walk = WalkCtx::new(&self.config, self.info);
        walk.matches_anywhere(pattern.root(), candidate)
    }
}

#[cfg(test)]
mod tests;
