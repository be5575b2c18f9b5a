//! Pipeline stages composing patterns into a filter chain.
//!
//! A pipeline consumes an initial node set and applies each stage in
//! order: a range stage expands every node into the matches found inside
//! it, while keep and drop stages narrow the set by whether a match exists
//! anywhere inside each node.  The final set is the answer.

use tracing::debug;

use trawl_core::{EngineConfig, EngineError, Node, Pattern, TypeInfo};

use crate::walk::WalkCtx;

/// One pipeline operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOp {
    /// Expand each node into the deduplicated matches found inside it.
    Range,
    /// Keep only nodes the pattern matches somewhere inside.
    Keep,
    /// Drop nodes the pattern matches somewhere inside.
    Drop,
}

/// One stage: an operator and its compiled pattern.
#[derive(Debug, Clone)]
pub struct Stage {
    op: StageOp,
    pattern: Pattern,
}

impl Stage {
    /// Creates a stage from an operator and a pattern.
    #[must_use]
    pub const fn new(op: StageOp, pattern: Pattern) -> Self {
        Self { op, pattern }
    }

    /// Creates a range stage.
    #[must_use]
    pub const fn range(pattern: Pattern) -> Self {
        Self::new(StageOp::Range, pattern)
    }

    /// Creates a keep-if-matches stage.
    #[must_use]
    pub const fn keep(pattern: Pattern) -> Self {
        Self::new(StageOp::Keep, pattern)
    }

    /// Creates a drop-if-matches stage.
    #[must_use]
    pub const fn drop(pattern: Pattern) -> Self {
        Self::new(StageOp::Drop, pattern)
    }

    /// Returns the stage operator.
    #[must_use]
    pub const fn op(&self) -> StageOp {
        self.op
    }

    /// Returns the stage pattern.
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// Runs pattern pipelines over candidate node sets.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Applies each stage in order to the node set and returns the final
    /// set.  Order and multiplicity of survivors are preserved; range
    /// output is deduplicated by span in discovery order.
    ///
    /// # Errors
    ///
    /// Returns the first pattern or type-resolution fault raised by a
    /// stage; faults abort the pipeline rather than being treated as
    /// non-matches.
    pub fn run(
        &self,
        stages: &[Stage],
        roots: Vec<Node>,
        info: &dyn TypeInfo,
    ) -> Result<Vec<Node>, EngineError> {
        let mut current = roots;
        for stage in stages {
            let input_len = current.len();
            let mut walk = WalkCtx::new(&self.config, info);
            current = match stage.op {
                StageOp::Range => walk.collect(stage.pattern.root(), &current)?,
                StageOp::Keep => retain(&mut walk, stage.pattern.root(), current, true)?,
                StageOp::Drop => retain(&mut walk, stage.pattern.root(), current, false)?,
            };
            debug!(
                op = ?stage.op,
                input = input_len,
                output = current.len(),
                "pipeline stage applied"
            );
        }
        Ok(current)
    }
}

/// Filters candidates by whether the pattern matches anywhere inside,
/// retaining those whose result equals `want`.
fn retain(
    walk: &mut WalkCtx<'_>,
    pattern: &Node,
    candidates: Vec<Node>,
    want: bool,
) -> Result<Vec<Node>, EngineError> {
    let mut kept = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if walk.matches_anywhere(pattern, &candidate)? == want {
            kept.push(candidate);
        }
    }
    Ok(kept)
}
