//! Engine configuration for matching behaviour and safety limits.

/// How strictly optional sub-trees and single-element shapes are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// A present pattern sub-tree never matches an absent candidate
    /// sub-tree or vice versa; both absent is a trivial match.
    #[default]
    Strict,
    /// Relaxed comparison: an absent side additionally matches an
    /// identifier literally named `_`, and the single-element
    /// generalisations are enabled (one-spec declaration groups, one-name
    /// value specs, block bodies written as bare statement lists, and
    /// loop-header wildcards).
    Relaxed,
}

/// Engine configuration controlling match mode and traversal limits.
///
/// # Defaults
///
/// - `mode`: [`MatchMode::Strict`]
/// - `max_visited_nodes`: 100 000 — past this many visited candidate
///   positions a single walk emits a diagnostic warning; matching semantics
///   are unaffected.
///
/// # Example
///
/// ```
/// use trawl_core::{EngineConfig, MatchMode};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.mode(), MatchMode::Strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// The matching mode applied by every stage.
    mode: MatchMode,
    /// Visited-node count past which a walk warns about its size.
    max_visited_nodes: usize,
}

impl EngineConfig {
    /// Creates a new engine configuration with explicit values.
    #[must_use]
    pub const fn new(mode: MatchMode, max_visited_nodes: usize) -> Self {
        Self {
            mode,
            max_visited_nodes,
        }
    }

    /// Creates a configuration with the given mode and default limits.
    #[must_use]
    pub const fn with_mode(mode: MatchMode) -> Self {
        Self {
            mode,
            max_visited_nodes: 100_000,
        }
    }

    /// Returns the matching mode.
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns the visited-node warning threshold.
    #[must_use]
    pub const fn max_visited_nodes(&self) -> usize {
        self.max_visited_nodes
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::Strict,
            max_visited_nodes: 100_000,
        }
    }
}
