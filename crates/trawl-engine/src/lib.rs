//! Structural pattern matching over source-code syntax trees.
//!
//! Given a compiled [`Pattern`] — literal structure plus named and
//! anonymous wildcards — this crate finds, filters, or excludes subtrees of
//! a parsed program that structurally match it, optionally constrained by
//! static type information from a [`TypeInfo`] provider.
//!
//! The engine is pure recursive descent over already-resident trees: no
//! operation suspends or blocks, matching never mutates a candidate, and
//! every top-level attempt runs with a fresh capture environment.
//!
//! # Example
//!
//! ```
//! use trawl_core::fixtures::TreeBuilder;
//! use trawl_core::{BinaryOp, EngineConfig, NullTypeInfo, Pattern};
//! use trawl_engine::Matcher;
//!
//! // Pattern: $x + $x — both operands must bind the same capture.
//! let mut b = TreeBuilder::new();
//! let lhs = b.wild("x");
//! let rhs = b.wild("x");
//! let pattern = Pattern::new(b.binary(BinaryOp::Add, lhs, rhs))?;
//!
//! let a1 = b.ident("a");
//! let a2 = b.ident("a");
//! let candidate = b.binary(BinaryOp::Add, a1, a2);
//!
//! let matcher = Matcher::new(EngineConfig::default(), &NullTypeInfo);
//! let matches = matcher.find_all(&pattern, &[candidate])?;
//! assert_eq!(matches.len(), 1);
//! # Ok::<(), trawl_engine::EngineError>(())
//! ```

mod matcher;
mod pipeline;
mod typeres;
mod walk;

pub use matcher::Matcher;
pub use pipeline::{Engine, Stage, StageOp};
pub use trawl_core::{
    AssignOp, BinaryOp, BranchKind, ChanDir, DeclKeyword, EngineConfig, EngineError, IncDecOp,
    ListKind, LitKind, MatchMode, Node, NodeKind, NodeList, NullTypeInfo, Pattern, ScopeId, Span,
    Type, TypeInfo, TypeRelation, TypeRule, UnaryOp, WildcardSpec,
};
