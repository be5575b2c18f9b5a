//! Core data model for the trawl structural matching engine.
//!
//! This crate provides the canonical type definitions shared by the engine
//! and its collaborators: the syntax model both patterns and candidate
//! programs are expressed in, source spans, the compiled pattern and
//! wildcard vocabulary, the static type model with its provider interface,
//! engine configuration, and the engine fault type.  It is re-exported by
//! the `trawl-engine` crate for stable public consumption.
//!
//! # Core types
//!
//! - [`Node`], [`NodeKind`], [`NodeList`] — the syntax model
//! - [`Span`] — byte spans used for identity and reporting
//! - [`Pattern`], [`WildcardSpec`], [`TypeRule`] — compiled patterns
//! - [`Type`], [`TypeInfo`], [`ScopeId`] — static type queries
//! - [`EngineConfig`], [`MatchMode`] — matching behaviour
//! - [`EngineError`] — caller-fatal faults
//!
//! # Example
//!
//! ```
//! use trawl_core::{Node, NodeKind, Span};
//!
//! let node = Node::new(
//!     NodeKind::Ident {
//!         name: String::from("reader"),
//!     },
//!     Span::new(0, 6),
//! );
//! assert!(node.is_expr());
//! ```

mod config;
mod error;
mod pattern;
mod span;
mod syntax;
mod types;

pub use config::{EngineConfig, MatchMode};
pub use error::EngineError;
pub use pattern::{Pattern, TypeRelation, TypeRule, WildcardSpec};
pub use span::Span;
pub use syntax::{
    AssignOp, BinaryOp, BranchKind, ChanDir, DeclKeyword, IncDecOp, LitKind, ListKind, Node,
    NodeKind, NodeList, UnaryOp,
};
pub use types::{NullTypeInfo, ScopeId, Type, TypeInfo};

/// Tree-building helpers for tests; enabled by the `test-support` feature.
#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;
