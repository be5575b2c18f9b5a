//! Error types for the matching engine.
//!
//! Structural mismatch is not an error: the matcher reports it as an
//! ordinary negative result and callers backtrack or move on.  The variants
//! here cover the rare, caller-fatal faults — an unsupported type expression
//! in a pattern constraint, a name that cannot be resolved in any enclosing
//! scope, or a pattern shape the compiler should have rejected.  A fault
//! aborts the current pipeline stage and is surfaced to the caller; it is
//! never silently treated as "no match".

use thiserror::Error;

/// Faults raised by pattern and type-constraint processing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// A type expression in a wildcard constraint has a shape the resolver
    /// does not support (for example a fixed-length array whose length is
    /// not an integer literal).
    #[error("unsupported type expression: {detail}")]
    UnsupportedTypeExpr {
        /// Description of the unsupported shape.
        detail: String,
    },

    /// An identifier in a type constraint could not be resolved through the
    /// enclosing scopes.
    #[error("cannot resolve `{name}` in any enclosing scope")]
    UnresolvedName {
        /// The name that failed to resolve.
        name: String,
    },

    /// A pattern has a structure the pattern compiler should have rejected.
    #[error("malformed pattern: {message}")]
    MalformedPattern {
        /// Description of the malformation.
        message: String,
    },
}

impl EngineError {
    /// Creates an unsupported type expression fault.
    #[must_use]
    pub fn unsupported_type_expr(detail: impl Into<String>) -> Self {
        Self::UnsupportedTypeExpr {
            detail: detail.into(),
        }
    }

    /// Creates an unresolved name fault.
    #[must_use]
    pub fn unresolved_name(name: impl Into<String>) -> Self {
        Self::UnresolvedName { name: name.into() }
    }

    /// Creates a malformed pattern fault.
    #[must_use]
    pub fn malformed_pattern(message: impl Into<String>) -> Self {
        Self::MalformedPattern {
            message: message.into(),
        }
    }
}
