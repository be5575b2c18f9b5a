//! The static type model and the type-information provider interface.
//!
//! The engine does not perform type inference.  When a wildcard carries
//! type constraints, the engine queries a [`TypeInfo`] provider for the
//! candidate expression's static type and for the relations between types,
//! and resolves constraint type expressions through the provider's scopes.

use crate::syntax::Node;

/// An opaque handle to one lexical scope known to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(
    /// The provider-assigned scope number.
    pub u32,
);

/// A resolved static type.
///
/// Named types are provider-defined leaves; compound forms are built by the
/// constraint resolver from pointer, slice, and fixed-array type
/// expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A named type, including basic types.
    Named(String),
    /// A pointer to an element type.
    Pointer(Box<Type>),
    /// A variable-length sequence of an element type.
    Slice(Box<Type>),
    /// A fixed-length sequence of an element type.
    Array(u64, Box<Type>),
}

impl Type {
    /// Creates a named type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a pointer type.
    #[must_use]
    pub fn pointer(elem: Self) -> Self {
        Self::Pointer(Box::new(elem))
    }

    /// Creates a slice type.
    #[must_use]
    pub fn slice(elem: Self) -> Self {
        Self::Slice(Box::new(elem))
    }

    /// Creates a fixed-length array type.
    #[must_use]
    pub fn array(len: u64, elem: Self) -> Self {
        Self::Array(len, Box::new(elem))
    }
}

/// Static type and scope information supplied by an external collaborator.
///
/// Implementations are expected to be cheap, synchronous lookups over
/// already-computed analysis results.  `lookup` resolves a name through the
/// given scope and its enclosing scopes outward to the program unit, the
/// way a compiler's scope chain would.
pub trait TypeInfo {
    /// Returns the static type of an expression, when known.
    fn type_of(&self, expr: &Node) -> Option<Type>;

    /// Returns whether values of the type support equality comparison.
    fn is_comparable(&self, ty: &Type) -> bool;

    /// Returns whether the two types are identical.
    fn identical(&self, a: &Type, b: &Type) -> bool;

    /// Returns whether a value of `from` is assignable to `to`.
    fn assignable_to(&self, from: &Type, to: &Type) -> bool;

    /// Returns whether a value of `from` is convertible to `to`.
    fn convertible_to(&self, from: &Type, to: &Type) -> bool;

    /// Returns the scope introduced by a node, when the node introduces one.
    fn scope_of(&self, node: &Node) -> Option<ScopeId>;

    /// Resolves a name through `scope` and its enclosing scopes.
    fn lookup(&self, scope: ScopeId, name: &str) -> Option<Type>;

    /// Resolves a package qualifier in `scope` to the package's own scope.
    fn package_scope(&self, scope: ScopeId, name: &str) -> Option<ScopeId>;
}

/// A provider that knows nothing.
///
/// With this provider every type-constrained wildcard fails to match, since
/// no candidate expression has a resolvable type.  Useful when matching
/// purely structurally.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTypeInfo;

impl TypeInfo for NullTypeInfo {
    fn type_of(&self, _expr: &Node) -> Option<Type> {
        None
    }

    fn is_comparable(&self, _ty: &Type) -> bool {
        false
    }

    fn identical(&self, _a: &Type, _b: &Type) -> bool {
        false
    }

    fn assignable_to(&self, _from: &Type, _to: &Type) -> bool {
        false
    }

    fn convertible_to(&self, _from: &Type, _to: &Type) -> bool {
        false
    }

    fn scope_of(&self, _node: &Node) -> Option<ScopeId> {
        None
    }

    fn lookup(&self, _scope: ScopeId, _name: &str) -> Option<Type> {
        None
    }

    fn package_scope(&self, _scope: ScopeId, _name: &str) -> Option<ScopeId> {
        None
    }
}
