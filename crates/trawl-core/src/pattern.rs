//! Compiled pattern vocabulary.
//!
//! A pattern is an ordinary syntax tree in which identifier positions may
//! carry a [`WildcardSpec`] instead of a literal name.  Compiling pattern
//! text into this form is the pattern parser's job and out of scope here;
//! this module only defines the compiled shape the engine consumes.

use regex::Regex;

use crate::error::EngineError;
use crate::syntax::{Node, NodeKind};

/// The relation a type constraint applies between a candidate's static type
/// and the constraint's resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRelation {
    /// The types must be identical.
    Identical,
    /// The candidate's type must be assignable to the constraint type.
    AssignableTo,
    /// The candidate's type must be convertible to the constraint type.
    ConvertibleTo,
}

/// One type constraint attached to a wildcard.
///
/// The constraint type is kept as an unresolved type-expression subtree and
/// resolved against the ambient scope at constraint-check time, so the same
/// pattern can be applied under different programs.
#[derive(Debug, Clone)]
pub struct TypeRule {
    /// The relation to apply.
    pub relation: TypeRelation,
    /// The unresolved constraint type expression.
    pub ty: Node,
}

impl TypeRule {
    /// Creates a type rule from a relation and a type expression subtree.
    #[must_use]
    pub const fn new(relation: TypeRelation, ty: Node) -> Self {
        Self { relation, ty }
    }
}

/// A pattern placeholder occupying an identifier position.
///
/// The capture name `_` discards: it matches without binding and never
/// constrains later matches.  A `multi` wildcard may absorb a variable-length
/// run of sibling nodes instead of exactly one node.
#[derive(Debug, Clone)]
pub struct WildcardSpec {
    /// The capture name; `_` matches anything and binds nothing.
    pub name: String,
    /// Whether the wildcard may consume zero or more sibling nodes.
    pub multi: bool,
    /// Regexes the candidate identifier's text must all match.
    pub name_rules: Vec<Regex>,
    /// Type constraints the candidate expression's static type must satisfy.
    pub type_rules: Vec<TypeRule>,
    /// Whether the candidate's static type must be comparable.
    pub comparable: bool,
}

impl WildcardSpec {
    /// Creates a single-node capturing wildcard with no constraints.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            multi: false,
            name_rules: Vec::new(),
            type_rules: Vec::new(),
            comparable: false,
        }
    }

    /// Creates a single-node discard wildcard (`$_`).
    #[must_use]
    pub fn discard() -> Self {
        Self::named("_")
    }

    /// Marks the wildcard as multi-node (`$*name`).
    #[must_use]
    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }

    /// Adds a name constraint regex.
    #[must_use]
    pub fn with_name_rule(mut self, rule: Regex) -> Self {
        self.name_rules.push(rule);
        self
    }

    /// Adds a type constraint.
    #[must_use]
    pub fn with_type_rule(mut self, rule: TypeRule) -> Self {
        self.type_rules.push(rule);
        self
    }

    /// Requires the candidate's static type to be comparable.
    #[must_use]
    pub const fn require_comparable(mut self) -> Self {
        self.comparable = true;
        self
    }

    /// Returns whether this wildcard discards its match.
    #[must_use]
    pub fn is_discard(&self) -> bool {
        self.name == "_"
    }
}

/// A compiled structural pattern.
///
/// Construction validates the shapes the pattern compiler is expected to
/// have rejected already; a failure here is a caller-fatal
/// [`EngineError::MalformedPattern`], never a silent non-match.
#[derive(Debug, Clone)]
pub struct Pattern {
    root: Node,
}

impl Pattern {
    /// Wraps a pattern tree, rejecting malformed wildcard specs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedPattern`] if any wildcard has an
    /// empty capture name.
    pub fn new(root: Node) -> Result<Self, EngineError> {
        validate(&root)?;
        Ok(Self { root })
    }

    /// Returns the pattern's root node.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }
}

fn validate(node: &Node) -> Result<(), EngineError> {
    if let NodeKind::Wildcard(spec) = &node.kind
        && spec.name.is_empty()
    {
        return Err(EngineError::malformed_pattern(
            "wildcard with empty capture name",
        ));
    }
    for child in node.children() {
        validate(child)?;
    }
    Ok(())
}
