//! Resolution of constraint type expressions against lexical scopes.
//!
//! A wildcard's type constraint carries an unresolved type expression: an
//! identifier, a pointer-to, a fixed or variable-length array-of, or a
//! package-qualified name.  Resolution walks the expression recursively,
//! looking identifiers up through the provider's scope chain and resolving
//! qualified names inside the referenced package's scope.  Unsupported
//! shapes are caller-fatal faults, not match failures.

use trawl_core::{EngineError, LitKind, Node, NodeKind, ScopeId, Type, TypeInfo};

/// Resolves a type expression to a concrete static type.
///
/// # Errors
///
/// Returns [`EngineError::UnresolvedName`] when an identifier or package
/// qualifier is unknown to the provider (or no scope is in effect), and
/// [`EngineError::UnsupportedTypeExpr`] for expression shapes the resolver
/// does not handle, including fixed-length arrays whose length is not an
/// integer literal.
pub(crate) fn resolve_type(
    info: &dyn TypeInfo,
    scope: Option<ScopeId>,
    expr: &Node,
) -> Result<Type, EngineError> {
    match &expr.kind {
        NodeKind::Ident { name } => {
            let scope = scope.ok_or_else(|| EngineError::unresolved_name(name.clone()))?;
            info.lookup(scope, name)
                .ok_or_else(|| EngineError::unresolved_name(name.clone()))
        }
        NodeKind::ArrayType { len: None, elt } => Ok(Type::slice(resolve_type(info, scope, elt)?)),
        NodeKind::ArrayType {
            len: Some(len),
            elt,
        } => {
            let length = int_literal(len).ok_or_else(|| {
                EngineError::unsupported_type_expr("array length must be an integer literal")
            })?;
            Ok(Type::array(length, resolve_type(info, scope, elt)?))
        }
        NodeKind::Star { expr: elem } => Ok(Type::pointer(resolve_type(info, scope, elem)?)),
        NodeKind::Selector { expr: qualifier, field } => {
            let package = package_scope_of(info, scope, qualifier)?;
            resolve_type(info, Some(package), field)
        }
        other => Err(EngineError::unsupported_type_expr(format!(
            "cannot resolve a {} as a constraint type",
            kind_label(other)
        ))),
    }
}

/// Resolves a package qualifier to the package's own scope.
fn package_scope_of(
    info: &dyn TypeInfo,
    scope: Option<ScopeId>,
    qualifier: &Node,
) -> Result<ScopeId, EngineError> {
    let NodeKind::Ident { name } = &qualifier.kind else {
        return Err(EngineError::unsupported_type_expr(
            "package qualifier must be an identifier",
        ));
    };
    let scope = scope.ok_or_else(|| EngineError::unresolved_name(name.clone()))?;
    info.package_scope(scope, name)
        .ok_or_else(|| EngineError::unresolved_name(name.clone()))
}

fn int_literal(node: &Node) -> Option<u64> {
    let NodeKind::BasicLit {
        lit: LitKind::Int,
        value,
    } = &node.kind
    else {
        return None;
    };
    parse_int(value)
}

/// Parses an integer literal in source form: decimal, `0x`/`0o`/`0b`
/// prefixes, legacy leading-zero octal, and digit-separating underscores.
fn parse_int(text: &str) -> Option<u64> {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest.to_owned(), 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest.to_owned(), 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest.to_owned(), 2)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (lower.trim_start_matches('0').to_owned(), 8)
    } else {
        (lower.clone(), 10)
    };
    if digits.is_empty() {
        // A run of zeros like "0" or "000".
        return cleaned.chars().all(|c| c == '0').then_some(0);
    }
    u64::from_str_radix(&digits, radix).ok()
}

const fn kind_label(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Wildcard(_) => "wildcard",
        NodeKind::BasicLit { .. } => "literal",
        NodeKind::Call { .. } => "call expression",
        NodeKind::Index { .. } => "index expression",
        NodeKind::Paren { .. } => "parenthesised expression",
        _ => "non-type expression",
    }
}
