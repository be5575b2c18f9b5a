//! The syntax model shared by patterns and candidate programs.
//!
//! Both sides of a match are expressed in the same vocabulary: a [`Node`] is
//! one syntactic construct tagged with a [`NodeKind`] and a source [`Span`],
//! and a [`NodeList`] is an ordered, homogeneous run of sibling nodes
//! occupying a single child slot (call arguments, block bodies, declaration
//! groups).  Lists are first-class match targets, not just containers, and
//! appear as the [`NodeKind::List`] variant so the matcher can treat
//! node-versus-list uniformly.
//!
//! Children are owned values.  Synthesised adapter views (a lone expression
//! coerced into a one-element list, a loop header flattened into a statement
//! sequence) are built by cloning, so views never alias the original tree
//! and matching never mutates a candidate.

use crate::pattern::WildcardSpec;
use crate::span::Span;

/// The homogeneous element kind of a [`NodeList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// A run of expressions (call arguments, composite literal elements).
    Expr,
    /// A run of statements (block bodies, clause bodies).
    Stmt,
    /// A run of identifiers (declared names).
    Ident,
    /// A run of declaration specs (the body of a declaration group).
    Spec,
}

/// An ordered, homogeneous sequence of sibling nodes.
///
/// A list owns its elements; slicing or re-shaping a list during matching
/// copies the affected nodes rather than borrowing into the parent tree.
#[derive(Debug, Clone)]
pub struct NodeList {
    /// The element kind every node in the list shares.
    pub kind: ListKind,
    /// The elements in source order.
    pub nodes: Vec<Node>,
}

impl NodeList {
    /// Creates a new list from elements of the given kind.
    #[must_use]
    pub const fn new(kind: ListKind, nodes: Vec<Node>) -> Self {
        Self { kind, nodes }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the list has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the span covered by the elements.
    ///
    /// An empty list covers the zero span.
    #[must_use]
    pub fn span(&self) -> Span {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(first), Some(last)) => Span::new(first.span.start_byte, last.span.end_byte),
            _ => Span::new(0, 0),
        }
    }
}

/// The unary operators of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation `-`.
    Neg,
    /// Identity `+`.
    Pos,
    /// Logical negation `!`.
    Not,
    /// Bitwise complement `^`.
    BitNot,
    /// Address-of `&`.
    Addr,
    /// Channel receive `<-`.
    Recv,
}

/// The binary operators of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition `+`.
    Add,
    /// Subtraction `-`.
    Sub,
    /// Multiplication `*`.
    Mul,
    /// Division `/`.
    Div,
    /// Remainder `%`.
    Rem,
    /// Bitwise and `&`.
    BitAnd,
    /// Bitwise or `|`.
    BitOr,
    /// Bitwise xor `^`.
    BitXor,
    /// Bit clear `&^`.
    AndNot,
    /// Left shift `<<`.
    Shl,
    /// Right shift `>>`.
    Shr,
    /// Logical and `&&`.
    LogAnd,
    /// Logical or `||`.
    LogOr,
    /// Equality `==`.
    Eq,
    /// Inequality `!=`.
    NotEq,
    /// Less-than `<`.
    Less,
    /// Less-or-equal `<=`.
    LessEq,
    /// Greater-than `>`.
    Greater,
    /// Greater-or-equal `>=`.
    GreaterEq,
}

/// Assignment statement operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// Plain assignment `=`.
    Assign,
    /// Short declaration `:=`.
    Define,
    /// Compound `+=`.
    Add,
    /// Compound `-=`.
    Sub,
    /// Compound `*=`.
    Mul,
    /// Compound `/=`.
    Div,
    /// Compound `%=`.
    Rem,
    /// Compound `&=`.
    And,
    /// Compound `|=`.
    Or,
    /// Compound `^=`.
    Xor,
    /// Compound `<<=`.
    Shl,
    /// Compound `>>=`.
    Shr,
    /// Compound `&^=`.
    AndNot,
}

/// Increment/decrement statement operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDecOp {
    /// Increment `++`.
    Inc,
    /// Decrement `--`.
    Dec,
}

/// Branch statement keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    /// `break`.
    Break,
    /// `continue`.
    Continue,
    /// `goto`.
    Goto,
    /// `fallthrough`.
    Fallthrough,
}

/// Channel directionality of a channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    /// Send-only `chan<-`.
    Send,
    /// Receive-only `<-chan`.
    Recv,
    /// Bidirectional `chan`.
    Both,
}

/// Declaration group keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKeyword {
    /// `var`.
    Var,
    /// `const`.
    Const,
    /// `type`.
    Type,
    /// `import`.
    Import,
}

/// The literal sub-kind of a basic literal.
///
/// Literal sub-kinds are never interchangeable during matching, and literal
/// values compare textually so radix and formatting intent are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    /// Integer literal.
    Int,
    /// Floating-point literal.
    Float,
    /// Imaginary literal.
    Imag,
    /// Character literal.
    Char,
    /// String literal.
    Str,
}

/// One syntactic construct, tagged by kind.
///
/// The variant set is closed and the matcher dispatches over it
/// exhaustively, so an unhandled kind is a compile error rather than a
/// silent mismatch.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// A plain identifier.
    Ident {
        /// The identifier text.
        name: String,
    },
    /// A pattern wildcard occupying an identifier position.
    ///
    /// Wildcards appear only in patterns, never in candidate trees.
    Wildcard(WildcardSpec),
    /// A basic literal (integer, float, imaginary, character, string).
    BasicLit {
        /// The literal sub-kind.
        lit: LitKind,
        /// The exact source text of the literal.
        value: String,
    },
    /// A composite literal such as `T{a, b}`.
    CompositeLit {
        /// The literal's type, when written.
        ty: Option<Box<Node>>,
        /// The element expressions.
        elts: Vec<Node>,
    },
    /// A function literal.
    FuncLit {
        /// The function type.
        ty: Box<Node>,
        /// The body block.
        body: Box<Node>,
    },
    /// A parenthesised expression.
    Paren {
        /// The wrapped expression.
        expr: Box<Node>,
    },
    /// A unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        expr: Box<Node>,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// The left operand.
        lhs: Box<Node>,
        /// The right operand.
        rhs: Box<Node>,
    },
    /// A call expression.
    Call {
        /// The callee expression.
        callee: Box<Node>,
        /// The argument expressions.
        args: Vec<Node>,
        /// Whether the final argument is spread with `...`.
        spread: bool,
    },
    /// A key/value element inside a composite literal.
    KeyValue {
        /// The key expression.
        key: Box<Node>,
        /// The value expression.
        value: Box<Node>,
    },
    /// A pointer dereference or pointer type `*X`.
    Star {
        /// The pointed-to expression or type.
        expr: Box<Node>,
    },
    /// A selector expression `x.field`.
    Selector {
        /// The receiver expression.
        expr: Box<Node>,
        /// The selected identifier.
        field: Box<Node>,
    },
    /// An index expression `x[i]`.
    Index {
        /// The indexed expression.
        expr: Box<Node>,
        /// The index expression.
        index: Box<Node>,
    },
    /// A slice expression `x[low:high:max]`.
    SliceExpr {
        /// The sliced expression.
        expr: Box<Node>,
        /// The low bound, when written.
        low: Option<Box<Node>>,
        /// The high bound, when written.
        high: Option<Box<Node>>,
        /// The capacity bound, when written.
        max: Option<Box<Node>>,
    },
    /// A type assertion `x.(T)`; the type is absent in the `x.(type)` form.
    TypeAssert {
        /// The asserted expression.
        expr: Box<Node>,
        /// The asserted type, when written.
        ty: Option<Box<Node>>,
    },
    /// An ellipsis `...T` (or bare `...`).
    Ellipsis {
        /// The element type, when written.
        elt: Option<Box<Node>>,
    },
    /// An array or slice type; a missing length means a slice.
    ArrayType {
        /// The length expression, when written.
        len: Option<Box<Node>>,
        /// The element type.
        elt: Box<Node>,
    },
    /// A map type.
    MapType {
        /// The key type.
        key: Box<Node>,
        /// The value type.
        value: Box<Node>,
    },
    /// A struct type.
    StructType {
        /// The field declarations.
        fields: Vec<Node>,
    },
    /// One field in a struct, parameter list, or result list.
    Field {
        /// The declared names; empty for anonymous fields.
        names: Vec<Node>,
        /// The field type.
        ty: Box<Node>,
    },
    /// A function type (signature).
    FuncType {
        /// The parameter fields.
        params: Vec<Node>,
        /// The result fields, when a result list is written.
        results: Option<Vec<Node>>,
    },
    /// An interface type.
    InterfaceType {
        /// The method fields.
        methods: Vec<Node>,
    },
    /// A channel type.
    ChanType {
        /// The channel direction.
        dir: ChanDir,
        /// The element type.
        elem: Box<Node>,
    },
    /// An expression used in statement position.
    ExprStmt {
        /// The wrapped expression.
        expr: Box<Node>,
    },
    /// A declaration used in statement position.
    DeclStmt {
        /// The wrapped declaration group.
        decl: Box<Node>,
    },
    /// An empty statement.
    EmptyStmt,
    /// A labeled statement.
    Labeled {
        /// The label identifier.
        label: Box<Node>,
        /// The labeled statement.
        stmt: Box<Node>,
    },
    /// A channel send statement `ch <- v`.
    Send {
        /// The channel expression.
        chan: Box<Node>,
        /// The sent value.
        value: Box<Node>,
    },
    /// An increment or decrement statement.
    IncDec {
        /// The operator.
        op: IncDecOp,
        /// The operand.
        expr: Box<Node>,
    },
    /// An assignment or short declaration statement.
    Assign {
        /// The operator.
        op: AssignOp,
        /// The left-hand side expressions.
        lhs: Vec<Node>,
        /// The right-hand side expressions.
        rhs: Vec<Node>,
    },
    /// A spawned call statement.
    Spawn {
        /// The spawned call.
        call: Box<Node>,
    },
    /// A deferred call statement.
    Defer {
        /// The deferred call.
        call: Box<Node>,
    },
    /// A return statement.
    Return {
        /// The returned expressions.
        results: Vec<Node>,
    },
    /// A break/continue/goto/fallthrough statement.
    Branch {
        /// The branch keyword.
        kind: BranchKind,
        /// The target label, when written.
        label: Option<Box<Node>>,
    },
    /// A braced statement block.
    Block {
        /// The statements in order.
        stmts: Vec<Node>,
    },
    /// A conditional statement.
    If {
        /// The initialiser statement, when written.
        init: Option<Box<Node>>,
        /// The condition expression.
        cond: Box<Node>,
        /// The body block.
        body: Box<Node>,
        /// The else branch (block or chained conditional), when written.
        else_branch: Option<Box<Node>>,
    },
    /// One case clause of a switch; an empty list is the default clause.
    CaseClause {
        /// The case expressions.
        list: Vec<Node>,
        /// The clause body statements.
        body: Vec<Node>,
    },
    /// A value switch statement.
    Switch {
        /// The initialiser statement, when written.
        init: Option<Box<Node>>,
        /// The switched expression, when written.
        tag: Option<Box<Node>>,
        /// The clause block.
        body: Box<Node>,
    },
    /// A type switch statement.
    TypeSwitch {
        /// The initialiser statement, when written.
        init: Option<Box<Node>>,
        /// The assign or expression statement holding the type assertion.
        assign: Box<Node>,
        /// The clause block.
        body: Box<Node>,
    },
    /// One communication clause of a select; no comm means the default.
    CommClause {
        /// The send or receive statement, when written.
        comm: Option<Box<Node>>,
        /// The clause body statements.
        body: Vec<Node>,
    },
    /// A select statement.
    Select {
        /// The clause block.
        body: Box<Node>,
    },
    /// A counted loop.
    For {
        /// The initialiser statement, when written.
        init: Option<Box<Node>>,
        /// The loop condition, when written.
        cond: Option<Box<Node>>,
        /// The post statement, when written.
        post: Option<Box<Node>>,
        /// The body block.
        body: Box<Node>,
    },
    /// An iterator loop over a collection or channel.
    RangeLoop {
        /// The key binding, when written.
        key: Option<Box<Node>>,
        /// The value binding, when written.
        value: Option<Box<Node>>,
        /// The ranged-over expression.
        expr: Box<Node>,
        /// The body block.
        body: Box<Node>,
    },
    /// A keyword declaration group such as `var (...)`.
    DeclGroup {
        /// The declaration keyword.
        keyword: DeclKeyword,
        /// The contained specs.
        specs: Vec<Node>,
    },
    /// A function or method declaration.
    FuncDecl {
        /// The receiver field for methods, when written.
        recv: Option<Box<Node>>,
        /// The declared name.
        name: Box<Node>,
        /// The function type.
        ty: Box<Node>,
        /// The body block; absent for externally-defined functions.
        body: Option<Box<Node>>,
    },
    /// One name/type/value spec inside a declaration group.
    ValueSpec {
        /// The declared names.
        names: Vec<Node>,
        /// The declared type, when written.
        ty: Option<Box<Node>>,
        /// The initialiser expressions.
        values: Vec<Node>,
    },
    /// One import spec inside an import group.
    ImportSpec {
        /// The local alias, when written.
        alias: Option<Box<Node>>,
        /// The import path literal.
        path: Box<Node>,
    },
    /// A whole program unit.
    File {
        /// The unit name.
        name: Box<Node>,
        /// The top-level declarations.
        decls: Vec<Node>,
        /// The import specs.
        imports: Vec<Node>,
    },
    /// An embedded sibling list, either a real child slot of a parent node
    /// or a view synthesised during traversal.
    List(NodeList),
}

/// One node of a syntax tree: a kind plus the source span it came from.
#[derive(Debug, Clone)]
pub struct Node {
    /// What this node is and its kind-specific children.
    pub kind: NodeKind,
    /// Where this node came from in the source text.
    pub span: Span,
}

impl Node {
    /// Creates a node from a kind and span.
    #[must_use]
    pub const fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates a list node whose span is derived from its elements.
    #[must_use]
    pub fn list(kind: ListKind, nodes: Vec<Node>) -> Self {
        let list = NodeList::new(kind, nodes);
        let span = list.span();
        Self {
            kind: NodeKind::List(list),
            span,
        }
    }

    /// Returns the node's source span.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the wildcard spec when this node is a wildcard, looking
    /// through an expression-statement wrapper.
    #[must_use]
    pub fn as_wildcard(&self) -> Option<&WildcardSpec> {
        match &self.kind {
            NodeKind::Wildcard(spec) => Some(spec),
            NodeKind::ExprStmt { expr } => expr.as_wildcard(),
            _ => None,
        }
    }

    /// Returns whether this node is an identifier with the given name.
    #[must_use]
    pub fn is_ident_named(&self, expected: &str) -> bool {
        matches!(&self.kind, NodeKind::Ident { name } if name == expected)
    }

    /// Returns whether this node can appear in expression position.
    ///
    /// Type expressions count: they are valid operands of composite
    /// literals, conversions, and assertions.
    #[must_use]
    pub const fn is_expr(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Ident { .. }
                | NodeKind::Wildcard(_)
                | NodeKind::BasicLit { .. }
                | NodeKind::CompositeLit { .. }
                | NodeKind::FuncLit { .. }
                | NodeKind::Paren { .. }
                | NodeKind::Unary { .. }
                | NodeKind::Binary { .. }
                | NodeKind::Call { .. }
                | NodeKind::KeyValue { .. }
                | NodeKind::Star { .. }
                | NodeKind::Selector { .. }
                | NodeKind::Index { .. }
                | NodeKind::SliceExpr { .. }
                | NodeKind::TypeAssert { .. }
                | NodeKind::Ellipsis { .. }
                | NodeKind::ArrayType { .. }
                | NodeKind::MapType { .. }
                | NodeKind::StructType { .. }
                | NodeKind::FuncType { .. }
                | NodeKind::InterfaceType { .. }
                | NodeKind::ChanType { .. }
        )
    }

    /// Returns whether this node introduces a lexical scope.
    ///
    /// Traversal re-seats the ambient scope on entry to these kinds so type
    /// constraints lower in the same subtree resolve against the innermost
    /// enclosing scope.
    #[must_use]
    pub const fn introduces_scope(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::File { .. }
                | NodeKind::FuncType { .. }
                | NodeKind::Block { .. }
                | NodeKind::If { .. }
                | NodeKind::Switch { .. }
                | NodeKind::TypeSwitch { .. }
                | NodeKind::CaseClause { .. }
                | NodeKind::CommClause { .. }
                | NodeKind::For { .. }
                | NodeKind::RangeLoop { .. }
        )
    }

    /// Returns the node's direct children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        self.push_children(&mut out);
        out
    }

    fn push_children<'a>(&'a self, out: &mut Vec<&'a Self>) {
        fn opt<'a>(out: &mut Vec<&'a Node>, child: Option<&'a Node>) {
            if let Some(node) = child {
                out.push(node);
            }
        }
        match &self.kind {
            NodeKind::Ident { .. }
            | NodeKind::Wildcard(_)
            | NodeKind::BasicLit { .. }
            | NodeKind::EmptyStmt => {}
            NodeKind::CompositeLit { ty, elts } => {
                opt(out, ty.as_deref());
                out.extend(elts.iter());
            }
            NodeKind::FuncLit { ty, body } => {
                out.push(ty);
                out.push(body);
            }
            NodeKind::Paren { expr }
            | NodeKind::Star { expr }
            | NodeKind::Unary { expr, .. }
            | NodeKind::IncDec { expr, .. }
            | NodeKind::ExprStmt { expr } => out.push(expr),
            NodeKind::Binary { lhs, rhs, .. } => {
                out.push(lhs);
                out.push(rhs);
            }
            NodeKind::Call { callee, args, .. } => {
                out.push(callee);
                out.extend(args.iter());
            }
            NodeKind::KeyValue { key, value } | NodeKind::MapType { key, value } => {
                out.push(key);
                out.push(value);
            }
            NodeKind::Selector { expr, field } => {
                out.push(expr);
                out.push(field);
            }
            NodeKind::Index { expr, index } => {
                out.push(expr);
                out.push(index);
            }
            NodeKind::SliceExpr {
                expr,
                low,
                high,
                max,
            } => {
                out.push(expr);
                opt(out, low.as_deref());
                opt(out, high.as_deref());
                opt(out, max.as_deref());
            }
            NodeKind::TypeAssert { expr, ty } => {
                out.push(expr);
                opt(out, ty.as_deref());
            }
            NodeKind::Ellipsis { elt } => opt(out, elt.as_deref()),
            NodeKind::ArrayType { len, elt } => {
                opt(out, len.as_deref());
                out.push(elt);
            }
            NodeKind::StructType { fields } => out.extend(fields.iter()),
            NodeKind::Field { names, ty } => {
                out.extend(names.iter());
                out.push(ty);
            }
            NodeKind::FuncType { params, results } => {
                out.extend(params.iter());
                if let Some(results) = results {
                    out.extend(results.iter());
                }
            }
            NodeKind::InterfaceType { methods } => out.extend(methods.iter()),
            NodeKind::ChanType { elem, .. } => out.push(elem),
            NodeKind::DeclStmt { decl } => out.push(decl),
            NodeKind::Labeled { label, stmt } => {
                out.push(label);
                out.push(stmt);
            }
            NodeKind::Send { chan, value } => {
                out.push(chan);
                out.push(value);
            }
            NodeKind::Assign { lhs, rhs, .. } => {
                out.extend(lhs.iter());
                out.extend(rhs.iter());
            }
            NodeKind::Spawn { call } | NodeKind::Defer { call } => out.push(call),
            NodeKind::Return { results } => out.extend(results.iter()),
            NodeKind::Branch { label, .. } => opt(out, label.as_deref()),
            NodeKind::Block { stmts } => out.extend(stmts.iter()),
            NodeKind::If {
                init,
                cond,
                body,
                else_branch,
            } => {
                opt(out, init.as_deref());
                out.push(cond);
                out.push(body);
                opt(out, else_branch.as_deref());
            }
            NodeKind::CaseClause { list, body } => {
                out.extend(list.iter());
                out.extend(body.iter());
            }
            NodeKind::Switch { init, tag, body } => {
                opt(out, init.as_deref());
                opt(out, tag.as_deref());
                out.push(body);
            }
            NodeKind::TypeSwitch { init, assign, body } => {
                opt(out, init.as_deref());
                out.push(assign);
                out.push(body);
            }
            NodeKind::CommClause { comm, body } => {
                opt(out, comm.as_deref());
                out.extend(body.iter());
            }
            NodeKind::Select { body } => out.push(body),
            NodeKind::For {
                init,
                cond,
                post,
                body,
            } => {
                opt(out, init.as_deref());
                opt(out, cond.as_deref());
                opt(out, post.as_deref());
                out.push(body);
            }
            NodeKind::RangeLoop {
                key,
                value,
                expr,
                body,
            } => {
                opt(out, key.as_deref());
                opt(out, value.as_deref());
                out.push(expr);
                out.push(body);
            }
            NodeKind::DeclGroup { specs, .. } => out.extend(specs.iter()),
            NodeKind::FuncDecl {
                recv,
                name,
                ty,
                body,
            } => {
                opt(out, recv.as_deref());
                out.push(name);
                out.push(ty);
                opt(out, body.as_deref());
            }
            NodeKind::ValueSpec { names, ty, values } => {
                out.extend(names.iter());
                opt(out, ty.as_deref());
                out.extend(values.iter());
            }
            NodeKind::ImportSpec { alias, path } => {
                opt(out, alias.as_deref());
                out.push(path);
            }
            NodeKind::File {
                name,
                decls,
                imports,
            } => {
                out.push(name);
                out.extend(decls.iter());
                out.extend(imports.iter());
            }
            NodeKind::List(list) => out.extend(list.nodes.iter()),
        }
    }
}
