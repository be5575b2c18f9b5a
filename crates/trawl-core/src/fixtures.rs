//! Tree-building helpers for tests.
//!
//! Matching treats spans purely as identities, so the builder hands every
//! node a fresh, distinct span from a monotonically increasing cursor.
//! List nodes derive their span from their elements, which keeps the
//! span-deduplication behaviour observable from fixtures.

use crate::pattern::WildcardSpec;
use crate::span::Span;
use crate::syntax::{
    AssignOp, BinaryOp, DeclKeyword, IncDecOp, ListKind, LitKind, Node, NodeKind, UnaryOp,
};

/// Builds syntax trees with automatically allocated spans.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    next: u32,
}

impl TreeBuilder {
    /// Creates a builder starting at byte offset zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    fn alloc(&mut self) -> Span {
        let start = self.next;
        self.next += 2;
        Span::new(start, start + 1)
    }

    /// Wraps a kind in a node with a fresh span.
    pub fn node(&mut self, kind: NodeKind) -> Node {
        let span = self.alloc();
        Node::new(kind, span)
    }

    /// Builds an identifier.
    pub fn ident(&mut self, name: &str) -> Node {
        self.node(NodeKind::Ident {
            name: name.to_owned(),
        })
    }

    /// Builds a single-node capturing wildcard.
    pub fn wild(&mut self, name: &str) -> Node {
        self.node(NodeKind::Wildcard(WildcardSpec::named(name)))
    }

    /// Builds a multi-node capturing wildcard.
    pub fn wild_multi(&mut self, name: &str) -> Node {
        self.node(NodeKind::Wildcard(WildcardSpec::named(name).multi()))
    }

    /// Builds a wildcard from an explicit spec.
    pub fn wild_spec(&mut self, spec: WildcardSpec) -> Node {
        self.node(NodeKind::Wildcard(spec))
    }

    /// Builds an integer literal.
    pub fn int(&mut self, value: &str) -> Node {
        self.node(NodeKind::BasicLit {
            lit: LitKind::Int,
            value: value.to_owned(),
        })
    }

    /// Builds a string literal.
    pub fn str_lit(&mut self, value: &str) -> Node {
        self.node(NodeKind::BasicLit {
            lit: LitKind::Str,
            value: value.to_owned(),
        })
    }

    /// Builds a unary operation.
    pub fn unary(&mut self, op: UnaryOp, expr: Node) -> Node {
        self.node(NodeKind::Unary {
            op,
            expr: Box::new(expr),
        })
    }

    /// Builds a binary operation.
    pub fn binary(&mut self, op: BinaryOp, lhs: Node, rhs: Node) -> Node {
        self.node(NodeKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    /// Builds a call expression.
    pub fn call(&mut self, callee: Node, args: Vec<Node>) -> Node {
        self.node(NodeKind::Call {
            callee: Box::new(callee),
            args,
            spread: false,
        })
    }

    /// Builds a parenthesised expression.
    pub fn paren(&mut self, expr: Node) -> Node {
        self.node(NodeKind::Paren {
            expr: Box::new(expr),
        })
    }

    /// Builds a selector expression.
    pub fn selector(&mut self, expr: Node, field: Node) -> Node {
        self.node(NodeKind::Selector {
            expr: Box::new(expr),
            field: Box::new(field),
        })
    }

    /// Builds a pointer dereference or pointer type.
    pub fn star(&mut self, expr: Node) -> Node {
        self.node(NodeKind::Star {
            expr: Box::new(expr),
        })
    }

    /// Builds an array or slice type.
    pub fn array_type(&mut self, len: Option<Node>, elt: Node) -> Node {
        self.node(NodeKind::ArrayType {
            len: len.map(Box::new),
            elt: Box::new(elt),
        })
    }

    /// Builds an expression statement.
    pub fn expr_stmt(&mut self, expr: Node) -> Node {
        self.node(NodeKind::ExprStmt {
            expr: Box::new(expr),
        })
    }

    /// Builds an assignment statement.
    pub fn assign(&mut self, op: AssignOp, lhs: Vec<Node>, rhs: Vec<Node>) -> Node {
        self.node(NodeKind::Assign { op, lhs, rhs })
    }

    /// Builds an increment statement.
    pub fn inc(&mut self, expr: Node) -> Node {
        self.node(NodeKind::IncDec {
            op: IncDecOp::Inc,
            expr: Box::new(expr),
        })
    }

    /// Builds a return statement.
    pub fn ret(&mut self, results: Vec<Node>) -> Node {
        self.node(NodeKind::Return { results })
    }

    /// Builds a statement block.
    pub fn block(&mut self, stmts: Vec<Node>) -> Node {
        self.node(NodeKind::Block { stmts })
    }

    /// Builds a conditional statement.
    pub fn if_stmt(
        &mut self,
        init: Option<Node>,
        cond: Node,
        body: Node,
        else_branch: Option<Node>,
    ) -> Node {
        self.node(NodeKind::If {
            init: init.map(Box::new),
            cond: Box::new(cond),
            body: Box::new(body),
            else_branch: else_branch.map(Box::new),
        })
    }

    /// Builds a counted loop.
    pub fn for_stmt(
        &mut self,
        init: Option<Node>,
        cond: Option<Node>,
        post: Option<Node>,
        body: Node,
    ) -> Node {
        self.node(NodeKind::For {
            init: init.map(Box::new),
            cond: cond.map(Box::new),
            post: post.map(Box::new),
            body: Box::new(body),
        })
    }

    /// Builds a value switch statement.
    pub fn switch_stmt(&mut self, init: Option<Node>, tag: Option<Node>, body: Node) -> Node {
        self.node(NodeKind::Switch {
            init: init.map(Box::new),
            tag: tag.map(Box::new),
            body: Box::new(body),
        })
    }

    /// Builds a value spec.
    pub fn value_spec(&mut self, names: Vec<Node>, ty: Option<Node>, values: Vec<Node>) -> Node {
        self.node(NodeKind::ValueSpec {
            names,
            ty: ty.map(Box::new),
            values,
        })
    }

    /// Builds a declaration group.
    pub fn decl_group(&mut self, keyword: DeclKeyword, specs: Vec<Node>) -> Node {
        self.node(NodeKind::DeclGroup { keyword, specs })
    }

    /// Builds a declaration statement.
    pub fn decl_stmt(&mut self, decl: Node) -> Node {
        self.node(NodeKind::DeclStmt {
            decl: Box::new(decl),
        })
    }

    /// Builds an expression list view.
    #[must_use]
    pub fn expr_list(nodes: Vec<Node>) -> Node {
        Node::list(ListKind::Expr, nodes)
    }

    /// Builds a statement list view.
    #[must_use]
    pub fn stmt_list(nodes: Vec<Node>) -> Node {
        Node::list(ListKind::Stmt, nodes)
    }
}
