use std::collections::{HashMap, HashSet};

use regex::Regex;
use rstest::rstest;

use trawl_core::fixtures::TreeBuilder;
use trawl_core::{
    AssignOp, BinaryOp, BranchKind, DeclKeyword, EngineConfig, EngineError, ListKind, MatchMode,
    Node, NodeKind, NullTypeInfo, Pattern, ScopeId, Span, Type, TypeInfo, TypeRelation, TypeRule,
    WildcardSpec,
};

use super::Matcher;
use super::context::MatchCtx;

/// A canned provider: expression types keyed by span, scopes keyed by the
/// introducing node's span, and explicit relation tables.
#[derive(Default)]
struct TestTypes {
    types: HashMap<Span, Type>,
    scopes: HashMap<Span, ScopeId>,
    names: HashMap<(ScopeId, String), Type>,
    packages: HashMap<(ScopeId, String), ScopeId>,
    assignable: HashSet<(Type, Type)>,
    convertible: HashSet<(Type, Type)>,
    comparable: HashSet<Type>,
}

impl TypeInfo for TestTypes {
    fn type_of(&self, expr: &Node) -> Option<Type> {
        self.types.get(&expr.span).cloned()
    }

    fn is_comparable(&self, ty: &Type) -> bool {
        self.comparable.contains(ty)
    }

    fn identical(&self, a: &Type, b: &Type) -> bool {
        a == b
    }

    fn assignable_to(&self, from: &Type, to: &Type) -> bool {
        from == to || self.assignable.contains(&(from.clone(), to.clone()))
    }

    fn convertible_to(&self, from: &Type, to: &Type) -> bool {
        self.assignable_to(from, to) || self.convertible.contains(&(from.clone(), to.clone()))
    }

    fn scope_of(&self, node: &Node) -> Option<ScopeId> {
        self.scopes.get(&node.span).copied()
    }

    fn lookup(&self, scope: ScopeId, name: &str) -> Option<Type> {
        self.names.get(&(scope, name.to_owned())).cloned()
    }

    fn package_scope(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        self.packages.get(&(scope, name.to_owned())).copied()
    }
}

fn strict_ctx(info: &dyn TypeInfo) -> MatchCtx<'_> {
    MatchCtx::new(MatchMode::Strict, info, None)
}

fn relaxed_ctx(info: &dyn TypeInfo) -> MatchCtx<'_> {
    MatchCtx::new(MatchMode::Relaxed, info, None)
}

fn matcher(info: &dyn TypeInfo) -> Matcher<'_> {
    Matcher::new(EngineConfig::default(), info)
}

fn relaxed_matcher(info: &dyn TypeInfo) -> Matcher<'_> {
    Matcher::new(EngineConfig::with_mode(MatchMode::Relaxed), info)
}

#[test]
fn repeated_capture_must_bind_identically() {
    let mut b = TreeBuilder::new();
    let pat = {
        let lhs = b.wild("x");
        let rhs = b.wild("x");
        b.binary(BinaryOp::Add, lhs, rhs)
    };
    let same = {
        let lhs = b.ident("a");
        let rhs = b.ident("a");
        b.binary(BinaryOp::Add, lhs, rhs)
    };
    let different = {
        let lhs = b.ident("a");
        let rhs = b.ident("b");
        b.binary(BinaryOp::Add, lhs, rhs)
    };

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(ctx.match_node(&pat, &same).expect("no fault"));

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(!ctx.match_node(&pat, &different).expect("no fault"));
}

#[test]
fn discard_wildcards_never_constrain() {
    let mut b = TreeBuilder::new();
    let pat = {
        let lhs = b.wild("_");
        let rhs = b.wild("_");
        b.binary(BinaryOp::Add, lhs, rhs)
    };
    let candidate = {
        let lhs = b.ident("a");
        let rhs = b.ident("b");
        b.binary(BinaryOp::Add, lhs, rhs)
    };

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(ctx.match_node(&pat, &candidate).expect("no fault"));
    assert!(ctx.bindings.get("_").is_none());
}

#[test]
fn multi_wildcard_fails_in_single_node_position() {
    let mut b = TreeBuilder::new();
    let pat = b.wild_multi("a");
    let candidate = b.ident("x");

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(!ctx.match_node(&pat, &candidate).expect("no fault"));
}

#[rstest]
#[case("1", "1", true)]
#[case("1", "2", false)]
#[case("0x10", "16", false)] // textual comparison preserves radix intent
fn literal_values_compare_textually(#[case] left: &str, #[case] right: &str, #[case] expect: bool) {
    let mut b = TreeBuilder::new();
    let pat = b.int(left);
    let candidate = b.int(right);

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert_eq!(ctx.match_node(&pat, &candidate).expect("no fault"), expect);
}

#[test]
fn literal_sub_kinds_are_never_interchangeable() {
    let mut b = TreeBuilder::new();
    let pat = b.int("1");
    let candidate = b.str_lit("1");

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(!ctx.match_node(&pat, &candidate).expect("no fault"));
}

#[test]
fn multi_wildcard_absorbs_run_before_anchor() {
    let mut b = TreeBuilder::new();
    let pats = vec![b.wild_multi("a"), b.ident("last")];
    let cands = vec![b.int("1"), b.int("2"), b.ident("last")];

    let mut ctx = strict_ctx(&NullTypeInfo);
    let range = ctx
        .match_list(&pats, &cands, ListKind::Expr, false)
        .expect("no fault")
        .expect("must match");
    assert_eq!(range, 0..3);

    let bound = ctx.bindings.get("a").expect("a is bound");
    let NodeKind::List(list) = &bound.kind else {
        panic!("multi-wildcard binds a list");
    };
    assert_eq!(list.len(), 2);
}

#[test]
fn multi_wildcard_can_absorb_nothing() {
    let mut b = TreeBuilder::new();
    let pats = vec![b.wild_multi("a"), b.ident("last")];
    let cands = vec![b.ident("last")];

    let mut ctx = strict_ctx(&NullTypeInfo);
    let range = ctx
        .match_list(&pats, &cands, ListKind::Expr, false)
        .expect("no fault")
        .expect("must match");
    assert_eq!(range, 0..1);

    let bound = ctx.bindings.get("a").expect("a is bound");
    let NodeKind::List(list) = &bound.kind else {
        panic!("multi-wildcard binds a list");
    };
    assert!(list.is_empty());
}

#[test]
fn backtracking_retries_anchor_found_later() {
    let mut b = TreeBuilder::new();
    let pats = vec![b.wild_multi("a"), b.ident("x"), b.ident("z")];
    let cands = vec![b.ident("y"), b.ident("x"), b.ident("x"), b.ident("z")];

    let mut ctx = strict_ctx(&NullTypeInfo);
    let range = ctx
        .match_list(&pats, &cands, ListKind::Expr, false)
        .expect("no fault")
        .expect("must match");
    assert_eq!(range, 0..4);

    let bound = ctx.bindings.get("a").expect("a is bound");
    let NodeKind::List(list) = &bound.kind else {
        panic!("multi-wildcard binds a list");
    };
    assert_eq!(list.len(), 2, "window must grow past the first anchor");
}

#[test]
fn two_multi_wildcards_backtrack_independently() {
    let mut b = TreeBuilder::new();
    let pats = vec![
        b.wild_multi("a"),
        b.ident("x"),
        b.wild_multi("c"),
        b.ident("z"),
    ];
    let cands = vec![
        b.ident("x"),
        b.ident("y"),
        b.ident("x"),
        b.ident("z"),
    ];

    let mut ctx = strict_ctx(&NullTypeInfo);
    let range = ctx
        .match_list(&pats, &cands, ListKind::Expr, false)
        .expect("no fault")
        .expect("must match");
    assert_eq!(range, 0..4);
}

#[test]
fn reused_multi_wildcard_windows_must_agree() {
    let mut b = TreeBuilder::new();
    let pats = vec![b.wild_multi("a"), b.ident("x"), b.wild_multi("a")];

    let agreeing = vec![b.int("1"), b.ident("x"), b.int("1")];
    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(
        ctx.match_list(&pats, &agreeing, ListKind::Expr, false)
            .expect("no fault")
            .is_some()
    );

    let disagreeing = vec![b.int("1"), b.ident("x"), b.int("2")];
    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(
        ctx.match_list(&pats, &disagreeing, ListKind::Expr, false)
            .expect("no fault")
            .is_none()
    );
}

#[test]
fn empty_lists_match_trivially() {
    let mut ctx = strict_ctx(&NullTypeInfo);
    let range = ctx
        .match_list(&[], &[], ListKind::Expr, false)
        .expect("no fault")
        .expect("empty matches empty");
    assert_eq!(range, 0..0);
}

#[test]
fn empty_pattern_never_matches_nonempty_list() {
    let mut b = TreeBuilder::new();
    let cands = vec![b.ident("a")];

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(
        ctx.match_list(&[], &cands, ListKind::Expr, false)
            .expect("no fault")
            .is_none()
    );
    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(
        ctx.match_list(&[], &cands, ListKind::Expr, true)
            .expect("no fault")
            .is_none()
    );
}

#[test]
fn partial_match_yields_inner_subrange() {
    let mut b = TreeBuilder::new();
    let stmt = |b: &mut TreeBuilder, name: &str| {
        let id = b.ident(name);
        b.expr_stmt(id)
    };
    let pats = vec![stmt(&mut b, "b"), stmt(&mut b, "c")];
    let cands = vec![
        stmt(&mut b, "a"),
        stmt(&mut b, "b"),
        stmt(&mut b, "c"),
        stmt(&mut b, "d"),
    ];
    let expected = Span::new(
        cands.get(1).expect("stmt b").span.start_byte,
        cands.get(2).expect("stmt c").span.end_byte,
    );

    let pattern = Node::list(ListKind::Stmt, pats);
    let candidate = Node::list(ListKind::Stmt, cands);

    let mut ctx = strict_ctx(&NullTypeInfo);
    let found = ctx
        .top_match(&pattern, &candidate)
        .expect("no fault")
        .expect("partial match");
    assert_eq!(found.span, expected);
}

#[test]
fn partial_match_requires_statement_lists() {
    let mut b = TreeBuilder::new();
    let pats = vec![b.ident("b")];
    let cands = vec![b.ident("a"), b.ident("b")];

    let pattern = Node::list(ListKind::Expr, pats);
    let candidate = Node::list(ListKind::Expr, cands);

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(
        ctx.top_match(&pattern, &candidate)
            .expect("no fault")
            .is_none(),
        "expression lists never align partially"
    );
}

#[test]
fn statement_wildcard_prefers_whole_statement() {
    let mut b = TreeBuilder::new();
    let pat = {
        let wild = b.wild("x");
        b.expr_stmt(wild)
    };
    let ret = {
        let result = b.ident("err");
        b.ret(vec![result])
    };

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(ctx.match_node(&pat, &ret).expect("no fault"));
    let bound = ctx.bindings.get("x").expect("x is bound");
    assert!(matches!(bound.kind, NodeKind::Return { .. }));
}

#[test]
fn name_rules_restrict_identifier_text() {
    let mut b = TreeBuilder::new();
    let rule = Regex::new("^err").expect("regex");
    let pat = b.wild_spec(WildcardSpec::named("e").with_name_rule(rule));
    let matching = b.ident("errCount");
    let not_ident = b.int("3");
    let wrong_text = b.ident("count");

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(ctx.match_node(&pat, &matching).expect("no fault"));

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(!ctx.match_node(&pat, &not_ident).expect("no fault"));

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(!ctx.match_node(&pat, &wrong_text).expect("no fault"));
}

#[test]
fn strict_mode_rejects_presence_mismatch() {
    let mut b = TreeBuilder::new();
    let pat = b.node(NodeKind::Branch {
        kind: BranchKind::Break,
        label: None,
    });
    let candidate = {
        let label = b.ident("_");
        b.node(NodeKind::Branch {
            kind: BranchKind::Break,
            label: Some(Box::new(label)),
        })
    };

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(!ctx.match_node(&pat, &candidate).expect("no fault"));

    let mut ctx = relaxed_ctx(&NullTypeInfo);
    assert!(
        ctx.match_node(&pat, &candidate).expect("no fault"),
        "relaxed mode lets an absent side match a literal underscore"
    );
}

#[test]
fn relaxed_one_spec_group_matches_lone_spec() {
    let mut b = TreeBuilder::new();
    let pat = {
        let name = b.ident("x");
        let value = b.int("1");
        let spec = b.value_spec(vec![name], None, vec![value]);
        b.decl_group(DeclKeyword::Var, vec![spec])
    };
    let lone_spec = {
        let name = b.ident("x");
        let value = b.int("1");
        b.value_spec(vec![name], None, vec![value])
    };

    let mut ctx = relaxed_ctx(&NullTypeInfo);
    assert!(ctx.match_node(&pat, &lone_spec).expect("no fault"));

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(!ctx.match_node(&pat, &lone_spec).expect("no fault"));
}

#[test]
fn relaxed_one_name_spec_matches_at_any_position() {
    let mut b = TreeBuilder::new();
    let pat = {
        let name = b.ident("y");
        let value = b.int("2");
        b.value_spec(vec![name], None, vec![value])
    };
    let wide = {
        let x = b.ident("x");
        let y = b.ident("y");
        let one = b.int("1");
        let two = b.int("2");
        b.value_spec(vec![x, y], None, vec![one, two])
    };

    let mut ctx = relaxed_ctx(&NullTypeInfo);
    assert!(ctx.match_node(&pat, &wide).expect("no fault"));

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(!ctx.match_node(&pat, &wide).expect("no fault"));
}

#[test]
fn relaxed_block_pattern_matches_bare_statement_list() {
    let mut b = TreeBuilder::new();
    let pat = {
        let id = b.ident("a");
        let stmt = b.expr_stmt(id);
        b.block(vec![stmt])
    };
    let bare = {
        let id = b.ident("a");
        let stmt = b.expr_stmt(id);
        Node::list(ListKind::Stmt, vec![stmt])
    };

    let mut ctx = relaxed_ctx(&NullTypeInfo);
    assert!(ctx.match_node(&pat, &bare).expect("no fault"));

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(!ctx.match_node(&pat, &bare).expect("no fault"));
}

#[test]
fn relaxed_header_wildcard_matches_any_loop_shape() {
    let mut b = TreeBuilder::new();
    let pat = {
        let cond = b.wild_multi("header");
        let body_stmt = b.wild_multi("_");
        let body_wrapped = b.expr_stmt(body_stmt);
        let body = b.block(vec![body_wrapped]);
        b.for_stmt(None, Some(cond), None, body)
    };
    let full_loop = {
        let i1 = b.ident("i");
        let zero = b.int("0");
        let init = b.assign(AssignOp::Define, vec![i1], vec![zero]);
        let i2 = b.ident("i");
        let ten = b.int("10");
        let cond = b.binary(BinaryOp::Less, i2, ten);
        let i3 = b.ident("i");
        let post = b.inc(i3);
        let call_target = b.ident("work");
        let call = b.call(call_target, Vec::new());
        let body_stmt = b.expr_stmt(call);
        let body = b.block(vec![body_stmt]);
        b.for_stmt(Some(init), Some(cond), Some(post), body)
    };

    let mut ctx = relaxed_ctx(&NullTypeInfo);
    assert!(ctx.match_node(&pat, &full_loop).expect("no fault"));

    let mut ctx = strict_ctx(&NullTypeInfo);
    assert!(!ctx.match_node(&pat, &full_loop).expect("no fault"));
}

#[test]
fn type_rule_checks_assignability_in_scope() {
    let mut b = TreeBuilder::new();
    let constraint_ty = b.ident("Writer");
    let pat = b.wild_spec(
        WildcardSpec::named("w")
            .with_type_rule(TypeRule::new(TypeRelation::AssignableTo, constraint_ty)),
    );

    let file_expr = b.ident("f");
    let buf_expr = b.ident("buf");
    let file_span = file_expr.span;
    let buf_span = buf_expr.span;
    let file_stmt = b.expr_stmt(file_expr);
    let buf_stmt = b.expr_stmt(buf_expr);
    let block = b.block(vec![file_stmt, buf_stmt]);
    let block_span = block.span;

    let scope = ScopeId(1);
    let mut info = TestTypes::default();
    info.scopes.insert(block_span, scope);
    info.names
        .insert((scope, String::from("Writer")), Type::named("Writer"));
    info.types.insert(file_span, Type::named("File"));
    info.types.insert(buf_span, Type::named("Buffer"));
    info.assignable
        .insert((Type::named("File"), Type::named("Writer")));

    let pattern = Pattern::new(pat).expect("pattern");
    let matches = matcher(&info)
        .find_all(&pattern, std::slice::from_ref(&block))
        .expect("no fault");

    assert_eq!(matches.len(), 1, "only the assignable candidate matches");
    assert_eq!(
        matches.first().map(Node::span),
        Some(Span::new(file_span.start_byte, file_span.end_byte))
    );
}

#[test]
fn qualified_type_rule_resolves_through_package_scope() {
    let mut b = TreeBuilder::new();
    let qualifier = b.ident("io");
    let member = b.ident("Writer");
    let constraint_ty = b.selector(qualifier, member);
    let pat = b.wild_spec(
        WildcardSpec::named("w")
            .with_type_rule(TypeRule::new(TypeRelation::Identical, constraint_ty)),
    );

    let expr = b.ident("w");
    let expr_span = expr.span;
    let stmt = b.expr_stmt(expr);
    let block = b.block(vec![stmt]);
    let block_span = block.span;

    let scope = ScopeId(1);
    let io_scope = ScopeId(2);
    let mut info = TestTypes::default();
    info.scopes.insert(block_span, scope);
    info.packages.insert((scope, String::from("io")), io_scope);
    info.names
        .insert((io_scope, String::from("Writer")), Type::named("io.Writer"));
    info.types.insert(expr_span, Type::named("io.Writer"));

    let pattern = Pattern::new(pat).expect("pattern");
    let matches = matcher(&info)
        .find_all(&pattern, std::slice::from_ref(&block))
        .expect("no fault");
    assert_eq!(matches.len(), 1);
}

#[test]
fn comparable_requirement_filters_by_type() {
    let mut b = TreeBuilder::new();
    let pat = b.wild_spec(WildcardSpec::named("v").require_comparable());

    let ok_expr = b.ident("n");
    let bad_expr = b.ident("fns");
    let ok_span = ok_expr.span;
    let bad_span = bad_expr.span;
    let ok_stmt = b.expr_stmt(ok_expr);
    let bad_stmt = b.expr_stmt(bad_expr);
    let block = b.block(vec![ok_stmt, bad_stmt]);

    let mut info = TestTypes::default();
    info.types.insert(ok_span, Type::named("int"));
    info.types
        .insert(bad_span, Type::slice(Type::named("func()")));
    info.comparable.insert(Type::named("int"));

    let pattern = Pattern::new(pat).expect("pattern");
    let matches = matcher(&info)
        .find_all(&pattern, std::slice::from_ref(&block))
        .expect("no fault");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches.first().map(Node::span), Some(ok_span));
}

#[test]
fn unresolved_constraint_name_is_a_fault() {
    let mut b = TreeBuilder::new();
    let constraint_ty = b.ident("NoSuchType");
    let pat = b.wild_spec(
        WildcardSpec::named("w")
            .with_type_rule(TypeRule::new(TypeRelation::Identical, constraint_ty)),
    );

    let expr = b.ident("x");
    let expr_span = expr.span;
    let stmt = b.expr_stmt(expr);
    let block = b.block(vec![stmt]);
    let block_span = block.span;

    let mut info = TestTypes::default();
    info.scopes.insert(block_span, ScopeId(1));
    info.types.insert(expr_span, Type::named("int"));

    let pattern = Pattern::new(pat).expect("pattern");
    let err = matcher(&info)
        .find_all(&pattern, std::slice::from_ref(&block))
        .expect_err("missing name must abort the stage");
    assert!(matches!(err, EngineError::UnresolvedName { .. }));
}

#[test]
fn non_literal_array_length_is_a_fault() {
    let mut b = TreeBuilder::new();
    let len = b.ident("n");
    let elem = b.ident("byte");
    let constraint_ty = b.array_type(Some(len), elem);
    let pat = b.wild_spec(
        WildcardSpec::named("w")
            .with_type_rule(TypeRule::new(TypeRelation::Identical, constraint_ty)),
    );

    let expr = b.ident("x");
    let expr_span = expr.span;
    let stmt = b.expr_stmt(expr);
    let block = b.block(vec![stmt]);
    let block_span = block.span;

    let scope = ScopeId(1);
    let mut info = TestTypes::default();
    info.scopes.insert(block_span, scope);
    info.names
        .insert((scope, String::from("byte")), Type::named("byte"));
    info.types.insert(expr_span, Type::named("int"));

    let pattern = Pattern::new(pat).expect("pattern");
    let err = matcher(&info)
        .find_all(&pattern, std::slice::from_ref(&block))
        .expect_err("non-literal length must abort the stage");
    assert!(matches!(err, EngineError::UnsupportedTypeExpr { .. }));
}

#[test]
fn untyped_candidate_fails_type_rules_without_fault() {
    let mut b = TreeBuilder::new();
    let constraint_ty = b.ident("Writer");
    let pat = b.wild_spec(
        WildcardSpec::named("w")
            .with_type_rule(TypeRule::new(TypeRelation::Identical, constraint_ty)),
    );
    let candidate = b.ident("x");

    let matches = matcher(&NullTypeInfo)
        .find_all(&Pattern::new(pat).expect("pattern"), &[candidate])
        .expect("no type knowledge is a non-match, not a fault");
    assert!(matches.is_empty());
}

#[test]
fn single_wildcard_matches_in_expression_list_via_adapter() {
    let mut b = TreeBuilder::new();
    let pat = b.wild("x");
    let first = b.ident("a");
    let second = b.ident("bb");
    let first_span = first.span;
    let list = Node::list(ListKind::Expr, vec![first, second]);
    let list_span = list.span;

    let matches = matcher(&NullTypeInfo)
        .find_all(&Pattern::new(pat).expect("pattern"), &[list])
        .expect("no fault");

    let spans: Vec<Span> = matches.iter().map(Node::span).collect();
    assert!(spans.contains(&list_span), "the whole list is one match");
    assert!(spans.contains(&first_span), "each element matches too");
}

#[test]
fn overlapping_attempts_record_one_span_once() {
    let mut b = TreeBuilder::new();
    let pat = b.wild("x");
    let only = b.ident("a");
    let only_span = only.span;
    let list = Node::list(ListKind::Expr, vec![only]);

    let matches = matcher(&NullTypeInfo)
        .find_all(&Pattern::new(pat).expect("pattern"), &[list])
        .expect("no fault");

    let hits = matches.iter().filter(|m| m.span == only_span).count();
    assert_eq!(hits, 1, "list view and element view share one span");
}

#[test]
fn relaxed_matcher_is_exposed_through_config() {
    let mut b = TreeBuilder::new();
    let pat = {
        let name = b.ident("x");
        let value = b.int("1");
        let spec = b.value_spec(vec![name], None, vec![value]);
        b.decl_group(DeclKeyword::Var, vec![spec])
    };
    let lone_spec = {
        let name = b.ident("x");
        let value = b.int("1");
        b.value_spec(vec![name], None, vec![value])
    };

    let pattern = Pattern::new(pat).expect("pattern");
    let relaxed = relaxed_matcher(&NullTypeInfo)
        .matches_within(&pattern, &lone_spec)
        .expect("no fault");
    assert!(relaxed);

    let strict = matcher(&NullTypeInfo)
        .matches_within(&pattern, &lone_spec)
        .expect("no fault");
    assert!(!strict);
}
