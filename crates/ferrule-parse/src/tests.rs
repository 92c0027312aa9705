use expect_test::expect;
use ferrule_syntax::ast::{self, HasName as _, Node as _};
use ferrule_syntax::SyntaxKind;

use crate::parse;

fn messages(text: &str) -> Vec<String> {
    parse(text).diagnostics().iter().map(|d| d.message().to_owned()).collect()
}

fn first_fn_body(parse: &crate::Parse) -> ast::Block<'_> {
    let Some(ast::Item::Fn(func)) = parse.module().items().next() else {
        panic!("expected a function");
    };
    func.body().unwrap()
}

#[test]
fn empty_function() {
    let parse = parse("fun f() {}\n");
    assert!(parse.diagnostics().is_empty());
    expect![[r#"
        MODULE@0..11
          FN@0..10
            FUN_KW@0..3 "fun"
            WHITESPACE@3..4 " "
            NAME@4..5 "f"
            PARAM_LIST@5..8
              LEFT_PAREN@5..6 "("
              RIGHT_PAREN@6..7 ")"
              WHITESPACE@7..8 " "
            BLOCK@8..10
              LEFT_BRACE@8..9 "{"
              RIGHT_BRACE@9..10 "}"
          NEWLINE@10..11 "\n"
          EOF@11..11 ""
    "#]]
    .assert_eq(&parse.tree().debug_tree());
}

#[test]
fn val_with_trailing_comment() {
    let parse = parse("val x = 1; // one\n");
    assert!(parse.diagnostics().is_empty());
    expect![[r#"
        MODULE@0..18
          VAL_DECL@0..17
            VAL_KW@0..3 "val"
            WHITESPACE@3..4 " "
            NAME_PATTERN@4..6
              NAME@4..5 "x"
              WHITESPACE@5..6 " "
            EQ@6..7 "="
            WHITESPACE@7..8 " "
            LITERAL@8..9
              INT_NUMBER@8..9 "1"
            SEMICOLON@9..10 ";"
            WHITESPACE@10..11 " "
            LINE_COMMENT@11..17 "// one"
          NEWLINE@17..18 "\n"
          EOF@18..18 ""
    "#]]
    .assert_eq(&parse.tree().debug_tree());
}

#[test]
fn lossless() {
    let text = "
// leading
struct Pair[A, B] { first: A, second: B }

fun main(x: Int): (Int, Int) where Int: Eq {
    val (a, _) = (x, 1);
    if val 0 = a { return } else if a == 1 { a++ } else { loop {} }
    while a < 10 { a = a + 1 }
    f(a).b /* done */
}
";
    let parse = parse(text);
    assert_eq!(parse.tree().root().text(), text);
    assert!(parse.diagnostics().is_empty(), "{:?}", parse.diagnostics());
}

#[test]
fn struct_literal_is_not_a_condition() {
    let parse = parse("fun f() { if a {} ; val p = P { x: 1 } }");
    assert!(parse.diagnostics().is_empty(), "{:?}", parse.diagnostics());

    let mut stmts = first_fn_body(&parse).stmts();

    let Some(ast::Stmt::Expr(stmt)) = stmts.next() else { panic!("expected an `if`") };
    let Some(ast::Expr::If(if_expr)) = stmt.expr() else { panic!("expected an `if`") };
    let Some(ast::Condition::Expr(ast::Expr::Path(path))) = if_expr.condition() else {
        panic!("expected a name condition");
    };
    assert_eq!(path.name().unwrap().text_trimmed(), "a");
    assert!(if_expr.then_branch().is_some());

    let Some(ast::Stmt::Val(val)) = stmts.next() else { panic!("expected a `val`") };
    let Some(ast::Expr::StructLiteral(literal)) = val.initializer() else {
        panic!("expected a struct literal");
    };
    assert_eq!(literal.name().unwrap().text_trimmed(), "P");
    assert_eq!(literal.fields().count(), 1);
}

#[test]
fn postfix_chain() {
    let parse = parse("fun f() { a.b(c)++ }");
    let Some(ast::Stmt::Expr(stmt)) = first_fn_body(&parse).stmts().next() else {
        panic!("expected an expression statement");
    };

    let Some(ast::Expr::Postfix(postfix)) = stmt.expr() else { panic!("expected `++`") };
    let Some(ast::Expr::Call(call)) = postfix.expr() else { panic!("expected a call") };
    let Some(ast::Expr::Member(member)) = call.callee() else { panic!("expected a member") };
    assert_eq!(member.name().unwrap().text_trimmed(), "b");
    assert_eq!(call.arg_list().unwrap().args().count(), 1);
}

#[test]
fn paren_and_tuple() {
    let parse = parse("val a = (1)\nval b = (1,)\nval c = ()");
    let kinds: Vec<_> = parse
        .module()
        .items()
        .map(|item| {
            let ast::Item::Val(val) = item else { panic!("expected a `val`") };
            val.initializer().unwrap().syntax().kind()
        })
        .collect();
    assert_eq!(kinds, [SyntaxKind::PAREN_EXPR, SyntaxKind::TUPLE_EXPR, SyntaxKind::TUPLE_EXPR]);
}

#[test]
fn binary_is_right_nested() {
    let parse = parse("val x = a = b + c");
    let Some(ast::Item::Val(val)) = parse.module().items().next() else { panic!() };
    let Some(ast::Expr::Binary(outer)) = val.initializer() else { panic!("expected `=`") };
    assert_eq!(outer.op().unwrap().kind(), SyntaxKind::EQ);
    assert!(matches!(outer.lhs(), Some(ast::Expr::Path(_))));
    assert!(matches!(outer.rhs(), Some(ast::Expr::Binary(_))));
}

#[test]
fn else_if_chain() {
    let parse = parse("fun f() { if a {} else if b {} else {} }");
    let Some(ast::Stmt::Expr(stmt)) = first_fn_body(&parse).stmts().next() else { panic!() };
    let Some(ast::Expr::If(if_expr)) = stmt.expr() else { panic!() };
    let Some(ast::ElseBranch::If(else_if)) = if_expr.else_branch() else {
        panic!("expected `else if`");
    };
    assert!(matches!(else_if.else_branch(), Some(ast::ElseBranch::Block(_))));
}

#[test]
fn missing_delimiters() {
    assert_eq!(messages("fun f( {"), ["expected `)`", "expected `}`"]);
}

#[test]
fn missing_pattern() {
    assert_eq!(messages("val = 1"), ["expected a pattern"]);
}

#[test]
fn stray_tokens() {
    assert_eq!(messages("x"), ["expected an item"]);
    assert_eq!(messages("fun f() { ) }"), ["expected an expression", "unexpected token"]);
}

#[test]
fn member_without_name_keeps_the_terminator() {
    let parse = parse("fun f() { a.; }");
    assert_eq!(messages("fun f() { a.; }"), ["expected identifier"]);
    let Some(ast::Stmt::Expr(stmt)) = first_fn_body(&parse).stmts().next() else { panic!() };
    let Some(ast::Expr::Member(member)) = stmt.expr() else { panic!("expected a member") };
    assert!(member.name().is_none());
    assert_eq!(member.syntax().last_token().unwrap().kind(), SyntaxKind::DOT);
    assert_eq!(stmt.syntax().last_token().unwrap().kind(), SyntaxKind::SEMICOLON);
}
