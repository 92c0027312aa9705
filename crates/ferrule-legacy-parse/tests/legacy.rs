use expect_test::{Expect, expect};
use ferrule_ast::nodes::*;
use ferrule_ast::{AstContext, LegacyParse as _, SourceBuffer, dump_source_file};
use ferrule_inputs::File;
use ferrule_legacy_parse::{LegacyParser, parse_source_file};
use salsa::DatabaseImpl;
use text_size::TextSize;

fn add_buffer(ctx: &mut AstContext<'_>, db: &DatabaseImpl, text: &str) -> SourceBuffer {
    ctx.add_buffer(File::new(db, "legacy.fe".into(), text.to_owned()))
}

fn messages<'a>(ctx: &'a AstContext<'_>) -> Vec<&'a str> {
    ctx.diagnostics().iter().map(|d| d.diagnostic.message()).collect()
}

#[track_caller]
fn check(text: &str, locations: bool, expect: Expect) {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let buffer = add_buffer(&mut ctx, &db, text);
    let decls = parse_source_file(&mut ctx, buffer);
    assert_eq!(messages(&ctx), Vec::<&str>::new());
    expect.assert_eq(&dump_source_file(&ctx, &decls, locations));
}

#[test]
fn generic_function() {
    check(
        "fun id[T](x: T): T where T: Copy { x }\n",
        false,
        expect![[r#"
            (source_file
              (func "id"
                (generic_params "T")
                (params
                  (param "x" (type_ident "T")))
                (result (type_ident "T"))
                (where
                  (requirement (type_ident "T") (type_ident "Copy")))
                (brace
                  (decl_ref "x"))))
        "#]],
    );
}

#[test]
fn typed_binding_with_locations() {
    check(
        "val x: Int = -1;\n",
        true,
        expect![[r#"
            (source_file
              (val @1:1..1:16
                (typed @1:5..1:8 (named @1:5..1:5 "x"@1:5) (type_ident @1:8..1:8 "Int"@1:8))
                (prefix @1:14..1:15 "-"@1:14
                  (integer @1:15..1:15 1))))
        "#]],
    );
}

#[test]
fn else_if_is_wrapped_in_a_block() {
    check(
        "fun f() { if a { 1 } else if b { 2 } else { 3 } }\n",
        false,
        expect![[r#"
            (source_file
              (func "f"
                (params)
                (brace
                  (if
                    (decl_ref "a")
                    (brace
                      (integer 1))
                    (brace
                      (if
                        (decl_ref "b")
                        (brace
                          (integer 2))
                        (brace
                          (integer 3))))))))
        "#]],
    );
}

#[test]
fn statements_and_struct_literals() {
    check(
        "fun f() {\n    while i < n { i = i + 1; }\n    return P { x: 1 };\n}\n",
        false,
        expect![[r#"
            (source_file
              (func "f"
                (params)
                (brace
                  (while
                    (binary "<"
                      (decl_ref "i")
                      (decl_ref "n"))
                    (brace
                      (binary "="
                        (decl_ref "i")
                        (binary "+"
                          (decl_ref "i")
                          (integer 1)))))
                  (return
                    (struct_literal "P"
                      (field_init "x" (integer 1)))))))
        "#]],
    );
}

#[test]
fn missing_pattern_is_reported() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let buffer = add_buffer(&mut ctx, &db, "val = 1;\n");
    let decls = parse_source_file(&mut ctx, buffer);

    assert_eq!(messages(&ctx), ["expected a pattern"]);
    expect![[r#"
        (source_file
          (val
            (null pattern)
            (integer 1)))
    "#]]
    .assert_eq(&dump_source_file(&ctx, &decls, false));
}

#[test]
fn annotation_without_pattern_annotates_an_error_pattern() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let buffer = add_buffer(&mut ctx, &db, "val : Int;\n");
    let decls = parse_source_file(&mut ctx, buffer);

    assert_eq!(messages(&ctx), ["expected a pattern"]);
    expect![[r#"
        (source_file
          (val @1:1..1:10
            (typed @1:5..1:7 (error_pattern @1:5..1:5) (type_ident @1:7..1:7 "Int"@1:7))))
    "#]]
    .assert_eq(&dump_source_file(&ctx, &decls, true));
}

#[test]
fn literal_binding_patterns_are_reported() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let buffer = add_buffer(&mut ctx, &db, "val (a, 1) = t;\n");
    parse_source_file(&mut ctx, buffer);

    assert_eq!(messages(&ctx), ["literal patterns cannot appear in bindings"]);
}

#[test]
fn matching_patterns_accept_literals() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let buffer = add_buffer(&mut ctx, &db, "(a, 1)");
    let module = ctx.module_context();

    let pattern = LegacyParser.parse_matching_pattern(&mut ctx, buffer.start(), module);

    assert!(ctx.diagnostics().is_empty());
    let PatternKind::Tuple { elements } = &ctx.pattern(pattern).kind else {
        panic!("expected a tuple pattern");
    };
    assert!(matches!(ctx.pattern(elements[1]).kind, PatternKind::Literal(_)));
}

#[test]
fn parsing_starts_mid_buffer() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let buffer = add_buffer(&mut ctx, &db, "val a = f(x) + 1;\n");
    let module = ctx.module_context();
    let at = |offset: u32| buffer.start().advanced_by(TextSize::new(offset));

    let arg = LegacyParser.parse_expr(&mut ctx, at(10), module, false);
    let data = ctx.expr(arg);
    assert!(matches!(data.kind, ExprKind::UnresolvedDeclRef { .. }));
    assert_eq!((data.range.start, data.range.end), (at(10), at(10)));

    let sum = LegacyParser.parse_expr(&mut ctx, at(8), module, false);
    let data = ctx.expr(sum);
    let ExprKind::Binary { lhs, .. } = data.kind else {
        panic!("expected a binary expression");
    };
    assert_eq!((data.range.start, data.range.end), (at(8), at(15)));
    assert!(matches!(ctx.expr(lhs).kind, ExprKind::Call { .. }));
}

#[test]
fn basic_expressions_stop_before_braces() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let buffer = add_buffer(&mut ctx, &db, "S {}");
    let module = ctx.module_context();

    let basic = LegacyParser.parse_expr(&mut ctx, buffer.start(), module, true);
    assert!(matches!(ctx.expr(basic).kind, ExprKind::UnresolvedDeclRef { .. }));

    let full = LegacyParser.parse_expr(&mut ctx, buffer.start(), module, false);
    assert!(matches!(ctx.expr(full).kind, ExprKind::StructLiteral { .. }));
}

#[test]
fn unparsable_input_yields_error_nodes() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let buffer = add_buffer(&mut ctx, &db, "; x");
    let module = ctx.module_context();

    let expr = LegacyParser.parse_expr(&mut ctx, buffer.start(), module, false);
    let stmt = LegacyParser.parse_stmt(&mut ctx, buffer.start(), module);
    let decl = LegacyParser.parse_decl(&mut ctx, buffer.start(), module);

    assert_eq!(ctx.expr(expr).kind, ExprKind::Error);
    assert_eq!(ctx.stmt(stmt).kind, StmtKind::Error);
    assert_eq!(ctx.decl(decl).kind, DeclKind::Error);
    assert_eq!(ctx.decl(decl).context, module);
    assert_eq!(messages(&ctx), ["expected an expression", "expected a statement", "expected an item"]);
}

#[test]
fn nested_functions_get_their_own_context() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let buffer = add_buffer(&mut ctx, &db, "fun outer() { fun inner() {} }\n");
    let decls = parse_source_file(&mut ctx, buffer);

    let DeclKind::Func { body, body_context, .. } = ctx.decl(decls[0]).kind else {
        panic!("expected a function");
    };
    let StmtKind::Brace { elements } = &ctx.stmt(body.get().unwrap()).kind else {
        panic!("expected a block");
    };
    let BraceElement::Decl(inner) = elements[0] else {
        panic!("expected a declaration");
    };
    assert_eq!(ctx.decl(inner).context, body_context);
    assert_eq!(ctx.decl_context(body_context).parent, Some(ctx.module_context()));
}

#[test]
fn buffers_keep_their_own_lines() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    add_buffer(&mut ctx, &db, "val a = 1;\nval b = 2;\n");
    let second = add_buffer(&mut ctx, &db, "val c = 3;\n");
    let decls = parse_source_file(&mut ctx, second);

    expect![[r#"
        (source_file
          (val @1:1..1:10
            (named @1:5..1:5 "c"@1:5)
            (integer @1:9..1:9 3)))
    "#]]
    .assert_eq(&dump_source_file(&ctx, &decls, true));
}
