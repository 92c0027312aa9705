use std::mem::size_of;

use expect_test::expect;
use ferrule_ast::nodes::*;
use ferrule_ast::{
    AsNullable as _, AstContext, BridgedNullable, BridgedStringRef, HasNullable, Identifier,
    OwnedBridgedString, SourceLoc, SourceRange, dump_source_file,
};
use ferrule_inputs::File;
use salsa::DatabaseImpl;
use text_size::TextSize;

fn file(db: &DatabaseImpl, text: &str) -> File {
    File::new(db, "test.fe".into(), text.to_owned())
}

#[test]
fn nullable_handles_keep_the_raw_layout() {
    assert_eq!(size_of::<NullableExpr>(), size_of::<u32>());
    assert_eq!(size_of::<SourceLoc>(), size_of::<u32>());

    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let expr = ctx.alloc_expr(ExprData { kind: ExprKind::Error, range: SourceRange::INVALID });

    let present = Some(expr).as_nullable();
    assert!(present.is_present());
    assert_eq!(present.get(), Some(expr));
    assert_eq!(NullableExpr::from_raw(present.raw()), present);

    let absent = None::<Expr>.as_nullable();
    assert!(!absent.is_present());
    assert!(absent.is_null());
    assert_eq!(absent, NullableExpr::NULL);
    assert_eq!(absent, NullableExpr::default());
}

#[test]
fn absent_locations_and_identifiers_are_sentinels() {
    assert!(!SourceLoc::from_raw(None).is_present());
    assert_eq!(SourceLoc::default(), SourceLoc::INVALID);
    assert!(!Identifier::from_raw(None).is_present());
    assert!(Identifier::default().is_empty());
}

#[track_caller]
fn check_present_round_trip<T>(raw: T::Raw)
where
    T: BridgedNullable + PartialEq + std::fmt::Debug,
    T::Raw: PartialEq + std::fmt::Debug,
{
    let value = T::from_raw(Some(raw));
    assert!(value.is_present());
    assert_eq!(value.raw(), Some(raw));
    assert_eq!(T::from_raw(value.raw()), value);
    assert_ne!(value, T::default());
}

#[test]
fn present_values_round_trip_for_every_nullable() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);

    let buffer = ctx.add_buffer(file(&db, "val x = 1;\n"));
    let loc = buffer.start().advanced_by(TextSize::new(4));
    check_present_round_trip::<SourceLoc>(loc.raw().unwrap());

    let name = ctx.get_identifier(BridgedStringRef::new("x"));
    check_present_round_trip::<Identifier<'_>>(name.symbol().unwrap());

    let pattern =
        ctx.alloc_pattern(PatternData { kind: PatternKind::Any, range: SourceRange::INVALID });
    check_present_round_trip::<NullablePattern>(HasNullable::raw(pattern));
    assert_eq!(Some(pattern).as_nullable().get(), Some(pattern));

    let stmt = ctx.alloc_stmt(StmtData { kind: StmtKind::Error, range: SourceRange::INVALID });
    check_present_round_trip::<NullableStmt>(HasNullable::raw(stmt));
    assert_eq!(NullableStmt::from(stmt).get(), Some(stmt));
}

#[test]
fn interning_the_same_text_twice_is_idempotent() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);

    let owned = String::from("count");
    let a = ctx.get_identifier(BridgedStringRef::new("count"));
    let b = ctx.get_identifier(BridgedStringRef::new(&owned));
    let c = ctx.get_identifier(BridgedStringRef::new("total"));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.text(&db), "count");
    assert_eq!(Identifier::EMPTY.text(&db), "");
}

#[test]
fn buffers_do_not_alias() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let first = ctx.add_buffer(file(&db, "ab\ncd"));
    let second = ctx.add_buffer(file(&db, "xyz"));
    let sources = ctx.source_manager();

    assert_eq!(first.len(), TextSize::new(5));
    assert_ne!(first.end(), second.start());
    assert!(first.end() < second.start());

    assert_eq!(sources.resolve(first.start()), Some((first, TextSize::new(0))));
    assert_eq!(sources.resolve(first.end()), Some((first, TextSize::new(5))));
    assert_eq!(sources.resolve(second.start()), Some((second, TextSize::new(0))));
    assert_eq!(sources.resolve(second.end()), Some((second, TextSize::new(3))));
    assert_eq!(sources.resolve(SourceLoc::INVALID), None);

    let loc = first.start().advanced_by(TextSize::new(3));
    let line_col = sources.line_col(&db, loc).unwrap();
    assert_eq!((line_col.line, line_col.col), (1, 0));

    assert_eq!(first.offset_of(second.start()), None);
    assert_eq!(ctx.buffer_text(second), "xyz");
}

#[test]
fn owned_strings_survive_the_round_trip() {
    let owned = OwnedBridgedString::new("hi");
    assert_eq!(owned.len(), 2);
    assert_eq!(owned.as_bytes_with_nul(), b"hi\0");

    let raw = owned.into_raw();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw.to_str(), Ok("hi"));

    let owned = unsafe { OwnedBridgedString::from_raw(raw) }.unwrap();
    assert_eq!(owned.as_bridged().to_str(), Ok("hi"));

    assert!(unsafe { OwnedBridgedString::from_raw(BridgedStringRef::EMPTY) }.is_none());
}

#[test]
fn empty_reference_is_distinct_from_empty_text() {
    assert!(BridgedStringRef::EMPTY.is_empty_initialized());
    assert!(BridgedStringRef::EMPTY.as_bytes().is_empty());
    assert!(!BridgedStringRef::new("").is_empty_initialized());
    assert!(BridgedStringRef::new("").is_empty());
}

#[test]
fn function_contexts_nest() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let name = ctx.get_identifier(BridgedStringRef::new("main"));

    let module = ctx.module_context();
    let function = ctx.new_function_context(name, module);

    assert_eq!(ctx.decl_context(module).parent, None);
    assert_eq!(ctx.decl_context(function).parent, Some(module));
    assert_eq!(ctx.decl_context(function).kind, DeclContextKind::Function(name));
}

#[test]
fn dump_with_locations() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let buffer = ctx.add_buffer(file(&db, "val x = 1;\n"));
    let at = |offset: u32| buffer.start().advanced_by(TextSize::new(offset));
    let point = |offset: u32| SourceRange::new(at(offset), at(offset));

    let x = ctx.get_identifier(BridgedStringRef::new("x"));
    let one = ctx.get_identifier(BridgedStringRef::new("1"));
    let pattern = ctx.alloc_pattern(PatternData {
        kind: PatternKind::Named { name: x, name_loc: at(4) },
        range: point(4),
    });
    let init = ctx.alloc_expr(ExprData { kind: ExprKind::IntegerLiteral(one), range: point(8) });
    let decl = ctx.alloc_decl(DeclData {
        kind: DeclKind::PatternBinding { pattern: pattern.into(), init: init.into() },
        range: SourceRange::new(at(0), at(9)),
        context: ctx.module_context(),
    });

    expect![[r#"
        (source_file
          (val @1:1..1:10
            (named @1:5..1:5 "x"@1:5)
            (integer @1:9..1:9 1)))
    "#]]
    .assert_eq(&dump_source_file(&ctx, &[decl], true));

    expect![[r#"
        (source_file
          (val
            (named "x")
            (integer 1)))
    "#]]
    .assert_eq(&dump_source_file(&ctx, &[decl], false));
}

#[test]
fn dump_shows_missing_children() {
    let db = DatabaseImpl::new();
    let mut ctx = AstContext::new(&db);
    let f = ctx.get_identifier(BridgedStringRef::new("f"));
    let body_context = ctx.new_function_context(f, ctx.module_context());
    let decl = ctx.alloc_decl(DeclData {
        kind: DeclKind::Func {
            name: f,
            name_loc: SourceLoc::INVALID,
            generic_params: NullableGenericParamList::NULL,
            params: NullableParameterList::NULL,
            result: NullableTypeRepr::NULL,
            where_clause: NullableTrailingWhereClause::NULL,
            body: NullableStmt::NULL,
            body_context,
        },
        range: SourceRange::INVALID,
        context: ctx.module_context(),
    });

    expect![[r#"
        (source_file
          (func @?..? "f"@?
            (null params)
            (null body)))
    "#]]
    .assert_eq(&dump_source_file(&ctx, &[decl], true));
}
