use expect_test::expect;
use text_size::{TextRange, TextSize};

use crate::ast::{self, HasName as _, Node as _};
use crate::{Builder, SyntaxKind, SyntaxTree, TriviaPiece, TriviaPieceKind};

fn ws(len: u32) -> TriviaPiece {
    TriviaPiece::new(TriviaPieceKind::Whitespace, len.into())
}

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

/// `  val x = 1` with trivia attached by hand.
fn val_decl() -> SyntaxTree {
    let mut builder = Builder::new("  val x = 1");
    builder.start_node(SyntaxKind::MODULE);
    builder.start_node(SyntaxKind::VAL_DECL);
    builder.token(&[ws(2)], SyntaxKind::VAL_KW, range(2, 5), &[ws(1)]);
    builder.start_node(SyntaxKind::NAME_PATTERN);
    builder.token(&[], SyntaxKind::NAME, range(6, 7), &[ws(1)]);
    builder.finish_node();
    builder.token(&[], SyntaxKind::EQ, range(8, 9), &[ws(1)]);
    builder.start_node(SyntaxKind::LITERAL);
    builder.token(&[], SyntaxKind::INT_NUMBER, range(10, 11), &[]);
    builder.finish_node();
    builder.finish_node();
    builder.token(&[], SyntaxKind::EOF, range(11, 11), &[]);
    builder.finish_node();
    builder.finish()
}

#[test]
fn debug_tree() {
    let tree = val_decl();
    expect![[r#"
        MODULE@0..11
          VAL_DECL@0..11
            WHITESPACE@0..2 "  "
            VAL_KW@2..5 "val"
            WHITESPACE@5..6 " "
            NAME_PATTERN@6..8
              NAME@6..7 "x"
              WHITESPACE@7..8 " "
            EQ@8..9 "="
            WHITESPACE@9..10 " "
            LITERAL@10..11
              INT_NUMBER@10..11 "1"
          EOF@11..11 ""
    "#]]
    .assert_eq(&tree.debug_tree());
}

#[test]
fn positions_skip_leading_trivia() {
    let tree = val_decl();
    let decl = tree.root().children().next().unwrap();

    assert_eq!(decl.position(), TextSize::new(0));
    assert_eq!(decl.position_after_skipping_leading_trivia(), TextSize::new(2));
    assert_eq!(decl.text(), "  val x = 1");
    assert_eq!(decl.text_trimmed(), "val x = 1");

    let val_kw = decl.first_token().unwrap();
    assert_eq!(val_kw.text(), "  val ");
    assert_eq!(val_kw.text_trimmed(), "val");
    assert_eq!(val_kw.leading_trivia(), &[ws(2)]);
    assert_eq!(val_kw.trailing_trivia(), &[ws(1)]);
}

#[test]
fn token_navigation() {
    let tree = val_decl();
    let decl = tree.root().children().next().unwrap();

    let kinds: Vec<_> = decl.tokens().map(|token| token.kind()).collect();
    assert_eq!(
        kinds,
        [SyntaxKind::VAL_KW, SyntaxKind::NAME, SyntaxKind::EQ, SyntaxKind::INT_NUMBER]
    );

    let name = decl.first_token().and_then(|token| token.next_token()).unwrap();
    assert_eq!(name.kind(), SyntaxKind::NAME);
    assert_eq!(name.parent().kind(), SyntaxKind::NAME_PATTERN);
    assert_eq!(name.prev_token(), decl.first_token());

    let ancestors: Vec<_> = name.parent_ancestors().map(|node| node.kind()).collect();
    assert_eq!(ancestors, [SyntaxKind::NAME_PATTERN, SyntaxKind::VAL_DECL, SyntaxKind::MODULE]);
}

#[test]
fn typed_wrappers() {
    let tree = val_decl();
    let module = ast::Module::new(tree.root()).unwrap();

    let Some(ast::Item::Val(val)) = module.items().next() else {
        panic!("expected a val declaration");
    };
    let Some(ast::Pattern::Name(pattern)) = val.pattern() else {
        panic!("expected a name pattern");
    };
    assert_eq!(pattern.name().unwrap().text_trimmed(), "x");
    assert!(val.type_annotation().is_none());

    let Some(ast::Expr::Literal(literal)) = val.initializer() else {
        panic!("expected a literal");
    };
    assert!(matches!(literal.kind(), Some(ast::LiteralKind::Int(_))));
    assert_eq!(literal.syntax().text_trimmed(), "1");
    assert!(module.eof().is_some());
}

#[test]
fn empty_node_sits_at_current_offset() {
    let mut builder = Builder::new("()");
    builder.start_node(SyntaxKind::MODULE);
    builder.start_node(SyntaxKind::TUPLE_TYPE);
    builder.token(&[], SyntaxKind::LEFT_PAREN, range(0, 1), &[]);
    builder.start_node(SyntaxKind::ERROR);
    builder.finish_node();
    builder.token(&[], SyntaxKind::RIGHT_PAREN, range(1, 2), &[]);
    builder.finish_node();
    builder.token(&[], SyntaxKind::EOF, range(2, 2), &[]);
    builder.finish_node();
    let tree = builder.finish();

    let error = tree.root().descendants().find(|node| node.kind() == SyntaxKind::ERROR).unwrap();
    assert_eq!(error.text_range(), TextRange::empty(TextSize::new(1)));
    assert!(error.first_token().is_none());
    assert_eq!(error.tokens().count(), 0);
}
