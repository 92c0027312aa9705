use ferrule_syntax::{TriviaPiece, TriviaPieceKind};
use text_size::{TextRange, TextSize};

use super::*;

#[track_caller]
fn check(text: &str, expected: &[(SyntaxKind, &str)]) {
    let mut tokenizer = Tokenizer::new(text);
    for &(kind, token_text) in expected {
        let token = tokenizer.next_token();
        assert_eq!((token.kind, &text[token.kind_range]), (kind, token_text), "input: {text:?}");
    }
    assert_eq!(tokenizer.next_token().kind, EOF, "input: {text:?}");
}

fn piece(kind: TriviaPieceKind, len: u32) -> TriviaPiece {
    TriviaPiece::new(kind, len.into())
}

#[test]
fn integer_literals() {
    for input in ["123", "0", "0b1010", "0o755", "0x1f", "123_456"] {
        let mut tokenizer = Tokenizer::new(input);
        assert_eq!(tokenizer.next_token().kind, INT_NUMBER, "input: {input:?}");
        assert!(tokenizer.cursor.is_eof(), "did not consume all of {input:?}");
    }
}

#[test]
fn float_literals() {
    for input in ["123.456", "0.0", "1e10", "1.0e-5", "123_456.789_012"] {
        let mut tokenizer = Tokenizer::new(input);
        assert_eq!(tokenizer.next_token().kind, FLOAT_NUMBER, "input: {input:?}");
        assert!(tokenizer.cursor.is_eof(), "did not consume all of {input:?}");
    }
}

#[test]
fn member_access_on_integer() {
    check("1.foo", &[(INT_NUMBER, "1"), (DOT, "."), (NAME, "foo")]);
}

#[test]
fn keywords_and_underscore() {
    check(
        "fun struct val if else loop while return where true false _ _x",
        &[
            (FUN_KW, "fun"),
            (STRUCT_KW, "struct"),
            (VAL_KW, "val"),
            (IF_KW, "if"),
            (ELSE_KW, "else"),
            (LOOP_KW, "loop"),
            (WHILE_KW, "while"),
            (RETURN_KW, "return"),
            (WHERE_KW, "where"),
            (TRUE_KW, "true"),
            (FALSE_KW, "false"),
            (UNDERSCORE, "_"),
            (NAME, "_x"),
        ],
    );
}

#[test]
fn punctuation() {
    check(
        "f[T](a, b): c;",
        &[
            (NAME, "f"),
            (LEFT_BRACKET, "["),
            (NAME, "T"),
            (RIGHT_BRACKET, "]"),
            (LEFT_PAREN, "("),
            (NAME, "a"),
            (COMMA, ","),
            (NAME, "b"),
            (RIGHT_PAREN, ")"),
            (COLON, ":"),
            (NAME, "c"),
            (SEMICOLON, ";"),
        ],
    );
}

#[test]
fn strings() {
    check(r#""a\"b" c"#, &[(STRING, r#""a\"b""#), (NAME, "c")]);
    check("\"open\nx", &[(STRING, "\"open"), (NAME, "x")]);
}

#[test]
fn eq_operator() {
    check("x = y", &[(NAME, "x"), (EQ, "="), (NAME, "y")]);
    check("x=y", &[(NAME, "x"), (EQ, "="), (NAME, "y")]);
    check("x = y = z", &[(NAME, "x"), (EQ, "="), (NAME, "y"), (EQ, "="), (NAME, "z")]);
    check("x == y", &[(NAME, "x"), (BINARY_OPERATOR, "=="), (NAME, "y")]);
}

#[test]
fn dot_operator() {
    check("object.property", &[(NAME, "object"), (DOT, "."), (NAME, "property")]);
}

#[test]
fn operator_classification() {
    check("a+b", &[(NAME, "a"), (BINARY_OPERATOR, "+"), (NAME, "b")]);
    check("a + b", &[(NAME, "a"), (BINARY_OPERATOR, "+"), (NAME, "b")]);
    check("-a", &[(PREFIX_OPERATOR, "-"), (NAME, "a")]);
    check("a++", &[(NAME, "a"), (POSTFIX_OPERATOR, "++")]);
    check("- a", &[(BINARY_OPERATOR, "-"), (NAME, "a")]);
    check("a ++", &[(NAME, "a"), (BINARY_OPERATOR, "++")]);
    check("a++;", &[(NAME, "a"), (POSTFIX_OPERATOR, "++"), (SEMICOLON, ";")]);
}

#[test]
fn complex_operator_sequences() {
    check(
        "-a * b++ / ++c - d--",
        &[
            (PREFIX_OPERATOR, "-"),
            (NAME, "a"),
            (BINARY_OPERATOR, "*"),
            (NAME, "b"),
            (POSTFIX_OPERATOR, "++"),
            (BINARY_OPERATOR, "/"),
            (PREFIX_OPERATOR, "++"),
            (NAME, "c"),
            (BINARY_OPERATOR, "-"),
            (NAME, "d"),
            (POSTFIX_OPERATOR, "--"),
        ],
    );
    check(
        "!a && b || c",
        &[
            (PREFIX_OPERATOR, "!"),
            (NAME, "a"),
            (BINARY_OPERATOR, "&&"),
            (NAME, "b"),
            (BINARY_OPERATOR, "||"),
            (NAME, "c"),
        ],
    );
}

#[test]
fn operator_with_parentheses() {
    check(
        "(-a) + (b++)",
        &[
            (LEFT_PAREN, "("),
            (PREFIX_OPERATOR, "-"),
            (NAME, "a"),
            (RIGHT_PAREN, ")"),
            (BINARY_OPERATOR, "+"),
            (LEFT_PAREN, "("),
            (NAME, "b"),
            (POSTFIX_OPERATOR, "++"),
            (RIGHT_PAREN, ")"),
        ],
    );
}

#[test]
fn trailing_trivia_stops_at_newline() {
    let text = "val x // c\n  y";
    let mut tokenizer = Tokenizer::new(text);

    let val = tokenizer.next_token();
    assert!(val.leading.is_empty());
    assert_eq!(val.trailing, [piece(TriviaPieceKind::Whitespace, 1)]);

    let x = tokenizer.next_token();
    assert_eq!(
        x.trailing,
        [piece(TriviaPieceKind::Whitespace, 1), piece(TriviaPieceKind::SingleLineComment, 4)]
    );

    let y = tokenizer.next_token();
    assert_eq!(y.leading, [piece(TriviaPieceKind::Newline, 1), piece(TriviaPieceKind::Whitespace, 2)]);
    assert_eq!(y.kind_range, TextRange::new(13.into(), 14.into()));
    assert_eq!(y.full_start(), TextSize::new(10));
    assert!(y.trailing.is_empty());

    assert_eq!(tokenizer.next_token().kind, EOF);
}

#[test]
fn crlf_is_one_newline() {
    let mut tokenizer = Tokenizer::new("a\r\nb");
    tokenizer.next_token();
    let b = tokenizer.next_token();
    assert_eq!(b.leading, [piece(TriviaPieceKind::Newline, 2)]);
}

#[test]
fn block_comment_spans_lines() {
    let mut tokenizer = Tokenizer::new("/* a\n b */x");
    let x = tokenizer.next_token();
    assert_eq!(x.kind, NAME);
    assert_eq!(x.leading, [piece(TriviaPieceKind::MultiLineComment, 10)]);
}

#[test]
fn eof_collects_final_trivia() {
    let mut tokenizer = Tokenizer::new("a\n  ");
    tokenizer.next_token();
    let eof = tokenizer.next_token();
    assert_eq!(eof.kind, EOF);
    assert_eq!(eof.kind_range, TextRange::empty(4.into()));
    assert_eq!(eof.leading, [piece(TriviaPieceKind::Newline, 1), piece(TriviaPieceKind::Whitespace, 2)]);
}

#[test]
fn start_at_offset_matches_full_tokenization() {
    let text = "x = -a";

    let mut tokenizer = Tokenizer::new_at(text, TextSize::new(4));
    assert_eq!(tokenizer.peek().kind, PREFIX_OPERATOR);

    let minus = tokenizer.next_token();
    assert_eq!(minus.kind_range, TextRange::new(4.into(), 5.into()));
    assert!(minus.leading.is_empty());

    let a = tokenizer.next_token();
    assert_eq!((a.kind, &text[a.kind_range]), (NAME, "a"));
    assert_eq!(tokenizer.next_token().kind, EOF);
}
