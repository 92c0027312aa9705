use ferrule_syntax::SyntaxKind::*;
use ferrule_syntax::SyntaxSet;

use super::items::{self, ITEM_FIRST};
use super::{delimited, patterns, with_progress};
use crate::parser::{CompletedMarker, Parser};

pub(crate) const EXPR_FIRST: SyntaxSet = SyntaxSet::new([
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,
    TRUE_KW,
    FALSE_KW,
    NAME,
    LEFT_PAREN,
    IF_KW,
    LOOP_KW,
    PREFIX_OPERATOR,
]);

const EXPR_RECOVERY: SyntaxSet = ITEM_FIRST.union(SyntaxSet::new([
    COMMA,
    SEMICOLON,
    RIGHT_BRACKET,
    LEFT_BRACE,
    WHILE_KW,
    RETURN_KW,
]));

pub(crate) fn stmt(p: &mut Parser<'_>) {
    match p.peek_kind() {
        FUN_KW | STRUCT_KW | VAL_KW => items::item(p),
        WHILE_KW => {
            let m = p.start();
            p.advance();
            expr(p, true);
            block(p);
            m.complete(p, WHILE_STMT);
        }
        RETURN_KW => {
            let m = p.start();
            p.advance();
            if p.at_set(EXPR_FIRST) {
                expr(p, false);
            }
            p.eat(SEMICOLON);
            m.complete(p, RETURN_STMT);
        }
        _ => {
            if let Some(lhs) = expr(p, false) {
                let m = lhs.precede(p);
                p.eat(SEMICOLON);
                m.complete(p, EXPR_STMT);
            }
        }
    }
}

pub(crate) fn block(p: &mut Parser<'_>) {
    if !p.at(LEFT_BRACE) {
        p.error("expected a block");
        return;
    }

    let m = p.start();
    p.advance();

    while !p.at(RIGHT_BRACE) && !p.at(EOF) {
        with_progress(p, stmt);
    }

    p.expect(RIGHT_BRACE);
    m.complete(p, BLOCK);
}

/// Parses an expression. `basic` expressions are the conditions of `if` and
/// `while`, where a `{` after a name opens the body instead of a struct literal.
pub(crate) fn expr(p: &mut Parser<'_>, basic: bool) -> Option<CompletedMarker> {
    let lhs = unary_expr(p, basic)?;

    if !p.at(BINARY_OPERATOR) && !p.at(EQ) {
        return Some(lhs);
    }

    let m = lhs.precede(p);
    p.advance();
    expr(p, basic);
    Some(m.complete(p, BINARY_EXPR))
}

fn unary_expr(p: &mut Parser<'_>, basic: bool) -> Option<CompletedMarker> {
    if !p.at(PREFIX_OPERATOR) {
        return postfix_expr(p, basic);
    }

    let m = p.start();
    p.advance();
    unary_expr(p, basic);
    Some(m.complete(p, PREFIX_EXPR))
}

fn postfix_expr(p: &mut Parser<'_>, basic: bool) -> Option<CompletedMarker> {
    let mut lhs = primary_expr(p, basic)?;

    loop {
        lhs = match p.peek_kind() {
            POSTFIX_OPERATOR => {
                let m = lhs.precede(p);
                p.advance();
                m.complete(p, POSTFIX_EXPR)
            }
            LEFT_PAREN => {
                let m = lhs.precede(p);
                arg_list(p);
                m.complete(p, CALL_EXPR)
            }
            DOT => {
                let m = lhs.precede(p);
                p.advance();
                // A missing member name leaves the next token to the enclosing rule.
                if !p.eat(NAME) {
                    p.error("expected identifier");
                }
                m.complete(p, MEMBER_EXPR)
            }
            _ => return Some(lhs),
        };
    }
}

fn primary_expr(p: &mut Parser<'_>, basic: bool) -> Option<CompletedMarker> {
    let completed = match p.peek_kind() {
        INT_NUMBER | FLOAT_NUMBER | STRING | TRUE_KW | FALSE_KW => {
            let m = p.start();
            p.advance();
            m.complete(p, LITERAL)
        }
        NAME => {
            let m = p.start();
            p.advance();
            if !basic && p.at(LEFT_BRACE) {
                delimited(
                    p,
                    LEFT_BRACE,
                    RIGHT_BRACE,
                    COMMA,
                    "expected field initializer",
                    SyntaxSet::new([NAME]),
                    field_init,
                );
                m.complete(p, STRUCT_LITERAL)
            } else {
                m.complete(p, PATH_EXPR)
            }
        }
        LEFT_PAREN => paren_or_tuple_expr(p),
        IF_KW => if_expr(p),
        LOOP_KW => {
            let m = p.start();
            p.advance();
            block(p);
            m.complete(p, LOOP_EXPR)
        }
        _ => {
            p.error_recover("expected an expression", EXPR_RECOVERY);
            return None;
        }
    };
    Some(completed)
}

fn field_init(p: &mut Parser<'_>) -> bool {
    if !p.at(NAME) {
        return false;
    }

    let m = p.start();
    p.advance();
    p.expect(COLON);
    expr(p, false);
    m.complete(p, FIELD_INIT);
    true
}

fn paren_or_tuple_expr(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    p.advance();

    if p.eat(RIGHT_PAREN) {
        return m.complete(p, TUPLE_EXPR);
    }

    expr(p, false);
    if !p.at(COMMA) {
        p.expect(RIGHT_PAREN);
        return m.complete(p, PAREN_EXPR);
    }

    while p.eat(COMMA) {
        if p.at(RIGHT_PAREN) || expr(p, false).is_none() {
            break;
        }
    }
    p.expect(RIGHT_PAREN);
    m.complete(p, TUPLE_EXPR)
}

fn arg_list(p: &mut Parser<'_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_PAREN,
        RIGHT_PAREN,
        COMMA,
        "expected an argument",
        EXPR_FIRST,
        |p| expr(p, false).is_some(),
    );
    m.complete(p, ARG_LIST);
}

fn if_expr(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    p.advance();

    if p.at(VAL_KW) {
        let condition = p.start();
        p.advance();
        patterns::pattern(p);
        p.expect(EQ);
        expr(p, true);
        condition.complete(p, VAL_CONDITION);
    } else {
        expr(p, true);
    }

    block(p);

    if p.eat(ELSE_KW) {
        if p.at(IF_KW) {
            if_expr(p);
        } else {
            block(p);
        }
    }

    m.complete(p, IF_EXPR)
}
