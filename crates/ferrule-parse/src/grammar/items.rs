use ferrule_syntax::SyntaxKind::*;
use ferrule_syntax::SyntaxSet;

use super::{delimited, exprs, name, patterns, types, with_progress};
use crate::parser::Parser;

pub(crate) const ITEM_FIRST: SyntaxSet = SyntaxSet::new([FUN_KW, STRUCT_KW, VAL_KW]);

pub(crate) fn module(p: &mut Parser<'_>) {
    let m = p.start();

    while !p.at(EOF) {
        with_progress(p, item);
    }

    p.eof();
    m.complete(p, MODULE);
}

pub(crate) fn item(p: &mut Parser<'_>) {
    match p.peek_kind() {
        FUN_KW => fn_decl(p),
        STRUCT_KW => struct_decl(p),
        VAL_KW => val_decl(p),
        SEMICOLON => p.error_and_bump("expected item, found `;`"),
        _ => p.error_and_bump("expected an item"),
    }
}

fn fn_decl(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();

    name(p, SyntaxSet::new([LEFT_BRACKET, LEFT_PAREN, LEFT_BRACE]));

    if p.at(LEFT_BRACKET) {
        generic_param_list(p);
    }

    if p.at(LEFT_PAREN) {
        param_list(p);
    } else {
        p.error("expected function parameters");
    }

    if p.at(COLON) {
        let m = p.start();
        p.advance();
        types::type_(p);
        m.complete(p, RETURN_TYPE);
    }

    if p.at(WHERE_KW) {
        where_clause(p);
    }

    exprs::block(p);

    m.complete(p, FN);
}

fn generic_param_list(p: &mut Parser<'_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_BRACKET,
        RIGHT_BRACKET,
        COMMA,
        "expected generic parameter",
        SyntaxSet::new([NAME]),
        |p| {
            if !p.at(NAME) {
                return false;
            }
            let m = p.start();
            p.advance();
            m.complete(p, GENERIC_PARAM);
            true
        },
    );
    m.complete(p, GENERIC_PARAM_LIST);
}

fn param_list(p: &mut Parser<'_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_PAREN,
        RIGHT_PAREN,
        COMMA,
        "expected parameter",
        SyntaxSet::new([NAME]),
        param,
    );
    m.complete(p, PARAM_LIST);
}

fn param(p: &mut Parser<'_>) -> bool {
    if !p.at(NAME) {
        return false;
    }

    let m = p.start();
    p.advance();
    if p.at(COLON) {
        type_annotation(p);
    }
    m.complete(p, PARAM);
    true
}

pub(crate) fn type_annotation(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    types::type_(p);
    m.complete(p, TYPE_ANNOTATION);
}

fn where_clause(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();

    loop {
        let predicate = p.start();
        types::type_(p);
        p.expect(COLON);
        types::type_(p);
        predicate.complete(p, WHERE_PREDICATE);

        if !p.eat(COMMA) {
            break;
        }
    }

    m.complete(p, WHERE_CLAUSE);
}

fn struct_decl(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();

    name(p, SyntaxSet::new([LEFT_BRACKET, LEFT_BRACE]));

    if p.at(LEFT_BRACKET) {
        generic_param_list(p);
    }

    if p.at(LEFT_BRACE) {
        let fields = p.start();
        delimited(
            p,
            LEFT_BRACE,
            RIGHT_BRACE,
            COMMA,
            "expected field",
            SyntaxSet::new([NAME]),
            field,
        );
        fields.complete(p, FIELD_LIST);
    } else {
        p.error("expected struct fields");
    }

    m.complete(p, STRUCT);
}

fn field(p: &mut Parser<'_>) -> bool {
    if !p.at(NAME) {
        return false;
    }

    let m = p.start();
    p.advance();
    p.expect(COLON);
    types::type_(p);
    m.complete(p, FIELD);
    true
}

pub(crate) fn val_decl(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();

    patterns::pattern(p);

    if p.at(COLON) {
        type_annotation(p);
    }

    if p.eat(EQ) {
        exprs::expr(p, false);
    }

    p.eat(SEMICOLON);
    m.complete(p, VAL_DECL);
}
