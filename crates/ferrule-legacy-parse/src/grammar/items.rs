use ferrule_ast::nodes::*;
use ferrule_ast::{AsNullable as _, SourceLoc};
use ferrule_syntax::SyntaxKind::*;
use ferrule_syntax::SyntaxSet;

use super::{delimited, exprs, patterns, types};
use crate::parser::Parser;

pub(crate) const ITEM_FIRST: SyntaxSet = SyntaxSet::new([FUN_KW, STRUCT_KW, VAL_KW]);

pub(crate) fn module(p: &mut Parser<'_, '_>) -> Vec<Decl> {
    let mut decls = Vec::new();
    while !p.at(EOF) {
        match p.peek_kind() {
            FUN_KW | STRUCT_KW | VAL_KW => decls.push(item(p)),
            SEMICOLON => p.error_and_bump("expected item, found `;`"),
            _ => p.error_and_bump("expected an item"),
        }
    }
    decls
}

pub(crate) fn item(p: &mut Parser<'_, '_>) -> Decl {
    match p.peek_kind() {
        FUN_KW => fn_decl(p),
        STRUCT_KW => struct_decl(p),
        VAL_KW => val_decl(p),
        _ => {
            let start = p.loc();
            p.error_recover("expected an item", SyntaxSet::EMPTY);
            p.decl_node(DeclKind::Error, start)
        }
    }
}

fn fn_decl(p: &mut Parser<'_, '_>) -> Decl {
    let start = p.bump();
    let (name, name_loc) = p.name();

    let generic_params = p.at(LEFT_BRACKET).then(|| generic_param_list(p)).as_nullable();

    let params = if p.at(LEFT_PAREN) {
        Some(param_list(p))
    } else {
        p.error("expected function parameters");
        None
    };

    let result = if p.eat(COLON) { types::type_(p) } else { None };

    let where_clause = p.at(WHERE_KW).then(|| where_clause(p)).as_nullable();

    let parent = p.dc();
    let body_context = p.ctx().new_function_context(name, parent);
    let body = p.in_context(body_context, exprs::block);

    let kind = DeclKind::Func {
        name,
        name_loc,
        generic_params,
        params: params.as_nullable(),
        result: result.as_nullable(),
        where_clause,
        body: body.as_nullable(),
        body_context,
    };
    p.decl_node(kind, start)
}

fn generic_param_list(p: &mut Parser<'_, '_>) -> GenericParamList {
    let start = p.loc();
    let params = delimited(p, RIGHT_BRACKET, "expected generic parameter", NAME_FIRST, |p| {
        if !p.at(NAME) {
            return None;
        }
        let (name, name_loc) = p.bump_text();
        Some(GenericParam { name, name_loc })
    });
    let range = p.range_from(start);
    p.ctx().alloc_generic_param_list(GenericParamListData { params, range })
}

const NAME_FIRST: SyntaxSet = SyntaxSet::new([NAME]);

fn param_list(p: &mut Parser<'_, '_>) -> ParameterList {
    let start = p.loc();
    let params = delimited(p, RIGHT_PAREN, "expected parameter", NAME_FIRST, |p| {
        if !p.at(NAME) {
            return None;
        }
        let (name, name_loc) = p.bump_text();
        let ty = if p.eat(COLON) { types::type_(p) } else { None };
        let range = p.range_from(name_loc);
        Some(Param { name, name_loc, ty: ty.as_nullable(), range })
    });
    let range = p.range_from(start);
    p.ctx().alloc_parameter_list(ParameterListData { params, range })
}

fn where_clause(p: &mut Parser<'_, '_>) -> TrailingWhereClause {
    let start = p.bump();

    let mut requirements = Vec::new();
    loop {
        let subject = types::type_(p).as_nullable();
        let colon_loc = if p.at(COLON) {
            p.bump()
        } else {
            p.expect(COLON);
            SourceLoc::INVALID
        };
        let constraint = types::type_(p).as_nullable();
        requirements.push(Requirement { subject, constraint, colon_loc });

        if !p.eat(COMMA) {
            break;
        }
    }

    let range = p.range_from(start);
    p.ctx().alloc_trailing_where_clause(TrailingWhereClauseData { requirements, range })
}

fn struct_decl(p: &mut Parser<'_, '_>) -> Decl {
    let start = p.bump();
    let (name, name_loc) = p.name();

    let generic_params = p.at(LEFT_BRACKET).then(|| generic_param_list(p)).as_nullable();

    let fields = if p.at(LEFT_BRACE) {
        delimited(p, RIGHT_BRACE, "expected field", NAME_FIRST, |p| {
            if !p.at(NAME) {
                return None;
            }
            let (name, name_loc) = p.bump_text();
            p.expect(COLON);
            let ty = types::type_(p).as_nullable();
            Some(FieldDecl { name, name_loc, ty })
        })
    } else {
        p.error("expected struct fields");
        Vec::new()
    };

    p.decl_node(DeclKind::Struct { name, name_loc, generic_params, fields }, start)
}

pub(crate) fn val_decl(p: &mut Parser<'_, '_>) -> Decl {
    let start = p.bump();

    let mut pattern = patterns::binding_pattern(p);
    if p.at(COLON) {
        // An annotation without a pattern annotates an error pattern at the `:`.
        let colon = p.loc();
        let inner = match pattern {
            Some(inner) => inner,
            None => p.pattern_node(PatternKind::Error, colon),
        };
        p.bump();
        let ty = types::type_(p).as_nullable();
        let inner_start = p.ctx().pattern(inner).range.start;
        pattern = Some(p.pattern_node(PatternKind::Typed { pattern: inner, ty }, inner_start));
    }

    let init = if p.eat(EQ) { exprs::expr(p, false) } else { None };
    p.eat(SEMICOLON);

    let kind =
        DeclKind::PatternBinding { pattern: pattern.as_nullable(), init: init.as_nullable() };
    p.decl_node(kind, start)
}
