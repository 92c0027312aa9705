//! The recursive-descent parser that builds AST nodes directly from source
//! text, without an intermediate syntax tree.
//!
//! It can start at any token of a registered buffer, which is how the AST
//! generator hands it the constructs it does not translate itself.

mod grammar;
mod parser;

use ferrule_ast::nodes::*;
use ferrule_ast::{AstContext, LegacyParse, SourceBuffer, SourceLoc};
use ferrule_syntax::SyntaxSet;

use crate::grammar::{exprs, items, patterns, types};
use crate::parser::Parser;

/// Parses a whole buffer into top-level declarations of the module context.
pub fn parse_source_file(ctx: &mut AstContext<'_>, buffer: SourceBuffer) -> Vec<Decl> {
    let dc = ctx.module_context();
    let mut p = Parser::new(ctx, buffer.start(), dc);
    items::module(&mut p)
}

/// [`LegacyParse`] backed by this crate's parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyParser;

impl<'db> LegacyParse<'db> for LegacyParser {
    fn parse_expr(
        &mut self,
        ctx: &mut AstContext<'db>,
        loc: SourceLoc,
        dc: DeclContext,
        is_expr_basic: bool,
    ) -> Expr {
        let mut p = Parser::new(ctx, loc, dc);
        let start = p.loc();
        exprs::expr(&mut p, is_expr_basic)
            .unwrap_or_else(|| p.expr_node(ExprKind::Error, start))
    }

    fn parse_decl(&mut self, ctx: &mut AstContext<'db>, loc: SourceLoc, dc: DeclContext) -> Decl {
        items::item(&mut Parser::new(ctx, loc, dc))
    }

    fn parse_stmt(&mut self, ctx: &mut AstContext<'db>, loc: SourceLoc, dc: DeclContext) -> Stmt {
        let mut p = Parser::new(ctx, loc, dc);
        let start = p.loc();
        exprs::stmt(&mut p).unwrap_or_else(|| {
            p.error_recover("expected a statement", SyntaxSet::EMPTY);
            p.stmt_node(StmtKind::Error, start)
        })
    }

    fn parse_type(
        &mut self,
        ctx: &mut AstContext<'db>,
        loc: SourceLoc,
        dc: DeclContext,
    ) -> TypeRepr {
        let mut p = Parser::new(ctx, loc, dc);
        let start = p.loc();
        types::type_(&mut p).unwrap_or_else(|| p.type_node(TypeReprKind::Error, start))
    }

    fn parse_matching_pattern(
        &mut self,
        ctx: &mut AstContext<'db>,
        loc: SourceLoc,
        dc: DeclContext,
    ) -> Pattern {
        let mut p = Parser::new(ctx, loc, dc);
        let start = p.loc();
        patterns::matching_pattern(&mut p)
            .unwrap_or_else(|| p.pattern_node(PatternKind::Error, start))
    }

    fn parse_binding_pattern(
        &mut self,
        ctx: &mut AstContext<'db>,
        loc: SourceLoc,
        dc: DeclContext,
    ) -> Pattern {
        let mut p = Parser::new(ctx, loc, dc);
        let start = p.loc();
        patterns::binding_pattern(&mut p)
            .unwrap_or_else(|| p.pattern_node(PatternKind::Error, start))
    }
}
