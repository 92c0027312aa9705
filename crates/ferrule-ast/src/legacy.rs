use crate::{AstContext, Decl, DeclContext, Expr, Pattern, SourceLoc, Stmt, TypeRepr};

/// The legacy recursive-descent parser, seen as a capability.
///
/// Every entry point starts parsing at `loc`, builds its nodes in `ctx` and
/// returns the root node of the parsed construct. Unparsable input yields an
/// error node, never a missing one.
pub trait LegacyParse<'db> {
    /// `is_expr_basic` forbids constructs that would swallow a following
    /// block, as in the condition of an `if`.
    fn parse_expr(
        &mut self,
        ctx: &mut AstContext<'db>,
        loc: SourceLoc,
        dc: DeclContext,
        is_expr_basic: bool,
    ) -> Expr;

    fn parse_decl(&mut self, ctx: &mut AstContext<'db>, loc: SourceLoc, dc: DeclContext) -> Decl;

    fn parse_stmt(&mut self, ctx: &mut AstContext<'db>, loc: SourceLoc, dc: DeclContext) -> Stmt;

    fn parse_type(&mut self, ctx: &mut AstContext<'db>, loc: SourceLoc, dc: DeclContext)
    -> TypeRepr;

    /// A pattern that is matched against a value, as in `if val`.
    fn parse_matching_pattern(
        &mut self,
        ctx: &mut AstContext<'db>,
        loc: SourceLoc,
        dc: DeclContext,
    ) -> Pattern;

    /// A pattern that introduces bindings, as in `val`.
    fn parse_binding_pattern(
        &mut self,
        ctx: &mut AstContext<'db>,
        loc: SourceLoc,
        dc: DeclContext,
    ) -> Pattern;
}
