//! Generates the AST from the lossless syntax tree.
//!
//! The generator walks typed syntax nodes and allocates the matching AST
//! nodes in an [`AstContext`]. Constructs it does not translate yet are
//! handed to a [`LegacyParse`] implementation, started at the construct's
//! location. Either way the resulting AST is the same.

mod bridge;
mod generate;
mod identifiers;
mod legacy;
mod locations;

use ferrule_ast::nodes::{Decl, DeclContext};
use ferrule_ast::{AstContext, LegacyParse, SourceBuffer};
use ferrule_syntax::SyntaxTree;
use ferrule_syntax::ast::Module;

pub use bridge::{
    allocate_bridged_string, decode_bridged_string, ferrule_astgen_free_bridged_string,
    with_bridged_string,
};
pub use generate::is_expr_migrated;
pub use identifiers::{BridgedIdentifier, IdentifierAndSourceLoc};
pub use legacy::is_expr_basic;
pub use locations::{BridgedSourceLoc, node_source_range, source_loc_at, source_range};

/// Translates syntax nodes of one buffer into AST nodes.
pub struct AstGen<'c, 'db, L: ?Sized> {
    ctx: &'c mut AstContext<'db>,
    buffer: SourceBuffer,
    legacy: &'c mut L,
    /// The context new declarations are placed in.
    dc: DeclContext,
}

impl<'c, 'db, L: LegacyParse<'db> + ?Sized> AstGen<'c, 'db, L> {
    pub fn new(ctx: &'c mut AstContext<'db>, buffer: SourceBuffer, legacy: &'c mut L) -> Self {
        let dc = ctx.module_context();
        Self { ctx, buffer, legacy, dc }
    }

    fn in_context<T>(&mut self, dc: DeclContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let outer = std::mem::replace(&mut self.dc, dc);
        let result = f(self);
        self.dc = outer;
        result
    }
}

/// Generates the declarations of `buffer`, whose text `tree` was parsed from.
pub fn generate_ast<'db>(
    ctx: &mut AstContext<'db>,
    buffer: SourceBuffer,
    tree: &SyntaxTree,
    legacy: &mut (impl LegacyParse<'db> + ?Sized),
) -> Vec<Decl> {
    debug_assert_eq!(tree.text(), ctx.buffer_text(buffer), "tree does not match the buffer");
    let Some(module) = Module::new(tree.root()) else {
        return Vec::new();
    };
    AstGen::new(ctx, buffer, legacy).generate_source_file(module)
}
