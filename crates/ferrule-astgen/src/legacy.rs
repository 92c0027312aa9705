//! Handing constructs the generator does not translate to the legacy parser.
//!
//! Each entry point passes the node's start location and the current
//! declaration context, and returns the legacy result unchanged.

use ferrule_ast::nodes::*;
use ferrule_ast::LegacyParse;
use ferrule_syntax::SyntaxKind::*;
use ferrule_syntax::SyntaxNode;
use ferrule_syntax::ast::{self, Node as _};

use crate::AstGen;
use crate::locations::BridgedSourceLoc as _;

impl<'db, L: LegacyParse<'db> + ?Sized> AstGen<'_, 'db, L> {
    pub(crate) fn generate_expr_with_legacy(&mut self, node: SyntaxNode<'_>) -> Expr {
        let loc = node.bridged_source_loc(self.buffer);
        self.legacy.parse_expr(self.ctx, loc, self.dc, is_expr_basic(node))
    }

    pub(crate) fn generate_decl_with_legacy(&mut self, node: SyntaxNode<'_>) -> Decl {
        let loc = node.bridged_source_loc(self.buffer);
        self.legacy.parse_decl(self.ctx, loc, self.dc)
    }

    pub(crate) fn generate_stmt_with_legacy(&mut self, node: SyntaxNode<'_>) -> Stmt {
        let loc = node.bridged_source_loc(self.buffer);
        self.legacy.parse_stmt(self.ctx, loc, self.dc)
    }

    pub(crate) fn generate_type_with_legacy(&mut self, node: SyntaxNode<'_>) -> TypeRepr {
        let loc = node.bridged_source_loc(self.buffer);
        self.legacy.parse_type(self.ctx, loc, self.dc)
    }

    pub(crate) fn generate_matching_pattern_with_legacy(
        &mut self,
        node: SyntaxNode<'_>,
    ) -> Pattern {
        let loc = node.bridged_source_loc(self.buffer);
        self.legacy.parse_matching_pattern(self.ctx, loc, self.dc)
    }

    pub(crate) fn generate_binding_pattern_with_legacy(&mut self, node: SyntaxNode<'_>) -> Pattern {
        let loc = node.bridged_source_loc(self.buffer);
        self.legacy.parse_binding_pattern(self.ctx, loc, self.dc)
    }
}

/// Whether the expression at `node` was parsed where a `{` cannot start a
/// struct literal: the condition of an `if` or `while`, or the initializer of
/// an `if val`, unless parentheses, an argument list or a block intervene.
pub fn is_expr_basic(node: SyntaxNode<'_>) -> bool {
    let mut child = node;
    for parent in node.ancestors().skip(1) {
        match parent.kind() {
            BINARY_EXPR | PREFIX_EXPR | POSTFIX_EXPR | CALL_EXPR | MEMBER_EXPR => child = parent,
            IF_EXPR => {
                // Only the condition precedes the blocks.
                let else_kw = ast::IfExpr::cast(parent).and_then(ast::IfExpr::else_kw);
                return else_kw.is_none_or(|else_kw| child.position() < else_kw.position());
            }
            VAL_CONDITION | WHILE_STMT => return true,
            _ => return false,
        }
    }
    false
}
