//! Translating tree offsets into absolute source locations.

use ferrule_ast::{SourceBuffer, SourceLoc, SourceRange};
use ferrule_syntax::ast::{self, Node as _};
use ferrule_syntax::{SyntaxNode, SyntaxToken, TextSize};

/// The location of byte `position` of `buffer`. The end of the buffer is a
/// valid position.
///
/// # Panics
///
/// Panics if `position` is past the end of the buffer.
#[track_caller]
pub fn source_loc_at(position: TextSize, buffer: SourceBuffer) -> SourceLoc {
    assert!(
        position <= buffer.len(),
        "position {position:?} is outside of a buffer of {:?} bytes",
        buffer.len()
    );
    buffer.start().advanced_by(position)
}

/// Anything that can report where its first non-trivia byte is.
pub trait BridgedSourceLoc {
    fn bridged_source_loc(self, buffer: SourceBuffer) -> SourceLoc;
}

impl BridgedSourceLoc for SyntaxNode<'_> {
    fn bridged_source_loc(self, buffer: SourceBuffer) -> SourceLoc {
        source_loc_at(self.position_after_skipping_leading_trivia(), buffer)
    }
}

impl BridgedSourceLoc for SyntaxToken<'_> {
    fn bridged_source_loc(self, buffer: SourceBuffer) -> SourceLoc {
        source_loc_at(self.position_after_skipping_leading_trivia(), buffer)
    }
}

impl<T: BridgedSourceLoc> BridgedSourceLoc for Option<T> {
    fn bridged_source_loc(self, buffer: SourceBuffer) -> SourceLoc {
        self.map_or(SourceLoc::INVALID, |it| it.bridged_source_loc(buffer))
    }
}

macro_rules! bridged_source_loc_via_syntax {
    ($($node:ident),* $(,)?) => {$(
        impl BridgedSourceLoc for ast::$node<'_> {
            fn bridged_source_loc(self, buffer: SourceBuffer) -> SourceLoc {
                self.syntax().bridged_source_loc(buffer)
            }
        }
    )*};
}

bridged_source_loc_via_syntax! {
    Module, Fn, Struct, FieldList, Field, GenericParamList, GenericParam, ParamList, Param,
    TypeAnnotation, ReturnType, WhereClause, WherePredicate, Block, ValDecl, ExprStmt,
    WhileStmt, ReturnStmt, Literal, PathExpr, BinaryExpr, PrefixExpr, PostfixExpr, ParenExpr,
    TupleExpr, CallExpr, ArgList, MemberExpr, IfExpr, ValCondition, LoopExpr, StructLiteral,
    FieldInit, PathType, TupleType, NamePattern, WildcardPattern, TuplePattern, LiteralPattern,
    Item, Stmt, Expr, Type, Pattern, Condition, ElseBranch,
}

/// The closed range from the start of `start` to the start of `end`.
pub fn source_range(
    start: SyntaxToken<'_>,
    end: SyntaxToken<'_>,
    buffer: SourceBuffer,
) -> SourceRange {
    SourceRange::new(start.bridged_source_loc(buffer), end.bridged_source_loc(buffer))
}

/// The range of `node` from its first to its last token. Nodes without
/// tokens collapse to their position.
pub fn node_source_range(node: SyntaxNode<'_>, buffer: SourceBuffer) -> SourceRange {
    match (node.first_token(), node.last_token()) {
        (Some(first), Some(last)) => source_range(first, last, buffer),
        _ => {
            let loc = source_loc_at(node.position(), buffer);
            SourceRange::new(loc, loc)
        }
    }
}
