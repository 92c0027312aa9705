//! Lossless, immutable syntax tree with parent pointers and attached trivia.
//!
//! The tree is built once and then navigated by index-based, lifetime-guided
//! handles without allocation or refcounting. Whitespace and comments are not
//! tree elements: they hang off the tokens as leading and trailing trivia.

/// Typed AST wrappers around the raw syntax tree.
pub mod ast;
mod builder;
mod syntax;
mod syntax_kind;
mod syntax_set;
mod trivia;

/// Incremental builder for constructing a `SyntaxTree`.
pub use builder::Builder;
/// Primary syntax tree API types.
pub use syntax::{
    ChildrenWithTokens, NodeOrToken, SyntaxElement, SyntaxNode, SyntaxToken, SyntaxTree,
};
/// Token and node kinds used throughout the tree.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;
/// Trivia pieces attached to tokens.
pub use trivia::{TriviaPiece, TriviaPieceKind};
pub use text_size::{TextRange, TextSize};

#[cfg(test)]
mod tests;
