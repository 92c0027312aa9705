//! Trivia pieces attached to tokens.

use text_size::TextSize;

use crate::SyntaxKind;

/// Kinds of trivia stored alongside tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TriviaPieceKind {
    Whitespace,
    Newline,
    SingleLineComment,
    MultiLineComment,
}

impl TriviaPieceKind {
    /// The syntax kind a piece of this kind is reported as.
    pub fn syntax_kind(self) -> SyntaxKind {
        match self {
            Self::Whitespace => SyntaxKind::WHITESPACE,
            Self::Newline => SyntaxKind::NEWLINE,
            Self::SingleLineComment => SyntaxKind::LINE_COMMENT,
            Self::MultiLineComment => SyntaxKind::BLOCK_COMMENT,
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(self, Self::SingleLineComment | Self::MultiLineComment)
    }
}

/// A trivia fragment with its kind and length.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TriviaPiece {
    pub kind: TriviaPieceKind,
    pub len: TextSize,
}

impl TriviaPiece {
    /// Creates a new trivia piece with the given kind and length.
    pub fn new(kind: TriviaPieceKind, len: TextSize) -> Self {
        Self { kind, len }
    }
}

/// Sums the lengths of `pieces`.
pub(crate) fn trivia_len(pieces: &[TriviaPiece]) -> TextSize {
    pieces.iter().map(|piece| piece.len).sum()
}
