use crate::SyntaxKind;

/// Compact bit set of token kinds, used for recovery and first sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxSet {
    bits: u128,
}

impl SyntaxSet {
    pub const EMPTY: Self = Self { bits: 0 };

    const fn mask(kind: SyntaxKind) -> u128 {
        let kind = kind as u16;
        debug_assert!(kind < u128::BITS as u16, "SyntaxKind does not fit in a SyntaxSet");
        1 << kind
    }

    pub const fn new<const N: usize>(kinds: [SyntaxKind; N]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < kinds.len() {
            bits |= Self::mask(kinds[i]);
            i += 1;
        }
        Self { bits }
    }

    pub const fn union(self, other: Self) -> Self {
        Self { bits: self.bits | other.bits }
    }

    pub const fn with(self, kind: SyntaxKind) -> Self {
        Self { bits: self.bits | Self::mask(kind) }
    }

    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        self.bits & Self::mask(kind) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyntaxKind::*;

    #[test]
    fn membership() {
        const SET: SyntaxSet = SyntaxSet::new([COMMA, RIGHT_PAREN]);
        assert!(SET.contains(COMMA));
        assert!(SET.contains(RIGHT_PAREN));
        assert!(!SET.contains(LEFT_PAREN));
        assert!(SET.with(TOMBSTONE).contains(TOMBSTONE));
        assert!(SET.union(SyntaxSet::new([EOF])).contains(EOF));
    }
}
