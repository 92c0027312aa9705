use ferrule_span::Symbol;

use crate::nullable::BridgedNullable;

/// An interned name, or [`Identifier::EMPTY`] when there is none.
///
/// Two identifiers are equal exactly when their text is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Identifier<'db>(Option<Symbol<'db>>);

impl<'db> Identifier<'db> {
    pub const EMPTY: Self = Self(None);

    pub fn new(symbol: Symbol<'db>) -> Self {
        Self(Some(symbol))
    }

    pub fn symbol(self) -> Option<Symbol<'db>> {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0.is_none()
    }

    /// The text of this identifier; empty for [`Identifier::EMPTY`].
    pub fn text(self, db: &'db dyn salsa::Database) -> &'db str {
        self.0.map_or("", |symbol| symbol.text(db))
    }
}

impl<'db> BridgedNullable for Identifier<'db> {
    type Raw = Symbol<'db>;

    fn from_raw(raw: Option<Symbol<'db>>) -> Self {
        Self(raw)
    }

    fn raw(self) -> Option<Symbol<'db>> {
        self.0
    }
}
