/// Interned text shared by every identifier in a compilation session.
#[salsa::interned(debug)]
pub struct Symbol<'db> {
    #[returns(deref)]
    pub text: Box<str>,
}

pub trait IntoSymbol<'db> {
    fn into_symbol(self, db: &'db dyn salsa::Database) -> Symbol<'db>;
}

impl<'db> IntoSymbol<'db> for &str {
    fn into_symbol(self, db: &'db dyn salsa::Database) -> Symbol<'db> {
        Symbol::new(db, Box::<str>::from(self))
    }
}

impl<'db> IntoSymbol<'db> for Box<str> {
    fn into_symbol(self, db: &'db dyn salsa::Database) -> Symbol<'db> {
        Symbol::new(db, self)
    }
}
