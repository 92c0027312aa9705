mod symbol;

pub use symbol::{IntoSymbol, Symbol};
