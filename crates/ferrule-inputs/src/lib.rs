pub use line_index::{LineCol, LineIndex};

/// A source file registered with the session.
#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: camino::Utf8PathBuf,
    #[returns(deref)]
    pub text: String,
}

#[salsa::tracked]
impl File {
    #[salsa::tracked(returns(ref), no_eq)]
    pub fn line_index(self, db: &dyn salsa::Database) -> LineIndex {
        LineIndex::new(self.text(db))
    }
}

impl File {
    /// Zero-based line and column (in bytes) of `offset`.
    pub fn line_col(self, db: &dyn salsa::Database, offset: line_index::TextSize) -> LineCol {
        self.line_index(db).line_col(offset)
    }
}

#[cfg(test)]
mod tests {
    use line_index::TextSize;
    use salsa::DatabaseImpl;

    use super::*;

    #[test]
    fn line_col_is_zero_based() {
        let db = DatabaseImpl::new();
        let file = File::new(&db, "main.fe".into(), "fun f() {\n  x\n}\n".to_owned());

        assert_eq!(file.line_col(&db, TextSize::new(0)), LineCol { line: 0, col: 0 });
        assert_eq!(file.line_col(&db, TextSize::new(12)), LineCol { line: 1, col: 2 });
        assert_eq!(file.line_col(&db, TextSize::new(14)), LineCol { line: 2, col: 0 });
    }
}
