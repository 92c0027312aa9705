use ferrule_syntax::SyntaxKind::*;
use ferrule_syntax::SyntaxSet;

use super::delimited;
use crate::parser::Parser;

const PATTERN_FIRST: SyntaxSet = SyntaxSet::new([UNDERSCORE, NAME, INT_NUMBER, LEFT_PAREN]);

pub(crate) fn pattern(p: &mut Parser<'_>) -> bool {
    let kind = match p.peek_kind() {
        UNDERSCORE => WILDCARD_PATTERN,
        NAME => NAME_PATTERN,
        INT_NUMBER => LITERAL_PATTERN,
        LEFT_PAREN => {
            let m = p.start();
            delimited(
                p,
                LEFT_PAREN,
                RIGHT_PAREN,
                COMMA,
                "expected a pattern",
                PATTERN_FIRST,
                pattern,
            );
            m.complete(p, TUPLE_PATTERN);
            return true;
        }
        _ => {
            p.error_recover("expected a pattern", SyntaxSet::new([EQ, COLON, LEFT_BRACE]));
            return false;
        }
    };

    let m = p.start();
    p.advance();
    m.complete(p, kind);
    true
}
