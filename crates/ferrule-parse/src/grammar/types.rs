use ferrule_syntax::SyntaxKind::*;
use ferrule_syntax::SyntaxSet;

use super::delimited;
use crate::parser::Parser;

const TYPE_FIRST: SyntaxSet = SyntaxSet::new([NAME, LEFT_PAREN]);

pub(crate) fn type_(p: &mut Parser<'_>) -> bool {
    match p.peek_kind() {
        NAME => {
            let m = p.start();
            p.advance();
            m.complete(p, PATH_TYPE);
        }
        LEFT_PAREN => {
            let m = p.start();
            delimited(p, LEFT_PAREN, RIGHT_PAREN, COMMA, "expected a type", TYPE_FIRST, type_);
            m.complete(p, TUPLE_TYPE);
        }
        _ => {
            p.error_recover("expected a type", SyntaxSet::new([EQ, COMMA, LEFT_BRACE, WHERE_KW]));
            return false;
        }
    }
    true
}
