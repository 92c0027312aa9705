use ferrule_ast::nodes::*;
use ferrule_syntax::SyntaxKind::*;
use ferrule_syntax::SyntaxSet;

use super::delimited;
use crate::parser::Parser;

const TYPE_FIRST: SyntaxSet = SyntaxSet::new([NAME, LEFT_PAREN]);

pub(crate) fn type_(p: &mut Parser<'_, '_>) -> Option<TypeRepr> {
    let start = p.loc();
    let kind = match p.peek_kind() {
        NAME => {
            let (name, name_loc) = p.bump_text();
            TypeReprKind::Ident { name, name_loc }
        }
        LEFT_PAREN => {
            let elements = delimited(p, RIGHT_PAREN, "expected a type", TYPE_FIRST, type_);
            TypeReprKind::Tuple { elements }
        }
        _ => {
            p.error_recover("expected a type", SyntaxSet::new([EQ, COMMA, LEFT_BRACE, WHERE_KW]));
            return None;
        }
    };
    Some(p.type_node(kind, start))
}
