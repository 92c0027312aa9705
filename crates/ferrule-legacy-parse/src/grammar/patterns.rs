use ferrule_ast::nodes::*;
use ferrule_syntax::SyntaxKind::*;
use ferrule_syntax::SyntaxSet;

use super::delimited;
use crate::parser::Parser;

const PATTERN_FIRST: SyntaxSet = SyntaxSet::new([UNDERSCORE, NAME, INT_NUMBER, LEFT_PAREN]);

/// A pattern tested against a value; literals are allowed.
pub(crate) fn matching_pattern(p: &mut Parser<'_, '_>) -> Option<Pattern> {
    pattern(p, false)
}

/// A pattern that only introduces names. Literals are reported but kept.
pub(crate) fn binding_pattern(p: &mut Parser<'_, '_>) -> Option<Pattern> {
    pattern(p, true)
}

fn pattern(p: &mut Parser<'_, '_>, binding: bool) -> Option<Pattern> {
    let start = p.loc();
    let kind = match p.peek_kind() {
        UNDERSCORE => {
            p.bump();
            PatternKind::Any
        }
        NAME => {
            let (name, name_loc) = p.bump_text();
            PatternKind::Named { name, name_loc }
        }
        INT_NUMBER => {
            if binding {
                p.error("literal patterns cannot appear in bindings");
            }
            PatternKind::Literal(p.bump_text().0)
        }
        LEFT_PAREN => {
            let elements = delimited(p, RIGHT_PAREN, "expected a pattern", PATTERN_FIRST, |p| {
                pattern(p, binding)
            });
            PatternKind::Tuple { elements }
        }
        _ => {
            p.error_recover("expected a pattern", SyntaxSet::new([EQ, COLON, LEFT_BRACE]));
            return None;
        }
    };
    Some(p.pattern_node(kind, start))
}
