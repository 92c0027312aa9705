use ferrule_syntax::SyntaxKind::{self, *};
use ferrule_syntax::SyntaxSet;

use crate::parser::Parser;

pub(crate) mod exprs;
pub(crate) mod items;
pub(crate) mod patterns;
pub(crate) mod types;

/// Parses `bra (element (',' element)* ','?)? ket` and returns the elements.
///
/// `element` returns `None` when it could not parse anything; `first_set`
/// decides whether a missing comma is reported or ends the list.
pub(crate) fn delimited<'db, T>(
    p: &mut Parser<'_, 'db>,
    ket: SyntaxKind,
    unexpected_comma_message: &str,
    first_set: SyntaxSet,
    mut element: impl FnMut(&mut Parser<'_, 'db>) -> Option<T>,
) -> Vec<T> {
    p.bump();

    let mut elements = Vec::new();
    while !p.at(ket) && !p.at(EOF) {
        if p.at(COMMA) {
            p.error_and_bump(unexpected_comma_message);
            continue;
        }

        let Some(parsed) = element(p) else { break };
        elements.push(parsed);

        if !p.eat(COMMA) {
            if first_set.contains(p.peek_kind()) {
                p.expect(COMMA);
            } else {
                break;
            }
        }
    }

    p.expect(ket);
    elements
}
