use ferrule_syntax::SyntaxKind::{self, *};
use ferrule_syntax::SyntaxSet;

use crate::parser::Parser;

pub(crate) mod exprs;
pub(crate) mod items;
mod patterns;
mod types;

/// Consumes a `NAME` token directly into the current node.
pub(crate) fn name(p: &mut Parser<'_>, recovery: SyntaxSet) {
    if !p.eat(NAME) {
        p.error_recover("expected identifier", recovery);
    }
}

/// Parses `bra (element (delim element)* delim?)? ket`.
///
/// `parser` returns `false` when it could not parse an element; `first_set`
/// decides whether a missing delimiter is reported or ends the list.
pub(crate) fn delimited(
    p: &mut Parser<'_>,
    bra: SyntaxKind,
    ket: SyntaxKind,
    delim: SyntaxKind,
    unexpected_delim_message: &'static str,
    first_set: SyntaxSet,
    mut parser: impl FnMut(&mut Parser<'_>) -> bool,
) {
    debug_assert_eq!(p.peek_kind(), bra);
    p.advance();

    while !p.at(ket) && !p.at(EOF) {
        if p.at(delim) {
            let m = p.start();
            p.error(unexpected_delim_message);
            p.advance();
            m.complete(p, ERROR);
            continue;
        }

        if !parser(p) {
            break;
        }

        if !p.eat(delim) {
            if first_set.contains(p.peek_kind()) {
                p.expect(delim);
            } else {
                break;
            }
        }
    }

    p.expect(ket);
}

/// Runs `rule` and bumps one token into an `ERROR` node if it consumed nothing.
pub(crate) fn with_progress(p: &mut Parser<'_>, rule: impl FnOnce(&mut Parser<'_>)) {
    let before = p.position();
    rule(p);
    if p.position() == before && !p.at(EOF) {
        p.error_and_bump("unexpected token");
    }
}
