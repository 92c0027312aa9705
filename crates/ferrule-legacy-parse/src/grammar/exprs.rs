use ferrule_ast::nodes::*;
use ferrule_ast::AsNullable as _;
use ferrule_syntax::SyntaxKind::*;
use ferrule_syntax::SyntaxSet;

use super::items::{self, ITEM_FIRST};
use super::{delimited, patterns};
use crate::parser::Parser;

pub(crate) const EXPR_FIRST: SyntaxSet = SyntaxSet::new([
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,
    TRUE_KW,
    FALSE_KW,
    NAME,
    LEFT_PAREN,
    IF_KW,
    LOOP_KW,
    PREFIX_OPERATOR,
]);

const EXPR_RECOVERY: SyntaxSet = ITEM_FIRST.union(SyntaxSet::new([
    COMMA,
    SEMICOLON,
    RIGHT_BRACKET,
    LEFT_BRACE,
    WHILE_KW,
    RETURN_KW,
]));

/// One element of a block. `None` when nothing usable was parsed.
pub(crate) fn brace_element(p: &mut Parser<'_, '_>) -> Option<BraceElement> {
    match p.peek_kind() {
        FUN_KW | STRUCT_KW | VAL_KW => Some(BraceElement::Decl(items::item(p))),
        WHILE_KW | RETURN_KW => stmt(p).map(BraceElement::Stmt),
        _ => {
            let expr = expr(p, false)?;
            p.eat(SEMICOLON);
            Some(BraceElement::Expr(expr))
        }
    }
}

pub(crate) fn stmt(p: &mut Parser<'_, '_>) -> Option<Stmt> {
    match p.peek_kind() {
        WHILE_KW => {
            let start = p.bump();
            let condition = expr(p, true).as_nullable();
            let body = block(p).as_nullable();
            Some(p.stmt_node(StmtKind::While { condition, body }, start))
        }
        RETURN_KW => {
            let start = p.bump();
            let result = if p.at_set(EXPR_FIRST) { expr(p, false) } else { None };
            p.eat(SEMICOLON);
            Some(p.stmt_node(StmtKind::Return { result: result.as_nullable() }, start))
        }
        LEFT_BRACE => block(p),
        _ => None,
    }
}

pub(crate) fn block(p: &mut Parser<'_, '_>) -> Option<Stmt> {
    if !p.at(LEFT_BRACE) {
        p.error("expected a block");
        return None;
    }

    let start = p.bump();
    let mut elements = Vec::new();
    while !p.at(RIGHT_BRACE) && !p.at(EOF) {
        let before = p.loc();
        elements.extend(brace_element(p));
        if p.loc() == before {
            p.error_and_bump("unexpected token");
        }
    }
    p.expect(RIGHT_BRACE);

    Some(p.stmt_node(StmtKind::Brace { elements }, start))
}

/// Parses an expression. In `basic` expressions a `{` after a name opens the
/// following block instead of a struct literal.
pub(crate) fn expr(p: &mut Parser<'_, '_>, basic: bool) -> Option<Expr> {
    let lhs = unary_expr(p, basic)?;

    if !p.at(BINARY_OPERATOR) && !p.at(EQ) {
        return Some(lhs);
    }

    let start = p.ctx().expr(lhs).range.start;
    let (op, op_loc) = p.bump_text();
    let rhs = expr(p, basic).as_nullable();
    Some(p.expr_node(ExprKind::Binary { lhs, op, op_loc, rhs }, start))
}

fn unary_expr(p: &mut Parser<'_, '_>, basic: bool) -> Option<Expr> {
    if !p.at(PREFIX_OPERATOR) {
        return postfix_expr(p, basic);
    }

    let (op, op_loc) = p.bump_text();
    let operand = unary_expr(p, basic).as_nullable();
    Some(p.expr_node(ExprKind::Prefix { op, op_loc, operand }, op_loc))
}

fn postfix_expr(p: &mut Parser<'_, '_>, basic: bool) -> Option<Expr> {
    let mut lhs = primary_expr(p, basic)?;

    loop {
        let start = p.ctx().expr(lhs).range.start;
        let kind = match p.peek_kind() {
            POSTFIX_OPERATOR => {
                let (op, op_loc) = p.bump_text();
                ExprKind::Postfix { operand: lhs, op, op_loc }
            }
            LEFT_PAREN => {
                let args = delimited(p, RIGHT_PAREN, "expected an argument", EXPR_FIRST, |p| {
                    expr(p, false)
                });
                ExprKind::Call { callee: lhs, args }
            }
            DOT => {
                p.bump();
                let (name, name_loc) = p.name();
                ExprKind::Member { base: lhs, name, name_loc }
            }
            _ => return Some(lhs),
        };
        lhs = p.expr_node(kind, start);
    }
}

fn primary_expr(p: &mut Parser<'_, '_>, basic: bool) -> Option<Expr> {
    let start = p.loc();
    let kind = match p.peek_kind() {
        INT_NUMBER => ExprKind::IntegerLiteral(p.bump_text().0),
        FLOAT_NUMBER => ExprKind::FloatLiteral(p.bump_text().0),
        STRING => ExprKind::StringLiteral(p.bump_text().0),
        TRUE_KW | FALSE_KW => {
            let value = p.at(TRUE_KW);
            p.bump();
            ExprKind::BooleanLiteral(value)
        }
        NAME => {
            let (name, name_loc) = p.bump_text();
            if !basic && p.at(LEFT_BRACE) {
                let fields = delimited(
                    p,
                    RIGHT_BRACE,
                    "expected field initializer",
                    SyntaxSet::new([NAME]),
                    field_init,
                );
                ExprKind::StructLiteral { name, name_loc, fields }
            } else {
                ExprKind::UnresolvedDeclRef { name, name_loc }
            }
        }
        LEFT_PAREN => paren_or_tuple_expr(p),
        IF_KW => return Some(if_expr(p)),
        LOOP_KW => {
            p.bump();
            ExprKind::Loop { body: block(p).as_nullable() }
        }
        _ => {
            p.error_recover("expected an expression", EXPR_RECOVERY);
            return None;
        }
    };
    Some(p.expr_node(kind, start))
}

fn field_init<'db>(p: &mut Parser<'_, 'db>) -> Option<FieldInit<'db>> {
    if !p.at(NAME) {
        return None;
    }

    let (name, name_loc) = p.bump_text();
    p.expect(COLON);
    let value = expr(p, false).as_nullable();
    Some(FieldInit { name, name_loc, value })
}

fn paren_or_tuple_expr<'db>(p: &mut Parser<'_, 'db>) -> ExprKind<'db> {
    p.bump();

    if p.eat(RIGHT_PAREN) {
        return ExprKind::Tuple { elements: Vec::new() };
    }

    let first = expr(p, false);
    if !p.at(COMMA) {
        p.expect(RIGHT_PAREN);
        return ExprKind::Paren { inner: first.as_nullable() };
    }

    let mut elements: Vec<_> = first.into_iter().collect();
    while p.eat(COMMA) {
        if p.at(RIGHT_PAREN) {
            break;
        }
        let Some(element) = expr(p, false) else { break };
        elements.push(element);
    }
    p.expect(RIGHT_PAREN);
    ExprKind::Tuple { elements }
}

pub(crate) fn if_expr(p: &mut Parser<'_, '_>) -> Expr {
    let start = p.bump();

    let condition = if p.eat(VAL_KW) {
        let pattern = patterns::matching_pattern(p).as_nullable();
        p.expect(EQ);
        let init = expr(p, true).as_nullable();
        IfCondition::Binding { pattern, init }
    } else {
        IfCondition::Boolean(expr(p, true).as_nullable())
    };

    let then_branch = block(p).as_nullable();

    let else_branch = if p.eat(ELSE_KW) {
        if p.at(IF_KW) { Some(else_if(p)) } else { block(p) }
    } else {
        None
    };

    let kind = ExprKind::If { condition, then_branch, else_branch: else_branch.as_nullable() };
    p.expr_node(kind, start)
}

/// `else if` is stored as a block holding the nested `if`.
fn else_if(p: &mut Parser<'_, '_>) -> Stmt {
    let nested = if_expr(p);
    let range = p.ctx().expr(nested).range;
    let elements = vec![BraceElement::Expr(nested)];
    p.ctx().alloc_stmt(StmtData { kind: StmtKind::Brace { elements }, range })
}
