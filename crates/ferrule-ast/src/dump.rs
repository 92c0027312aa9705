//! S-expression rendering of the AST, used by tests and the CLI.

use std::fmt::Write as _;

use crate::nodes::*;
use crate::{AstContext, Identifier, SourceLoc, SourceRange};

/// Renders a whole source file. With `locations`, every node and name is
/// followed by its `line:col` position (one-based).
pub fn dump_source_file(ctx: &AstContext<'_>, items: &[Decl], locations: bool) -> String {
    let mut dumper = Dumper { ctx, locations, out: String::new(), depth: 0 };
    dumper.out.push_str("(source_file");
    for &item in items {
        dumper.child(|d| d.decl(item));
    }
    dumper.out.push_str(")\n");
    dumper.out
}

struct Dumper<'a, 'db> {
    ctx: &'a AstContext<'db>,
    locations: bool,
    out: String,
    depth: usize,
}

impl<'db> Dumper<'_, 'db> {
    fn child(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        _ = write!(self.out, "\n{:indent$}", "", indent = self.depth * 2);
        f(self);
        self.depth -= 1;
    }

    fn open(&mut self, name: &str, range: SourceRange) {
        self.out.push('(');
        self.out.push_str(name);
        if self.locations {
            self.out.push(' ');
            self.range(range);
        }
    }

    fn close(&mut self) {
        self.out.push(')');
    }

    fn loc(&mut self, loc: SourceLoc) {
        let ctx = self.ctx;
        match ctx.source_manager().line_col(ctx.db(), loc) {
            Some(lc) => {
                _ = write!(self.out, "{}:{}", lc.line + 1, lc.col + 1);
            }
            None => self.out.push('?'),
        }
    }

    fn range(&mut self, range: SourceRange) {
        self.out.push('@');
        self.loc(range.start);
        self.out.push_str("..");
        self.loc(range.end);
    }

    fn name(&mut self, name: Identifier<'db>, loc: SourceLoc) {
        _ = write!(self.out, " {:?}", name.text(self.ctx.db()));
        if self.locations {
            self.out.push('@');
            self.loc(loc);
        }
    }

    fn text(&mut self, text: Identifier<'db>) {
        _ = write!(self.out, " {}", text.text(self.ctx.db()));
    }

    fn null(&mut self, what: &str) {
        _ = write!(self.out, "(null {what})");
    }

    fn nullable<T: Copy>(
        &mut self,
        value: Option<T>,
        what: &str,
        f: impl FnOnce(&mut Self, T),
    ) {
        match value {
            Some(value) => f(self, value),
            None => self.null(what),
        }
    }

    fn decl(&mut self, decl: Decl) {
        let ctx = self.ctx;
        let data = ctx.decl(decl);
        match &data.kind {
            DeclKind::Func {
                name,
                name_loc,
                generic_params,
                params,
                result,
                where_clause,
                body,
                body_context: _,
            } => {
                self.open("func", data.range);
                self.name(*name, *name_loc);
                if let Some(list) = generic_params.get() {
                    self.child(|d| d.generic_params(list));
                }
                let params = params.get();
                self.child(|d| d.nullable(params, "params", Self::params));
                if let Some(result) = result.get() {
                    self.child(|d| {
                        d.out.push_str("(result ");
                        d.type_repr(result);
                        d.close();
                    });
                }
                if let Some(clause) = where_clause.get() {
                    self.child(|d| d.where_clause(clause));
                }
                let body = body.get();
                self.child(|d| d.nullable(body, "body", Self::stmt));
            }
            DeclKind::Struct { name, name_loc, generic_params, fields } => {
                self.open("struct", data.range);
                self.name(*name, *name_loc);
                if let Some(list) = generic_params.get() {
                    self.child(|d| d.generic_params(list));
                }
                for field in fields {
                    self.child(|d| {
                        d.out.push_str("(field");
                        d.name(field.name, field.name_loc);
                        d.out.push(' ');
                        d.nullable(field.ty.get(), "type", Self::type_repr);
                        d.close();
                    });
                }
            }
            DeclKind::PatternBinding { pattern, init } => {
                self.open("val", data.range);
                let (pattern, init) = (pattern.get(), init.get());
                self.child(|d| d.nullable(pattern, "pattern", Self::pattern));
                if let Some(init) = init {
                    self.child(|d| d.expr(init));
                }
            }
            DeclKind::Error => self.open("error_decl", data.range),
        }
        self.close();
    }

    fn generic_params(&mut self, list: GenericParamList) {
        let ctx = self.ctx;
        let data = ctx.generic_param_list(list);
        self.open("generic_params", data.range);
        for param in &data.params {
            self.name(param.name, param.name_loc);
        }
        self.close();
    }

    fn params(&mut self, list: ParameterList) {
        let ctx = self.ctx;
        let data = ctx.parameter_list(list);
        self.open("params", data.range);
        for param in &data.params {
            self.child(|d| {
                d.open("param", param.range);
                d.name(param.name, param.name_loc);
                if let Some(ty) = param.ty.get() {
                    d.out.push(' ');
                    d.type_repr(ty);
                }
                d.close();
            });
        }
        self.close();
    }

    fn where_clause(&mut self, clause: TrailingWhereClause) {
        let ctx = self.ctx;
        let data = ctx.trailing_where_clause(clause);
        self.open("where", data.range);
        for requirement in &data.requirements {
            self.child(|d| {
                d.out.push_str("(requirement ");
                d.nullable(requirement.subject.get(), "type", Self::type_repr);
                d.out.push(' ');
                d.nullable(requirement.constraint.get(), "type", Self::type_repr);
                d.close();
            });
        }
        self.close();
    }

    fn stmt(&mut self, stmt: Stmt) {
        let ctx = self.ctx;
        let data = ctx.stmt(stmt);
        match &data.kind {
            StmtKind::Brace { elements } => {
                self.open("brace", data.range);
                for &element in elements {
                    self.child(|d| match element {
                        BraceElement::Expr(expr) => d.expr(expr),
                        BraceElement::Stmt(stmt) => d.stmt(stmt),
                        BraceElement::Decl(decl) => d.decl(decl),
                    });
                }
            }
            StmtKind::Return { result } => {
                self.open("return", data.range);
                if let Some(result) = result.get() {
                    self.child(|d| d.expr(result));
                }
            }
            StmtKind::While { condition, body } => {
                self.open("while", data.range);
                let (condition, body) = (condition.get(), body.get());
                self.child(|d| d.nullable(condition, "condition", Self::expr));
                self.child(|d| d.nullable(body, "body", Self::stmt));
            }
            StmtKind::Error => self.open("error_stmt", data.range),
        }
        self.close();
    }

    fn expr(&mut self, expr: Expr) {
        let ctx = self.ctx;
        let data = ctx.expr(expr);
        match &data.kind {
            ExprKind::IntegerLiteral(text) => {
                self.open("integer", data.range);
                self.text(*text);
            }
            ExprKind::FloatLiteral(text) => {
                self.open("float", data.range);
                self.text(*text);
            }
            ExprKind::StringLiteral(text) => {
                self.open("string", data.range);
                self.text(*text);
            }
            ExprKind::BooleanLiteral(value) => {
                self.open("boolean", data.range);
                _ = write!(self.out, " {value}");
            }
            ExprKind::UnresolvedDeclRef { name, name_loc } => {
                self.open("decl_ref", data.range);
                self.name(*name, *name_loc);
            }
            ExprKind::Binary { lhs, op, op_loc, rhs } => {
                self.open("binary", data.range);
                self.name(*op, *op_loc);
                let (lhs, rhs) = (*lhs, rhs.get());
                self.child(|d| d.expr(lhs));
                self.child(|d| d.nullable(rhs, "rhs", Self::expr));
            }
            ExprKind::Prefix { op, op_loc, operand } => {
                self.open("prefix", data.range);
                self.name(*op, *op_loc);
                let operand = operand.get();
                self.child(|d| d.nullable(operand, "operand", Self::expr));
            }
            ExprKind::Postfix { operand, op, op_loc } => {
                self.open("postfix", data.range);
                self.name(*op, *op_loc);
                let operand = *operand;
                self.child(|d| d.expr(operand));
            }
            ExprKind::Paren { inner } => {
                self.open("paren", data.range);
                let inner = inner.get();
                self.child(|d| d.nullable(inner, "expr", Self::expr));
            }
            ExprKind::Tuple { elements } => {
                self.open("tuple", data.range);
                for &element in elements {
                    self.child(|d| d.expr(element));
                }
            }
            ExprKind::Call { callee, args } => {
                self.open("call", data.range);
                let callee = *callee;
                self.child(|d| d.expr(callee));
                for &arg in args {
                    self.child(|d| d.expr(arg));
                }
            }
            ExprKind::Member { base, name, name_loc } => {
                self.open("member", data.range);
                self.name(*name, *name_loc);
                let base = *base;
                self.child(|d| d.expr(base));
            }
            ExprKind::If { condition, then_branch, else_branch } => {
                self.open("if", data.range);
                match *condition {
                    IfCondition::Boolean(condition) => {
                        self.child(|d| d.nullable(condition.get(), "condition", Self::expr));
                    }
                    IfCondition::Binding { pattern, init } => self.child(|d| {
                        d.out.push_str("(binding_condition");
                        d.child(|d| d.nullable(pattern.get(), "pattern", Self::pattern));
                        d.child(|d| d.nullable(init.get(), "init", Self::expr));
                        d.close();
                    }),
                }
                let (then_branch, else_branch) = (then_branch.get(), else_branch.get());
                self.child(|d| d.nullable(then_branch, "then", Self::stmt));
                if let Some(else_branch) = else_branch {
                    self.child(|d| d.stmt(else_branch));
                }
            }
            ExprKind::Loop { body } => {
                self.open("loop", data.range);
                let body = body.get();
                self.child(|d| d.nullable(body, "body", Self::stmt));
            }
            ExprKind::StructLiteral { name, name_loc, fields } => {
                self.open("struct_literal", data.range);
                self.name(*name, *name_loc);
                for field in fields {
                    self.child(|d| {
                        d.out.push_str("(field_init");
                        d.name(field.name, field.name_loc);
                        d.out.push(' ');
                        d.nullable(field.value.get(), "value", Self::expr);
                        d.close();
                    });
                }
            }
            ExprKind::Error => self.open("error_expr", data.range),
        }
        self.close();
    }

    fn type_repr(&mut self, ty: TypeRepr) {
        let ctx = self.ctx;
        let data = ctx.type_repr(ty);
        match &data.kind {
            TypeReprKind::Ident { name, name_loc } => {
                self.open("type_ident", data.range);
                self.name(*name, *name_loc);
            }
            TypeReprKind::Tuple { elements } => {
                self.open("type_tuple", data.range);
                for &element in elements {
                    self.out.push(' ');
                    self.type_repr(element);
                }
            }
            TypeReprKind::Error => self.open("error_type", data.range),
        }
        self.close();
    }

    fn pattern(&mut self, pattern: Pattern) {
        let ctx = self.ctx;
        let data = ctx.pattern(pattern);
        match &data.kind {
            PatternKind::Named { name, name_loc } => {
                self.open("named", data.range);
                self.name(*name, *name_loc);
            }
            PatternKind::Any => self.open("any", data.range),
            PatternKind::Tuple { elements } => {
                self.open("pattern_tuple", data.range);
                for &element in elements {
                    self.out.push(' ');
                    self.pattern(element);
                }
            }
            PatternKind::Literal(text) => {
                self.open("pattern_literal", data.range);
                self.text(*text);
            }
            PatternKind::Typed { pattern, ty } => {
                self.open("typed", data.range);
                self.out.push(' ');
                self.pattern(*pattern);
                self.out.push(' ');
                self.nullable(ty.get(), "type", Self::type_repr);
            }
            PatternKind::Error => self.open("error_pattern", data.range),
        }
        self.close();
    }
}
