use ferrule_ast::nodes::*;
use ferrule_ast::{AsNullable as _, LegacyParse, SourceRange};
use ferrule_syntax::ast::{self, HasName as _, Node as _};

use crate::AstGen;
use crate::identifiers::BridgedIdentifier as _;
use crate::locations::{BridgedSourceLoc as _, node_source_range};

impl<'db, L: LegacyParse<'db> + ?Sized> AstGen<'_, 'db, L> {
    /// Generates the top-level declarations of `module`.
    pub fn generate_source_file(&mut self, module: ast::Module<'_>) -> Vec<Decl> {
        module.items().map(|item| self.generate_item(item)).collect()
    }

    fn range<'a>(&self, node: impl ast::Node<'a>) -> SourceRange {
        node_source_range(node.syntax(), self.buffer)
    }

    fn generate_item(&mut self, item: ast::Item<'_>) -> Decl {
        match item {
            ast::Item::Fn(func) => self.generate_fn(func),
            ast::Item::Struct(node) => self.generate_decl_with_legacy(node.syntax()),
            ast::Item::Val(val) => self.generate_val(val),
        }
    }

    fn generate_fn(&mut self, func: ast::Fn<'_>) -> Decl {
        let (name, name_loc) = func.name().bridged_identifier_and_source_loc(self.ctx, self.buffer);
        let generic_params =
            func.generic_param_list().map(|list| self.generate_generic_params(list));
        let params = func.param_list().map(|list| self.generate_params(list));
        let result =
            func.return_type().and_then(ast::ReturnType::ty).map(|ty| self.generate_type(ty));
        let where_clause = func.where_clause().map(|clause| self.generate_where_clause(clause));

        let body_context = self.ctx.new_function_context(name, self.dc);
        let body = self.in_context(body_context, |this| {
            func.body().map(|body| this.generate_block(body))
        });

        let kind = DeclKind::Func {
            name,
            name_loc,
            generic_params: generic_params.as_nullable(),
            params: params.as_nullable(),
            result: result.as_nullable(),
            where_clause: where_clause.as_nullable(),
            body: body.as_nullable(),
            body_context,
        };
        self.alloc_decl(kind, self.range(func))
    }

    fn generate_generic_params(&mut self, list: ast::GenericParamList<'_>) -> GenericParamList {
        let params = list
            .params()
            .map(|param| {
                let (name, name_loc) =
                    param.name().bridged_identifier_and_source_loc(self.ctx, self.buffer);
                GenericParam { name, name_loc }
            })
            .collect();
        let range = self.range(list);
        self.ctx.alloc_generic_param_list(GenericParamListData { params, range })
    }

    fn generate_params(&mut self, list: ast::ParamList<'_>) -> ParameterList {
        let params = list
            .params()
            .map(|param| {
                let (name, name_loc) =
                    param.name().bridged_identifier_and_source_loc(self.ctx, self.buffer);
                let ty = param
                    .type_annotation()
                    .and_then(ast::TypeAnnotation::ty)
                    .map(|ty| self.generate_type(ty));
                Param { name, name_loc, ty: ty.as_nullable(), range: self.range(param) }
            })
            .collect();
        let range = self.range(list);
        self.ctx.alloc_parameter_list(ParameterListData { params, range })
    }

    fn generate_where_clause(&mut self, clause: ast::WhereClause<'_>) -> TrailingWhereClause {
        let requirements = clause
            .predicates()
            .map(|predicate| Requirement {
                subject: predicate.subject().map(|ty| self.generate_type(ty)).as_nullable(),
                constraint: predicate.constraint().map(|ty| self.generate_type(ty)).as_nullable(),
                colon_loc: predicate.colon().bridged_source_loc(self.buffer),
            })
            .collect();
        let range = self.range(clause);
        self.ctx.alloc_trailing_where_clause(TrailingWhereClauseData { requirements, range })
    }

    fn generate_val(&mut self, val: ast::ValDecl<'_>) -> Decl {
        let mut pattern = val.pattern().map(|pattern| self.generate_binding_pattern(pattern));
        if let Some(annotation) = val.type_annotation() {
            let inner = pattern.unwrap_or_else(|| {
                let colon = annotation.colon().bridged_source_loc(self.buffer);
                let range = SourceRange::new(colon, colon);
                self.ctx.alloc_pattern(PatternData { kind: PatternKind::Error, range })
            });
            let ty = annotation.ty().map(|ty| self.generate_type(ty)).as_nullable();
            let start = self.ctx.pattern(inner).range.start;
            let end = annotation.syntax().last_token().bridged_source_loc(self.buffer);
            let kind = PatternKind::Typed { pattern: inner, ty };
            let range = SourceRange::new(start, end);
            pattern = Some(self.ctx.alloc_pattern(PatternData { kind, range }));
        }
        let init = val.initializer().map(|init| self.generate_expr(init));

        let kind =
            DeclKind::PatternBinding { pattern: pattern.as_nullable(), init: init.as_nullable() };
        self.alloc_decl(kind, self.range(val))
    }

    fn generate_block(&mut self, block: ast::Block<'_>) -> Stmt {
        let elements = block.stmts().map(|stmt| self.generate_brace_element(stmt)).collect();
        let range = self.range(block);
        self.ctx.alloc_stmt(StmtData { kind: StmtKind::Brace { elements }, range })
    }

    fn generate_brace_element(&mut self, stmt: ast::Stmt<'_>) -> BraceElement {
        match stmt {
            ast::Stmt::Fn(func) => BraceElement::Decl(self.generate_fn(func)),
            ast::Stmt::Struct(node) => {
                BraceElement::Decl(self.generate_decl_with_legacy(node.syntax()))
            }
            ast::Stmt::Val(val) => BraceElement::Decl(self.generate_val(val)),
            ast::Stmt::While(node) => {
                BraceElement::Stmt(self.generate_stmt_with_legacy(node.syntax()))
            }
            ast::Stmt::Return(ret) => {
                let result = ret.expr().map(|expr| self.generate_expr(expr));
                let kind = StmtKind::Return { result: result.as_nullable() };
                let range = self.range(ret);
                BraceElement::Stmt(self.ctx.alloc_stmt(StmtData { kind, range }))
            }
            ast::Stmt::Expr(stmt) => BraceElement::Expr(match stmt.expr() {
                Some(expr) => self.generate_expr(expr),
                None => self.alloc_expr(ExprKind::Error, self.range(stmt)),
            }),
        }
    }

    /// Generates an expression that starts a full expression, where the
    /// legacy parser can take over.
    fn generate_expr(&mut self, expr: ast::Expr<'_>) -> Expr {
        if is_expr_migrated(expr) {
            self.generate_migrated_expr(expr)
        } else {
            self.generate_expr_with_legacy(expr.syntax())
        }
    }

    fn generate_migrated_expr(&mut self, expr: ast::Expr<'_>) -> Expr {
        let kind = match expr {
            ast::Expr::Literal(literal) => match literal.kind() {
                Some(ast::LiteralKind::Int(token)) => {
                    ExprKind::IntegerLiteral(token.bridged_identifier(self.ctx))
                }
                Some(ast::LiteralKind::Float(token)) => {
                    ExprKind::FloatLiteral(token.bridged_identifier(self.ctx))
                }
                Some(ast::LiteralKind::String(token)) => {
                    ExprKind::StringLiteral(token.bridged_identifier(self.ctx))
                }
                Some(ast::LiteralKind::Bool(value)) => ExprKind::BooleanLiteral(value),
                None => ExprKind::Error,
            },
            ast::Expr::Path(path) => {
                let (name, name_loc) =
                    path.name().bridged_identifier_and_source_loc(self.ctx, self.buffer);
                ExprKind::UnresolvedDeclRef { name, name_loc }
            }
            ast::Expr::Binary(binary) => {
                let lhs = self.generate_subexpr(binary.lhs(), expr);
                let (op, op_loc) =
                    binary.op().bridged_identifier_and_source_loc(self.ctx, self.buffer);
                let rhs = binary.rhs().map(|rhs| self.generate_expr(rhs));
                ExprKind::Binary { lhs, op, op_loc, rhs: rhs.as_nullable() }
            }
            ast::Expr::Prefix(prefix) => {
                let (op, op_loc) =
                    prefix.op().bridged_identifier_and_source_loc(self.ctx, self.buffer);
                let operand = prefix.expr().map(|operand| self.generate_migrated_expr(operand));
                ExprKind::Prefix { op, op_loc, operand: operand.as_nullable() }
            }
            ast::Expr::Paren(paren) => {
                let inner = paren.expr().map(|inner| self.generate_expr(inner));
                ExprKind::Paren { inner: inner.as_nullable() }
            }
            ast::Expr::Tuple(tuple) => {
                let elements = tuple.exprs().map(|element| self.generate_expr(element)).collect();
                ExprKind::Tuple { elements }
            }
            ast::Expr::Call(call) => {
                let callee = self.generate_subexpr(call.callee(), expr);
                let args = match call.arg_list() {
                    Some(list) => list.args().map(|arg| self.generate_expr(arg)).collect(),
                    None => Vec::new(),
                };
                ExprKind::Call { callee, args }
            }
            ast::Expr::Member(member) => {
                let base = self.generate_subexpr(member.base(), expr);
                let (name, name_loc) =
                    member.name().bridged_identifier_and_source_loc(self.ctx, self.buffer);
                ExprKind::Member { base, name, name_loc }
            }
            ast::Expr::If(if_expr) => return self.generate_if(if_expr),
            ast::Expr::Postfix(_) | ast::Expr::Loop(_) | ast::Expr::StructLiteral(_) => {
                unreachable!("{:?} is handled by the legacy parser", expr.syntax().kind())
            }
        };
        self.alloc_expr(kind, self.range(expr))
    }

    /// Left operands, callees and member bases. They were checked together
    /// with their parent, so they never fall back on their own.
    fn generate_subexpr(&mut self, expr: Option<ast::Expr<'_>>, parent: ast::Expr<'_>) -> Expr {
        match expr {
            Some(expr) => self.generate_migrated_expr(expr),
            None => self.alloc_expr(ExprKind::Error, self.range(parent)),
        }
    }

    fn generate_if(&mut self, if_expr: ast::IfExpr<'_>) -> Expr {
        let condition = match if_expr.condition() {
            Some(ast::Condition::Val(condition)) => {
                let pattern =
                    condition.pattern().map(|pattern| self.generate_matching_pattern(pattern));
                let init = condition.initializer().map(|init| self.generate_expr(init));
                IfCondition::Binding { pattern: pattern.as_nullable(), init: init.as_nullable() }
            }
            Some(ast::Condition::Expr(condition)) => {
                IfCondition::Boolean(self.generate_expr(condition).into())
            }
            None => IfCondition::Boolean(NullableExpr::NULL),
        };

        let then_branch = if_expr.then_branch().map(|block| self.generate_block(block));

        let else_branch = match if_expr.else_branch() {
            Some(ast::ElseBranch::If(nested)) => {
                let nested = self.generate_if(nested);
                let range = self.ctx.expr(nested).range;
                let elements = vec![BraceElement::Expr(nested)];
                Some(self.ctx.alloc_stmt(StmtData { kind: StmtKind::Brace { elements }, range }))
            }
            Some(ast::ElseBranch::Block(block)) => Some(self.generate_block(block)),
            None => None,
        };

        let kind = ExprKind::If {
            condition,
            then_branch: then_branch.as_nullable(),
            else_branch: else_branch.as_nullable(),
        };
        self.alloc_expr(kind, self.range(if_expr))
    }

    fn generate_type(&mut self, ty: ast::Type<'_>) -> TypeRepr {
        match ty {
            ast::Type::Path(path) => {
                let (name, name_loc) =
                    path.name().bridged_identifier_and_source_loc(self.ctx, self.buffer);
                let range = self.range(path);
                self.ctx.alloc_type_repr(TypeReprData {
                    kind: TypeReprKind::Ident { name, name_loc },
                    range,
                })
            }
            ast::Type::Tuple(tuple) => self.generate_type_with_legacy(tuple.syntax()),
        }
    }

    fn generate_binding_pattern(&mut self, pattern: ast::Pattern<'_>) -> Pattern {
        match self.generate_simple_pattern(pattern) {
            Some(pattern) => pattern,
            None => self.generate_binding_pattern_with_legacy(pattern.syntax()),
        }
    }

    fn generate_matching_pattern(&mut self, pattern: ast::Pattern<'_>) -> Pattern {
        match self.generate_simple_pattern(pattern) {
            Some(pattern) => pattern,
            None => self.generate_matching_pattern_with_legacy(pattern.syntax()),
        }
    }

    /// Names and wildcards; `None` for the patterns left to the legacy parser.
    fn generate_simple_pattern(&mut self, pattern: ast::Pattern<'_>) -> Option<Pattern> {
        let kind = match pattern {
            ast::Pattern::Name(name) => {
                let (name, name_loc) =
                    name.name().bridged_identifier_and_source_loc(self.ctx, self.buffer);
                PatternKind::Named { name, name_loc }
            }
            ast::Pattern::Wildcard(_) => PatternKind::Any,
            ast::Pattern::Tuple(_) | ast::Pattern::Literal(_) => return None,
        };
        let range = self.range(pattern);
        Some(self.ctx.alloc_pattern(PatternData { kind, range }))
    }

    fn alloc_expr(&mut self, kind: ExprKind<'db>, range: SourceRange) -> Expr {
        self.ctx.alloc_expr(ExprData { kind, range })
    }

    fn alloc_decl(&mut self, kind: DeclKind<'db>, range: SourceRange) -> Decl {
        let context = self.dc;
        self.ctx.alloc_decl(DeclData { kind, range, context })
    }
}

/// Whether the generator translates `expr` itself. The legacy parser can
/// only be started where a whole expression begins, so left operands,
/// callees, member bases and prefix operands are part of the decision.
pub fn is_expr_migrated(expr: ast::Expr<'_>) -> bool {
    match expr {
        ast::Expr::Postfix(_) | ast::Expr::Loop(_) | ast::Expr::StructLiteral(_) => false,
        ast::Expr::Binary(binary) => binary.lhs().is_none_or(is_expr_migrated),
        ast::Expr::Prefix(prefix) => prefix.expr().is_none_or(is_expr_migrated),
        ast::Expr::Call(call) => call.callee().is_none_or(is_expr_migrated),
        ast::Expr::Member(member) => member.base().is_none_or(is_expr_migrated),
        ast::Expr::Literal(_)
        | ast::Expr::Path(_)
        | ast::Expr::Paren(_)
        | ast::Expr::Tuple(_)
        | ast::Expr::If(_) => true,
    }
}
