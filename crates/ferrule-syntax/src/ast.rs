use crate::SyntaxKind::{self, *};
use crate::{SyntaxNode, SyntaxToken};

pub trait Node<'a>: Copy {
    fn can_cast(kind: SyntaxKind) -> bool;

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self>
    where
        Self: Sized;

    fn syntax(self) -> SyntaxNode<'a>;
}

pub trait HasName<'a>: Node<'a> {
    fn name(self) -> Option<SyntaxToken<'a>> {
        self.syntax().child_token(NAME)
    }
}

fn child<'a, N: Node<'a>>(parent: SyntaxNode<'a>) -> Option<N> {
    parent.children().find_map(N::cast)
}

fn children<'a, N: Node<'a> + 'a>(parent: SyntaxNode<'a>) -> impl Iterator<Item = N> + 'a {
    parent.children().filter_map(N::cast)
}

macro_rules! ast_nodes {
    ($($name:ident => $kind:ident),* $(,)?) => {$(
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<'a>(SyntaxNode<'a>);

        impl<'a> Node<'a> for $name<'a> {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == $kind
            }

            fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
                Self::can_cast(syntax.kind()).then_some(Self(syntax))
            }

            fn syntax(self) -> SyntaxNode<'a> {
                self.0
            }
        }
    )*};
}

macro_rules! ast_enums {
    ($($name:ident { $($variant:ident($node:ident)),* $(,)? })*) => {$(
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name<'a> {
            $($variant($node<'a>),)*
        }

        impl<'a> Node<'a> for $name<'a> {
            fn can_cast(kind: SyntaxKind) -> bool {
                $($node::can_cast(kind))||*
            }

            fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
                $(if let Some(it) = $node::cast(syntax) {
                    return Some(Self::$variant(it));
                })*
                None
            }

            fn syntax(self) -> SyntaxNode<'a> {
                match self {
                    $(Self::$variant(it) => it.syntax(),)*
                }
            }
        }
    )*};
}

ast_nodes! {
    Module => MODULE,
    Fn => FN,
    Struct => STRUCT,
    FieldList => FIELD_LIST,
    Field => FIELD,
    GenericParamList => GENERIC_PARAM_LIST,
    GenericParam => GENERIC_PARAM,
    ParamList => PARAM_LIST,
    Param => PARAM,
    TypeAnnotation => TYPE_ANNOTATION,
    ReturnType => RETURN_TYPE,
    WhereClause => WHERE_CLAUSE,
    WherePredicate => WHERE_PREDICATE,
    Block => BLOCK,

    ValDecl => VAL_DECL,
    ExprStmt => EXPR_STMT,
    WhileStmt => WHILE_STMT,
    ReturnStmt => RETURN_STMT,

    Literal => LITERAL,
    PathExpr => PATH_EXPR,
    BinaryExpr => BINARY_EXPR,
    PrefixExpr => PREFIX_EXPR,
    PostfixExpr => POSTFIX_EXPR,
    ParenExpr => PAREN_EXPR,
    TupleExpr => TUPLE_EXPR,
    CallExpr => CALL_EXPR,
    ArgList => ARG_LIST,
    MemberExpr => MEMBER_EXPR,
    IfExpr => IF_EXPR,
    ValCondition => VAL_CONDITION,
    LoopExpr => LOOP_EXPR,
    StructLiteral => STRUCT_LITERAL,
    FieldInit => FIELD_INIT,

    PathType => PATH_TYPE,
    TupleType => TUPLE_TYPE,

    NamePattern => NAME_PATTERN,
    WildcardPattern => WILDCARD_PATTERN,
    TuplePattern => TUPLE_PATTERN,
    LiteralPattern => LITERAL_PATTERN,
}

ast_enums! {
    Item {
        Fn(Fn),
        Struct(Struct),
        Val(ValDecl),
    }

    Stmt {
        Fn(Fn),
        Struct(Struct),
        Val(ValDecl),
        While(WhileStmt),
        Return(ReturnStmt),
        Expr(ExprStmt),
    }

    Expr {
        Literal(Literal),
        Path(PathExpr),
        Binary(BinaryExpr),
        Prefix(PrefixExpr),
        Postfix(PostfixExpr),
        Paren(ParenExpr),
        Tuple(TupleExpr),
        Call(CallExpr),
        Member(MemberExpr),
        If(IfExpr),
        Loop(LoopExpr),
        StructLiteral(StructLiteral),
    }

    Type {
        Path(PathType),
        Tuple(TupleType),
    }

    Pattern {
        Name(NamePattern),
        Wildcard(WildcardPattern),
        Tuple(TuplePattern),
        Literal(LiteralPattern),
    }

    Condition {
        Val(ValCondition),
        Expr(Expr),
    }

    ElseBranch {
        If(IfExpr),
        Block(Block),
    }
}

impl<'a> HasName<'a> for Fn<'a> {}
impl<'a> HasName<'a> for Struct<'a> {}
impl<'a> HasName<'a> for Field<'a> {}
impl<'a> HasName<'a> for GenericParam<'a> {}
impl<'a> HasName<'a> for Param<'a> {}
impl<'a> HasName<'a> for PathExpr<'a> {}
impl<'a> HasName<'a> for MemberExpr<'a> {}
impl<'a> HasName<'a> for StructLiteral<'a> {}
impl<'a> HasName<'a> for FieldInit<'a> {}
impl<'a> HasName<'a> for PathType<'a> {}
impl<'a> HasName<'a> for NamePattern<'a> {}

impl<'a> Module<'a> {
    pub fn new(root: SyntaxNode<'a>) -> Option<Self> {
        Self::cast(root)
    }

    pub fn items(self) -> impl Iterator<Item = Item<'a>> + 'a {
        children(self.0)
    }

    pub fn eof(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(EOF)
    }
}

impl<'a> Fn<'a> {
    pub fn fun_kw(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(FUN_KW)
    }

    pub fn generic_param_list(self) -> Option<GenericParamList<'a>> {
        child(self.0)
    }

    pub fn param_list(self) -> Option<ParamList<'a>> {
        child(self.0)
    }

    pub fn return_type(self) -> Option<ReturnType<'a>> {
        child(self.0)
    }

    pub fn where_clause(self) -> Option<WhereClause<'a>> {
        child(self.0)
    }

    pub fn body(self) -> Option<Block<'a>> {
        child(self.0)
    }
}

impl<'a> Struct<'a> {
    pub fn generic_param_list(self) -> Option<GenericParamList<'a>> {
        child(self.0)
    }

    pub fn field_list(self) -> Option<FieldList<'a>> {
        child(self.0)
    }
}

impl<'a> FieldList<'a> {
    pub fn fields(self) -> impl Iterator<Item = Field<'a>> + 'a {
        children(self.0)
    }
}

impl<'a> Field<'a> {
    pub fn ty(self) -> Option<Type<'a>> {
        child(self.0)
    }
}

impl<'a> GenericParamList<'a> {
    pub fn l_bracket(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(LEFT_BRACKET)
    }

    pub fn params(self) -> impl Iterator<Item = GenericParam<'a>> + 'a {
        children(self.0)
    }

    pub fn r_bracket(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(RIGHT_BRACKET)
    }
}

impl<'a> ParamList<'a> {
    pub fn l_paren(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(LEFT_PAREN)
    }

    pub fn params(self) -> impl Iterator<Item = Param<'a>> + 'a {
        children(self.0)
    }

    pub fn r_paren(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(RIGHT_PAREN)
    }
}

impl<'a> Param<'a> {
    pub fn type_annotation(self) -> Option<TypeAnnotation<'a>> {
        child(self.0)
    }
}

impl<'a> TypeAnnotation<'a> {
    pub fn colon(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(COLON)
    }

    pub fn ty(self) -> Option<Type<'a>> {
        child(self.0)
    }
}

impl<'a> ReturnType<'a> {
    pub fn ty(self) -> Option<Type<'a>> {
        child(self.0)
    }
}

impl<'a> WhereClause<'a> {
    pub fn where_kw(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(WHERE_KW)
    }

    pub fn predicates(self) -> impl Iterator<Item = WherePredicate<'a>> + 'a {
        children(self.0)
    }
}

impl<'a> WherePredicate<'a> {
    pub fn subject(self) -> Option<Type<'a>> {
        children(self.0).next()
    }

    pub fn colon(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(COLON)
    }

    pub fn constraint(self) -> Option<Type<'a>> {
        children(self.0).nth(1)
    }
}

impl<'a> Block<'a> {
    pub fn l_brace(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(LEFT_BRACE)
    }

    pub fn stmts(self) -> impl Iterator<Item = Stmt<'a>> + 'a {
        children(self.0)
    }

    pub fn r_brace(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(RIGHT_BRACE)
    }
}

impl<'a> ValDecl<'a> {
    pub fn val_kw(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(VAL_KW)
    }

    pub fn pattern(self) -> Option<Pattern<'a>> {
        child(self.0)
    }

    pub fn type_annotation(self) -> Option<TypeAnnotation<'a>> {
        child(self.0)
    }

    pub fn initializer(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

impl<'a> ExprStmt<'a> {
    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

impl<'a> WhileStmt<'a> {
    pub fn condition(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn body(self) -> Option<Block<'a>> {
        child(self.0)
    }
}

impl<'a> ReturnStmt<'a> {
    pub fn return_kw(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(RETURN_KW)
    }

    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

pub enum LiteralKind<'a> {
    Int(SyntaxToken<'a>),
    Float(SyntaxToken<'a>),
    String(SyntaxToken<'a>),
    Bool(bool),
}

impl<'a> Literal<'a> {
    pub fn token(self) -> Option<SyntaxToken<'a>> {
        self.0.child_tokens().next()
    }

    pub fn kind(self) -> Option<LiteralKind<'a>> {
        let token = self.token()?;
        let kind = match token.kind() {
            INT_NUMBER => LiteralKind::Int(token),
            FLOAT_NUMBER => LiteralKind::Float(token),
            STRING => LiteralKind::String(token),
            TRUE_KW => LiteralKind::Bool(true),
            FALSE_KW => LiteralKind::Bool(false),
            _ => return None,
        };
        Some(kind)
    }
}

impl<'a> BinaryExpr<'a> {
    pub fn lhs(self) -> Option<Expr<'a>> {
        children(self.0).next()
    }

    pub fn op(self) -> Option<SyntaxToken<'a>> {
        self.0.child_tokens().find(|token| matches!(token.kind(), BINARY_OPERATOR | EQ))
    }

    pub fn rhs(self) -> Option<Expr<'a>> {
        children(self.0).nth(1)
    }
}

impl<'a> PrefixExpr<'a> {
    pub fn op(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(PREFIX_OPERATOR)
    }

    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

impl<'a> PostfixExpr<'a> {
    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn op(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(POSTFIX_OPERATOR)
    }
}

impl<'a> ParenExpr<'a> {
    pub fn l_paren(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(LEFT_PAREN)
    }

    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn r_paren(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(RIGHT_PAREN)
    }
}

impl<'a> TupleExpr<'a> {
    pub fn l_paren(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(LEFT_PAREN)
    }

    pub fn exprs(self) -> impl Iterator<Item = Expr<'a>> + 'a {
        children(self.0)
    }

    pub fn r_paren(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(RIGHT_PAREN)
    }
}

impl<'a> CallExpr<'a> {
    pub fn callee(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn arg_list(self) -> Option<ArgList<'a>> {
        child(self.0)
    }
}

impl<'a> ArgList<'a> {
    pub fn l_paren(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(LEFT_PAREN)
    }

    pub fn args(self) -> impl Iterator<Item = Expr<'a>> + 'a {
        children(self.0)
    }

    pub fn r_paren(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(RIGHT_PAREN)
    }
}

impl<'a> MemberExpr<'a> {
    pub fn base(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn dot(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(DOT)
    }
}

impl<'a> IfExpr<'a> {
    pub fn if_kw(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(IF_KW)
    }

    pub fn condition(self) -> Option<Condition<'a>> {
        self.0.children().take_while(|node| node.kind() != BLOCK).find_map(Condition::cast)
    }

    pub fn then_branch(self) -> Option<Block<'a>> {
        child(self.0)
    }

    pub fn else_kw(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(ELSE_KW)
    }

    pub fn else_branch(self) -> Option<ElseBranch<'a>> {
        let else_kw = self.else_kw()?;
        self.0
            .children()
            .filter(|node| node.position() >= else_kw.trimmed_range().end())
            .find_map(ElseBranch::cast)
    }
}

impl<'a> ValCondition<'a> {
    pub fn val_kw(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(VAL_KW)
    }

    pub fn pattern(self) -> Option<Pattern<'a>> {
        child(self.0)
    }

    pub fn initializer(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

impl<'a> LoopExpr<'a> {
    pub fn body(self) -> Option<Block<'a>> {
        child(self.0)
    }
}

impl<'a> StructLiteral<'a> {
    pub fn fields(self) -> impl Iterator<Item = FieldInit<'a>> + 'a {
        children(self.0)
    }

    pub fn r_brace(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(RIGHT_BRACE)
    }
}

impl<'a> FieldInit<'a> {
    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

impl<'a> TupleType<'a> {
    pub fn types(self) -> impl Iterator<Item = Type<'a>> + 'a {
        children(self.0)
    }
}

impl<'a> WildcardPattern<'a> {
    pub fn underscore(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(UNDERSCORE)
    }
}

impl<'a> TuplePattern<'a> {
    pub fn patterns(self) -> impl Iterator<Item = Pattern<'a>> + 'a {
        children(self.0)
    }
}

impl<'a> LiteralPattern<'a> {
    pub fn token(self) -> Option<SyntaxToken<'a>> {
        self.0.child_token(INT_NUMBER)
    }
}
