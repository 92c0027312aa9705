use crate::{Id, Identifier, Nullable, SourceLoc, SourceRange};

pub mod tags {
    pub enum Expr {}
    pub enum Stmt {}
    pub enum Decl {}
    pub enum TypeRepr {}
    pub enum Pattern {}
    pub enum GenericParamList {}
    pub enum TrailingWhereClause {}
    pub enum ParameterList {}
    pub enum DeclContext {}
}

pub type Expr = Id<tags::Expr>;
pub type Stmt = Id<tags::Stmt>;
pub type Decl = Id<tags::Decl>;
pub type TypeRepr = Id<tags::TypeRepr>;
pub type Pattern = Id<tags::Pattern>;
pub type GenericParamList = Id<tags::GenericParamList>;
pub type TrailingWhereClause = Id<tags::TrailingWhereClause>;
pub type ParameterList = Id<tags::ParameterList>;
pub type DeclContext = Id<tags::DeclContext>;

pub type NullableExpr = Nullable<Expr>;
pub type NullableStmt = Nullable<Stmt>;
pub type NullableDecl = Nullable<Decl>;
pub type NullableTypeRepr = Nullable<TypeRepr>;
pub type NullablePattern = Nullable<Pattern>;
pub type NullableGenericParamList = Nullable<GenericParamList>;
pub type NullableTrailingWhereClause = Nullable<TrailingWhereClause>;
pub type NullableParameterList = Nullable<ParameterList>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprData<'db> {
    pub kind: ExprKind<'db>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind<'db> {
    IntegerLiteral(Identifier<'db>),
    FloatLiteral(Identifier<'db>),
    /// Literal text including the quotes.
    StringLiteral(Identifier<'db>),
    BooleanLiteral(bool),
    UnresolvedDeclRef { name: Identifier<'db>, name_loc: SourceLoc },
    Binary { lhs: Expr, op: Identifier<'db>, op_loc: SourceLoc, rhs: NullableExpr },
    Prefix { op: Identifier<'db>, op_loc: SourceLoc, operand: NullableExpr },
    Postfix { operand: Expr, op: Identifier<'db>, op_loc: SourceLoc },
    Paren { inner: NullableExpr },
    Tuple { elements: Vec<Expr> },
    Call { callee: Expr, args: Vec<Expr> },
    Member { base: Expr, name: Identifier<'db>, name_loc: SourceLoc },
    If { condition: IfCondition, then_branch: NullableStmt, else_branch: NullableStmt },
    Loop { body: NullableStmt },
    StructLiteral { name: Identifier<'db>, name_loc: SourceLoc, fields: Vec<FieldInit<'db>> },
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfCondition {
    Boolean(NullableExpr),
    Binding { pattern: NullablePattern, init: NullableExpr },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInit<'db> {
    pub name: Identifier<'db>,
    pub name_loc: SourceLoc,
    pub value: NullableExpr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtData {
    pub kind: StmtKind,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    Brace { elements: Vec<BraceElement> },
    Return { result: NullableExpr },
    While { condition: NullableExpr, body: NullableStmt },
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceElement {
    Expr(Expr),
    Stmt(Stmt),
    Decl(Decl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclData<'db> {
    pub kind: DeclKind<'db>,
    pub range: SourceRange,
    /// The context the declaration appears in.
    pub context: DeclContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind<'db> {
    Func {
        name: Identifier<'db>,
        name_loc: SourceLoc,
        generic_params: NullableGenericParamList,
        params: NullableParameterList,
        result: NullableTypeRepr,
        where_clause: NullableTrailingWhereClause,
        body: NullableStmt,
        /// The context owned by the function, in which its body lives.
        body_context: DeclContext,
    },
    Struct {
        name: Identifier<'db>,
        name_loc: SourceLoc,
        generic_params: NullableGenericParamList,
        fields: Vec<FieldDecl<'db>>,
    },
    PatternBinding { pattern: NullablePattern, init: NullableExpr },
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl<'db> {
    pub name: Identifier<'db>,
    pub name_loc: SourceLoc,
    pub ty: NullableTypeRepr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReprData<'db> {
    pub kind: TypeReprKind<'db>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeReprKind<'db> {
    Ident { name: Identifier<'db>, name_loc: SourceLoc },
    Tuple { elements: Vec<TypeRepr> },
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternData<'db> {
    pub kind: PatternKind<'db>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind<'db> {
    Named { name: Identifier<'db>, name_loc: SourceLoc },
    Any,
    Tuple { elements: Vec<Pattern> },
    Literal(Identifier<'db>),
    Typed { pattern: Pattern, ty: NullableTypeRepr },
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericParamListData<'db> {
    pub params: Vec<GenericParam<'db>>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericParam<'db> {
    pub name: Identifier<'db>,
    pub name_loc: SourceLoc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingWhereClauseData {
    pub requirements: Vec<Requirement>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub subject: NullableTypeRepr,
    pub constraint: NullableTypeRepr,
    pub colon_loc: SourceLoc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterListData<'db> {
    pub params: Vec<Param<'db>>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'db> {
    pub name: Identifier<'db>,
    pub name_loc: SourceLoc,
    pub ty: NullableTypeRepr,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclContextKind<'db> {
    Module,
    Function(Identifier<'db>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclContextData<'db> {
    pub kind: DeclContextKind<'db>,
    pub parent: Option<DeclContext>,
}
