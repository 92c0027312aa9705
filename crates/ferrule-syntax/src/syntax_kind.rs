#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    COMMA,
    COLON,
    SEMICOLON,
    EQ,
    DOT,

    FUN_KW,
    STRUCT_KW,
    VAL_KW,
    IF_KW,
    ELSE_KW,
    LOOP_KW,
    WHILE_KW,
    RETURN_KW,
    WHERE_KW,
    TRUE_KW,
    FALSE_KW,
    UNDERSCORE,
    NAME,

    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,
    BINARY_OPERATOR,
    POSTFIX_OPERATOR,
    PREFIX_OPERATOR,

    WHITESPACE,
    NEWLINE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    UNKNOWN,
    EOF,

    MODULE,
    FN,
    STRUCT,
    FIELD_LIST,
    FIELD,
    GENERIC_PARAM_LIST,
    GENERIC_PARAM,
    PARAM_LIST,
    PARAM,
    TYPE_ANNOTATION,
    RETURN_TYPE,
    WHERE_CLAUSE,
    WHERE_PREDICATE,
    BLOCK,

    VAL_DECL,
    EXPR_STMT,
    WHILE_STMT,
    RETURN_STMT,

    LITERAL,
    PATH_EXPR,
    BINARY_EXPR,
    PREFIX_EXPR,
    POSTFIX_EXPR,
    PAREN_EXPR,
    TUPLE_EXPR,
    CALL_EXPR,
    ARG_LIST,
    MEMBER_EXPR,
    IF_EXPR,
    VAL_CONDITION,
    LOOP_EXPR,
    STRUCT_LITERAL,
    FIELD_INIT,

    PATH_TYPE,
    TUPLE_TYPE,

    NAME_PATTERN,
    WILDCARD_PATTERN,
    TUPLE_PATTERN,
    LITERAL_PATTERN,

    ERROR,
    TOMBSTONE,
}

impl SyntaxKind {
    /// Returns `true` for whitespace and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (Self::FUN_KW as u16..=Self::FALSE_KW as u16).contains(&(self as u16))
    }

    /// Returns `true` for kinds that only ever appear as tokens.
    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) <= Self::EOF as u16
    }
}
