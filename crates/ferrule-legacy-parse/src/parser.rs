use ferrule_ast::nodes::*;
use ferrule_ast::{AstContext, BridgedStringRef, Identifier, SourceBuffer, SourceLoc, SourceRange};
use ferrule_errors::Diagnostic;
use ferrule_syntax::{SyntaxKind, SyntaxSet, TextRange};
use ferrule_tokenizer::Tokenizer;

/// Token cursor over one source buffer that allocates AST nodes as it goes.
pub(crate) struct Parser<'c, 'db> {
    ctx: &'c mut AstContext<'db>,
    buffer: SourceBuffer,
    text: &'db str,
    tokenizer: Tokenizer<'db>,
    dc: DeclContext,
    /// Start of the most recently consumed token.
    last: SourceLoc,
}

impl<'c, 'db> Parser<'c, 'db> {
    /// Starts parsing at `loc`, which must point into a registered buffer.
    #[track_caller]
    pub(crate) fn new(ctx: &'c mut AstContext<'db>, loc: SourceLoc, dc: DeclContext) -> Self {
        let (buffer, offset) = ctx
            .source_manager()
            .resolve(loc)
            .expect("legacy parser started outside of any source buffer");
        let text = ctx.buffer_text(buffer);
        let tokenizer = Tokenizer::new_at(text, offset);
        Self { ctx, buffer, text, tokenizer, dc, last: SourceLoc::INVALID }
    }

    pub(crate) fn ctx(&mut self) -> &mut AstContext<'db> {
        self.ctx
    }

    pub(crate) fn dc(&self) -> DeclContext {
        self.dc
    }

    /// Runs `f` with `dc` as the current declaration context.
    pub(crate) fn in_context<T>(&mut self, dc: DeclContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let outer = std::mem::replace(&mut self.dc, dc);
        let result = f(self);
        self.dc = outer;
        result
    }

    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.tokenizer.peek().kind
    }

    fn peek_range(&self) -> TextRange {
        self.tokenizer.peek().kind_range
    }

    /// Location of the next token.
    pub(crate) fn loc(&self) -> SourceLoc {
        self.buffer.start().advanced_by(self.peek_range().start())
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn at_set(&self, set: SyntaxSet) -> bool {
        set.contains(self.peek_kind())
    }

    /// Consumes the next token and returns its location.
    pub(crate) fn bump(&mut self) -> SourceLoc {
        if self.at(SyntaxKind::EOF) {
            return self.loc();
        }
        let loc = self.loc();
        self.tokenizer.next_token();
        self.last = loc;
        loc
    }

    /// Consumes the next token and interns its text.
    pub(crate) fn bump_text(&mut self) -> (Identifier<'db>, SourceLoc) {
        let text = &self.text[self.peek_range()];
        let identifier = self.ctx.get_identifier(BridgedStringRef::new(text));
        (identifier, self.bump())
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if !self.at(kind) {
            return false;
        }
        self.bump();
        true
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error(format!("expected {}", describe(kind)));
        false
    }

    /// Consumes a name, or reports it missing.
    pub(crate) fn name(&mut self) -> (Identifier<'db>, SourceLoc) {
        if self.at(SyntaxKind::NAME) {
            return self.bump_text();
        }
        self.error("expected identifier");
        (Identifier::EMPTY, SourceLoc::INVALID)
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        let range = self.peek_range();
        self.ctx.diagnose(self.buffer, Diagnostic::error(message, range));
    }

    pub(crate) fn error_and_bump(&mut self, message: &str) {
        self.error(message);
        self.bump();
    }

    /// Reports an error and skips the offending token unless an enclosing
    /// rule can use it.
    pub(crate) fn error_recover(&mut self, message: &str, recovery: SyntaxSet) {
        if self.at_set(recovery.union(RECOVERY_SET)) {
            self.error(message);
            return;
        }
        self.error_and_bump(message);
    }

    /// Range from `start` to the last consumed token.
    pub(crate) fn range_from(&self, start: SourceLoc) -> SourceRange {
        if self.last < start {
            return SourceRange::new(start, start);
        }
        SourceRange::new(start, self.last)
    }

    pub(crate) fn expr_node(&mut self, kind: ExprKind<'db>, start: SourceLoc) -> Expr {
        let range = self.range_from(start);
        self.ctx.alloc_expr(ExprData { kind, range })
    }

    pub(crate) fn stmt_node(&mut self, kind: StmtKind, start: SourceLoc) -> Stmt {
        let range = self.range_from(start);
        self.ctx.alloc_stmt(StmtData { kind, range })
    }

    pub(crate) fn decl_node(&mut self, kind: DeclKind<'db>, start: SourceLoc) -> Decl {
        let range = self.range_from(start);
        let context = self.dc;
        self.ctx.alloc_decl(DeclData { kind, range, context })
    }

    pub(crate) fn type_node(&mut self, kind: TypeReprKind<'db>, start: SourceLoc) -> TypeRepr {
        let range = self.range_from(start);
        self.ctx.alloc_type_repr(TypeReprData { kind, range })
    }

    pub(crate) fn pattern_node(&mut self, kind: PatternKind<'db>, start: SourceLoc) -> Pattern {
        let range = self.range_from(start);
        self.ctx.alloc_pattern(PatternData { kind, range })
    }
}

const RECOVERY_SET: SyntaxSet =
    SyntaxSet::new([SyntaxKind::RIGHT_BRACE, SyntaxKind::RIGHT_PAREN, SyntaxKind::EOF]);

fn describe(kind: SyntaxKind) -> &'static str {
    use SyntaxKind::*;

    match kind {
        LEFT_PAREN => "`(`",
        RIGHT_PAREN => "`)`",
        LEFT_BRACKET => "`[`",
        RIGHT_BRACKET => "`]`",
        LEFT_BRACE => "`{`",
        RIGHT_BRACE => "`}`",
        COMMA => "`,`",
        COLON => "`:`",
        EQ => "`=`",
        NAME => "identifier",
        _ => "token",
    }
}
