use drop_bomb::DropBomb;
use ferrule_errors::Diagnostic;
use ferrule_syntax::{Builder, SyntaxKind, SyntaxSet, SyntaxTree, TextSize};
use ferrule_tokenizer::{Token, Tokenizer};

pub(crate) struct Parser<'t> {
    text: &'t str,
    tokenizer: Tokenizer<'t>,
    events: Vec<Event>,
    diagnostics: Vec<Diagnostic>,
}

impl<'t> Parser<'t> {
    pub(crate) fn new(text: &'t str) -> Self {
        Self { text, tokenizer: Tokenizer::new(text), events: Vec::new(), diagnostics: Vec::new() }
    }

    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.tokenizer.peek().kind
    }

    /// Offset of the next token, used to detect lack of progress.
    pub(crate) fn position(&self) -> TextSize {
        self.tokenizer.peek().kind_range.start()
    }

    pub(crate) fn advance(&mut self) {
        if self.peek_kind() == SyntaxKind::EOF {
            return;
        }

        let token = self.tokenizer.next_token();
        self.events.push(Event::Token(token));
    }

    /// Pushes the final `EOF` token so the tree covers trailing trivia.
    pub(crate) fn eof(&mut self) {
        debug_assert_eq!(self.peek_kind(), SyntaxKind::EOF);
        let token = self.tokenizer.next_token();
        self.events.push(Event::Token(token));
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn at_set(&self, set: SyntaxSet) -> bool {
        set.contains(self.peek_kind())
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if !self.at(kind) {
            return false;
        }
        self.advance();
        true
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error(format!("expected {}", describe(kind)));
        false
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len() as u32;
        self.events.push(Event::TOMBSTONE);
        Marker::new(pos)
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        let range = self.tokenizer.peek().kind_range;
        self.diagnostics.push(Diagnostic::error(message, range));
    }

    /// Reports an error and wraps the offending token in an `ERROR` node.
    pub(crate) fn error_and_bump(&mut self, message: &str) {
        if self.at(SyntaxKind::EOF) {
            self.error(message);
            return;
        }

        let m = self.start();
        self.error(message);
        self.advance();
        m.complete(self, SyntaxKind::ERROR);
    }

    /// Like [`Parser::error_and_bump`], but leaves tokens in `recovery` and
    /// closing delimiters for an enclosing rule.
    pub(crate) fn error_recover(&mut self, message: &str, recovery: SyntaxSet) {
        if self.at_set(recovery.union(RECOVERY_SET)) {
            self.error(message);
            return;
        }
        self.error_and_bump(message);
    }

    pub(crate) fn finish(self) -> (SyntaxTree, Vec<Diagnostic>) {
        let Parser { text, tokenizer: _, mut events, diagnostics } = self;
        let mut builder = Builder::new(text);
        let mut forward_parents = Vec::new();

        for i in 0..events.len() {
            match std::mem::replace(&mut events[i], Event::TOMBSTONE) {
                Event::Start { kind, forward_parent } => {
                    if kind == SyntaxKind::TOMBSTONE {
                        continue;
                    }

                    forward_parents.push(kind);
                    let mut idx = i;
                    let mut fp = forward_parent;
                    while let Some(fwd) = fp {
                        idx += fwd as usize;

                        fp = match std::mem::replace(&mut events[idx], Event::TOMBSTONE) {
                            Event::Start { kind, forward_parent } => {
                                if kind != SyntaxKind::TOMBSTONE {
                                    forward_parents.push(kind);
                                }
                                forward_parent
                            }
                            _ => unreachable!(),
                        };
                    }

                    for kind in forward_parents.drain(..).rev() {
                        builder.start_node(kind);
                    }
                }
                Event::Finish => {
                    builder.finish_node();
                }
                Event::Token(Token { leading, kind, kind_range, trailing }) => {
                    builder.token(&leading, kind, kind_range, &trailing);
                }
            }
        }

        (builder.finish(), diagnostics)
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
        SEMICOLON => "`;`",
        EQ => "`=`",
        DOT => "`.`",
        NAME => "identifier",
        EOF => "end of file",
        _ => "token",
    }
}

enum Event {
    Start { kind: SyntaxKind, forward_parent: Option<u32> },
    Token(Token),
    Finish,
}

impl Event {
    const TOMBSTONE: Self = Event::Start { kind: SyntaxKind::TOMBSTONE, forward_parent: None };
}

pub(crate) struct Marker {
    position: u32,
    bomb: DropBomb,
}

impl Marker {
    fn new(pos: u32) -> Marker {
        Marker {
            position: pos,
            bomb: DropBomb::new("Marker must be completed"),
        }
    }

    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        self.bomb.defuse();

        match &mut p.events[self.position as usize] {
            Event::Start { kind: slot, .. } => {
                *slot = kind;
            }
            _ => unreachable!(),
        }

        p.events.push(Event::Finish);
        CompletedMarker::new(self.position)
    }
}

pub(crate) struct CompletedMarker {
    pos: u32,
}

impl CompletedMarker {
    fn new(pos: u32) -> Self {
        CompletedMarker { pos }
    }

    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let new_pos = p.start();

        match &mut p.events[self.pos as usize] {
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some(new_pos.position - self.pos);
            }
            _ => unreachable!(),
        }

        new_pos
    }
}
