mod cursor;

use cursor::{Cursor, EOF_CHAR};
use ferrule_syntax::SyntaxKind::*;
pub use ferrule_syntax::SyntaxKind;
use ferrule_syntax::{TriviaPiece, TriviaPieceKind};
use text_size::{TextLen as _, TextRange, TextSize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub leading: Vec<TriviaPiece>,
    pub kind: SyntaxKind,
    pub kind_range: TextRange,
    pub trailing: Vec<TriviaPiece>,
}

impl Token {
    const EOF: Self = Self {
        kind: EOF,
        kind_range: TextRange::empty(TextSize::new(0)),
        leading: Vec::new(),
        trailing: Vec::new(),
    };

    /// Start of the leading trivia.
    pub fn full_start(&self) -> TextSize {
        self.kind_range.start() - self.leading.iter().map(|piece| piece.len).sum::<TextSize>()
    }
}

/// Splits source text into tokens, attaching whitespace and comments to them.
///
/// Trivia up to the end of the line after a token is its trailing trivia;
/// everything from the newline on leads the next token.
pub struct Tokenizer<'text> {
    text: &'text str,
    cursor: Cursor<'text>,
    current: Token,
    trivia_pieces: Vec<TriviaPiece>,
}

impl<'text> Tokenizer<'text> {
    pub fn new(text: &'text str) -> Self {
        Self::new_at(text, TextSize::new(0))
    }

    /// Starts tokenizing `text` at `offset`, which must be on a char boundary.
    ///
    /// Ranges stay relative to the start of `text`, and operators at `offset`
    /// are classified as if the whole text had been tokenized.
    pub fn new_at(text: &'text str, offset: TextSize) -> Self {
        let offset = usize::from(offset);
        assert!(text.is_char_boundary(offset), "offset {offset} is not a char boundary");
        let previous = text[..offset].chars().next_back().unwrap_or(EOF_CHAR);

        let mut tokenizer = Self {
            text,
            cursor: Cursor::new(&text[offset..], previous),
            current: Token::EOF,
            trivia_pieces: Vec::with_capacity(4),
        };
        tokenizer.next_token();
        tokenizer
    }

    pub fn peek(&self) -> &Token {
        &self.current
    }

    fn offset(&self) -> TextSize {
        self.text.text_len() - self.cursor.len()
    }

    fn range(&self) -> TextRange {
        let len = self.cursor.pos_within_token();
        TextRange::at(self.offset() - len, len)
    }

    fn text(&self) -> &'text str {
        &self.text[self.range()]
    }

    /// Returns the current token and moves to the next one.
    pub fn next_token(&mut self) -> Token {
        self.trivia(false);
        let trailing_start = self.trivia_pieces.len();
        let (kind, kind_range) = self.syntax_kind();
        self.trivia(true);

        let leading = self.trivia_pieces.drain(..trailing_start).collect();
        let trailing = self.trivia_pieces.drain(..).collect();

        std::mem::replace(&mut self.current, Token { leading, kind, kind_range, trailing })
    }

    fn trivia(&mut self, trailing: bool) {
        loop {
            let kind = match self.cursor.peek() {
                _ if self.cursor.is_eof() => break,
                '/' if self.cursor.second() == '/' => {
                    self.cursor.advance_while(|c| !is_newline(c));
                    TriviaPieceKind::SingleLineComment
                }
                '/' if self.cursor.second() == '*' => {
                    self.block_comment();
                    TriviaPieceKind::MultiLineComment
                }
                '\n' | '\r' if !trailing => {
                    if self.cursor.advance() == '\r' && self.cursor.matches('\n') {
                        self.cursor.advance();
                    }
                    TriviaPieceKind::Newline
                }
                first_char if is_whitespace(first_char) => {
                    self.cursor.advance_while(is_whitespace);
                    TriviaPieceKind::Whitespace
                }
                _ => break,
            };

            self.trivia_pieces.push(TriviaPiece::new(kind, self.cursor.pos_within_token()));
            self.cursor.reset_pos_within_token();
        }
    }

    fn block_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        while !self.cursor.is_eof() {
            if self.cursor.matches('*') && self.cursor.second() == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }

    fn syntax_kind(&mut self) -> (SyntaxKind, TextRange) {
        if self.cursor.is_eof() {
            return (EOF, TextRange::empty(self.offset()));
        }

        let previous = self.cursor.previous();

        let kind = match self.cursor.advance() {
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            '[' => LEFT_BRACKET,
            ']' => RIGHT_BRACKET,
            '{' => LEFT_BRACE,
            '}' => RIGHT_BRACE,
            ':' => COLON,
            ',' => COMMA,
            ';' => SEMICOLON,
            '"' => self.string(),
            first_char @ '0'..='9' => self.number(first_char),
            'A'..='Z' | 'a'..='z' | '_' => {
                self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

                match self.text() {
                    "fun" => FUN_KW,
                    "struct" => STRUCT_KW,
                    "val" => VAL_KW,
                    "if" => IF_KW,
                    "else" => ELSE_KW,
                    "loop" => LOOP_KW,
                    "while" => WHILE_KW,
                    "return" => RETURN_KW,
                    "where" => WHERE_KW,
                    "true" => TRUE_KW,
                    "false" => FALSE_KW,
                    "_" => UNDERSCORE,
                    _ => NAME,
                }
            }
            first_char if is_operator(first_char) => {
                self.cursor.advance_while(is_operator);

                let left_bound = match previous {
                    '(' | '[' | '{' | ',' | ':' | ';' => false,
                    EOF_CHAR => false,
                    prev => !prev.is_whitespace(),
                };

                let right_bound = match self.cursor.peek() {
                    ')' | ']' | '}' | ',' | ':' | ';' => false,
                    '.' => !left_bound,
                    _ if self.cursor.is_eof() => false,
                    peeked => !peeked.is_whitespace(),
                };

                match self.text() {
                    "=" => EQ,
                    "." => DOT,
                    _ if left_bound == right_bound => BINARY_OPERATOR,
                    _ if left_bound => POSTFIX_OPERATOR,
                    _ => PREFIX_OPERATOR,
                }
            }
            _ => UNKNOWN,
        };

        let range = self.range();
        self.cursor.reset_pos_within_token();

        (kind, range)
    }

    fn string(&mut self) -> SyntaxKind {
        while !self.cursor.is_eof() {
            match self.cursor.peek() {
                '"' => {
                    self.cursor.advance();
                    break;
                }
                '\\' => {
                    self.cursor.advance();
                    if !is_newline(self.cursor.peek()) {
                        self.cursor.advance();
                    }
                }
                c if is_newline(c) => break,
                _ => {
                    self.cursor.advance();
                }
            }
        }
        STRING
    }

    fn number(&mut self, c: char) -> SyntaxKind {
        if c == '0' {
            match self.cursor.peek() {
                'b' | 'o' => {
                    self.cursor.advance();
                    self.digits(false);
                    return INT_NUMBER;
                }
                'x' => {
                    self.cursor.advance();
                    self.digits(true);
                    return INT_NUMBER;
                }
                '0'..='9' | '_' | '.' | 'e' | 'E' => {
                    self.digits(false);
                }
                _ => return INT_NUMBER,
            }
        } else {
            self.digits(false);
        }

        if self.cursor.matches('.') && self.cursor.second().is_ascii_digit() {
            self.cursor.advance();
            self.digits(false);
            self.float_exponent();
            return FLOAT_NUMBER;
        }

        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.float_exponent();
            return FLOAT_NUMBER;
        }

        INT_NUMBER
    }

    fn digits(&mut self, allow_hex: bool) {
        loop {
            match self.cursor.peek() {
                '_' | '0'..='9' => {
                    self.cursor.advance();
                }
                'a'..='f' | 'A'..='F' if allow_hex => {
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    fn float_exponent(&mut self) {
        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.cursor.advance();
            if self.cursor.matches('-') || self.cursor.matches('+') {
                self.cursor.advance();
            }
            self.digits(false);
        }
    }
}

fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

fn is_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_newline(c)
}

fn is_operator(c: char) -> bool {
    matches!(
        c,
        '/' | '=' | '-' | '+' | '*' | '%' | '<' | '>' | '!' | '&' | '|' | '^' | '~' | '.' | '?'
    )
}

#[cfg(test)]
mod tests;
