mod token;

pub use token::{Token, TokenKind};

use tracing::trace;

/// Splits pattern text into identifiers and the six punctuation tokens.
///
/// Whitespace only separates identifiers and is never emitted. Anything that
/// is neither whitespace nor punctuation belongs to an identifier, so there
/// is nothing the lexer can reject.
pub struct Lexer<'a> {
    input: &'a str,
    identifier_start: Option<usize>,
    tokens: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            identifier_start: None,
            tokens: Vec::new(),
        }
    }

    fn flush_identifier(&mut self, end: usize) {
        if let Some(start) = self.identifier_start.take() {
            self.push(TokenKind::Identifier, start, end);
        }
    }

    fn push(&mut self, kind: TokenKind, from: usize, to: usize) {
        let input = self.input;
        let token = Token::new(kind, &input[from..to], from);
        trace!(kind = ?token.kind, text = token.text, position = from, "token");
        self.tokens.push(token);
    }

    pub fn lex(mut self) -> Vec<Token<'a>> {
        for (cursor, char) in self.input.char_indices() {
            if let Some(kind) = TokenKind::from_punctuation(char) {
                self.flush_identifier(cursor);
                self.push(kind, cursor, cursor + char.len_utf8());
            } else if char.is_whitespace() {
                self.flush_identifier(cursor);
            } else if self.identifier_start.is_none() {
                self.identifier_start = Some(cursor);
            }
        }

        self.flush_identifier(self.input.len());
        self.tokens
    }
}

pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).lex()
}
