use std::fmt::{Debug, Display};

use crate::shared::span::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenKind {
    Identifier,

    // Brackets
    LeftParen,  // (
    RightParen, // )
    LeftCurly,  // {
    RightCurly, // }

    // Separators
    Colon, // : lookup key of a mapping entry
    Comma, // , element separator
}

impl TokenKind {
    pub fn from_punctuation(char: char) -> Option<Self> {
        match char {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '{' => Some(TokenKind::LeftCurly),
            '}' => Some(TokenKind::RightCurly),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::LeftCurly => write!(f, "'{{'"),
            TokenKind::RightCurly => write!(f, "'}}'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Comma => write!(f, "','"),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, from: usize) -> Self {
        Token {
            kind,
            text,
            span: (from, text.len()).into(),
        }
    }

    /// Byte offset of the token's first character.
    pub fn position(&self) -> usize {
        self.span.start
    }
}

impl Debug for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "Identifier({:?})@{}", self.text, self.span.start),
            kind => write!(f, "{kind:?}@{}", self.span.start),
        }
    }
}
