mod ast;
mod errors;
mod frame;
mod patterns;

pub use self::{
    ast::Signature,
    errors::{GrammarError, NestingTooDeep, UnclosedGroup, UnexpectedToken},
    frame::Frame,
    patterns::Pattern,
};

use crate::{
    dbg_line,
    lexer::{tokenize, Token, TokenKind},
    shared::span::Span,
};

use tracing::{debug, trace};

/// Deepest group nesting a pattern may use. Every walk over a parsed
/// [`Pattern`] recurses once per level, so this bounds their stack use.
pub const MAX_NESTING: usize = 1024;

/// Pushdown automaton turning a token stream into a [`Signature`].
///
/// Every token pops the top frame, and the transition decides what goes back
/// onto the stack. The bottom frame is the root sequence and is only popped
/// once the whole input has been consumed.
pub struct Parser<'a> {
    code: &'a str,
    input: Vec<Token<'a>>,

    stack: Vec<Frame>,
    // `(` and `{` tokens whose group is still open, innermost last
    open_groups: Vec<(TokenKind, Span)>,
}

impl<'a> Parser<'a> {
    pub fn new(code: &'a str, tokens: Vec<Token<'a>>) -> Self {
        Parser {
            code,
            input: tokens,

            stack: vec![Frame::Sequence(Vec::new())],
            open_groups: Vec::new(),
        }
    }

    pub fn parse(mut self) -> Result<Signature, GrammarError> {
        let input = std::mem::take(&mut self.input);
        for token in &input {
            self.step(token)?;
        }
        self.finish()
    }

    fn step(&mut self, token: &Token<'a>) -> Result<(), GrammarError> {
        let Some(frame) = self.stack.pop() else {
            unreachable!("the root frame is never popped between tokens");
        };

        trace!(
            frame = frame.name(),
            depth = self.stack.len(),
            kind = ?token.kind,
            position = token.position(),
            "step"
        );

        match (frame, token.kind) {
            // ( a, b, ... )
            (Frame::Sequence(mut patterns), TokenKind::Identifier) => {
                patterns.push(Pattern::Leaf(token.text.to_string()));
                self.stack.push(Frame::Sequence(patterns));
            }
            (Frame::Sequence(patterns), TokenKind::RightParen) if !self.stack.is_empty() => {
                self.close(Pattern::Sequence(patterns));
            }
            (
                frame @ Frame::Sequence(_),
                TokenKind::RightParen | TokenKind::RightCurly | TokenKind::Colon,
            ) => {
                return Err(self.unexpected(token, &frame));
            }

            // { a, b: c, ... }
            (mapping @ Frame::Mapping(_), TokenKind::Identifier) => {
                self.stack.push(mapping);
                self.stack
                    .push(Frame::AwaitingColonFromIdent(token.text.to_string()));
            }
            (Frame::Mapping(entries), TokenKind::RightCurly) => {
                self.close(Pattern::Mapping(entries));
            }
            (frame @ Frame::Mapping(_), TokenKind::RightParen | TokenKind::Colon) => {
                return Err(self.unexpected(token, &frame));
            }

            // shared by both kinds of groups
            (frame @ (Frame::Sequence(_) | Frame::Mapping(_)), TokenKind::LeftParen) => {
                self.stack.push(frame);
                self.open(token, Frame::Sequence(Vec::new()))?;
            }
            (frame @ (Frame::Sequence(_) | Frame::Mapping(_)), TokenKind::LeftCurly) => {
                self.stack.push(frame);
                self.open(token, Frame::Mapping(Vec::new()))?;
            }
            (frame @ (Frame::Sequence(_) | Frame::Mapping(_)), TokenKind::Comma) => {
                self.stack.push(frame);
            }

            // {name,  {name}  {name:
            (Frame::AwaitingColonFromIdent(name), TokenKind::Comma) => {
                self.push_entry(name.clone(), Pattern::Leaf(name));
            }
            (Frame::AwaitingColonFromIdent(name), TokenKind::RightCurly) => {
                self.push_entry(name.clone(), Pattern::Leaf(name));
                let entries = self.pop_mapping();
                self.close(Pattern::Mapping(entries));
            }
            (Frame::AwaitingColonFromIdent(name), TokenKind::Colon) => {
                self.stack
                    .push(Frame::AwaitingKeyAfterColon(Pattern::Leaf(name)));
            }
            (
                frame @ Frame::AwaitingColonFromIdent(_),
                TokenKind::Identifier
                | TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::LeftCurly,
            ) => {
                return Err(self.unexpected(token, &frame));
            }

            // {(a, b):
            (Frame::AwaitingColonFromPattern(pattern), TokenKind::Colon) => {
                self.stack.push(Frame::AwaitingKeyAfterColon(pattern));
            }
            (
                frame @ Frame::AwaitingColonFromPattern(_),
                TokenKind::Identifier
                | TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::LeftCurly
                | TokenKind::RightCurly
                | TokenKind::Comma,
            ) => {
                return Err(self.unexpected(token, &frame));
            }

            // {pattern: key
            (Frame::AwaitingKeyAfterColon(pattern), TokenKind::Identifier) => {
                self.push_entry(token.text.to_string(), pattern);
            }
            (
                frame @ Frame::AwaitingKeyAfterColon(_),
                TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::LeftCurly
                | TokenKind::RightCurly
                | TokenKind::Colon
                | TokenKind::Comma,
            ) => {
                return Err(self.unexpected(token, &frame));
            }
        }

        Ok(())
    }

    fn open(&mut self, token: &Token<'a>, frame: Frame) -> Result<(), GrammarError> {
        if self.open_groups.len() >= MAX_NESTING {
            return Err(GrammarError::NestingTooDeep(NestingTooDeep {
                dbg_line: dbg_line!(),
                kind: token.kind,
                offset: token.position(),
                limit: MAX_NESTING,
                src: self.code.to_string(),
                position: token.span.into(),
            }));
        }

        self.open_groups.push((token.kind, token.span));
        self.stack.push(frame);
        Ok(())
    }

    /// Hands a finished group to the frame below it.
    fn close(&mut self, completed: Pattern) {
        self.open_groups.pop();

        match self.stack.pop() {
            Some(Frame::Sequence(mut patterns)) => {
                patterns.push(completed);
                self.stack.push(Frame::Sequence(patterns));
            }
            // a group inside a mapping only makes sense with a `:key` after it
            Some(mapping @ Frame::Mapping(_)) => {
                self.stack.push(mapping);
                self.stack.push(Frame::AwaitingColonFromPattern(completed));
            }
            other => unreachable!("group closed on top of {other:?}"),
        }
    }

    fn push_entry(&mut self, key: String, pattern: Pattern) {
        match self.stack.last_mut() {
            Some(Frame::Mapping(entries)) => entries.push((key, pattern)),
            other => unreachable!("mapping entry outside of a mapping: {other:?}"),
        }
    }

    fn pop_mapping(&mut self) -> Vec<(String, Pattern)> {
        match self.stack.pop() {
            Some(Frame::Mapping(entries)) => entries,
            other => unreachable!("expected a mapping frame, found {other:?}"),
        }
    }

    fn unexpected(&self, token: &Token<'a>, frame: &Frame) -> GrammarError {
        let actual = match token.kind {
            TokenKind::Identifier => format!("identifier {:?}", token.text),
            kind => kind.to_string(),
        };

        GrammarError::UnexpectedToken(UnexpectedToken {
            dbg_line: dbg_line!(),
            kind: token.kind,
            offset: token.position(),
            actual,
            expected: frame.expectation(self.stack.is_empty()),
            src: self.code.to_string(),
            position: token.span.into(),
        })
    }

    fn finish(mut self) -> Result<Signature, GrammarError> {
        if let Some(&(kind, span)) = self.open_groups.last() {
            let closing = match kind {
                TokenKind::LeftCurly => TokenKind::RightCurly,
                _ => TokenKind::RightParen,
            };

            return Err(GrammarError::UnclosedGroup(UnclosedGroup {
                dbg_line: dbg_line!(),
                kind,
                offset: span.start,
                closing,
                src: self.code.to_string(),
                position: span.into(),
            }));
        }

        match self.stack.pop() {
            Some(Frame::Sequence(patterns)) if self.stack.is_empty() => {
                Ok(Signature::new(patterns))
            }
            other => unreachable!("unbalanced frame stack with no open groups: {other:?}"),
        }
    }
}

/// Tokenizes and parses pattern text in one go.
pub fn parse(code: &str) -> Result<Signature, GrammarError> {
    let signature = Parser::new(code, tokenize(code)).parse()?;
    debug!(
        arity = signature.arity(),
        names = ?signature.names(),
        "parsed signature"
    );
    Ok(signature)
}
