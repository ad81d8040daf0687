use miette::{Diagnostic, ErrReport, SourceSpan};
use thiserror::Error;

use crate::lexer::TokenKind;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum GrammarError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnexpectedToken(UnexpectedToken),
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnclosedGroup(UnclosedGroup),
    #[error(transparent)]
    #[diagnostic(transparent)]
    NestingTooDeep(NestingTooDeep),
}

impl GrammarError {
    pub fn into_err_report(self) -> ErrReport {
        self.into()
    }

    /// Kind of the offending token, or of the opening bracket for an unclosed group.
    pub fn kind(&self) -> TokenKind {
        match self {
            GrammarError::UnexpectedToken(e) => e.kind,
            GrammarError::UnclosedGroup(e) => e.kind,
            GrammarError::NestingTooDeep(e) => e.kind,
        }
    }

    /// Byte offset into the pattern text.
    pub fn offset(&self) -> usize {
        match self {
            GrammarError::UnexpectedToken(e) => e.offset,
            GrammarError::UnclosedGroup(e) => e.offset,
            GrammarError::NestingTooDeep(e) => e.offset,
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("invalid pattern syntax: unexpected {actual} at offset {offset}, expected {expected}")]
#[diagnostic(
	code(parser::unexpected_token),
	help("[{}] Expected {}, got {} instead", self.dbg_line, self.expected, self.actual),
)]
pub struct UnexpectedToken {
    pub dbg_line: String,
    pub kind: TokenKind,
    pub offset: usize,
    pub actual: String,
    pub expected: &'static str,
    #[source_code]
    pub src: String,
    #[label("Unexpected token: {}", self.actual)]
    pub position: SourceSpan,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("invalid pattern syntax: {kind} opened at offset {offset} is never closed")]
#[diagnostic(
	code(parser::unclosed_group),
	help("[{}] Insert {} after the last entry of this group", self.dbg_line, self.closing),
)]
pub struct UnclosedGroup {
    pub dbg_line: String,
    pub kind: TokenKind,
    pub offset: usize,
    pub closing: TokenKind,
    #[source_code]
    pub src: String,
    #[label("This group is never closed")]
    pub position: SourceSpan,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("invalid pattern syntax: {kind} at offset {offset} nests deeper than {limit} groups")]
#[diagnostic(
	code(parser::nesting_too_deep),
	help("[{}] Patterns may nest at most {} groups deep", self.dbg_line, self.limit),
)]
pub struct NestingTooDeep {
    pub dbg_line: String,
    pub kind: TokenKind,
    pub offset: usize,
    pub limit: usize,
    #[source_code]
    pub src: String,
    #[label("Group opened {} levels deep", self.limit + 1)]
    pub position: SourceSpan,
}
