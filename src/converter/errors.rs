use miette::{Diagnostic, ErrReport};
use thiserror::Error;

use super::Path;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum MatchError {
    #[error("expected {expected} positional arguments, got {actual}")]
    #[diagnostic(code(converter::arity))]
    Arity { expected: usize, actual: usize },

    #[error("expected {expected} items at {path}, got {actual}")]
    #[diagnostic(code(converter::shape))]
    Shape {
        expected: usize,
        actual: usize,
        path: Path,
    },

    #[error("expected a sequence of {expected} items at {path}")]
    #[diagnostic(
        code(converter::not_a_sequence),
        help("Only values that can be iterated in order match a ( ) pattern")
    )]
    NotASequence { expected: usize, path: Path },

    #[error("missing key '{key}' at {path}")]
    #[diagnostic(code(converter::key_missing))]
    KeyMissing { key: String, path: Path },
}

impl MatchError {
    pub fn into_err_report(self) -> ErrReport {
        self.into()
    }

    /// Location of the mismatch, `None` for arity errors.
    pub fn path(&self) -> Option<&Path> {
        match self {
            MatchError::Arity { .. } => None,
            MatchError::Shape { path, .. }
            | MatchError::NotASequence { path, .. }
            | MatchError::KeyMissing { path, .. } => Some(path),
        }
    }
}
