use std::fmt::Display;

use super::Pattern;
use crate::converter::{self, Destructure, MatchError};

/// A parsed pattern text: one pattern per expected input, plus the names
/// bound by all of them in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    patterns: Vec<Pattern>,
    names: Vec<String>,
}

impl Signature {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        let mut names = Vec::new();
        for pattern in &patterns {
            pattern.collect_names(&mut names);
        }
        let names = names.into_iter().map(str::to_string).collect();

        Signature { patterns, names }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of inputs `convert` expects.
    pub fn arity(&self) -> usize {
        self.patterns.len()
    }

    /// The root sequence and the name list.
    pub fn into_parts(self) -> (Pattern, Vec<String>) {
        (Pattern::Sequence(self.patterns), self.names)
    }

    pub fn convert<V: Destructure>(&self, inputs: Vec<V>) -> Result<Vec<V>, MatchError> {
        converter::convert(self, inputs)
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pattern}")?;
        }
        Ok(())
    }
}
