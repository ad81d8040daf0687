use super::Pattern;

/// One state of the pattern builder's stack.
///
/// A `:key` suffix can only be recognised after the sub-pattern it applies to
/// has been read completely, so entries of a mapping pass through the
/// `Awaiting*` states before they are appended to the enclosing `Mapping`.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Items of a `( )` group, or of the whole signature at the bottom of the stack.
    Sequence(Vec<Pattern>),
    /// Entries of a `{ }` group as (lookup key, pattern).
    Mapping(Vec<(String, Pattern)>),

    /// `{a, name` - either an alias on its own or the start of `name: key`.
    AwaitingColonFromIdent(String),
    /// `{a, (b, c)` - a group nested in a mapping needs a `:key`.
    AwaitingColonFromPattern(Pattern),
    /// `{a, pattern:` - the next identifier is the lookup key.
    AwaitingKeyAfterColon(Pattern),
}

impl Frame {
    pub fn name(&self) -> &'static str {
        match self {
            Frame::Sequence(_) => "sequence",
            Frame::Mapping(_) => "mapping",
            Frame::AwaitingColonFromIdent(_) => "awaiting-colon-from-ident",
            Frame::AwaitingColonFromPattern(_) => "awaiting-colon-from-pattern",
            Frame::AwaitingKeyAfterColon(_) => "awaiting-key-after-colon",
        }
    }

    pub fn expectation(&self, is_root: bool) -> &'static str {
        match self {
            Frame::Sequence(_) if is_root => "an identifier, '(', '{' or ','",
            Frame::Sequence(_) => "an identifier, '(', '{', ',' or ')'",
            Frame::Mapping(_) => "an identifier, '(', '{', ',' or '}'",
            Frame::AwaitingColonFromIdent(_) => "':', ',' or '}' after a mapping entry",
            Frame::AwaitingColonFromPattern(_) => "a colon after sub-pattern",
            Frame::AwaitingKeyAfterColon(_) => "an identifier after colon",
        }
    }
}
