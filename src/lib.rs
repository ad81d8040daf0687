//! Destructuring patterns for nested data.
//!
//! A pattern text such as `label, (x, y)` or `{label, {x, y: ypos}: point}`
//! describes once how to pull named values out of nested sequences and
//! key-value collections. [`parse`] turns it into a [`Signature`] exposing the
//! bound names and the number of inputs, and [`Signature::convert`] applies it
//! to run-time data, producing the values in the same order as the names.
//!
//! ```text
//! pattern_list := pattern (',' pattern)* ','?
//! pattern      := IDENT | '(' pattern_list? ')' | map
//! map          := '{' map_entry (',' map_entry)* ','? '}'
//! map_entry    := IDENT | IDENT ':' IDENT | pattern ':' IDENT
//! ```

pub mod converter;
pub mod lexer;
pub mod parser;
pub mod shared;

pub use converter::{convert, Destructure, MatchError, Path, PathSegment, Value};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, GrammarError, Pattern, Signature};
