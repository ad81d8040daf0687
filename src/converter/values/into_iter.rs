use std::borrow::Cow;

use super::Value;

pub enum ValueIntoIter {
    List(std::vec::IntoIter<Value>),
    Chars(String, usize), // string, byte cursor
}

impl Iterator for ValueIntoIter {
    type Item = Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ValueIntoIter::List(items) => items.next(),
            ValueIntoIter::Chars(string, cursor) => {
                let char = string[*cursor..].chars().next()?;
                *cursor += char.len_utf8();
                Some(Value::String(char.to_string()))
            }
        }
    }
}

/// Items of a `Cow<Value>`: list elements stay borrowed, characters of a
/// string are always owned.
pub enum BorrowedIntoIter<'v> {
    Borrowed(std::slice::Iter<'v, Value>),
    Owned(ValueIntoIter),
}

impl<'v> Iterator for BorrowedIntoIter<'v> {
    type Item = Cow<'v, Value>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            BorrowedIntoIter::Borrowed(items) => items.next().map(Cow::Borrowed),
            BorrowedIntoIter::Owned(items) => items.next().map(Cow::Owned),
        }
    }
}
