mod into_iter;
pub use self::into_iter::{BorrowedIntoIter, ValueIntoIter};

use std::borrow::Cow;

use rustc_hash::FxHashMap;

use super::Destructure;

/// Dynamically typed input for the converter.
///
/// Converting owned values clones every mapping entry that is looked up,
/// subtree included. Pass `Cow::Borrowed(&value)` instead to hand out
/// references into the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,

    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),

    List(Vec<Value>),
    Map(FxHashMap<String, Value>),
}

impl Value {
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

impl Destructure for Value {
    type Items = ValueIntoIter;

    /// Lists yield their elements and strings their characters.
    fn into_items(self) -> Option<Self::Items> {
        match self {
            Value::List(items) => Some(ValueIntoIter::List(items.into_iter())),
            Value::String(string) => Some(ValueIntoIter::Chars(string, 0)),
            _ => None,
        }
    }

    fn get(&self, key: &str) -> Option<Self> {
        match self {
            Value::Map(entries) => entries.get(key).cloned(),
            _ => None,
        }
    }
}

impl<'v> Destructure for Cow<'v, Value> {
    type Items = BorrowedIntoIter<'v>;

    fn into_items(self) -> Option<Self::Items> {
        match self {
            Cow::Borrowed(Value::List(items)) => Some(BorrowedIntoIter::Borrowed(items.iter())),
            Cow::Borrowed(Value::String(string)) => Some(BorrowedIntoIter::Owned(
                ValueIntoIter::Chars(string.clone(), 0),
            )),
            Cow::Borrowed(_) => None,
            Cow::Owned(value) => value.into_items().map(BorrowedIntoIter::Owned),
        }
    }

    fn get(&self, key: &str) -> Option<Self> {
        match *self {
            Cow::Borrowed(Value::Map(entries)) => entries.get(key).map(Cow::Borrowed),
            Cow::Borrowed(_) => None,
            Cow::Owned(ref value) => value.get(key).map(Cow::Owned),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strings_iterate_characters() {
        let chars: Vec<_> = Value::from("żółw").into_items().unwrap().collect();
        assert_eq!(chars, vec![
            Value::from("ż"),
            Value::from("ó"),
            Value::from("ł"),
            Value::from("w"),
        ]);
        assert_eq!(Value::from("").into_items().unwrap().count(), 0);
    }

    #[test]
    fn lists_iterate_elements() {
        let items: Vec<_> = Value::from(vec![1, 2, 3]).into_items().unwrap().collect();
        assert_eq!(items, vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
    }

    #[test]
    fn scalars_and_maps_are_not_sequences() {
        assert!(Value::Null.into_items().is_none());
        assert!(Value::from(42).into_items().is_none());
        assert!(Value::from(4.2).into_items().is_none());
        assert!(Value::from(true).into_items().is_none());
        assert!(Value::map([("a", Value::Null)]).into_items().is_none());
    }

    #[test]
    fn lookup_distinguishes_null_from_absent() {
        let map = Value::map([("present", Value::Null), ("number", 7.into())]);
        assert_eq!(map.get("present"), Some(Value::Null));
        assert_eq!(map.get("number"), Some(Value::Integer(7)));
        assert_eq!(map.get("absent"), None);
    }

    #[test]
    fn lookup_on_non_maps_finds_nothing() {
        assert_eq!(Value::from(vec!["x"]).get("x"), None);
        assert_eq!(Value::from("x").get("x"), None);
        assert_eq!(Value::Null.get("x"), None);
    }

    #[test]
    fn borrowed_lookups_point_into_the_input() {
        let inner = Value::map([("leaf", 1.into())]);
        let outer = Value::map([("inner", inner.clone())]);
        let root = Cow::Borrowed(&outer);

        let Some(Cow::Borrowed(found)) = root.get("inner") else {
            panic!("expected a borrowed lookup");
        };
        let Value::Map(entries) = &outer else {
            unreachable!();
        };
        assert!(std::ptr::eq(found, &entries["inner"]));
        assert_eq!(found, &inner);
        assert_eq!(root.get("absent"), None);
        assert_eq!(Cow::Borrowed(&Value::Null).get("inner"), None);
    }

    #[test]
    fn borrowed_sequences_iterate_like_owned_ones() {
        let list = Value::from(vec![1, 2]);
        let items: Vec<_> = Cow::Borrowed(&list).into_items().unwrap().collect();
        assert!(items.iter().all(|item| matches!(item, Cow::Borrowed(_))));
        assert_eq!(items, vec![Cow::Owned(Value::Integer(1)), Cow::Owned(Value::Integer(2))]);

        let word = Value::from("ab");
        let chars: Vec<_> = Cow::Borrowed(&word).into_items().unwrap().collect();
        assert_eq!(chars, vec![Cow::Owned(Value::from("a")), Cow::Owned(Value::from("b"))]);

        assert!(Cow::Borrowed(&Value::Null).into_items().is_none());
    }

    #[test]
    fn collecting_builds_a_list() {
        let value: Value = ["a", "b"].into_iter().collect();
        assert_eq!(value, Value::List(vec!["a".into(), "b".into()]));
    }
}
