mod errors;
mod path;
mod values;

pub use self::{
    errors::MatchError,
    path::{Path, PathSegment},
    values::{BorrowedIntoIter, Value, ValueIntoIter},
};

use crate::parser::{Pattern, Signature};

use tracing::debug;

/// What the converter needs from run-time data.
///
/// Sequence patterns consume the value through [`Destructure::into_items`],
/// exactly once and in order, so one-shot producers work as well as
/// containers. Mapping patterns only ever look keys up; a value does not have
/// to be any particular kind of map.
pub trait Destructure: Sized {
    type Items: Iterator<Item = Self>;

    /// `None` when the value cannot be iterated.
    fn into_items(self) -> Option<Self::Items>;

    /// `None` when the key is absent. A present key holding a null-like value
    /// must still return `Some`.
    ///
    /// Called once per mapping entry, so a `Self` that deep-copies here
    /// copies nested subtrees once per level.
    fn get(&self, key: &str) -> Option<Self>;
}

/// Destructures one input per top-level pattern and returns the extracted
/// values in the order of [`Signature::names`].
pub fn convert<V: Destructure>(signature: &Signature, inputs: Vec<V>) -> Result<Vec<V>, MatchError> {
    if inputs.len() != signature.arity() {
        return Err(MatchError::Arity {
            expected: signature.arity(),
            actual: inputs.len(),
        });
    }

    let mut output = Vec::with_capacity(signature.names().len());
    let mut path = Path::default();

    for (index, (input, pattern)) in inputs.into_iter().zip(signature.patterns()).enumerate() {
        path.push(PathSegment::Index(index));
        if let Err(error) = unpack(input, pattern, &mut path, &mut output) {
            debug!(%error, "conversion failed");
            return Err(error);
        }
        path.pop();
    }

    debug!(values = output.len(), "converted arguments");
    Ok(output)
}

fn unpack<V: Destructure>(
    value: V,
    pattern: &Pattern,
    path: &mut Path,
    output: &mut Vec<V>,
) -> Result<(), MatchError> {
    match pattern {
        Pattern::Leaf(_) => output.push(value),

        Pattern::Sequence(patterns) => {
            let Some(items) = value.into_items() else {
                return Err(MatchError::NotASequence {
                    expected: patterns.len(),
                    path: path.clone(),
                });
            };

            let items: Vec<V> = items.collect();
            if items.len() != patterns.len() {
                return Err(MatchError::Shape {
                    expected: patterns.len(),
                    actual: items.len(),
                    path: path.clone(),
                });
            }

            for (index, (item, pattern)) in items.into_iter().zip(patterns).enumerate() {
                path.push(PathSegment::Index(index));
                unpack(item, pattern, path, output)?;
                path.pop();
            }
        }

        // keys the pattern doesn't name are never looked at
        Pattern::Mapping(entries) => {
            for (key, pattern) in entries {
                let Some(item) = value.get(key) else {
                    return Err(MatchError::KeyMissing {
                        key: key.clone(),
                        path: path.clone(),
                    });
                };

                path.push(PathSegment::Key(key.clone()));
                unpack(item, pattern, path, output)?;
                path.pop();
            }
        }
    }

    Ok(())
}
