use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Index(usize), // position in a sequence, or the top-level argument
    Key(String),  // mapping lookup
}

/// Where in the nested input a value was found, starting from the index of
/// the top-level argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<PathSegment>);

impl Path {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Path(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub(super) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub(super) fn pop(&mut self) {
        self.0.pop();
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match segment {
                PathSegment::Index(index) => write!(f, "{index}")?,
                PathSegment::Key(key) => write!(f, "'{key}'")?,
            }
        }
        Ok(())
    }
}
