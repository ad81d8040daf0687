use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Leaf(String), // x

    Sequence(Vec<Pattern>),          // (a, b, c)
    Mapping(Vec<(String, Pattern)>), // {a, b: key, (c, d): other}
}

impl Pattern {
    /// Appends the names bound by this pattern, in the order the converter
    /// produces their values.
    pub fn collect_names<'p>(&'p self, names: &mut Vec<&'p str>) {
        match self {
            Pattern::Leaf(name) => names.push(name),
            Pattern::Sequence(patterns) => {
                for pattern in patterns {
                    pattern.collect_names(names);
                }
            }
            Pattern::Mapping(entries) => {
                for (_, pattern) in entries {
                    pattern.collect_names(names);
                }
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Pattern::Leaf(_) => 1,
            Pattern::Sequence(patterns) => patterns.iter().map(Pattern::leaf_count).sum(),
            Pattern::Mapping(entries) => entries.iter().map(|(_, p)| p.leaf_count()).sum(),
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Leaf(name) => write!(f, "{name}"),
            Pattern::Sequence(patterns) => {
                write!(f, "(")?;
                for (i, pattern) in patterns.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{pattern}")?;
                }
                write!(f, ")")
            }
            Pattern::Mapping(entries) => {
                write!(f, "{{")?;
                for (i, (key, pattern)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match pattern {
                        Pattern::Leaf(name) if name == key => write!(f, "{name}")?,
                        pattern => write!(f, "{pattern}: {key}")?,
                    }
                }
                write!(f, "}}")
            }
        }
    }
}
