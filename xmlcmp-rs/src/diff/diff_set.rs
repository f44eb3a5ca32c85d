//! Ordered collections of differences.

use std::fmt;

use crate::node::Fragment;

use super::Diff;

/// The immutable result of a comparison. Empty means equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSet {
    diffs: Vec<Diff>,
}

impl DiffSet {
    /// The success value.
    pub fn empty() -> Self {
        DiffSet::default()
    }

    /// A set holding exactly one difference.
    pub fn single(diff: Diff) -> Self {
        DiffSet { diffs: vec![diff] }
    }

    /// Starts accumulating a new set.
    pub fn builder() -> DiffSetBuilder {
        DiffSetBuilder::new()
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn get(&self, index: usize) -> Option<&Diff> {
        self.diffs.get(index)
    }

    /// Iterates the differences in the order they were found.
    pub fn iter(&self) -> std::slice::Iter<'_, Diff> {
        self.diffs.iter()
    }

    /// Describes every difference, see [`Diff::describe`].
    pub fn describe(&self, actual: &Fragment, expected: &Fragment) -> Vec<String> {
        self.diffs
            .iter()
            .map(|diff| diff.describe(actual, expected))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DiffSet {
    type Item = &'a Diff;
    type IntoIter = std::slice::Iter<'a, Diff>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.iter()
    }
}

impl IntoIterator for DiffSet {
    type Item = Diff;
    type IntoIter = std::vec::IntoIter<Diff>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.into_iter()
    }
}

impl fmt::Display for DiffSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diff) in self.diffs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diff)?;
        }
        Ok(())
    }
}

/// Accumulates differences into a [`DiffSet`].
#[derive(Debug, Default)]
pub struct DiffSetBuilder {
    diffs: Vec<Diff>,
}

impl DiffSetBuilder {
    pub fn new() -> Self {
        DiffSetBuilder::default()
    }

    /// Appends one difference.
    pub fn add(&mut self, diff: Diff) -> &mut Self {
        self.diffs.push(diff);
        self
    }

    /// Appends every difference of another set, keeping their order.
    pub fn add_set(&mut self, set: DiffSet) -> &mut Self {
        self.diffs.extend(set.diffs);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    pub fn build(self) -> DiffSet {
        DiffSet { diffs: self.diffs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffKind;
    use crate::path::StrictPath;

    fn missing(name: &str) -> Diff {
        Diff::new(
            DiffKind::MissingElement,
            StrictPath::root().element(0),
            StrictPath::root().element(0).element(1),
        )
        .with_expected(name)
    }

    #[test]
    fn test_builder_flattens_sets() {
        let mut inner = DiffSet::builder();
        inner.add(missing("b")).add(missing("c"));

        let mut outer = DiffSetBuilder::new();
        assert!(outer.is_empty());
        outer.add(missing("a"));
        outer.add_set(inner.build());
        outer.add_set(DiffSet::empty());
        let set = outer.build();

        let names: Vec<_> = set.iter().filter_map(Diff::expected_snippet).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_display_one_per_line() {
        let mut builder = DiffSet::builder();
        builder.add(missing("a")).add(missing("b"));
        let text = builder.build().to_string();
        assert_eq!(
            text,
            "Missing element. Expected = 'a'.\nMissing element. Expected = 'b'."
        );
        assert_eq!(DiffSet::empty().to_string(), "");
    }
}
