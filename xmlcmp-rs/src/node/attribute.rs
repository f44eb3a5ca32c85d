//! Attributes and attribute collections.

use crate::diff::{Diff, DiffEngine, DiffItem, DiffKind, DiffSet, EngineKind, PathPair};
use crate::error::{Error, Result};
use crate::options::Options;

use super::Position;

/// A name/value pair attached to an element or to the declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    position: Position,
    name: String,
    value: String,
}

impl Attribute {
    /// Creates an attribute. The name must not be empty; the value may be.
    pub fn new(
        position: Position,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid("attribute name must not be empty"));
        }
        Ok(Attribute {
            position,
            name,
            value: value.into(),
        })
    }

    /// Returns the position among the owner's attributes.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Compares this (actual) attribute with an expected one.
    ///
    /// A name difference is reported as an unexpected attribute; only when
    /// the names agree are the values compared.
    pub fn diff(&self, expected: &Attribute, paths: &PathPair, options: Options) -> DiffSet {
        if !options.attribute_names_eq(&self.name, &expected.name) {
            return DiffSet::single(
                Diff::new(
                    DiffKind::UnexpectedAttribute,
                    paths.actual.clone(),
                    paths.expected.clone(),
                )
                .with_expected(expected.name.as_str())
                .with_actual(self.name.as_str()),
            );
        }
        if !options.attribute_values_eq(&self.value, &expected.value) {
            return DiffSet::single(
                Diff::new(
                    DiffKind::MismatchedAttribute,
                    paths.actual.clone(),
                    paths.expected.clone(),
                )
                .with_expected(expected.value.as_str())
                .with_actual(self.value.as_str()),
            );
        }
        DiffSet::empty()
    }

    fn placed(self, position: Position) -> Self {
        Attribute { position, ..self }
    }
}

impl DiffItem for Attribute {
    fn index(&self) -> usize {
        self.position.index()
    }

    fn same_identity(&self, other: &Self, options: Options) -> bool {
        options.attribute_names_eq(&self.name, &other.name)
    }

    fn diff_item(&self, expected: &Self, parents: &PathPair, options: Options) -> DiffSet {
        let paths = parents.attribute(self.index(), expected.index());
        self.diff(expected, &paths, options)
    }

    fn missing(&self, parents: &PathPair) -> Diff {
        Diff::new(
            DiffKind::MissingAttribute,
            parents.actual.clone(),
            parents.expected.attribute(self.index()),
        )
        .with_expected(self.name.as_str())
    }

    fn unexpected(&self, parents: &PathPair) -> Diff {
        Diff::new(
            DiffKind::UnexpectedAttribute,
            parents.actual.attribute(self.index()),
            parents.expected.clone(),
        )
        .with_actual(self.name.as_str())
    }
}

/// The ordered attributes of one element or declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeCollection {
    items: Vec<Attribute>,
}

impl AttributeCollection {
    /// Builds a collection, renumbering the attributes in the given order.
    pub fn new(attributes: Vec<Attribute>) -> Self {
        let count = attributes.len();
        let items = attributes
            .into_iter()
            .zip(Position::sequence(count))
            .map(|(attribute, position)| attribute.placed(position))
            .collect();
        AttributeCollection { items }
    }

    /// Builds a collection from name/value pairs.
    pub fn from_pairs<N, V, I>(pairs: I) -> Result<Self>
    where
        N: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (N, V)>,
    {
        let attributes = pairs
            .into_iter()
            .map(|(name, value)| Attribute::new(Position::SOLE, name, value))
            .collect::<Result<Vec<_>>>()?;
        Ok(AttributeCollection::new(attributes))
    }

    /// An empty collection.
    pub fn empty() -> Self {
        AttributeCollection::default()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the attribute at `index`.
    pub fn get(&self, index: usize) -> Option<&Attribute> {
        self.items.get(index)
    }

    /// Iterates the attributes in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.items.iter()
    }

    /// Returns the first attribute with the given name.
    pub fn find(&self, name: &str, options: Options) -> Option<&Attribute> {
        self.items
            .iter()
            .find(|a| options.attribute_names_eq(a.name(), name))
    }

    /// Returns true if an attribute named `name` exists and, when `value` is
    /// given, carries that value.
    pub fn contains(&self, name: &str, value: Option<&str>, options: Options) -> bool {
        self.items.iter().any(|a| {
            options.attribute_names_eq(a.name(), name)
                && value.map_or(true, |v| options.attribute_values_eq(a.value(), v))
        })
    }

    /// Compares this (actual) collection with an expected one, using the
    /// engine selected by the attribute order flag.
    pub fn diff(
        &self,
        expected: &AttributeCollection,
        parents: &PathPair,
        options: Options,
    ) -> DiffSet {
        let actual: Vec<&Attribute> = self.items.iter().collect();
        let expected: Vec<&Attribute> = expected.items.iter().collect();
        EngineKind::for_attributes(options).diff(&actual, &expected, parents, options)
    }
}

impl<'a> IntoIterator for &'a AttributeCollection {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
