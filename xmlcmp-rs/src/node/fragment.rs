//! Document roots.

use tracing::debug;

use crate::diff::{DiffSet, PathPair};
use crate::error::Result;
use crate::options::Options;
use crate::path::{LoosePath, StrictPath};

use super::{AnyNode, AttributeCollection, Element, Position};

/// The `<?xml ...?>` declaration and its pseudo-attributes.
///
/// A document without a declaration still has one, with no attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    attributes: AttributeCollection,
}

impl Declaration {
    /// Creates a declaration with the given pseudo-attributes.
    pub fn new(attributes: AttributeCollection) -> Self {
        Declaration { attributes }
    }

    /// A declaration without pseudo-attributes.
    pub fn empty() -> Self {
        Declaration::default()
    }

    /// Returns the pseudo-attributes in document order.
    pub fn attributes(&self) -> &AttributeCollection {
        &self.attributes
    }

    /// Returns the `version` pseudo-attribute.
    pub fn version(&self) -> Option<&str> {
        self.pseudo("version")
    }

    /// Returns the `encoding` pseudo-attribute.
    pub fn encoding(&self) -> Option<&str> {
        self.pseudo("encoding")
    }

    /// Returns the `standalone` pseudo-attribute.
    pub fn standalone(&self) -> Option<&str> {
        self.pseudo("standalone")
    }

    /// Compares the pseudo-attributes of this (actual) declaration with an
    /// expected one.
    pub fn diff(&self, expected: &Declaration, paths: &PathPair, options: Options) -> DiffSet {
        self.attributes.diff(&expected.attributes, paths, options)
    }

    fn pseudo(&self, name: &str) -> Option<&str> {
        self.attributes.find(name, Options::NONE).map(|a| a.value())
    }
}

/// A parsed document: one declaration and one document element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    declaration: Declaration,
    root: Element,
}

impl Fragment {
    /// Creates a document. The root element is re-placed as a sole child.
    pub fn new(declaration: Declaration, root: Element) -> Self {
        Fragment {
            declaration,
            root: root.placed(Position::SOLE),
        }
    }

    /// Returns the declaration.
    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    /// Returns the document element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Compares this (actual) document with an expected one.
    ///
    /// An empty result means both documents are equivalent under `options`.
    pub fn diff(&self, expected: &Fragment, options: Options) -> DiffSet {
        let paths = PathPair::root();
        let prologue = paths.declaration();
        let declaration = self.declaration.diff(&expected.declaration, &prologue, options);
        let mut builder = DiffSet::builder();
        builder.add_set(declaration);
        builder.add_set(self.root.diff(&expected.root, &paths.child(0, 0), options));
        let diffs = builder.build();
        debug!(options = %options, differences = diffs.len(), "compared documents");
        diffs
    }

    /// Counts the nodes matching a loose path, see [`LoosePath::count_at`].
    pub fn count_at(&self, path: &LoosePath, value: Option<&str>, options: Options) -> usize {
        path.count_at(self, value, options)
    }

    /// Returns true if at least one node matches the loose path.
    pub fn exists(&self, path: &LoosePath, value: Option<&str>, options: Options) -> bool {
        self.count_at(path, value, options) > 0
    }

    /// Parses `path` as a loose path and counts its matches.
    pub fn count_at_str(&self, path: &str, value: Option<&str>, options: Options) -> Result<usize> {
        let path: LoosePath = path.parse()?;
        Ok(self.count_at(&path, value, options))
    }

    /// Resolves a strict path against this document.
    pub fn find(&self, path: &StrictPath) -> Option<AnyNode<'_>> {
        path.find(self)
    }

    /// Renders the document as compact markup, declaration included when it
    /// has pseudo-attributes.
    pub fn to_xml(&self) -> String {
        crate::xml::fragment_to_string(self)
    }
}

impl<'a> From<&'a Fragment> for AnyNode<'a> {
    fn from(fragment: &'a Fragment) -> Self {
        AnyNode::Fragment(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffKind;
    use crate::node::ElementBuilder;

    fn document(root: Element) -> Fragment {
        let declaration =
            Declaration::new(AttributeCollection::from_pairs([("version", "1.0")]).unwrap());
        Fragment::new(declaration, root)
    }

    #[test]
    fn test_declaration_accessors() {
        let declaration = Declaration::new(
            AttributeCollection::from_pairs([("version", "1.0"), ("encoding", "UTF-8")]).unwrap(),
        );
        assert_eq!(declaration.version(), Some("1.0"));
        assert_eq!(declaration.encoding(), Some("UTF-8"));
        assert_eq!(declaration.standalone(), None);
        assert!(Declaration::empty().attributes().is_empty());
    }

    #[test]
    fn test_reflexive() {
        let fragment = document(
            ElementBuilder::new("Root")
                .attribute("a", "1")
                .text("hello")
                .comment("note")
                .build()
                .unwrap(),
        );
        for options in [Options::NONE, Options::DEFAULT, Options::LOOSE] {
            assert!(fragment.diff(&fragment, options).is_empty());
        }
    }

    #[test]
    fn test_declaration_differences() {
        let root = ElementBuilder::new("Root").build().unwrap();
        let actual = Fragment::new(
            Declaration::new(AttributeCollection::from_pairs([("version", "1.1")]).unwrap()),
            root.clone(),
        );
        let expected = document(root);
        let diffs = actual.diff(&expected, Options::NONE);

        assert_eq!(diffs.len(), 1);
        let diff = diffs.iter().next().unwrap();
        assert_eq!(diff.kind(), DiffKind::MismatchedAttribute);
        assert_eq!(diff.location().to_string(), "/?xml:0");
    }

    #[test]
    fn test_root_is_sole_child() {
        let root = ElementBuilder::new("Root")
            .build_at(Position::new(2, 5).unwrap())
            .unwrap();
        let fragment = document(root);
        assert_eq!(fragment.root().position(), Position::SOLE);
    }
}
