//! Immutable node model for parsed documents.
//!
//! A document is a [`Fragment`] owning one [`Declaration`] and one document
//! [`Element`]. Elements own their attributes and an ordered list of child
//! [`Node`]s. Nothing here is mutated after construction; a changed document
//! is a new tree.
//!
//! Every non-root node knows its [`Position`] among its siblings. The
//! position drives strict path construction and the "first/last" checks used
//! when formatting diagnostics.

mod attribute;
mod element;
mod fragment;
mod leaf;

pub use attribute::{Attribute, AttributeCollection};
pub use element::{Element, ElementBuilder};
pub use fragment::{Declaration, Fragment};
pub use leaf::{Comment, Content};

use crate::diff::{Diff, DiffItem, DiffKind, DiffSet, PathPair};
use crate::error::{Error, Result};
use crate::options::Options;

/// Zero-based index of a node among its siblings, together with the number
/// of siblings at that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    index: usize,
    count: usize,
}

impl Position {
    /// Position of a node that has no siblings.
    pub const SOLE: Position = Position { index: 0, count: 1 };

    /// Creates a position, failing when `count` does not exceed `index`.
    pub fn new(index: usize, count: usize) -> Result<Self> {
        if count <= index {
            return Err(Error::invalid(format!(
                "sibling count {} must exceed index {}",
                count, index
            )));
        }
        Ok(Position { index, count })
    }

    /// Returns the zero-based index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of siblings, this node included.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns true if no sibling precedes this node.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns true if no sibling follows this node.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }

    /// Positions for a level holding `count` nodes.
    pub(crate) fn sequence(count: usize) -> impl Iterator<Item = Position> {
        (0..count).map(move |index| Position { index, count })
    }
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Text between tags.
    Content(Content),
    /// A comment.
    Comment(Comment),
}

impl Node {
    /// Returns the position of this node among its siblings.
    pub fn position(&self) -> Position {
        match self {
            Node::Element(e) => e.position(),
            Node::Content(c) => c.position(),
            Node::Comment(c) => c.position(),
        }
    }

    /// Returns the element name, if this is an element.
    pub fn name(&self) -> Option<&str> {
        self.as_element().map(Element::name)
    }

    /// Returns true if this is an element node.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Returns true if this is a text node.
    pub fn is_content(&self) -> bool {
        matches!(self, Node::Content(_))
    }

    /// Returns true if this is a comment node.
    pub fn is_comment(&self) -> bool {
        matches!(self, Node::Comment(_))
    }

    /// Returns a reference to the element, if this is an element node.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Returns a reference to the text, if this is a text node.
    pub fn as_content(&self) -> Option<&Content> {
        match self {
            Node::Content(c) => Some(c),
            _ => None,
        }
    }

    /// Short text identifying this node in diagnostics: the element name,
    /// or the text of a content or comment node.
    pub fn snippet(&self) -> &str {
        match self {
            Node::Element(e) => e.name(),
            Node::Content(c) => c.value(),
            Node::Comment(c) => c.value(),
        }
    }

    /// Compares this (actual) node with an expected node located by `paths`.
    ///
    /// Nodes of different kinds yield a single `Unexpected*` difference for
    /// the actual node. Same-kind nodes delegate to the kind's comparison.
    pub fn diff(&self, expected: &Node, paths: &PathPair, options: Options) -> DiffSet {
        match (self, expected) {
            (Node::Element(a), Node::Element(e)) => a.diff(e, paths, options),
            (Node::Content(a), Node::Content(e)) => a.diff(e, paths, options),
            (Node::Comment(a), Node::Comment(e)) => a.diff(e, paths, options),
            _ => DiffSet::single(
                Diff::new(
                    self.unexpected_kind(),
                    paths.actual.clone(),
                    paths.expected.clone(),
                )
                .with_expected(expected.snippet())
                .with_actual(self.snippet()),
            ),
        }
    }

    /// Same node re-placed at another position. Only used while a parent is
    /// being assembled.
    pub(crate) fn placed(self, position: Position) -> Node {
        match self {
            Node::Element(e) => Node::Element(e.placed(position)),
            Node::Content(c) => Node::Content(c.placed(position)),
            Node::Comment(c) => Node::Comment(c.placed(position)),
        }
    }

    fn unexpected_kind(&self) -> DiffKind {
        match self {
            Node::Element(_) => DiffKind::UnexpectedElement,
            Node::Content(_) => DiffKind::UnexpectedContent,
            Node::Comment(_) => DiffKind::UnexpectedComment,
        }
    }

    fn missing_kind(&self) -> DiffKind {
        match self {
            Node::Element(_) => DiffKind::MissingElement,
            Node::Content(_) => DiffKind::MissingContent,
            Node::Comment(_) => DiffKind::MissingComment,
        }
    }
}

impl DiffItem for Node {
    fn index(&self) -> usize {
        self.position().index()
    }

    fn same_identity(&self, other: &Self, options: Options) -> bool {
        match (self, other) {
            (Node::Element(a), Node::Element(b)) => options.element_names_eq(a.name(), b.name()),
            (Node::Content(_), Node::Content(_)) | (Node::Comment(_), Node::Comment(_)) => true,
            _ => false,
        }
    }

    fn diff_item(&self, expected: &Self, parents: &PathPair, options: Options) -> DiffSet {
        let paths = parents.child(self.index(), expected.index());
        self.diff(expected, &paths, options)
    }

    fn missing(&self, parents: &PathPair) -> Diff {
        Diff::new(
            self.missing_kind(),
            parents.actual.clone(),
            parents.expected.element(self.index()),
        )
        .with_expected(self.snippet())
    }

    fn unexpected(&self, parents: &PathPair) -> Diff {
        Diff::new(
            self.unexpected_kind(),
            parents.actual.element(self.index()),
            parents.expected.clone(),
        )
        .with_actual(self.snippet())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Content> for Node {
    fn from(content: Content) -> Self {
        Node::Content(content)
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Node::Comment(comment)
    }
}

/// Borrowed view over any of the six node variants.
///
/// Strict paths resolve to an `AnyNode`, and the path formatter walks a
/// chain of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyNode<'a> {
    /// The document root container.
    Fragment(&'a Fragment),
    /// The `<?xml ...?>` declaration.
    Declaration(&'a Declaration),
    /// An element.
    Element(&'a Element),
    /// An attribute of an element or a pseudo-attribute of the declaration.
    Attribute(&'a Attribute),
    /// Text content.
    Content(&'a Content),
    /// A comment.
    Comment(&'a Comment),
}

impl<'a> AnyNode<'a> {
    /// Returns the sibling position, or `None` for the fragment and the
    /// declaration, which sit outside any sibling sequence.
    pub fn position(&self) -> Option<Position> {
        match *self {
            AnyNode::Fragment(_) | AnyNode::Declaration(_) => None,
            AnyNode::Element(e) => Some(e.position()),
            AnyNode::Attribute(a) => Some(a.position()),
            AnyNode::Content(c) => Some(c.position()),
            AnyNode::Comment(c) => Some(c.position()),
        }
    }

    /// Returns the element or attribute name, if the node has one.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            AnyNode::Element(e) => Some(e.name()),
            AnyNode::Attribute(a) => Some(a.name()),
            _ => None,
        }
    }

    /// Returns the element, if this view is one.
    pub fn as_element(&self) -> Option<&'a Element> {
        match *self {
            AnyNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the attribute, if this view is one.
    pub fn as_attribute(&self) -> Option<&'a Attribute> {
        match *self {
            AnyNode::Attribute(a) => Some(a),
            _ => None,
        }
    }
}

impl<'a> From<&'a Node> for AnyNode<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Element(e) => AnyNode::Element(e),
            Node::Content(c) => AnyNode::Content(c),
            Node::Comment(c) => AnyNode::Comment(c),
        }
    }
}
