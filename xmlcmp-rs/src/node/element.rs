//! Elements and the builder used to assemble them.

use tracing::trace;

use crate::diff::{Diff, DiffEngine, DiffKind, DiffSet, EngineKind, PathPair};
use crate::error::{Error, Result};
use crate::options::Options;

use super::{Attribute, AttributeCollection, Comment, Content, Node, Position};

/// A named element with attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    position: Position,
    name: String,
    attributes: AttributeCollection,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element.
    ///
    /// Fails if the name is empty or if the children's positions do not
    /// describe their actual order (child `i` must sit at index `i` of
    /// `children.len()`). Use [`ElementBuilder`] to have positions assigned.
    pub fn new(
        position: Position,
        name: impl Into<String>,
        attributes: AttributeCollection,
        children: Vec<Node>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid("element name must not be empty"));
        }
        let count = children.len();
        for (index, child) in children.iter().enumerate() {
            let position = child.position();
            if position.index() != index || position.count() != count {
                return Err(Error::invalid(format!(
                    "child {} of <{}> is placed at {}/{}",
                    index,
                    name,
                    position.index(),
                    position.count()
                )));
            }
        }
        Ok(Element {
            position,
            name,
            attributes,
            children,
        })
    }

    /// Returns the position among the parent's children.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes.
    pub fn attributes(&self) -> &AttributeCollection {
        &self.attributes
    }

    /// Returns the children in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the child at `index`.
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Iterates the child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Returns true if the element has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the text of the element when its only child is a text node.
    pub fn text(&self) -> Option<&str> {
        match self.children.as_slice() {
            [only] => only.as_content().map(Content::value),
            _ => None,
        }
    }

    /// Renders the element and its subtree as compact markup.
    pub fn to_xml(&self) -> String {
        crate::xml::element_to_string(self)
    }

    /// Compares this (actual) element with an expected one located by
    /// `paths`.
    ///
    /// Elements with different names yield a single mismatch and their
    /// contents are not examined. Otherwise the attribute differences come
    /// first, followed by the differences among the children.
    pub fn diff(&self, expected: &Element, paths: &PathPair, options: Options) -> DiffSet {
        if !options.element_names_eq(&self.name, &expected.name) {
            return DiffSet::single(
                Diff::new(
                    DiffKind::MismatchedElement,
                    paths.actual.clone(),
                    paths.expected.clone(),
                )
                .with_expected(expected.name.as_str())
                .with_actual(self.name.as_str()),
            );
        }

        let attributes = self.attributes.diff(&expected.attributes, paths, options);
        let actual = self.comparable_children(options);
        let expected_children = expected.comparable_children(options);
        let engine = EngineKind::for_elements(options);
        trace!(
            element = %self.name,
            ?engine,
            actual = actual.len(),
            expected = expected_children.len(),
            "comparing children"
        );
        let children = engine.diff(&actual, &expected_children, paths, options);

        let mut builder = DiffSet::builder();
        builder.add_set(attributes);
        builder.add_set(children);
        builder.build()
    }

    /// Children taking part in a comparison: comments are left out when
    /// they are ignored.
    fn comparable_children(&self, options: Options) -> Vec<&Node> {
        let ignore_comments = options.ignores_comments();
        self.children
            .iter()
            .filter(|child| !(ignore_comments && child.is_comment()))
            .collect()
    }

    pub(crate) fn placed(self, position: Position) -> Self {
        Element { position, ..self }
    }
}

/// Accumulates the attributes and children of one element.
///
/// Positions are assigned when the element is built, so children can be
/// appended without knowing how many siblings will follow.
///
/// ```
/// use xmlcmp::ElementBuilder;
///
/// let planet = ElementBuilder::new("Planet")
///     .attribute("diameter", "4878 km")
///     .text("Mercury")
///     .build()
///     .unwrap();
/// assert_eq!(planet.text(), Some("Mercury"));
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl ElementBuilder {
    /// Starts an element named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        ElementBuilder {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the name of the element being built.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(name, value);
        self
    }

    /// Adds a text child.
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.push_text(value);
        self
    }

    /// Adds a comment child.
    pub fn comment(mut self, value: impl Into<String>) -> Self {
        self.push_comment(value);
        self
    }

    /// Adds an element child.
    pub fn child(mut self, element: Element) -> Self {
        self.push_element(element);
        self
    }

    /// Adds an attribute in place.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Adds text in place. Text directly following another text child is
    /// merged into it.
    pub fn push_text(&mut self, value: impl Into<String>) {
        let value = value.into();
        match self.children.last_mut() {
            Some(Node::Content(last)) => {
                let merged = format!("{}{}", last.value(), value);
                *last = Content::new(Position::SOLE, merged);
            }
            _ => self
                .children
                .push(Node::Content(Content::new(Position::SOLE, value))),
        }
    }

    /// Adds a comment in place.
    pub fn push_comment(&mut self, value: impl Into<String>) {
        self.children
            .push(Node::Comment(Comment::new(Position::SOLE, value)));
    }

    /// Adds an element child in place.
    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Finishes the element as a document root.
    pub fn build(self) -> Result<Element> {
        self.build_at(Position::SOLE)
    }

    /// Finishes the element at the given position.
    pub fn build_at(self, position: Position) -> Result<Element> {
        let attributes = self
            .attributes
            .into_iter()
            .map(|(name, value)| Attribute::new(Position::SOLE, name, value))
            .collect::<Result<Vec<_>>>()?;
        let count = self.children.len();
        let children = self
            .children
            .into_iter()
            .zip(Position::sequence(count))
            .map(|(child, position)| child.placed(position))
            .collect();
        Element::new(
            position,
            self.name,
            AttributeCollection::new(attributes),
            children,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_assigns_positions() {
        let element = ElementBuilder::new("Root")
            .text("a")
            .child(ElementBuilder::new("Child").build().unwrap())
            .comment("c")
            .build()
            .unwrap();

        let positions: Vec<_> = element
            .children()
            .iter()
            .map(|c| (c.position().index(), c.position().count()))
            .collect();
        assert_eq!(positions, vec![(0, 3), (1, 3), (2, 3)]);
        assert!(element.child(1).unwrap().is_element());
    }

    #[test]
    fn test_builder_merges_adjacent_text() {
        let element = ElementBuilder::new("Root")
            .text("Hello ")
            .text("World")
            .build()
            .unwrap();
        assert_eq!(element.children().len(), 1);
        assert_eq!(element.text(), Some("Hello World"));
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert!(matches!(
            ElementBuilder::new("").build(),
            Err(Error::InvalidArgument(_))
        ));
        let unnamed = ElementBuilder::new("Root").attribute("", "x");
        assert!(unnamed.build().is_err());

        let misplaced = Node::Content(Content::new(Position::new(1, 2).unwrap(), "x"));
        assert!(Element::new(
            Position::SOLE,
            "Root",
            AttributeCollection::empty(),
            vec![misplaced]
        )
        .is_err());
    }

    #[test]
    fn test_text_requires_sole_content() {
        let mixed = ElementBuilder::new("Root")
            .text("a")
            .comment("b")
            .build()
            .unwrap();
        assert_eq!(mixed.text(), None);
        assert_eq!(ElementBuilder::new("Empty").build().unwrap().text(), None);
    }

    #[test]
    fn test_name_mismatch_skips_contents() {
        let actual = ElementBuilder::new("b")
            .attribute("x", "1")
            .child(ElementBuilder::new("z").build().unwrap())
            .build()
            .unwrap();
        let expected = ElementBuilder::new("c").build().unwrap();
        let diffs = actual.diff(&expected, &PathPair::root().child(0, 0), Options::NONE);

        assert_eq!(diffs.len(), 1);
        let diff = diffs.iter().next().unwrap();
        assert_eq!(diff.kind(), DiffKind::MismatchedElement);
        assert_eq!(diff.expected_snippet(), Some("c"));
        assert_eq!(diff.actual_snippet(), Some("b"));
    }

    #[test]
    fn test_attributes_reported_before_children() {
        let actual = ElementBuilder::new("Planet")
            .attribute("name", "Mercury")
            .text("Hot")
            .build()
            .unwrap();
        let expected = ElementBuilder::new("Planet")
            .attribute("name", "Venus")
            .text("Cloudy")
            .build()
            .unwrap();
        let diffs = actual.diff(&expected, &PathPair::root().child(0, 0), Options::NONE);

        let kinds: Vec<_> = diffs.iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            vec![DiffKind::MismatchedAttribute, DiffKind::MismatchedContent]
        );
    }

    #[test]
    fn test_extra_comment_ignored() {
        let actual = ElementBuilder::new("r")
            .comment("note")
            .child(ElementBuilder::new("x").build().unwrap())
            .build()
            .unwrap();
        let expected = ElementBuilder::new("r")
            .child(ElementBuilder::new("x").build().unwrap())
            .build()
            .unwrap();
        let paths = PathPair::root().child(0, 0);

        assert!(!actual.diff(&expected, &paths, Options::NONE).is_empty());
        assert!(actual
            .diff(&expected, &paths, Options::IGNORE_COMMENTS)
            .is_empty());
    }
}
