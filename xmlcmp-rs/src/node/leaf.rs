//! Text and comment leaves.

use crate::diff::{Diff, DiffKind, DiffSet, PathPair};
use crate::options::Options;

use super::Position;

/// Text found between tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    position: Position,
    value: String,
}

impl Content {
    /// Creates a text node.
    pub fn new(position: Position, value: impl Into<String>) -> Self {
        Content {
            position,
            value: value.into(),
        }
    }

    /// Returns the position among the parent's children.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Compares the text of this (actual) node with an expected one.
    pub fn diff(&self, expected: &Content, paths: &PathPair, options: Options) -> DiffSet {
        if options.element_values_eq(&self.value, &expected.value) {
            return DiffSet::empty();
        }
        DiffSet::single(
            Diff::new(
                DiffKind::MismatchedContent,
                paths.actual.clone(),
                paths.expected.clone(),
            )
            .with_expected(expected.value.as_str())
            .with_actual(self.value.as_str()),
        )
    }

    pub(crate) fn placed(self, position: Position) -> Self {
        Content { position, ..self }
    }
}

/// A `<!-- ... -->` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    position: Position,
    value: String,
}

impl Comment {
    /// Creates a comment node.
    pub fn new(position: Position, value: impl Into<String>) -> Self {
        Comment {
            position,
            value: value.into(),
        }
    }

    /// Returns the position among the parent's children.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the comment text, without the delimiters.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Compares this (actual) comment with an expected one. Always empty
    /// when comments are ignored.
    pub fn diff(&self, expected: &Comment, paths: &PathPair, options: Options) -> DiffSet {
        if options.ignores_comments() || options.element_values_eq(&self.value, &expected.value) {
            return DiffSet::empty();
        }
        DiffSet::single(
            Diff::new(
                DiffKind::MismatchedComment,
                paths.actual.clone(),
                paths.expected.clone(),
            )
            .with_expected(expected.value.as_str())
            .with_actual(self.value.as_str()),
        )
    }

    pub(crate) fn placed(self, position: Position) -> Self {
        Comment { position, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_value_case() {
        let actual = Content::new(Position::SOLE, "Hello");
        let expected = Content::new(Position::SOLE, "hello");
        let root = PathPair::root();

        let diffs = actual.diff(&expected, &root, Options::NONE);
        assert_eq!(diffs.len(), 1);
        assert_eq!(
            diffs.iter().next().unwrap().kind(),
            DiffKind::MismatchedContent
        );

        assert!(actual
            .diff(&expected, &root, Options::IGNORE_ELEMENTS_VALUE_CASE)
            .is_empty());
    }

    #[test]
    fn test_comment_ignored() {
        let actual = Comment::new(Position::SOLE, "x");
        let expected = Comment::new(Position::SOLE, "y");
        let root = PathPair::root();

        assert_eq!(actual.diff(&expected, &root, Options::NONE).len(), 1);
        assert!(actual
            .diff(&expected, &root, Options::IGNORE_COMMENTS)
            .is_empty());
    }
}
