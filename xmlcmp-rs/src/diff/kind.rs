//! Difference categories.

use std::fmt;

/// Which document a difference is located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffTarget {
    /// The item exists only in the actual document.
    Actual,
    /// The item exists only in the expected document.
    Expected,
    /// The item exists in both documents but differs.
    Both,
}

/// The category of a single difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    /// Paired elements have different names.
    MismatchedElement,
    /// An element exists only in the actual document.
    UnexpectedElement,
    /// An element exists only in the expected document.
    MissingElement,
    /// Paired attributes have different values.
    MismatchedAttribute,
    /// An attribute exists only in the actual document, or paired attributes
    /// have different names.
    UnexpectedAttribute,
    /// An attribute exists only in the expected document.
    MissingAttribute,
    /// Paired text nodes have different text.
    MismatchedContent,
    /// A text node exists only in the actual document.
    UnexpectedContent,
    /// A text node exists only in the expected document.
    MissingContent,
    /// Paired comments have different text.
    MismatchedComment,
    /// A comment exists only in the actual document.
    UnexpectedComment,
    /// A comment exists only in the expected document.
    MissingComment,
}

impl DiffKind {
    /// Human readable message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            DiffKind::MismatchedElement | DiffKind::UnexpectedElement => {
                "Unexpected element found."
            }
            DiffKind::MissingElement => "Missing element.",
            DiffKind::MismatchedAttribute => "Unexpected attribute value found.",
            DiffKind::UnexpectedAttribute => "Unexpected attribute found.",
            DiffKind::MissingAttribute => "Missing attribute.",
            DiffKind::MismatchedContent => "Unexpected element value found.",
            DiffKind::UnexpectedContent => "Unexpected text content found.",
            DiffKind::MissingContent => "Missing text content.",
            DiffKind::MismatchedComment | DiffKind::UnexpectedComment => {
                "Unexpected comment found."
            }
            DiffKind::MissingComment => "Missing comment.",
        }
    }

    /// The document the difference should be shown in.
    pub fn target(self) -> DiffTarget {
        match self {
            DiffKind::MismatchedElement
            | DiffKind::MismatchedAttribute
            | DiffKind::MismatchedContent
            | DiffKind::MismatchedComment => DiffTarget::Both,
            DiffKind::UnexpectedElement
            | DiffKind::UnexpectedAttribute
            | DiffKind::UnexpectedContent
            | DiffKind::UnexpectedComment => DiffTarget::Actual,
            DiffKind::MissingElement
            | DiffKind::MissingAttribute
            | DiffKind::MissingContent
            | DiffKind::MissingComment => DiffTarget::Expected,
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        assert_eq!(DiffKind::MismatchedElement.target(), DiffTarget::Both);
        assert_eq!(DiffKind::UnexpectedAttribute.target(), DiffTarget::Actual);
        assert_eq!(DiffKind::MissingComment.target(), DiffTarget::Expected);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DiffKind::MismatchedElement.message(),
            DiffKind::UnexpectedElement.message()
        );
        assert_eq!(
            DiffKind::MismatchedAttribute.message(),
            "Unexpected attribute value found."
        );
        assert_eq!(DiffKind::MissingElement.message(), "Missing element.");
        assert_eq!(DiffKind::MissingContent.to_string(), "MissingContent");
    }
}
