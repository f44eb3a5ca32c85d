//! A single difference.

use std::fmt;

use crate::node::Fragment;
use crate::path::StrictPath;

use super::{DiffKind, DiffTarget};

/// One difference between the actual and the expected document.
///
/// Both locations are always present because the two trees may have
/// diverged at this point: `location` resolves in the actual document and
/// `expected_location` in the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    kind: DiffKind,
    location: StrictPath,
    expected_location: StrictPath,
    expected_snippet: Option<String>,
    actual_snippet: Option<String>,
}

impl Diff {
    /// Creates a difference without snippets.
    pub fn new(kind: DiffKind, location: StrictPath, expected_location: StrictPath) -> Self {
        Diff {
            kind,
            location,
            expected_location,
            expected_snippet: None,
            actual_snippet: None,
        }
    }

    /// Attaches the text found in the expected document.
    pub fn with_expected(mut self, snippet: impl Into<String>) -> Self {
        self.expected_snippet = Some(snippet.into());
        self
    }

    /// Attaches the text found in the actual document.
    pub fn with_actual(mut self, snippet: impl Into<String>) -> Self {
        self.actual_snippet = Some(snippet.into());
        self
    }

    pub fn kind(&self) -> DiffKind {
        self.kind
    }

    pub fn target(&self) -> DiffTarget {
        self.kind.target()
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Location in the actual document.
    pub fn location(&self) -> &StrictPath {
        &self.location
    }

    /// Location in the expected document.
    pub fn expected_location(&self) -> &StrictPath {
        &self.expected_location
    }

    pub fn expected_snippet(&self) -> Option<&str> {
        self.expected_snippet.as_deref()
    }

    pub fn actual_snippet(&self) -> Option<&str> {
        self.actual_snippet.as_deref()
    }

    /// Renders the difference followed by the formatted location, taken from
    /// the expected document for missing items and from the actual document
    /// otherwise.
    pub fn describe(&self, actual: &Fragment, expected: &Fragment) -> String {
        let path = match self.target() {
            DiffTarget::Expected => self.expected_location.format(expected),
            DiffTarget::Actual | DiffTarget::Both => self.location.format(actual),
        };
        format!("{}\nPath : {}", self, path)
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        if let Some(snippet) = self.expected_snippet().filter(|s| !s.is_empty()) {
            write!(f, " Expected = '{}'.", snippet)?;
        }
        if let Some(snippet) = self.actual_snippet().filter(|s| !s.is_empty()) {
            write!(f, " Found = '{}'.", snippet)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_snippets() {
        let diff = Diff::new(
            DiffKind::MismatchedAttribute,
            StrictPath::root().element(0).attribute(1),
            StrictPath::root().element(0).attribute(1),
        )
        .with_expected("456")
        .with_actual("123");

        assert_eq!(
            diff.to_string(),
            "Unexpected attribute value found. Expected = '456'. Found = '123'."
        );
        assert_eq!(diff.target(), DiffTarget::Both);
    }

    #[test]
    fn test_display_skips_empty_snippets() {
        let diff = Diff::new(
            DiffKind::MissingElement,
            StrictPath::root().element(0),
            StrictPath::root().element(0).element(2),
        )
        .with_expected("Planet")
        .with_actual("");

        assert_eq!(diff.to_string(), "Missing element. Expected = 'Planet'.");
        assert_eq!(diff.actual_snippet(), Some(""));
    }
}
