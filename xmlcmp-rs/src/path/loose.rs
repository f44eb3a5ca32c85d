//! Name-based paths.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::node::{Element, Fragment};
use crate::options::Options;

/// A chain of element names, optionally ending at an attribute.
///
/// A path is *open* until an attribute is appended, after which it is
/// *closed* and cannot be extended. The text form joins element names with
/// `/` and appends the attribute after a colon:
///
/// ```
/// use xmlcmp::LoosePath;
///
/// let path = LoosePath::root()
///     .element("Root").unwrap()
///     .element("Child").unwrap()
///     .attribute("attr").unwrap();
/// assert_eq!(path.to_string(), "/Root/Child:attr");
/// assert_eq!("/Root/Child:attr".parse::<LoosePath>().unwrap(), path);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LoosePath {
    elements: Vec<String>,
    attribute: Option<String>,
}

impl LoosePath {
    /// The empty open path.
    pub fn root() -> Self {
        LoosePath::default()
    }

    /// Extends an open path with an element name.
    pub fn element(&self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        self.ensure_open(&name)?;
        let mut path = self.clone();
        path.elements.push(name);
        Ok(path)
    }

    /// Closes an open path at an attribute name. The path must already name
    /// at least one element.
    pub fn attribute(&self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        self.ensure_open(&name)?;
        if self.elements.is_empty() {
            return Err(Error::invalid(format!(
                "attribute '{}' needs an owning element",
                name
            )));
        }
        let mut path = self.clone();
        path.attribute = Some(name);
        Ok(path)
    }

    /// Element names from the document element down.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// The terminal attribute name of a closed path.
    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.attribute.is_some()
    }

    /// Counts the nodes of `fragment` matching this path.
    ///
    /// Elements are followed by name at every level, regardless of their
    /// position. Without `value`, every matching element (or attribute, for
    /// a closed path) counts once. With `value`, an element counts only if
    /// its sole child is text equal to `value`, and an attribute only if its
    /// value is equal. Names and values compare as `options` dictates. A
    /// path that leads nowhere counts zero.
    pub fn count_at(&self, fragment: &Fragment, value: Option<&str>, options: Options) -> usize {
        let Some((first, rest)) = self.elements.split_first() else {
            return 0;
        };
        let root = fragment.root();
        if !options.element_names_eq(root.name(), first) {
            return 0;
        }

        let mut level: Vec<&Element> = vec![root];
        for name in rest {
            level = level
                .into_iter()
                .flat_map(Element::child_elements)
                .filter(|e| options.element_names_eq(e.name(), name))
                .collect();
            if level.is_empty() {
                return 0;
            }
        }

        match &self.attribute {
            Some(attribute) => level
                .iter()
                .flat_map(|e| e.attributes().iter())
                .filter(|a| options.attribute_names_eq(a.name(), attribute))
                .filter(|a| value.map_or(true, |v| options.attribute_values_eq(a.value(), v)))
                .count(),
            None => level
                .iter()
                .filter(|e| match value {
                    None => true,
                    Some(v) => e
                        .text()
                        .is_some_and(|text| options.element_values_eq(text, v)),
                })
                .count(),
        }
    }

    fn ensure_open(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::invalid("path segment must not be empty"));
        }
        if let Some(attribute) = &self.attribute {
            return Err(Error::invalid(format!(
                "path is closed at attribute '{}'",
                attribute
            )));
        }
        Ok(())
    }
}

impl fmt::Display for LoosePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.elements {
            write!(f, "/{}", name)?;
        }
        if let Some(attribute) = &self.attribute {
            write!(f, ":{}", attribute)?;
        }
        Ok(())
    }
}

impl FromStr for LoosePath {
    type Err = Error;

    /// Parses `/A/B` or `/A/B:attr`.
    fn from_str(s: &str) -> Result<Self> {
        let rest = s
            .strip_prefix('/')
            .ok_or_else(|| Error::invalid(format!("loose path '{}' must start with '/'", s)))?;
        let (elements, attribute) = match rest.split_once(':') {
            Some((elements, attribute)) => (elements, Some(attribute)),
            None => (rest, None),
        };

        let mut path = LoosePath::root();
        for name in elements.split('/') {
            path = path.element(name)?;
        }
        if let Some(attribute) = attribute {
            if attribute.contains(['/', ':']) {
                return Err(Error::invalid(format!(
                    "unexpected text after attribute in '{}'",
                    s
                )));
            }
            path = path.attribute(attribute)?;
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Declaration, ElementBuilder};

    fn document() -> Fragment {
        // <r><x id="1">v</x><x id="2">w</x><y><x id="3">v</x></y></r>
        let x = |id: &str, text: &str| {
            ElementBuilder::new("x")
                .attribute("id", id)
                .text(text)
                .build()
                .unwrap()
        };
        let root = ElementBuilder::new("r")
            .child(x("1", "v"))
            .child(x("2", "w"))
            .child(ElementBuilder::new("y").child(x("3", "v")).build().unwrap())
            .build()
            .unwrap();
        Fragment::new(Declaration::empty(), root)
    }

    fn count(path: &str, value: Option<&str>, options: Options) -> usize {
        let path: LoosePath = path.parse().unwrap();
        path.count_at(&document(), value, options)
    }

    #[test]
    fn test_builder_chain() {
        let open = LoosePath::root().element("A").unwrap();
        assert!(!open.is_closed());
        let closed = open.attribute("b").unwrap();
        assert!(closed.is_closed());
        assert_eq!(closed.attribute_name(), Some("b"));

        assert!(closed.element("C").is_err());
        assert!(closed.attribute("c").is_err());
        assert!(LoosePath::root().attribute("b").is_err());
        assert!(open.element("").is_err());
    }

    #[test]
    fn test_text_form() {
        for text in ["/Root", "/Root/Child", "/Root/Child:attr"] {
            let path: LoosePath = text.parse().unwrap();
            assert_eq!(path.to_string(), text);
        }
        for text in [
            "", "Root", "/", "/Root//Child", "/Root:", "/Root:a:b", "/Root:a/b", ":a",
        ] {
            assert!(text.parse::<LoosePath>().is_err(), "{}", text);
        }
    }

    #[test]
    fn test_count_elements() {
        assert_eq!(count("/r/x", None, Options::NONE), 2);
        assert_eq!(count("/r/x", Some("v"), Options::NONE), 1);
        assert_eq!(count("/r/y/x", Some("v"), Options::NONE), 1);
        assert_eq!(count("/r", None, Options::NONE), 1);
        assert_eq!(count("/r/x", Some("V"), Options::NONE), 0);
        assert_eq!(
            count("/r/x", Some("V"), Options::IGNORE_ELEMENTS_VALUE_CASE),
            1
        );
    }

    #[test]
    fn test_count_attributes() {
        assert_eq!(count("/r/x:id", None, Options::NONE), 2);
        assert_eq!(count("/r/x:id", Some("2"), Options::NONE), 1);
        assert_eq!(count("/r/x:ID", None, Options::NONE), 0);
        assert_eq!(
            count("/r/x:ID", None, Options::IGNORE_ATTRIBUTES_NAME_CASE),
            2
        );
    }

    #[test]
    fn test_unresolvable_counts_zero() {
        assert_eq!(count("/q", None, Options::NONE), 0);
        assert_eq!(count("/r/z/x", None, Options::NONE), 0);
        assert_eq!(count("/R/x", None, Options::NONE), 0);
        assert_eq!(count("/R/X", None, Options::IGNORE_ELEMENTS_NAME_CASE), 2);
        assert_eq!(
            LoosePath::root().count_at(&document(), None, Options::NONE),
            0
        );
    }
}
