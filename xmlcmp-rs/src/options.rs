//! Equivalence options.
//!
//! Every name and value comparison made by the diff engines consults one of
//! these flags, and the two order flags select between the ordered and the
//! unordered engine for child elements and attributes independently.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{Error, Result};

bitflags! {
    /// Relaxations of the structural equivalence relation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Options: u8 {
        /// Element names compare case-insensitively.
        const IGNORE_ELEMENTS_NAME_CASE = 1 << 0;
        /// Text content and comment values compare case-insensitively.
        const IGNORE_ELEMENTS_VALUE_CASE = 1 << 1;
        /// Child nodes are paired regardless of their position.
        const IGNORE_ELEMENTS_ORDER = 1 << 2;
        /// Attribute names compare case-insensitively.
        const IGNORE_ATTRIBUTES_NAME_CASE = 1 << 3;
        /// Attribute values compare case-insensitively.
        const IGNORE_ATTRIBUTES_VALUE_CASE = 1 << 4;
        /// Attributes are paired regardless of their position.
        const IGNORE_ATTRIBUTES_ORDER = 1 << 5;
        /// Comments never produce differences.
        const IGNORE_COMMENTS = 1 << 6;

        /// Both order flags.
        const IGNORE_ALL_ORDER = Self::IGNORE_ELEMENTS_ORDER.bits()
            | Self::IGNORE_ATTRIBUTES_ORDER.bits();
        /// Element name and value case.
        const IGNORE_ELEMENTS_CASE = Self::IGNORE_ELEMENTS_NAME_CASE.bits()
            | Self::IGNORE_ELEMENTS_VALUE_CASE.bits();
        /// Attribute name and value case.
        const IGNORE_ATTRIBUTES_CASE = Self::IGNORE_ATTRIBUTES_NAME_CASE.bits()
            | Self::IGNORE_ATTRIBUTES_VALUE_CASE.bits();
        /// All four case flags.
        const IGNORE_ALL_CASE = Self::IGNORE_ELEMENTS_CASE.bits()
            | Self::IGNORE_ATTRIBUTES_CASE.bits();
    }
}

/// Flag and preset names accepted by [`Options::from_str`], normalized to
/// lowercase without separators.
const NAMED: &[(&str, Options)] = &[
    ("none", Options::NONE),
    ("strict", Options::STRICT),
    ("default", Options::DEFAULT),
    ("loose", Options::LOOSE),
    ("ignoreelementsnamecase", Options::IGNORE_ELEMENTS_NAME_CASE),
    ("ignoreelementsvaluecase", Options::IGNORE_ELEMENTS_VALUE_CASE),
    ("ignoreelementsorder", Options::IGNORE_ELEMENTS_ORDER),
    ("ignoreattributesnamecase", Options::IGNORE_ATTRIBUTES_NAME_CASE),
    ("ignoreattributesvaluecase", Options::IGNORE_ATTRIBUTES_VALUE_CASE),
    ("ignoreattributesorder", Options::IGNORE_ATTRIBUTES_ORDER),
    ("ignorecomments", Options::IGNORE_COMMENTS),
    ("ignoreelementscase", Options::IGNORE_ELEMENTS_CASE),
    ("ignoreattributescase", Options::IGNORE_ATTRIBUTES_CASE),
    ("ignoreallorder", Options::IGNORE_ALL_ORDER),
    ("ignoreallcase", Options::IGNORE_ALL_CASE),
];

impl Options {
    /// No relaxation at all.
    pub const NONE: Options = Options::empty();
    /// Alias of [`Options::NONE`].
    pub const STRICT: Options = Options::empty();
    /// Order-insensitive everywhere and comments ignored.
    pub const DEFAULT: Options = Options::IGNORE_ALL_ORDER.union(Options::IGNORE_COMMENTS);
    /// Order and case insensitive everywhere, comments ignored.
    pub const LOOSE: Options = Options::DEFAULT.union(Options::IGNORE_ALL_CASE);

    /// Compares two element names.
    pub fn element_names_eq(self, a: &str, b: &str) -> bool {
        text_eq(a, b, self.contains(Options::IGNORE_ELEMENTS_NAME_CASE))
    }

    /// Compares two text or comment values.
    pub fn element_values_eq(self, a: &str, b: &str) -> bool {
        text_eq(a, b, self.contains(Options::IGNORE_ELEMENTS_VALUE_CASE))
    }

    /// Compares two attribute names.
    pub fn attribute_names_eq(self, a: &str, b: &str) -> bool {
        text_eq(a, b, self.contains(Options::IGNORE_ATTRIBUTES_NAME_CASE))
    }

    /// Compares two attribute values.
    pub fn attribute_values_eq(self, a: &str, b: &str) -> bool {
        text_eq(a, b, self.contains(Options::IGNORE_ATTRIBUTES_VALUE_CASE))
    }

    /// Returns true when comments are excluded from comparison.
    pub fn ignores_comments(self) -> bool {
        self.contains(Options::IGNORE_COMMENTS)
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::NONE
    }
}

fn text_eq(a: &str, b: &str, ignore_case: bool) -> bool {
    if ignore_case {
        a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
    } else {
        a == b
    }
}

impl FromStr for Options {
    type Err = Error;

    /// Parses a list of flag or preset names separated by `|`, `,`, `+` or
    /// whitespace. Names are matched case-insensitively and may be written
    /// as `IgnoreComments`, `ignore-comments` or `IGNORE_COMMENTS`.
    fn from_str(s: &str) -> Result<Self> {
        let mut options = Options::NONE;
        for token in s
            .split(|c: char| c == '|' || c == ',' || c == '+' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let key: String = token
                .chars()
                .filter(|c| *c != '-' && *c != '_')
                .flat_map(char::to_lowercase)
                .collect();
            let flag = NAMED
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, flag)| *flag)
                .ok_or_else(|| Error::invalid(format!("unknown option '{}'", token)))?;
            options |= flag;
        }
        Ok(options)
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let names = [
            (Options::IGNORE_ELEMENTS_NAME_CASE, "IgnoreElementsNameCase"),
            (Options::IGNORE_ELEMENTS_VALUE_CASE, "IgnoreElementsValueCase"),
            (Options::IGNORE_ELEMENTS_ORDER, "IgnoreElementsOrder"),
            (Options::IGNORE_ATTRIBUTES_NAME_CASE, "IgnoreAttributesNameCase"),
            (Options::IGNORE_ATTRIBUTES_VALUE_CASE, "IgnoreAttributesValueCase"),
            (Options::IGNORE_ATTRIBUTES_ORDER, "IgnoreAttributesOrder"),
            (Options::IGNORE_COMMENTS, "IgnoreComments"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Options::STRICT, Options::NONE);
        assert!(Options::DEFAULT.contains(Options::IGNORE_ELEMENTS_ORDER));
        assert!(Options::DEFAULT.contains(Options::IGNORE_ATTRIBUTES_ORDER));
        assert!(Options::DEFAULT.contains(Options::IGNORE_COMMENTS));
        assert!(!Options::DEFAULT.intersects(Options::IGNORE_ALL_CASE));
        assert!(Options::LOOSE.contains(Options::IGNORE_ALL_CASE | Options::IGNORE_ALL_ORDER));
    }

    #[test]
    fn test_case_sensitive_comparisons() {
        let options = Options::NONE;
        assert!(options.element_names_eq("Planet", "Planet"));
        assert!(!options.element_names_eq("Planet", "planet"));
        assert!(!options.attribute_values_eq("AU", "au"));
    }

    #[test]
    fn test_case_insensitive_comparisons() {
        let options = Options::IGNORE_ELEMENTS_NAME_CASE | Options::IGNORE_ATTRIBUTES_VALUE_CASE;
        assert!(options.element_names_eq("MÔME", "môme"));
        assert!(options.attribute_values_eq("123X", "123x"));
        assert!(!options.attribute_names_eq("Value", "value"));
        assert!(!options.element_values_eq("Hello", "hello"));
    }

    #[test]
    fn test_parse_names() {
        let options: Options = "IgnoreComments | ignore-elements-order".parse().unwrap();
        assert_eq!(
            options,
            Options::IGNORE_COMMENTS | Options::IGNORE_ELEMENTS_ORDER
        );
        let options: Options = "loose".parse().unwrap();
        assert_eq!(options, Options::LOOSE);
        let options: Options = "IGNORE_ATTRIBUTES_NAME_CASE,strict".parse().unwrap();
        assert_eq!(options, Options::IGNORE_ATTRIBUTES_NAME_CASE);
        assert!("".parse::<Options>().unwrap().is_empty());
    }

    #[test]
    fn test_case_groupings() {
        let options: Options = "IgnoreElementsCase".parse().unwrap();
        assert_eq!(
            options,
            Options::IGNORE_ELEMENTS_NAME_CASE | Options::IGNORE_ELEMENTS_VALUE_CASE
        );
        assert!(options.element_names_eq("Planet", "PLANET"));
        assert!(options.element_values_eq("Mars", "mars"));
        assert!(!options.attribute_names_eq("Unit", "unit"));

        let options: Options = "ignore-attributes-case".parse().unwrap();
        assert_eq!(options, Options::IGNORE_ATTRIBUTES_CASE);
        assert!(options.attribute_names_eq("Unit", "unit"));
        assert!(options.attribute_values_eq("AU", "au"));
        assert!(!options.element_names_eq("Planet", "planet"));

        assert_eq!(
            Options::IGNORE_ELEMENTS_CASE | Options::IGNORE_ATTRIBUTES_CASE,
            Options::IGNORE_ALL_CASE
        );
        assert_eq!(
            Options::IGNORE_ATTRIBUTES_CASE.to_string(),
            "IgnoreAttributesNameCase | IgnoreAttributesValueCase"
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "IgnoreEverything".parse::<Options>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Options::NONE.to_string(), "None");
        assert_eq!(
            Options::DEFAULT.to_string(),
            "IgnoreElementsOrder | IgnoreAttributesOrder | IgnoreComments"
        );
        let reparsed: Options = Options::LOOSE.to_string().parse().unwrap();
        assert_eq!(reparsed, Options::LOOSE);
    }
}
