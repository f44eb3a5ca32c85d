//! xmlcmp - Structural XML comparison
//!
//! This library compares an *actual* XML document against an *expected* one
//! and reports exactly where the two trees diverge, under a configurable
//! equivalence relation.
//!
//! # Overview
//!
//! Both documents are parsed into immutable trees ([`Fragment`]). Comparing
//! them walks both trees at once and yields a [`DiffSet`]: empty when the
//! documents are equivalent, otherwise one [`Diff`] per divergence, each
//! carrying a [`StrictPath`] into both documents.
//!
//! [`Options`] relax the comparison: element and attribute names or values
//! may compare case-insensitively, children and attributes may be paired
//! regardless of order, and comments may be ignored.
//!
//! # Example
//!
//! ```
//! use xmlcmp::{compare_str, DiffKind, Options};
//!
//! let diffs = compare_str("<r><y/><x/></r>", "<r><x/><y/></r>", Options::NONE).unwrap();
//! assert_eq!(diffs.len(), 1);
//! assert_eq!(diffs.get(0).unwrap().kind(), DiffKind::MismatchedElement);
//!
//! let diffs = compare_str("<r><y/><x/></r>", "<r><x/><y/></r>", Options::DEFAULT).unwrap();
//! assert!(diffs.is_empty());
//! ```
//!
//! # Key Features
//!
//! - Positional comparison that stops at the first misalignment, so a
//!   shifted sequence yields one precise difference instead of a cascade
//! - Greedy order-insensitive pairing that prefers identical partners
//! - Name-based [`LoosePath`] queries such as `/Root/Child:attr`
//! - Readable diagnostics through [`Diff::describe`]

pub mod diff;
pub mod error;
pub mod node;
pub mod options;
pub mod path;
pub mod xml;

pub use diff::{Diff, DiffKind, DiffSet, DiffSetBuilder, DiffTarget, EngineKind};
pub use error::{Error, Result};
pub use node::{
    AnyNode, Attribute, AttributeCollection, Comment, Content, Declaration, Element,
    ElementBuilder, Fragment, Node, Position,
};
pub use options::Options;
pub use path::{LoosePath, StrictPath, StrictStep};
pub use xml::{
    format_path, parse, parse_file, parse_with, print_to_string, print_to_string_pretty,
    ParserOptions, XmlParser, XmlPrinter, XmlPrinterOptions,
};

use tracing::debug;

/// Parses both documents and compares them.
///
/// Gives the same result as [`parse`] followed by [`Fragment::diff`].
/// Comments stay in both trees and are filtered during the comparison.
pub fn compare_str(actual: &str, expected: &str, options: Options) -> Result<DiffSet> {
    let actual = parse(actual)?;
    let expected = parse(expected)?;
    let diffs = actual.diff(&expected, options);
    debug!(differences = diffs.len(), "compare_str finished");
    Ok(diffs)
}
