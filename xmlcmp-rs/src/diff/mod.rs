//! Structural differences and the engines that find them.
//!
//! Comparison recurses down both trees at once. At every element the
//! attributes and the children are handed to an engine chosen by the order
//! flags of [`Options`]: the [`OrderedEngine`] pairs items by position, the
//! [`UnorderedEngine`] pairs them greedily by content and then by name.
//! Each pairing yields a [`DiffSet`], and the sets are concatenated in
//! document order.

mod diff_set;
mod engine;
mod kind;
mod ordered;
mod record;
mod unordered;

pub use diff_set::{DiffSet, DiffSetBuilder};
pub use engine::{DiffEngine, EngineKind};
pub use kind::{DiffKind, DiffTarget};
pub use ordered::OrderedEngine;
pub use record::Diff;
pub use unordered::UnorderedEngine;

use crate::options::Options;
use crate::path::StrictPath;

/// The pair of strict paths locating one comparison in both documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    /// Location in the actual document.
    pub actual: StrictPath,
    /// Location in the expected document.
    pub expected: StrictPath,
}

impl PathPair {
    /// Both document roots.
    pub fn root() -> Self {
        PathPair {
            actual: StrictPath::root(),
            expected: StrictPath::root(),
        }
    }

    /// Child nodes at the given indices of each side.
    pub fn child(&self, actual: usize, expected: usize) -> Self {
        PathPair {
            actual: self.actual.element(actual),
            expected: self.expected.element(expected),
        }
    }

    /// Attributes at the given indices of each side.
    pub fn attribute(&self, actual: usize, expected: usize) -> Self {
        PathPair {
            actual: self.actual.attribute(actual),
            expected: self.expected.attribute(expected),
        }
    }

    /// The declarations of both documents.
    pub fn declaration(&self) -> Self {
        PathPair {
            actual: self.actual.declaration(),
            expected: self.expected.declaration(),
        }
    }
}

/// An item of a collection the engines can pair up: a child node or an
/// attribute.
///
/// Comparisons always run from the actual item (`self`) towards the
/// expected one.
pub trait DiffItem {
    /// Position of the item in its unfiltered collection.
    fn index(&self) -> usize;

    /// Returns true if both items name the same thing, so that a
    /// difference between them concerns their contents rather than their
    /// placement.
    fn same_identity(&self, other: &Self, options: Options) -> bool;

    /// Compares this (actual) item with an expected one, both children of
    /// `parents`.
    fn diff_item(&self, expected: &Self, parents: &PathPair, options: Options) -> DiffSet;

    /// Reports this expected item as absent from the actual document.
    fn missing(&self, parents: &PathPair) -> Diff;

    /// Reports this actual item as absent from the expected document.
    fn unexpected(&self, parents: &PathPair) -> Diff;
}
