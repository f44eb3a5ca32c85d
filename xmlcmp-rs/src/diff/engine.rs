//! Engine selection.

use crate::options::Options;

use super::{DiffItem, DiffSet, OrderedEngine, PathPair, UnorderedEngine};

/// Strategy pairing the items of two same-kind collections.
pub trait DiffEngine {
    /// Compares `actual` with `expected`, both collections belonging to the
    /// nodes located by `parents`.
    fn diff<T: DiffItem>(
        &self,
        actual: &[&T],
        expected: &[&T],
        parents: &PathPair,
        options: Options,
    ) -> DiffSet;
}

/// The engine chosen for one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Positional pairing.
    Ordered,
    /// Greedy best-match pairing.
    Unordered,
}

impl EngineKind {
    /// Engine for the children of an element.
    pub fn for_elements(options: Options) -> Self {
        Self::select(options.contains(Options::IGNORE_ELEMENTS_ORDER))
    }

    /// Engine for the attributes of an element or declaration.
    pub fn for_attributes(options: Options) -> Self {
        Self::select(options.contains(Options::IGNORE_ATTRIBUTES_ORDER))
    }

    fn select(ignore_order: bool) -> Self {
        if ignore_order {
            EngineKind::Unordered
        } else {
            EngineKind::Ordered
        }
    }
}

impl DiffEngine for EngineKind {
    fn diff<T: DiffItem>(
        &self,
        actual: &[&T],
        expected: &[&T],
        parents: &PathPair,
        options: Options,
    ) -> DiffSet {
        match self {
            EngineKind::Ordered => OrderedEngine.diff(actual, expected, parents, options),
            EngineKind::Unordered => UnorderedEngine.diff(actual, expected, parents, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_per_collection() {
        let options = Options::IGNORE_ELEMENTS_ORDER;
        assert_eq!(EngineKind::for_elements(options), EngineKind::Unordered);
        assert_eq!(EngineKind::for_attributes(options), EngineKind::Ordered);

        let options = Options::IGNORE_ATTRIBUTES_ORDER;
        assert_eq!(EngineKind::for_elements(options), EngineKind::Ordered);
        assert_eq!(EngineKind::for_attributes(options), EngineKind::Unordered);

        assert_eq!(
            EngineKind::for_elements(Options::DEFAULT),
            EngineKind::Unordered
        );
        assert_eq!(
            EngineKind::for_attributes(Options::NONE),
            EngineKind::Ordered
        );
    }
}
