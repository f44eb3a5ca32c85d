//! Order-insensitive comparison.
//!
//! Each comparison makes two sweeps. The first walks the expected items
//! looking for partners among the actual ones and reports what is missing;
//! the second walks the actual items and reports what is unexpected. Within
//! a sweep every item first looks for an identical partner, and only the
//! items left over fall back to the first unclaimed partner with the same
//! identity. Pairing is greedy: a partner, once claimed, is never
//! reconsidered.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::options::Options;

use super::{DiffEngine, DiffItem, DiffSet, DiffSetBuilder, PathPair};

/// Pairs items regardless of their position.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnorderedEngine;

/// Direction of one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    /// Expected items looking for actual partners.
    Missing,
    /// Actual items looking for expected partners.
    Unexpected,
}

impl DiffEngine for UnorderedEngine {
    fn diff<T: DiffItem>(
        &self,
        actual: &[&T],
        expected: &[&T],
        parents: &PathPair,
        options: Options,
    ) -> DiffSet {
        // (actual index, expected index) of pairs already reported
        let mut reported = FxHashSet::default();
        let mut builder = DiffSet::builder();
        sweep(
            Sweep::Missing,
            expected,
            actual,
            parents,
            options,
            &mut reported,
            &mut builder,
        );
        sweep(
            Sweep::Unexpected,
            actual,
            expected,
            parents,
            options,
            &mut reported,
            &mut builder,
        );
        builder.build()
    }
}

fn sweep<T: DiffItem>(
    direction: Sweep,
    source: &[&T],
    pool: &[&T],
    parents: &PathPair,
    options: Options,
    reported: &mut FxHashSet<(usize, usize)>,
    builder: &mut DiffSetBuilder,
) {
    let compare = |item: &T, partner: &T| match direction {
        Sweep::Missing => partner.diff_item(item, parents, options),
        Sweep::Unexpected => item.diff_item(partner, parents, options),
    };
    let key = |item: &T, partner: &T| match direction {
        Sweep::Missing => (partner.index(), item.index()),
        Sweep::Unexpected => (item.index(), partner.index()),
    };

    let mut claimed = vec![false; pool.len()];
    let mut unmatched = Vec::new();

    for &item in source {
        let exact = (0..pool.len()).find(|&j| !claimed[j] && compare(item, pool[j]).is_empty());
        match exact {
            Some(j) => claimed[j] = true,
            None => unmatched.push(item),
        }
    }

    for item in unmatched {
        let partner =
            (0..pool.len()).find(|&j| !claimed[j] && item.same_identity(pool[j], options));
        match partner {
            Some(j) => {
                claimed[j] = true;
                let pair = compare(item, pool[j]);
                if reported.insert(key(item, pool[j])) {
                    builder.add_set(pair);
                } else {
                    trace!(index = item.index(), "pair already reported");
                }
            }
            None => {
                builder.add(match direction {
                    Sweep::Missing => item.missing(parents),
                    Sweep::Unexpected => item.unexpected(parents),
                });
            }
        }
    }
}
