//! Positional comparison.

use tracing::trace;

use crate::options::Options;

use super::{DiffEngine, DiffItem, DiffSet, PathPair};

/// Pairs items by position.
///
/// Comparison stops at the first pair that differs and does not share an
/// identity: once the sequences are misaligned every later pairing would
/// only repeat the same shift, so nothing past it is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedEngine;

impl DiffEngine for OrderedEngine {
    fn diff<T: DiffItem>(
        &self,
        actual: &[&T],
        expected: &[&T],
        parents: &PathPair,
        options: Options,
    ) -> DiffSet {
        let mut builder = DiffSet::builder();

        for (i, expected_item) in expected.iter().enumerate() {
            let Some(actual_item) = actual.get(i) else {
                for missing in &expected[i..] {
                    builder.add(missing.missing(parents));
                }
                return builder.build();
            };

            let pair = actual_item.diff_item(expected_item, parents, options);
            if !pair.is_empty() && !actual_item.same_identity(expected_item, options) {
                trace!(index = i, "sequences misaligned");
                builder.add_set(pair);
                return builder.build();
            }
            builder.add_set(pair);
        }

        for unexpected in actual.iter().skip(expected.len()) {
            builder.add(unexpected.unexpected(parents));
        }
        builder.build()
    }
}
