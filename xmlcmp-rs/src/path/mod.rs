//! Addressing nodes inside a document.
//!
//! Two independent schemes are provided:
//!
//! - [`LoosePath`] names the elements to follow, e.g. `/Root/Child:attr`,
//!   and may match any number of nodes. It answers existence queries.
//! - [`StrictPath`] indexes into each level, e.g. `/0/2:1`, and resolves to
//!   exactly one node of one document. Every [`Diff`](crate::Diff) carries
//!   a strict path into each of the compared documents.

mod loose;
mod strict;

pub use loose::LoosePath;
pub use strict::{StrictPath, StrictStep};
