//! Runtime map structures for the facetmap record store.
//!
//! Two building blocks, each guarded by its own reader/writer lock:
//! - [`PrimaryTable`]: primary-key string → stored value
//! - [`ValueIndex`]: attribute value → set of primary keys (one per
//!   indexed attribute)
//!
//! There is deliberately no structure here that spans both maps: every
//! operation acquires exactly one lock, holds it for one map access, and
//! releases it. Cross-map consistency is the caller's concern and is
//! intentionally only eventual.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod primary;

pub use index::ValueIndex;
pub use primary::PrimaryTable;
