//! Unified error type for facetmap.
//!
//! Construction and operation failures keep their precise types
//! ([`SchemaError`], [`StoreError`]); this module provides the single
//! wrapper callers can propagate with `?` across both.

use thiserror::Error;

pub use facet_core::{SchemaError, StoreError};

/// Any facetmap error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Schema derivation failed; no store was constructed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A store operation failed; the store's state is unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for facetmap operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error occurred during store construction.
    pub fn is_schema(&self) -> bool {
        matches!(self, Error::Schema(_))
    }

    /// Whether this error occurred during a store operation.
    pub fn is_store(&self) -> bool {
        matches!(self, Error::Store(_))
    }
}
