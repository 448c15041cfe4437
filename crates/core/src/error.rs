//! Error taxonomy for schema derivation and store operations.
//!
//! Two families:
//! - [`SchemaError`]: construction-time failures. All are fatal to store
//!   construction; there is no partial or degraded store.
//! - [`StoreError`]: per-call failures. Never fatal to the store, and the
//!   store's state is left unchanged by a failing call.
//!
//! Every error is returned to the immediate caller. Nothing here is logged
//! away, retried, or swallowed; lookups never error at all, because an
//! unmatched attribute or value is a normal outcome rather than a fault.

use crate::shape::AttributeKind;
use thiserror::Error;

/// Failures while deriving a schema descriptor from a type's shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The described type is not a record with named attributes.
    #[error("record type required, got {shape} shape")]
    NotRecord {
        /// Shape variant that was supplied instead.
        shape: &'static str,
    },

    /// Zero or more than one attribute carries the primary-key role.
    #[error("exactly one primary-key attribute required, found {count}")]
    PrimaryKeyCardinality {
        /// Number of attributes declared as primary key.
        count: usize,
    },

    /// An attribute carrying an indexing role is not string-typed.
    #[error("attribute `{attribute}` has {kind} type, indexed attributes must be strings")]
    IndexAttributeType {
        /// Name of the offending attribute.
        attribute: &'static str,
        /// Its declared kind.
        kind: AttributeKind,
    },
}

/// Failures during a store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An instance produced no value for an attribute its shape declares as
    /// primary key or index. The store is left untouched when this occurs.
    #[error("record produced no value for declared attribute `{attribute}`")]
    AttributeUnavailable {
        /// Name of the attribute the instance failed to produce.
        attribute: &'static str,
    },
}

/// Result of schema derivation.
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Result of a store operation.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
