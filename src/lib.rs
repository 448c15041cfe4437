//! # facetmap
//!
//! In-memory, concurrency-safe record store indexing structured records by
//! one unique primary key and any number of secondary string-valued
//! attributes.
//!
//! A record type declares its schema once — which attribute is the primary
//! key, which are secondary indexes — and a [`FacetMap`] bound to that
//! schema supports adding, removing, and looking records up by unique
//! identity or by any indexed attribute value.
//!
//! ## Quick Start
//!
//! ```ignore
//! use facetmap::prelude::*;
//!
//! // Declare a record type (impl Record for Book: one primary key,
//! // any number of string indexes).
//! let store = FacetMap::<Book>::new()?;
//!
//! store.add(Book::new("1", "Jane Eyre", "Charlotte Bronte"))?;
//! store.add(Book::new("3", "Pride and Prejudice", "Jane Austen"))?;
//!
//! // Unique lookup by primary key
//! let by_id = store.get("Id", "1");
//!
//! // Multi-valued lookup by any indexed attribute
//! let austen = store.get("Author", "Jane Austen");
//! ```
//!
//! ## Consistency model
//!
//! Each internal map — the primary table and one value index per indexed
//! attribute — is guarded by its own reader/writer lock. No operation holds
//! two locks at once, which maximizes concurrency across unrelated indexes
//! and rules out deadlock, at the cost of cross-map atomicity: a concurrent
//! reader may briefly observe a record in the primary table before its
//! index entries appear. See [`FacetMap`] for the full contract.

#![warn(missing_docs)]

mod error;
mod store;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use store::FacetMap;

// Re-export the schema layer
pub use facet_core::{
    Attribute, AttributeKind, Descriptor, Record, Role, SchemaError, Shape, StoreError,
};
