//! Core types for the facetmap record store.
//!
//! This crate defines the schema layer shared by the engine and the public
//! facade:
//! - [`Record`]: the contract a storable type implements (structural
//!   description plus per-attribute string accessors)
//! - [`Shape`], [`Attribute`], [`AttributeKind`], [`Role`]: the structural
//!   description vocabulary
//! - [`Descriptor`]: the validated, immutable schema derived once per store
//! - [`SchemaError`], [`StoreError`]: the error taxonomy

#![warn(missing_docs)]

pub mod descriptor;
pub mod error;
pub mod shape;

pub use descriptor::Descriptor;
pub use error::{SchemaError, SchemaResult, StoreError, StoreResult};
pub use shape::{Attribute, AttributeKind, Record, Role, Shape};
