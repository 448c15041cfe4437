//! Convenient imports for facetmap.
//!
//! Everything needed to declare a record type and work with a store:
//!
//! ```ignore
//! use facetmap::prelude::*;
//!
//! let store = FacetMap::<Book>::new()?;
//! store.add(book)?;
//! let hits = store.get("Author", "Jane Austen");
//! ```

// Main entry point
pub use crate::store::FacetMap;

// Error handling
pub use crate::error::{Error, Result, SchemaError, StoreError};

// Schema declaration
pub use facet_core::{Attribute, AttributeKind, Descriptor, Record, Role, Shape};
