//! Validated schema descriptor.
//!
//! A [`Descriptor`] is derived exactly once, when a store is constructed,
//! and is immutable afterwards. Every subsequent operation on the store
//! reads it without synchronization.

use crate::error::{SchemaError, SchemaResult};
use crate::shape::{AttributeKind, Role, Shape};

/// The immutable schema of one record type: which attribute is the primary
/// key and which attributes are secondary indexes.
///
/// Derivation validates, in order:
/// 1. the shape describes a record with named attributes;
/// 2. exactly one attribute carries the primary-key role;
/// 3. every attribute carrying an indexing role is string-typed.
///
/// Derivation has no side effects and touches no shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    type_name: &'static str,
    primary: &'static str,
    indexes: Vec<&'static str>,
}

impl Descriptor {
    /// Derive and validate a descriptor from a structural description.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::NotRecord`] for non-record shapes
    /// - [`SchemaError::PrimaryKeyCardinality`] for zero or multiple
    ///   primary-key attributes
    /// - [`SchemaError::IndexAttributeType`] for a non-string attribute
    ///   tagged as primary key or index
    pub fn derive(shape: Shape) -> SchemaResult<Self> {
        let (type_name, attributes) = match shape {
            Shape::Record { name, attributes } => (name, attributes),
            other => {
                return Err(SchemaError::NotRecord {
                    shape: other.kind_name(),
                })
            }
        };

        let primaries: Vec<_> = attributes
            .iter()
            .filter(|attr| attr.role == Role::PrimaryKey)
            .collect();
        if primaries.len() != 1 {
            return Err(SchemaError::PrimaryKeyCardinality {
                count: primaries.len(),
            });
        }
        let primary = primaries[0].name;

        let mut indexes = Vec::new();
        for attr in &attributes {
            if attr.role == Role::Plain {
                continue;
            }
            if attr.kind != AttributeKind::Str {
                return Err(SchemaError::IndexAttributeType {
                    attribute: attr.name,
                    kind: attr.kind,
                });
            }
            if attr.role == Role::Index {
                indexes.push(attr.name);
            }
        }

        tracing::debug!(
            type_name,
            primary_key = primary,
            indexes = ?indexes,
            "derived record schema"
        );

        Ok(Self {
            type_name,
            primary,
            indexes,
        })
    }

    /// Name of the described record type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Name of the primary-key attribute.
    pub fn primary_key(&self) -> &'static str {
        self.primary
    }

    /// Names of the secondary-index attributes, in declaration order.
    /// May be empty.
    pub fn indexes(&self) -> &[&'static str] {
        &self.indexes
    }

    /// Whether the named attribute is a declared secondary index.
    pub fn is_indexed(&self, attribute: &str) -> bool {
        self.indexes.iter().any(|&name| name == attribute)
    }
}
