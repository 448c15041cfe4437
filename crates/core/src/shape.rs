//! Structural description of record types.
//!
//! There is no runtime reflection here: a storable type declares its own
//! structure once through [`Record::shape`], and exposes its attribute
//! values through [`Record::attribute`]. The store validates the shape a
//! single time at construction and calls the accessor on every add/remove.
//!
//! ## Declaring a record type
//!
//! ```
//! use facet_core::{Attribute, AttributeKind, Record, Shape};
//!
//! struct Book {
//!     id: String,
//!     title: String,
//!     author: String,
//! }
//!
//! impl Record for Book {
//!     fn shape() -> Shape {
//!         Shape::Record {
//!             name: "Book",
//!             attributes: vec![
//!                 Attribute::primary_key("Id", AttributeKind::Str),
//!                 Attribute::index("Title", AttributeKind::Str),
//!                 Attribute::index("Author", AttributeKind::Str),
//!             ],
//!         }
//!     }
//!
//!     fn attribute(&self, name: &str) -> Option<&str> {
//!         match name {
//!             "Id" => Some(&self.id),
//!             "Title" => Some(&self.title),
//!             "Author" => Some(&self.author),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

/// Contract implemented by types storable in a facet map.
///
/// `shape()` is consulted exactly once, when a store is constructed;
/// `attribute()` is called on every add/remove to extract the primary-key
/// and indexed values of an instance.
///
/// An instance is expected to produce a value for every attribute its shape
/// declares. An instance that returns `None` for a declared attribute is
/// rejected at the operation level, before any store state is touched.
pub trait Record: Send + Sync + 'static {
    /// Structural description of this type.
    fn shape() -> Shape;

    /// Current string value of the named attribute, or `None` when the
    /// instance does not carry that attribute.
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// What a type structurally is.
///
/// Only [`Shape::Record`] can back a store; the remaining variants exist so
/// that non-record descriptions are expressible and can be rejected with a
/// precise error at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A record with named attributes. Attribute names are expected to be
    /// unique within one record, as field names are in a struct.
    Record {
        /// Type name, carried for diagnostics only.
        name: &'static str,
        /// Declared attributes, in declaration order.
        attributes: Vec<Attribute>,
    },
    /// A single scalar value.
    Scalar(AttributeKind),
    /// An ordered collection.
    Sequence,
    /// An associative collection.
    Map,
}

impl Shape {
    /// Short name of the shape variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Record { .. } => "record",
            Shape::Scalar(_) => "scalar",
            Shape::Sequence => "sequence",
            Shape::Map => "map",
        }
    }
}

/// One named, typed attribute of a record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, matched against [`Record::attribute`] queries.
    pub name: &'static str,
    /// Declared value type.
    pub kind: AttributeKind,
    /// Indexing role of this attribute.
    pub role: Role,
}

impl Attribute {
    /// An attribute that is stored but not indexed.
    pub fn plain(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            role: Role::Plain,
        }
    }

    /// The attribute holding the record's unique identity.
    pub fn primary_key(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            role: Role::PrimaryKey,
        }
    }

    /// An attribute records can be looked up by, non-uniquely.
    pub fn index(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            role: Role::Index,
        }
    }
}

/// Declared value type of an attribute.
///
/// Only [`AttributeKind::Str`] attributes may carry an indexing role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// UTF-8 string.
    Str,
    /// Signed integer.
    Int,
    /// Floating-point number.
    Float,
    /// Boolean.
    Bool,
    /// Raw bytes.
    Bytes,
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttributeKind::Str => "string",
            AttributeKind::Int => "integer",
            AttributeKind::Float => "float",
            AttributeKind::Bool => "bool",
            AttributeKind::Bytes => "bytes",
        };
        write!(f, "{}", name)
    }
}

/// Indexing role of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Stored with the record, not queryable on its own.
    Plain,
    /// The unique identity of the record. Exactly one per record type.
    PrimaryKey,
    /// A non-unique lookup attribute; many records may share a value.
    Index,
}
