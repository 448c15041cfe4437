//! The indexed store: one primary table plus one value index per declared
//! secondary attribute, bound to a validated schema.

use std::sync::Arc;

use facet_core::{Descriptor, Record, SchemaResult, StoreError, StoreResult};
use facet_engine::{PrimaryTable, ValueIndex};
use rustc_hash::FxHashMap;

/// In-memory, concurrency-safe store of `R` records, indexed by the
/// primary-key attribute and every secondary-index attribute declared in
/// `R`'s shape.
///
/// The store holds records behind [`Arc`] — it keeps references, never
/// copies. Removing a record only drops the store's reference; the caller
/// owns the record's lifetime.
///
/// # Example
///
/// ```
/// use facetmap::prelude::*;
///
/// struct Book {
///     id: String,
///     title: String,
///     author: String,
/// }
///
/// impl Record for Book {
///     fn shape() -> Shape {
///         Shape::Record {
///             name: "Book",
///             attributes: vec![
///                 Attribute::primary_key("Id", AttributeKind::Str),
///                 Attribute::index("Title", AttributeKind::Str),
///                 Attribute::index("Author", AttributeKind::Str),
///             ],
///         }
///     }
///
///     fn attribute(&self, name: &str) -> Option<&str> {
///         match name {
///             "Id" => Some(&self.id),
///             "Title" => Some(&self.title),
///             "Author" => Some(&self.author),
///             _ => None,
///         }
///     }
/// }
///
/// # fn main() -> std::result::Result<(), facetmap::Error> {
/// let store = FacetMap::<Book>::new()?;
/// store.add(Book {
///     id: "3".into(),
///     title: "Pride and Prejudice".into(),
///     author: "Jane Austen".into(),
/// })?;
///
/// let hits = store.get("Author", "Jane Austen");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, "3");
/// # Ok(())
/// # }
/// ```
///
/// # Thread Safety
///
/// Every map — the primary table and each value index — is guarded by its
/// own reader/writer lock, and no operation ever holds two locks at once.
/// Add and remove therefore update the maps in separate critical sections:
/// a concurrent `get` may observe a record in the primary table before its
/// index entries land, or the reverse during a remove. Consistency is
/// per-map, eventual across maps.
pub struct FacetMap<R: Record> {
    descriptor: Descriptor,
    primary: PrimaryTable<Arc<R>>,
    // Key set fixed at construction; only the ValueIndex values mutate,
    // each behind its own lock. No outer lock exists.
    indexes: FxHashMap<&'static str, ValueIndex>,
}

impl<R: Record> FacetMap<R> {
    /// Build a store bound to `R`'s schema.
    ///
    /// Derives and validates the schema descriptor from [`Record::shape`]
    /// once; the descriptor is immutable for the store's lifetime.
    ///
    /// # Errors
    ///
    /// Any [`SchemaError`](facet_core::SchemaError) from descriptor
    /// derivation. Construction is all-or-nothing; there is no degraded
    /// store.
    pub fn new() -> SchemaResult<Self> {
        Self::build(0)
    }

    /// Build a store pre-sized for roughly `capacity` records.
    pub fn with_capacity(capacity: usize) -> SchemaResult<Self> {
        Self::build(capacity)
    }

    fn build(capacity: usize) -> SchemaResult<Self> {
        let descriptor = Descriptor::derive(R::shape())?;
        let indexes = descriptor
            .indexes()
            .iter()
            .map(|&name| (name, ValueIndex::with_capacity(capacity)))
            .collect();
        Ok(Self {
            descriptor,
            primary: PrimaryTable::with_capacity(capacity),
            indexes,
        })
    }

    /// Insert a record, or overwrite the record stored under the same
    /// primary-key value.
    ///
    /// Registers the primary key under every declared index for the
    /// record's current attribute values.
    ///
    /// Overwriting does NOT clean up the previous record's index entries:
    /// if the new record carries different indexed values, the old values'
    /// buckets still point at this primary key. Callers that need
    /// replace-semantics must [`remove`](Self::remove) the old record
    /// first.
    ///
    /// # Errors
    ///
    /// [`StoreError::AttributeUnavailable`] when the instance produces no
    /// value for the primary key or a declared index. All attribute values
    /// are extracted before any map is touched, so a failing call leaves
    /// the store unchanged.
    pub fn add(&self, record: impl Into<Arc<R>>) -> StoreResult<()> {
        let record = record.into();
        let (key, indexed) = self.extract(&record)?;

        self.primary.insert(key.as_str(), record);
        for (name, value) in &indexed {
            if let Some(index) = self.indexes.get(name) {
                index.insert(value, &key);
            }
        }

        tracing::trace!(key = %key, type_name = self.descriptor.type_name(), "record added");
        Ok(())
    }

    /// Remove a record and its index entries.
    ///
    /// The primary key and index values are taken from the PASSED-IN
    /// record, not from whatever is currently stored under that key.
    /// Removing an absent key is a no-op; if the passed record's indexed
    /// values differ from the stored record's, the stored values' buckets
    /// are not cleaned. This mirrors the overwrite caveat on
    /// [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// [`StoreError::AttributeUnavailable`], with the store left unchanged,
    /// exactly as for [`add`](Self::add).
    pub fn remove(&self, record: &R) -> StoreResult<()> {
        let (key, indexed) = self.extract(record)?;

        self.primary.remove(&key);
        for (name, value) in &indexed {
            if let Some(index) = self.indexes.get(name) {
                index.remove(value, &key);
            }
        }

        tracing::trace!(key = %key, type_name = self.descriptor.type_name(), "record removed");
        Ok(())
    }

    /// All records whose `attribute` equals `value`.
    ///
    /// - For the primary-key attribute: a singleton, or empty when absent.
    /// - For a declared index: every matching record, in no guaranteed
    ///   order. The bucket is snapshotted under the index's read lock and
    ///   resolved against the primary table afterwards; keys that vanished
    ///   in between are silently skipped.
    /// - For any other attribute name: empty. "No such index" is a normal
    ///   outcome, not an error.
    ///
    /// Never errors and never blocks beyond per-map read locks; safe to
    /// call concurrently with `add` and `remove`.
    pub fn get(&self, attribute: &str, value: &str) -> Vec<Arc<R>> {
        if attribute == self.descriptor.primary_key() {
            return self.primary.get(value).into_iter().collect();
        }

        match self.indexes.get(attribute) {
            Some(index) => index
                .members(value)
                .into_iter()
                .filter_map(|key| self.primary.get(&key))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Look up a single record by its primary-key value.
    pub fn get_by_key(&self, key: &str) -> Option<Arc<R>> {
        self.primary.get(key)
    }

    /// Whether a record is stored under the given primary-key value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.primary.contains(key)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Snapshot of all primary-key values, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.primary.keys()
    }

    /// Number of distinct values currently indexed under `attribute`, or
    /// `None` when `attribute` is not a declared index.
    ///
    /// Emptied buckets are deleted eagerly, so a fully drained index
    /// reports zero.
    pub fn bucket_count(&self, attribute: &str) -> Option<usize> {
        self.indexes.get(attribute).map(ValueIndex::bucket_count)
    }

    /// Remove every record and every index bucket.
    ///
    /// Each map is cleared in its own critical section; concurrent readers
    /// may observe a partially cleared store, consistent with the per-map
    /// locking model.
    pub fn clear(&self) {
        self.primary.clear();
        for index in self.indexes.values() {
            index.clear();
        }
    }

    /// The validated schema this store is bound to.
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Extract the primary-key value and every indexed value from a
    /// record, before any map is touched.
    fn extract(&self, record: &R) -> StoreResult<(String, Vec<(&'static str, String)>)> {
        let key = self
            .value_of(record, self.descriptor.primary_key())?
            .to_owned();

        let mut indexed = Vec::with_capacity(self.descriptor.indexes().len());
        for &name in self.descriptor.indexes() {
            indexed.push((name, self.value_of(record, name)?.to_owned()));
        }
        Ok((key, indexed))
    }

    fn value_of<'r>(&self, record: &'r R, attribute: &'static str) -> StoreResult<&'r str> {
        record
            .attribute(attribute)
            .ok_or(StoreError::AttributeUnavailable { attribute })
    }
}

impl<R: Record> std::fmt::Debug for FacetMap<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetMap")
            .field("type_name", &self.descriptor.type_name())
            .field("len", &self.len())
            .field("indexes", &self.descriptor.indexes())
            .finish()
    }
}
