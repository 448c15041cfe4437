//! Secondary value index: attribute value → set of primary keys.
//!
//! One `ValueIndex` exists per indexed attribute. Many primary keys may
//! share a value; the keys sharing one value form that value's bucket.
//! Buckets are created on first insert and deleted eagerly when the last
//! member leaves, so an index holds no memory for values with zero members.

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Snapshot of one bucket's primary keys, taken under the read lock and
/// returned with the lock released.
pub type BucketSnapshot = SmallVec<[String; 8]>;

/// Map from attribute value to the set of primary keys whose record has
/// that value.
///
/// # Thread Safety
///
/// One `RwLock` guards the whole index. Each operation acquires this
/// index's lock and no other; resolution of the returned keys against the
/// primary table happens entirely outside the lock.
pub struct ValueIndex {
    buckets: RwLock<FxHashMap<String, FxHashSet<String>>>,
}

impl ValueIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create an index pre-sized for `capacity` distinct values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: RwLock::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }

    /// Add `key` to the bucket for `value`, creating the bucket if absent.
    pub fn insert(&self, value: &str, key: &str) {
        let mut buckets = self.buckets.write();
        buckets
            .entry(value.to_owned())
            .or_default()
            .insert(key.to_owned());
    }

    /// Remove `key` from the bucket for `value`.
    ///
    /// Deletes the bucket entirely when it becomes empty. An absent value
    /// or key is a no-op.
    pub fn remove(&self, value: &str, key: &str) {
        let mut buckets = self.buckets.write();
        if let Some(bucket) = buckets.get_mut(value) {
            bucket.remove(key);
            if bucket.is_empty() {
                buckets.remove(value);
            }
        }
    }

    /// Snapshot the primary keys in the bucket for `value`.
    ///
    /// Empty when no bucket exists. The snapshot reflects one instant; keys
    /// may be gone from the primary table by the time they are resolved,
    /// which callers handle by skipping them.
    pub fn members(&self, value: &str) -> BucketSnapshot {
        let buckets = self.buckets.read();
        match buckets.get(value) {
            Some(bucket) => bucket.iter().cloned().collect(),
            None => SmallVec::new(),
        }
    }

    /// Whether `key` is a member of the bucket for `value`.
    pub fn contains(&self, value: &str, key: &str) -> bool {
        self.buckets
            .read()
            .get(value)
            .map(|bucket| bucket.contains(key))
            .unwrap_or(false)
    }

    /// Number of distinct values with a non-empty bucket.
    pub fn bucket_count(&self) -> usize {
        self.buckets.read().len()
    }

    /// Number of keys in the bucket for `value`, zero when absent.
    pub fn len_of(&self, value: &str) -> usize {
        self.buckets
            .read()
            .get(value)
            .map(|bucket| bucket.len())
            .unwrap_or(0)
    }

    /// Whether the index holds no buckets at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.read().is_empty()
    }

    /// Remove every bucket.
    pub fn clear(&self) {
        self.buckets.write().clear();
    }
}

impl Default for ValueIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ValueIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueIndex")
            .field("bucket_count", &self.bucket_count())
            .finish()
    }
}
