//! Offset-indexed decode caches and the registry that names them.
//!
//! A [`Cache`] memoizes decoded values under integer keys, typically the
//! buffer offsets they were decoded from. String- and byte-valued entries
//! get one extra power: when a looked-up key falls strictly inside an
//! already-cached value (one string begins partway through another, as
//! happens when chained string tables index into a shared heap), the cache
//! derives the new value by slicing the old one instead of re-reading raw
//! storage. The derived value is inserted under its own key, so the next
//! lookup hits directly.
//!
//! Everything here is single-threaded by construction: all access goes
//! through `&mut`, and there is no interior mutability or locking. Sharing a
//! registry across threads requires external synchronization; the ordered
//! key index is not updated atomically with the primary map.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::value::Value;

/// A named, offset-indexed memo cache.
///
/// # Examples
///
/// ```rust
/// use bincursor::{Cache, Value};
///
/// let mut cache = Cache::new("strings");
/// cache.put(100, Value::from("HELLOWORLD"));
/// cache.put(300, Value::from("ANOTHER"));
///
/// // 103 falls inside the entry at 100; the suffix is derived by slicing.
/// assert_eq!(cache.get(103), Some(&Value::from("LOWORLD")));
/// assert!(cache.contains_key(103));
/// ```
#[derive(Debug, Clone)]
pub struct Cache {
    name: String,
    entries: BTreeMap<u64, Value>,
    // Sorted; holds exactly the keys of offset-indexable entries.
    sliceable_keys: Vec<u64>,
}

impl Cache {
    /// Creates an empty cache with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
            sliceable_keys: Vec::new(),
        }
    }

    /// The name this cache was created under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entries, derived ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when `key` is directly present, without attempting
    /// aliasing resolution.
    #[must_use]
    pub fn contains_key(&self, key: u64) -> bool {
        self.entries.contains_key(&key)
    }

    /// Looks up `key`, deriving a value by offset aliasing on a miss.
    ///
    /// On an exact miss, and only when at least two sliceable entries exist,
    /// the greatest sliceable key at or below `key` is located by binary
    /// search; if the value stored there extends past `key`, its suffix from
    /// that offset becomes the result and is inserted under `key` before
    /// being returned. Anything else is a genuine miss.
    pub fn get(&mut self, key: u64) -> Option<&Value> {
        if self.entries.contains_key(&key) {
            return self.entries.get(&key);
        }
        if self.sliceable_keys.len() > 1 {
            let derived = self.derive_from_alias(key);
            if let Some(value) = derived {
                self.put(key, value);
                return self.entries.get(&key);
            }
        }
        None
    }

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// A key newly added with a string- or byte-valued entry is also
    /// sorted-inserted into the offset index; overwrites never duplicate
    /// index entries.
    pub fn put(&mut self, key: u64, value: Value) {
        if !self.entries.contains_key(&key) && value.is_offset_indexable() {
            if let Err(pos) = self.sliceable_keys.binary_search(&key) {
                self.sliceable_keys.insert(pos, key);
            }
        }
        self.entries.insert(key, value);
    }

    // Values may begin partway through other cached values; look for the
    // nearest smaller sliceable entry and take its suffix.
    fn derive_from_alias(&self, key: u64) -> Option<Value> {
        let idx = self.sliceable_keys.partition_point(|&k| k < key);
        if idx == 0 {
            return None;
        }
        let cache_key = self.sliceable_keys[idx - 1];
        let offset = key - cache_key;
        if offset == 0 {
            return None;
        }
        let offset = usize::try_from(offset).ok()?;
        let stored = self.entries.get(&cache_key)?;
        if stored.byte_len()? > offset {
            stored.slice_from(offset)
        } else {
            None
        }
    }
}

/// An explicit registry of named caches.
///
/// The registry is plain owned state, passed by reference to whatever needs
/// caching; there is no ambient global instance. A process-lifetime
/// singleton, if an application wants one, belongs at its outermost
/// boundary.
///
/// # Examples
///
/// ```rust
/// use bincursor::{CacheRegistry, Value};
///
/// let mut registry = CacheRegistry::new();
/// registry.cache("guids").put(1, Value::from(7));
///
/// // Same name, same instance.
/// assert_eq!(registry.cache("guids").get(1), Some(&Value::from(7)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CacheRegistry {
    caches: BTreeMap<String, Cache>,
}

impl CacheRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache registered under `name`, created on first use. Subsequent
    /// calls with the same name return the same instance.
    pub fn cache(&mut self, name: &str) -> &mut Cache {
        self.caches
            .entry(name.into())
            .or_insert_with(|| Cache::new(name))
    }

    /// Number of named caches created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.caches.len()
    }

    /// Returns `true` when no cache has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.caches.is_empty()
    }
}
