//! Explicit memoization over named caches.
//!
//! [`Memoized`] wraps a decoding operation with a stable identity (its name
//! plus a fixed list of disambiguating identifiers) and an argument-hashing
//! strategy. Calls consult the cache registered under that identity and
//! invoke the wrapped operation only on a genuine miss. The registry is
//! passed in by the caller; the combinator holds no ambient state.

use alloc::string::String;
use core::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::{cache::CacheRegistry, value::Value};

/// A decoding operation wrapped with a named cache and an argument hash.
///
/// # Examples
///
/// ```rust
/// use bincursor::{CacheRegistry, Memoized, Value};
///
/// let mut registry = CacheRegistry::new();
/// let mut decode = Memoized::new("decode_row", &["strings", "v2"], |&offset: &u64| {
///     // Imagine an expensive decode here.
///     Value::Int(i128::from(offset) * 2)
/// });
///
/// assert_eq!(decode.cache_name(), "decode_row#strings#v2");
/// assert_eq!(decode.call(&mut registry, &21), Value::Int(42));
/// // Second call with the same argument is served from the cache.
/// assert_eq!(decode.call(&mut registry, &21), Value::Int(42));
/// ```
pub struct Memoized<F, S = FxBuildHasher> {
    cache_name: String,
    op: F,
    hasher: S,
}

impl<F> Memoized<F, FxBuildHasher> {
    /// Wraps `op` under the cache named `name#id…`, hashing arguments with
    /// the default `Fx` strategy.
    pub fn new(name: &str, ids: &[&str], op: F) -> Self {
        Self::with_hasher(name, ids, op, FxBuildHasher)
    }
}

impl<F, S: BuildHasher> Memoized<F, S> {
    /// Wraps `op` with an explicit argument-hashing strategy.
    pub fn with_hasher(name: &str, ids: &[&str], op: F, hasher: S) -> Self {
        let mut cache_name = String::from(name);
        for id in ids {
            cache_name.push('#');
            cache_name.push_str(id);
        }
        Self {
            cache_name,
            op,
            hasher,
        }
    }

    /// The registry name this combinator caches under.
    #[must_use]
    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    /// Returns the cached value for `args`, invoking the wrapped operation
    /// only on a miss.
    pub fn call<A: Hash>(&mut self, registry: &mut CacheRegistry, args: &A) -> Value
    where
        F: FnMut(&A) -> Value,
    {
        let key = self.hasher.hash_one(args);
        if let Some(hit) = registry.cache(&self.cache_name).get(key) {
            return hit.clone();
        }
        let value = (self.op)(args);
        registry.cache(&self.cache_name).put(key, value.clone());
        value
    }
}
