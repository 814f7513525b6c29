//! First-match lookup caching
//!
//! Remembers which route table slot answered a `(method, path)` lookup so
//! repeated dispatches of the same request skip the scan. Uses LRU eviction.
//! Any change to the route table must [`RouteCache::clear`] the cache.

use crate::method::Method;
use crate::trace_log;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Cache key: method plus path (query string excluded)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LookupKey {
    method: Method,
    path: String,
}

/// Cache performance statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub invalidations: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Route lookup cache with LRU eviction
///
/// Stores the index of the first matching route, or `None` when nothing
/// matched. Default capacity: 1000 entries.
#[derive(Debug)]
pub struct RouteCache {
    lookups: LruCache<LookupKey, Option<usize>>,
    stats: CacheStats,
}

impl RouteCache {
    pub const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` lookups (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            lookups: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Drop every cached lookup
    pub fn clear(&mut self) {
        trace_log!("Clearing route lookup cache");
        self.lookups.clear();
        self.stats.invalidations += 1;
    }

    /// Cached answer for a lookup; the outer `None` means "not cached"
    pub fn get(&mut self, method: &Method, path: &str) -> Option<Option<usize>> {
        let key = LookupKey {
            method: method.clone(),
            path: path.to_string(),
        };
        if let Some(slot) = self.lookups.get(&key) {
            self.stats.hits += 1;
            trace_log!("Lookup cache hit for {} '{}'", method, path);
            Some(*slot)
        } else {
            self.stats.misses += 1;
            trace_log!("Lookup cache miss for {} '{}'", method, path);
            None
        }
    }

    /// Record the answer for a lookup
    pub fn insert(&mut self, method: &Method, path: &str, slot: Option<usize>) {
        self.lookups.push(
            LookupKey {
                method: method.clone(),
                path: path.to_string(),
            },
            slot,
        );
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    pub fn len(&self) -> usize {
        self.lookups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookups.is_empty()
    }
}

impl Default for RouteCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RouteCache {
    fn clone(&self) -> Self {
        Self {
            lookups: LruCache::new(self.lookups.cap()),
            stats: self.stats.clone(),
        }
    }
}
