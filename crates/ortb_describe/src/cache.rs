use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;
use std::sync::{PoisonError, RwLock};

use ortb_utils::hash::HashMap;

/// A cached value, downcast by the reader.
pub type CachedValue = Arc<dyn Any + Send + Sync>;

// -----------------------------------------------------------------------------
// DescriptorCache

/// A process-wide memoization layer keyed by string.
///
/// Descriptors are stored under their type path, constant tables under
/// `const::<type path>`. Entries never expire.
///
/// A backend may decline to store anything; callers then rebuild on every
/// lookup, with identical results.
pub trait DescriptorCache: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn fetch(&self, key: &str) -> Option<CachedValue>;

    /// Stores `value` under `key`, returning `true` if it was kept.
    ///
    /// Concurrent stores to the same key are allowed; the last one wins.
    fn store(&self, key: &str, value: CachedValue) -> bool;
}

// -----------------------------------------------------------------------------
// NoOpCache

/// A cache that never stores and always misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpCache;

impl DescriptorCache for NoOpCache {
    #[inline]
    fn fetch(&self, _: &str) -> Option<CachedValue> {
        None
    }

    #[inline]
    fn store(&self, _: &str, _: CachedValue) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// MemoryCache

/// An in-process cache behind a [`RwLock`].
///
/// Lock poisoning is ignored: entries are only ever inserted whole.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use ortb_describe::{DescriptorCache, MemoryCache};
///
/// let cache = MemoryCache::new();
/// assert!(cache.fetch("k").is_none());
/// assert!(cache.store("k", Arc::new(7_u32)));
///
/// let value = cache.fetch("k").unwrap();
/// assert_eq!(value.downcast_ref::<u32>(), Some(&7));
/// ```
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<Box<str>, CachedValue>>,
}

impl MemoryCache {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DescriptorCache for MemoryCache {
    fn fetch(&self, key: &str) -> Option<CachedValue> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn store(&self, key: &str, value: CachedValue) -> bool {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Box::from(key), value);
        true
    }
}

impl core::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::{DescriptorCache, MemoryCache, NoOpCache};

    #[test]
    fn noop_never_hits() {
        let cache = NoOpCache;
        assert!(!cache.store("a", Arc::new(1_u8)));
        assert!(cache.fetch("a").is_none());
    }

    #[test]
    fn memory_last_store_wins() {
        let cache = MemoryCache::new();
        cache.store("a", Arc::new(1_u8));
        cache.store("a", Arc::new(2_u8));
        assert_eq!(cache.len(), 1);
        let hit = cache.fetch("a").unwrap();
        assert_eq!(hit.downcast_ref::<u8>(), Some(&2));

        cache.clear();
        assert!(cache.is_empty());
    }
}
