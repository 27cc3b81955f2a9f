use core::any::TypeId;
use core::fmt;

use hashbrown::HashMap;

use crate::hash::TypeIdHashState;

/// Values keyed by [`TypeId`], hashed with [`TypeIdHashState`].
///
/// ```
/// use core::any::TypeId;
/// use ortb_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::new();
/// assert!(map.try_insert(TypeId::of::<u32>(), || "u32"));
/// assert!(!map.try_insert(TypeId::of::<u32>(), || "again"));
/// assert_eq!(map.get(&TypeId::of::<u32>()), Some(&"u32"));
/// ```
pub struct TypeIdMap<V> {
    entries: HashMap<TypeId, V, TypeIdHashState>,
}

impl<V> TypeIdMap<V> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(TypeIdHashState),
        }
    }

    /// Inserts the value built by `make` if `type_id` is absent.
    ///
    /// Returns `false`, without calling `make`, if an entry already exists.
    pub fn try_insert(&mut self, type_id: TypeId, make: impl FnOnce() -> V) -> bool {
        if self.entries.contains_key(&type_id) {
            return false;
        }
        self.entries.insert(type_id, make());
        true
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.entries.get(type_id)
    }

    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.entries.contains_key(type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values in arbitrary order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.entries.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    struct Marker;

    #[test]
    fn first_insert_wins() {
        let mut map = TypeIdMap::new();
        assert!(map.is_empty());
        assert!(map.try_insert(TypeId::of::<Marker>(), || 1));
        assert!(!map.try_insert(TypeId::of::<Marker>(), || unreachable!()));
        assert_eq!(map.get(&TypeId::of::<Marker>()), Some(&1));
        assert!(!map.contains(&TypeId::of::<u8>()));
        assert_eq!(map.len(), 1);
    }
}
