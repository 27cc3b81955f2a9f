//! Hash states for the registry and descriptor maps.
//!
//! Re-exports [`hashbrown`] and [`foldhash`].

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

pub use foldhash;
pub use hashbrown;

/// Seed of [`FixedHashState`].
const SEED: u64 = 0x0B1D_5EED_2C0F_FEE5;

/// A [`hashbrown::HashMap`] hashed with [`FixedHashState`].
///
/// Iteration order only depends on the inserted keys, so descriptor dumps and
/// test output are stable between runs.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] hashed with [`FixedHashState`].
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

// -----------------------------------------------------------------------------
// FixedHashState

/// `foldhash` with a constant seed.
///
/// ```
/// use core::hash::BuildHasher;
/// use ortb_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("ortb_model::bid_request::App");
/// let b = FixedHashState.hash_one("ortb_model::bid_request::App");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        const STATE: FixedState = FixedState::with_seed(SEED);
        STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// TypeIdHashState

/// Hashes a [`TypeId`](core::any::TypeId) by keeping the `u64` it writes.
///
/// A `TypeId` is already a hash of the type, so no mixing is done. Other keys
/// fall back to folding their bytes, which is correct but weak.
#[derive(Copy, Clone, Default, Debug)]
pub struct TypeIdHashState;

impl BuildHasher for TypeIdHashState {
    type Hasher = TypeIdHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        TypeIdHasher(0)
    }
}

/// Hasher built by [`TypeIdHashState`].
#[derive(Copy, Clone, Default, Debug)]
pub struct TypeIdHasher(u64);

impl Hasher for TypeIdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0 = bytes
            .iter()
            .fold(self.0, |acc, &b| acc.rotate_left(8) ^ u64::from(b));
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;
    use core::hash::{BuildHasher, Hash, Hasher};

    use super::{FixedHashState, TypeIdHashState};

    #[test]
    fn type_id_hashes_are_stable() {
        let a = TypeIdHashState.hash_one(TypeId::of::<u8>());
        let b = TypeIdHashState.hash_one(TypeId::of::<u8>());
        assert_eq!(a, b);
        assert_ne!(a, TypeIdHashState.hash_one(TypeId::of::<u16>()));

        let mut hasher = TypeIdHashState.build_hasher();
        42_u64.hash(&mut hasher);
        assert_eq!(hasher.finish(), 42);
    }

    #[test]
    fn fixed_state_is_deterministic() {
        assert_eq!(FixedHashState.hash_one("App"), FixedHashState.hash_one("App"));
        assert_ne!(FixedHashState.hash_one("App"), FixedHashState.hash_one("Device"));
    }
}
