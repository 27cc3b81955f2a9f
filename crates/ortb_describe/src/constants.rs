//! Named constant tables for protocol enumerations.
//!
//! A table is declared with [`specification!`](crate::specification), which
//! defines a unit type carrying the constants as associated items and
//! implements [`Specification`] for it.
//!
//! ```
//! use ortb_describe::constants::Specification;
//!
//! ortb_describe::specification! {
//!     /// Type of audio feed.
//!     pub struct FeedType: Int {
//!         MUSIC_SERVICE = 1,
//!         BROADCAST = 2,
//!         PODCAST = 3,
//!     }
//! }
//!
//! assert_eq!(FeedType::PODCAST, 3);
//! assert!(FeedType::contains(&2_i64));
//! assert!(!FeedType::contains(&9_i64));
//! assert_eq!(FeedType::name_of(&1_i64), Some("MUSIC_SERVICE"));
//! assert_eq!(FeedType::all().len(), 3);
//! ```

use alloc::format;
use alloc::sync::Arc;
use core::fmt;

use crate::DescriptorFactory;

// -----------------------------------------------------------------------------
// ConstValue

/// The value of a [`Constant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstValue {
    Int(i64),
    Str(&'static str),
}

impl PartialEq<i64> for ConstValue {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Self::Int(v) if v == other)
    }
}

impl PartialEq<i32> for ConstValue {
    #[inline]
    fn eq(&self, other: &i32) -> bool {
        *self == i64::from(*other)
    }
}

impl PartialEq<str> for ConstValue {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        matches!(self, Self::Str(v) if *v == other)
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => f.write_str(v),
        }
    }
}

// -----------------------------------------------------------------------------
// Constant

/// One named constant of a [`Specification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant {
    name: &'static str,
    value: ConstValue,
}

impl Constant {
    #[inline]
    pub const fn new(name: &'static str, value: ConstValue) -> Self {
        Self { name, value }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn value(&self) -> ConstValue {
        self.value
    }
}

// -----------------------------------------------------------------------------
// Specification

/// A protocol enumeration: a fixed table of named values.
pub trait Specification: 'static {
    /// Returns the constants in declaration order.
    fn constants() -> &'static [Constant];

    /// Returns the key under which the table is cached.
    fn type_path() -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns the table, memoized through the shared
    /// [`DescriptorCache`](crate::DescriptorCache) under `const::<type path>`.
    fn all() -> Arc<[Constant]> {
        let key = format!("const::{}", Self::type_path());
        let cache = DescriptorFactory::shared().cache();

        if let Some(hit) = cache.fetch(&key)
            && let Some(table) = hit.downcast_ref::<Arc<[Constant]>>()
        {
            return Arc::clone(table);
        }

        log::debug!("constant cache miss for `{key}`");
        let table: Arc<[Constant]> = Arc::from(Self::constants());
        cache.store(&key, Arc::new(Arc::clone(&table)));
        table
    }

    /// Returns `true` if some constant has this value.
    fn contains<V: ?Sized>(value: &V) -> bool
    where
        ConstValue: PartialEq<V>,
    {
        Self::all()
            .iter()
            .any(|c| <ConstValue as PartialEq<V>>::eq(&c.value, value))
    }

    /// Returns the name of the first constant with this value.
    fn name_of<V: ?Sized>(value: &V) -> Option<&'static str>
    where
        ConstValue: PartialEq<V>,
    {
        Self::all()
            .iter()
            .find(|c| <ConstValue as PartialEq<V>>::eq(&c.value, value))
            .map(Constant::name)
    }
}

// -----------------------------------------------------------------------------
// specification!

/// Declares a [`Specification`] table.
///
/// The value kind follows the type name: `Int` for `i64` constants, `Str` for
/// `&'static str` constants.
///
/// ```
/// use ortb_describe::constants::Specification;
///
/// ortb_describe::specification! {
///     pub struct ImageMimeType: Str {
///         PNG = "image/png",
///         JPEG = "image/jpeg",
///     }
/// }
///
/// assert_eq!(ImageMimeType::JPEG, "image/jpeg");
/// assert!(ImageMimeType::contains("image/png"));
/// assert!(!ImageMimeType::contains("image/gif"));
/// ```
#[macro_export]
macro_rules! specification {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: Int {
            $( $(#[$cmeta:meta])* $cname:ident = $value:expr ),* $(,)?
        }
    ) => {
        $crate::specification! {
            @define $(#[$meta])* $vis $name, i64, Int,
            $( $(#[$cmeta])* $cname = $value ),*
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: Str {
            $( $(#[$cmeta:meta])* $cname:ident = $value:expr ),* $(,)?
        }
    ) => {
        $crate::specification! {
            @define $(#[$meta])* $vis $name, &'static str, Str,
            $( $(#[$cmeta])* $cname = $value ),*
        }
    };
    (
        @define $(#[$meta:meta])* $vis:vis $name:ident, $ty:ty, $kind:ident,
        $( $(#[$cmeta:meta])* $cname:ident = $value:expr ),*
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $name {
            $( $(#[$cmeta])* pub const $cname: $ty = $value; )*
        }

        impl $crate::constants::Specification for $name {
            fn constants() -> &'static [$crate::constants::Constant] {
                const CONSTANTS: &[$crate::constants::Constant] = &[
                    $(
                        $crate::constants::Constant::new(
                            ::core::stringify!($cname),
                            $crate::constants::ConstValue::$kind($name::$cname),
                        ),
                    )*
                ];
                CONSTANTS
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::{ConstValue, Specification};
    use crate::DescriptorFactory;

    crate::specification! {
        struct BitType: Int {
            NO = 0,
            YES = 1,
        }
    }

    #[test]
    fn table_is_cached_under_const_key() {
        assert_eq!(BitType::all().len(), 2);
        let key = alloc::format!("const::{}", BitType::type_path());
        assert!(DescriptorFactory::shared().cache().fetch(&key).is_some());
        assert_eq!(BitType::name_of(&1_i64), Some("YES"));
        assert_eq!(BitType::constants()[0].value(), ConstValue::Int(0));
        assert!(!BitType::contains("0"));
    }
}
