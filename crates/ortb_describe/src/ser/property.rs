use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::{Any, TypeId};
use core::fmt;

use crate::SerializeError;
use crate::info::ClassDescriptor;
use crate::ser::{Object, Value};

// -----------------------------------------------------------------------------
// Serializable

/// The capability to be walked by the [`Serializer`](crate::ser::Serializer).
///
/// Implemented by [`#[derive(Describe)]`](crate::derive::Describe). The
/// serializer reads properties by the indices of the type's
/// [`ClassDescriptor`], so `property` must agree with `describe_class`.
pub trait Serializable: Any {
    /// Returns the full type path of the runtime type.
    fn describe_type_path(&self) -> &'static str;

    /// Builds a fresh descriptor of the runtime type.
    fn describe_class(&self) -> ClassDescriptor;

    /// Returns the [`TypeId`] of the runtime type.
    #[inline]
    fn describe_type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Reads the property at declaration index `index`.
    ///
    /// Out of range indices yield [`Property::Null`].
    fn property(&self, index: usize) -> Property<'_>;

    /// Serializes `self` through the shared factory, see [`to_map`](crate::ser::to_map).
    fn to_map(&self) -> Result<Object, SerializeError>
    where
        Self: Sized,
    {
        crate::ser::to_map(self)
    }
}

impl fmt::Debug for dyn Serializable + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("dyn Serializable")
            .field("type_path", &self.describe_type_path())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Property

/// What one property of an instance yields.
#[derive(Debug)]
pub enum Property<'a> {
    /// Unset, omitted from the output.
    Null,
    /// A finished value, written as-is.
    Value(Value),
    /// A nested serializable value, serialized recursively.
    Object(&'a dyn Serializable),
    /// Serializable elements, each serialized recursively, in iteration order.
    Collection(Vec<&'a dyn Serializable>),
}

impl Property<'_> {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

// -----------------------------------------------------------------------------
// Conversion traits

/// Converts a scalar field: primitives, strings and lists of them.
pub trait ScalarProperty {
    fn to_property(&self) -> Property<'_>;
}

/// Converts a field holding a single nested value.
///
/// Implemented for every derived type, and for [`Extension`](crate::ser::Extension).
pub trait ObjectProperty {
    fn to_property(&self) -> Property<'_>;
}

/// Converts a field holding an ordered collection of serializable values.
pub trait CollectionProperty {
    fn to_property(&self) -> Property<'_>;
}

macro_rules! impl_scalar_property {
    ($($ty:ty),*) => {$(
        impl ScalarProperty for $ty {
            #[inline]
            fn to_property(&self) -> Property<'_> {
                Property::Value(Value::from(*self))
            }
        }
    )*};
}

impl_scalar_property!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl ScalarProperty for String {
    #[inline]
    fn to_property(&self) -> Property<'_> {
        Property::Value(Value::from(self.as_str()))
    }
}

impl ScalarProperty for &'static str {
    #[inline]
    fn to_property(&self) -> Property<'_> {
        Property::Value(Value::from(*self))
    }
}

impl ScalarProperty for Cow<'static, str> {
    #[inline]
    fn to_property(&self) -> Property<'_> {
        Property::Value(Value::from(self.as_ref()))
    }
}

impl<T: ScalarProperty> ScalarProperty for Option<T> {
    #[inline]
    fn to_property(&self) -> Property<'_> {
        match self {
            Some(v) => v.to_property(),
            None => Property::Null,
        }
    }
}

impl<T: ScalarProperty> ScalarProperty for Box<T> {
    #[inline]
    fn to_property(&self) -> Property<'_> {
        T::to_property(self)
    }
}

impl<T: ScalarProperty> ScalarProperty for Vec<T> {
    fn to_property(&self) -> Property<'_> {
        let list = self
            .iter()
            .filter_map(|item| match item.to_property() {
                Property::Value(v) if v.is_retained() => Some(v),
                _ => None,
            })
            .collect();
        Property::Value(Value::List(list))
    }
}

impl<T: ObjectProperty> ObjectProperty for Option<T> {
    #[inline]
    fn to_property(&self) -> Property<'_> {
        match self {
            Some(v) => v.to_property(),
            None => Property::Null,
        }
    }
}

impl<T: ObjectProperty> ObjectProperty for Box<T> {
    #[inline]
    fn to_property(&self) -> Property<'_> {
        T::to_property(self)
    }
}

impl<T: Serializable> CollectionProperty for Vec<T> {
    fn to_property(&self) -> Property<'_> {
        Property::Collection(self.iter().map(|v| v as &dyn Serializable).collect())
    }
}

impl<T: CollectionProperty> CollectionProperty for Option<T> {
    #[inline]
    fn to_property(&self) -> Property<'_> {
        match self {
            Some(v) => v.to_property(),
            None => Property::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Property, ScalarProperty};
    use crate::ser::Value;

    fn value(p: Property<'_>) -> Option<Value> {
        match p {
            Property::Value(v) => Some(v),
            _ => None,
        }
    }

    #[test]
    fn scalars() {
        assert_eq!(value(3_u8.to_property()), Some(Value::Int(3)));
        assert_eq!(value(String::from("x").to_property()), Some(Value::from("x")));
        assert!(None::<i32>.to_property().is_null());
        assert_eq!(
            value(vec![Some(1_i32), None, Some(2)].to_property()),
            Some(Value::List(vec![Value::Int(1), Value::Int(2)]))
        );
    }
}
