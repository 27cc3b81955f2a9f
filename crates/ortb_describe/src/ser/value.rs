use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use indexmap::IndexMap;
use serde_core::{Serialize, Serializer};

/// An ordered mapping from property name to [`Value`].
///
/// Keys keep insertion order, which for serializer output is declaration order.
pub type Object = IndexMap<String, Value>;

// -----------------------------------------------------------------------------
// Value

/// A serialized value.
///
/// Implements [`serde::Serialize`](serde_core::Serialize), so encoding an
/// [`Object`] is left to any serde format.
///
/// # Examples
///
/// ```
/// use ortb_describe::ser::{Object, Value};
///
/// let mut map = Object::new();
/// map.insert("ver".into(), Value::from(1));
/// map.insert("assets".into(), Value::List(vec![Value::from("a")]));
///
/// let json = serde_json::to_string(&Value::Map(map)).unwrap();
/// assert_eq!(json, r#"{"ver":1,"assets":["a"]}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Object),
}

impl Value {
    /// Whether the value is written into a serialized map.
    ///
    /// Empty lists, empty maps and non-finite floats are omitted, everything
    /// else is kept. A non-finite float has no JSON form.
    #[inline]
    pub fn is_retained(&self) -> bool {
        match self {
            Self::Float(v) => v.is_finite(),
            Self::List(list) => !list.is_empty(),
            Self::Map(map) => !map.is_empty(),
            _ => true,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Object> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::UInt(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::List(v) => serializer.collect_seq(v),
            Self::Map(v) => serializer.collect_map(v),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::Int(value as i64)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::UInt(value as u64)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u64, usize);

// Narrow unsigned integers fit in `i64`, keep them comparable with signed ones.
macro_rules! impl_from_narrow_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        }
    )*};
}

impl_from_narrow_unsigned!(u8, u16, u32);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<Cow<'_, str>> for Value {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::String(value.into_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(value: Object) -> Self {
        Self::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Object, Value};

    #[test]
    fn retention() {
        assert!(Value::from(0).is_retained());
        assert!(Value::from("").is_retained());
        assert!(Value::from(false).is_retained());
        assert!(!Value::List(Vec::new()).is_retained());
        assert!(!Value::Map(Object::new()).is_retained());
        assert!(Value::from(-0.0).is_retained());
        assert!(!Value::from(f64::NAN).is_retained());
        assert!(!Value::from(f64::NEG_INFINITY).is_retained());
    }

    #[test]
    fn integer_views() {
        assert_eq!(Value::from(7_u32), Value::from(7_i64));
        assert_eq!(Value::from(u64::MAX).as_i64(), None);
        assert_eq!(Value::from(3_usize).as_i64(), Some(3));
    }

    #[test]
    fn json_keeps_insertion_order() {
        let mut map = Object::new();
        map.insert("z".into(), Value::from(1.5));
        map.insert("a".into(), Value::from(true));
        let json = serde_json::to_string(&Value::Map(map)).unwrap();
        assert_eq!(json, r#"{"z":1.5,"a":true}"#);
    }
}
