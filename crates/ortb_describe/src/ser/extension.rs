use alloc::string::String;

use crate::ser::{Object, ObjectProperty, Property, Value};

/// A free-form, ordered key/value bag for exchange-specific fields.
///
/// Serialized as its map; an empty bag is omitted like any empty map.
///
/// # Examples
///
/// ```
/// use ortb_describe::ser::{Extension, Value};
///
/// let mut ext = Extension::new();
/// ext.set("a", 1).set("b", "x");
/// ext.extend([("a", Value::from(2)), ("c", Value::from(true))]);
///
/// assert_eq!(ext.get("a"), Some(&Value::from(2)));
/// assert_eq!(ext.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
/// assert_eq!(ext.get("z"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extension {
    parameters: Object,
}

impl Extension {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one parameter, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// Removes a parameter, keeping the order of the rest.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.parameters.shift_remove(key)
    }

    /// Returns the parameter names in insertion order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    #[inline]
    pub fn as_object(&self) -> &Object {
        &self.parameters
    }
}

/// Existing keys are replaced in place, new keys are appended.
impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Extension {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl From<Object> for Extension {
    #[inline]
    fn from(parameters: Object) -> Self {
        Self { parameters }
    }
}

impl ObjectProperty for Extension {
    fn to_property(&self) -> Property<'_> {
        Property::Value(Value::Map(self.parameters.clone()))
    }
}
