use alloc::boxed::Box;

use ortb_utils::hash::HashMap;

use crate::info::PropertyMetadata;

// -----------------------------------------------------------------------------
// MethodInfo

/// A method name and whether it is public.
///
/// Collected from `impl` blocks annotated with
/// [`#[describe_methods]`](crate::derive::describe_methods).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodInfo {
    name: &'static str,
    public: bool,
}

impl MethodInfo {
    #[inline]
    pub const fn new(name: &'static str, public: bool) -> Self {
        Self { name, public }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        self.public
    }
}

// -----------------------------------------------------------------------------
// ClassDescriptor

/// The serializable shape of one type.
///
/// Built once per type and shared read-only through the
/// [`DescriptorFactory`](crate::DescriptorFactory). It holds exactly the
/// properties declared when it was built.
///
/// # Examples
///
/// ```
/// use ortb_describe::{Describe, derive::Describe};
///
/// #[derive(Describe)]
/// struct Data {
///     id: Option<i32>,
///     #[ortb(required)]
///     value: Option<String>,
/// }
///
/// let info = Data::class_descriptor();
///
/// assert_eq!(info.type_name(), "Data");
/// assert_eq!(info.len(), 2);
/// assert_eq!(info.property_names(), &["id", "value"]);
/// assert_eq!(info.property_at(1).unwrap().name(), "value");
/// assert_eq!(info.required().map(|p| p.name()).collect::<Vec<_>>(), ["value"]);
/// ```
#[derive(Clone, Debug)]
pub struct ClassDescriptor {
    type_path: &'static str,
    type_name: &'static str,
    properties: Box<[PropertyMetadata]>,
    property_names: Box<[&'static str]>,
    indices: HashMap<&'static str, usize>,
    methods: Box<[MethodInfo]>,
}

impl ClassDescriptor {
    /// Create a new [`ClassDescriptor`].
    ///
    /// Property order and indices follow the input order.
    pub fn new(
        type_path: &'static str,
        type_name: &'static str,
        properties: &[PropertyMetadata],
    ) -> Self {
        let property_names = properties.iter().map(PropertyMetadata::name).collect();
        let indices = properties
            .iter()
            .enumerate()
            .map(|(index, p)| (p.name(), index))
            .collect();
        let properties = properties
            .iter()
            .enumerate()
            .map(|(index, p)| p.clone().with_index(index))
            .collect();

        Self {
            type_path,
            type_name,
            properties,
            property_names,
            indices,
            methods: Box::new([]),
        }
    }

    /// Replaces the method table (overwrite, do not merge).
    pub fn with_methods(self, methods: impl IntoIterator<Item = MethodInfo>) -> Self {
        Self {
            methods: methods.into_iter().collect(),
            ..self
        }
    }

    /// Returns the full type path, e.g. `ortb_model::bid_request::App`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the short type name, e.g. `App`.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the [`PropertyMetadata`] for the given `name`, if present.
    pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.property_at(*self.indices.get(name)?)
    }

    /// Returns the [`PropertyMetadata`] at the given index, if present.
    pub fn property_at(&self, index: usize) -> Option<&PropertyMetadata> {
        self.properties.get(index)
    }

    /// Returns an iterator over the properties in **declaration order**.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &PropertyMetadata> {
        self.properties.iter()
    }

    /// Returns the property names in declaration order.
    #[inline]
    pub fn property_names(&self) -> &[&'static str] {
        &self.property_names
    }

    /// Returns the number of declared properties.
    #[inline]
    pub fn len(&self) -> usize {
        self.property_names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.property_names.is_empty()
    }

    /// Returns the required properties in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &PropertyMetadata> {
        self.iter().filter(|p| p.required())
    }

    /// Returns `Some(is_public)` for a recorded method, `None` otherwise.
    pub fn method(&self, name: &str) -> Option<bool> {
        self.methods
            .iter()
            .find(|m| m.name() == name)
            .map(MethodInfo::is_public)
    }

    /// Returns the recorded methods in declaration order.
    #[inline]
    pub fn methods(&self) -> impl ExactSizeIterator<Item = &MethodInfo> {
        self.methods.iter()
    }

    /// Returns `true` if `name` is a recorded public method.
    #[inline]
    pub fn is_public(&self, name: &str) -> bool {
        self.method(name).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassDescriptor, MethodInfo};
    use crate::info::{DeclaredType, DefaultValue, PropertyKind, PropertyMetadata};

    fn descriptor() -> ClassDescriptor {
        ClassDescriptor::new(
            "tests::Assets",
            "Assets",
            &[
                PropertyMetadata::new("id", DeclaredType::Int).with_required(true),
                PropertyMetadata::new("required", DeclaredType::Int)
                    .with_default(DefaultValue::Int(0)),
                PropertyMetadata::new("img", DeclaredType::Object),
            ],
        )
        .with_methods([MethodInfo::new("set_id", true), MethodInfo::new("check", false)])
    }

    #[test]
    fn declaration_order_and_lookup() {
        let info = descriptor();
        let names: Vec<_> = info.iter().map(|p| (p.index(), p.name())).collect();
        assert_eq!(names, [(0, "id"), (1, "required"), (2, "img")]);
        assert_eq!(info.property("img").unwrap().kind(), PropertyKind::Object);
        assert_eq!(
            info.property("required").unwrap().default_value(),
            Some(&DefaultValue::Int(0))
        );
        assert!(info.property("missing").is_none());
        assert!(info.property_at(3).is_none());
    }

    #[test]
    fn method_visibility() {
        let info = descriptor();
        assert_eq!(info.method("set_id"), Some(true));
        assert_eq!(info.method("check"), Some(false));
        assert_eq!(info.method("nope"), None);
        assert!(info.is_public("set_id"));
        assert!(!info.is_public("check"));
        assert_eq!(info.methods().len(), 2);
    }
}
