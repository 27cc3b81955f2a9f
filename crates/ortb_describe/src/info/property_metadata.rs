use core::fmt;

use crate::info::{DeclaredType, PropertyKind};

// -----------------------------------------------------------------------------
// DefaultValue

/// A default value declared with `#[ortb(default = ...)]`.
///
/// This is metadata only. The serializer never substitutes it for an unset
/// property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'static str),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => f.write_str(v),
        }
    }
}

// -----------------------------------------------------------------------------
// PropertyMetadata

/// Facts about one declared property.
///
/// Immutable once its [`ClassDescriptor`](crate::ClassDescriptor) is built.
///
/// # Examples
///
/// ```
/// use ortb_describe::{Describe, derive::Describe};
///
/// #[derive(Describe)]
/// struct Image {
///     url: Option<String>,
///     #[ortb(recommended)]
///     wmin: Option<u32>,
/// }
///
/// let descriptor = Image::class_descriptor();
/// let wmin = descriptor.property("wmin").unwrap();
///
/// assert_eq!(wmin.index(), 1);
/// assert!(wmin.recommended());
/// assert!(!wmin.required());
/// assert_eq!(wmin.declared_type().as_str(), "int");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMetadata {
    name: &'static str,
    index: usize,
    required: bool,
    recommended: bool,
    default_value: Option<DefaultValue>,
    declared_type: DeclaredType,
    kind: PropertyKind,
    #[cfg(feature = "docs")]
    docs: Option<&'static str>,
}

impl PropertyMetadata {
    /// Returns the field's doc comment.
    ///
    /// Always `None` unless the `docs` feature is enabled.
    #[inline(always)]
    pub const fn docs(&self) -> Option<&'static str> {
        #[cfg(not(feature = "docs"))]
        return None;
        #[cfg(feature = "docs")]
        return self.docs;
    }

    /// Replaces the doc comment. Called by the derive.
    #[cfg(feature = "docs")]
    #[inline]
    pub const fn with_docs(mut self, docs: Option<&'static str>) -> Self {
        self.docs = docs;
        self
    }

    /// Creates metadata for a property with no markers.
    ///
    /// The index is assigned by [`ClassDescriptor::new`](crate::ClassDescriptor::new).
    #[inline]
    pub const fn new(name: &'static str, declared_type: DeclaredType) -> Self {
        Self {
            name,
            index: 0,
            required: false,
            recommended: false,
            default_value: None,
            declared_type,
            kind: declared_type.kind(),
            #[cfg(feature = "docs")]
            docs: None,
        }
    }

    /// Sets the required marker.
    #[inline]
    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the recommended marker.
    #[inline]
    pub const fn with_recommended(mut self, recommended: bool) -> Self {
        self.recommended = recommended;
        self
    }

    /// Sets the declared default value.
    #[inline]
    pub const fn with_default(mut self, value: DefaultValue) -> Self {
        self.default_value = Some(value);
        self
    }

    #[inline]
    pub(crate) const fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Returns the wire name of the property.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declaration index of the property.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether serialization fails when the property produces no output.
    #[inline]
    pub const fn required(&self) -> bool {
        self.required
    }

    /// Advisory marker, never enforced.
    #[inline]
    pub const fn recommended(&self) -> bool {
        self.recommended
    }

    #[inline]
    pub const fn default_value(&self) -> Option<&DefaultValue> {
        self.default_value.as_ref()
    }

    #[inline]
    pub const fn declared_type(&self) -> DeclaredType {
        self.declared_type
    }

    /// Returns how the serializer treats this property.
    #[inline]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }
}
