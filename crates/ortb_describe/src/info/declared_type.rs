use core::fmt;
use core::str::FromStr;

// -----------------------------------------------------------------------------
// PropertyKind

/// How the serializer treats a property.
///
/// Resolved once from the [`DeclaredType`] when the descriptor is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// A primitive, string or list of primitives, written as-is.
    Scalar,
    /// A single nested serializable value.
    Object,
    /// An ordered collection of serializable values.
    Collection,
}

// -----------------------------------------------------------------------------
// DeclaredType

/// The semantic type tag of a property.
///
/// Either written explicitly with `#[ortb(kind = "...")]` or inferred from the
/// field's static type by the derive macro.
///
/// # Examples
///
/// ```
/// use ortb_describe::info::{DeclaredType, PropertyKind};
///
/// let ty: DeclaredType = "collection".parse().unwrap();
/// assert_eq!(ty, DeclaredType::Collection);
/// assert_eq!(ty.kind(), PropertyKind::Collection);
/// assert_eq!(DeclaredType::Array.kind(), PropertyKind::Scalar);
/// assert!("vector".parse::<DeclaredType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    String,
    Int,
    Float,
    Bool,
    /// A list of scalars.
    Array,
    Object,
    Collection,
    /// A free-form key/value bag.
    Extension,
}

impl DeclaredType {
    /// All tags, in the order they are listed in error messages.
    pub const ALL: [DeclaredType; 8] = [
        Self::String,
        Self::Int,
        Self::Float,
        Self::Bool,
        Self::Array,
        Self::Object,
        Self::Collection,
        Self::Extension,
    ];

    /// Returns the tag as written in `#[ortb(kind = "...")]`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::Object => "object",
            Self::Collection => "collection",
            Self::Extension => "extension",
        }
    }

    /// Returns the serializer's view of this type.
    pub const fn kind(self) -> PropertyKind {
        match self {
            Self::String | Self::Int | Self::Float | Self::Bool | Self::Array => {
                PropertyKind::Scalar
            }
            Self::Object | Self::Extension => PropertyKind::Object,
            Self::Collection => PropertyKind::Collection,
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`DeclaredType`] tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown declared type `{0}`")]
pub struct UnknownDeclaredType(pub String);

impl FromStr for DeclaredType {
    type Err = UnknownDeclaredType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownDeclaredType(s.to_owned()))
    }
}
