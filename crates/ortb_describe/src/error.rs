use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// DescribeError

/// Error returned by [`DescriptorFactory`](crate::DescriptorFactory) lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DescribeError {
    /// No registered type matches, or a short name matches several.
    #[error("Type `{identity}` does not exist or is ambiguous")]
    UnknownType { identity: String },
}

// -----------------------------------------------------------------------------
// SerializeError

/// Error returned by the [`Serializer`](crate::ser::Serializer).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SerializeError {
    /// A required property was unset or empty.
    #[error("`{property}` property is required in type: {class}")]
    MissingRequiredField {
        property: &'static str,
        class: &'static str,
    },
}
