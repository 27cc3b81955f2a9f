use thiserror::Error;

/// Error returned by a validating setter.
///
/// The entity is left unchanged when a setter fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidValueError {
    /// The value is not in the field's code list.
    #[error("`{value}` is not a valid `{field}`, expected a value of {specification}")]
    NotInSpecification {
        field: &'static str,
        value: String,
        specification: &'static str,
    },
    /// A dynamic value was expected to be a string.
    #[error("`{field}` expects a string, found {found}")]
    NotAString { field: &'static str, found: String },
    /// The value must be zero or greater. NaN is never accepted.
    #[error("`{field}` must be zero or greater, found {value}")]
    Negative { field: &'static str, value: String },
    /// The value is not an IP address of the expected family.
    #[error("`{value}` is not a valid address for `{field}`")]
    InvalidAddress { field: &'static str, value: String },
    /// The value is not a dotted version number such as `1.2`.
    #[error("`{value}` is not a valid version for `{field}`")]
    InvalidVersion { field: &'static str, value: String },
}
