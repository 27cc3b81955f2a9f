use thiserror::Error;

/// Error returned by the schema compiler.
///
/// Compilation has no partial result: the first error aborts the whole call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapError {
    /// The tags of an entry are neither a tag string nor a tag mapping.
    #[error("Invalid tags for `{path}`: expected a string or a mapping, found {found}")]
    InvalidTags { path: String, found: &'static str },
    /// A structured entry is malformed.
    #[error("Invalid schema entry `{key}`: {reason}")]
    InvalidEntry { key: String, reason: &'static str },
    /// The schema is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
