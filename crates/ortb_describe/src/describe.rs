use crate::info::ClassDescriptor;
use crate::ser::Serializable;

/// Static identity and metadata of a described type.
///
/// Implemented by [`#[derive(Describe)]`](crate::derive::Describe), together
/// with [`Serializable`].
///
/// `class_descriptor` builds a fresh descriptor on every call. Use the
/// [`DescriptorFactory`](crate::DescriptorFactory) to get the shared,
/// memoized one.
///
/// # Examples
///
/// ```
/// use ortb_describe::{Describe, derive::Describe};
///
/// mod bid_request {
///     use ortb_describe::derive::Describe;
///
///     #[derive(Describe)]
///     #[ortb(type_path = "openrtb::bid_request::Producer")]
///     pub struct Producer {
///         pub name: Option<String>,
///     }
/// }
///
/// assert_eq!(bid_request::Producer::type_path(), "openrtb::bid_request::Producer");
/// assert_eq!(bid_request::Producer::type_name(), "Producer");
/// ```
pub trait Describe: Serializable + Sized {
    /// Returns the full type path, e.g. `ortb_model::bid_request::App`.
    fn type_path() -> &'static str;

    /// Returns the short type name, e.g. `App`.
    fn type_name() -> &'static str;

    /// Builds the descriptor from the compile-time metadata.
    ///
    /// The method table is left empty; the factory fills it in.
    fn class_descriptor() -> ClassDescriptor;
}
