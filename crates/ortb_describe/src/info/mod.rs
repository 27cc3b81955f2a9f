//! Static metadata describing a type's serializable shape.
//!
//! ## Menu
//!
//! - [`DeclaredType`]: the semantic type tag of a property.
//! - [`PropertyKind`]: how the serializer treats a property, derived from its declared type.
//! - [`DefaultValue`]: a default recorded as metadata, never applied by the serializer.
//! - [`PropertyMetadata`]: the facts about one declared property.
//! - [`MethodInfo`]: a method name and its visibility.
//! - [`ClassDescriptor`]: everything above for one type.

// -----------------------------------------------------------------------------
// Modules

mod class_descriptor;
mod declared_type;
mod property_metadata;

// -----------------------------------------------------------------------------
// Exports

pub use class_descriptor::{ClassDescriptor, MethodInfo};
pub use declared_type::{DeclaredType, PropertyKind, UnknownDeclaredType};
pub use property_metadata::{DefaultValue, PropertyMetadata};
