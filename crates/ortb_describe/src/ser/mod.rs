//! The generic serializer and the values it produces.
//!
//! ## Menu
//!
//! - [`Serializable`]: what a described type exposes to the serializer.
//! - [`Property`]: what one property of an instance yields.
//! - [`ScalarProperty`], [`ObjectProperty`], [`CollectionProperty`]:
//!   conversions used by generated code, selected by the declared type.
//! - [`Value`] and [`Object`]: the ordered output.
//! - [`Serializer`] and [`to_map`]: the walk that applies the omission rule
//!   and the required-field check.
//! - [`Collection`] and [`Extension`]: containers used by entity types.

// -----------------------------------------------------------------------------
// Modules

mod collection;
mod extension;
mod property;
mod serializer;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use collection::Collection;
pub use extension::Extension;
pub use property::{CollectionProperty, ObjectProperty, Property, ScalarProperty, Serializable};
pub use serializer::{Serializer, to_map};
pub use value::{Object, Value};
