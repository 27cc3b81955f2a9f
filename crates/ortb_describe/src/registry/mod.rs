//! Provide a type registry for lookups by type path or short name.
//!
//! ## Menu
//!
//! - [`TypeRegistration`]: the identity of one described type and how to build its descriptor.
//! - [`TypeRegistry`]: a container for storing and querying `TypeRegistration`s.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`] .
//!
//! We use [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//! If it is not supported, `auto_register` returns `false` without error.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_registry::{TypeRegistration, TypeRegistry};
