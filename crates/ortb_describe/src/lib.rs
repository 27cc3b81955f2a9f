//! Object descriptors and the generic serializer for protocol entities.
//!
//! A type opts in with [`#[derive(Describe)]`](derive::Describe), which records
//! its declared properties (name, required, recommended, default value, declared
//! type) at compile time. The [`DescriptorFactory`] turns that record into a
//! shared [`ClassDescriptor`], memoized through a [`DescriptorCache`], and the
//! [`Serializer`](ser::Serializer) walks a live instance against its descriptor
//! to produce an ordered [`Object`](ser::Object).
//!
//! ```
//! use ortb_describe::derive::Describe;
//! use ortb_describe::ser::{Serializable, Value};
//!
//! #[derive(Describe)]
//! struct Link {
//!     #[ortb(required)]
//!     url: Option<String>,
//!     clicktrackers: Vec<String>,
//! }
//!
//! let link = Link { url: Some("https://a.example".into()), clicktrackers: Vec::new() };
//! let map = link.to_map().unwrap();
//!
//! assert_eq!(map.get("url"), Some(&Value::from("https://a.example")));
//! assert!(!map.contains_key("clicktrackers"));
//!
//! let empty = Link { url: None, clicktrackers: Vec::new() };
//! assert!(empty.to_map().is_err());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate as `ortb_describe`, including inside its own tests.
extern crate self as ortb_describe;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod describe;
mod error;
mod factory;

pub mod constants;
pub mod info;
pub mod registry;
pub mod ser;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use cache::{CachedValue, DescriptorCache, MemoryCache, NoOpCache};
pub use describe::Describe;
pub use error::{DescribeError, SerializeError};
pub use factory::DescriptorFactory;
pub use info::ClassDescriptor;
pub use ortb_describe_derive as derive;
