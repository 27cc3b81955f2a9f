//! Declarative mapping schemas.
//!
//! A schema lists target paths, each with a source expression and optional
//! tags. [`compile`] turns it into a [`MappingTable`] of [`MapItem`]s.
//!
//! Recognized tags are `required`, `uuid` and `default`; anything else is
//! dropped during compilation. The tags are declarative: applying a table to
//! real data is left to its consumer.
//!
//! ```
//! use ortb_mapper::{Tag, compile};
//!
//! let table = compile([
//!     ("id:required", "$.src.id"),
//!     ("token:required@uuid", "generate"),
//!     ("cur:default USD", "$.src.currency"),
//! ]);
//!
//! assert_eq!(table.paths().collect::<Vec<_>>(), ["id", "token", "cur"]);
//! assert!(table.get("token").unwrap().tags().contains(Tag::Uuid));
//! assert_eq!(table.get("cur").unwrap().tags().default_value(), Some("USD"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod error;
mod table;
mod tag;

pub mod compile;

// -----------------------------------------------------------------------------
// Exports

pub use compile::{compile, compile_json, compile_str};
pub use error::MapError;
pub use table::{MapItem, MappingTable};
pub use tag::{Tag, TagValue, Tags, UnknownTag};
