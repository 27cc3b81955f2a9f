//! Objects of the native ad request.

// -----------------------------------------------------------------------------
// Modules

mod assets;
mod native;

pub mod specification;

// -----------------------------------------------------------------------------
// Exports

pub use assets::{Assets, Data, Image, Title};
pub use native::Native;
