//! Objects of the native ad response, the markup returned in a bid.

// -----------------------------------------------------------------------------
// Modules

mod assets;
mod native;

// -----------------------------------------------------------------------------
// Exports

pub use assets::{Assets, Data, Image, Title};
pub use native::{Link, Native};
