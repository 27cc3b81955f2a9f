//! Objects of the bid request.

// -----------------------------------------------------------------------------
// Modules

mod app;
mod data;
mod device;
mod native;

pub mod specification;

// -----------------------------------------------------------------------------
// Exports

pub use app::{App, Content, Producer, Publisher};
pub use data::{Data, Segment};
pub use device::{Device, Geo};
pub use native::Native;
