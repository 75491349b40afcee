//! Station catalog: code lookup and city/state resolution.

mod catalog;
mod error;

pub use catalog::StationCatalog;
pub use error::StationError;
