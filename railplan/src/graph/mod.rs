//! The leg graph: directed travel segments indexed by station.

mod build;
mod snapshot;

pub use build::{BuildStats, LegGraph};
pub use snapshot::{GraphNotBuilt, SnapshotHandle, TimetableSnapshot};
