//! Atomic timetable snapshots.
//!
//! The catalog and graph are built once per dataset and then only read.
//! A refresh builds a complete new snapshot and swaps the shared handle in
//! one step, so a search already in flight keeps the `Arc` it resolved and
//! never observes a half-rebuilt graph.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::stations::StationCatalog;
use crate::timetable::Route;

use super::LegGraph;

/// Error for queries issued before a snapshot has been installed.
///
/// Deliberately distinct from an empty
/// [`PathResult`](crate::domain::PathResult): "not built yet" is a caller
/// bug or a startup race, "no route found" is an ordinary answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("timetable snapshot has not been built yet")]
pub struct GraphNotBuilt;

/// One immutable build of the station catalog plus the leg graph.
#[derive(Debug, Clone, Default)]
pub struct TimetableSnapshot {
    pub catalog: StationCatalog,
    pub graph: LegGraph,
}

impl TimetableSnapshot {
    /// Single-threaded one-shot build from loaded timetable records.
    pub fn build(routes: &[Route]) -> Self {
        Self {
            catalog: StationCatalog::build(routes),
            graph: LegGraph::build(routes),
        }
    }
}

/// Shared handle to the current snapshot.
///
/// Clones share the same slot. The lock is held only for the pointer swap
/// or read; queries run against the `Arc` they resolved, entirely outside
/// the lock.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHandle {
    inner: Arc<RwLock<Option<Arc<TimetableSnapshot>>>>,
}

impl SnapshotHandle {
    /// A handle with no snapshot installed; queries fail with
    /// [`GraphNotBuilt`] until [`install`](Self::install) runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the current snapshot.
    pub fn install(&self, snapshot: TimetableSnapshot) {
        let snapshot = Arc::new(snapshot);
        debug!(
            stations = snapshot.catalog.len(),
            legs = snapshot.graph.leg_count(),
            "installing timetable snapshot"
        );
        let mut slot = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(snapshot);
    }

    /// The current snapshot, failing fast when none is installed.
    pub fn current(&self) -> Result<Arc<TimetableSnapshot>, GraphNotBuilt> {
        let slot = self.inner.read().unwrap_or_else(|e| e.into_inner());
        slot.clone().ok_or(GraphNotBuilt)
    }
}
