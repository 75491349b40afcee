//! Domain error types.

use super::StopIndex;

/// Validation failures when deriving domain values from timetable records.
///
/// These mark individual records as unusable; graph construction skips the
/// offending record and moves on rather than failing the whole build.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Stop index does not address an adjacent pair within the train.
    #[error("stop {0} has no following stop on this train")]
    NoFollowingStop(StopIndex),

    /// A stop is missing its station reference or has an unusable code.
    #[error("stop {0} has no resolvable station code")]
    UnresolvedStation(StopIndex),
}
