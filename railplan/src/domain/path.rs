//! Search results.

use super::Leg;

/// An ordered sequence of legs plus the total travel time.
///
/// An empty sequence with zero duration means "no route found"; that is an
/// expected outcome of a search, not an error. Consecutive legs are
/// endpoint-continuous: each leg departs from the station the previous one
/// arrived at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResult {
    legs: Vec<Leg>,
    total_minutes: i64,
}

impl PathResult {
    /// The no-route-found result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a result from an ordered leg sequence; the total is the sum of
    /// leg durations.
    pub fn new(legs: Vec<Leg>) -> Self {
        let total_minutes = legs.iter().map(Leg::minutes).sum();
        Self {
            legs,
            total_minutes,
        }
    }

    /// True when no route was found.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// The legs, in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Total travel time in minutes.
    pub fn total_minutes(&self) -> i64 {
        self.total_minutes
    }

    /// Number of legs ridden.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Number of train changes: consecutive legs on different trains.
    pub fn transfer_count(&self) -> usize {
        self.legs
            .windows(2)
            .filter(|pair| pair[0].train_id() != pair[1].train_id())
            .count()
    }

    /// Checks endpoint continuity: `legs[i].to == legs[i+1].from` for all i.
    pub fn is_continuous(&self) -> bool {
        self.legs
            .windows(2)
            .all(|pair| pair[0].to() == pair[1].from())
    }
}
