//! Derived travel segments.
//!
//! A `Leg` is a directed edge between two *itinerary-adjacent* stops of one
//! train. Legs are derived once when the graph is built and shared via
//! `Arc<Train>`, so cloning one during search is cheap.

use std::sync::Arc;

use super::{DomainError, StationCode, StopIndex, leg_minutes};
use crate::timetable::{Stop, Train};

/// A directed travel segment between two adjacent stops of one train.
///
/// # Invariants
///
/// - The origin stop strictly precedes the destination stop (destination is
///   always origin + 1; multi-stop travel is a composition of adjacent legs).
/// - Both endpoints resolve to a validated [`StationCode`].
/// - Duration is non-negative. When the stop timestamps are missing or
///   unparsable the leg is kept with a zero-duration sentinel rather than
///   discarded ([`is_timed`](Leg::is_timed) reports which case applies);
///   the upstream dataset is imperfect and dropping edges would
///   disconnect the graph.
#[derive(Debug, Clone)]
pub struct Leg {
    train: Arc<Train>,
    origin: StopIndex,
    from: StationCode,
    to: StationCode,
    minutes: i64,
    timed: bool,
}

impl Leg {
    /// Derive the leg joining `origin` to the stop after it.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NoFollowingStop`] when `origin` is the last stop or
    ///   out of bounds.
    /// - [`DomainError::UnresolvedStation`] when either endpoint lacks a
    ///   usable station reference. Such records are skipped by the graph
    ///   builder, never fatal.
    pub fn new(train: Arc<Train>, origin: StopIndex) -> Result<Self, DomainError> {
        let dest = origin.next();

        let origin_stop = train
            .stations
            .get(origin.0)
            .ok_or(DomainError::NoFollowingStop(origin))?;
        let dest_stop = train
            .stations
            .get(dest.0)
            .ok_or(DomainError::NoFollowingStop(origin))?;

        let from = origin_stop
            .station_code()
            .ok_or(DomainError::UnresolvedStation(origin))?;
        let to = dest_stop
            .station_code()
            .ok_or(DomainError::UnresolvedStation(dest))?;

        let measured = leg_minutes(
            origin_stop.effective_departure(),
            dest_stop.effective_arrival(),
        );

        Ok(Leg {
            train,
            origin,
            from,
            to,
            minutes: measured.unwrap_or(0),
            timed: measured.is_some(),
        })
    }

    /// The train this leg rides.
    pub fn train(&self) -> &Arc<Train> {
        &self.train
    }

    /// Feed identity of the owning train. Used as part of the visited-state
    /// key during search so the same train is not re-boarded in a cycle.
    pub fn train_id(&self) -> i64 {
        self.train.id
    }

    /// Public train number, for display.
    pub fn train_number(&self) -> u32 {
        self.train.number
    }

    /// Index of the origin stop in the train's itinerary.
    pub fn origin_index(&self) -> StopIndex {
        self.origin
    }

    /// Index of the destination stop in the train's itinerary.
    pub fn dest_index(&self) -> StopIndex {
        self.origin.next()
    }

    /// The origin stop record.
    pub fn origin_stop(&self) -> &Stop {
        // Bounds validated at construction
        &self.train.stations[self.origin.0]
    }

    /// The destination stop record.
    pub fn dest_stop(&self) -> &Stop {
        &self.train.stations[self.origin.0 + 1]
    }

    /// Station the leg departs from.
    pub fn from(&self) -> StationCode {
        self.from
    }

    /// Station the leg arrives at.
    pub fn to(&self) -> StationCode {
        self.to
    }

    /// Travel duration in minutes. Zero either means a genuinely
    /// instantaneous hop in the data or the unparsable-timestamp sentinel;
    /// [`is_timed`](Leg::is_timed) distinguishes the two.
    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// True when the duration came from parsed timestamps, false when it is
    /// the zero sentinel.
    pub fn is_timed(&self) -> bool {
        self.timed
    }
}

impl PartialEq for Leg {
    fn eq(&self, other: &Self) -> bool {
        // A leg is identified by its train and its position on it.
        self.train.id == other.train.id && self.origin == other.origin
    }
}

impl Eq for Leg {}
