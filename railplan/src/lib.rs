//! Timetable-based train journey planner.
//!
//! Answers: "which sequence of scheduled train segments connects these two
//! stations, how long does it take, and roughly what does it cost?"
//!
//! The crate is a pure engine. An external loader hands it a collection of
//! [`timetable::Route`] records; [`graph::TimetableSnapshot::build`] turns
//! them into an immutable station catalog and leg graph, and
//! [`planner::PathFinder`] / [`fare::FareEstimator`] run read-only queries
//! over that snapshot. No I/O, no presentation.

pub mod domain;
pub mod fare;
pub mod graph;
pub mod planner;
pub mod stations;
pub mod timetable;
