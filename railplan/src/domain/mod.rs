//! Core domain types for the journey planner.
//!
//! Types here are validated at construction: a [`StationCode`] is always a
//! well-formed code, a [`Leg`] always joins two adjacent stops of its train.
//! Downstream code can rely on that instead of re-checking.

mod error;
mod leg;
mod path;
mod station;
mod time;

pub use error::DomainError;
pub use leg::Leg;
pub use path::PathResult;
pub use station::{InvalidStationCode, StationCode, StopIndex};
pub use time::{TimestampError, leg_minutes, parse_timestamp};
