//! Timetable timestamp handling.
//!
//! The feed carries timestamps as ISO-8601 date-times with a UTC offset
//! (e.g. `2024-03-15T10:00:00-05:00`). They stay opaque strings on the
//! [`Stop`](crate::timetable::Stop) records and are parsed exactly once,
//! when legs are derived at graph build time. The dataset is third-party
//! and imperfect, so parse failures are reported, not panicked on.

use chrono::{DateTime, FixedOffset};

/// Error returned when a timetable timestamp fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {value:?}: {message}")]
pub struct TimestampError {
    value: String,
    message: String,
}

/// Parse an ISO-8601 timestamp with offset.
///
/// # Examples
///
/// ```
/// use railplan::domain::parse_timestamp;
///
/// let t = parse_timestamp("2024-03-15T10:45:00-05:00").unwrap();
/// assert_eq!(t.timestamp(), 1710517500);
///
/// assert!(parse_timestamp("10:45").is_err());
/// assert!(parse_timestamp("").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    DateTime::parse_from_rfc3339(s).map_err(|e| TimestampError {
        value: s.to_string(),
        message: e.to_string(),
    })
}

/// Duration in whole minutes between an origin's effective departure and a
/// destination's effective arrival.
///
/// Returns `None` when either timestamp is missing, fails to parse, or the
/// delta comes out negative (out-of-order data). The caller decides what a
/// `None` means; [`Leg::new`](crate::domain::Leg::new) substitutes the
/// zero-duration sentinel so one bad record never discards the edge.
pub fn leg_minutes(departure: Option<&str>, arrival: Option<&str>) -> Option<i64> {
    let dep = parse_timestamp(departure?).ok()?;
    let arr = parse_timestamp(arrival?).ok()?;
    let minutes = arr.signed_duration_since(dep).num_minutes();
    (minutes >= 0).then_some(minutes)
}
