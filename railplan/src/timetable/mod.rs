//! Timetable record types at the input boundary.
//!
//! An external loader deserializes the upstream timetable feed into these
//! records and hands them to [`TimetableSnapshot::build`]
//! (crate::graph::TimetableSnapshot::build). The serde field names match
//! the feed exactly (`arrivalActual`, `departureScheduled`, nested
//! `station` object), so the loader needs no mapping layer.
//!
//! Timestamps stay raw strings here. They are parsed once, when legs are
//! derived at graph build time; see [`crate::domain::leg_minutes`].

use serde::Deserialize;

use crate::domain::StationCode;

/// Static metadata for one physical station.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationInfo {
    /// Short unique station code (e.g. `WAS`).
    pub code: String,
    /// Full station name.
    pub name: String,
    /// City the station serves.
    pub city: String,
    /// State abbreviation (e.g. `DC`, `VA`).
    pub state: String,
    /// Street address lines, when the feed supplies them.
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl StationInfo {
    /// Returns (latitude, longitude) in degrees.
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// One visit of a train to a station.
///
/// Scheduled and actual times are optional: the feed frequently omits one
/// or the other, and origin/terminus stops have no arrival/departure
/// respectively. The `station` reference may be absent for stops the feed
/// failed to resolve; such stops are skipped during graph construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Raw stop code as the feed spells it.
    pub code: String,
    /// True when this stop is served by a substitute bus.
    #[serde(default)]
    pub bus: bool,
    #[serde(default)]
    pub arrival_actual: Option<String>,
    #[serde(default)]
    pub arrival_scheduled: Option<String>,
    #[serde(default)]
    pub departure_actual: Option<String>,
    #[serde(default)]
    pub departure_scheduled: Option<String>,
    /// Free-text status label (e.g. `Enroute`, `Station`).
    #[serde(default)]
    pub status: Option<String>,
    /// Resolved station metadata, when the feed supplied it.
    #[serde(default)]
    pub station: Option<StationInfo>,
}

impl Stop {
    /// Creates a bare stop with only a code, for building fixtures.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            bus: false,
            arrival_actual: None,
            arrival_scheduled: None,
            departure_actual: None,
            departure_scheduled: None,
            status: None,
            station: None,
        }
    }

    /// Effective arrival timestamp: actual if present, else scheduled.
    pub fn effective_arrival(&self) -> Option<&str> {
        self.arrival_actual
            .as_deref()
            .or(self.arrival_scheduled.as_deref())
    }

    /// Effective departure timestamp: actual if present, else scheduled.
    pub fn effective_departure(&self) -> Option<&str> {
        self.departure_actual
            .as_deref()
            .or(self.departure_scheduled.as_deref())
    }

    /// The validated station code, when the station reference is present
    /// and its code is well-formed.
    pub fn station_code(&self) -> Option<StationCode> {
        let info = self.station.as_ref()?;
        StationCode::parse(&info.code).ok()
    }
}

/// One scheduled run of a train over its itinerary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    /// Feed-wide unique run identifier.
    pub id: i64,
    /// Public train number.
    pub number: u32,
    /// Direction label (e.g. `Southbound`).
    #[serde(default)]
    pub heading: String,
    /// Name of the route this run belongs to.
    #[serde(default)]
    pub route: String,
    /// Ordered itinerary. Order is significant: legs join adjacent stops.
    pub stations: Vec<Stop>,
}

/// A named grouping of trains, as supplied by the feed.
///
/// Routes exist for display and grouping only. The path finder works over
/// flattened legs and never consults route boundaries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Route name (e.g. `Northeast Regional`).
    pub route: String,
    pub trains: Vec<Train>,
}
