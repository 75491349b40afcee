//! Distance-based fare estimation.
//!
//! Fares are an estimate for display, not a bookable price: great-circle
//! distance between the two stations times a flat per-mile rate, scaled by
//! travel class. Purchasing and seat availability live elsewhere.

mod geo;

use std::fmt;

use crate::domain::StationCode;
use crate::stations::StationCatalog;

pub use geo::{EARTH_RADIUS_MILES, haversine_miles};

/// Base rate in currency units per mile.
pub const BASE_RATE_PER_MILE: f64 = 0.28;

/// Fare estimation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// A station code was not present in the catalog.
    #[error("no station with code {0}")]
    StationNotFound(StationCode),
}

/// Travel class, scaling the base fare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TravelClass {
    #[default]
    Economy,
    Business,
    First,
    Private,
}

impl TravelClass {
    /// Parse a class label, case-insensitively.
    ///
    /// Total by design: unrecognized labels fall back to economy so a
    /// front end passing through free-text input still gets a quote.
    ///
    /// # Examples
    ///
    /// ```
    /// use railplan::fare::TravelClass;
    ///
    /// assert_eq!(TravelClass::parse("Business"), TravelClass::Business);
    /// assert_eq!(TravelClass::parse("FIRST"), TravelClass::First);
    /// assert_eq!(TravelClass::parse("coach"), TravelClass::Economy);
    /// ```
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case("business") {
            TravelClass::Business
        } else if label.eq_ignore_ascii_case("first") {
            TravelClass::First
        } else if label.eq_ignore_ascii_case("private") {
            TravelClass::Private
        } else {
            TravelClass::Economy
        }
    }

    /// Fare multiplier for this class.
    pub fn multiplier(self) -> f64 {
        match self {
            TravelClass::Economy => 1.0,
            TravelClass::Business => 1.5,
            TravelClass::First => 1.7,
            TravelClass::Private => 2.0,
        }
    }
}

impl fmt::Display for TravelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TravelClass::Economy => "economy",
            TravelClass::Business => "business",
            TravelClass::First => "first",
            TravelClass::Private => "private",
        };
        f.write_str(label)
    }
}

/// A priced station pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FareQuote {
    pub from: StationCode,
    pub to: StationCode,
    pub class: TravelClass,
    /// Great-circle distance between the stations, in miles.
    pub miles: f64,
    /// Estimated price in currency units.
    pub amount: f64,
}

/// Computes fares against a built station catalog. Read-only; safe to use
/// from any number of threads at once.
pub struct FareEstimator<'a> {
    catalog: &'a StationCatalog,
}

impl<'a> FareEstimator<'a> {
    pub fn new(catalog: &'a StationCatalog) -> Self {
        Self { catalog }
    }

    /// Price a station pair for a travel class.
    ///
    /// # Errors
    ///
    /// [`FareError::StationNotFound`] when either code is absent from the
    /// catalog.
    pub fn quote(
        &self,
        from: StationCode,
        to: StationCode,
        class: TravelClass,
    ) -> Result<FareQuote, FareError> {
        let origin = self
            .catalog
            .get(&from)
            .ok_or(FareError::StationNotFound(from))?;
        let dest = self
            .catalog
            .get(&to)
            .ok_or(FareError::StationNotFound(to))?;

        let miles = haversine_miles(origin.coords(), dest.coords());
        let amount = miles * BASE_RATE_PER_MILE * class.multiplier();

        Ok(FareQuote {
            from,
            to,
            class,
            miles,
            amount,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// For a fixed class, fare is monotone in equatorial separation.
        #[test]
        fn fare_monotone_in_distance(lon1 in 0.0f64..90.0, lon2 in 0.0f64..90.0) {
            let near = lon1.min(lon2);
            let far = lon1.max(lon2);

            let fare = |lon: f64| {
                haversine_miles((0.0, 0.0), (0.0, lon))
                    * BASE_RATE_PER_MILE
                    * TravelClass::Economy.multiplier()
            };

            prop_assert!(fare(near) <= fare(far) + 1e-9);
        }

        /// Any label parses to a class with multiplier at least 1.
        #[test]
        fn parse_is_total(label in ".*") {
            let class = TravelClass::parse(&label);
            prop_assert!(class.multiplier() >= 1.0);
        }
    }
}
