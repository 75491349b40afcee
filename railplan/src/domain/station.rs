//! Station code and stop index types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid 3-letter station code.
///
/// Station codes in the timetable feed are 3 uppercase ASCII letters
/// (e.g. `WAS`, `NYP`, `RNK`). A `StationCode` value is valid by
/// construction, so it can be used as a graph key without re-validation.
///
/// # Examples
///
/// ```
/// use railplan::domain::StationCode;
///
/// let was = StationCode::parse("WAS").unwrap();
/// assert_eq!(was.as_str(), "WAS");
///
/// assert!(StationCode::parse("was").is_err());
/// assert!(StationCode::parse("WASH").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode([u8; 3]);

impl StationCode {
    /// Parse a station code: exactly 3 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes: [u8; 3] = s
            .as_bytes()
            .try_into()
            .map_err(|_| InvalidStationCode {
                reason: "must be exactly 3 characters",
            })?;

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidStationCode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(StationCode(bytes))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only uppercase ASCII is ever stored
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a stop within a train's itinerary.
///
/// Itinerary order is significant: legs run from a stop to its immediate
/// successor, and a `StopIndex` makes that adjacency explicit instead of
/// relying on station codes (which could repeat on a looping train).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopIndex(pub usize);

impl StopIndex {
    /// The immediately following stop.
    pub fn next(self) -> Self {
        StopIndex(self.0 + 1)
    }
}

impl fmt::Display for StopIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StopIndex {
    fn from(value: usize) -> Self {
        StopIndex(value)
    }
}
