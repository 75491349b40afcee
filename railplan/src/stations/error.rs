//! Station resolution errors.

use crate::domain::StationCode;

/// Failure to resolve a station query.
///
/// Resolution failures are ordinary results handed back to the caller;
/// they never invalidate the catalog or the graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// No station registered under this code.
    #[error("no station with code {0}")]
    NotFound(StationCode),

    /// No station matched the city/state query.
    #[error("no station matching {city}, {state}")]
    NoMatch { city: String, state: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::NotFound(StationCode::parse("ZZZ").unwrap());
        assert_eq!(err.to_string(), "no station with code ZZZ");

        let err = StationError::NoMatch {
            city: "Roanoke".into(),
            state: "VA".into(),
        };
        assert_eq!(err.to_string(), "no station matching Roanoke, VA");
    }
}
