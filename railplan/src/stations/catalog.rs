//! The station catalog.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::StationCode;
use crate::timetable::{Route, StationInfo};

use super::StationError;

/// Immutable map from station codes to static station metadata.
///
/// Built once per timetable snapshot by scanning every stop of every train;
/// read-only thereafter, safe to share across concurrent queries without
/// locking. Registration order is preserved so that query resolution is
/// deterministic with respect to the input traversal order.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    by_code: HashMap<StationCode, StationInfo>,
    // Insertion order; HashMap iteration alone would be nondeterministic.
    order: Vec<StationCode>,
}

impl StationCatalog {
    /// Scan the routes and register every stop with a resolvable station.
    ///
    /// Duplicate codes keep the first registration encountered. Stops with
    /// a missing station reference or a malformed code are skipped; the
    /// upstream feed is imperfect and one bad record must not abort the
    /// build.
    pub fn build(routes: &[Route]) -> Self {
        let mut catalog = StationCatalog::default();

        for route in routes {
            for train in &route.trains {
                for stop in &train.stations {
                    let Some(info) = stop.station.as_ref() else {
                        continue;
                    };
                    let Ok(code) = StationCode::parse(&info.code) else {
                        continue;
                    };
                    // First registration wins
                    if !catalog.by_code.contains_key(&code) {
                        catalog.by_code.insert(code, info.clone());
                        catalog.order.push(code);
                    }
                }
            }
        }

        debug!(stations = catalog.len(), "station catalog built");
        catalog
    }

    /// Look up a station by code.
    pub fn get(&self, code: &StationCode) -> Option<&StationInfo> {
        self.by_code.get(code)
    }

    /// Look up a station by code, failing with [`StationError::NotFound`].
    pub fn lookup(&self, code: &StationCode) -> Result<&StationInfo, StationError> {
        self.get(code).ok_or(StationError::NotFound(*code))
    }

    /// Resolve a human city/state query to a station code.
    ///
    /// Case-insensitive exact match on both fields; the first match in
    /// registration order wins. Stations sharing a city/state pair are not
    /// disambiguated.
    pub fn resolve_city_state(&self, city: &str, state: &str) -> Result<StationCode, StationError> {
        self.order
            .iter()
            .find(|code| {
                let info = &self.by_code[code];
                info.city.eq_ignore_ascii_case(city) && info.state.eq_ignore_ascii_case(state)
            })
            .copied()
            .ok_or_else(|| StationError::NoMatch {
                city: city.to_string(),
                state: state.to_string(),
            })
    }

    /// All registered codes, in registration order.
    pub fn codes(&self) -> impl Iterator<Item = &StationCode> {
        self.order.iter()
    }

    /// All distinct cities, in registration order. Front ends use this to
    /// populate start/destination pickers.
    pub fn cities(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.order
            .iter()
            .map(|code| self.by_code[code].city.as_str())
            .filter(|city| seen.insert(city.to_ascii_lowercase()))
            .collect()
    }

    /// Number of registered stations.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::{Stop, Train};

    fn stop(code: &str, name: &str, city: &str, state: &str) -> Stop {
        let mut stop = Stop::new(code);
        stop.station = Some(StationInfo {
            code: code.into(),
            name: name.into(),
            city: city.into(),
            state: state.into(),
            address1: None,
            address2: None,
            zip: None,
            lat: 0.0,
            lon: 0.0,
        });
        stop
    }

    fn route(trains: Vec<Train>) -> Route {
        Route {
            route: "Test".into(),
            trains,
        }
    }

    fn train(id: i64, stops: Vec<Stop>) -> Train {
        Train {
            id,
            number: id as u32,
            heading: String::new(),
            route: "Test".into(),
            stations: stops,
        }
    }

    fn sample_routes() -> Vec<Route> {
        vec![route(vec![
            train(
                1,
                vec![
                    stop("WAS", "Washington Union Station", "Washington", "DC"),
                    stop("ALX", "Alexandria", "Alexandria", "VA"),
                    stop("RNK", "Roanoke", "Roanoke", "VA"),
                ],
            ),
            train(
                2,
                vec![
                    stop("RNK", "Roanoke duplicate", "Roanoke", "VA"),
                    stop("LYH", "Lynchburg", "Lynchburg", "VA"),
                ],
            ),
        ])]
    }

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    #[test]
    fn registers_all_resolved_stops() {
        let catalog = StationCatalog::build(&sample_routes());
        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog.get(&code("WAS")).unwrap().name,
            "Washington Union Station"
        );
    }

    #[test]
    fn first_registration_wins() {
        let catalog = StationCatalog::build(&sample_routes());
        // Train 2 re-registers RNK with a different name; train 1 came first.
        assert_eq!(catalog.get(&code("RNK")).unwrap().name, "Roanoke");
    }

    #[test]
    fn lookup_missing_code() {
        let catalog = StationCatalog::build(&sample_routes());
        assert_eq!(
            catalog.lookup(&code("ZZZ")),
            Err(StationError::NotFound(code("ZZZ")))
        );
    }

    #[test]
    fn skips_unresolved_stops() {
        let mut bare = Stop::new("MYS");
        bare.station = None;
        let routes = vec![route(vec![train(1, vec![bare])])];

        let catalog = StationCatalog::build(&routes);
        assert!(catalog.is_empty());
    }

    #[test]
    fn resolve_city_state_case_insensitive() {
        let catalog = StationCatalog::build(&sample_routes());
        assert_eq!(
            catalog.resolve_city_state("washington", "dc").unwrap(),
            code("WAS")
        );
        assert_eq!(
            catalog.resolve_city_state("ROANOKE", "Va").unwrap(),
            code("RNK")
        );
    }

    #[test]
    fn resolve_requires_both_fields() {
        let catalog = StationCatalog::build(&sample_routes());
        // Right city, wrong state.
        assert!(catalog.resolve_city_state("Roanoke", "DC").is_err());
        assert!(matches!(
            catalog.resolve_city_state("Nowhere", "XX"),
            Err(StationError::NoMatch { .. })
        ));
    }

    #[test]
    fn resolve_is_deterministic_in_registration_order() {
        // Two Alexandria, VA stations: the earlier registration wins.
        let routes = vec![route(vec![train(
            1,
            vec![
                stop("ALX", "Alexandria", "Alexandria", "VA"),
                stop("AXB", "Alexandria Beltway", "Alexandria", "VA"),
            ],
        )])];
        let catalog = StationCatalog::build(&routes);
        assert_eq!(
            catalog.resolve_city_state("Alexandria", "VA").unwrap(),
            code("ALX")
        );
    }

    #[test]
    fn cities_in_order_without_duplicates() {
        let catalog = StationCatalog::build(&sample_routes());
        assert_eq!(
            catalog.cities(),
            vec!["Washington", "Alexandria", "Roanoke", "Lynchburg"]
        );
    }

    #[test]
    fn rebuild_is_deterministic() {
        let routes = sample_routes();
        let a = StationCatalog::build(&routes);
        let b = StationCatalog::build(&routes);

        let codes_a: Vec<_> = a.codes().copied().collect();
        let codes_b: Vec<_> = b.codes().copied().collect();
        assert_eq!(codes_a, codes_b);
    }
}
