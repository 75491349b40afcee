//! Leg graph construction.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{Leg, StationCode, StopIndex};
use crate::timetable::Route;

/// Counters surfaced from a graph build.
///
/// The upstream feed is imperfect; these make the anomalies visible
/// without ever failing the build over a single bad record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Legs derived and indexed.
    pub legs: usize,
    /// Adjacent stop pairs skipped because an endpoint had no resolvable
    /// station.
    pub skipped_pairs: usize,
    /// Legs kept with the zero-duration sentinel because their timestamps
    /// were missing or unparsable.
    pub untimed_legs: usize,
}

/// Directed leg graph over the timetable.
///
/// Only *itinerary-adjacent* stop pairs produce legs; a multi-stop direct
/// ride is a composition of adjacent legs discovered by search. That keeps
/// the edge count linear in the total number of stops.
///
/// Built once per timetable snapshot and immutable thereafter: queries
/// share it freely with no locking. A refresh builds a whole new graph and
/// swaps it in via [`SnapshotHandle`](crate::graph::SnapshotHandle).
#[derive(Debug, Clone, Default)]
pub struct LegGraph {
    /// Outgoing legs per station, in input traversal order.
    departures: HashMap<StationCode, Vec<Leg>>,
    /// Reverse index: stations with a leg landing at the key. Used only
    /// for reachability pruning, not for basic search correctness.
    arrivals: HashMap<StationCode, HashSet<StationCode>>,
    stats: BuildStats,
}

impl LegGraph {
    /// Derive and index one leg per adjacent stop pair of every train.
    pub fn build(routes: &[Route]) -> Self {
        let mut graph = LegGraph::default();

        for route in routes {
            for train in &route.trains {
                let train = Arc::new(train.clone());
                let stop_count = train.stations.len();

                for i in 0..stop_count.saturating_sub(1) {
                    match Leg::new(train.clone(), StopIndex(i)) {
                        Ok(leg) => {
                            if !leg.is_timed() {
                                graph.stats.untimed_legs += 1;
                            }
                            graph
                                .arrivals
                                .entry(leg.to())
                                .or_default()
                                .insert(leg.from());
                            graph.departures.entry(leg.from()).or_default().push(leg);
                            graph.stats.legs += 1;
                        }
                        Err(err) => {
                            trace!(train = train.id, stop = i, %err, "skipping stop pair");
                            graph.stats.skipped_pairs += 1;
                        }
                    }
                }
            }
        }

        debug!(
            legs = graph.stats.legs,
            stations = graph.station_count(),
            skipped_pairs = graph.stats.skipped_pairs,
            untimed_legs = graph.stats.untimed_legs,
            "leg graph built"
        );
        graph
    }

    /// Outgoing legs from a station, in deterministic build order.
    pub fn departures_from(&self, code: &StationCode) -> &[Leg] {
        self.departures
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Stations with at least one leg landing at `code`.
    pub fn arrivals_into(&self, code: &StationCode) -> Option<&HashSet<StationCode>> {
        self.arrivals.get(code)
    }

    /// The set of stations from which `target` is reachable via one or
    /// more legs, computed by reverse breadth-first traversal of the
    /// arrivals index. Contains `target` itself (reachable via zero legs).
    pub fn reachable_set(&self, target: StationCode) -> HashSet<StationCode> {
        let mut reachable = HashSet::from([target]);
        let mut frontier = vec![target];

        while let Some(station) = frontier.pop() {
            if let Some(origins) = self.arrivals.get(&station) {
                for origin in origins {
                    if reachable.insert(*origin) {
                        frontier.push(*origin);
                    }
                }
            }
        }

        reachable
    }

    /// Build counters.
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Distinct stations appearing as a leg endpoint.
    pub fn station_count(&self) -> usize {
        let mut codes: HashSet<&StationCode> = self.departures.keys().collect();
        codes.extend(self.arrivals.keys());
        codes.len()
    }

    /// Total number of legs.
    pub fn leg_count(&self) -> usize {
        self.stats.legs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::{StationInfo, Stop, Train};

    fn stop(code: &str, arrival: Option<&str>, departure: Option<&str>) -> Stop {
        let mut stop = Stop::new(code);
        stop.arrival_scheduled = arrival.map(String::from);
        stop.departure_scheduled = departure.map(String::from);
        stop.station = Some(StationInfo {
            code: code.into(),
            name: code.into(),
            city: code.into(),
            state: "VA".into(),
            address1: None,
            address2: None,
            zip: None,
            lat: 0.0,
            lon: 0.0,
        });
        stop
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

    fn routes(trains: Vec<Train>) -> Vec<Route> {
        vec![Route {
            route: "Test".into(),
            trains,
        }]
    }

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    fn sample() -> Vec<Route> {
        routes(vec![
            // WAS -> ALX -> RNK
            train(
                1,
                vec![
                    stop("WAS", None, Some("2024-03-15T10:00:00-05:00")),
                    stop(
                        "ALX",
                        Some("2024-03-15T10:45:00-05:00"),
                        Some("2024-03-15T10:50:00-05:00"),
                    ),
                    stop("RNK", Some("2024-03-15T13:30:00-05:00"), None),
                ],
            ),
            // ALX -> LYH
            train(
                2,
                vec![
                    stop("ALX", None, Some("2024-03-15T11:00:00-05:00")),
                    stop("LYH", Some("2024-03-15T12:40:00-05:00"), None),
                ],
            ),
        ])
    }

    #[test]
    fn adjacent_pairs_only() {
        let graph = LegGraph::build(&sample());

        // Three adjacent pairs in the data, no long-range WAS->RNK edge.
        assert_eq!(graph.leg_count(), 3);
        let from_was = graph.departures_from(&code("WAS"));
        assert_eq!(from_was.len(), 1);
        assert_eq!(from_was[0].to(), code("ALX"));
        assert_eq!(from_was[0].minutes(), 45);
    }

    #[test]
    fn departures_indexed_per_station() {
        let graph = LegGraph::build(&sample());

        let from_alx = graph.departures_from(&code("ALX"));
        assert_eq!(from_alx.len(), 2);
        // Build order follows input traversal order: train 1 before train 2.
        assert_eq!(from_alx[0].to(), code("RNK"));
        assert_eq!(from_alx[1].to(), code("LYH"));
    }

    #[test]
    fn arrivals_reverse_index() {
        let graph = LegGraph::build(&sample());

        let into_alx = graph.arrivals_into(&code("ALX")).unwrap();
        assert_eq!(into_alx.len(), 1);
        assert!(into_alx.contains(&code("WAS")));
        assert!(graph.arrivals_into(&code("WAS")).is_none());
    }

    #[test]
    fn unknown_station_has_no_departures() {
        let graph = LegGraph::build(&sample());
        assert!(graph.departures_from(&code("ZZZ")).is_empty());
    }

    #[test]
    fn unresolved_stop_skips_pair_not_build() {
        let mut unresolved = Stop::new("MYS");
        unresolved.station = None;

        let graph = LegGraph::build(&routes(vec![train(
            1,
            vec![
                stop("WAS", None, Some("2024-03-15T10:00:00-05:00")),
                unresolved,
                stop("RNK", Some("2024-03-15T13:30:00-05:00"), None),
            ],
        )]));

        // Both pairs touching the unresolved stop are skipped.
        assert_eq!(graph.leg_count(), 0);
        assert_eq!(graph.stats().skipped_pairs, 2);
    }

    #[test]
    fn unparsable_timestamps_keep_leg_with_sentinel() {
        let graph = LegGraph::build(&routes(vec![train(
            1,
            vec![
                stop("WAS", None, Some("not a timestamp")),
                stop("ALX", Some("also not"), None),
            ],
        )]));

        assert_eq!(graph.leg_count(), 1);
        assert_eq!(graph.stats().untimed_legs, 1);
        assert_eq!(graph.departures_from(&code("WAS"))[0].minutes(), 0);
    }

    #[test]
    fn reachability_by_reverse_traversal() {
        let graph = LegGraph::build(&sample());

        let to_rnk = graph.reachable_set(code("RNK"));
        assert!(to_rnk.contains(&code("RNK")));
        assert!(to_rnk.contains(&code("ALX")));
        assert!(to_rnk.contains(&code("WAS")));
        assert!(!to_rnk.contains(&code("LYH")));

        // WAS is an origin only: nothing reaches it.
        assert_eq!(graph.reachable_set(code("WAS")).len(), 1);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let input = sample();
        let a = LegGraph::build(&input);
        let b = LegGraph::build(&input);

        assert_eq!(a.stats(), b.stats());
        assert_eq!(a.station_count(), b.station_count());
        for station in ["WAS", "ALX", "RNK", "LYH"] {
            let code = code(station);
            assert_eq!(a.departures_from(&code), b.departures_from(&code));
            assert_eq!(a.arrivals_into(&code), b.arrivals_into(&code));
        }
    }

    #[test]
    fn single_stop_train_yields_nothing() {
        let graph = LegGraph::build(&routes(vec![train(1, vec![stop("WAS", None, None)])]));
        assert_eq!(graph.leg_count(), 0);
        assert_eq!(graph.stats().skipped_pairs, 0);
    }
}
