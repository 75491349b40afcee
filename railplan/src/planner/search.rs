//! Direct-connection and breadth-first route search.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::{Leg, PathResult, StationCode};
use crate::graph::LegGraph;

use super::config::SearchConfig;

/// Error from route search.
///
/// Note that "no route found" is *not* an error: an unreachable
/// destination is an expected answer, reported as an empty
/// [`PathResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The depth-first search was cancelled or hit its deadline.
    #[error("search cancelled before completion")]
    Cancelled,
}

/// Frontier item for the breadth-first search.
#[derive(Debug, Clone)]
struct Frontier {
    station: StationCode,
    legs: Vec<Leg>,
    minutes: i64,
    depth: usize,
}

/// Route search over an immutable leg graph.
///
/// Holds only borrows: all mutable search state (frontier, visited set,
/// accumulated path) is local to each call, so any number of finders may
/// run concurrently over the same graph.
pub struct PathFinder<'a> {
    graph: &'a LegGraph,
    config: &'a SearchConfig,
}

impl<'a> PathFinder<'a> {
    /// Create a finder over a built graph.
    pub fn new(graph: &'a LegGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    pub(super) fn graph(&self) -> &LegGraph {
        self.graph
    }

    pub(super) fn config(&self) -> &SearchConfig {
        self.config
    }

    /// Canonical search: the direct fast path, then the breadth-first
    /// fewest-transfers search.
    pub fn plan(&self, from: StationCode, to: StationCode) -> PathResult {
        let direct = self.direct(from, to);
        if !direct.is_empty() {
            return direct;
        }
        self.fewest_legs(from, to)
    }

    /// Direct-connection fast path.
    ///
    /// Scans the outgoing legs of `from` for one landing at `to` and
    /// returns the minimum-duration candidate as a single-leg path. This is
    /// the breadth-first search restricted to path length 1, so the two
    /// agree whenever only a one-leg path exists.
    pub fn direct(&self, from: StationCode, to: StationCode) -> PathResult {
        self.graph
            .departures_from(&from)
            .iter()
            .filter(|leg| leg.to() == to)
            .min_by_key(|leg| leg.minutes())
            .map(|leg| PathResult::new(vec![leg.clone()]))
            .unwrap_or_default()
    }

    /// Bounded breadth-first multi-transfer search.
    ///
    /// Explores level by level, so the first time `to` is dequeued the
    /// accumulated path has the fewest legs of any route within
    /// `max_legs`. Among equal-leg paths the first one discovered in
    /// edge-iteration order wins; total duration is *not* minimized.
    ///
    /// The visited key is `(station, train, path length)`, not the station
    /// alone: a station may legitimately be revisited via a different train
    /// or at a different depth, which is what makes transfer modeling
    /// correct while still blocking unbounded cycling on one train.
    pub fn fewest_legs(&self, from: StationCode, to: StationCode) -> PathResult {
        let mut queue = VecDeque::from([Frontier {
            station: from,
            legs: Vec::new(),
            minutes: 0,
            depth: 0,
        }]);
        let mut visited: HashSet<(StationCode, i64, usize)> = HashSet::new();
        let mut dequeued = 0usize;

        while let Some(state) = queue.pop_front() {
            dequeued += 1;

            if state.station == to {
                debug!(
                    %from,
                    %to,
                    legs = state.legs.len(),
                    minutes = state.minutes,
                    dequeued,
                    "breadth-first search found route"
                );
                return PathResult::new(state.legs);
            }

            if state.depth >= self.config.max_legs {
                continue;
            }

            for leg in self.graph.departures_from(&state.station) {
                let key = (leg.to(), leg.train_id(), state.depth + 1);
                if !visited.insert(key) {
                    continue;
                }

                let mut legs = state.legs.clone();
                legs.push(leg.clone());
                queue.push_back(Frontier {
                    station: leg.to(),
                    legs,
                    minutes: state.minutes + leg.minutes(),
                    depth: state.depth + 1,
                });
            }
        }

        trace!(%from, %to, dequeued, "breadth-first search exhausted");
        PathResult::empty()
    }
}
