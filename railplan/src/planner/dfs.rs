//! Best-effort depth-first search with reachability pruning.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{Leg, PathResult, StationCode};

use super::cancel::CancelToken;
use super::search::{PathFinder, SearchError};

impl PathFinder<'_> {
    /// Depth-first search, duration-greedy, stopping at the first complete
    /// path.
    ///
    /// Before descending, the set of stations from which `to` is reachable
    /// at all is computed by reverse traversal of the arrivals index; any
    /// branch leaving that set is pruned, as is any branch deeper than
    /// `max_legs` or already costlier than the best known completion. At
    /// each station outgoing legs are tried cheapest-first. That ordering
    /// is a heuristic, not a guarantee: the first completed path is
    /// returned and may be slower than what
    /// [`fewest_legs`](PathFinder::fewest_legs) finds. Callers wanting the
    /// canonical answer should use `fewest_legs`.
    ///
    /// The visited set is scoped to the current search stack and unwound on
    /// backtrack, so it blocks cycles within one candidate path without
    /// forbidding a station to other branches.
    ///
    /// # Errors
    ///
    /// [`SearchError::Cancelled`] when `cancel` fires; the token is checked
    /// on every node visit.
    pub fn greedy_depth_first(
        &self,
        from: StationCode,
        to: StationCode,
        cancel: &CancelToken,
    ) -> Result<PathResult, SearchError> {
        let reachable = self.graph().reachable_set(to);
        if !reachable.contains(&from) {
            trace!(%from, %to, "origin cannot reach destination, skipping descent");
            return Ok(PathResult::empty());
        }

        let mut dfs = DepthFirst {
            finder: self,
            to,
            reachable,
            visited: HashSet::from([from]),
            path: Vec::new(),
            best_minutes: None,
            cancel,
        };

        match dfs.descend(from, 0)? {
            Some(path) => {
                debug!(
                    %from,
                    %to,
                    legs = path.leg_count(),
                    minutes = path.total_minutes(),
                    "depth-first search found route"
                );
                Ok(path)
            }
            None => Ok(PathResult::empty()),
        }
    }
}

/// Mutable state for one depth-first descent. Owned by a single call;
/// nothing is shared across concurrent searches.
struct DepthFirst<'a, 'g> {
    finder: &'a PathFinder<'g>,
    to: StationCode,
    reachable: HashSet<StationCode>,
    /// Stations on the current stack; unwound on backtrack.
    visited: HashSet<StationCode>,
    path: Vec<Leg>,
    best_minutes: Option<i64>,
    cancel: &'a CancelToken,
}

impl DepthFirst<'_, '_> {
    fn descend(
        &mut self,
        station: StationCode,
        minutes: i64,
    ) -> Result<Option<PathResult>, SearchError> {
        if self.cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        if station == self.to {
            let found = PathResult::new(self.path.clone());
            self.best_minutes = Some(found.total_minutes());
            return Ok(Some(found));
        }

        if self.path.len() >= self.finder.config().max_legs {
            return Ok(None);
        }

        // Greedy: try the cheapest outgoing legs first.
        let mut outgoing: Vec<&Leg> = self
            .finder
            .graph()
            .departures_from(&station)
            .iter()
            .collect();
        outgoing.sort_by_key(|leg| leg.minutes());

        for leg in outgoing {
            let next = leg.to();
            if !self.reachable.contains(&next) || self.visited.contains(&next) {
                continue;
            }
            let accumulated = minutes + leg.minutes();
            if self.best_minutes.is_some_and(|best| accumulated > best) {
                continue;
            }

            self.visited.insert(next);
            self.path.push(leg.clone());

            // Stop at the first completed path: best-effort by contract.
            if let Some(found) = self.descend(next, accumulated)? {
                return Ok(Some(found));
            }

            self.path.pop();
            self.visited.remove(&next);
        }

        Ok(None)
    }
}
