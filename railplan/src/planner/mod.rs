//! Route search over the leg graph.
//!
//! Three strategies, all read-only over an immutable
//! [`LegGraph`](crate::graph::LegGraph):
//!
//! - a direct-connection fast path ([`PathFinder::direct`]),
//! - the canonical bounded breadth-first fewest-transfers search
//!   ([`PathFinder::fewest_legs`]),
//! - an optional best-effort depth-first search with reachability pruning
//!   ([`PathFinder::greedy_depth_first`]).
//!
//! The breadth-first search guarantees the fewest legs within the
//! configured bound; the depth-first search is a duration-greedy heuristic
//! that stops at its first complete path. The two may disagree, and that
//! disagreement is an accepted limitation of the heuristic.

mod cancel;
mod config;
mod dfs;
mod search;

pub use cancel::CancelToken;
pub use config::SearchConfig;
pub use search::{PathFinder, SearchError};
