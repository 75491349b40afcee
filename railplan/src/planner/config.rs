//! Search configuration.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of train segments considered in one journey.
    /// Branches reaching this bound are abandoned without expansion.
    pub max_legs: usize,
}

impl SearchConfig {
    /// Create a configuration with the given leg bound.
    pub fn new(max_legs: usize) -> Self {
        Self { max_legs }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_legs: 8 }
    }
}
