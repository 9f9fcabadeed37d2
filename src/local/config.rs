//! Shared configuration for the sampling and climbing runners.

/// Default iteration budget for every local-search algorithm.
pub const MAX_ITERATIONS: usize = 25_000;

/// Configuration for [`RrRunner`](crate::rr::RrRunner) and
/// [`HcRunner`](crate::hc::HcRunner).
///
/// # Examples
///
/// ```
/// use u_partition::local::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_iterations(1000)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of candidate evaluations after the initial solution.
    pub max_iterations: usize,

    /// Random seed (None for a fresh random seed).
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
