//! Result of a local-search run.

/// Interval (in iterations) at which the best cost is sampled into
/// [`SearchResult::cost_history`].
pub(crate) const HISTORY_INTERVAL: usize = 100;

/// Outcome of a repeated random, hill climbing or annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: u64,

    /// Cost of the first solution generated in the run.
    pub initial_cost: u64,

    /// Total number of candidate evaluations.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals.
    pub cost_history: Vec<u64>,
}

/// Samples the best cost every `interval` iterations and once at the end.
#[derive(Debug)]
pub(crate) struct History {
    interval: usize,
    samples: Vec<u64>,
}

impl History {
    pub(crate) fn new(interval: usize, initial: u64) -> Self {
        Self {
            interval: interval.max(1),
            samples: vec![initial],
        }
    }

    pub(crate) fn record(&mut self, iteration: usize, best_cost: u64) {
        if iteration.is_multiple_of(self.interval) {
            self.samples.push(best_cost);
        }
    }

    pub(crate) fn finish(mut self, best_cost: u64) -> Vec<u64> {
        if self.samples.last() != Some(&best_cost) {
            self.samples.push(best_cost);
        }
        self.samples
    }
}
