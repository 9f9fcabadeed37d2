//! Repeated random sampling loop.

use rand::Rng;
use tracing::{debug, trace};

use crate::local::{History, LocalSearchProblem, SearchConfig, SearchResult, HISTORY_INTERVAL};
use crate::random::create_rng;

/// Executes the repeated random algorithm.
pub struct RrRunner;

impl RrRunner {
    /// Runs with a generator seeded from `config.seed` (or a fresh seed).
    pub fn run<P: LocalSearchProblem>(
        problem: &P,
        config: &SearchConfig,
    ) -> SearchResult<P::Solution> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs with a caller-supplied generator. `config.seed` is ignored.
    pub fn run_with_rng<P: LocalSearchProblem, R: Rng>(
        problem: &P,
        config: &SearchConfig,
        rng: &mut R,
    ) -> SearchResult<P::Solution> {
        let mut best = problem.random_solution(rng);
        let mut best_cost = problem.cost(&best);
        let initial_cost = best_cost;

        let mut improving_moves = 0usize;
        let mut history = History::new(HISTORY_INTERVAL, best_cost);

        for iteration in 1..=config.max_iterations {
            let candidate = problem.random_solution(rng);
            let candidate_cost = problem.cost(&candidate);

            if candidate_cost < best_cost {
                trace!(iteration, from = best_cost, to = candidate_cost, "improved");
                best = candidate;
                best_cost = candidate_cost;
                improving_moves += 1;
            }

            history.record(iteration, best_cost);
        }

        debug!(
            algorithm = "repeated-random",
            iterations = config.max_iterations,
            initial_cost,
            best_cost,
            "run complete"
        );

        SearchResult {
            best,
            best_cost,
            initial_cost,
            iterations: config.max_iterations,
            accepted_moves: improving_moves,
            improving_moves,
            cost_history: history.finish(best_cost),
        }
    }
}
