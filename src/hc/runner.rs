//! Hill climbing loop.

use rand::Rng;
use tracing::{debug, trace};

use crate::local::{History, LocalSearchProblem, SearchConfig, SearchResult, HISTORY_INTERVAL};
use crate::random::create_rng;

/// Executes strictly greedy hill climbing.
pub struct HcRunner;

impl HcRunner {
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
        let mut current = problem.random_solution(rng);
        let mut current_cost = problem.cost(&current);
        let initial_cost = current_cost;

        let mut improving_moves = 0usize;
        let mut history = History::new(HISTORY_INTERVAL, current_cost);

        for iteration in 1..=config.max_iterations {
            let neighbor = problem.neighbor(&current, rng);
            let neighbor_cost = problem.cost(&neighbor);

            // Ties are rejected: only strict descent moves the climber.
            if neighbor_cost < current_cost {
                trace!(iteration, from = current_cost, to = neighbor_cost, "improved");
                current = neighbor;
                current_cost = neighbor_cost;
                improving_moves += 1;
            }

            history.record(iteration, current_cost);
        }

        debug!(
            algorithm = "hill-climbing",
            iterations = config.max_iterations,
            initial_cost,
            best_cost = current_cost,
            "run complete"
        );

        SearchResult {
            best: current,
            best_cost: current_cost,
            initial_cost,
            iterations: config.max_iterations,
            accepted_moves: improving_moves,
            improving_moves,
            cost_history: history.finish(current_cost),
        }
    }
}
