//! SA execution loop.

use rand::Rng;
use tracing::{debug, trace};

use super::config::SaConfig;
use crate::local::{History, LocalSearchProblem, SearchResult, HISTORY_INTERVAL};
use crate::random::create_rng;

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed` (or a fresh seed).
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run<P: LocalSearchProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> SearchResult<P::Solution> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA with a caller-supplied generator. `config.seed` is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run_with_rng<P: LocalSearchProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> SearchResult<P::Solution> {
        config.validate().expect("invalid SaConfig");

        let mut current = problem.random_solution(rng);
        let mut current_cost = problem.cost(&current);
        let initial_cost = current_cost;

        // The incumbent starts out equal to the walker and only gets its
        // own copy once the walker beats it.
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut history = History::new(
            HISTORY_INTERVAL.max(config.iterations_per_temperature),
            best_cost,
        );

        for iteration in 0..config.max_iterations {
            let temperature = config.temperature(iteration);
            let neighbor = problem.neighbor(&current, rng);
            let neighbor_cost = problem.cost(&neighbor);

            // Metropolis acceptance criterion. The draw and the exponential
            // are skipped entirely for downhill moves.
            let accept = if neighbor_cost < current_cost {
                improving_moves += 1;
                true
            } else if temperature > 0.0 {
                let delta = (neighbor_cost - current_cost) as f64;
                let probability = (-delta / temperature).exp();
                rng.random::<f64>() < probability
            } else {
                false
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
            }

            if current_cost < best_cost {
                trace!(
                    iteration,
                    from = best_cost,
                    to = current_cost,
                    temperature,
                    "new incumbent"
                );
                best.clone_from(&current);
                best_cost = current_cost;
            }

            history.record(iteration + 1, best_cost);
        }

        debug!(
            algorithm = "simulated-annealing",
            iterations = config.max_iterations,
            final_temperature = config.temperature(config.max_iterations),
            accepted_moves,
            improving_moves,
            initial_cost,
            best_cost,
            "run complete"
        );

        SearchResult {
            best,
            best_cost,
            initial_cost,
            iterations: config.max_iterations,
            accepted_moves,
            improving_moves,
            cost_history: history.finish(best_cost),
        }
    }
}
