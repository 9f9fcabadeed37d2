//! Dispatch from an [`Algorithm`] to its runner.

use rand::Rng;
use tracing::info;

use super::types::Algorithm;
use crate::error::{PartitionError, Result};
use crate::hc::HcRunner;
use crate::kk::KkRunner;
use crate::local::SearchConfig;
use crate::partition::Instance;
use crate::rr::RrRunner;
use crate::sa::{SaConfig, SaRunner};

/// Runs any implemented [`Algorithm`] on an [`Instance`].
///
/// Configurations are validated once at construction; the random source
/// is supplied per call so the caller controls seeding.
///
/// # Examples
///
/// ```
/// use u_partition::partition::Instance;
/// use u_partition::random::create_rng;
/// use u_partition::registry::{Algorithm, Solver};
///
/// let solver = Solver::default();
/// let instance = Instance::new(vec![10, 8, 7, 6, 5]).unwrap();
/// let mut rng = create_rng(42);
///
/// let residue = solver.solve(Algorithm::KarmarkarKarp, &instance, &mut rng).unwrap();
/// assert_eq!(residue, 2);
/// assert!(solver.solve(Algorithm::PrepartitionedHillClimbing, &instance, &mut rng).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    search: SearchConfig,
    annealing: SaConfig,
}

impl Solver {
    /// Creates a solver.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidConfig`] if `annealing` is invalid.
    pub fn new(search: SearchConfig, annealing: SaConfig) -> Result<Self> {
        annealing.validate()?;
        Ok(Self { search, annealing })
    }

    /// Solver with the same iteration budget for every local search.
    pub fn with_max_iterations(max_iterations: usize) -> Self {
        Self {
            search: SearchConfig::default().with_max_iterations(max_iterations),
            annealing: SaConfig::default().with_max_iterations(max_iterations),
        }
    }

    /// Runs `algorithm` on `instance` and returns the residue.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::Unimplemented`] for the prepartitioned
    /// variants.
    pub fn solve<R: Rng>(
        &self,
        algorithm: Algorithm,
        instance: &Instance,
        rng: &mut R,
    ) -> Result<u64> {
        info!(%algorithm, size = instance.len(), "solving");
        let (search, annealing) = (&self.search, &self.annealing);
        let residue = match algorithm {
            Algorithm::KarmarkarKarp => KkRunner::run(instance),
            Algorithm::RepeatedRandom => RrRunner::run_with_rng(instance, search, rng).best_cost,
            Algorithm::HillClimbing => HcRunner::run_with_rng(instance, search, rng).best_cost,
            Algorithm::SimulatedAnnealing => {
                SaRunner::run_with_rng(instance, annealing, rng).best_cost
            }
            Algorithm::PrepartitionedRepeatedRandom
            | Algorithm::PrepartitionedHillClimbing
            | Algorithm::PrepartitionedSimulatedAnnealing => {
                return Err(PartitionError::Unimplemented(algorithm));
            }
        };
        Ok(residue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn instance() -> Instance {
        Instance::new((1..=100).map(|i| (i * 31) % 97 + 1).collect()).unwrap()
    }

    #[test]
    fn test_solver_runs_every_implemented_algorithm() {
        let solver = Solver::with_max_iterations(500);
        let instance = instance();
        for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_implemented()) {
            let mut rng = create_rng(42);
            let residue = solver.solve(algorithm, &instance, &mut rng).unwrap();
            assert!(residue <= instance.total_magnitude());
        }
    }

    #[test]
    fn test_solver_rejects_prepartitioned() {
        let solver = Solver::default();
        let instance = instance();
        let mut rng = create_rng(1);
        for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.is_implemented()) {
            assert!(matches!(
                solver.solve(algorithm, &instance, &mut rng),
                Err(PartitionError::Unimplemented(a)) if a == algorithm
            ));
        }
    }

    #[test]
    fn test_solver_kk_concrete() {
        let solver = Solver::default();
        let mut rng = create_rng(0);
        let ones = Instance::new(vec![1, 1, 1, 1]).unwrap();
        let single = Instance::new(vec![1, 0, 0, 0]).unwrap();
        assert_eq!(solver.solve(Algorithm::KarmarkarKarp, &ones, &mut rng).unwrap(), 0);
        assert_eq!(solver.solve(Algorithm::KarmarkarKarp, &single, &mut rng).unwrap(), 1);
    }

    #[test]
    fn test_solver_same_seed_same_residue() {
        let solver = Solver::with_max_iterations(1000);
        let instance = instance();
        let a = solver
            .solve(Algorithm::SimulatedAnnealing, &instance, &mut create_rng(8))
            .unwrap();
        let b = solver
            .solve(Algorithm::SimulatedAnnealing, &instance, &mut create_rng(8))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_solver_new_validates_annealing() {
        let bad = SaConfig::default().with_initial_temperature(0.0);
        assert!(matches!(
            Solver::new(SearchConfig::default(), bad),
            Err(PartitionError::InvalidConfig(_))
        ));
    }
}
