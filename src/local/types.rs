//! Core trait for the local-search algorithms.

use rand::Rng;

/// Defines a problem that repeated random sampling, hill climbing and
/// simulated annealing can search.
///
/// The implementor supplies random construction, neighbor generation and
/// cost evaluation; the runners handle acceptance, incumbent tracking and
/// iteration budgets.
///
/// # Minimization
///
/// All runners minimize [`cost`](LocalSearchProblem::cost).
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_partition::local::LocalSearchProblem;
///
/// struct Bits(usize);
///
/// impl LocalSearchProblem for Bits {
///     type Solution = Vec<bool>;
///
///     fn random_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
///         (0..self.0).map(|_| rng.random_bool(0.5)).collect()
///     }
///
///     fn cost(&self, bits: &Vec<bool>) -> u64 {
///         bits.iter().filter(|&&b| b).count() as u64
///     }
///
///     fn neighbor<R: Rng>(&self, bits: &Vec<bool>, rng: &mut R) -> Vec<bool> {
///         let mut new = bits.clone();
///         let i = rng.random_range(0..new.len());
///         new[i] = !new[i];
///         new
///     }
/// }
/// ```
pub trait LocalSearchProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Creates an independent random solution.
    fn random_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> u64;

    /// Generates a neighbor of `solution`, leaving `solution` untouched.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
