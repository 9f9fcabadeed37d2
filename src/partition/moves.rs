//! Random construction and neighborhood moves over sign assignments.

use rand::Rng;

use super::types::{Instance, Sign, Solution};
use crate::local::LocalSearchProblem;
use crate::random::{coin, random_index, random_index_except};

/// Independent fair-coin sign per position.
pub fn random_solution<R: Rng>(len: usize, rng: &mut R) -> Solution {
    Solution::new(
        (0..len)
            .map(|_| if coin(rng) { Sign::Plus } else { Sign::Minus })
            .collect(),
    )
}

/// Returns a copy of `solution` with one or two signs flipped.
///
/// One uniformly chosen position is always flipped. With probability 1/2
/// a second, distinct position is flipped as well. A one-element solution
/// only ever gets the single flip.
///
/// # Panics
///
/// Panics if `solution` is empty.
pub fn neighbor<R: Rng>(solution: &Solution, rng: &mut R) -> Solution {
    let n = solution.len();
    let mut next = solution.clone();
    let i = random_index(rng, n);
    next.flip(i);

    if coin(rng) && n > 1 {
        let j = random_index_except(rng, n, i);
        next.flip(j);
    }

    next
}

impl LocalSearchProblem for Instance {
    type Solution = Solution;

    fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        random_solution(self.len(), rng)
    }

    fn cost(&self, solution: &Solution) -> u64 {
        self.residue(solution)
    }

    fn neighbor<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Solution {
        neighbor(solution, rng)
    }
}
