//! The number-partition problem.
//!
//! An [`Instance`] is a fixed multiset of integers; a [`Solution`] assigns
//! each of them a sign. The objective is the residue |Σ A[i]·S[i]|, which
//! is zero exactly when the integers split into two subsets of equal sum.
//!
//! `Instance` implements [`LocalSearchProblem`](crate::local::LocalSearchProblem)
//! with fair-coin construction and one-or-two-flip neighbors, so it can be
//! handed to any of the local-search runners directly.

mod io;
mod moves;
mod types;

pub use io::read_instance;
pub use moves::{neighbor, random_solution};
pub use types::{Instance, Sign, Solution, INTEGERS};
