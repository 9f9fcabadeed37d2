//! Heuristics for the number-partition problem.
//!
//! Given a multiset of integers A, find signs S[i] ∈ {+1, −1} that
//! minimize the residue |Σ A[i]·S[i]|. Provided algorithms:
//!
//! - **Karmarkar-Karp (KK)**: deterministic differencing over a
//!   fixed-capacity max-heap.
//! - **Repeated Random (RR)**: independent random sampling, keep the best.
//! - **Hill Climbing (HC)**: strictly greedy descent over one- and
//!   two-flip neighbors.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with a blockwise
//!   geometric cooling schedule and a separately tracked incumbent.
//!
//! # Architecture
//!
//! The local-search runners are generic over
//! [`LocalSearchProblem`](local::LocalSearchProblem);
//! [`Instance`](partition::Instance) is the number-partition
//! implementation. Randomness is never global: every runner takes an
//! explicit generator or builds one from a configured seed.
//! [`registry`] maps command-line identifiers onto the runners.

pub mod cli;
pub mod error;
pub mod hc;
pub mod kk;
pub mod local;
pub mod partition;
pub mod random;
pub mod registry;
pub mod rr;
pub mod sa;

pub use error::{PartitionError, Result};
