//! Karmarkar-Karp (KK) differencing.
//!
//! A deterministic heuristic: keep all values in a max-heap and repeatedly
//! replace the two largest with their absolute difference. The last value
//! left is the residue of an implied partition.
//!
//! # References
//!
//! - Karmarkar & Karp (1982), "The Differencing Method of Set Partitioning"

mod heap;
mod runner;

pub use heap::MaxHeap;
pub use runner::KkRunner;
