//! Algorithm registry.
//!
//! A closed [`Algorithm`] enumeration replaces numeric dispatch: an
//! identifier either maps to a variant or is rejected by
//! [`TryFrom<i64>`], and the match in [`Solver::solve`] is exhaustive, so
//! an unimplemented variant can only ever produce an error.

mod engine;
mod types;

pub use engine::Solver;
pub use types::Algorithm;
