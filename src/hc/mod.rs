//! Hill Climbing (HC).
//!
//! Starts from a random solution and moves to a random neighbor only when
//! it is strictly better. There is no escape from local optima; see
//! [`sa`](crate::sa) for a variant that has one.

mod runner;

pub use runner::HcRunner;
