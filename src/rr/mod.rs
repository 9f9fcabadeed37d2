//! Repeated Random (RR).
//!
//! Draws independent random solutions and keeps the best one seen. No
//! neighborhood is ever examined, so every draw is a fresh sample of the
//! whole search space.

mod runner;

pub use runner::RrRunner;
