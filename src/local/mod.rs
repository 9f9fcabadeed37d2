//! Shared pieces of the local-search algorithms.
//!
//! [`LocalSearchProblem`] is the contract between the generic runners
//! ([`rr`](crate::rr), [`hc`](crate::hc), [`sa`](crate::sa)) and a
//! concrete problem such as [`Instance`](crate::partition::Instance).

mod config;
mod result;
mod types;

pub use config::{SearchConfig, MAX_ITERATIONS};
pub(crate) use result::{History, HISTORY_INTERVAL};
pub use result::SearchResult;
pub use types::LocalSearchProblem;
