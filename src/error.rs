//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::Algorithm;

#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("error opening {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could only read {read} integers from {} (expected {expected})", .path.display())]
    ShortInput {
        path: PathBuf,
        read: usize,
        expected: usize,
    },

    #[error("instance must contain at least one integer")]
    EmptyInstance,

    #[error("unknown algorithm identifier: {0}")]
    UnknownAlgorithm(i64),

    #[error("algorithm {0} is not implemented")]
    Unimplemented(Algorithm),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("heap at capacity ({capacity})")]
    HeapFull { capacity: usize },
}

pub type Result<T> = std::result::Result<T, PartitionError>;
