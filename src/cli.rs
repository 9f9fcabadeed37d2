use std::path::PathBuf;

use clap::Parser;

use crate::local::MAX_ITERATIONS;
use crate::partition::INTEGERS;

/// Number-partition heuristics (KK, RR, HC, SA).
#[derive(Parser, Debug)]
#[command(name = "partition")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reserved for surrounding tooling; ignored.
    #[arg(allow_hyphen_values = true)]
    pub flag: String,

    /// Algorithm: 0 = Karmarkar-Karp, 1 = repeated random, 2 = hill
    /// climbing, 3 = simulated annealing (11-13 are reserved).
    #[arg(allow_negative_numbers = true)]
    pub algorithm: i64,

    /// File of whitespace-separated integers.
    pub input: PathBuf,

    /// Seed for the random source. Random when omitted.
    #[arg(long, env = "PARTITION_SEED")]
    pub seed: Option<u64>,

    /// Iteration budget for the local-search algorithms.
    #[arg(long, env = "PARTITION_MAX_ITERATIONS", default_value_t = MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Number of integers to read from the input file.
    #[arg(long, default_value_t = INTEGERS)]
    pub size: usize,
}
