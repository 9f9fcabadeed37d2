//! Algorithm identifiers.

use std::fmt;

use crate::error::PartitionError;

/// Every algorithm identifier the solver recognises.
///
/// The prepartitioned variants have reserved identifiers but no
/// implementation; [`Solver::solve`](super::Solver::solve) rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    KarmarkarKarp,
    RepeatedRandom,
    HillClimbing,
    SimulatedAnnealing,
    PrepartitionedRepeatedRandom,
    PrepartitionedHillClimbing,
    PrepartitionedSimulatedAnnealing,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::KarmarkarKarp,
        Algorithm::RepeatedRandom,
        Algorithm::HillClimbing,
        Algorithm::SimulatedAnnealing,
        Algorithm::PrepartitionedRepeatedRandom,
        Algorithm::PrepartitionedHillClimbing,
        Algorithm::PrepartitionedSimulatedAnnealing,
    ];

    /// Numeric identifier used on the command line.
    pub fn id(self) -> i64 {
        match self {
            Algorithm::KarmarkarKarp => 0,
            Algorithm::RepeatedRandom => 1,
            Algorithm::HillClimbing => 2,
            Algorithm::SimulatedAnnealing => 3,
            Algorithm::PrepartitionedRepeatedRandom => 11,
            Algorithm::PrepartitionedHillClimbing => 12,
            Algorithm::PrepartitionedSimulatedAnnealing => 13,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::KarmarkarKarp => "karmarkar-karp",
            Algorithm::RepeatedRandom => "repeated-random",
            Algorithm::HillClimbing => "hill-climbing",
            Algorithm::SimulatedAnnealing => "simulated-annealing",
            Algorithm::PrepartitionedRepeatedRandom => "prepartitioned-repeated-random",
            Algorithm::PrepartitionedHillClimbing => "prepartitioned-hill-climbing",
            Algorithm::PrepartitionedSimulatedAnnealing => "prepartitioned-simulated-annealing",
        }
    }

    pub fn is_implemented(self) -> bool {
        matches!(
            self,
            Algorithm::KarmarkarKarp
                | Algorithm::RepeatedRandom
                | Algorithm::HillClimbing
                | Algorithm::SimulatedAnnealing
        )
    }
}

impl TryFrom<i64> for Algorithm {
    type Error = PartitionError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or(PartitionError::UnknownAlgorithm(id))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}
