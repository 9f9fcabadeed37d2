//! Input set, sign assignments, and the residue objective.

use crate::error::{PartitionError, Result};

/// Number of integers in a standard problem instance.
pub const INTEGERS: usize = 100;

/// A single sign in a [`Solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Returns the opposite sign.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    /// `+1` or `-1`.
    #[inline]
    pub fn value(self) -> i64 {
        match self {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }
}

/// A ±1 assignment, index-aligned with an [`Instance`].
///
/// Solutions are plain owned values: copying one never aliases the
/// other, so mutating a neighbor cannot leak into the solution it was
/// derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    signs: Vec<Sign>,
}

impl Solution {
    pub fn new(signs: Vec<Sign>) -> Self {
        Self { signs }
    }

    /// All-`Plus` assignment of length `len`.
    pub fn all_plus(len: usize) -> Self {
        Self {
            signs: vec![Sign::Plus; len],
        }
    }

    pub fn len(&self) -> usize {
        self.signs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }

    pub fn signs(&self) -> &[Sign] {
        &self.signs
    }

    /// Flips the sign at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.signs[index] = self.signs[index].flipped();
    }

    /// Number of positions where `self` and `other` differ.
    pub fn hamming_distance(&self, other: &Solution) -> usize {
        self.signs
            .iter()
            .zip(&other.signs)
            .filter(|(a, b)| a != b)
            .count()
    }
}

/// The input multiset A, in file order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    values: Vec<i64>,
}

impl Instance {
    /// Builds an instance.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::EmptyInstance`] if `values` is empty.
    pub fn new(values: Vec<i64>) -> Result<Self> {
        if values.is_empty() {
            return Err(PartitionError::EmptyInstance);
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Σ|A[i]|, the upper bound of any residue.
    pub fn total_magnitude(&self) -> u64 {
        self.values
            .iter()
            .map(|v| v.unsigned_abs())
            .fold(0u64, u64::saturating_add)
    }

    /// Residue of `solution`: |Σ A[i]·S[i]|.
    ///
    /// Saturates at `u64::MAX`.
    pub fn residue(&self, solution: &Solution) -> u64 {
        debug_assert_eq!(
            self.values.len(),
            solution.len(),
            "solution length must match instance"
        );
        let sum: i128 = self
            .values
            .iter()
            .zip(solution.signs())
            .map(|(&a, &s)| a as i128 * s.value() as i128)
            .sum();
        u64::try_from(sum.unsigned_abs()).unwrap_or(u64::MAX)
    }
}
