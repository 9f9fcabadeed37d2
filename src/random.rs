//! Random source construction and sampling helpers.
//!
//! Every algorithm receives its generator explicitly, so a run is fully
//! reproducible from its seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fair coin.
#[inline]
pub fn coin<R: Rng>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}

/// Uniform index in `[0, n)`.
///
/// Scaling a `[0, 1]` float by `n` and truncating would put extra mass
/// on (or past) the top index; an integer range draw has no such edge.
///
/// # Panics
///
/// Panics if `n == 0`.
#[inline]
pub fn random_index<R: Rng>(rng: &mut R, n: usize) -> usize {
    rng.random_range(0..n)
}

/// Uniform index in `[0, n)` different from `exclude`.
///
/// Draws from the `n - 1` remaining slots and shifts past `exclude`, so
/// no rejection loop is needed.
///
/// # Panics
///
/// Panics if `n < 2`.
#[inline]
pub fn random_index_except<R: Rng>(rng: &mut R, n: usize, exclude: usize) -> usize {
    let j = rng.random_range(0..n - 1);
    if j >= exclude {
        j + 1
    } else {
        j
    }
}
