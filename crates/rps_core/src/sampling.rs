//! Weighted random selection shared by probability-driven strategies.

use rand::{Rng, RngCore};

/// Maximum distance from 1.0 tolerated when validating a probability map.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Pick a key from `weights` using the weights as probabilities.
///
/// Draws a uniform value in `[0, 1)` and walks the cumulative sum in slice
/// order. Returns `None` when the draw lands beyond the last cumulative
/// value, which happens for distributions that sum to less than one or
/// through floating point residue.
pub fn probability_selector<T: Copy>(weights: &[(T, f64)], rng: &mut dyn RngCore) -> Option<T> {
    let draw: f64 = rng.gen_range(0.0..1.0);
    let mut cumulative = 0.0;
    for &(key, weight) in weights {
        cumulative += weight;
        if draw < cumulative {
            return Some(key);
        }
    }
    None
}

/// Whether `weights` sum to one within [`PROBABILITY_TOLERANCE`].
pub fn sums_to_one<T>(weights: &[(T, f64)]) -> bool {
    (weights.iter().map(|(_, w)| w).sum::<f64>() - 1.0).abs() <= PROBABILITY_TOLERANCE
}

#[cfg(test)]
#[path = "sampling_tests.rs"]
mod sampling_tests;
