//! Round-robin pairing helpers.

use itertools::Itertools;

/// Every unordered pair of distinct positions in `seq`, each exactly once.
///
/// For an input of length `n` this yields `n * (n - 1) / 2` pairs, ordered
/// lexicographically by position.
pub fn all_pairs<T>(seq: &[T]) -> impl Iterator<Item = (&T, &T)> {
    seq.iter().tuple_combinations()
}

/// Index form of [`all_pairs`], for callers that need mutable access to both members.
pub fn pair_indices(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).tuple_combinations()
}

/// Mutable references to two distinct elements of `seq`.
///
/// # Panics
/// Panics if `i == j` or either index is out of bounds.
pub fn pair_mut<T>(seq: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert!(i != j, "pair_mut requires distinct indices");
    if i < j {
        let (left, right) = seq.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = seq.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

#[cfg(test)]
#[path = "pairs_tests.rs"]
mod pairs_tests;
