use super::*;
use crate::Symbol;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_degenerate_distribution_is_constant() {
    let mut rng = StdRng::seed_from_u64(1);
    let weights = [(Symbol::Scissors, 1.0)];
    for _ in 0..50 {
        assert_eq!(probability_selector(&weights, &mut rng), Some(Symbol::Scissors));
    }
}

#[test]
fn test_zero_weights_never_selected() {
    let mut rng = StdRng::seed_from_u64(2);
    let weights = [(Symbol::Rock, 0.0), (Symbol::Paper, 1.0), (Symbol::Scissors, 0.0)];
    for _ in 0..50 {
        assert_eq!(probability_selector(&weights, &mut rng), Some(Symbol::Paper));
    }
}

#[test]
fn test_empty_distribution_selects_nothing() {
    let mut rng = StdRng::seed_from_u64(3);
    let weights: [(Symbol, f64); 0] = [];
    assert_eq!(probability_selector(&weights, &mut rng), None);
}

#[test]
fn test_residual_can_select_nothing() {
    let mut rng = StdRng::seed_from_u64(4);
    let weights = [(Symbol::Rock, 0.1)];
    let misses = (0..200)
        .filter(|_| probability_selector(&weights, &mut rng).is_none())
        .count();
    assert!(misses > 0);
}

#[test]
fn test_sums_to_one_tolerance() {
    assert!(sums_to_one(&[(Symbol::Rock, 0.5), (Symbol::Paper, 0.5)]));
    assert!(sums_to_one(&[(Symbol::Rock, 1.0 / 3.0), (Symbol::Paper, 1.0 / 3.0), (Symbol::Scissors, 1.0 / 3.0)]));
    assert!(!sums_to_one(&[(Symbol::Rock, 0.97)]));
}
