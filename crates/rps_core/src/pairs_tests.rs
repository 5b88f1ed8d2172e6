use super::*;
use std::collections::HashSet;

#[test]
fn test_four_elements_give_six_pairs() {
    let items = ["a", "b", "c", "d"];
    let pairs: Vec<_> = all_pairs(&items).collect();
    assert_eq!(pairs.len(), 6);

    let unordered: HashSet<_> = pairs
        .iter()
        .map(|(x, y)| if x < y { (**x, **y) } else { (**y, **x) })
        .collect();
    assert_eq!(unordered.len(), 6);
    assert!(pairs.iter().all(|(x, y)| x != y));
}

#[test]
fn test_pair_counts() {
    for n in 0..8usize {
        let items: Vec<usize> = (0..n).collect();
        let expected = n * n.saturating_sub(1) / 2;
        assert_eq!(all_pairs(&items).count(), expected);
        assert_eq!(pair_indices(n).count(), expected);
    }
}

#[test]
fn test_pair_order() {
    let pairs: Vec<_> = pair_indices(3).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn test_pair_mut() {
    let mut items = vec![1, 2, 3];
    {
        let (a, b) = pair_mut(&mut items, 2, 0);
        std::mem::swap(a, b);
    }
    assert_eq!(items, vec![3, 2, 1]);
}
