//! History windows, transition counts and the sampler shared by the chain strategies

use std::collections::{HashMap, VecDeque};

use rand::{Rng, RngCore};
use rps_core::{random_symbol, Error, Result, Symbol};

/// The last `capacity` symbols played by one side, oldest first.
///
/// Grows by one symbol per round until full, then slides: the oldest symbol
/// is dropped when a new one is pushed.
#[derive(Debug, Clone)]
pub struct HistoryWindow {
    capacity: usize,
    symbols: VecDeque<Symbol>,
}

impl HistoryWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            symbols: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn push(&mut self, symbol: Symbol) {
        if self.symbols.len() == self.capacity {
            self.symbols.pop_front();
        }
        self.symbols.push_back(symbol);
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.symbols.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }
}

/// Counts of the symbol that followed each history key.
///
/// Counts under a key are kept in the order the symbols were first seen,
/// which fixes the walk order of [`sample_counts`].
#[derive(Debug, Clone, Default)]
pub struct CountTable {
    counts: HashMap<Vec<Symbol>, Vec<(Symbol, u32)>>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `next` followed the history `key`.
    pub fn record(&mut self, key: Vec<Symbol>, next: Symbol) {
        let counts = self.counts.entry(key).or_default();
        match counts.iter_mut().find(|(symbol, _)| *symbol == next) {
            Some((_, count)) => *count += 1,
            None => counts.push((next, 1)),
        }
    }

    pub fn get(&self, key: &[Symbol]) -> Option<&[(Symbol, u32)]> {
        self.counts.get(key).map(Vec::as_slice)
    }

    /// Number of distinct history keys seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

/// Sample a symbol from `counts`, weighted by count.
///
/// Draws a uniform integer in `[0, total)` and returns the first entry whose
/// cumulative count exceeds it. Failing to select anything means the counts
/// are corrupt.
pub fn sample_counts(name: &str, counts: &[(Symbol, u32)], rng: &mut dyn RngCore) -> Result<Symbol> {
    let total: u32 = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Err(Error::SamplingFailed(name.to_string()));
    }

    let draw = rng.gen_range(0..total);
    let mut cumulative = 0;
    for &(symbol, count) in counts {
        cumulative += count;
        if draw < cumulative {
            return Ok(symbol);
        }
    }

    Err(Error::SamplingFailed(name.to_string()))
}

/// Predict the opponent's next symbol from the counts recorded under `key` and
/// return the symbol that beats the prediction. Unseen keys play randomly.
pub fn counter_prediction(
    name: &str,
    table: &CountTable,
    key: &[Symbol],
    rng: &mut dyn RngCore,
) -> Result<Symbol> {
    match table.get(key) {
        Some(counts) => sample_counts(name, counts, rng).map(Symbol::beats),
        None => Ok(random_symbol(rng)),
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod chain_tests;
