use rand::RngCore;
use rps_core::{probability_selector, random_symbol, sums_to_one, Error, Result, Strategy, Symbol};

/// A strategy that samples every move from a fixed distribution over symbols.
///
/// The uniform distribution gives a random player and a single symbol with
/// weight 1.0 gives a constant player.
#[derive(Debug, Clone)]
pub struct ProbabilityStrategy {
    name: String,
    /// Weight per symbol, in the order they were supplied
    weights: Vec<(Symbol, f64)>,
}

impl ProbabilityStrategy {
    /// Creates a strategy from `(symbol, probability)` pairs.
    ///
    /// Repeated symbols have their weights added together. Fails when any
    /// weight is negative or the weights do not sum to one.
    pub fn new(
        name: impl Into<String>,
        weights: impl IntoIterator<Item = (Symbol, f64)>,
    ) -> Result<Self> {
        let name = name.into();
        let mut merged: Vec<(Symbol, f64)> = Vec::with_capacity(3);
        for (symbol, weight) in weights {
            if weight < 0.0 {
                return Err(Error::NegativeProbability { name, symbol });
            }
            match merged.iter_mut().find(|(s, _)| *s == symbol) {
                Some((_, w)) => *w += weight,
                None => merged.push((symbol, weight)),
            }
        }

        if !sums_to_one(&merged) {
            let sum: f64 = merged.iter().map(|(_, w)| w).sum();
            return Err(Error::InvalidProbabilityMap { name, sum });
        }

        Ok(Self {
            name,
            weights: merged,
        })
    }

    /// Plays each symbol with probability 1/3.
    pub fn random(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weights: Symbol::ALL.iter().map(|&s| (s, 1.0 / 3.0)).collect(),
        }
    }

    /// Always plays `symbol`.
    pub fn constant(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            weights: vec![(symbol, 1.0)],
        }
    }

    pub fn weights(&self) -> &[(Symbol, f64)] {
        &self.weights
    }
}

impl Strategy for ProbabilityStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {}

    fn next_move(&mut self, _round_number: u32, rng: &mut dyn RngCore) -> Result<Symbol> {
        Ok(probability_selector(&self.weights, rng).unwrap_or_else(|| random_symbol(rng)))
    }
}

#[cfg(test)]
#[path = "probability_tests.rs"]
mod probability_tests;
