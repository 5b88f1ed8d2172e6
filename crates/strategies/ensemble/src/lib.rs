//! Ensemble Strategy
//!
//! Combines the guesses of several sub-strategies with a rough Bayesian
//! weighting. For each sub-strategy `A` the ensemble tracks:
//!
//! - `P(A)`: wins / (wins + losses) of A's guesses, 0.5 without any signal
//! - `P(T | A)`: how often guessing symbol `T` won for A, 0.5 if never guessed
//!
//! Each round every sub-strategy guesses a symbol `T` and adds
//! `P(A) * P(T | A)` to that symbol's score. The scores are normalized into a
//! distribution over the three symbols.
//!
//! # Selection
//!
//! - **Deterministic**: play the most likely symbol, ties going to the first
//!   symbol in enumeration order. Follows the strongest evidence but becomes
//!   predictable.
//! - **Stochastic**: sample from the distribution. Harder for an adaptive
//!   opponent to exploit, at the cost of sometimes picking a weaker symbol.

mod record;

pub use record::{EnsembleRecord, StrategyConfidence};

use rand::RngCore;
use rps_core::{probability_selector, random_symbol, Error, Result, Strategy, Symbol};
use tracing::{debug, trace};

/// Probability given to every symbol while no sub-strategy carries any weight.
pub const UNDETERMINED_PROBABILITY: f64 = 0.5;

/// Uses an ensemble of sub-strategies to predict the next winning move.
pub struct EnsembleStrategy {
    name: String,
    records: Vec<EnsembleRecord>,
    deterministic: bool,
    /// Guess of each sub-strategy for the current round
    current_guesses: Vec<Option<Symbol>>,
    /// Distribution the last move was chosen from, indexed by [`Symbol::idx`]
    probabilities: [f64; 3],
}

impl EnsembleStrategy {
    pub fn new(
        name: impl Into<String>,
        strategies: Vec<Box<dyn Strategy>>,
        deterministic: bool,
    ) -> Result<Self> {
        let name = name.into();
        if strategies.is_empty() {
            return Err(Error::EmptyEnsemble(name));
        }
        let current_guesses = vec![None; strategies.len()];
        Ok(Self {
            name,
            records: strategies.into_iter().map(EnsembleRecord::new).collect(),
            deterministic,
            current_guesses,
            probabilities: [UNDETERMINED_PROBABILITY; 3],
        })
    }

    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    pub fn records(&self) -> &[EnsembleRecord] {
        &self.records
    }

    /// The distribution computed by the most recent `next_move`.
    pub fn symbol_probabilities(&self) -> [f64; 3] {
        self.probabilities
    }

    fn select(&self, rng: &mut dyn RngCore) -> Symbol {
        if self.deterministic {
            return most_likely(&self.probabilities);
        }

        let weights: Vec<(Symbol, f64)> = Symbol::ALL
            .iter()
            .map(|&s| (s, self.probabilities[s.idx()]))
            .collect();
        match probability_selector(&weights, rng) {
            Some(symbol) => symbol,
            None => {
                debug!(strategy = %self.name, "selection fell into residual, playing randomly");
                random_symbol(rng)
            }
        }
    }
}

/// Score each symbol from the sub-strategies' guesses and confidences.
pub fn score_guesses(guesses: &[(Symbol, StrategyConfidence)]) -> [f64; 3] {
    let mut scores = [0.0; 3];
    for (guess, confidence) in guesses {
        scores[guess.idx()] += confidence.weight(*guess);
    }
    scores
}

/// Divide every score by the total. A zero total leaves the distribution
/// undetermined: every symbol gets [`UNDETERMINED_PROBABILITY`].
pub fn normalize(scores: [f64; 3]) -> [f64; 3] {
    let total: f64 = scores.iter().sum();
    if total == 0.0 {
        return [UNDETERMINED_PROBABILITY; 3];
    }
    scores.map(|score| score / total)
}

/// Symbol with the largest probability; ties resolve in enumeration order.
pub fn most_likely(probabilities: &[f64; 3]) -> Symbol {
    let mut best = Symbol::ALL[0];
    for s in Symbol::ALL.into_iter().skip(1) {
        if probabilities[s.idx()] > probabilities[best.idx()] {
            best = s;
        }
    }
    best
}

impl Strategy for EnsembleStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        for record in &mut self.records {
            record.reset();
        }
        self.current_guesses.iter_mut().for_each(|g| *g = None);
        self.probabilities = [UNDETERMINED_PROBABILITY; 3];
    }

    fn next_move(&mut self, round_number: u32, rng: &mut dyn RngCore) -> Result<Symbol> {
        let mut guesses = Vec::with_capacity(self.records.len());
        for record in &mut self.records {
            let guess = record.next_guess(round_number, rng)?;
            guesses.push((guess, record.confidence()));
        }

        for (slot, (guess, _)) in self.current_guesses.iter_mut().zip(&guesses) {
            *slot = Some(*guess);
        }
        self.probabilities = normalize(score_guesses(&guesses));
        trace!(
            strategy = %self.name,
            round_number,
            probabilities = ?self.probabilities,
            "ensemble distribution"
        );

        Ok(self.select(rng))
    }

    /// Each sub-strategy sees its own guess as the symbol it played, not the
    /// ensemble's final choice.
    fn record_round(&mut self, round_number: u32, _own: Symbol, opponent: Symbol) -> Result<()> {
        for (index, (record, guess)) in self
            .records
            .iter_mut()
            .zip(self.current_guesses.iter_mut())
            .enumerate()
        {
            let guess = guess.take().ok_or_else(|| Error::MissingGuess {
                name: self.name.clone(),
                round: round_number,
                index,
            })?;
            record.record_round(round_number, guess, opponent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod lib_tests;
