//! Per sub-strategy bookkeeping used to derive its live confidence

use rand::RngCore;
use rps_core::{compare, Outcome, Result, Strategy, Symbol};

/// Confidence in one sub-strategy, derived from its guesses so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyConfidence {
    /// P(strategy): wins / (wins + losses), 0.5 while there is no signal
    pub strategy: f64,
    /// P(symbol | strategy), indexed by [`Symbol::idx`]: wins with the symbol
    /// over times the symbol was guessed, 0.5 for symbols never guessed
    pub symbol: [f64; 3],
}

impl StrategyConfidence {
    /// Score contributed to `guess` by this strategy.
    pub fn weight(&self, guess: Symbol) -> f64 {
        self.strategy * self.symbol[guess.idx()]
    }
}

/// A sub-strategy together with the outcomes its guesses produced.
pub struct EnsembleRecord {
    strategy: Box<dyn Strategy>,
    /// Guess counts indexed by `[outcome.idx()][symbol.idx()]`
    guesses: [[u32; 3]; 3],
}

impl EnsembleRecord {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self {
            strategy,
            guesses: [[0; 3]; 3],
        }
    }

    pub fn strategy(&self) -> &dyn Strategy {
        &*self.strategy
    }

    /// Reset the sub-strategy and forget every recorded guess.
    pub fn reset(&mut self) {
        self.strategy.reset();
        self.guesses = [[0; 3]; 3];
    }

    pub fn next_guess(&mut self, round_number: u32, rng: &mut dyn RngCore) -> Result<Symbol> {
        self.strategy.next_move(round_number, rng)
    }

    /// Feed the round to the sub-strategy as if its guess had been played, and
    /// count the outcome that guess would have produced.
    pub fn record_round(&mut self, round_number: u32, guess: Symbol, opponent: Symbol) -> Result<()> {
        self.strategy.record_round(round_number, guess, opponent)?;
        let outcome = compare(guess, opponent);
        self.guesses[outcome.idx()][guess.idx()] += 1;
        Ok(())
    }

    pub fn count(&self, outcome: Outcome, symbol: Symbol) -> u32 {
        self.guesses[outcome.idx()][symbol.idx()]
    }

    fn total(&self, outcome: Outcome) -> u32 {
        self.guesses[outcome.idx()].iter().sum()
    }

    pub fn confidence(&self) -> StrategyConfidence {
        // Ties carry no signal about the strategy
        let wins = self.total(Outcome::Win);
        let losses = self.total(Outcome::Lose);
        let strategy = if wins + losses == 0 {
            0.5
        } else {
            f64::from(wins) / f64::from(wins + losses)
        };

        let mut symbol = [0.5; 3];
        for s in Symbol::ALL {
            let guessed: u32 = Outcome::ALL.iter().map(|&o| self.count(o, s)).sum();
            if guessed > 0 {
                symbol[s.idx()] = f64::from(self.count(Outcome::Win, s)) / f64::from(guessed);
            }
        }

        StrategyConfidence { strategy, symbol }
    }
}

impl std::fmt::Debug for EnsembleRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnsembleRecord")
            .field("strategy", &self.strategy.name())
            .field("guesses", &self.guesses)
            .finish()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
