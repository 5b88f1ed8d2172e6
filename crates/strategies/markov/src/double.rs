use rand::RngCore;
use rps_core::{random_symbol, Error, Result, Strategy, Symbol};
use tracing::trace;

use crate::chain::{counter_prediction, CountTable, HistoryWindow};

/// Markov chain strategy keyed on both players' last `k` symbols.
///
/// The key is this strategy's own window followed by the opponent's window,
/// so it can pick up opponents that react to what they were played against.
/// Both windows always hold the same number of symbols.
#[derive(Debug, Clone)]
pub struct DoubleMarkovChainStrategy {
    name: String,
    table: CountTable,
    own: HistoryWindow,
    opponent: HistoryWindow,
}

impl DoubleMarkovChainStrategy {
    pub fn new(name: impl Into<String>, chain_length: usize) -> Result<Self> {
        let name = name.into();
        if chain_length == 0 {
            return Err(Error::InvalidChainLength(name));
        }
        Ok(Self {
            name,
            table: CountTable::new(),
            own: HistoryWindow::new(chain_length),
            opponent: HistoryWindow::new(chain_length),
        })
    }

    pub fn chain_length(&self) -> usize {
        self.opponent.capacity()
    }

    pub fn table(&self) -> &CountTable {
        &self.table
    }

    fn check_windows(&self) -> Result<()> {
        if self.own.len() != self.opponent.len() {
            return Err(Error::UnevenHistory {
                name: self.name.clone(),
                own: self.own.len(),
                opponent: self.opponent.len(),
            });
        }
        Ok(())
    }

    fn key(&self) -> Vec<Symbol> {
        self.own.iter().chain(self.opponent.iter()).collect()
    }
}

impl Strategy for DoubleMarkovChainStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        self.table.clear();
        self.own.clear();
        self.opponent.clear();
    }

    fn next_move(&mut self, round_number: u32, rng: &mut dyn RngCore) -> Result<Symbol> {
        if !self.opponent.is_full() {
            trace!(strategy = %self.name, round_number, "history too short, playing randomly");
            return Ok(random_symbol(rng));
        }
        counter_prediction(&self.name, &self.table, &self.key(), rng)
    }

    fn record_round(&mut self, _round_number: u32, own: Symbol, opponent: Symbol) -> Result<()> {
        self.check_windows()?;

        if self.opponent.is_full() {
            self.table.record(self.key(), opponent);
        }
        self.own.push(own);
        self.opponent.push(opponent);
        Ok(())
    }
}

#[cfg(test)]
#[path = "double_tests.rs"]
mod double_tests;
