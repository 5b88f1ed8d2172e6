use rand::RngCore;
use rps_core::{random_symbol, Error, Result, Strategy, Symbol};
use tracing::trace;

use crate::chain::{counter_prediction, CountTable, HistoryWindow};

/// Markov chain strategy keyed on the opponent's last `k` symbols.
#[derive(Debug, Clone)]
pub struct MarkovChainStrategy {
    name: String,
    /// Opponent symbols that followed each window seen so far
    table: CountTable,
    /// The opponent's most recent symbols
    opponent: HistoryWindow,
}

impl MarkovChainStrategy {
    pub fn new(name: impl Into<String>, chain_length: usize) -> Result<Self> {
        let name = name.into();
        if chain_length == 0 {
            return Err(Error::InvalidChainLength(name));
        }
        Ok(Self {
            name,
            table: CountTable::new(),
            opponent: HistoryWindow::new(chain_length),
        })
    }

    pub fn chain_length(&self) -> usize {
        self.opponent.capacity()
    }

    pub fn table(&self) -> &CountTable {
        &self.table
    }

    fn key(&self) -> Vec<Symbol> {
        self.opponent.iter().collect()
    }
}

impl Strategy for MarkovChainStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        self.table.clear();
        self.opponent.clear();
    }

    fn next_move(&mut self, round_number: u32, rng: &mut dyn RngCore) -> Result<Symbol> {
        if !self.opponent.is_full() {
            trace!(strategy = %self.name, round_number, "history too short, playing randomly");
            return Ok(random_symbol(rng));
        }
        counter_prediction(&self.name, &self.table, &self.key(), rng)
    }

    fn record_round(&mut self, _round_number: u32, _own: Symbol, opponent: Symbol) -> Result<()> {
        if self.opponent.is_full() {
            self.table.record(self.key(), opponent);
        }
        self.opponent.push(opponent);
        Ok(())
    }
}

#[cfg(test)]
#[path = "single_tests.rs"]
mod single_tests;
