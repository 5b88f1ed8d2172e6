//! Markov Chain Strategies
//!
//! Opponent-modelling strategies that condition on a sliding window of the
//! last `k` rounds. Each one keeps a table from history key to the counts of
//! the opponent symbol that followed, samples a prediction from those counts
//! and plays the symbol that beats it.
//!
//! - [`MarkovChainStrategy`] keys on the opponent's last `k` symbols
//! - [`DoubleMarkovChainStrategy`] keys on its own last `k` symbols followed
//!   by the opponent's last `k` symbols

mod chain;
mod double;
mod single;

pub use chain::{counter_prediction, sample_counts, CountTable, HistoryWindow};
pub use double::DoubleMarkovChainStrategy;
pub use single::MarkovChainStrategy;
