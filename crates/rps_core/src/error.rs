//! Error types shared by every strategy and the match driver

use thiserror::Error;

use crate::Symbol;

/// Configuration faults are raised at construction time. Invariant
/// violations indicate broken bookkeeping inside a strategy and abort the run.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("players have the same name: \"{0}\"")]
    DuplicateName(String),

    #[error("probability map for {name} does not sum to 1 (sum = {sum})")]
    InvalidProbabilityMap { name: String, sum: f64 },

    #[error("probability map for {name} has a negative weight for {symbol}")]
    NegativeProbability { name: String, symbol: Symbol },

    #[error("pattern for {0} is empty")]
    EmptyPattern(String),

    #[error("chain length for {0} must be at least 1")]
    InvalidChainLength(String),

    #[error("ensemble {0} has no sub-strategies")]
    EmptyEnsemble(String),

    #[error("unknown symbol '{0}'")]
    UnknownSymbol(String),

    #[error("{name} has uneven history windows: own {own}, opponent {opponent}")]
    UnevenHistory {
        name: String,
        own: usize,
        opponent: usize,
    },

    #[error("could not determine next move for {0}")]
    SamplingFailed(String),

    #[error("{name} recorded round {round} without a guess from sub-strategy {index}")]
    MissingGuess {
        name: String,
        round: u32,
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
