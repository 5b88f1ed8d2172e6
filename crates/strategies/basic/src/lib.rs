//! Basic Strategies
//!
//! Strategies that do not model the opponent beyond its last move.
//! Useful for:
//! - Baseline comparisons (any learning strategy should beat a constant player)
//! - Exposing predictable patterns for the Markov strategies to learn
//! - Sub-strategies inside an ensemble

mod pattern;
mod previous_move;
mod probability;

pub use pattern::PatternStrategy;
pub use previous_move::{PreviousMoveStrategy, Reaction};
pub use probability::ProbabilityStrategy;
