pub mod error;
pub mod pairs;
pub mod sampling;
pub mod symbol;

// Re-export core game logic (not strategy-specific)
pub use error::{Error, Result};
pub use pairs::{all_pairs, pair_indices, pair_mut};
pub use sampling::{probability_selector, sums_to_one, PROBABILITY_TOLERANCE};
pub use symbol::{compare, random_symbol, Outcome, Symbol};

use rand::RngCore;

// =============================================================================
// Strategy trait: implemented by all players (fixed, Markov, ensemble, etc.)
// =============================================================================

/// Trait that all rock-paper-scissors strategies must implement.
///
/// The match driver calls `next_move` on both players, then `record_round` on
/// both players with the symbols that were actually played. `reset` is called
/// before every match so a single instance can take part in many matches.
pub trait Strategy: Send {
    /// Returns the strategy's name. Names identify players in score tables.
    fn name(&self) -> &str;

    /// Clear every piece of learned state. Safe to call at any time.
    fn reset(&mut self);

    /// Choose the symbol to play in round `round_number`.
    ///
    /// Strategies without enough history fall back to [`random_symbol`].
    /// An error means the strategy's internal bookkeeping is corrupt.
    fn next_move(&mut self, round_number: u32, rng: &mut dyn RngCore) -> Result<Symbol>;

    /// Record the result of a round: the symbol this strategy played and the
    /// symbol the opponent played.
    fn record_round(&mut self, _round_number: u32, _own: Symbol, _opponent: Symbol) -> Result<()> {
        Ok(())
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn next_move(&mut self, round_number: u32, rng: &mut dyn RngCore) -> Result<Symbol> {
        (**self).next_move(round_number, rng)
    }

    fn record_round(&mut self, round_number: u32, own: Symbol, opponent: Symbol) -> Result<()> {
        (**self).record_round(round_number, own, opponent)
    }
}
