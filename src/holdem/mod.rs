//! The seven card layer: best-five-of-seven selection and multi-player
//! showdown resolution.

/// Module with the best-of-seven selector.
mod best_hand;
/// Export `BestHand` and the selector.
pub use self::best_hand::{best_five_of_seven, BestHand, POOL_SIZE};

/// Module with the round comparator.
mod showdown;
/// Export the showdown types.
pub use self::showdown::{Player, PlayerResult, RoundOutcome, Showdown};
