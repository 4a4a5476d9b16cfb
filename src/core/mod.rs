//! Leaf types and the five card classifier: cards, hands, hand ranks,
//! the combinations iterator, and the deck.

/// Module with the card model: suits, values, and token parsing.
mod card;
/// Export `Card`, `Suit`, and `Value`.
pub use self::card::{Card, Suit, Value};

/// Module with the error types.
mod errors;
/// Export the error enums.
pub use self::errors::{EvalError, HandError, ParseHandError};

/// Module with the five card `Hand` and token collection parsing.
mod hand;
/// Export `Hand` and friends.
pub use self::hand::{parse_cards, Hand, HAND_SIZE};

/// Module with the classifier: categories, ranks, and kicker ordering.
mod rank;
/// Export the classification types and entry points.
pub use self::rank::{classify, evaluate, Category, Evaluation, HandRank};

/// Module with the combinations iterator used for subset enumeration.
mod card_iter;
/// Export `CardIter`.
pub use self::card_iter::CardIter;

/// Module with the 52 card deck.
mod deck;
/// Export `Deck`.
pub use self::deck::Deck;
