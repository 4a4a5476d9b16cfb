use core::fmt;
use std::str::FromStr;

use crate::core::card::Card;
use crate::core::errors::{EvalError, HandError, ParseHandError};

/// The number of cards in a rankable hand.
pub const HAND_SIZE: usize = 5;

/// Parse whitespace separated card tokens into cards.
///
/// Empty or blank input is an explicit error so that callers never
/// mistake missing data for a zero card hand.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, ParseHandError> {
    let mut cards = Vec::new();
    for token in input.split_whitespace() {
        cards.push(token.parse()?);
    }
    if cards.is_empty() {
        return Err(ParseHandError::EmptyInput);
    }
    Ok(cards)
}

/// A five card hand.
///
/// Construction validates the card count; classification is a pure
/// function of the cards (see [`Hand::rank`]), so a `Hand` carries no
/// derived mutable state.
///
/// [`Hand::rank`]: Hand::rank
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Create a hand from exactly five cards.
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Create a hand from a slice, failing if it isn't exactly five cards.
    pub fn try_from_cards(cards: &[Card]) -> Result<Self, EvalError> {
        let cards: [Card; HAND_SIZE] =
            cards
                .try_into()
                .map_err(|_| EvalError::InvalidHandSize {
                    expected: HAND_SIZE,
                    got: cards.len(),
                })?;
        Ok(Self::new(cards))
    }

    /// Parse a hand from whitespace separated tokens, e.g.
    /// `"9s 9h 9d 5c 5s"`.
    pub fn new_from_str(input: &str) -> Result<Self, HandError> {
        let cards = parse_cards(input)?;
        Ok(Self::try_from_cards(&cards)?)
    }

    /// The cards in this hand.
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Iterate over the cards in this hand.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

/// Formats the hand as space separated card tokens.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
