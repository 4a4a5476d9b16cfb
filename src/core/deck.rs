use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::card::{Card, Suit, Value};

/// A deck of cards to deal from.
///
/// Starts with all 52 distinct cards; dealing removes cards from the
/// top, so a single deal can never produce duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    /// A full 52 card deck in suit-major order.
    fn default() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::suits() {
            for value in Value::values() {
                cards.push(Card::new(value, suit));
            }
        }
        Self { cards }
    }
}

impl Deck {
    /// Shuffle the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// Deal `N` cards from the top, or `None` if the deck has fewer
    /// cards remaining.
    pub fn deal<const N: usize>(&mut self) -> Option<[Card; N]> {
        if self.cards.len() < N {
            return None;
        }
        let dealt = self.cards.split_off(self.cards.len() - N);
        dealt.try_into().ok()
    }

    /// The number of cards remaining.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the deck is out of cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards remaining, top of the deck last.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
