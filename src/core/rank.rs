use core::fmt;

use crate::core::card::Card;
use crate::core::errors::{EvalError, HandError};
use crate::core::hand::{parse_cards, Hand, HAND_SIZE};

/// The ten hand categories, weakest first so that the derived ordering
/// and the numeric strength agree.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// No matches.
    HighCard = 0,
    /// One card matches another.
    OnePair = 1,
    /// Two different pairs of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five values in a sequence.
    Straight = 4,
    /// Five cards of the same suit.
    Flush = 5,
    /// Three of one value and two of another value.
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five values in a sequence, all of the same suit.
    StraightFlush = 8,
    /// The Ace high straight flush. A suited wheel is a plain straight
    /// flush, never royal.
    RoyalFlush = 9,
}

impl Category {
    /// The numeric strength (0-9) of this category.
    pub const fn strength(self) -> u8 {
        self as u8
    }

    /// The conventional English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }

    /// All ten categories, weakest first.
    pub const fn categories() -> [Self; 10] {
        [
            Self::HighCard,
            Self::OnePair,
            Self::TwoPair,
            Self::ThreeOfAKind,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOfAKind,
            Self::StraightFlush,
            Self::RoyalFlush,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The full rank of a five card hand: the category plus the ordered
/// tie-break key.
///
/// `kickers` lists the numeric ranks of the hand in significance order,
/// taken from the frequency profile (count descending, then rank
/// descending). For the wheel straight the Ace plays low and the key is
/// `[5, 4, 3, 2, 1]`, so a wheel sorts below a six high straight.
///
/// The derived ordering compares category first and then the kickers
/// element by element, which is exactly the comparison used to resolve
/// ties between equal categories. Two hands tie when their ranks are
/// equal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank {
    /// The hand category.
    pub category: Category,
    /// Numeric ranks in tie-break order. The wheel Ace appears as 1.
    pub kickers: Vec<u8>,
}

impl HandRank {
    /// The numeric strength (0-9) of the category.
    pub const fn strength(&self) -> u8 {
        self.category.strength()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.category.fmt(f)
    }
}

/// The result of evaluating possibly-empty input: either a real rank or
/// the distinguished "no hand" state.
///
/// Intentionally empty input must never surface as a High Card result;
/// consumers need to tell "weakest real hand" apart from "nothing to
/// show".
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// A real five card hand with its rank.
    Ranked(HandRank),
    /// Blank input, nothing to rank.
    NoHand,
}

/// The wheel straight, sorted descending with the Ace high.
const WHEEL_RANKS: [u8; HAND_SIZE] = [14, 5, 4, 3, 2];

impl Hand {
    /// Classify this hand.
    ///
    /// # Examples
    /// ```
    /// use hand_ranker::core::{Category, Hand};
    ///
    /// let hand = Hand::new_from_str("9s 9h 9d 5c 5s").unwrap();
    /// let rank = hand.rank();
    /// assert_eq!(Category::FullHouse, rank.category);
    /// assert_eq!(vec![9, 5], rank.kickers);
    /// ```
    pub fn rank(&self) -> HandRank {
        let mut ranks: [u8; HAND_SIZE] = [0; HAND_SIZE];
        let mut value_counts: [u8; 15] = [0; 15];
        for (slot, card) in ranks.iter_mut().zip(self.iter()) {
            *slot = card.value.rank();
            value_counts[card.value.rank() as usize] += 1;
        }
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        // Frequency profile: (rank, count) sorted by count descending,
        // then rank descending. Walking ranks high to low keeps the
        // secondary order right under a stable sort.
        let mut profile: Vec<(u8, u8)> = (2..=14u8)
            .rev()
            .filter(|&r| value_counts[r as usize] > 0)
            .map(|r| (r, value_counts[r as usize]))
            .collect();
        profile.sort_by(|a, b| b.1.cmp(&a.1));

        let flush = {
            let first = self.cards()[0].suit;
            self.iter().all(|c| c.suit == first)
        };
        let wheel = ranks == WHEEL_RANKS;
        // A repeated rank breaks the strictly-decreasing-by-one run, so
        // hands like 8-7-6-6-5 can never pass as a straight.
        let straight = wheel || ranks.windows(2).all(|w| w[0] == w[1] + 1);

        let top_count = profile[0].1;
        let second_count = profile.get(1).map_or(0, |p| p.1);

        let category = if straight && flush && !wheel && ranks[0] == 14 {
            Category::RoyalFlush
        } else if straight && flush {
            Category::StraightFlush
        } else if top_count == 4 {
            Category::FourOfAKind
        } else if top_count == 3 && second_count == 2 {
            Category::FullHouse
        } else if flush {
            Category::Flush
        } else if straight {
            Category::Straight
        } else if top_count == 3 {
            Category::ThreeOfAKind
        } else if top_count == 2 && second_count == 2 {
            Category::TwoPair
        } else if top_count == 2 {
            Category::OnePair
        } else {
            Category::HighCard
        };

        let kickers = if wheel {
            vec![5, 4, 3, 2, 1]
        } else {
            profile.into_iter().map(|(rank, _)| rank).collect()
        };

        HandRank { category, kickers }
    }
}

/// Classify exactly five cards.
///
/// Fails with [`EvalError::InvalidHandSize`] for any other count.
pub fn classify(cards: &[Card]) -> Result<HandRank, EvalError> {
    Ok(Hand::try_from_cards(cards)?.rank())
}

/// Evaluate textual input that may be intentionally blank.
///
/// Blank input yields [`Evaluation::NoHand`]; anything else is parsed
/// and classified as a five card hand.
pub fn evaluate(input: &str) -> Result<Evaluation, HandError> {
    if input.trim().is_empty() {
        return Ok(Evaluation::NoHand);
    }
    let cards = parse_cards(input)?;
    Ok(Evaluation::Ranked(classify(&cards)?))
}
