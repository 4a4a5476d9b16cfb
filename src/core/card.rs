use core::fmt;
use std::str::FromStr;

use crate::core::errors::ParseHandError;

/// Card suits.
///
/// The discriminants are stable so a suit can be used as an array index
/// when counting suit frequencies.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spade = 0,
    Heart = 1,
    Diamond = 2,
    Club = 3,
}

/// All four suits, in display order.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Every suit.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// The one character token used in the textual card format.
    pub const fn to_char(self) -> char {
        match self {
            Self::Spade => 's',
            Self::Heart => 'h',
            Self::Diamond => 'd',
            Self::Club => 'c',
        }
    }

    /// Parse a suit from its one character token.
    pub fn from_char(c: char) -> Result<Self, ParseHandError> {
        match c {
            's' => Ok(Self::Spade),
            'h' => Ok(Self::Heart),
            'd' => Ok(Self::Diamond),
            'c' => Ok(Self::Club),
            _ => Err(ParseHandError::UnrecognizedSuitChar(c)),
        }
    }
}

/// Card values. Ace is high by default; it only plays low inside the
/// wheel straight (A-2-3-4-5), which the ranking code handles separately.
///
/// The discriminant is the numeric rank (2-14) so values can be compared
/// and used for counting directly.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

/// All thirteen values, ascending.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Every value, ascending.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// The numeric rank (2-14) of this value.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// The token used in the textual card format. Ten is "10", not "T".
    pub const fn token(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Parse a value from its token.
    pub fn from_token(token: &str) -> Result<Self, ParseHandError> {
        match token {
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "10" => Ok(Self::Ten),
            "J" => Ok(Self::Jack),
            "Q" => Ok(Self::Queen),
            "K" => Ok(Self::King),
            "A" => Ok(Self::Ace),
            _ => Err(ParseHandError::UnrecognizedValueToken(token.to_string())),
        }
    }
}

/// A single playing card.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The face value of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Parse a card from its textual token: a value token immediately
/// followed by a one character suit, e.g. `"As"` or `"10d"`.
impl FromStr for Card {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(2..=3).contains(&s.len()) {
            return Err(ParseHandError::InvalidTokenLength(s.to_string()));
        }
        // The suit is always the trailing character; whatever precedes
        // it must be a complete value token.
        let suit_char = s
            .chars()
            .next_back()
            .ok_or_else(|| ParseHandError::InvalidTokenLength(s.to_string()))?;
        let value_token = &s[..s.len() - suit_char.len_utf8()];

        let value = Value::from_token(value_token)?;
        let suit = Suit::from_char(suit_char)?;
        Ok(Self::new(value, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.token(), self.suit.to_char())
    }
}
