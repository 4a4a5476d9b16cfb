//! A library for classifying poker hands and resolving Texas Hold'em
//! showdowns.
//!
//! The [`core`] module holds the leaf pieces: the card model with its
//! textual token format, the five card [`core::Hand`], and the
//! classifier producing a [`core::HandRank`] (one of ten categories
//! plus the ordered kicker key used to break ties, including the
//! Ace-low wheel). The [`holdem`] module layers the best-five-of-seven
//! selector and the multi-player [`holdem::Showdown`] on top, and
//! [`simulate`] provides a Monte Carlo driver for category
//! frequencies.
//!
//! # Examples
//! ```
//! use hand_ranker::core::{Category, Hand};
//!
//! let hand = Hand::new_from_str("As 2h 3d 4c 5s").unwrap();
//! let rank = hand.rank();
//! assert_eq!(Category::Straight, rank.category);
//! // The wheel Ace plays low.
//! assert_eq!(vec![5, 4, 3, 2, 1], rank.kickers);
//! ```

/// Core card, hand, and classification types.
pub mod core;

/// Seven card selection and showdown resolution.
pub mod holdem;

/// Monte Carlo category-frequency simulation.
pub mod simulate;
