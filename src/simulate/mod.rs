//! Monte Carlo category-frequency simulation.
//!
//! Repeatedly deals random five card hands and tallies how often each
//! category shows up. Every trial is independent and side effect free,
//! so large batches can be fanned out across threads and reduced with
//! [`CategoryCounts::merge`]; no locking is needed.

use core::fmt;

use rand::Rng;
use tracing::debug;

use crate::core::{Card, Category, Deck, Hand, HAND_SIZE};

/// Per-category hand counts from a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [u64; 10],
    trials: u64,
}

impl CategoryCounts {
    /// An empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified hand.
    pub fn record(&mut self, category: Category) {
        self.counts[category.strength() as usize] += 1;
        self.trials += 1;
    }

    /// How many hands landed in `category`.
    pub const fn count(&self, category: Category) -> u64 {
        self.counts[category.strength() as usize]
    }

    /// The share of hands in `category`, as a percentage (0.0 - 100.0).
    pub fn percentage(&self, category: Category) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (self.count(category) as f64 / self.trials as f64) * 100.0
    }

    /// Total hands recorded.
    pub const fn trials(&self) -> u64 {
        self.trials
    }

    /// Fold another tally into this one. This is the reduction step
    /// for parallel simulation batches.
    pub fn merge(&mut self, other: &Self) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
        self.trials += other.trials;
    }
}

/// One line per category, strongest first.
impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in Category::categories().into_iter().rev() {
            writeln!(
                f,
                "{:<16}: {:>10} | {:.4}%",
                category.name(),
                self.count(category),
                self.percentage(category)
            )?;
        }
        Ok(())
    }
}

/// Deal and classify `trials` random five card hands from fresh
/// shuffled decks.
pub fn simulate_hand_frequencies(trials: u64, rng: &mut impl Rng) -> CategoryCounts {
    debug!(trials, "starting hand frequency simulation");
    let fresh = Deck::default();
    let mut counts = CategoryCounts::new();
    for _ in 0..trials {
        let mut deck = fresh.clone();
        deck.shuffle(rng);
        let cards = deck
            .deal::<HAND_SIZE>()
            .expect("A fresh deck always covers one hand");
        counts.record(Hand::new(cards).rank().category);
    }
    counts
}

/// Deal a full round from a fresh shuffled deck: two hole cards per
/// player plus the five community cards.
///
/// This is the opaque supplier feeding
/// [`Showdown`](crate::holdem::Showdown); all cards across the round
/// are distinct. Returns `None` when `num_players` needs more cards
/// than the deck holds.
pub fn deal_round(
    num_players: usize,
    rng: &mut impl Rng,
) -> Option<([Card; HAND_SIZE], Vec<[Card; 2]>)> {
    let mut deck = Deck::default();
    deck.shuffle(rng);

    let mut hole_cards = Vec::with_capacity(num_players);
    for _ in 0..num_players {
        hole_cards.push(deck.deal::<2>()?);
    }
    let community = deck.deal::<HAND_SIZE>()?;
    Some((community, hole_cards))
}
