use crate::core::card::Card;

/// Iterator over every `num_cards`-card combination of a card slice.
///
/// Combinations are emitted in lexicographic index order, so each
/// subset appears exactly once and enumeration order is deterministic.
/// The selection order inside a subset matches the input slice order.
#[derive(Debug)]
pub struct CardIter<'a> {
    /// The cards to choose from.
    possible_cards: &'a [Card],

    /// Current combination as indices into `possible_cards`.
    idx: Vec<usize>,

    /// Whether the first combination has been emitted yet.
    started: bool,
}

impl<'a> CardIter<'a> {
    /// Create an iterator over all `num_cards`-card combinations of
    /// `possible_cards`.
    ///
    /// Yields nothing when `num_cards` exceeds the slice length.
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> Self {
        Self {
            possible_cards,
            idx: (0..num_cards).collect(),
            started: false,
        }
    }

    fn emit(&self) -> Vec<Card> {
        self.idx.iter().map(|&i| self.possible_cards[i]).collect()
    }

    /// Advance `idx` to the next combination. Returns false when
    /// enumeration is exhausted.
    fn advance(&mut self) -> bool {
        let n = self.possible_cards.len();
        let k = self.idx.len();
        // Find the rightmost index that can still move forward.
        for level in (0..k).rev() {
            if self.idx[level] + k < n + level {
                self.idx[level] += 1;
                for follow in level + 1..k {
                    self.idx[follow] = self.idx[follow - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if !self.started {
            self.started = true;
            if self.idx.len() > self.possible_cards.len() {
                return None;
            }
            return Some(self.emit());
        }
        if self.idx.is_empty() || !self.advance() {
            return None;
        }
        Some(self.emit())
    }
}
