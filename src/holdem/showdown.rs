use std::cmp::Ordering;

use tracing::debug;

use crate::core::{Card, EvalError, Hand, HandRank, HAND_SIZE};
use crate::holdem::best_hand::{best_five_of_seven, POOL_SIZE};

/// A player in a showdown: an identifier plus two hole cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display identifier, preserved through resolution.
    pub id: String,
    /// The player's two private cards.
    pub hole_cards: [Card; 2],
}

impl Player {
    /// Create a player.
    pub fn new(id: impl Into<String>, hole_cards: [Card; 2]) -> Self {
        Self {
            id: id.into(),
            hole_cards,
        }
    }
}

/// One player's resolved result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Index of the player in the input order.
    pub player_idx: usize,
    /// The best five card hand out of the player's seven card pool.
    pub best_hand: Hand,
    /// The rank of that hand.
    pub rank: HandRank,
}

/// The outcome of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Every player's best hand, in input order.
    pub results: Vec<PlayerResult>,
    /// Indices of the players holding the maximum rank, in input
    /// order. More than one index means a split pot.
    pub winners: Vec<usize>,
}

impl RoundOutcome {
    /// True when two or more players tied for the win.
    pub fn is_split_pot(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Resolves a showdown: five community cards against any number of
/// players' hole cards.
///
/// Winner tracking compares full ranks (category, then kickers), so
/// two players sharing a category but holding different actual ranks
/// are never falsely declared tied. Each resolution is a pure function
/// of its inputs; nothing persists across rounds.
#[derive(Debug, Clone)]
pub struct Showdown {
    community: [Card; HAND_SIZE],
    players: Vec<Player>,
}

impl Showdown {
    /// Create a showdown from the community cards and the players.
    pub fn new(community: [Card; HAND_SIZE], players: Vec<Player>) -> Self {
        Self { community, players }
    }

    /// The community cards.
    pub const fn community(&self) -> &[Card; HAND_SIZE] {
        &self.community
    }

    /// The players, in input order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Resolve the round.
    ///
    /// # Examples
    /// ```
    /// use hand_ranker::core::parse_cards;
    /// use hand_ranker::holdem::{Player, Showdown};
    ///
    /// let community = parse_cards("Kh Kc Qs Qd 2d").unwrap();
    /// let alice = parse_cards("As Ah").unwrap();
    /// let showdown = Showdown::new(
    ///     community.try_into().unwrap(),
    ///     vec![Player::new("Alice", alice.try_into().unwrap())],
    /// );
    /// let outcome = showdown.resolve().unwrap();
    /// assert_eq!(vec![0], outcome.winners);
    /// ```
    pub fn resolve(&self) -> Result<RoundOutcome, EvalError> {
        let mut results = Vec::with_capacity(self.players.len());
        let mut winners: Vec<usize> = Vec::new();
        let mut best_rank: Option<HandRank> = None;

        for (idx, player) in self.players.iter().enumerate() {
            let mut pool = [player.hole_cards[0]; POOL_SIZE];
            pool[..2].copy_from_slice(&player.hole_cards);
            pool[2..].copy_from_slice(&self.community);

            let best = best_five_of_seven(&pool)?;
            debug!(
                player = %player.id,
                category = %best.rank.category,
                hand = %best.hand,
                "best hand selected"
            );

            match best_rank
                .as_ref()
                .map(|current| best.rank.cmp(current))
            {
                None | Some(Ordering::Greater) => {
                    best_rank = Some(best.rank.clone());
                    winners.clear();
                    winners.push(idx);
                }
                Some(Ordering::Equal) => winners.push(idx),
                Some(Ordering::Less) => {}
            }

            results.push(PlayerResult {
                player_idx: idx,
                best_hand: best.hand,
                rank: best.rank,
            });
        }

        Ok(RoundOutcome { results, winners })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_cards, Category};

    fn community(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    fn hole(s: &str) -> [Card; 2] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_single_player_two_pair_from_hole_aces() {
        let showdown = Showdown::new(
            community("Kh Kc Qs Qd 2d"),
            vec![Player::new("Alice", hole("As Ah"))],
        );
        let outcome = showdown.resolve().unwrap();
        assert_eq!(vec![0], outcome.winners);
        assert_eq!(Category::TwoPair, outcome.results[0].rank.category);
        // Aces and Kings beat the board's Kings and Queens.
        assert_eq!(vec![14, 13, 12], outcome.results[0].rank.kickers);
    }

    #[test]
    fn test_outright_winner() {
        let showdown = Showdown::new(
            community("7s 8s 9s 2h 3d"),
            vec![
                Player::new("Alice", hole("10s Js")), // straight flush
                Player::new("Bob", hole("7h 7d")),    // set of sevens
            ],
        );
        let outcome = showdown.resolve().unwrap();
        assert_eq!(vec![0], outcome.winners);
        assert!(!outcome.is_split_pot());
        assert_eq!(Category::StraightFlush, outcome.results[0].rank.category);
        assert_eq!(Category::ThreeOfAKind, outcome.results[1].rank.category);
    }

    #[test_log::test]
    fn test_split_pot_royal_flush_on_board() {
        let showdown = Showdown::new(
            community("As Ks Qs Js 10s"),
            vec![
                Player::new("Alice", hole("2h 7d")),
                Player::new("Bob", hole("3c 8h")),
            ],
        );
        let outcome = showdown.resolve().unwrap();
        assert_eq!(vec![0, 1], outcome.winners);
        assert!(outcome.is_split_pot());
        for result in &outcome.results {
            assert_eq!(Category::RoyalFlush, result.rank.category);
        }
        assert_eq!(outcome.results[0].rank, outcome.results[1].rank);
    }

    #[test]
    fn test_same_category_different_kickers_is_not_a_tie() {
        // Both players make two pair, but Alice's Aces outrank Bob's
        // Queens. Category-only comparison would call this a split.
        let showdown = Showdown::new(
            community("Kh Kc 8s 5d 2d"),
            vec![
                Player::new("Alice", hole("As Ad")),
                Player::new("Bob", hole("Qs Qd")),
            ],
        );
        let outcome = showdown.resolve().unwrap();
        assert_eq!(
            Category::TwoPair,
            outcome.results[0].rank.category
        );
        assert_eq!(
            Category::TwoPair,
            outcome.results[1].rank.category
        );
        assert_eq!(vec![0], outcome.winners);
    }

    #[test]
    fn test_kicker_decides_same_pair() {
        // Shared pair on the board, hole kicker decides.
        let showdown = Showdown::new(
            community("Kh Kc 9s 5d 2d"),
            vec![
                Player::new("Alice", hole("Ah 3c")),
                Player::new("Bob", hole("Qh 3d")),
            ],
        );
        let outcome = showdown.resolve().unwrap();
        assert_eq!(vec![0], outcome.winners);
    }

    #[test]
    fn test_winners_preserve_input_order() {
        let showdown = Showdown::new(
            community("As Ks Qs Js 10s"),
            vec![
                Player::new("P1", hole("2h 7d")),
                Player::new("P2", hole("3c 8h")),
                Player::new("P3", hole("4d 9h")),
            ],
        );
        let outcome = showdown.resolve().unwrap();
        assert_eq!(vec![0, 1, 2], outcome.winners);
    }

    #[test]
    fn test_later_player_can_take_the_lead() {
        let showdown = Showdown::new(
            community("2h 5c 9s Jd Kh"),
            vec![
                Player::new("Alice", hole("3d 4c")), // plays the board
                Player::new("Bob", hole("Ks Kd")),   // set of kings
            ],
        );
        let outcome = showdown.resolve().unwrap();
        assert_eq!(vec![1], outcome.winners);
    }
}
