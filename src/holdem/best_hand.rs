use crate::core::{Card, CardIter, EvalError, Hand, HandRank, HAND_SIZE};

/// The number of cards in a player's pool: two hole cards plus the
/// five community cards.
pub const POOL_SIZE: usize = 7;

/// The strongest five card hand found in a seven card pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestHand {
    /// The winning five card subset.
    pub hand: Hand,
    /// Its rank.
    pub rank: HandRank,
}

/// Find the best five card hand in a seven card pool.
///
/// Enumerates all C(7,5) = 21 five card combinations, ranks each, and
/// keeps the maximum by category then kickers. Ties between subsets
/// keep the first one reached in enumeration order, so the result is
/// deterministic.
///
/// The pool is assumed to come from a single deal; duplicate cards are
/// a caller contract violation and are not revalidated here.
///
/// # Examples
/// ```
/// use hand_ranker::core::{parse_cards, Category};
/// use hand_ranker::holdem::best_five_of_seven;
///
/// let pool = parse_cards("As Ah Kh Kc Qs Qd 2d").unwrap();
/// let best = best_five_of_seven(&pool).unwrap();
/// assert_eq!(Category::TwoPair, best.rank.category);
/// ```
pub fn best_five_of_seven(pool: &[Card]) -> Result<BestHand, EvalError> {
    if pool.len() != POOL_SIZE {
        return Err(EvalError::InvalidHandSize {
            expected: POOL_SIZE,
            got: pool.len(),
        });
    }

    let mut best: Option<BestHand> = None;
    for combo in CardIter::new(pool, HAND_SIZE) {
        let hand = Hand::try_from_cards(&combo)?;
        let rank = hand.rank();
        match &best {
            // Only a strictly better rank replaces the current best.
            Some(current) if rank <= current.rank => {}
            _ => best = Some(BestHand { hand, rank }),
        }
    }
    Ok(best.expect("A seven card pool always has combinations"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_cards, Category};

    #[test]
    fn test_pool_size_enforced() {
        let short = parse_cards("As Ah Kh Kc Qs").unwrap();
        assert_eq!(
            Err(EvalError::InvalidHandSize {
                expected: 7,
                got: 5
            }),
            best_five_of_seven(&short)
        );
    }

    #[test]
    fn test_prefers_hole_pair_over_board_pairs() {
        // Board pairs Kings and Queens; pocket Aces make Aces and Kings
        // the best two pair, not the board's own pairs.
        let pool = parse_cards("As Ah Kh Kc Qs Qd 2d").unwrap();
        let best = best_five_of_seven(&pool).unwrap();
        assert_eq!(Category::TwoPair, best.rank.category);
        assert_eq!(vec![14, 13, 12], best.rank.kickers);
    }

    #[test]
    fn test_finds_straight_across_the_pool() {
        let pool = parse_cards("9h 8c 7s 6d 5h As Kd").unwrap();
        let best = best_five_of_seven(&pool).unwrap();
        assert_eq!(Category::Straight, best.rank.category);
        assert_eq!(vec![9, 8, 7, 6, 5], best.rank.kickers);
    }

    #[test]
    fn test_finds_flush_over_straight() {
        let pool = parse_cards("2h 4h 6h 8h 10h 9s Jd").unwrap();
        let best = best_five_of_seven(&pool).unwrap();
        assert_eq!(Category::Flush, best.rank.category);
    }

    #[test]
    fn test_royal_flush_in_pool() {
        let pool = parse_cards("As Ks Qs Js 10s 2h 3d").unwrap();
        let best = best_five_of_seven(&pool).unwrap();
        assert_eq!(Category::RoyalFlush, best.rank.category);
        assert_eq!(9, best.rank.strength());
    }

    #[test]
    fn test_matches_brute_force_enumeration() {
        // Independently enumerate all C(7,5) combinations with nested
        // loops and confirm the selector picked the maximum.
        let pools = [
            "As Ah Kh Kc Qs Qd 2d",
            "9h 8c 7s 6d 5h As Kd",
            "2h 4h 6h 8h 10h 9s Jd",
            "As 2s 3s 4s 5h 6d 7c",
            "Kh Kc Ks Kd 2s 2h 2d",
        ];
        for pool_str in pools {
            let pool = parse_cards(pool_str).unwrap();
            let best = best_five_of_seven(&pool).unwrap();

            let mut brute_best: Option<HandRank> = None;
            let mut combos = 0;
            for a in 0..pool.len() {
                for b in a + 1..pool.len() {
                    for c in b + 1..pool.len() {
                        for d in c + 1..pool.len() {
                            for e in d + 1..pool.len() {
                                combos += 1;
                                let hand = Hand::new([
                                    pool[a], pool[b], pool[c], pool[d], pool[e],
                                ]);
                                let rank = hand.rank();
                                if brute_best.as_ref().map_or(true, |cur| rank > *cur) {
                                    brute_best = Some(rank);
                                }
                            }
                        }
                    }
                }
            }
            assert_eq!(21, combos);
            assert_eq!(brute_best.unwrap(), best.rank, "pool {pool_str}");
        }
    }

    #[test]
    fn test_deterministic_on_tied_subsets() {
        // Board plays for everyone; repeated selection must return the
        // same subset.
        let pool = parse_cards("As Ks Qs Js 10s 2h 3d").unwrap();
        let first = best_five_of_seven(&pool).unwrap();
        let second = best_five_of_seven(&pool).unwrap();
        assert_eq!(first, second);
    }
}
