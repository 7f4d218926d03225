use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    /// Ace-high straight flush.
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// Strength of a five-card hand.
///
/// Ordering is lexicographic: category first, then tiebreakers high to low.
/// Unused tiebreaker slots are zero, so two ranks of the same category always
/// compare slot by slot.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    pub tiebreakers: [u8; 5],
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category.name())?;
        let used: Vec<String> = self
            .tiebreakers
            .iter()
            .take_while(|&&v| v != 0)
            .map(|v| v.to_string())
            .collect();
        if !used.is_empty() {
            write!(f, " [{}]", used.join(" "))?;
        }
        Ok(())
    }
}

/// Best ranking available from 5 to 7 cards.
///
/// Every 5-card subset is scored and the maximum kept; there is no shortcut
/// path, so flush-over-straight, the wheel and double-trips boards all go
/// through the same five-card rules.
///
/// # Panics
///
/// Panics when given fewer than 5 or more than 7 cards.
///
/// ```
/// use pokerbots_engine::cards::parse_cards;
/// use pokerbots_engine::hand::{evaluate, Category};
///
/// let cards = parse_cards("Ah 2c 3d 4s 5h Kc Kd").unwrap();
/// let rank = evaluate(&cards);
/// assert_eq!(rank.category, Category::Straight);
/// assert_eq!(rank.tiebreakers[0], 5);
/// ```
pub fn evaluate(cards: &[Card]) -> HandRank {
    best_with_cards(cards).0
}

/// The five cards that produce [`evaluate`]'s result.
pub fn best_five(cards: &[Card]) -> [Card; 5] {
    best_with_cards(cards).1
}

fn best_with_cards(cards: &[Card]) -> (HandRank, [Card; 5]) {
    assert!(
        (5..=7).contains(&cards.len()),
        "hand evaluation needs 5 to 7 cards, got {}",
        cards.len()
    );
    let n = cards.len();
    let mut best: Option<(HandRank, [Card; 5])> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let rank = evaluate_five(&five);
                        if best.as_ref().is_none_or(|(r, _)| rank > *r) {
                            best = Some((rank, five));
                        }
                    }
                }
            }
        }
    }
    // The loop always visits at least one subset because n >= 5.
    best.unwrap_or_else(|| unreachable!("no five-card subset"))
}

/// Scores exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(&values);

    // (count, value) groups, biggest group first, then higher value first
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &v in &values {
        match groups.iter_mut().find(|(_, gv)| *gv == v) {
            Some(g) => g.0 += 1,
            None => groups.push((1, v)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    if let (true, Some(high)) = (flush, straight_high) {
        let category = if high == 14 {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return rank(category, &[high]);
    }
    if groups[0].0 == 4 {
        return rank(Category::FourOfAKind, &[groups[0].1, groups[1].1]);
    }
    if groups[0].0 == 3 && groups[1].0 == 2 {
        return rank(Category::FullHouse, &[groups[0].1, groups[1].1]);
    }
    if flush {
        return rank(Category::Flush, &values);
    }
    if let Some(high) = straight_high {
        return rank(Category::Straight, &[high]);
    }
    if groups[0].0 == 3 {
        return rank(
            Category::ThreeOfAKind,
            &[groups[0].1, groups[1].1, groups[2].1],
        );
    }
    if groups[0].0 == 2 && groups[1].0 == 2 {
        return rank(Category::TwoPair, &[groups[0].1, groups[1].1, groups[2].1]);
    }
    if groups[0].0 == 2 {
        return rank(
            Category::OnePair,
            &[groups[0].1, groups[1].1, groups[2].1, groups[3].1],
        );
    }
    rank(Category::HighCard, &values)
}

pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    a.cmp(b)
}

fn rank(category: Category, values: &[u8]) -> HandRank {
    let mut tiebreakers = [0u8; 5];
    for (slot, &v) in tiebreakers.iter_mut().zip(values) {
        *slot = v;
    }
    HandRank {
        category,
        tiebreakers,
    }
}

// `desc` holds five values sorted high to low.
fn straight_high(desc: &[u8]) -> Option<u8> {
    let distinct = desc.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if desc[0] - desc[4] == 4 {
        return Some(desc[0]);
    }
    // wheel: A-5-4-3-2 plays as a five-high straight
    if desc == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(s: &str) -> HandRank {
        evaluate(&parse_cards(s).unwrap())
    }

    #[test]
    fn quads_keep_best_kicker() {
        let r = eval("9s 9h 9c 9d 2s Kh 3c");
        assert_eq!(r.category, Category::FourOfAKind);
        assert_eq!(r.tiebreakers, [9, 13, 0, 0, 0]);
    }

    #[test]
    fn double_trips_pick_highest_full_house() {
        let r = eval("4s 4h 4c Js Jh Jd 2c");
        assert_eq!(r.category, Category::FullHouse);
        assert_eq!(r.tiebreakers, [11, 4, 0, 0, 0]);
    }

    #[test]
    fn trips_with_two_pairs_use_higher_pair() {
        let r = eval("7s 7h 7c 3d 3s Qh Qd");
        assert_eq!(r.category, Category::FullHouse);
        assert_eq!(r.tiebreakers, [7, 12, 0, 0, 0]);
    }

    #[test]
    fn three_pairs_keep_best_kicker() {
        let r = eval("Ks Kh 8c 8d 4s 4h 6c");
        assert_eq!(r.category, Category::TwoPair);
        assert_eq!(r.tiebreakers, [13, 8, 6, 0, 0]);
    }

    #[test]
    fn six_high_straight_beats_wheel() {
        let wheel = eval("As 2h 3c 4d 5s");
        let six = eval("2h 3c 4d 5s 6h");
        assert!(six > wheel);
    }

    #[test]
    fn steel_wheel_is_a_five_high_straight_flush() {
        let r = eval("Ah 2h 3h 4h 5h 9c Kd");
        assert_eq!(r.category, Category::StraightFlush);
        assert_eq!(r.tiebreakers[0], 5);
    }

    #[test]
    fn best_five_returns_the_scoring_cards() {
        let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
        let mut five = best_five(&cards);
        five.sort();
        let mut expected = parse_cards("Ah Kh Qh Jh Th").unwrap();
        expected.sort();
        assert_eq!(five.to_vec(), expected);
    }

    #[test]
    #[should_panic(expected = "5 to 7 cards")]
    fn four_cards_is_a_programming_error() {
        eval("As Ks Qs Js");
    }

    #[test]
    fn display_lists_used_tiebreakers() {
        assert_eq!(eval("As Ah Kd Qc 9s").to_string(), "One Pair [14 13 12 9]");
    }
}
