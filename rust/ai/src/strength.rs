//! Rough hand-strength scores shared by the rule-based bots.

use pokerbots_engine::cards::Card;
use pokerbots_engine::hand::{Category, evaluate};

/// Preflop strength of two hole cards on a 0-10 scale.
///
/// - 9-10: premium pairs and AKs
/// - 7-8: TT-99, AK, AQ
/// - 5-6: 88-77, AJ, suited connectors
/// - 3-4: small pairs, weak aces, broadway
/// - 0-2: everything else
pub fn preflop_strength(c1: Card, c2: Card) -> u8 {
    let r1 = c1.rank.value();
    let r2 = c2.rank.value();
    let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
    let suited = c1.suit == c2.suit;
    let pick = |s: u8, o: u8| if suited { s } else { o };

    if r1 == r2 {
        return match high {
            13..=14 => 10,
            11..=12 => 9,
            10 => 8,
            9 => 7,
            8 => 6,
            7 => 5,
            _ => 4,
        };
    }

    match (high, low) {
        (14, 13) => pick(10, 8),
        (14, 12) => pick(8, 7),
        (14, 11) => pick(7, 6),
        (14, 10) => pick(6, 5),
        (14, _) => pick(5, 4),
        (13, 12) => pick(7, 6),
        (13, 11) => pick(6, 5),
        (13, 10) => pick(5, 4),
        (12, 11) => pick(6, 5),
        (12, 10) => pick(5, 4),
        _ if suited && high - low <= 2 => {
            if high >= 9 {
                5
            } else {
                4
            }
        }
        _ if high >= 11 && low >= 9 => 4,
        _ => 2,
    }
}

/// Made-hand strength on a 0-10 scale once at least a flop is out.
/// `None` before the flop.
pub fn postflop_strength(hole: &[Card], board: &[Card]) -> Option<u8> {
    if board.len() < 3 || hole.len() != 2 {
        return None;
    }
    let mut cards = hole.to_vec();
    cards.extend_from_slice(board);
    let rank = evaluate(&cards);
    let base = match rank.category {
        Category::HighCard => 1,
        Category::OnePair => 3,
        Category::TwoPair => 5,
        Category::ThreeOfAKind => 6,
        Category::Straight => 7,
        Category::Flush => 8,
        Category::FullHouse => 9,
        Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
    };
    let kicker = u8::from(rank.tiebreakers[0] >= 12);
    Some((base + kicker).min(10))
}

/// Strength on the street being played, 0-10.
pub fn current_strength(hole: &[Card], board: &[Card]) -> u8 {
    if let Some(s) = postflop_strength(hole, board) {
        return s;
    }
    match hole {
        [a, b] => preflop_strength(*a, *b),
        _ => 0,
    }
}

/// [`current_strength`] scaled to `0.0..=1.0`.
pub fn normalized_strength(hole: &[Card], board: &[Card]) -> f32 {
    f32::from(current_strength(hole, board)) / 10.0
}
