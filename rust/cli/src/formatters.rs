//! Card, board and action formatting for terminal output.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal is expected to cope, and as
//! the letters h d c s otherwise (older Windows consoles).
//!
//! ```rust
//! use pokerbots_engine::cards::{Card, Rank, Suit};
//! use pokerbots_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use pokerbots_engine::cards::{Card, Suit};
use pokerbots_engine::hand::HandRank;
use pokerbots_engine::player::PlayerAction;

/// On Windows only modern terminals are trusted with Unicode suits.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.symbol().to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// `[A♠ K♥]`, or `[]` for an empty board.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Raise(to) => format!("raise to {}", to),
    }
}

/// Category name followed by the significant tiebreaker values.
pub fn format_rank(rank: &HandRank) -> String {
    let values: Vec<String> = rank
        .tiebreakers
        .iter()
        .filter(|&&v| v != 0)
        .map(|v| v.to_string())
        .collect();
    format!("{} [{}]", rank.category.name(), values.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerbots_engine::cards::Rank;
    use pokerbots_engine::hand::Category;

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");

        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_board() {
        assert_eq!(format_board(&[]), "[]");
        let board = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ];
        let formatted = format_board(&board);
        assert!(formatted.starts_with("[A"));
        assert!(formatted.contains(" K"));
        assert!(formatted.ends_with(']'));
    }

    #[test]
    fn test_format_action() {
        assert_eq!(format_action(&PlayerAction::Fold), "fold");
        assert_eq!(format_action(&PlayerAction::Call), "call");
        assert_eq!(format_action(&PlayerAction::Raise(150)), "raise to 150");
    }

    #[test]
    fn test_format_rank_drops_unused_slots() {
        let rank = HandRank {
            category: Category::OnePair,
            tiebreakers: [14, 13, 9, 4, 0],
        };
        assert_eq!(format_rank(&rank), "One Pair [14, 13, 9, 4]");
    }
}
