//! `eval`: rank a set of cards.

use crate::error::CliError;
use crate::formatters::{format_board, format_rank};
use pokerbots_engine::cards::parse_cards;
use pokerbots_engine::hand::{best_five, evaluate};
use std::collections::HashSet;
use std::io::Write;

/// Parses 5 to 7 distinct cards and prints their rank and best five.
pub fn handle_eval_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if !(5..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "eval needs 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("duplicate card: {}", dup)));
    }

    let rank = evaluate(&cards);
    writeln!(out, "Cards: {}", format_board(&cards))?;
    writeln!(out, "Hand: {}", format_rank(&rank))?;
    writeln!(out, "Best five: {}", format_board(&best_five(&cards)))?;
    Ok(())
}
