//! `deal`: start a single hand and show what everyone was dealt.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_card;
use pokerbots_engine::engine::HandEngine;
use pokerbots_engine::provider::Seat;
use std::io::Write;

/// Deals one hand at a table of `players` manual seats named `P1`, `P2`, ...
///
/// Prints the seed (drawn at random when none is given, so the deal can be
/// reproduced), the blinds, every seat's hole cards and the pre-flop acting
/// order.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let table = config::load()?.to_table_config(Some(base_seed));
    let roster = (1..=players)
        .map(|i| (format!("P{}", i), Seat::Manual))
        .collect();
    let mut engine = HandEngine::new(table, roster)?;
    engine.start_hand()?;

    let name = |seat: usize| engine.players()[seat].name().to_string();
    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Dealer: {}", name(engine.dealer()))?;
    writeln!(
        out,
        "Blinds: {} posts {}, {} posts {}",
        name(engine.small_blind_seat()),
        table.small_blind,
        name(engine.big_blind_seat()),
        table.big_blind
    )?;
    for p in engine.players() {
        let hole: Vec<String> = p.hole_cards().iter().map(format_card).collect();
        writeln!(out, "Hole {}: {}", p.name(), hole.join(" "))?;
    }
    let order: Vec<String> = engine.acting_order().iter().map(|&s| name(s)).collect();
    writeln!(out, "Acting order: {}", order.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_with_seed() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), 3, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("Hole P1:"));
        assert!(output.contains("Hole P3:"));
        // dealer P1 posts small, P2 big, P3 opens
        assert!(output.contains("Acting order: P3 P1 P2"), "{}", output);
    }

    #[test]
    fn test_deal_rejects_single_player() {
        let mut out = Vec::new();
        let e = handle_deal_command(Some(1), 1, &mut out).unwrap_err();
        assert!(matches!(e, CliError::Engine(_)));
    }
}
