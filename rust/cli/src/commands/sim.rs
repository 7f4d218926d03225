//! `sim`: bots play hands against each other.
//!
//! Games restart whenever one bot holds every chip, so any number of hands
//! can be played. With `--output` each finished hand is appended to a JSONL
//! file as a [`HandRecord`](pokerbots_engine::logger::HandRecord).
//!
//! # Environment Variables
//!
//! - `POKERBOTS_SIM_BREAK_AFTER`: stop after N hands and exit as interrupted
//!
//! ```no_run
//! use pokerbots_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! handle_sim_command(
//!     "baseline,steady,random",
//!     1000,
//!     Some(42),
//!     Some("data/sim.jsonl".to_string()),
//!     &mut io::stdout(),
//!     &mut io::stderr(),
//! )
//! .unwrap();
//! ```

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use pokerbots_ai::{AI_KINDS, create_ai, create_ai_seeded};
use pokerbots_engine::config::{MAX_PLAYERS, MIN_PLAYERS};
use pokerbots_engine::engine::HandEngine;
use pokerbots_engine::game::{HandResult, WinType};
use pokerbots_engine::logger::HandLogger;
use pokerbots_engine::provider::{DecisionProvider, Seat};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Hands won by one seat over the run. A split pot counts for every winner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Tally {
    wins: u64,
    by_fold: u64,
    by_showdown: u64,
}

pub fn handle_sim_command(
    bots: &str,
    hands: u64,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let kinds = parse_bots(bots)?;
    let table = config::load()?.to_table_config(seed);

    let mut seeds = table.seed.map(ChaCha20Rng::seed_from_u64);
    let mut roster = Vec::with_capacity(kinds.len());
    for (name, kind) in seat_names(&kinds).into_iter().zip(&kinds) {
        let bot: Option<Box<dyn DecisionProvider>> = match seeds.as_mut() {
            Some(rng) => create_ai_seeded(kind, rng.random()),
            None => create_ai(kind),
        };
        let bot = bot.ok_or_else(|| CliError::InvalidInput(format!("Unknown bot: {}", kind)))?;
        roster.push((name, Seat::Autonomous(bot)));
    }
    let mut engine = HandEngine::new(table, roster)?;

    if let Some(path) = output.as_deref() {
        let path = std::path::Path::new(path);
        if let Err(e) = ensure_parent_dir(path) {
            ui::write_error(err, &e)?;
            return Err(CliError::Io(std::io::Error::other(e)));
        }
        let logger = match HandLogger::create(path) {
            Ok(l) => l.with_seed(table.seed),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open output file: {}", e))?;
                return Err(CliError::Io(e));
            }
        };
        engine.set_sink(Box::new(logger));
    }

    let break_after = std::env::var("POKERBOTS_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    let mut tallies = vec![Tally::default(); engine.players().len()];
    for i in 0..hands {
        if break_after == Some(i) {
            writeln!(out, "Interrupted: saved {}/{}", i, hands)?;
            return Err(CliError::Interrupted(format!(
                "stopped after {} of {} hands",
                i, hands
            )));
        }
        if i == 0 {
            engine.start_hand()?;
        } else {
            engine.next_hand()?;
        }
        let result = engine.run_hand()?;
        tracing::debug!(
            hand = i + 1,
            game = engine.game_number(),
            summary = %result.summary(),
            "hand finished"
        );
        record(&engine, &result, &mut tallies);
    }
    engine.take_sink();

    writeln!(out, "Simulated: {} hands", hands)?;
    writeln!(out, "Games: {}", engine.game_number())?;
    for (p, t) in engine.players().iter().zip(&tallies) {
        writeln!(
            out,
            "{:<14} wins {:>6}  fold {:>6}  showdown {:>6}  stack {:>7}",
            p.name(),
            t.wins,
            t.by_fold,
            t.by_showdown,
            p.stack()
        )?;
    }
    if let Some(path) = output {
        writeln!(out, "Hands written to {}", path)?;
    }
    Ok(())
}

fn record(engine: &HandEngine, result: &HandResult, tallies: &mut [Tally]) {
    for winner in &result.winners {
        let Some(seat) = engine.players().iter().position(|p| p.name() == winner.as_str()) else {
            continue;
        };
        let t = &mut tallies[seat];
        t.wins += 1;
        match result.win_type {
            WinType::Fold => t.by_fold += 1,
            WinType::Showdown => t.by_showdown += 1,
        }
    }
}

/// Splits `baseline,steady,...` into lowercase bot kinds.
fn parse_bots(bots: &str) -> Result<Vec<String>, CliError> {
    let kinds: Vec<String> = bots
        .split(',')
        .map(|k| k.trim().to_ascii_lowercase())
        .filter(|k| !k.is_empty())
        .collect();
    if let Some(bad) = kinds.iter().find(|k| !AI_KINDS.contains(&k.as_str())) {
        return Err(CliError::InvalidInput(format!(
            "Unknown bot: {} (expected one of: {})",
            bad,
            AI_KINDS.join(", ")
        )));
    }
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&kinds.len()) {
        return Err(CliError::InvalidInput(format!(
            "sim needs {} to {} bots, got {}",
            MIN_PLAYERS,
            MAX_PLAYERS,
            kinds.len()
        )));
    }
    Ok(kinds)
}

/// Seat names are the bot kinds, numbered when a kind is seated twice.
fn seat_names(kinds: &[String]) -> Vec<String> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let total = kinds.iter().filter(|k| *k == kind).count();
            if total == 1 {
                kind.clone()
            } else {
                let nth = kinds[..=i].iter().filter(|k| *k == kind).count();
                format!("{}-{}", kind, nth)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_kinds_get_numbered() {
        let kinds = parse_bots("baseline, Random,baseline").unwrap();
        assert_eq!(
            seat_names(&kinds),
            vec!["baseline-1", "random", "baseline-2"]
        );
    }

    #[test]
    fn unknown_and_lonely_bots_are_rejected() {
        assert!(matches!(parse_bots("baseline,shark"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_bots("baseline"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_bots(" , "), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn zero_hands_is_an_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let e = handle_sim_command("baseline,steady", 0, Some(1), None, &mut out, &mut err)
            .unwrap_err();
        assert!(matches!(e, CliError::InvalidInput(_)));
        assert!(String::from_utf8(err).unwrap().contains("hands must be >= 1"));
    }
}
