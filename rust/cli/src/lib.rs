//! # pokerbots CLI
//!
//! Headless driver for the `pokerbots-engine` tables: bots play each other,
//! single hands are dealt for inspection and card sets are ranked.
//!
//! The entry point is [`run`], which parses arguments and dispatches to a
//! subcommand, writing to the streams it is handed.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokerbots", "sim", "--bots", "baseline,random", "--hands", "100"];
//! let code = pokerbots_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Subcommands
//!
//! - `sim`: bots play N hands, optionally recorded as JSONL
//! - `deal`: deal one hand and show hole cards, blinds and acting order
//! - `eval`: rank 5 to 7 cards
//! - `cfg`: show the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, PokerbotsCli};
use commands::{handle_cfg_command, handle_deal_command, handle_eval_command, handle_sim_command};

pub use error::CliError;

/// Parses `args` and runs the subcommand.
///
/// Returns [`exit_code::SUCCESS`], [`exit_code::ERROR`] for any failure, or
/// [`exit_code::INTERRUPTED`] when a simulation stopped early. Help and
/// version go to `out`; usage errors go to `err`.
///
/// ```
/// use std::io;
/// let args = vec!["pokerbots", "eval", "--cards", "As Ks Qs Js Ts"];
/// let mut out = Vec::new();
/// let code = pokerbots_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["sim", "deal", "eval", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokerbotsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Pokerbots CLI").is_err()
                        || writeln!(err, "Usage: pokerbots <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    let _ = writeln!(err, "\nFor full help, run: pokerbots --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let outcome = match cli.cmd {
        Commands::Sim {
            bots,
            hands,
            seed,
            output,
        } => handle_sim_command(&bots, hands, seed, output, out, err),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match outcome {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
