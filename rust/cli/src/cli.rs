//! Command-line definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pokerbots",
    version,
    about = "Headless Texas Hold'em tables for bots"
)]
pub struct PokerbotsCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands between bots and report who won them
    Sim {
        /// Comma-separated bot kinds, one seat each
        #[arg(long, default_value = "baseline,steady")]
        bots: String,
        #[arg(long)]
        hands: u64,
        #[arg(long)]
        seed: Option<u64>,
        /// JSONL file receiving one record per hand
        #[arg(long)]
        output: Option<String>,
    },
    /// Start one hand and show the deal
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 2)]
        players: usize,
    },
    /// Rank 5 to 7 cards, e.g. --cards "As Kd Qh Jc Ts"
    Eval {
        #[arg(long)]
        cards: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
