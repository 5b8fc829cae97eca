//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "coinjack",
    version,
    about = "Single-player twenty-one against a house dealer"
)]
pub struct CoinjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sit at the table and play interactively
    Play {
        /// Seed for the shuffle sequence (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Starting bet
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        bet: Option<u32>,
        /// State file holding the balance between sessions
        #[arg(long)]
        state: Option<String>,
    },
    /// Play rounds automatically with a fixed stand threshold
    Sim {
        #[arg(long)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Keep drawing while the player total is below this
        #[arg(long, default_value_t = 17, value_parser = clap::value_parser!(u32).range(1..=21))]
        stand_on: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        bet: Option<u32>,
    },
    /// Show the saved balance and reset marker
    Balance {
        #[arg(long)]
        state: Option<String>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
