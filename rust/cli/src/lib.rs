//! # Coinjack CLI Library
//!
//! Command-line front end for the coinjack engine: an interactive table,
//! an automated simulator and a few inspection commands.
//!
//! The entry point is [`run`], which parses arguments and dispatches to a
//! subcommand handler.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["coinjack", "sim", "--rounds", "100", "--seed", "7"];
//! let code = coinjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Subcommands
//!
//! - `play`: sit at the table (reads commands from stdin)
//! - `sim`: play rounds with a fixed stand threshold
//! - `balance`: show the saved balance
//! - `cfg`: show resolved configuration

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod store;
pub mod ticker;
pub mod ui;
pub mod validation;
pub mod view;

use cli::{CoinjackCli, Commands};
use commands::{
    handle_balance_command, handle_cfg_command, handle_play_command, handle_sim_command,
};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "balance", "cfg"];

/// Parses `args` and runs the selected subcommand.
///
/// Returns the process exit code: [`exit_code::SUCCESS`], [`exit_code::ERROR`]
/// or [`exit_code::INTERRUPTED`].
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CoinjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play { seed, bet, state } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            let mut clock = ticker::WallClock::new();
            handle_play_command(seed, bet, state, out, err, &mut stdin_lock, &mut clock)
        }
        Commands::Sim {
            rounds,
            seed,
            stand_on,
            bet,
        } => handle_sim_command(rounds, seed, stand_on, bet, out, err),
        Commands::Balance { state } => handle_balance_command(state, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        // already reported on stderr by the handler
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(CliError::Interrupted(msg)) => {
            write_or_exit!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: coinjack <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: coinjack --help");
            exit_code::ERROR
        }
    }
}
