//! Command handler modules for the coinjack CLI.
//!
//! Each subcommand lives in its own file and exposes a
//! `handle_COMMAND_command(...) -> Result<(), CliError>` function. Output
//! streams are passed in as `&mut dyn Write` so tests can capture them.

mod balance;
mod cfg;
mod play;
mod sim;

pub use balance::handle_balance_command;
pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Loads configuration, reporting a bad file or variable on `err`.
pub(crate) fn resolve_config(err: &mut dyn Write) -> Result<Config, CliError> {
    match config::load_with_sources() {
        Ok(resolved) => Ok(resolved.config),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            Err(CliError::Config(e.to_string()))
        }
    }
}
