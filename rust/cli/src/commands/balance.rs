//! `balance`: prints what the state file holds without opening a table.

use super::resolve_config;
use crate::error::CliError;
use crate::store::FileStore;
use coinjack_engine::ports::ResetMarker;
use coinjack_engine::rules::STARTING_BALANCE;
use std::io::Write;

pub fn handle_balance_command(
    state: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = match state {
        Some(p) => p,
        None => resolve_config(err)?.state_path,
    };
    let store = FileStore::open(&path)?;

    match store.state().balance {
        Some(balance) => writeln!(out, "Balance: {}", balance)?,
        None => writeln!(
            out,
            "Balance: {} (no saved state at {})",
            STARTING_BALANCE,
            store.path().display()
        )?,
    }
    let marker = match store.state().marker {
        ResetMarker::None => "none",
        ResetMarker::PendingReset => "pending_reset (restored to 100 at next play)",
    };
    writeln!(out, "Marker: {}", marker)?;
    Ok(())
}
