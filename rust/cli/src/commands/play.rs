//! # Play Command
//!
//! Interactive table. Each prompt line is parsed into a [`TableCommand`] and
//! applied to the engine [`Table`]; whatever the table rendered is then
//! written out. Countdown ticks that fell due while the prompt was waiting
//! are delivered before the next line is handled.
//!
//! On `quit` or end of input the session is closed, which leaves a pending
//! reset in the state file when the balance is empty.

use super::resolve_config;
use crate::error::CliError;
use crate::formatters::{format_delta, format_hand};
use crate::io_utils::read_stdin_line;
use crate::store::FileStore;
use crate::ticker::TickSource;
use crate::ui;
use crate::validation::{ParseResult, TableCommand, parse_table_command};
use crate::view::TerminalView;
use coinjack_engine::errors::GameError;
use coinjack_engine::ports::ResetMarker;
use coinjack_engine::round::Phase;
use coinjack_engine::table::{Table, TableConfig};
use coinjack_engine::timer::Tick;
use std::io::{BufRead, ErrorKind, Write};

type PlayTable = Table<TerminalView, FileStore>;

/// Handle the play command.
///
/// Flags take precedence over the resolved configuration.
///
/// # Errors
///
/// [`CliError::Config`] for bad configuration, [`CliError::InvalidInput`] for
/// an unreadable state file, [`CliError::Io`] when output cannot be written.
pub fn handle_play_command(
    seed: Option<u64>,
    bet: Option<u32>,
    state: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
    ticks: &mut dyn TickSource,
) -> Result<(), CliError> {
    let cfg = resolve_config(err)?;
    let table_config = TableConfig {
        seed: seed.or(cfg.seed),
        bet: bet.unwrap_or(cfg.bet),
    };
    let store = FileStore::open(state.unwrap_or(cfg.state_path))?;

    let mut table = Table::open(TerminalView::new(), store, table_config);
    // closed even when the session fails
    let session = run_session(&mut table, out, err, stdin, ticks);
    let marker = table.close();
    session?;

    writeln!(out, "Final balance: {}", table.balance())?;
    if marker == ResetMarker::PendingReset {
        writeln!(out, "Out of coins. You will start with 100 coins next time.")?;
    }
    Ok(())
}

fn run_session(
    table: &mut PlayTable,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
    ticks: &mut dyn TickSource,
) -> Result<(), CliError> {
    writeln!(
        out,
        "Coinjack table (seed {}). Type 'help' for commands.",
        table.seed()
    )?;
    flush_view(table, out)?;

    loop {
        deliver_ticks(table, ticks.poll());
        flush_view(table, out)?;

        write!(out, "> ")?;
        out.flush()?;
        let line = match read_stdin_line(stdin) {
            Ok(Some(line)) => line,
            Ok(None) => return Ok(()),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                ui::write_error(err, "Input is not valid UTF-8")?;
                continue;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {
                return Err(CliError::Interrupted(e.to_string()));
            }
            Err(e) => return Err(CliError::Io(e)),
        };
        if line.is_empty() {
            continue;
        }

        match parse_table_command(&line) {
            ParseResult::Quit => return Ok(()),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Command(cmd) => apply(table, cmd, ticks, out, err)?,
        }
        flush_view(table, out)?;
    }
}

fn apply(
    table: &mut PlayTable,
    cmd: TableCommand,
    ticks: &mut dyn TickSource,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        TableCommand::Hit => match table.hit() {
            Ok(draw) if draw.outcome.is_some() => new_round_hint(table, out)?,
            Ok(_) => {}
            Err(e) => report(err, &e)?,
        },
        TableCommand::Stand => match table.stand() {
            Ok(_) => new_round_hint(table, out)?,
            Err(e) => report(err, &e)?,
        },
        // refusal is already on the table
        TableCommand::NewRound => {
            let _ = table.reset_round();
        }
        TableCommand::Bet(amount) => {
            if let Ok(bet) = table.place_bet(amount) {
                writeln!(out, "Bet set to {} from the next round.", bet)?;
            }
        }
        TableCommand::Wait => {
            if !table.timer().is_active() {
                writeln!(out, "No countdown running.")?;
            }
            while table.timer().is_active() {
                ticks.wait_tick();
                table.on_tick();
                flush_view(table, out)?;
            }
        }
        TableCommand::Status => write_status(table, out)?,
        TableCommand::Help => ui::write_help(out)?,
    }
    Ok(())
}

fn new_round_hint(table: &mut PlayTable, out: &mut dyn Write) -> Result<(), CliError> {
    flush_view(table, out)?;
    if let Some(settlement) = table.last_settlement() {
        writeln!(out, "Net: {} coins", format_delta(settlement.delta))?;
    }
    writeln!(out, "Type 'n' for a new round.")?;
    Ok(())
}

/// Engine refusals the table did not already show.
fn report(err: &mut dyn Write, e: &GameError) -> Result<(), CliError> {
    match e {
        GameError::NoRound | GameError::IllegalTransition { .. } => {
            ui::write_error(err, &e.to_string())?
        }
        GameError::EmptyDeck
        | GameError::InvalidBet { .. }
        | GameError::InsufficientBalance { .. } => {}
    }
    Ok(())
}

fn deliver_ticks(table: &mut PlayTable, due: u32) {
    for _ in 0..due {
        if table.on_tick() == Tick::Idle {
            break;
        }
    }
}

fn flush_view(table: &mut PlayTable, out: &mut dyn Write) -> Result<(), CliError> {
    for line in table.view_mut().drain() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_status(table: &PlayTable, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Coins: {} | Bet: {}", table.balance(), table.bet())?;
    match table.round() {
        Some(round) => {
            let phase = match round.phase() {
                Phase::Settled(outcome) => format!("settled, {}", outcome.message()),
                other => other.to_string(),
            };
            writeln!(
                out,
                "Round: {} | bet {} | player {} {} | dealer {} {}",
                phase,
                round.bet(),
                format_hand(round.player().cards()),
                round.player().total(),
                format_hand(round.dealer().cards()),
                round.dealer().total()
            )?;
        }
        None => writeln!(out, "Round: none")?,
    }
    if table.timer().is_active() {
        writeln!(out, "Reset in {} seconds", table.timer().remaining())?;
    }
    Ok(())
}
