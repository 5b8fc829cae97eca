//! # Sim Command
//!
//! Plays rounds without a human: the player draws while below `stand_on`
//! and then stands. Runs against an in-memory store and delivers no ticks,
//! so an empty bankroll is never restored and ends the run early.

use super::resolve_config;
use crate::error::CliError;
use crate::formatters::{format_delta, format_outcome_key};
use coinjack_engine::cards::Card;
use coinjack_engine::ports::{MemoryStore, TableView};
use coinjack_engine::round::{Outcome, Side};
use coinjack_engine::rules::STARTING_BALANCE;
use coinjack_engine::table::{Table, TableConfig};
use std::collections::BTreeMap;
use std::io::Write;

/// View that renders nothing.
struct SilentView;

impl TableView for SilentView {
    fn render_card(&mut self, _side: Side, _card: Card) {}
    fn display_message(&mut self, _text: &str) {}
    fn set_input_enabled(&mut self, _draw: bool, _stand: bool) {}
}

type SimTable = Table<SilentView, MemoryStore>;

pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    stand_on: u32,
    bet: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = resolve_config(err)?;
    let config = TableConfig {
        seed: seed.or(cfg.seed),
        bet: bet.unwrap_or(cfg.bet),
    };
    let mut table = Table::open(SilentView, MemoryStore::default(), config);
    writeln!(
        out,
        "sim: rounds={} seed={} stand_on={} bet={}",
        rounds,
        table.seed(),
        stand_on,
        table.bet()
    )?;

    let mut counts: BTreeMap<&'static str, u32> = Outcome::ALL
        .iter()
        .map(|&o| (format_outcome_key(o), 0))
        .collect();
    let mut played = 0u32;
    let mut stopped_early = false;

    for i in 0..rounds {
        if i > 0 && table.reset_round().is_err() {
            stopped_early = true;
            break;
        }
        if table.round().is_none() {
            stopped_early = true;
            break;
        }
        let outcome = play_round(&mut table, stand_on)?;
        *counts.entry(format_outcome_key(outcome)).or_insert(0) += 1;
        played += 1;
    }

    for (key, n) in &counts {
        writeln!(out, "{}: {}", key, n)?;
    }
    writeln!(out, "Rounds played: {}", played)?;
    if stopped_early {
        writeln!(out, "Stopped early: balance cannot cover the bet")?;
    }
    writeln!(out, "Final balance: {}", table.balance())?;
    writeln!(out, "Net: {}", format_delta(table.balance() - STARTING_BALANCE))?;
    Ok(())
}

fn play_round(table: &mut SimTable, stand_on: u32) -> Result<Outcome, CliError> {
    loop {
        let total = match table.round() {
            Some(round) => round.player().total(),
            None => return Err(CliError::Engine("round closed mid-play".to_string())),
        };
        if total >= stand_on {
            break;
        }
        if let Some(outcome) = table.hit()?.outcome {
            return Ok(outcome);
        }
    }
    Ok(table.stand()?.outcome)
}
