//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

pub fn write_help(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  h, hit      draw a card")?;
    writeln!(out, "  s, stand    stop drawing and let the dealer play")?;
    writeln!(out, "  n, new      start a new round")?;
    writeln!(out, "  bet <N>     set the bet for the next round")?;
    writeln!(out, "  wait        sit out the depletion countdown")?;
    writeln!(out, "  status      show coins, bet and the current round")?;
    writeln!(out, "  q, quit     leave the table")
}
