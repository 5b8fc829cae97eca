//! `cfg`: resolved configuration with the source of each value.
//!
//! ```json
//! {
//!   "seed": { "value": null, "source": "default" },
//!   "bet": { "value": 10, "source": "default" },
//!   "state_path": { "value": "coinjack-state.json", "source": "default" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "bet": {
            "value": config.bet,
            "source": sources.bet,
        },
        "state_path": {
            "value": config.state_path,
            "source": sources.state_path,
        },
    });
    let text = serde_json::to_string_pretty(&display)
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;
    writeln!(out, "{}", text)?;
    Ok(())
}
