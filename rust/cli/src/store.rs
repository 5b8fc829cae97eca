//! JSON state file holding the balance between sessions.
//!
//! ```json
//! { "balance": 90, "marker": "none" }
//! ```

use crate::error::CliError;
use crate::io_utils::{ensure_parent_dir, read_text};
use coinjack_engine::ports::{BalanceStore, ResetMarker};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFile {
    #[serde(default)]
    pub balance: Option<i64>,
    #[serde(default)]
    pub marker: ResetMarker,
}

/// [`BalanceStore`] backed by a JSON file, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    state: StateFile,
}

impl FileStore {
    /// Opens the state file at `path`. A missing file is an empty state.
    ///
    /// # Errors
    ///
    /// [`CliError::InvalidInput`] when the file exists but cannot be read or
    /// parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CliError> {
        let path = path.into();
        let state = if path.exists() {
            let text = read_text(&path).map_err(CliError::InvalidInput)?;
            serde_json::from_str(&text).map_err(|e| {
                CliError::InvalidInput(format!("Corrupt state file {}: {}", path.display(), e))
            })?
        } else {
            StateFile::default()
        };
        tracing::debug!(path = %path.display(), ?state, "state file loaded");
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &StateFile {
        &self.state
    }

    fn save(&self) {
        if let Err(e) = self.try_save() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist state");
        }
    }

    fn try_save(&self) -> Result<(), String> {
        ensure_parent_dir(&self.path)?;
        let json = serde_json::to_string_pretty(&self.state).map_err(|e| e.to_string())?;
        std::fs::write(&self.path, json).map_err(|e| e.to_string())
    }
}

impl BalanceStore for FileStore {
    fn load_balance(&mut self) -> Option<i64> {
        self.state.balance
    }

    fn persist_balance(&mut self, balance: i64) {
        self.state.balance = Some(balance);
        self.save();
    }

    fn load_marker(&mut self) -> ResetMarker {
        self.state.marker
    }

    fn persist_marker(&mut self, marker: ResetMarker) {
        self.state.marker = marker;
        self.save();
    }
}
