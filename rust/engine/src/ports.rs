//! Collaborator traits the table calls into.
//!
//! The engine has no display or storage code of its own. A front end
//! implements [`TableView`] to present the table and [`BalanceStore`] to keep
//! the balance between sessions.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::round::Side;

/// Presentation surface for the table.
///
/// All calls are notifications; the table never reads anything back.
pub trait TableView {
    fn render_card(&mut self, side: Side, card: Card);

    fn display_message(&mut self, text: &str);

    fn set_input_enabled(&mut self, draw: bool, stand: bool);

    fn show_totals(&mut self, _player: u32, _dealer: u32) {}

    fn show_balance(&mut self, _balance: i64) {}

    /// `Some(seconds)` while the depletion countdown runs, `None` when it is hidden.
    fn show_countdown(&mut self, _remaining: Option<u32>) {}

    /// Called when a new round replaces the cards on the table.
    fn clear_table(&mut self) {}
}

/// Marker left behind when a session ends with an empty balance.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetMarker {
    #[default]
    None,
    PendingReset,
}

/// Durable home of the balance.
///
/// Persist calls are fire-and-forget: a store that fails to write is expected
/// to report it through its own channel.
pub trait BalanceStore {
    fn load_balance(&mut self) -> Option<i64>;

    fn persist_balance(&mut self, balance: i64);

    fn load_marker(&mut self) -> ResetMarker;

    fn persist_marker(&mut self, marker: ResetMarker);
}

/// In-process store, used for simulations and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    pub balance: Option<i64>,
    pub marker: ResetMarker,
    /// Number of balance writes seen
    pub writes: usize,
}

impl MemoryStore {
    pub fn with_balance(balance: i64) -> Self {
        Self {
            balance: Some(balance),
            ..Self::default()
        }
    }
}

impl BalanceStore for MemoryStore {
    fn load_balance(&mut self) -> Option<i64> {
        self.balance
    }

    fn persist_balance(&mut self, balance: i64) {
        self.balance = Some(balance);
        self.writes += 1;
    }

    fn load_marker(&mut self) -> ResetMarker {
        self.marker
    }

    fn persist_marker(&mut self, marker: ResetMarker) {
        self.marker = marker;
    }
}
