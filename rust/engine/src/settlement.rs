use serde::{Deserialize, Serialize};

use crate::round::Outcome;

/// Balance change produced by a finished round.
///
/// Losses forfeit the bet; standard wins pay twice the bet and a natural
/// pays five times. The bet is never taken up front, so a win adds the full
/// payout to the balance.
///
/// ```
/// use coinjack_engine::round::Outcome;
/// use coinjack_engine::settlement::settlement_delta;
///
/// assert_eq!(settlement_delta(Outcome::PlayerBust, 10), -10);
/// assert_eq!(settlement_delta(Outcome::PlayerWinNatural, 10), 50);
/// ```
pub fn settlement_delta(outcome: Outcome, bet: u32) -> i64 {
    let bet = i64::from(bet);
    match outcome {
        Outcome::PlayerBust | Outcome::DealerWin => -bet,
        Outcome::Tie => 0,
        Outcome::DealerBust | Outcome::PlayerWin => 2 * bet,
        Outcome::PlayerWinNatural => 5 * bet,
    }
}

/// A settlement as applied to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub outcome: Outcome,
    pub bet: u32,
    pub delta: i64,
    pub balance_after: i64,
}

impl Settlement {
    /// Applies the outcome to `balance`, saturating at the `i64` bounds.
    pub fn apply(outcome: Outcome, bet: u32, balance: i64) -> Self {
        let delta = settlement_delta(outcome, bet);
        Self {
            outcome,
            bet,
            delta,
            balance_after: balance.saturating_add(delta),
        }
    }
}
