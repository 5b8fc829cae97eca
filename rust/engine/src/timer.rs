//! Depletion countdown.
//!
//! The timer is armed when the balance is left at or below zero and counts
//! down one second per tick. If the balance turns positive first the
//! countdown is cancelled; otherwise expiry tells the owner to restore the
//! balance to [`RESET_BALANCE`]. The timer itself never touches the balance.

/// Length of the countdown in seconds (ticks).
pub const COUNTDOWN_SECS: u32 = 60;

/// Balance restored when the countdown expires.
pub const RESET_BALANCE: i64 = 100;

/// Effect of observing a balance change.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TimerChange {
    /// Countdown started at [`COUNTDOWN_SECS`]
    Armed,
    /// Running countdown stopped because the balance is positive again
    Cancelled,
    Unchanged,
}

/// Effect of one tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tick {
    /// Timer inactive; nothing happened
    Idle,
    /// Seconds left after this tick
    Counting(u32),
    /// Countdown reached zero; the timer is inactive again
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepletionTimer {
    active: bool,
    remaining: u32,
}

impl Default for DepletionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl DepletionTimer {
    pub fn new() -> Self {
        Self {
            active: false,
            remaining: COUNTDOWN_SECS,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds left on the countdown. Reads [`COUNTDOWN_SECS`] while inactive.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Reacts to the balance left by a mutation.
    ///
    /// ```
    /// use coinjack_engine::timer::{DepletionTimer, TimerChange};
    ///
    /// let mut timer = DepletionTimer::new();
    /// assert_eq!(timer.observe(0), TimerChange::Armed);
    /// assert_eq!(timer.observe(-10), TimerChange::Unchanged);
    /// assert_eq!(timer.observe(20), TimerChange::Cancelled);
    /// assert!(!timer.is_active());
    /// ```
    pub fn observe(&mut self, balance: i64) -> TimerChange {
        match (balance <= 0, self.active) {
            (true, false) => {
                self.active = true;
                self.remaining = COUNTDOWN_SECS;
                tracing::info!(seconds = COUNTDOWN_SECS, "depletion timer armed");
                TimerChange::Armed
            }
            (false, true) => {
                self.active = false;
                self.remaining = COUNTDOWN_SECS;
                tracing::info!(balance, "depletion timer cancelled");
                TimerChange::Cancelled
            }
            _ => TimerChange::Unchanged,
        }
    }

    pub fn tick(&mut self) -> Tick {
        if !self.active {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            self.remaining = COUNTDOWN_SECS;
            tracing::info!("depletion timer expired");
            Tick::Expired
        } else {
            Tick::Counting(self.remaining)
        }
    }
}
