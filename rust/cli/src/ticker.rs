//! One-second heartbeat for the depletion countdown.
//!
//! The interactive loop blocks on stdin, so instead of a background timer it
//! asks its [`TickSource`] how many whole seconds passed since the last poll
//! and delivers that many ticks to the table.

use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);

pub trait TickSource {
    /// Whole seconds elapsed since the previous poll.
    fn poll(&mut self) -> u32;

    /// Blocks until the next tick is due and consumes it.
    fn wait_tick(&mut self);
}

/// Ticks derived from the monotonic clock.
#[derive(Debug)]
pub struct WallClock {
    last: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl TickSource for WallClock {
    fn poll(&mut self) -> u32 {
        let elapsed = self.last.elapsed();
        let ticks = elapsed.as_secs();
        // carry the sub-second remainder into the next poll
        self.last += TICK * ticks as u32;
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    fn wait_tick(&mut self) {
        let due = self.last + TICK;
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
        self.last = due;
    }
}

/// Scripted ticks: each poll hands out the next queued count, and waiting
/// never blocks.
#[derive(Debug, Default)]
pub struct ManualTicks {
    queued: std::collections::VecDeque<u32>,
    pub waited: u32,
}

impl ManualTicks {
    pub fn new(polls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queued: polls.into_iter().collect(),
            waited: 0,
        }
    }
}

impl TickSource for ManualTicks {
    fn poll(&mut self) -> u32 {
        self.queued.pop_front().unwrap_or(0)
    }

    fn wait_tick(&mut self) {
        self.waited += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_starts_at_zero() {
        let mut clock = WallClock::new();
        assert_eq!(clock.poll(), 0);
    }

    #[test]
    fn manual_ticks_drain_in_order() {
        let mut ticks = ManualTicks::new([3, 0, 7]);
        assert_eq!(ticks.poll(), 3);
        assert_eq!(ticks.poll(), 0);
        assert_eq!(ticks.poll(), 7);
        assert_eq!(ticks.poll(), 0);
        ticks.wait_tick();
        assert_eq!(ticks.waited, 1);
    }
}
