//! Line-oriented terminal rendering of the table.
//!
//! The table notifies the view synchronously; the view queues lines and the
//! command loop writes them out with [`TerminalView::drain`], so write errors
//! surface in the loop rather than inside engine callbacks.

use crate::formatters::format_card;
use coinjack_engine::cards::Card;
use coinjack_engine::ports::TableView;
use coinjack_engine::round::Side;

#[derive(Debug, Default)]
pub struct TerminalView {
    lines: Vec<String>,
    totals: (u32, u32),
    totals_dirty: bool,
    countdown: Option<u32>,
    countdown_dirty: bool,
    input: (bool, bool),
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the draw and stand actions are currently offered.
    pub fn input_enabled(&self) -> (bool, bool) {
        self.input
    }

    pub fn countdown(&self) -> Option<u32> {
        self.countdown
    }

    /// Takes the queued output, ending with a score line if the totals moved
    /// and a timer line if the countdown changed.
    pub fn drain(&mut self) -> Vec<String> {
        let mut lines = std::mem::take(&mut self.lines);
        if self.totals_dirty {
            let (player, dealer) = self.totals;
            lines.push(format!("Score: player {} | dealer {}", player, dealer));
            self.totals_dirty = false;
        }
        if self.countdown_dirty {
            match self.countdown {
                Some(remaining) => lines.push(format!("Timer: {} seconds", remaining)),
                None => lines.push("Timer stopped.".to_string()),
            }
            self.countdown_dirty = false;
        }
        lines
    }
}

impl TableView for TerminalView {
    fn render_card(&mut self, side: Side, card: Card) {
        let who = match side {
            Side::Player => "Player",
            Side::Dealer => "Dealer",
        };
        self.lines.push(format!("{} draws {}", who, format_card(&card)));
    }

    fn display_message(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn set_input_enabled(&mut self, draw: bool, stand: bool) {
        self.input = (draw, stand);
    }

    fn show_totals(&mut self, player: u32, dealer: u32) {
        if self.totals != (player, dealer) {
            self.totals = (player, dealer);
            self.totals_dirty = true;
        }
    }

    fn show_balance(&mut self, balance: i64) {
        self.lines.push(format!("Coins: {}", balance));
    }

    fn show_countdown(&mut self, remaining: Option<u32>) {
        if self.countdown != remaining {
            self.countdown = remaining;
            self.countdown_dirty = true;
        }
    }

    fn clear_table(&mut self) {
        self.lines.push("--- new round ---".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinjack_engine::cards::{Rank, Suit};

    #[test]
    fn drain_collapses_score_updates() {
        let mut view = TerminalView::new();
        view.render_card(Side::Dealer, Card::new(Rank::Two, Suit::Clubs));
        view.show_totals(0, 2);
        view.render_card(Side::Dealer, Card::new(Rank::King, Suit::Clubs));
        view.show_totals(0, 12);

        let lines = view.drain();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Dealer draws 2"));
        assert_eq!(lines[2], "Score: player 0 | dealer 12");
        assert!(view.drain().is_empty());
    }

    #[test]
    fn countdown_line_only_on_change() {
        let mut view = TerminalView::new();
        view.show_countdown(Some(60));
        assert_eq!(view.drain(), vec!["Timer: 60 seconds".to_string()]);
        view.show_countdown(Some(60));
        assert!(view.drain().is_empty());
        view.show_countdown(None);
        assert_eq!(view.drain(), vec!["Timer stopped.".to_string()]);
    }
}
