//! Shared fixtures for engine integration tests.
#![allow(dead_code)]

use coinjack_engine::cards::{Card, Rank, Suit};
use coinjack_engine::deck::Deck;
use coinjack_engine::ports::TableView;
use coinjack_engine::round::Side;

/// Everything the table told its view, in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub cards: Vec<(Side, Card)>,
    pub messages: Vec<String>,
    pub input: Option<(bool, bool)>,
    pub totals: (u32, u32),
    pub balance: Option<i64>,
    pub countdown: Option<u32>,
    pub clears: usize,
}

impl RecordingView {
    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl TableView for RecordingView {
    fn render_card(&mut self, side: Side, card: Card) {
        self.cards.push((side, card));
    }

    fn display_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn set_input_enabled(&mut self, draw: bool, stand: bool) {
        self.input = Some((draw, stand));
    }

    fn show_totals(&mut self, player: u32, dealer: u32) {
        self.totals = (player, dealer);
    }

    fn show_balance(&mut self, balance: i64) {
        self.balance = Some(balance);
    }

    fn show_countdown(&mut self, remaining: Option<u32>) {
        self.countdown = remaining;
    }

    fn clear_table(&mut self) {
        self.cards.clear();
        self.clears += 1;
    }
}

/// Card of the given rank; suits rotate so arranged decks stay distinct.
pub fn card(rank: Rank, nth: usize) -> Card {
    let suits = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
    Card::new(rank, suits[nth % 4])
}

/// Deck dealing `ranks` in order.
pub fn arranged(ranks: &[Rank]) -> Deck {
    Deck::from_cards(
        ranks
            .iter()
            .enumerate()
            .map(|(i, &r)| card(r, i))
            .collect(),
    )
}
