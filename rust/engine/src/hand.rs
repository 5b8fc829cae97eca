use crate::cards::Card;
use crate::rules::BUST_LIMIT;

/// Score contribution of a single card.
pub fn card_value(card: Card) -> u32 {
    card.rank.points()
}

/// Plain sum of [`card_value`] over `cards`.
///
/// Multiple Aces are not re-valued, so two Aces total 22.
///
/// ```
/// use coinjack_engine::cards::{Card, Rank, Suit};
/// use coinjack_engine::hand::hand_total;
///
/// let cards = [
///     Card::new(Rank::King, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Spades),
/// ];
/// assert_eq!(hand_total(&cards), 21);
/// ```
pub fn hand_total(cards: &[Card]) -> u32 {
    cards.iter().map(|&c| card_value(c)).sum()
}

/// Cards held by one side of the table, in the order they were drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    total: u32,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a card and returns the recomputed total.
    pub fn push(&mut self, card: Card) -> u32 {
        self.cards.push(card);
        self.total = hand_total(&self.cards);
        self.total
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_bust(&self) -> bool {
        self.total > BUST_LIMIT
    }
}
