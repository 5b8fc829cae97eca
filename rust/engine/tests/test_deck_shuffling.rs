use std::collections::HashSet;

use coinjack_engine::cards::{all_ranks, all_suits, Card};
use coinjack_engine::deck::Deck;
use coinjack_engine::errors::GameError;

fn drain(deck: &mut Deck) -> Vec<Card> {
    let mut cards = Vec::new();
    while let Ok(c) = deck.draw() {
        cards.push(c);
    }
    cards
}

#[test]
fn fresh_deck_has_52_unique_cards() {
    for seed in [0, 1, 42, u64::MAX] {
        let mut deck = Deck::new_with_seed(seed);
        assert_eq!(deck.remaining(), 52);
        let cards = drain(&mut deck);
        assert_eq!(cards.len(), 52);
        let set: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(set.len(), 52, "seed {} produced duplicates", seed);
    }
}

#[test]
fn every_rank_and_suit_pair_present_once() {
    let mut deck = Deck::new_with_seed(7);
    let cards = drain(&mut deck);
    for suit in all_suits() {
        for rank in all_ranks() {
            let count = cards
                .iter()
                .filter(|c| c.suit == suit && c.rank == rank)
                .count();
            assert_eq!(count, 1, "{:?} of {:?}", rank, suit);
        }
    }
}

#[test]
fn remaining_strictly_decreases_on_draw() {
    let mut deck = Deck::new_with_seed(3);
    let mut last = deck.remaining();
    while deck.draw().is_ok() {
        assert_eq!(deck.remaining(), last - 1);
        last = deck.remaining();
    }
    assert_eq!(last, 0);
}

#[test]
fn drawing_from_exhausted_deck_errors() {
    let mut deck = Deck::new_with_seed(5);
    drain(&mut deck);
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let a = drain(&mut Deck::new_with_seed(12345));
    let b = drain(&mut Deck::new_with_seed(12345));
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let a = drain(&mut Deck::new_with_seed(1));
    let b = drain(&mut Deck::new_with_seed(2));
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}
