use thiserror::Error;

use crate::round::{Action, Phase};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted")]
    EmptyDeck,
    #[error("Invalid bet amount: {amount} (balance: {balance})")]
    InvalidBet { amount: i64, balance: i64 },
    #[error("No round in progress")]
    NoRound,
    #[error("Cannot {action} while the round is {phase}")]
    IllegalTransition { action: Action, phase: Phase },
    #[error("Insufficient coins for a bet of {bet} (balance: {balance})")]
    InsufficientBalance { bet: u32, balance: i64 },
}
