//! # coinjack-engine: Twenty-One Round Engine
//!
//! Core of a single-player twenty-one table played for coins against a
//! dealer with a fixed drawing policy. The crate holds all game decisions and
//! none of the I/O: display and persistence are reached through the traits in
//! [`ports`].
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand scoring
//! - [`rules`] - Table constants, dealer policy, showdown and bet validation
//! - [`round`] - Round state machine (draw, stand, outcome)
//! - [`settlement`] - Balance deltas per outcome
//! - [`timer`] - Depletion countdown that restores an empty balance
//! - [`table`] - Controller owning balance, bet, round and timer
//! - [`ports`] - View and balance store traits
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use coinjack_engine::deck::Deck;
//! use coinjack_engine::round::Round;
//!
//! // Same seed produces the same shuffle
//! let mut round = Round::new(10, Deck::new_with_seed(42));
//! round.player_draw().unwrap();
//! let resolution = round.player_stand().unwrap();
//! assert!(resolution.dealer_total >= 17);
//! println!("Outcome: {}", resolution.outcome);
//! ```
//!
//! ## Settlement
//!
//! ```rust
//! use coinjack_engine::round::Outcome;
//! use coinjack_engine::settlement::settlement_delta;
//!
//! assert_eq!(settlement_delta(Outcome::DealerBust, 10), 20);
//! assert_eq!(settlement_delta(Outcome::Tie, 10), 0);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod ports;
pub mod round;
pub mod rules;
pub mod settlement;
pub mod table;
pub mod timer;
