//! Round state machine.
//!
//! A round opens with an empty hand on each side. The player draws zero or
//! more cards and then stands, after which the dealer draws to its fixed
//! threshold and the totals are compared. Every round ends in exactly one
//! [`Outcome`], reported once by the transition that reaches it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::rules::{dealer_should_draw, showdown};

/// Side of the table a card is dealt to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Dealer,
}

/// Player-initiated round actions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    Draw,
    Stand,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Draw => f.write_str("draw"),
            Action::Stand => f.write_str("stand"),
        }
    }
}

/// Terminal result of a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Player went over 21 while drawing
    PlayerBust,
    /// Dealer went over 21 while drawing
    DealerBust,
    /// Dealer finished with the higher total
    DealerWin,
    /// Player finished with the higher total
    PlayerWin,
    /// Player won holding exactly 21
    PlayerWinNatural,
    /// Equal totals
    Tie,
}

impl Outcome {
    pub const ALL: [Outcome; 6] = [
        Outcome::PlayerBust,
        Outcome::DealerBust,
        Outcome::DealerWin,
        Outcome::PlayerWin,
        Outcome::PlayerWinNatural,
        Outcome::Tie,
    ];

    /// Message shown to the player when the round ends this way.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::PlayerBust => "Player Busted! Dealer Wins!",
            Outcome::DealerBust => "Dealer Busted! Player Wins!",
            Outcome::DealerWin => "Dealer Wins!",
            Outcome::PlayerWin => "Player Wins!",
            Outcome::PlayerWinNatural => "Player Wins with 21! x5 your bet!",
            Outcome::Tie => "It's a Tie!",
        }
    }

    pub fn is_player_win(self) -> bool {
        matches!(
            self,
            Outcome::DealerBust | Outcome::PlayerWin | Outcome::PlayerWinNatural
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::PlayerBust => "player bust",
            Outcome::DealerBust => "dealer bust",
            Outcome::DealerWin => "dealer win",
            Outcome::PlayerWin => "player win",
            Outcome::PlayerWinNatural => "player win (21)",
            Outcome::Tie => "tie",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Player may draw or stand
    Open,
    /// Dealer is drawing
    Resolving,
    /// Finished with an outcome
    Settled(Outcome),
    /// Abandoned after the deck ran out; never settled
    Aborted,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Settled(_) | Phase::Aborted)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Open => f.write_str("open"),
            Phase::Resolving => f.write_str("resolving"),
            Phase::Settled(outcome) => write!(f, "settled ({})", outcome),
            Phase::Aborted => f.write_str("aborted"),
        }
    }
}

/// Result of a single player draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDraw {
    pub card: Card,
    pub total: u32,
    /// `Some(Outcome::PlayerBust)` when this draw ended the round
    pub outcome: Option<Outcome>,
}

/// Result of the player standing: the dealer's draws and the final outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub dealer_cards: Vec<Card>,
    pub dealer_total: u32,
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    bet: u32,
    phase: Phase,
}

impl Round {
    /// Opens a round with the bet fixed for its settlement.
    pub fn new(bet: u32, deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            bet,
            phase: Phase::Open,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Deals one card to the player.
    ///
    /// Going over 21 ends the round as [`Outcome::PlayerBust`]. Reaching
    /// exactly 21 leaves the round open.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalTransition`] outside the open phase and
    /// [`GameError::EmptyDeck`] if the deck is exhausted, which aborts the round.
    pub fn player_draw(&mut self) -> Result<PlayerDraw, GameError> {
        self.require_open(Action::Draw)?;
        let card = self.draw()?;
        let total = self.player.push(card);
        tracing::debug!(%card, total, "player draws");

        let outcome = if self.player.is_bust() {
            self.phase = Phase::Settled(Outcome::PlayerBust);
            Some(Outcome::PlayerBust)
        } else {
            None
        };
        Ok(PlayerDraw {
            card,
            total,
            outcome,
        })
    }

    /// Ends the player's turn and plays out the dealer.
    ///
    /// # Errors
    ///
    /// Same as [`Round::player_draw`].
    pub fn player_stand(&mut self) -> Result<Resolution, GameError> {
        self.require_open(Action::Stand)?;
        self.phase = Phase::Resolving;

        let mut dealer_cards = Vec::new();
        while dealer_should_draw(self.dealer.total()) {
            let card = self.draw()?;
            let total = self.dealer.push(card);
            tracing::debug!(%card, total, "dealer draws");
            dealer_cards.push(card);
        }

        let outcome = showdown(self.player.total(), self.dealer.total());
        self.phase = Phase::Settled(outcome);
        Ok(Resolution {
            dealer_cards,
            dealer_total: self.dealer.total(),
            outcome,
        })
    }

    fn require_open(&self, action: Action) -> Result<(), GameError> {
        if self.phase == Phase::Open {
            Ok(())
        } else {
            Err(GameError::IllegalTransition {
                action,
                phase: self.phase,
            })
        }
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        let drawn = self.deck.draw();
        if drawn.is_err() {
            self.phase = Phase::Aborted;
        }
        drawn
    }
}
