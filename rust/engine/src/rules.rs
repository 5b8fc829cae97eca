use crate::errors::GameError;
use crate::round::Outcome;

/// Highest total a hand may hold without busting.
pub const BUST_LIMIT: u32 = 21;

/// The dealer keeps drawing while its total is below this value.
pub const DEALER_STANDS_AT: u32 = 17;

/// Bet used until the player places a different one.
pub const DEFAULT_BET: u32 = 10;

/// Balance given to a player with nothing persisted.
pub const STARTING_BALANCE: i64 = 100;

/// Whether the dealer takes another card at `total`.
pub fn dealer_should_draw(total: u32) -> bool {
    total < DEALER_STANDS_AT
}

/// Compares final totals once the dealer has finished drawing.
///
/// The player has already been checked for a bust. A dealer bust wins for the
/// player regardless of the player's total; a player win on exactly 21 is the
/// natural bonus.
///
/// ```
/// use coinjack_engine::round::Outcome;
/// use coinjack_engine::rules::showdown;
///
/// assert_eq!(showdown(20, 23), Outcome::DealerBust);
/// assert_eq!(showdown(21, 19), Outcome::PlayerWinNatural);
/// assert_eq!(showdown(21, 21), Outcome::Tie);
/// ```
pub fn showdown(player_total: u32, dealer_total: u32) -> Outcome {
    if dealer_total > BUST_LIMIT {
        Outcome::DealerBust
    } else if dealer_total > player_total {
        Outcome::DealerWin
    } else if dealer_total == player_total {
        Outcome::Tie
    } else if player_total == BUST_LIMIT {
        Outcome::PlayerWinNatural
    } else {
        Outcome::PlayerWin
    }
}

/// Validates a proposed bet against the current balance.
///
/// # Errors
///
/// Returns [`GameError::InvalidBet`] unless `0 < amount <= balance`.
///
/// ```
/// use coinjack_engine::errors::GameError;
/// use coinjack_engine::rules::validate_bet;
///
/// assert_eq!(validate_bet(25, 100), Ok(25));
/// assert!(matches!(validate_bet(0, 100), Err(GameError::InvalidBet { .. })));
/// assert!(matches!(validate_bet(101, 100), Err(GameError::InvalidBet { .. })));
/// ```
pub fn validate_bet(amount: i64, balance: i64) -> Result<u32, GameError> {
    if amount <= 0 || amount > balance {
        return Err(GameError::InvalidBet { amount, balance });
    }
    u32::try_from(amount).map_err(|_| GameError::InvalidBet { amount, balance })
}
