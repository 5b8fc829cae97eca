//! Card, hand and outcome formatters for terminal display.
//!
//! Unicode suit symbols are used where the terminal supports them, with an
//! ASCII letter fallback otherwise.
//!
//! ## Example
//!
//! ```rust
//! use coinjack_engine::cards::{Card, Rank, Suit};
//! use coinjack_cli::formatters::{format_card, format_hand};
//!
//! let ten_hearts = Card::new(Rank::Ten, Suit::Hearts);
//! assert!(format_card(&ten_hearts) == "10♥" || format_card(&ten_hearts) == "10h");
//! assert!(format_hand(&[ten_hearts]).starts_with("[10"));
//! ```

use coinjack_engine::cards::{Card, Suit};
use coinjack_engine::round::Outcome;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Card as rank followed by suit, e.g. "10♥" or "10h".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// Format cards in bracket notation like "[A♠ K♥]", or "[]" if empty.
pub fn format_hand(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Stable machine-readable outcome name, as used in `sim` output.
pub fn format_outcome_key(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "player_bust",
        Outcome::DealerBust => "dealer_bust",
        Outcome::DealerWin => "dealer_win",
        Outcome::PlayerWin => "player_win",
        Outcome::PlayerWinNatural => "player_win_natural",
        Outcome::Tie => "tie",
    }
}

/// Signed coin change like "+20", "-10" or "0".
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinjack_engine::cards::Rank;

    #[test]
    fn empty_hand_formats_as_brackets() {
        assert_eq!(format_hand(&[]), "[]");
    }

    #[test]
    fn hand_joins_with_spaces() {
        let hand = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ];
        let s = format_hand(&hand);
        assert!(s == "[A♠ K♥]" || s == "[As Kh]");
    }

    #[test]
    fn outcome_keys_match_serde_names() {
        for outcome in Outcome::ALL {
            let json = serde_json::to_string(&outcome).unwrap();
            assert_eq!(json.trim_matches('"'), format_outcome_key(outcome));
        }
    }

    #[test]
    fn delta_sign() {
        assert_eq!(format_delta(20), "+20");
        assert_eq!(format_delta(-10), "-10");
        assert_eq!(format_delta(0), "0");
    }
}
