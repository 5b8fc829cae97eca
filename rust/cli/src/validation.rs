//! Input parsing for the interactive table.
//!
//! Lines typed at the `play` prompt are parsed into [`TableCommand`]s. Bet
//! amounts are only checked for being integers here; the engine decides
//! whether a bet fits the balance.

/// A command typed at the table prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCommand {
    Hit,
    Stand,
    NewRound,
    Bet(i64),
    Wait,
    Status,
    Help,
}

/// Result type for parsing user input into table commands.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid command parsed from input
    Command(TableCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a [`TableCommand`] or quit.
///
/// Accepts (case-insensitive):
/// - "h" or "hit", "s" or "stand", "n" or "new"
/// - "bet X" with an integer amount
/// - "wait", "status", "help" or "?"
/// - "q" or "quit"
///
/// # Example
///
/// ```rust
/// # use coinjack_cli::validation::{parse_table_command, ParseResult, TableCommand};
///
/// assert_eq!(parse_table_command("HIT"), ParseResult::Command(TableCommand::Hit));
/// assert_eq!(
///     parse_table_command("bet 25"),
///     ParseResult::Command(TableCommand::Bet(25))
/// );
/// assert_eq!(parse_table_command("q"), ParseResult::Quit);
///
/// match parse_table_command("split") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_table_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "h" | "hit" => ParseResult::Command(TableCommand::Hit),
        "s" | "stand" => ParseResult::Command(TableCommand::Stand),
        "n" | "new" => ParseResult::Command(TableCommand::NewRound),
        "wait" => ParseResult::Command(TableCommand::Wait),
        "status" => ParseResult::Command(TableCommand::Status),
        "help" | "?" => ParseResult::Command(TableCommand::Help),
        "bet" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Bet requires an amount (e.g., 'bet 25')".to_string(),
                );
            }
            match parts[1].parse::<i64>() {
                Ok(amount) => ParseResult::Command(TableCommand::Bet(amount)),
                Err(_) => ParseResult::Invalid("Invalid bet amount".to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Valid commands: hit, stand, new, bet <amount>, wait, status, help, q",
            parts[0]
        )),
    }
}
