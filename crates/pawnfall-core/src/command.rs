//! Parsing raw console input into commands.

use crate::chess_move::Move;

/// The literal that ends a session.
pub const EXIT_TOKEN: &str = "exit";

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `exit` -- leave the game without a result.
    Exit,
    /// Four-character move notation, e.g. `e2e4`.
    Move(Move),
    /// Anything else. Carries the raw input for reporting.
    Malformed(String),
}

/// Parse a single line of input into a [`Command`].
///
/// The whole line must match; surrounding whitespace is not tolerated.
pub fn parse_command(input: &str) -> Command {
    if input == EXIT_TOKEN {
        return Command::Exit;
    }
    match Move::from_notation(input) {
        Some(mv) => Command::Move(mv),
        None => Command::Malformed(input.to_string()),
    }
}
