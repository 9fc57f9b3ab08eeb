//! Error types for move submission, layout parsing, and board validation.

use crate::color::Color;
use crate::position::Position;

/// Why a submitted command was rejected.
///
/// Every variant is recoverable: the state is left untouched and the same
/// player is asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The input matches neither `exit` nor the four-character move notation.
    #[error("Invalid input")]
    MalformedCommand {
        /// The raw input.
        input: String,
    },
    /// The origin square does not hold a pawn of the side to move.
    #[error("No {color} pawn at {position}")]
    NoPawnAtSource {
        /// The side to move.
        color: Color,
        /// The origin square named in the command.
        position: Position,
        /// Color of the pawn found there instead, if any.
        occupant: Option<Color>,
    },
    /// The move fails every legality rule.
    #[error("Invalid input")]
    InvalidMove {
        /// Origin square.
        from: Position,
        /// Destination square.
        to: Position,
    },
    /// The game already has a winner or ended in stalemate.
    #[error("The game is over")]
    GameOver,
}

/// Errors that occur when parsing a layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout does not have exactly 3 space-separated fields.
    #[error("expected 3 layout fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index in layout order (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid pawn character: '{character}'")]
    InvalidPawnChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidColor {
        /// The invalid side string.
        found: String,
    },
    /// The en passant field is not "-" or the square of a pawn that just double-stepped.
    #[error("invalid en passant pawn: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side has more than 8 pawns.
    #[error("expected at most 8 {color} pawns, found {count}")]
    TooManyPawns {
        /// Which side has too many pawns.
        color: Color,
        /// Number of pawns found.
        count: usize,
    },
    /// A pawn stands on rank 1 or rank 8.
    #[error("pawn found on last rank at {position}")]
    PawnOnLastRank {
        /// Where the pawn stands.
        position: Position,
    },
    /// Two pawns share a square.
    #[error("two pawns occupy {position}")]
    Overlapping {
        /// The shared square.
        position: Position,
    },
}
