//! Moves and their classification.

use std::fmt;

use crate::pawn::PawnId;
use crate::position::Position;

/// Which legal branch a move falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// One row straight ahead onto an empty square.
    Step,
    /// Two rows straight ahead on a pawn's first move.
    DoubleStep,
    /// Diagonal capture of the pawn on the destination square.
    Capture,
    /// Diagonal move onto an empty square, capturing the pawn that just double-stepped past.
    EnPassant,
}

impl MoveKind {
    /// Return `true` if the move removes an opposing pawn.
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }
}

/// A pawn move from one square to another, in `e2e4` notation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Position,
    to: Position,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(from: Position, to: Position) -> Move {
        Move { from, to }
    }

    /// Parse four-character move notation such as `e2e4`.
    ///
    /// No separators, piece letters, or capture marks are accepted.
    pub fn from_notation(s: &str) -> Option<Move> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Position::from_algebraic(&s[0..2])?;
        let to = Position::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }

    #[inline]
    pub const fn from(self) -> Position {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Position {
        self.to
    }

    /// Return the move in `e2e4` notation.
    pub fn to_notation(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

/// A move that passed every legality check, ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMove {
    /// The pawn being moved.
    pub pawn: PawnId,
    /// The move itself.
    pub mv: Move,
    /// Which rule made it legal.
    pub kind: MoveKind,
    /// The pawn taken off the board, for captures.
    pub captured: Option<PawnId>,
}
