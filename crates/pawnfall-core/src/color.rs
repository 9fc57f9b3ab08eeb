//! Player colors and their direction of travel.

use std::fmt;
use std::ops::Not;

use crate::rank::Rank;

/// A player color: White moves first and advances toward rank 8, Black toward rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black). Doubles as the player index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rows advanced by a single forward step.
    #[inline]
    pub const fn delta_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The rank every pawn of this color starts on.
    #[inline]
    pub const fn starting_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank2,
            Color::Black => Rank::Rank7,
        }
    }

    /// The rank a pawn of this color lands on after a double step.
    #[inline]
    pub const fn double_step_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank4,
            Color::Black => Rank::Rank5,
        }
    }

    /// Single-letter board marker.
    #[inline]
    pub const fn marker(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    /// Capitalized name, as used in announcements.
    pub const fn title(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}
