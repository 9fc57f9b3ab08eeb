//! The board: the set of live pawns.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::pawn::{Pawn, PawnId};
use crate::position::Position;
use crate::rank::Rank;

/// Cell contents by row, rank 8 first, file a first within each row.
pub type Grid = [[Option<Color>; File::COUNT]; Rank::COUNT];

/// All pawns still in play.
///
/// Pawns are only ever added when the board is set up and removed by
/// captures; no two of them share a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pawns: Vec<Pawn>,
}

impl Board {
    /// Return the starting layout: white pawns on rank 2, black pawns on rank 7.
    pub fn starting_position() -> Board {
        let mut pawns = Vec::with_capacity(16);
        for file in File::ALL {
            for color in Color::ALL {
                let id = PawnId::new(pawns.len() as u8);
                pawns.push(Pawn::new(id, color, Position::new(color.starting_rank(), file)));
            }
        }
        Board { pawns }
    }

    /// Build a board from placements, assigning ids in order. Used by layout parsing.
    pub(crate) fn from_placements(
        placements: impl IntoIterator<Item = (Color, Position)>,
    ) -> Result<Board, BoardError> {
        let pawns = placements
            .into_iter()
            .enumerate()
            .map(|(i, (color, position))| Pawn::new(PawnId::new(i as u8), color, position))
            .collect();
        let board = Board { pawns };
        board.validate()?;
        Ok(board)
    }

    /// Return the pawn standing on `position`, if any.
    pub fn pawn_at(&self, position: Position) -> Option<&Pawn> {
        self.pawns.iter().find(|p| p.position() == position)
    }

    /// Look a live pawn up by identity.
    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.pawns.iter().find(|p| p.id() == id)
    }

    pub(crate) fn pawn_mut(&mut self, id: PawnId) -> Option<&mut Pawn> {
        self.pawns.iter_mut().find(|p| p.id() == id)
    }

    /// Take a captured pawn off the board.
    pub(crate) fn remove(&mut self, id: PawnId) -> Option<Pawn> {
        let index = self.pawns.iter().position(|p| p.id() == id)?;
        Some(self.pawns.remove(index))
    }

    /// Iterate over every live pawn.
    pub fn pawns(&self) -> impl Iterator<Item = &Pawn> {
        self.pawns.iter()
    }

    /// Iterate over the live pawns of one color.
    pub fn pawns_of(&self, color: Color) -> impl Iterator<Item = &Pawn> {
        self.pawns.iter().filter(move |p| p.color() == color)
    }

    /// Number of live pawns of one color.
    pub fn count(&self, color: Color) -> usize {
        self.pawns_of(color).count()
    }

    /// Color on each square, row by row from rank 8 down to rank 1.
    pub fn grid(&self) -> Grid {
        let mut grid: Grid = [[None; File::COUNT]; Rank::COUNT];
        for pawn in &self.pawns {
            let pos = pawn.position();
            grid[Rank::COUNT - 1 - pos.rank().index()][pos.file().index()] = Some(pawn.color());
        }
        grid
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.count(color);
            if count > File::COUNT {
                return Err(BoardError::TooManyPawns { color, count });
            }
        }

        if let Some(pawn) = self.pawns.iter().find(|p| p.position().rank().is_last()) {
            return Err(BoardError::PawnOnLastRank {
                position: pawn.position(),
            });
        }

        for (i, a) in self.pawns.iter().enumerate() {
            if self.pawns[i + 1..].iter().any(|b| b.position() == a.position()) {
                return Err(BoardError::Overlapping {
                    position: a.position(),
                });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

/// Wrapper for printing a board as a framed 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

const FRAME: &str = "  +---+---+---+---+---+---+---+---+";

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.grid().iter().enumerate() {
            writeln!(f, "{FRAME}")?;
            write!(f, "{} |", Rank::COUNT - row)?;
            for cell in cells {
                let c = cell.map_or(' ', Color::marker);
                write!(f, " {c} |")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{FRAME}")?;
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
