//! Board coordinates.

use std::fmt;

use crate::file::File;
use crate::rank::Rank;

/// A square on the 8x8 board, packed as `rank * 8 + file` (A1 = 0, H8 = 63).
///
/// A `Position` always names a square on the board. Arithmetic that could
/// leave the board returns `Option<Position>` instead of clamping.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// Create a position from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Position {
        Position(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Parse algebraic notation (e.g. "e4").
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Position::new(rank, file))
    }

    /// Return the rank of this position.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Return the file of this position.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Same file, `delta_rows` rows further up (negative: down).
    ///
    /// Returns `None` when the target row falls outside 1..8.
    #[inline]
    pub const fn advance(self, delta_rows: i8) -> Option<Position> {
        match self.rank().offset(delta_rows) {
            Some(rank) => Some(Position::new(rank, self.file())),
            None => None,
        }
    }

    /// Same rank, `delta_files` files to the right (negative: left).
    #[inline]
    pub const fn offset_file(self, delta_files: i8) -> Option<Position> {
        match self.file().offset(delta_files) {
            Some(file) => Some(Position::new(self.rank(), file)),
            None => None,
        }
    }

    // Named position constants
    pub const A1: Position = Position(0);
    pub const B1: Position = Position(1);
    pub const C1: Position = Position(2);
    pub const D1: Position = Position(3);
    pub const E1: Position = Position(4);
    pub const F1: Position = Position(5);
    pub const G1: Position = Position(6);
    pub const H1: Position = Position(7);
    pub const A2: Position = Position(8);
    pub const B2: Position = Position(9);
    pub const C2: Position = Position(10);
    pub const D2: Position = Position(11);
    pub const E2: Position = Position(12);
    pub const F2: Position = Position(13);
    pub const G2: Position = Position(14);
    pub const H2: Position = Position(15);
    pub const A3: Position = Position(16);
    pub const B3: Position = Position(17);
    pub const C3: Position = Position(18);
    pub const D3: Position = Position(19);
    pub const E3: Position = Position(20);
    pub const F3: Position = Position(21);
    pub const G3: Position = Position(22);
    pub const H3: Position = Position(23);
    pub const A4: Position = Position(24);
    pub const B4: Position = Position(25);
    pub const C4: Position = Position(26);
    pub const D4: Position = Position(27);
    pub const E4: Position = Position(28);
    pub const F4: Position = Position(29);
    pub const G4: Position = Position(30);
    pub const H4: Position = Position(31);
    pub const A5: Position = Position(32);
    pub const B5: Position = Position(33);
    pub const C5: Position = Position(34);
    pub const D5: Position = Position(35);
    pub const E5: Position = Position(36);
    pub const F5: Position = Position(37);
    pub const G5: Position = Position(38);
    pub const H5: Position = Position(39);
    pub const A6: Position = Position(40);
    pub const B6: Position = Position(41);
    pub const C6: Position = Position(42);
    pub const D6: Position = Position(43);
    pub const E6: Position = Position(44);
    pub const F6: Position = Position(45);
    pub const G6: Position = Position(46);
    pub const H6: Position = Position(47);
    pub const A7: Position = Position(48);
    pub const B7: Position = Position(49);
    pub const C7: Position = Position(50);
    pub const D7: Position = Position(51);
    pub const E7: Position = Position(52);
    pub const F7: Position = Position(53);
    pub const G7: Position = Position(54);
    pub const H7: Position = Position(55);
    pub const A8: Position = Position(56);
    pub const B8: Position = Position(57);
    pub const C8: Position = Position(58);
    pub const D8: Position = Position(59);
    pub const E8: Position = Position(60);
    pub const F8: Position = Position(61);
    pub const G8: Position = Position(62);
    pub const H8: Position = Position(63);
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::file::File;
    use crate::rank::Rank;

    #[test]
    fn new_and_accessors() {
        let pos = Position::new(Rank::Rank4, File::FileE);
        assert_eq!(pos, Position::E4);
        assert_eq!(pos.rank(), Rank::Rank4);
        assert_eq!(pos.file(), File::FileE);
        assert_eq!(Position::A1, Position::new(Rank::Rank1, File::FileA));
        assert_eq!(Position::H8, Position::new(Rank::Rank8, File::FileH));
    }

    #[test]
    fn rank_file_roundtrip() {
        for rank in Rank::ALL {
            for file in File::ALL {
                let pos = Position::new(rank, file);
                assert_eq!((pos.rank(), pos.file()), (rank, file));
            }
        }
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Position::from_algebraic("a1"), Some(Position::A1));
        assert_eq!(Position::from_algebraic("e4"), Some(Position::E4));
        assert_eq!(Position::from_algebraic("h8"), Some(Position::H8));
        assert_eq!(format!("{}", Position::D5), "d5");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Position::from_algebraic("i1").is_none());
        assert!(Position::from_algebraic("a9").is_none());
        assert!(Position::from_algebraic("a0").is_none());
        assert!(Position::from_algebraic("").is_none());
        assert!(Position::from_algebraic("a").is_none());
        assert!(Position::from_algebraic("a1b").is_none());
    }

    #[test]
    fn advance_keeps_file() {
        assert_eq!(Position::E2.advance(1), Some(Position::E3));
        assert_eq!(Position::E2.advance(2), Some(Position::E4));
        assert_eq!(Position::D7.advance(-2), Some(Position::D5));
    }

    #[test]
    fn advance_off_board() {
        assert_eq!(Position::E8.advance(1), None);
        assert_eq!(Position::E1.advance(-1), None);
        assert_eq!(Position::A7.advance(2), None);
    }

    #[test]
    fn offset_file_edges() {
        assert_eq!(Position::A4.offset_file(-1), None);
        assert_eq!(Position::A4.offset_file(1), Some(Position::B4));
        assert_eq!(Position::H4.offset_file(1), None);
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Position::E4), "Position(e4)");
    }
}
