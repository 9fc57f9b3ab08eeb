//! Pawns: the only piece in play.

use std::fmt;

use crate::color::Color;
use crate::position::Position;

/// Stable identity of a pawn, assigned when the board is set up.
///
/// Two pawns may occupy the same square at different times; en passant
/// eligibility follows the pawn itself, so it is tracked by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PawnId(u8);

impl PawnId {
    #[inline]
    pub(crate) const fn new(raw: u8) -> PawnId {
        PawnId(raw)
    }
}

/// A live pawn on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pawn {
    id: PawnId,
    color: Color,
    position: Position,
    /// `true` until the pawn makes its first move.
    at_starting_rank: bool,
}

impl Pawn {
    /// Place a pawn. It counts as unmoved iff it stands on its color's starting rank.
    pub(crate) fn new(id: PawnId, color: Color, position: Position) -> Pawn {
        Pawn {
            id,
            color,
            position,
            at_starting_rank: position.rank() == color.starting_rank(),
        }
    }

    #[inline]
    pub fn id(&self) -> PawnId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Return `true` if the pawn has not moved yet.
    #[inline]
    pub fn is_at_starting_rank(&self) -> bool {
        self.at_starting_rank
    }

    /// The square one row ahead, if on the board.
    pub fn single_step(&self) -> Option<Position> {
        self.position.advance(self.color.delta_row())
    }

    /// The square two rows ahead, if on the board.
    ///
    /// Eligibility (first move only) is checked by the caller.
    pub fn double_step(&self) -> Option<Position> {
        self.position.advance(2 * self.color.delta_row())
    }

    /// The diagonal squares this pawn could capture on.
    pub fn capture_targets(&self) -> impl Iterator<Item = Position> + use<> {
        let ahead = self.single_step();
        [-1i8, 1]
            .into_iter()
            .filter_map(move |delta| ahead.and_then(|pos| pos.offset_file(delta)))
    }

    /// Move to `to` and lose the starting-rank privilege for good.
    pub(crate) fn relocate(&mut self, to: Position) {
        self.position = to;
        self.at_starting_rank = false;
    }
}

impl fmt::Display for Pawn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pawn at {}", self.color, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::{Pawn, PawnId};
    use crate::color::Color;
    use crate::position::Position;

    #[test]
    fn starting_rank_flag_from_placement() {
        assert!(Pawn::new(PawnId::new(0), Color::White, Position::E2).is_at_starting_rank());
        assert!(Pawn::new(PawnId::new(1), Color::Black, Position::E7).is_at_starting_rank());
        assert!(!Pawn::new(PawnId::new(2), Color::White, Position::E7).is_at_starting_rank());
        assert!(!Pawn::new(PawnId::new(3), Color::Black, Position::E2).is_at_starting_rank());
    }

    #[test]
    fn steps_follow_color_direction() {
        let white = Pawn::new(PawnId::new(0), Color::White, Position::D2);
        assert_eq!(white.single_step(), Some(Position::D3));
        assert_eq!(white.double_step(), Some(Position::D4));

        let black = Pawn::new(PawnId::new(1), Color::Black, Position::D7);
        assert_eq!(black.single_step(), Some(Position::D6));
        assert_eq!(black.double_step(), Some(Position::D5));
    }

    #[test]
    fn capture_targets_clip_at_edges() {
        let middle = Pawn::new(PawnId::new(0), Color::White, Position::E4);
        let targets: Vec<_> = middle.capture_targets().collect();
        assert_eq!(targets, vec![Position::D5, Position::F5]);

        let edge = Pawn::new(PawnId::new(1), Color::Black, Position::A5);
        let targets: Vec<_> = edge.capture_targets().collect();
        assert_eq!(targets, vec![Position::B4]);

        let last = Pawn::new(PawnId::new(2), Color::White, Position::C8);
        assert_eq!(last.capture_targets().count(), 0);
    }

    #[test]
    fn relocate_clears_flag() {
        let mut pawn = Pawn::new(PawnId::new(0), Color::White, Position::B2);
        pawn.relocate(Position::B3);
        assert_eq!(pawn.position(), Position::B3);
        assert!(!pawn.is_at_starting_rank());
    }

    #[test]
    fn display() {
        let pawn = Pawn::new(PawnId::new(0), Color::Black, Position::G7);
        assert_eq!(format!("{pawn}"), "black pawn at g7");
    }
}
