//! Applying moves and settling the result.

use tracing::{debug, info};

use crate::chess_move::{Move, MoveKind, ResolvedMove};
use crate::error::MoveError;
use crate::game::{GameState, Outcome};
use crate::movegen::{resolve, side_has_legal_move};

impl GameState {
    /// Validate and play `mv` for the side to move, returning the new outcome.
    ///
    /// On error nothing changes and the same side is still to move.
    pub fn play(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let resolved = resolve(self, mv)?;
        self.apply(resolved);
        Ok(self.outcome())
    }

    /// Mutate the state for an already-validated move, then check for a result.
    fn apply(&mut self, resolved: ResolvedMove) {
        let us = self.side_to_move();
        let to = resolved.mv.to();

        let board = self.board_mut();
        if let Some(captured) = resolved.captured {
            board.remove(captured);
        }
        if let Some(pawn) = board.pawn_mut(resolved.pawn) {
            pawn.relocate(to);
        }

        let eligible = (resolved.kind == MoveKind::DoubleStep).then_some(resolved.pawn);
        self.set_en_passant(eligible);
        debug!(
            mv = %resolved.mv,
            kind = ?resolved.kind,
            capture = resolved.kind.is_capture(),
            en_passant = ?eligible,
            "move applied"
        );

        if to.rank().is_last() || self.board().count(!us) == 0 {
            info!(winner = %us, "game won");
            self.set_outcome(Outcome::Won(us));
            return;
        }

        self.set_side_to_move(!us);
        self.settle_turn();
    }

    /// Decide the outcome for a position where the side to move has not yet
    /// played: a side without pawns has lost, a side to move without a legal
    /// move is stalemated.
    pub(crate) fn settle_turn(&mut self) {
        let side = self.side_to_move();
        for loser in [side, !side] {
            if self.board().count(loser) == 0 {
                info!(winner = %!loser, "game won");
                self.set_outcome(Outcome::Won(!loser));
                return;
            }
        }
        if !side_has_legal_move(self) {
            info!(side = %side, "stalemate");
            self.set_outcome(Outcome::Stalemate);
        }
    }
}
