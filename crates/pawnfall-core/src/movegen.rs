//! Move legality: classifying a requested move and enumerating legal ones.

use crate::board::Board;
use crate::chess_move::{Move, MoveKind, ResolvedMove};
use crate::error::MoveError;
use crate::game::GameState;
use crate::pawn::{Pawn, PawnId};
use crate::position::Position;

/// Check `mv` for the side to move and classify it.
///
/// Fails with [`MoveError::NoPawnAtSource`] when the origin does not hold
/// one of the mover's pawns, and [`MoveError::InvalidMove`] when no rule
/// allows the move.
pub fn resolve(state: &GameState, mv: Move) -> Result<ResolvedMove, MoveError> {
    let us = state.side_to_move();
    let pawn = match state.board().pawn_at(mv.from()) {
        Some(pawn) if pawn.color() == us => pawn,
        other => {
            return Err(MoveError::NoPawnAtSource {
                color: us,
                position: mv.from(),
                occupant: other.map(Pawn::color),
            });
        }
    };

    let (kind, captured) = classify(state.board(), state.en_passant_id(), pawn, mv.to())
        .ok_or(MoveError::InvalidMove {
            from: mv.from(),
            to: mv.to(),
        })?;

    Ok(ResolvedMove {
        pawn: pawn.id(),
        mv,
        kind,
        captured,
    })
}

/// Decide which rule, if any, lets `pawn` move to `to`.
///
/// Returns the move kind and the captured pawn, or `None` if the move is illegal.
fn classify(
    board: &Board,
    en_passant: Option<PawnId>,
    pawn: &Pawn,
    to: Position,
) -> Option<(MoveKind, Option<PawnId>)> {
    let from = pawn.position();
    if from == to {
        return None;
    }
    let occupant = board.pawn_at(to);

    if from.file() == to.file() {
        // Straight moves never capture.
        if occupant.is_some() {
            return None;
        }
        if pawn.single_step() == Some(to) {
            return Some((MoveKind::Step, None));
        }
        if pawn.is_at_starting_rank() && pawn.double_step() == Some(to) {
            return Some((MoveKind::DoubleStep, None));
        }
        return None;
    }

    if !pawn.capture_targets().any(|target| target == to) {
        return None;
    }

    match occupant {
        Some(victim) if victim.color() != pawn.color() => Some((MoveKind::Capture, Some(victim.id()))),
        Some(_) => None,
        None => {
            // The victim stands beside the mover, on the destination file.
            let beside = Position::new(from.rank(), to.file());
            let victim = board.pawn_at(beside)?;
            let eligible = Some(victim.id()) == en_passant && victim.color() != pawn.color();
            eligible.then_some((MoveKind::EnPassant, Some(victim.id())))
        }
    }
}

/// Squares worth trying for `pawn`: straight ahead, two ahead on its first move, both diagonals.
fn candidate_targets(pawn: &Pawn) -> impl Iterator<Item = Position> + use<> {
    let double = if pawn.is_at_starting_rank() {
        pawn.double_step()
    } else {
        None
    };
    pawn.single_step()
        .into_iter()
        .chain(double)
        .chain(pawn.capture_targets())
}

/// Return `true` if `pawn` has at least one legal destination.
pub fn has_legal_move(state: &GameState, pawn: &Pawn) -> bool {
    candidate_targets(pawn)
        .any(|to| classify(state.board(), state.en_passant_id(), pawn, to).is_some())
}

/// Return `true` if the side to move can play anything at all.
pub fn side_has_legal_move(state: &GameState) -> bool {
    state
        .board()
        .pawns_of(state.side_to_move())
        .any(|pawn| has_legal_move(state, pawn))
}

/// Generate every legal move for the side to move. Empty once the game is over.
pub fn generate_legal_moves(state: &GameState) -> Vec<Move> {
    if state.is_over() {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for pawn in state.board().pawns_of(state.side_to_move()) {
        for to in candidate_targets(pawn) {
            if classify(state.board(), state.en_passant_id(), pawn, to).is_some() {
                moves.push(Move::new(pawn.position(), to));
            }
        }
    }
    moves
}
