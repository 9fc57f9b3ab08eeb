//! Perft (performance test) for move generation correctness verification.

use crate::game::GameState;
use crate::movegen::generate_legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Finished games have no
/// children. Depth 1 returns the number of legal moves without playing them.
pub fn perft(state: &GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(state);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = state.clone();
        if child.play(mv).is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move, node_count)` pairs sorted alphabetically.
pub fn divide(state: &GameState, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = generate_legal_moves(state)
        .into_iter()
        .map(|mv| {
            let mut child = state.clone();
            let count = match child.play(mv) {
                Ok(_) if depth > 1 => perft(&child, depth - 1),
                Ok(_) => 1,
                Err(_) => 0,
            };
            (mv.to_notation(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
