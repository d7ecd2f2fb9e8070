//! Perft (performance test) for move generation correctness verification.

use crate::game_state::GameState;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). The walk runs on a private
/// clone with make/undo, so `state` is left as it was.
pub fn perft(state: &GameState, depth: usize) -> u64 {
    let mut scratch = state.clone();
    walk(&mut scratch, depth)
}

fn walk(state: &mut GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.valid_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        state.make_move(mv);
        nodes += walk(state, depth - 1);
        state.undo_move();
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(coordinates, node_count)` pairs sorted alphabetically.
pub fn divide(state: &GameState, depth: usize) -> Vec<(String, u64)> {
    let mut scratch = state.clone();
    let moves = scratch.valid_moves();
    let mut results: Vec<(String, u64)> = moves
        .into_iter()
        .map(|mv| {
            scratch.make_move(mv);
            let count = if depth <= 1 { 1 } else { walk(&mut scratch, depth - 1) };
            scratch.undo_move();
            (mv.coordinates(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
