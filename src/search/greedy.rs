//! One-ply greedy move selection.
//!
//! Looks a single placement ahead: for each legal move, put the tile on
//! the board (hand and turn untouched), count the opponent's available
//! moves, take it off again, and keep the move leaving the opponent the
//! fewest replies. Ties go to the first move in enumeration order.

use crate::core::EngineError;
use crate::moves::{count_available_moves, Move};
use crate::rules::GameState;

/// The move minimizing the opponent's immediate move count.
///
/// Fails with [`EngineError::EmptyMoveSet`] when the player on turn has no
/// legal move; callers should check `player_has_lost` first. The state is
/// unchanged on return.
pub fn best_move_greedy(state: &mut GameState) -> Result<Move, EngineError> {
    let opponent = state.player_on_turn().other();
    let mut best: Option<(Move, usize)> = None;

    for mv in state.legal_moves() {
        state.board_mut().put(mv.coord, mv.oriented());
        let replies = count_available_moves(state.board(), state.hand(opponent));
        state.board_mut().clear(mv.coord);

        // Strict < keeps the first-encountered move on ties.
        if best.map_or(true, |(_, fewest)| replies < fewest) {
            best = Some((mv, replies));
        }
    }

    best.map(|(mv, _)| mv).ok_or(EngineError::EmptyMoveSet)
}
