//! Exhaustive win/loss search.
//!
//! Full-depth minimax over the remaining game tree, mutating the state in
//! place and undoing every move on the way back up. Branching factor is
//! |hand| x 4 orientations x candidate cells with no memoization and no
//! pruning, so this is meant for small residual positions; recursion depth
//! is bounded by the number of unplayed tiles.

use crate::rules::GameState;

/// True iff the player on turn can force a win.
///
/// A move wins when the opponent cannot win from the position it leaves;
/// the first such move ends the search. The state is restored exactly
/// before returning, for both outcomes.
pub fn current_player_can_win(state: &mut GameState) -> bool {
    if state.player_has_lost() {
        return false;
    }

    for mv in state.legal_moves() {
        state.apply_unchecked(&mv);
        let opponent_wins = current_player_can_win(state);
        state.undo(&mv);
        if !opponent_wins {
            return true;
        }
    }
    false
}
