//! Game-tree search: exhaustive win/loss minimax and a one-ply greedy
//! heuristic.

mod exhaustive;
mod greedy;

pub use exhaustive::current_player_can_win;
pub use greedy::best_move_greedy;
