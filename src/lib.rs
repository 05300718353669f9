//! # edgematch
//!
//! Rules engine and game-tree search for a two-player edge-matching
//! tile-placement game on a bounded square grid.
//!
//! ## Rules
//!
//! Each tile carries four oriented edge values (north, east, south, west).
//! Players alternately place a tile from their hand adjacent to the
//! existing layout so that every abutting edge matches; the first tile
//! goes to the center cell. A player on turn has lost when the opponent
//! has played out their hand, or when they have no legal move themselves.
//!
//! ## Architecture
//!
//! - **In-place search**: the exhaustive search mutates one `GameState`
//!   and undoes every move on backtrack; board, hands, and turn indicator
//!   are bit-for-bit restored.
//! - **Deterministic enumeration**: candidate cells row-major, hand tiles
//!   ascending, rotations 0..4, so searches and fixtures are reproducible.
//! - **No sentinels**: vacant cells are `None`, never a magic edge value.
//!
//! ## Modules
//!
//! - `core`: tiles, rotation, players, errors
//! - `board`: grid, adjacency, placement legality
//! - `moves`: legal-move enumeration
//! - `rules`: game state, turn order, loss detection
//! - `search`: exhaustive win/loss minimax and the one-ply greedy heuristic
//! - `display`: read-only ASCII rendering

pub mod board;
pub mod core;
pub mod display;
pub mod moves;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Direction, EdgeValue, EngineError, PlayerId, PlayerMap, Tile};

pub use crate::board::{Board, Coord};

pub use crate::moves::{available_moves, count_available_moves, Move};

pub use crate::rules::{GameBuilder, GameState, Hand};

pub use crate::search::{best_move_greedy, current_player_can_win};

pub use crate::display::{render_board, render_state, render_tile};
