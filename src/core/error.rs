//! Error types for the engine.
//!
//! Every variant is a local caller precondition violation. The engine does
//! not recover from any of them internally: callers are expected to check
//! `player_has_lost` or enumerate moves before acting.

use thiserror::Error;

use crate::board::Coord;
use crate::core::tile::Tile;

/// Engine error type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A placement failed the adjacency-and-matching rule.
    #[error("tile {tile} cannot be placed at {coord}")]
    InvalidPlacement { coord: Coord, tile: Tile },

    /// Greedy move selection was invoked with zero legal moves.
    #[error("no legal moves available")]
    EmptyMoveSet,

    /// A coordinate outside the board was passed to a board accessor.
    #[error("coordinate {coord} outside the {size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },
}
