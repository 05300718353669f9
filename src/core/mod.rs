//! Core value types: tiles, directions, players, errors.
//!
//! These are the game-agnostic building blocks; the board and rules
//! modules compose them into the actual game.

pub mod error;
pub mod player;
pub mod tile;

pub use error::EngineError;
pub use player::{PlayerId, PlayerMap};
pub use tile::{Direction, EdgeValue, Tile};
