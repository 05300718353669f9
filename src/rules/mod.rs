//! Game state, turn order, and loss detection.

mod engine;
mod hand;

pub use engine::{GameBuilder, GameState};
pub use hand::Hand;
