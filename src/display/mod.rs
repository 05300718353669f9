//! Read-only ASCII rendering of tiles, boards, and game states.
//!
//! Presentation only: everything here reads engine state and nothing
//! mutates it. Tiles render as small boxes,
//!
//! ```text
//! +---+
//! | 1 |
//! |4 2|
//! | 3 |
//! +---+
//! ```
//!
//! with the north value on top, west/east in the middle row, and south on
//! the bottom; vacant cells render as empty boxes.

use std::fmt;

use crate::board::{Board, Coord};
use crate::core::{PlayerId, Tile};
use crate::rules::GameState;

const BOX_ROWS: usize = 5;

fn tile_lines(cell: Option<Tile>) -> [String; BOX_ROWS] {
    match cell {
        Some(tile) => [
            "+---+".to_string(),
            format!("| {} |", tile.north()),
            format!("|{} {}|", tile.west(), tile.east()),
            format!("| {} |", tile.south()),
            "+---+".to_string(),
        ],
        None => [
            "+---+".to_string(),
            "|   |".to_string(),
            "|   |".to_string(),
            "|   |".to_string(),
            "+---+".to_string(),
        ],
    }
}

/// Render a single tile as a box.
#[must_use]
pub fn render_tile(tile: Tile) -> String {
    tile_lines(Some(tile)).join("\n")
}

/// Render the full board as a grid of boxes.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for y in 0..board.size() {
        let cells: Vec<_> = (0..board.size())
            .map(|x| tile_lines(board.cell(Coord::new(y, x))))
            .collect();
        for row in 0..BOX_ROWS {
            for lines in &cells {
                out.push_str(&lines[row]);
            }
            out.push('\n');
        }
    }
    out
}

/// Render both hands and the board.
#[must_use]
pub fn render_state(state: &GameState) -> String {
    let mut out = String::new();
    for player in PlayerId::both() {
        out.push_str(&format!("{} hand:", player));
        for tile in state.hand(player).sorted_tiles() {
            out.push_str(&format!(" {}", tile));
        }
        out.push('\n');
    }
    out.push_str(&format!("{} is on turn\n", state.player_on_turn()));
    out.push_str(&render_board(state.board()));
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_state(self))
    }
}
