//! Legal-move enumeration.
//!
//! Enumeration order is deterministic: candidate coordinates row-major,
//! hand tiles in ascending order, rotations 0..4. A rotationally symmetric
//! tile emits one move per rotation even when the oriented placements
//! coincide; each rotation counts as a distinct move.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord};
use crate::core::Tile;
use crate::rules::Hand;

/// Number of moves on an empty board: one per orientation of the first
/// tile at the canonical start cell.
const EMPTY_BOARD_MOVES: usize = 4;

/// A (cell, oriented tile) placement.
///
/// `tile` is the tile as it sits in the hand; [`Move::oriented`] applies
/// the rotation chosen for placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target cell.
    pub coord: Coord,
    /// The hand tile, un-rotated.
    pub tile: Tile,
    /// Clockwise quarter-turns applied on placement (0..4).
    pub rotation: u8,
}

impl Move {
    /// The tile as it will sit on the board.
    #[must_use]
    pub fn oriented(&self) -> Tile {
        self.tile.rotated(self.rotation)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.oriented(), self.coord)
    }
}

/// Every legal (cell, oriented tile) placement for `hand` on `board`.
#[must_use]
pub fn available_moves(board: &Board, hand: &Hand) -> Vec<Move> {
    let tiles = hand.sorted_tiles();
    let mut moves = Vec::new();

    for coord in board.adjacent_locations() {
        for &tile in &tiles {
            for rotation in 0..4u8 {
                if board.fits(coord, tile.rotated(rotation)) {
                    moves.push(Move {
                        coord,
                        tile,
                        rotation,
                    });
                }
            }
        }
    }
    moves
}

/// Number of legal moves for `hand` on `board`.
///
/// The empty board is a fixed 4, one per orientation at the start cell,
/// even when the tile's rotations are identical.
#[must_use]
pub fn count_available_moves(board: &Board, hand: &Hand) -> usize {
    if board.is_empty() {
        EMPTY_BOARD_MOVES
    } else {
        available_moves(board, hand).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(tiles: &[Tile]) -> Hand {
        tiles.iter().copied().collect()
    }

    #[test]
    fn test_empty_board_count_is_fixed() {
        let board = Board::new(5);

        let one_tile = hand(&[Tile::new(1, 2, 3, 4)]);
        assert_eq!(count_available_moves(&board, &one_tile), 4);

        // The special case holds regardless of hand contents.
        let symmetric = hand(&[Tile::new(5, 5, 5, 5)]);
        assert_eq!(count_available_moves(&board, &symmetric), 4);

        let two_tiles = hand(&[Tile::new(1, 2, 3, 4), Tile::new(5, 6, 7, 8)]);
        assert_eq!(count_available_moves(&board, &two_tiles), 4);
    }

    #[test]
    fn test_empty_board_enumeration_targets_center() {
        let board = Board::new(5);
        let moves = available_moves(&board, &hand(&[Tile::new(1, 2, 3, 4)]));

        assert_eq!(moves.len(), 4);
        for (rotation, mv) in moves.iter().enumerate() {
            assert_eq!(mv.coord, Coord::new(2, 2));
            assert_eq!(mv.rotation, rotation as u8);
        }
    }

    #[test]
    fn test_enumeration_after_placement() {
        let mut board = Board::new(5);
        board.place(Coord::new(2, 2), Tile::new(1, 2, 3, 4)).unwrap();

        // (9 9 1 9) only fits above the placed tile, in one orientation.
        let moves = available_moves(&board, &hand(&[Tile::new(9, 9, 1, 9)]));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].coord, Coord::new(1, 2));
        assert_eq!(moves[0].rotation, 0);
        assert_eq!(moves[0].oriented(), Tile::new(9, 9, 1, 9));

        assert_eq!(count_available_moves(&board, &hand(&[Tile::new(9, 9, 1, 9)])), 1);
    }

    #[test]
    fn test_symmetric_tile_counts_each_rotation() {
        let mut board = Board::new(5);
        board.place(Coord::new(2, 2), Tile::new(5, 5, 5, 5)).unwrap();

        // All four rotations of an all-5 tile fit every open side.
        let moves = available_moves(&board, &hand(&[Tile::new(5, 5, 5, 5)]));
        assert_eq!(moves.len(), 4 * 4);
    }

    #[test]
    fn test_unplaceable_hand_counts_zero() {
        let mut board = Board::new(5);
        board.place(Coord::new(2, 2), Tile::new(1, 2, 3, 4)).unwrap();

        let unplaceable = hand(&[Tile::new(9, 9, 9, 9)]);
        assert!(available_moves(&board, &unplaceable).is_empty());
        assert_eq!(count_available_moves(&board, &unplaceable), 0);
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let mut board = Board::new(5);
        board.place(Coord::new(2, 2), Tile::new(1, 2, 3, 4)).unwrap();

        let tiles = hand(&[
            Tile::new(3, 0, 1, 0),
            Tile::new(0, 0, 1, 0),
            Tile::new(2, 1, 4, 3),
        ]);
        let first = available_moves(&board, &tiles);
        let second = available_moves(&board, &tiles);
        assert_eq!(first, second);

        // Coordinates arrive row-major.
        let coords: Vec<_> = first.iter().map(|m| m.coord).collect();
        let mut sorted = coords.clone();
        sorted.sort();
        assert_eq!(coords, sorted);
    }
}
