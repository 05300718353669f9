//! Board grid, adjacency, and placement legality.
//!
//! ## Coordinates
//!
//! `(y, x)` with y growing downward. `Coord` orders row-major so candidate
//! sets can be sorted into a deterministic enumeration order.
//!
//! ## Legality
//!
//! A placement is legal when the target cell is vacant, has at least one
//! filled orthogonal neighbor, and every facing edge matches the neighbor
//! tile's edge. The empty board is special-cased: any in-bounds cell
//! accepts any tile, and the canonical single candidate location is the
//! center cell.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, EngineError, Tile};

/// A board cell coordinate, `(y, x)` with y growing downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub y: usize,
    pub x: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }

    /// The in-bounds orthogonal neighbor in `direction`, if any, on a
    /// `size` x `size` board.
    #[must_use]
    pub fn step(self, direction: Direction, size: usize) -> Option<Coord> {
        match direction {
            Direction::North => (self.y > 0).then(|| Coord::new(self.y - 1, self.x)),
            Direction::East => (self.x + 1 < size).then(|| Coord::new(self.y, self.x + 1)),
            Direction::South => (self.y + 1 < size).then(|| Coord::new(self.y + 1, self.x)),
            Direction::West => (self.x > 0).then(|| Coord::new(self.y, self.x - 1)),
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}

/// A fixed-size square grid of cells, each vacant or holding one oriented
/// tile.
///
/// Filled cells are never cleared through the public API; the only clear
/// path is the search's crate-internal backtracking restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Board {
    /// Reference board dimension.
    pub const DEFAULT_SIZE: usize = 5;

    /// Create an all-vacant board. Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board must have at least one cell");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Board dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The canonical start cell for the first placement.
    #[must_use]
    pub fn center(&self) -> Coord {
        Coord::new(self.size / 2, self.size / 2)
    }

    fn offset(&self, coord: Coord) -> usize {
        coord.y * self.size + coord.x
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), EngineError> {
        if coord.y < self.size && coord.x < self.size {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                coord,
                size: self.size,
            })
        }
    }

    /// The tile at `coord`, or `None` for a vacant cell.
    pub fn tile_at(&self, coord: Coord) -> Result<Option<Tile>, EngineError> {
        self.check_bounds(coord)?;
        Ok(self.cells[self.offset(coord)])
    }

    // In-bounds accessor for enumeration-produced coordinates.
    pub(crate) fn cell(&self, coord: Coord) -> Option<Tile> {
        self.cells[self.offset(coord)]
    }

    /// True iff every cell is vacant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// In-bounds orthogonal neighbors of `coord`, paired with the
    /// direction pointing at them.
    fn neighbors(&self, coord: Coord) -> SmallVec<[(Direction, Coord); 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                coord
                    .step(direction, self.size)
                    .map(|neighbor| (direction, neighbor))
            })
            .collect()
    }

    /// True iff any in-bounds orthogonal neighbor of `coord` is filled.
    pub fn has_filled_neighbor(&self, coord: Coord) -> Result<bool, EngineError> {
        self.check_bounds(coord)?;
        Ok(self
            .neighbors(coord)
            .iter()
            .any(|&(_, neighbor)| self.cell(neighbor).is_some()))
    }

    /// Check whether `tile`, in its current orientation, may be placed at
    /// `coord`.
    ///
    /// On an empty board this is true for any in-bounds coordinate and any
    /// orientation; callers wanting the canonical single start cell combine
    /// this with [`Board::adjacent_locations`].
    pub fn can_place(&self, coord: Coord, tile: Tile) -> Result<bool, EngineError> {
        self.check_bounds(coord)?;
        Ok(self.fits(coord, tile))
    }

    // Legality check assuming `coord` is in bounds.
    pub(crate) fn fits(&self, coord: Coord, tile: Tile) -> bool {
        if self.is_empty() {
            return true;
        }
        if self.cell(coord).is_some() {
            return false;
        }

        let mut supported = false;
        for (direction, neighbor) in self.neighbors(coord) {
            if let Some(placed) = self.cell(neighbor) {
                supported = true;
                if placed.edge(direction.opposite()) != tile.edge(direction) {
                    return false;
                }
            }
        }
        supported
    }

    /// Place `tile` at `coord`, validating legality first.
    pub fn place(&mut self, coord: Coord, tile: Tile) -> Result<(), EngineError> {
        if !self.can_place(coord, tile)? {
            return Err(EngineError::InvalidPlacement { coord, tile });
        }
        self.put(coord, tile);
        Ok(())
    }

    // Backtracking primitives. The search guarantees legality and bounds;
    // `clear` exists only to restore a cell the search just filled.
    pub(crate) fn put(&mut self, coord: Coord, tile: Tile) {
        let offset = self.offset(coord);
        self.cells[offset] = Some(tile);
    }

    pub(crate) fn clear(&mut self, coord: Coord) {
        let offset = self.offset(coord);
        self.cells[offset] = None;
    }

    /// Vacant coordinates orthogonally adjacent to any filled cell, sorted
    /// row-major.
    ///
    /// Matching is not consulted here; a candidate may still reject every
    /// tile under [`Board::can_place`]. On an empty board the result is
    /// exactly the single canonical center cell.
    #[must_use]
    pub fn adjacent_locations(&self) -> Vec<Coord> {
        if self.is_empty() {
            return vec![self.center()];
        }

        let mut candidates = FxHashSet::default();
        for y in 0..self.size {
            for x in 0..self.size {
                let coord = Coord::new(y, x);
                if self.cell(coord).is_none() {
                    continue;
                }
                for (_, neighbor) in self.neighbors(coord) {
                    if self.cell(neighbor).is_none() {
                        candidates.insert(neighbor);
                    }
                }
            }
        }

        let mut coords: Vec<_> = candidates.into_iter().collect();
        coords.sort_unstable();
        coords
    }
}
