//! Tiles and edge orientation.
//!
//! A tile carries four edge values in N/E/S/W order. Rotation is a pure
//! function: one clockwise quarter-turn moves the west edge to the north
//! position, so `(1, 2, 3, 4)` rotated once is `(4, 1, 2, 3)`.
//!
//! Vacant board cells are `None` at the board level; there is no sentinel
//! edge value, and every `Tile` is a real playable tile.

use serde::{Deserialize, Serialize};

/// Value carried on one side of a tile.
pub type EdgeValue = u8;

/// The four orthogonal directions, in N/E/S/W order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions, in N/E/S/W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The facing direction: a tile's north edge abuts its upper
    /// neighbor's south edge.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// A four-edged tile, oriented N/E/S/W.
///
/// `Tile` is a plain value: placing one on a board copies it, and rotating
/// one returns a new tile. The `Ord` impl (lexicographic over N, E, S, W)
/// exists so hands can be enumerated in a reproducible order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tile {
    edges: [EdgeValue; 4],
}

impl Tile {
    /// Create a tile from its four edge values.
    #[must_use]
    pub const fn new(north: EdgeValue, east: EdgeValue, south: EdgeValue, west: EdgeValue) -> Self {
        Self {
            edges: [north, east, south, west],
        }
    }

    /// Get the edge value facing `direction`.
    #[must_use]
    pub const fn edge(self, direction: Direction) -> EdgeValue {
        self.edges[direction as usize]
    }

    /// North edge value.
    #[must_use]
    pub const fn north(self) -> EdgeValue {
        self.edges[0]
    }

    /// East edge value.
    #[must_use]
    pub const fn east(self) -> EdgeValue {
        self.edges[1]
    }

    /// South edge value.
    #[must_use]
    pub const fn south(self) -> EdgeValue {
        self.edges[2]
    }

    /// West edge value.
    #[must_use]
    pub const fn west(self) -> EdgeValue {
        self.edges[3]
    }

    /// Rotate by `quarter_turns` clockwise quarter-turns.
    ///
    /// Periodic with period 4; `quarter_turns` is reduced modulo 4, and
    /// `rotated(0)` is the identity.
    ///
    /// ```
    /// use edgematch::Tile;
    ///
    /// let tile = Tile::new(1, 2, 3, 4);
    /// assert_eq!(tile.rotated(1), Tile::new(4, 1, 2, 3));
    /// assert_eq!(tile.rotated(4), tile);
    /// ```
    #[must_use]
    pub fn rotated(self, quarter_turns: u8) -> Self {
        let k = (quarter_turns % 4) as usize;
        let mut edges = [0; 4];
        for (i, &edge) in self.edges.iter().enumerate() {
            edges[(i + k) % 4] = edge;
        }
        Self { edges }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} {} {} {})",
            self.north(),
            self.east(),
            self.south(),
            self.west()
        )
    }
}
