//! A player's hand: an unordered, duplicate-free set of tiles.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Tile;

/// The tiles a player has not yet placed.
///
/// Backed by a persistent set, so snapshots taken while searching share
/// structure. A tile in a hand is never simultaneously on the board:
/// placing removes it here, and the search's undo re-adds it.
///
/// The empty hand has a single representation; `is_empty` is the only
/// emptiness test.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: ImHashSet<Tile>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile. Returns false if the tile was already held.
    pub fn insert(&mut self, tile: Tile) -> bool {
        self.tiles.insert(tile).is_none()
    }

    /// Remove a tile. Returns false if the tile was not held.
    pub fn remove(&mut self, tile: Tile) -> bool {
        self.tiles.remove(&tile).is_some()
    }

    /// True iff the hand holds `tile`.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Number of tiles held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True iff no tiles are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over the held tiles in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// The held tiles in ascending order, for reproducible enumeration.
    #[must_use]
    pub fn sorted_tiles(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self.tiles.iter().copied().collect();
        tiles.sort_unstable();
        tiles
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
