//! Game state and the turn and loss rules.
//!
//! ## Placement lifecycle
//!
//! [`GameState::play`] validates and mutates permanently: place the
//! oriented tile, remove it from the hand, pass the turn. The search uses
//! the crate-internal `apply_unchecked`/`undo` pair instead, which must
//! restore the state exactly.
//!
//! ## Losing
//!
//! The player on turn has lost when the opponent's hand is empty (playing
//! out your hand first wins) or when they have no legal move.

use serde::{Deserialize, Serialize};

use super::hand::Hand;
use crate::board::Board;
use crate::core::{EngineError, PlayerId, PlayerMap, Tile};
use crate::moves::{available_moves, count_available_moves, Move};

/// Complete game state: board, both hands, and the player on turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    hands: PlayerMap<Hand>,
    player_on_turn: PlayerId,
}

/// Builder for an initial [`GameState`].
///
/// ## Example
///
/// ```
/// use edgematch::{GameBuilder, PlayerId, Tile};
///
/// let state = GameBuilder::new()
///     .hand(PlayerId::ZERO, [Tile::new(1, 2, 3, 4)])
///     .hand(PlayerId::ONE, [Tile::new(5, 6, 7, 8)])
///     .build();
///
/// assert_eq!(state.player_on_turn(), PlayerId::ZERO);
/// assert_eq!(state.board().size(), 5);
/// ```
pub struct GameBuilder {
    board: Board,
    hands: PlayerMap<Hand>,
    starting_player: PlayerId,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            board: Board::new(Board::DEFAULT_SIZE),
            hands: PlayerMap::with_default(),
            starting_player: PlayerId::ZERO,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an all-vacant board of the given dimension.
    pub fn board_size(mut self, size: usize) -> Self {
        self.board = Board::new(size);
        self
    }

    /// Start from a pre-filled board.
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Set a player's hand. Duplicate tile values collapse.
    pub fn hand(mut self, player: PlayerId, tiles: impl IntoIterator<Item = Tile>) -> Self {
        self.hands[player] = tiles.into_iter().collect();
        self
    }

    /// Set the player on turn at the start.
    pub fn starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = player;
        self
    }

    /// Build the initial state.
    #[must_use]
    pub fn build(self) -> GameState {
        GameState {
            board: self.board,
            hands: self.hands,
            player_on_turn: self.starting_player,
        }
    }
}

impl GameState {
    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// The player on turn.
    #[must_use]
    pub fn player_on_turn(&self) -> PlayerId {
        self.player_on_turn
    }

    /// Legal moves for the player on turn.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        available_moves(&self.board, &self.hands[self.player_on_turn])
    }

    /// Whether the player on turn has lost.
    ///
    /// True iff the opponent's hand is empty, or the player on turn has
    /// zero available moves. The first condition deliberately checks the
    /// opponent: running out of tiles first is the win condition.
    #[must_use]
    pub fn player_has_lost(&self) -> bool {
        if self.hands[self.player_on_turn.other()].is_empty() {
            return true;
        }
        count_available_moves(&self.board, &self.hands[self.player_on_turn]) == 0
    }

    /// Play a move for the player on turn and pass the turn.
    ///
    /// Fails with [`EngineError::InvalidPlacement`] when the hand does not
    /// hold the move's tile or the placement is illegal; the state is
    /// untouched on error.
    pub fn play(&mut self, mv: &Move) -> Result<(), EngineError> {
        let oriented = mv.oriented();
        if !self.hands[self.player_on_turn].contains(mv.tile) {
            return Err(EngineError::InvalidPlacement {
                coord: mv.coord,
                tile: oriented,
            });
        }
        if !self.board.can_place(mv.coord, oriented)? {
            return Err(EngineError::InvalidPlacement {
                coord: mv.coord,
                tile: oriented,
            });
        }
        self.apply_unchecked(mv);
        Ok(())
    }

    // Apply an enumerated move without re-validating. The search pairs
    // this with `undo`.
    pub(crate) fn apply_unchecked(&mut self, mv: &Move) {
        self.board.put(mv.coord, mv.oriented());
        self.hands[self.player_on_turn].remove(mv.tile);
        self.player_on_turn = self.player_on_turn.other();
    }

    // Exact reverse of `apply_unchecked`: take the turn back, clear the
    // cell, return the tile to the hand.
    pub(crate) fn undo(&mut self, mv: &Move) {
        self.player_on_turn = self.player_on_turn.other();
        self.board.clear(mv.coord);
        self.hands[self.player_on_turn].insert(mv.tile);
    }

    // Board access for the greedy search's temporary placements.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
