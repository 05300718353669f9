//! Exhaustive and greedy search integration tests.

use edgematch::{
    best_move_greedy, current_player_can_win, Board, Coord, EngineError, GameBuilder, PlayerId,
    Tile,
};

/// A ring of all-5 tiles around a vacant (2, 2), so the gap's four
/// neighbors all face it with edge value 5.
fn ring_with_gap() -> Board {
    let mut board = Board::new(5);
    let five = Tile::new(5, 5, 5, 5);
    for coord in [
        Coord::new(1, 2),
        Coord::new(1, 1),
        Coord::new(2, 1),
        Coord::new(3, 1),
        Coord::new(3, 2),
        Coord::new(1, 3),
        Coord::new(2, 3),
    ] {
        board.place(coord, five).unwrap();
    }
    board
}

// =============================================================================
// Exhaustive Search
// =============================================================================

#[test]
fn test_last_tile_into_matching_gap_wins() {
    // Single tile (5 5 5 5) for the player on turn, and a cell whose four
    // neighbors all face it with 5s. Any placement plays out the hand.
    let board = ring_with_gap();
    assert!(board.can_place(Coord::new(2, 2), Tile::new(5, 5, 5, 5)).unwrap());

    let mut state = GameBuilder::new()
        .board(board)
        .hand(PlayerId::ZERO, [Tile::new(5, 5, 5, 5)])
        .hand(PlayerId::ONE, [Tile::new(7, 7, 7, 7)])
        .build();
    let before = state.clone();

    assert!(current_player_can_win(&mut state));
    assert_eq!(state, before);
}

#[test]
fn test_search_restores_state_on_loss_too() {
    let mut board = Board::new(5);
    board.place(Coord::new(2, 2), Tile::new(5, 5, 5, 5)).unwrap();

    // Player 0 cannot empty a two-tile hand before player 1 plays their
    // only tile, and can never block the all-5 reply.
    let mut state = GameBuilder::new()
        .board(board)
        .hand(PlayerId::ZERO, [Tile::new(5, 6, 5, 6), Tile::new(6, 5, 6, 5)])
        .hand(PlayerId::ONE, [Tile::new(5, 5, 5, 5)])
        .build();
    let before = state.clone();

    assert!(!state.legal_moves().is_empty());
    assert!(!current_player_can_win(&mut state));
    assert_eq!(state, before);
}

#[test]
fn test_win_by_blocking_on_tiny_board() {
    // One cell: whoever places first leaves the opponent with no cell.
    let mut state = GameBuilder::new()
        .board_size(1)
        .hand(PlayerId::ZERO, [Tile::new(1, 2, 3, 4), Tile::new(9, 9, 9, 9)])
        .hand(PlayerId::ONE, [Tile::new(5, 6, 7, 8)])
        .build();
    let before = state.clone();

    assert!(current_player_can_win(&mut state));
    assert_eq!(state, before);
}

#[test]
fn test_full_game_from_empty_board() {
    // Player 0 opens anywhere; player 1's tile matches nothing, so the
    // opening move already decides the game.
    let mut state = GameBuilder::new()
        .board_size(3)
        .hand(PlayerId::ZERO, [Tile::new(1, 1, 1, 1)])
        .hand(PlayerId::ONE, [Tile::new(2, 2, 2, 2)])
        .build();
    let before = state.clone();

    assert!(current_player_can_win(&mut state));
    assert_eq!(state, before);
}

// =============================================================================
// Greedy Heuristic
// =============================================================================

#[test]
fn test_greedy_fails_without_moves() {
    let mut board = Board::new(5);
    board.place(Coord::new(2, 2), Tile::new(1, 2, 3, 4)).unwrap();

    let mut state = GameBuilder::new()
        .board(board)
        .hand(PlayerId::ZERO, [Tile::new(9, 9, 9, 9)])
        .hand(PlayerId::ONE, [Tile::new(1, 1, 1, 1)])
        .build();

    assert!(state.player_has_lost());
    assert_eq!(best_move_greedy(&mut state), Err(EngineError::EmptyMoveSet));
}

#[test]
fn test_greedy_move_is_playable() {
    let mut state = GameBuilder::new()
        .hand(PlayerId::ZERO, [Tile::new(1, 2, 3, 4), Tile::new(4, 4, 4, 4)])
        .hand(PlayerId::ONE, [Tile::new(3, 3, 3, 3)])
        .build();

    let mv = best_move_greedy(&mut state).unwrap();
    state.play(&mv).unwrap();
    assert_eq!(state.player_on_turn(), PlayerId::ONE);
}

#[test]
fn test_greedy_repeated_calls_agree() {
    let board = ring_with_gap();
    let mut state = GameBuilder::new()
        .board(board)
        .hand(PlayerId::ZERO, [Tile::new(5, 5, 5, 5), Tile::new(5, 0, 5, 0)])
        .hand(PlayerId::ONE, [Tile::new(5, 5, 0, 0)])
        .build();
    let before = state.clone();

    let first = best_move_greedy(&mut state).unwrap();
    let second = best_move_greedy(&mut state).unwrap();
    assert_eq!(first, second);
    assert_eq!(state, before);
}

// =============================================================================
// Greedy vs Exhaustive
// =============================================================================

#[test]
fn test_greedy_line_agrees_with_search_outcome() {
    // Play a short game with the greedy heuristic on both sides and check
    // the winner matches the exhaustive verdict at the start.
    let mut state = GameBuilder::new()
        .board_size(3)
        .hand(PlayerId::ZERO, [Tile::new(1, 1, 1, 1)])
        .hand(PlayerId::ONE, [Tile::new(2, 2, 2, 2)])
        .build();

    let mut verdict = state.clone();
    assert!(current_player_can_win(&mut verdict));

    // Player 0 to win: after their greedy move, player 1 must be lost.
    let mv = best_move_greedy(&mut state).unwrap();
    state.play(&mv).unwrap();
    assert!(state.player_has_lost());
}
