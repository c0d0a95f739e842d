//! Engine integration tests: new games, moves, and the rules they compose.

use proptest::prelude::*;
use threes_engine::board::{Board, Direction};
use threes_engine::core::{GameConfig, GameError, GameState, Prng, QueueEntry, VALID_TILES};
use threes_engine::queue::NextQueue;
use threes_engine::rules::{reduce, score_tile, special_candidates};
use threes_engine::{apply_move, can_move, new_game};

fn state_with(board: Board, queue: &[QueueEntry], seed: u64) -> GameState {
    GameState::from_parts(board, NextQueue::from_entries(queue.iter().copied()).unwrap(), Prng::seeded(seed))
}

// =============================================================================
// Rules
// =============================================================================

#[test]
fn test_reduce_examples() {
    assert_eq!(reduce(&[1, 1, 2, 2]), vec![1, 3, 2, 0]);
    assert_eq!(reduce(&[0, 0, 0, 0]), vec![0, 0, 0, 0]);
    assert_eq!(reduce(&[1, 0, 0, 0]), vec![1, 0, 0, 0]);
}

#[test]
fn test_score_and_candidates() {
    assert_eq!(score_tile(3072), Ok(177_147));
    assert_eq!(special_candidates(384).as_slice(), &[48, 24, 12]);
}

#[test]
fn test_only_left_can_move() {
    let board = Board::from_cells(4, 4, [0, 1, 1, 1].repeat(4)).unwrap();
    let state = GameState::from_parts(board, NextQueue::new(), Prng::seeded(1));

    assert!(can_move(&state, Direction::Left));
    assert!(!can_move(&state, Direction::Right));
    assert!(!can_move(&state, Direction::Up));
    assert!(!can_move(&state, Direction::Down));
    assert_eq!(state.legal_moves(), vec![Direction::Left]);
    assert_eq!(
        apply_move(&state, Direction::Up),
        Err(GameError::IllegalMove(Direction::Up))
    );
}

// =============================================================================
// New Games
// =============================================================================

#[test]
fn test_new_game_shape() {
    let state = new_game(&GameConfig::new().with_seed(2024)).unwrap();

    assert_eq!(state.board().empty_count(), 7);
    assert!((3..=4).contains(&state.queue().len()));
}

#[test]
fn test_non_square_game() {
    let state = new_game(&GameConfig::new().with_size(5, 3).with_seed(11)).unwrap();

    assert_eq!((state.width(), state.height()), (5, 3));
    assert_eq!(state.board().empty_count(), 15 - 8);
    assert_eq!(state.dimension(), 3);
}

#[test]
fn test_unseeded_games_are_valid() {
    let state = new_game(&GameConfig::default()).unwrap();
    assert_eq!(state.board().empty_count(), 7);
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn test_move_inserts_at_trailing_edge() {
    // Only the top row can move left.
    let board = Board::from_cells(3, 2, [0, 3, 6, 3, 6, 3]).unwrap();
    let state = state_with(board, &[QueueEntry::Tile(2), QueueEntry::Tile(1)], 9);

    let next = state.apply_move(Direction::Left).unwrap();

    assert_eq!(next.board().cells().iter().copied().collect::<Vec<_>>(), vec![3, 6, 2, 3, 6, 3]);
    assert_eq!(next.queue().front(), Some(QueueEntry::Tile(1)));
    assert_eq!(next.rng(), state.rng());
}

#[test]
fn test_special_resolves_against_board() {
    // Max 48 gives the single candidate 6, so no draw is spent on it.
    let board = Board::from_cells(2, 1, [0, 48]).unwrap();
    let state = state_with(board, &[QueueEntry::Special, QueueEntry::Tile(1)], 4);

    let next = state.apply_move(Direction::Left).unwrap();

    assert_eq!(next.board().cells().iter().copied().collect::<Vec<_>>(), vec![48, 6]);
    assert_eq!(next.rng(), state.rng());
}

#[test]
fn test_view_serializes() {
    let state = new_game(&GameConfig::new().with_seed(5)).unwrap();
    let view = state.view().unwrap();

    let json = serde_json::to_string(&view).unwrap();
    let back: threes_engine::BoardView = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);
    assert!(!view.next.is_empty());
}

#[test]
fn test_state_serde_round_trip() {
    let state = new_game(&GameConfig::new().with_seed(6)).unwrap();
    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(back, state);
    for direction in Direction::ALL {
        assert_eq!(back.apply_move(direction), state.apply_move(direction));
    }
}

#[test]
fn test_saved_state_with_bad_queue_is_rejected() {
    let empty_entry = r#"{"board":{"width":2,"height":1,"cells":[0,3]},"queue":{"entries":[{"Tile":0},{"Tile":96}]},"rng":{"state":1}}"#;
    assert!(serde_json::from_str::<GameState>(empty_entry).is_err());

    let bad_rank = r#"{"board":{"width":2,"height":1,"cells":[0,3]},"queue":{"entries":[{"Tile":4}]},"rng":{"state":1}}"#;
    assert!(serde_json::from_str::<GameState>(bad_rank).is_err());

    let good = r#"{"board":{"width":2,"height":1,"cells":[0,3]},"queue":{"entries":[{"Tile":96},"Special"]},"rng":{"state":1}}"#;
    let state: GameState = serde_json::from_str(good).unwrap();
    assert_eq!(state.peek_next().unwrap().as_slice(), &[96]);
}

// =============================================================================
// Properties
// =============================================================================

fn board_strategy() -> impl Strategy<Value = Board> {
    (1usize..6, 1usize..6).prop_flat_map(|(width, height)| {
        proptest::collection::vec(proptest::sample::select(VALID_TILES[..8].to_vec()), width * height)
            .prop_map(move |cells| Board::from_cells(width, height, cells).unwrap())
    })
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    proptest::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_slices_round_trip(board in board_strategy(), direction in direction_strategy()) {
        let slices = board.to_slices(direction);
        let rebuilt = Board::from_slices(&slices, direction, board.width(), board.height()).unwrap();
        prop_assert_eq!(rebuilt, board);
    }

    #[test]
    fn prop_games_replay_identically(
        seed in any::<u64>(),
        directions in proptest::collection::vec(direction_strategy(), 0..40),
    ) {
        let config = GameConfig::new().with_seed(seed);
        let mut a = new_game(&config).unwrap();
        let mut b = new_game(&config).unwrap();
        prop_assert_eq!(&a, &b);

        for direction in directions {
            let next_a = a.apply_move(direction);
            let next_b = b.apply_move(direction);
            prop_assert_eq!(&next_a, &next_b);
            if let (Ok(na), Ok(nb)) = (next_a, next_b) {
                a = na;
                b = nb;
            }
        }
    }

    #[test]
    fn prop_legal_move_keeps_invariants(
        seed in any::<u64>(),
        directions in proptest::collection::vec(direction_strategy(), 1..60),
    ) {
        let mut state = new_game(&GameConfig::new().with_seed(seed)).unwrap();

        for direction in directions {
            let legal = state.can_move(direction);
            match state.apply_move(direction) {
                Ok(next) => {
                    prop_assert!(legal);
                    prop_assert_ne!(next.board(), state.board());
                    prop_assert!(!next.queue().is_empty());
                    prop_assert!(next.board().max_tile() >= state.board().max_tile());
                    prop_assert_eq!(next.board().cells().len(), 16);
                    state = next;
                }
                Err(err) => {
                    prop_assert!(!legal);
                    prop_assert_eq!(err, GameError::IllegalMove(direction));
                }
            }
        }
    }
}
