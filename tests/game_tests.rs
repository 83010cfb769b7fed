//! Gameplay integration tests through the public `Game` API.

use rust_2048::persist::{decode, encode};
use rust_2048::{Direction, EngineError, Game, Milestone, Position, SAVE_LEN};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

/// A seeded game with an empty grid.
fn empty_game(seed: u64) -> Game {
    let mut game = Game::new(seed);
    game.fill_region((0, 0), (4, 4), 0).unwrap();
    game
}

/// A seeded game with the given exponents.
fn game_from(rows: [[u8; 4]; 4]) -> Game {
    let mut game = empty_game(42);
    for (r, row) in rows.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            game.set_cell(r, c, v).unwrap();
        }
    }
    game
}

// =============================================================================
// Move Scenarios
// =============================================================================

/// Two 2-tiles side by side merge into a 4 at the wall.
#[test]
fn test_left_merge_scenario() {
    let mut game = empty_game(7);
    game.set_cell(0, 0, 1).unwrap();
    game.set_cell(0, 1, 1).unwrap();

    let outcome = game.apply_move(Direction::Left);

    assert!(outcome.changed);
    assert_eq!(game.grid().get(pos(0, 0)), 2);
    assert_eq!(game.score(), 4);
    assert_eq!(outcome.score_delta, 4);

    // Exactly one new tile, somewhere other than the merged cell
    let spawn = outcome.spawned.expect("a changing move spawns");
    assert_ne!(spawn.position, pos(0, 0));
    assert_eq!(game.grid().occupied_count(), 2);
}

/// Undo after the merge restores the opening grid and counts the undo.
#[test]
fn test_undo_after_merge_scenario() {
    let mut game = empty_game(7);
    game.set_cell(0, 0, 1).unwrap();
    game.set_cell(0, 1, 1).unwrap();
    let before = *game.grid();

    game.apply_move(Direction::Left);
    let restored = game.undo().expect("history holds the pre-move snapshot");

    assert_eq!(restored.grid, before);
    assert_eq!(*game.grid(), before);
    assert_eq!(game.score(), 0);
    assert_eq!(game.undo_count(), 1);
    assert!(!game.can_undo());
}

/// A row of four 2s becomes two 4s, never an 8.
#[test]
fn test_four_equal_tiles_merge_pairwise() {
    let mut game = game_from([[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);

    let outcome = game.apply_move(Direction::Left);

    assert_eq!(game.grid().get(pos(0, 0)), 2);
    assert_eq!(game.grid().get(pos(0, 1)), 2);
    assert_eq!(outcome.merge_count(), 2);
    assert_eq!(game.score(), 8);
}

/// Columns never interact on a vertical move.
#[test]
fn test_columns_are_independent() {
    let mut game = game_from([[0, 1, 0, 0], [1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

    let outcome = game.apply_move(Direction::Down);

    assert_eq!(outcome.merge_count(), 0);
    assert_eq!(game.grid().get(pos(3, 0)), 1);
    assert_eq!(game.grid().get(pos(3, 1)), 1);
}

/// Each direction reflects the same line behaviour.
#[test]
fn test_all_directions_pack_toward_wall() {
    let cases = [
        (Direction::Up, pos(0, 0)),
        (Direction::Down, pos(3, 0)),
        (Direction::Left, pos(1, 0)),
        (Direction::Right, pos(1, 3)),
    ];
    for (direction, wall) in cases {
        let mut game = empty_game(3);
        let (a, b) = match direction {
            Direction::Up | Direction::Down => (pos(1, 0), pos(2, 0)),
            Direction::Left | Direction::Right => (pos(1, 1), pos(1, 2)),
        };
        game.set_cell(a.row(), a.col(), 4).unwrap();
        game.set_cell(b.row(), b.col(), 4).unwrap();

        let outcome = game.apply_move(direction);

        assert_eq!(game.grid().get(wall), 5, "direction {direction}");
        assert_eq!(outcome.score_delta, 32);
    }
}

/// Slides are reported with their source and destination.
#[test]
fn test_outcome_lists_slides() {
    let mut game = game_from([[0, 0, 0, 3], [0; 4], [0; 4], [0; 4]]);

    let outcome = game.apply_move(Direction::Left);

    assert_eq!(outcome.slides.len(), 1);
    assert_eq!(outcome.slides[0].from, pos(0, 3));
    assert_eq!(outcome.slides[0].to, pos(0, 0));
}

// =============================================================================
// Milestones
// =============================================================================

/// The first 2048 is reported once; a second one in the same game is not.
#[test]
fn test_first_high_tile_reported_once_per_game() {
    let mut game = game_from([[10, 10, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let outcome = game.apply_move(Direction::Left);
    assert!(matches!(
        outcome.milestones.as_slice(),
        [Milestone::FirstHighTile { .. }]
    ));

    game.fill_region((0, 0), (4, 4), 0).unwrap();
    game.set_cell(2, 0, 10).unwrap();
    game.set_cell(2, 1, 10).unwrap();
    let outcome = game.apply_move(Direction::Left);
    assert!(outcome.milestones.is_empty());

    // A new game re-arms the milestone
    game.new_game(Some(1));
    assert!(!game.high_tile_reached());
}

/// Reaching the largest tile is an observation; play continues.
#[test]
fn test_max_tile_does_not_end_game() {
    let mut game = game_from([[16, 16, 0, 0], [0; 4], [0; 4], [0; 4]]);

    let outcome = game.apply_move(Direction::Left);

    assert!(outcome
        .milestones
        .contains(&Milestone::MaxTile { position: pos(0, 0) }));
    assert!(!game.is_over());
    assert!(game.apply_move(Direction::Right).changed);
}

// =============================================================================
// Undo
// =============================================================================

/// The lock refuses undo without consuming history.
#[test]
fn test_undo_lock() {
    let mut game = game_from([[1, 1, 0, 0], [0; 4], [0; 4], [0; 4]]);
    game.apply_move(Direction::Left);
    game.set_undo_lock(true);
    let state = game.save_state();

    assert_eq!(game.undo(), None);
    assert_eq!(game.save_state(), state);
    assert_eq!(game.history().len(), 1);
}

/// Undo on a fresh game is a silent no-op.
#[test]
fn test_undo_with_empty_history() {
    let mut game = Game::new(1);
    assert_eq!(game.undo(), None);
    assert_eq!(game.undo_count(), 0);
}

/// After 65 changing moves only the newest 64 can be undone.
#[test]
fn test_history_bound() {
    let mut game = empty_game(5);
    let mut moves = 0;
    let mut first_pre_move_score = None;

    while moves < 65 {
        game.fill_region((0, 0), (4, 4), 0).unwrap();
        game.set_cell(0, 3, 1).unwrap();
        game.set_score(moves).unwrap();
        first_pre_move_score.get_or_insert(game.score());
        assert!(game.apply_move(Direction::Left).changed);
        moves += 1;
    }

    assert_eq!(game.history().len(), 64);
    let mut scores = Vec::new();
    while let Some(snapshot) = game.undo() {
        scores.push(snapshot.score);
    }
    assert_eq!(scores.len(), 64);
    assert!(!scores.contains(&first_pre_move_score.unwrap()));
}

// =============================================================================
// Persistence
// =============================================================================

/// Save then load reproduces the persisted fields exactly.
#[test]
fn test_save_load_round_trip() {
    let mut game = Game::new(21);
    for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
        game.apply_move(direction);
    }
    game.undo();
    game.set_undo_lock(true);

    let bytes = game.save();
    assert_eq!(bytes.len(), SAVE_LEN);

    let loaded = Game::from_save(&bytes, Default::default()).unwrap();
    assert_eq!(loaded.save_state(), game.save_state());
    assert_eq!(decode(&encode(&game.save_state())).unwrap(), game.save_state());
    assert!(loaded.history().is_empty());
}

/// Short and long buffers are rejected outright.
#[test]
fn test_load_rejects_bad_length() {
    let mut game = Game::new(21);
    let bytes = game.save();
    let state = game.save_state();

    assert!(matches!(game.load(&bytes[..SAVE_LEN - 1]), Err(EngineError::CorruptData(_))));
    assert!(matches!(game.load(&[]), Err(EngineError::CorruptData(_))));
    let mut long = bytes.clone();
    long.extend_from_slice(&[0; 4]);
    assert!(matches!(game.load(&long), Err(EngineError::CorruptData(_))));

    assert_eq!(game.save_state(), state);
}

/// Loading a grid with a 2048 marks the milestone as already reached.
#[test]
fn test_load_rederives_high_tile() {
    let mut source = empty_game(1);
    source.set_cell(1, 1, 12).unwrap();
    let bytes = source.save();

    let mut game = Game::new(2);
    assert!(!game.high_tile_reached());
    game.load(&bytes).unwrap();
    assert!(game.high_tile_reached());
}

/// A checkpoint resumes the exact spawn sequence.
#[test]
fn test_checkpoint_restore_is_deterministic() {
    let mut game = Game::new(2718);
    game.apply_move(Direction::Down);

    let bytes = game.checkpoint().unwrap();
    let mut a = Game::restore(&bytes).unwrap();
    let mut b = Game::restore(&bytes).unwrap();

    for direction in [Direction::Left, Direction::Up, Direction::Right] {
        let expected = game.apply_move(direction);
        assert_eq!(a.apply_move(direction), expected);
        assert_eq!(b.apply_move(direction), expected);
    }
    assert_eq!(a.undo(), game.undo());
}

// =============================================================================
// Determinism
// =============================================================================

/// Same seed and same moves replay the same game.
#[test]
fn test_seeded_games_replay() {
    let mut a = Game::new(54321);
    let mut b = Game::new(54321);

    for i in 0..200 {
        let direction = Direction::all()[i % 4];
        assert_eq!(a.apply_move(direction), b.apply_move(direction));
    }
    assert_eq!(a.save(), b.save());
}
