//! Property tests for board invariants.
//!
//! Random boards and random move sequences must never break the rules a
//! presentation layer relies on: valid tiles, non-decreasing score, spawns
//! only on empty cells, and no effect outside `Playing`.

use proptest::prelude::*;

use rust_2048::core::is_valid_tile;
use rust_2048::{merge_line, Board, Direction, EngineConfig, GameEngine, GameRng, GameStatus};

fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => Just(0u32),
        5 => (1u32..=11).prop_map(|exp| 1u32 << exp),
    ]
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform4(prop::array::uniform4(tile()))
        .prop_map(|rows| Board::from_rows(rows).expect("generated tiles are valid"))
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    /// Every reachable board holds only valid tiles and score never drops.
    #[test]
    fn prop_moves_keep_invariants(
        seed in any::<u64>(),
        moves in prop::collection::vec(any_direction(), 0..200),
    ) {
        let mut engine = GameEngine::with_seed(None, seed);
        engine.start();

        let mut last_score = 0;
        for direction in moves {
            let outcome = engine.apply_move(direction);
            prop_assert!(engine.state().cells().all(|(_, _, v)| is_valid_tile(v)));
            prop_assert!(engine.score() >= last_score);
            prop_assert_eq!(engine.score() - last_score, outcome.gained);
            if outcome.gained > 0 {
                prop_assert!(outcome.changed);
            }
            last_score = engine.score();
        }

        engine.restart(None);
        prop_assert_eq!(engine.score(), 0);
        prop_assert_eq!(engine.state(), Board::empty());
    }

    /// An effective move spawns exactly once, with a 2 or a 4; a move that
    /// changes nothing leaves the board alone.
    #[test]
    fn prop_spawn_only_after_change(board in any_board(), direction in any_direction(), seed in any::<u64>()) {
        let config = EngineConfig::new().with_start_tiles(0);
        let mut engine = GameEngine::with_config(Some(board), config, GameRng::new(seed)).unwrap();
        engine.start();

        let outcome = engine.apply_move(direction);

        match outcome.spawned {
            Some(spawn) => {
                prop_assert!(outcome.changed);
                prop_assert!(spawn.value == 2 || spawn.value == 4);
                prop_assert_eq!(engine.state().get(spawn.row, spawn.col), spawn.value);
            }
            None => {
                prop_assert!(!outcome.changed);
                prop_assert_eq!(engine.state(), board);
            }
        }
    }

    /// `add_random_tile` only writes 2 or 4 into a previously empty cell.
    #[test]
    fn prop_add_random_tile(board in any_board(), seed in any::<u64>()) {
        let mut engine = GameEngine::with_seed(Some(board), seed);

        match engine.add_random_tile() {
            Some(spawn) => {
                prop_assert_eq!(board.get(spawn.row, spawn.col), 0);
                prop_assert!(spawn.value == 2 || spawn.value == 4);
                for (row, col, value) in engine.state().cells() {
                    if (row, col) != (spawn.row, spawn.col) {
                        prop_assert_eq!(value, board.get(row, col));
                    }
                }
            }
            None => {
                prop_assert!(board.is_full());
                prop_assert_eq!(engine.state(), board);
            }
        }
    }

    /// Moves outside `Playing` never change anything.
    #[test]
    fn prop_moves_ignored_when_idle(board in any_board(), direction in any_direction()) {
        let mut engine = GameEngine::with_seed(Some(board), 0);

        let outcome = engine.apply_move(direction);
        prop_assert!(!outcome.changed);
        prop_assert_eq!(engine.state(), board);
        prop_assert_eq!(engine.score(), 0);
        prop_assert_eq!(engine.status(), GameStatus::Idle);
    }

    /// Merging keeps the tile sum and packs tiles to the front.
    #[test]
    fn prop_merge_line_conserves_sum(line in prop::array::uniform4(tile())) {
        let merged = merge_line(line);
        let before: u64 = line.iter().map(|&v| u64::from(v)).sum();
        let after: u64 = merged.line.iter().map(|&v| u64::from(v)).sum();
        prop_assert_eq!(before, after);

        let first_zero = merged.line.iter().position(|&v| v == 0).unwrap_or(4);
        prop_assert!(merged.line[first_zero..].iter().all(|&v| v == 0));

        // Without a merge the line was only compacted, so it is settled.
        if merged.gained == 0 {
            prop_assert_eq!(merge_line(merged.line).line, merged.line);
        }
    }
}
