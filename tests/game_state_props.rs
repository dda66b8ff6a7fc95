use proptest::prelude::*;
use tui_tictactoe::core::{GameState, WIN_LINES};
use tui_tictactoe::types::{Cell, GameStatus, MoveRejection, MoveResult, Player};

fn coord() -> impl Strategy<Value = (usize, usize)> {
    (0usize..3, 0usize..3)
}

fn count(game: &GameState, cell: Cell) -> usize {
    game.board().cells().iter().filter(|&&c| c == cell).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// X-count minus O-count stays 0 or 1 through any sequence of attempts.
    #[test]
    fn mark_counts_stay_balanced(moves in prop::collection::vec(coord(), 0..30)) {
        let mut game = GameState::new();
        for (row, col) in moves {
            game.attempt_move(row, col).unwrap();
            let diff = count(&game, Cell::X) as isize - count(&game, Cell::O) as isize;
            prop_assert!(diff == 0 || diff == 1, "diff {}", diff);
        }
    }

    /// Rejected moves leave board, player and status untouched.
    #[test]
    fn rejected_moves_change_nothing(moves in prop::collection::vec(coord(), 0..30)) {
        let mut game = GameState::new();
        for (row, col) in moves {
            let before = game.clone();
            let result = game.attempt_move(row, col).unwrap();
            match result {
                MoveResult::Rejected(MoveRejection::GameOver) => {
                    prop_assert!(before.status().is_terminal());
                    prop_assert_eq!(&game, &before);
                }
                MoveResult::Rejected(MoveRejection::CellOccupied) => {
                    prop_assert!(before.cell_at(row, col) != Some(Cell::Empty));
                    prop_assert_eq!(&game, &before);
                }
                MoveResult::Accepted(status) => {
                    prop_assert_eq!(game.cell_at(row, col), Some(before.current_player().mark()));
                    prop_assert_eq!(status, game.status());
                }
            }
        }
    }

    /// The player only flips on non-terminal accepted moves.
    #[test]
    fn turn_alternates_only_while_in_progress(moves in prop::collection::vec(coord(), 0..30)) {
        let mut game = GameState::new();
        for (row, col) in moves {
            let mover = game.current_player();
            if let MoveResult::Accepted(status) = game.attempt_move(row, col).unwrap() {
                match status {
                    GameStatus::InProgress => prop_assert_eq!(game.current_player(), mover.other()),
                    GameStatus::Won(p) => {
                        prop_assert_eq!(p, mover);
                        prop_assert_eq!(game.current_player(), mover);
                    }
                    GameStatus::Drawn => prop_assert_eq!(game.current_player(), mover),
                }
            }
        }
    }

    /// check_win agrees with a direct scan of the eight lines.
    #[test]
    fn check_win_matches_line_scan(moves in prop::collection::vec(coord(), 0..30)) {
        let mut game = GameState::new();
        for (row, col) in moves {
            let _ = game.attempt_move(row, col);
        }
        for player in [Player::X, Player::O] {
            let expected = WIN_LINES.iter().any(|line| {
                line.iter().all(|&(r, c)| game.cell_at(r, c) == Some(player.mark()))
            });
            prop_assert_eq!(game.check_win(player), expected);
        }
    }

    /// Reset always returns to the initial state.
    #[test]
    fn reset_restores_initial_state(moves in prop::collection::vec(coord(), 0..30)) {
        let mut game = GameState::new();
        for (row, col) in moves {
            let _ = game.attempt_move(row, col);
        }
        game.reset();
        prop_assert_eq!(&game, &GameState::new());
        prop_assert_eq!(game.current_player(), Player::X);
        prop_assert_eq!(game.status(), GameStatus::InProgress);
        prop_assert_eq!(count(&game, Cell::Empty), 9);
    }

    /// Out-of-range coordinates are errors and never mutate.
    #[test]
    fn out_of_range_never_mutates(
        moves in prop::collection::vec(coord(), 0..10),
        row in 0usize..10,
        col in 3usize..10,
        swap in any::<bool>(),
    ) {
        let (row, col) = if swap { (col, row) } else { (row, col) };
        let mut game = GameState::new();
        for (r, c) in moves {
            let _ = game.attempt_move(r, c);
        }
        let before = game.clone();
        prop_assert!(game.attempt_move(row, col).is_err());
        prop_assert_eq!(&game, &before);
    }
}
