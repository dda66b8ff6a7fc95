//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **no dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: The same move sequence always yields the same state
//! - **Testable**: Every rule can be exercised without a terminal
//! - **Portable**: Any presentation shell can drive it
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 grid of cells
//! - [`lines`]: The eight winning lines (3 rows, 3 columns, 2 diagonals)
//! - [`game_state`]: Board, current player and status; the sole mutator of game progress
//! - [`snapshot`]: Copyable read-only view handed to the renderer each frame
//!
//! # Game Rules
//!
//! - X always moves first and turns strictly alternate.
//! - A move is rejected when the cell is occupied or the game is over;
//!   rejected moves never change anything.
//! - The player who just moved wins when they own all three cells of a line.
//! - A full board with no winner is a draw.
//! - Reset restores an empty board with X to move.
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameState;
//! use tui_tictactoe_types::{GameStatus, MoveResult, Player};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     game.attempt_move(row, col).unwrap();
//! }
//! let result = game.attempt_move(0, 2).unwrap();
//!
//! assert_eq!(result, MoveResult::Accepted(GameStatus::Won(Player::X)));
//! assert!(game.check_win(Player::X));
//! ```

pub mod board;
pub mod game_state;
pub mod lines;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use lines::{Line, WIN_LINES};
pub use snapshot::GameSnapshot;
