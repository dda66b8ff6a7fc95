//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no UI or I/O dependencies, so they can be
//! shared by the game core, the input mapping and the terminal renderer.
//!
//! # Board
//!
//! The board is a fixed 3x3 grid indexed by `(row, col)`, 0-based, row-major.
//! X always moves first.
//!
//! # Layout Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_SIZE` | 50 | Side of one board cell on the reference canvas |
//! | `BOARD_OFFSET` | 5 | Distance from the canvas edge to the board |
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{BoardGeometry, Cell, Player, CELL_SIZE, BOARD_OFFSET};
//!
//! assert_eq!(Player::X.other(), Player::O);
//! assert_eq!(Player::O.mark(), Cell::O);
//!
//! let geometry = BoardGeometry::square(CELL_SIZE, BOARD_OFFSET);
//! assert_eq!(geometry.hit_test(5, 5), Some((0, 0)));
//! assert_eq!(geometry.hit_test(154, 60), Some((1, 2)));
//! assert_eq!(geometry.hit_test(155, 60), None);
//! ```

use std::fmt;

/// Board side length in cells.
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Side of one board cell on the reference canvas.
pub const CELL_SIZE: u16 = 50;

/// Distance from the canvas edge to the top-left corner of the board.
pub const BOARD_OFFSET: u16 = 5;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Window/screen title.
pub const TITLE: &str = "Tic Tac Toe";

/// Shown only while the game is in a terminal state.
pub const GAME_OVER_MESSAGE: &str = "Game Over! Press R to restart.";

/// The two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player leaves on the board.
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The player whose mark occupies this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Derived game status.
///
/// `Won` and `Drawn` are terminal: only a reset leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(p) => Some(p),
            _ => None,
        }
    }
}

/// Why an in-range move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    CellOccupied,
    GameOver,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::CellOccupied => f.write_str("cell occupied"),
            MoveRejection::GameOver => f.write_str("game over"),
        }
    }
}

/// Outcome of a move attempt with in-range coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveResult {
    /// The mark was placed; carries the status after the move.
    Accepted(GameStatus),
    /// Nothing changed.
    Rejected(MoveRejection),
}

impl MoveResult {
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }
}

/// Errors from the move operation.
///
/// Only raised for coordinates a correct input adapter never produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid coordinate ({row}, {col}): rows and columns must be in 0..3")]
    InvalidCoordinate { row: usize, col: usize },
}

/// Actions the input layer forwards to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Place { row: usize, col: usize },
    Reset,
}

/// Placement of the 3x3 board on a drawing surface.
///
/// Maps surface coordinates to board cells and back. Cells need not be
/// square: terminal glyphs are roughly twice as tall as they are wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardGeometry {
    pub const fn new(origin_x: u16, origin_y: u16, cell_w: u16, cell_h: u16) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_w,
            cell_h,
        }
    }

    /// Square cells of side `cell_size` starting at `(offset, offset)`.
    pub const fn square(cell_size: u16, offset: u16) -> Self {
        Self::new(offset, offset, cell_size, cell_size)
    }

    /// Total board width.
    pub fn width(&self) -> u16 {
        self.cell_w.saturating_mul(BOARD_SIZE as u16)
    }

    /// Total board height.
    pub fn height(&self) -> u16 {
        self.cell_h.saturating_mul(BOARD_SIZE as u16)
    }

    /// Map a surface point to `(row, col)`.
    ///
    /// Valid only for `origin <= x < origin + 3 * cell_w` (and likewise for y).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        if self.cell_w == 0 || self.cell_h == 0 {
            return None;
        }
        let dx = x.checked_sub(self.origin_x)?;
        let dy = y.checked_sub(self.origin_y)?;
        if dx >= self.width() || dy >= self.height() {
            return None;
        }
        Some(((dy / self.cell_h) as usize, (dx / self.cell_w) as usize))
    }

    /// Top-left corner of a cell.
    pub fn cell_origin(&self, row: usize, col: usize) -> (u16, u16) {
        (
            self.origin_x + (col as u16) * self.cell_w,
            self.origin_y + (row as u16) * self.cell_h,
        )
    }

    /// Center of a cell (rounded down).
    pub fn cell_center(&self, row: usize, col: usize) -> (u16, u16) {
        let (x, y) = self.cell_origin(row, col);
        (x + self.cell_w / 2, y + self.cell_h / 2)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::square(CELL_SIZE, BOARD_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_layout_spans_three_cells() {
        let g = BoardGeometry::default();
        assert_eq!(g.width(), 150);
        assert_eq!(g.height(), 150);
        assert_eq!((g.origin_x, g.origin_y), (BOARD_OFFSET, BOARD_OFFSET));
    }

    #[test]
    fn hit_test_maps_cell_bounds() {
        let g = BoardGeometry::square(CELL_SIZE, BOARD_OFFSET);
        assert_eq!(g.hit_test(5, 5), Some((0, 0)));
        assert_eq!(g.hit_test(54, 54), Some((0, 0)));
        assert_eq!(g.hit_test(55, 54), Some((0, 1)));
        assert_eq!(g.hit_test(54, 55), Some((1, 0)));
        assert_eq!(g.hit_test(154, 154), Some((2, 2)));
    }

    #[test]
    fn hit_test_rejects_outside_board() {
        let g = BoardGeometry::square(CELL_SIZE, BOARD_OFFSET);
        assert_eq!(g.hit_test(4, 50), None);
        assert_eq!(g.hit_test(50, 4), None);
        assert_eq!(g.hit_test(155, 50), None);
        assert_eq!(g.hit_test(50, 155), None);
        assert_eq!(g.hit_test(0, 0), None);
    }

    #[test]
    fn hit_test_handles_rectangular_cells() {
        let g = BoardGeometry::new(10, 2, 8, 4);
        assert_eq!(g.hit_test(10, 2), Some((0, 0)));
        assert_eq!(g.hit_test(17, 5), Some((0, 0)));
        assert_eq!(g.hit_test(18, 6), Some((1, 1)));
        assert_eq!(g.hit_test(33, 13), Some((2, 2)));
        assert_eq!(g.hit_test(34, 13), None);
        assert_eq!(g.hit_test(33, 14), None);
    }

    #[test]
    fn degenerate_geometry_never_hits() {
        let g = BoardGeometry::new(0, 0, 0, 0);
        assert_eq!(g.hit_test(0, 0), None);
    }

    #[test]
    fn cell_center_is_inside_cell() {
        let g = BoardGeometry::default();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let (x, y) = g.cell_center(row, col);
                assert_eq!(g.hit_test(x, y), Some((row, col)));
            }
        }
    }

    #[test]
    fn player_alternation_and_marks() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
        assert_eq!(Player::X.mark().owner(), Some(Player::X));
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Player::O.to_string(), "O");
    }

    #[test]
    fn status_terminality() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won(Player::O).is_terminal());
        assert!(GameStatus::Drawn.is_terminal());
        assert_eq!(GameStatus::Won(Player::X).winner(), Some(Player::X));
        assert_eq!(GameStatus::Drawn.winner(), None);
    }

    #[test]
    fn invalid_coordinate_display() {
        let err = MoveError::InvalidCoordinate { row: 3, col: 0 };
        assert_eq!(
            err.to_string(),
            "invalid coordinate (3, 0): rows and columns must be in 0..3"
        );
    }
}
