//! Board module - manages the game grid
//!
//! The board is a 3x3 grid where each cell is empty or holds a player's mark.
//! Uses a flat array in row-major order (row * 3 + col).

use crate::types::{Cell, Player, BOARD_SIZE, CELL_COUNT};

/// The game board - 3 columns x 3 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        let mark = player.mark();
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (i, cell) in self.cells.iter().enumerate() {
            out[i / BOARD_SIZE][i % BOARD_SIZE] = *cell;
        }
        out
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    fn out_of_bounds_access() {
        let mut board = Board::new();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
        assert!(!board.set(3, 3, Cell::X));
        assert!(!board.is_empty_at(0, 3));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn set_is_row_major() {
        let mut board = Board::new();
        assert!(board.set(1, 2, Cell::O));
        assert_eq!(board.cells()[5], Cell::O);
        assert_eq!(board.rows()[1][2], Cell::O);
    }

    #[test]
    fn counts_and_fullness() {
        let mut board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let mark = if (row + col) % 2 == 0 { Cell::X } else { Cell::O };
                board.set(row, col, mark);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.count(Player::X), 5);
        assert_eq!(board.count(Player::O), 4);
    }
}
