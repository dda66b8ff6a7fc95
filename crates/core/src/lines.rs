//! The eight winning lines.

use crate::board::Board;
use crate::types::Player;

/// Three `(row, col)` coordinates that win when owned by one player.
pub type Line = [(usize, usize); 3];

/// Rows 0-2, columns 0-2, main diagonal, anti-diagonal.
pub const WIN_LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// True when `player` owns every cell of `line`.
pub fn owns_line(board: &Board, line: &Line, player: Player) -> bool {
    let mark = player.mark();
    line.iter().all(|&(r, c)| board.get(r, c) == Some(mark))
}

/// First line in [`WIN_LINES`] order owned entirely by `player`.
pub fn find_line(board: &Board, player: Player) -> Option<Line> {
    WIN_LINES
        .iter()
        .find(|line| owns_line(board, line, player))
        .copied()
}
