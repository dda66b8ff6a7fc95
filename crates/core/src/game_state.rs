//! Game state module - manages the complete game state
//!
//! Owns the board, the player to move and the status. Every change to game
//! progress goes through [`GameState::attempt_move`] or [`GameState::reset`].

use tracing::{debug, info};

use crate::board::Board;
use crate::lines::{self, Line};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Player,
    status: GameStatus,
}

impl GameState {
    /// Create a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Cell at (row, col); None when out of range.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Marks placed since the last reset.
    pub fn move_count(&self) -> usize {
        self.board.count(Player::X) + self.board.count(Player::O)
    }

    /// Place the current player's mark at (row, col).
    ///
    /// Out-of-range coordinates are an error. A finished game or an occupied
    /// cell rejects the move. Neither case touches the state.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveResult, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            debug!(row, col, "move out of range");
            return Err(MoveError::InvalidCoordinate { row, col });
        }

        if self.is_terminal() {
            debug!(row, col, status = ?self.status, "move rejected: game over");
            return Ok(MoveResult::Rejected(MoveRejection::GameOver));
        }

        if !self.board.is_empty_at(row, col) {
            debug!(row, col, "move rejected: cell occupied");
            return Ok(MoveResult::Rejected(MoveRejection::CellOccupied));
        }

        let player = self.current;
        self.board.set(row, col, player.mark());
        debug!(%player, row, col, "move accepted");

        if self.check_win(player) {
            self.status = GameStatus::Won(player);
            info!(%player, moves = self.move_count(), "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
            info!("game drawn");
        } else {
            self.current = player.other();
        }

        Ok(MoveResult::Accepted(self.status))
    }

    /// True iff `player` owns all three cells of any row, column or diagonal.
    pub fn check_win(&self, player: Player) -> bool {
        lines::WIN_LINES
            .iter()
            .any(|line| lines::owns_line(&self.board, line, player))
    }

    /// The first winning line `player` owns, if any.
    pub fn winning_line(&self, player: Player) -> Option<Line> {
        lines::find_line(&self.board, player)
    }

    /// Restore the initial state unconditionally.
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }

    /// Apply an input action.
    ///
    /// Returns the move outcome for placements and `None` for resets.
    pub fn apply_action(&mut self, action: GameAction) -> Result<Option<MoveResult>, MoveError> {
        match action {
            GameAction::Place { row, col } => self.attempt_move(row, col).map(Some),
            GameAction::Reset => {
                self.reset();
                Ok(None)
            }
        }
    }

    /// Copy the renderer-facing state.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot in place.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.rows();
        out.current_player = self.current;
        out.status = self.status;
        out.move_count = self.move_count() as u8;
        out.winning_line = self.status.winner().and_then(|p| self.winning_line(p));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
