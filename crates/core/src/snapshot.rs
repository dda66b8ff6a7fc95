//! Snapshot module - the per-frame copy of the game handed to the renderer

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::lines::Line;
use crate::types::{Cell, GameStatus, Player, BOARD_SIZE};

/// Read-only view of the game for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub current_player: Player,
    pub status: GameStatus,
    pub move_count: u8,
    /// Set only when the status is `Won`.
    pub winning_line: Option<Line>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.move_count = 0;
        self.winning_line = None;
    }

    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn is_on_winning_line(&self, row: usize, col: usize) -> bool {
        self.winning_line
            .map(|line| line.contains(&(row, col)))
            .unwrap_or(false)
    }

    /// Stable within one process; used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_player: Player::X,
            status: GameStatus::InProgress,
            move_count: 0,
            winning_line: None,
        }
    }
}
