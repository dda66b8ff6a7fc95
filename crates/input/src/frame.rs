//! Per-frame input collection.
//!
//! Events arrive in any order while the loop waits for the next tick. The
//! update pass drains them once per frame: placements first, in arrival
//! order, then a reset if one was requested.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, MouseEvent};

use crate::map::{map_key_event, map_mouse_event};
use crate::types::{BoardGeometry, GameAction};

/// Placements kept per frame; extra clicks within one frame are dropped.
pub const MAX_PLACEMENTS_PER_FRAME: usize = 8;

/// Placements plus one trailing reset.
pub const MAX_ACTIONS_PER_FRAME: usize = MAX_PLACEMENTS_PER_FRAME + 1;

#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    placements: ArrayVec<GameAction, MAX_PLACEMENTS_PER_FRAME>,
    reset: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mouse event. Returns true if it produced an action.
    pub fn push_mouse(&mut self, event: MouseEvent, geometry: &BoardGeometry) -> bool {
        match map_mouse_event(event, geometry) {
            Some(action) => self.push(action),
            None => false,
        }
    }

    /// Record a key press. Returns true if it produced an action.
    pub fn push_key(&mut self, key: KeyEvent) -> bool {
        match map_key_event(key) {
            Some(action) => self.push(action),
            None => false,
        }
    }

    pub fn push(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Reset => {
                self.reset = true;
                true
            }
            GameAction::Place { .. } => self.placements.try_push(action).is_ok(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty() && !self.reset
    }

    pub fn reset_requested(&self) -> bool {
        self.reset
    }

    /// Take this frame's actions, leaving the collector empty.
    pub fn drain(&mut self) -> ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME> {
        let mut out = ArrayVec::new();
        for action in self.placements.drain(..) {
            out.push(action);
        }
        if std::mem::take(&mut self.reset) {
            out.push(GameAction::Reset);
        }
        out
    }
}
