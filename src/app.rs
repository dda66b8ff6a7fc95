//! The presentation-shell adapter.
//!
//! Turns terminal events into game actions and the game into frames. One
//! `update` and one `draw` happen per tick, strictly in that order, on the
//! loop's thread.

use crossterm::event::{Event, KeyEventKind};
use tracing::{debug, warn};

use crate::core::{GameSnapshot, GameState};
use crate::input::{should_quit, FrameInput};
use crate::term::{FrameBuffer, GameView, Viewport};
use crate::types::{BoardGeometry, MoveResult};

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// The terminal changed size; repaint everything.
    Redraw,
    Quit,
}

pub struct App {
    game: GameState,
    input: FrameInput,
    view: GameView,
    viewport: Viewport,
    snapshot: GameSnapshot,
}

impl App {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_view(GameView::default(), viewport)
    }

    pub fn with_view(view: GameView, viewport: Viewport) -> Self {
        let game = GameState::new();
        let snapshot = game.snapshot();
        Self {
            game,
            input: FrameInput::new(),
            view,
            viewport,
            snapshot,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Where the board currently sits on screen.
    pub fn geometry(&self) -> BoardGeometry {
        self.view.layout(self.viewport)
    }

    /// Queue one terminal event for the next update.
    pub fn handle_event(&mut self, event: Event) -> Control {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Control::Quit;
                }
                self.input.push_key(key);
            }
            Event::Mouse(mouse) => {
                let geometry = self.geometry();
                self.input.push_mouse(mouse, &geometry);
            }
            Event::Resize(width, height) => {
                self.viewport = Viewport::new(width, height);
                debug!(width, height, "viewport resized");
                return Control::Redraw;
            }
            _ => {}
        }
        Control::Continue
    }

    /// Apply this frame's input to the game.
    pub fn update(&mut self) {
        for action in self.input.drain() {
            match self.game.apply_action(action) {
                Ok(Some(MoveResult::Rejected(reason))) => {
                    debug!(?action, %reason, "action ignored");
                }
                Ok(_) => {}
                Err(err) => warn!(?action, %err, "input adapter produced a bad move"),
            }
        }
        self.game.snapshot_into(&mut self.snapshot);
    }

    /// Render the latest snapshot into `fb`.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        self.view.render_into(&self.snapshot, self.viewport, fb);
    }
}
