//! Terminal "game renderer" module.
//!
//! A small immediate-mode rendering layer for terminal gameplay. Each frame
//! the whole picture is redrawn into a framebuffer from a game snapshot, and
//! the renderer flushes only what changed to the terminal.
//!
//! Goals:
//! - Keep `core` free of any drawing or terminal code
//! - Share one board geometry between drawing and mouse hit-testing
//! - Compensate for the terminal glyph aspect ratio (cells 2x wider than tall)

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, DirtyRun, TerminalRenderer};
