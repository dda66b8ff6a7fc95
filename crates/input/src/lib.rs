//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm`
//! mouse and key events into [`crate::types::GameAction`] and collects the
//! actions of one frame so the update pass can apply them in a fixed order.

pub mod frame;
pub mod map;

pub use tui_tictactoe_types as types;

pub use frame::FrameInput;
pub use map::{map_key_event, map_mouse_event, should_quit};
