//! TUI Tic Tac Toe (workspace facade crate).
//!
//! Re-exports the member crates under `tui_tictactoe::{core,input,term,types}`
//! and adds the pieces the binary needs: environment configuration, log
//! setup and the [`app::App`] adapter between the terminal and the game.

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, Control};
pub use config::AppConfig;
pub use logging::init_logging;
