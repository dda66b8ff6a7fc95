//! Runtime configuration from environment variables.
//!
//! The game takes no command-line arguments. Layout and timing live as
//! constants in `types`; the few knobs below only affect logging and redraws.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TICTACTOE_LOG_FILE` | `tictactoe.log` | Log file path; empty disables logging |
//! | `TICTACTOE_REFRESH_MS` | `1000` | Forced redraw interval when nothing changed |
//! | `RUST_LOG` | `info` | `tracing` filter directives |

use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "tictactoe.log";
pub const DEFAULT_REFRESH_MS: u64 = 1000;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` disables logging.
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
    pub refresh_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            refresh_ms: DEFAULT_REFRESH_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_file = match lookup("TICTACTOE_LOG_FILE") {
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(PathBuf::from(v.trim())),
            None => defaults.log_file,
        };

        let log_filter = lookup("RUST_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        let refresh_ms = lookup("TICTACTOE_REFRESH_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.refresh_ms);

        Self {
            log_file,
            log_filter,
            refresh_ms,
        }
    }
}
