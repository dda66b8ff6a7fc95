//! Log setup.
//!
//! stdout belongs to the game screen, so log output goes to a file.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the global subscriber described by `config`.
///
/// Does nothing when logging is disabled or a subscriber is already set.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
