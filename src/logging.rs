//! File logging.
//!
//! The terminal is owned by the game, so log lines go to the file named by
//! `TYPING_GEEK_LOG_PATH`. `RUST_LOG` selects levels (default `info`).

use std::env;
use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_PATH_ENV: &str = "TYPING_GEEK_LOG_PATH";

/// Log file path from the environment, if set and non-blank.
pub fn log_path_from_env() -> Option<String> {
    env::var(LOG_PATH_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Install a file-backed subscriber when `TYPING_GEEK_LOG_PATH` is set.
///
/// Returns whether a subscriber was installed.
pub fn init_from_env() -> Result<bool> {
    let Some(path) = log_path_from_env() else {
        return Ok(false);
    };
    init_file(&path)?;
    Ok(true)
}

pub fn init_file(path: &str) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}
