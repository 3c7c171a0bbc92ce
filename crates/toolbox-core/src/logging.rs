//! Diagnostic logging setup
//!
//! The interactive session owns the terminal, so diagnostics only go to a
//! file. Without a configured log file no subscriber is installed and
//! `tracing` events are dropped.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG` when set, otherwise the configured level
pub fn filter_for(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()))
}

/// Install the global subscriber. Returns whether logging is active.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };
    config.validate()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(true)
}
