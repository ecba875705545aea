// src/logging.rs

//! Logging setup for `launch` using `tracing` + `tracing-subscriber`.
//!
//! The launcher is silent by default: a subscriber is only installed when
//! `LAUNCH_LOG` names a level (e.g. "info", "debug"). Logs go to STDERR and
//! never touch the child's streams.

use anyhow::{Result, anyhow};
use tracing_subscriber::fmt;

pub const LOG_VAR: &str = "LAUNCH_LOG";

/// Initialise the global logging subscriber from `LAUNCH_LOG`.
///
/// Safe to call once at startup. Unset, `off` or unrecognised values leave
/// logging disabled.
pub fn init_logging() -> Result<()> {
    let Some(level) = std::env::var(LOG_VAR).ok().and_then(|s| parse_level_str(&s)) else {
        return Ok(());
    };

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
