// src/logging.rs

//! Logging setup for `get_locale` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `GET_LOCALE_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `warn`
//!
//! Logs always go to STDERR: stdout carries the JSON document the
//! controller parses.

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "GET_LOCALE_LOG";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_level = std::env::var(LOG_ENV_VAR).ok();
    let level = resolve_level(cli_level, env_level.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

/// Pick the effective level from the CLI flag and the env var value.
///
/// The env value accepts the `tracing` level names in any case, `1`-`5`,
/// and `warning` as an alias for `warn`. Anything else falls back to `warn`.
pub fn resolve_level(cli_level: Option<LogLevel>, env_value: Option<&str>) -> Level {
    if let Some(lvl) = cli_level {
        return lvl.into();
    }

    env_value
        .map(str::trim)
        .and_then(|s| {
            if s.eq_ignore_ascii_case("warning") {
                Some(Level::WARN)
            } else {
                s.parse().ok()
            }
        })
        .unwrap_or(Level::WARN)
}
