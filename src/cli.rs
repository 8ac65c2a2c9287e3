// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The controller invokes the binary as `get_locale <ARGS_FILE>`; running it
//! by hand without arguments is equivalent to an empty arguments file.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `get_locale`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "get_locale",
    version,
    about = "Report the host's locale settings as JSON.",
    long_about = None
)]
pub struct CliArgs {
    /// JSON file holding the module arguments.
    #[arg(value_name = "ARGS_FILE")]
    pub args_file: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GET_LOCALE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Pretty-print the JSON result.
    #[arg(long)]
    pub pretty: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
