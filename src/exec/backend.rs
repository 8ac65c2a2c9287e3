// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! Fetchers talk to a `CommandRunner` instead of `tokio::process` directly.
//! Production uses [`ProcessRunner`](super::ProcessRunner); tests provide a
//! runner that returns canned output without spawning anything.

use std::future::Future;
use std::io;
use std::pin::Pin;

use crate::config::CommandSpec;

/// Everything a fetcher needs from a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            exit_code: Some(0),
            success: true,
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    pub fn failure(exit_code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            exit_code: Some(exit_code),
            success: false,
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }
}

/// Future returned by [`CommandRunner::run`].
pub type RunFuture<'a> = Pin<Box<dyn Future<Output = io::Result<CommandOutput>> + Send + 'a>>;

/// Trait abstracting how a command is run to completion.
///
/// An `Err` means the process could not be started or waited on at all; a
/// non-zero exit is reported through [`CommandOutput::success`].
pub trait CommandRunner: Send + Sync {
    fn run<'a>(&'a self, command: &'a CommandSpec) -> RunFuture<'a>;
}
