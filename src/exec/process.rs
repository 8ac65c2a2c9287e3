// src/exec/process.rs

//! Real command runner backed by `tokio::process`.

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::config::CommandSpec;

use super::backend::{CommandOutput, CommandRunner, RunFuture};

/// Spawns the command, captures stdout/stderr and waits for it to exit.
///
/// No timeout is applied: a command that hangs hangs the invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run<'a>(&'a self, command: &'a CommandSpec) -> RunFuture<'a> {
        Box::pin(async move {
            debug!(cmd = %command, "spawning command");

            let output = Command::new(&command.program)
                .args(&command.args)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .output()
                .await?;

            debug!(
                cmd = %command,
                exit_code = ?output.status.code(),
                stdout_bytes = output.stdout.len(),
                stderr_bytes = output.stderr.len(),
                "command exited"
            );

            Ok(CommandOutput {
                exit_code: output.status.code(),
                success: output.status.success(),
                stdout: output.stdout,
                stderr: output.stderr,
            })
        })
    }
}
