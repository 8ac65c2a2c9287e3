// src/locale/output.rs

//! Shared plumbing for the two fetchers.

use tracing::{debug, warn};

use crate::config::CommandSpec;
use crate::errors::{GetLocaleError, Result};
use crate::exec::CommandRunner;

use super::decode::{decode_bytes, DecodeFailure};

/// Error messages a fetcher attaches to hard failures.
#[derive(Debug, Clone, Copy)]
pub struct FetchContext {
    pub decode_failed: &'static str,
    pub unexpected: &'static str,
}

/// Run `command` and return its stdout, or `None` on a soft failure.
///
/// Soft failures are a non-zero exit and a process that cannot be started at
/// all (typically the binary is not installed). Both are logged and never
/// surface as errors.
pub async fn run_for_stdout<R: CommandRunner + ?Sized>(
    runner: &R,
    command: &CommandSpec,
) -> Option<Vec<u8>> {
    let output = match runner.run(command).await {
        Ok(output) => output,
        Err(e) => {
            warn!(cmd = %command, error = %e, "failed to run command");
            return None;
        }
    };

    if !output.success {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(
            cmd = %command,
            exit_code = ?output.exit_code,
            stderr = %stderr.trim(),
            "command exited unsuccessfully"
        );
        return None;
    }

    debug!(cmd = %command, bytes = output.stdout.len(), "command succeeded");
    Some(output.stdout)
}

/// Decode command output, mapping failures onto the crate error type.
pub fn decode_output(bytes: &[u8], encoding: &str, ctx: FetchContext) -> Result<String> {
    decode_bytes(bytes, encoding).map_err(|failure| match failure {
        DecodeFailure::Malformed { .. } => GetLocaleError::Decoding {
            context: ctx.decode_failed.to_string(),
            encoding: encoding.to_string(),
        },
        DecodeFailure::UnknownEncoding(_) => GetLocaleError::Unexpected {
            context: ctx.unexpected.to_string(),
            reason: failure.to_string(),
        },
    })
}
