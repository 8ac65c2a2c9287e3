// src/locale/details.rs

use tracing::{debug, warn};

use crate::config::CommandSpec;
use crate::errors::Result;
use crate::exec::CommandRunner;
use crate::types::LocaleEnvironmentMap;

use super::output::{decode_output, run_for_stdout, FetchContext};

const CONTEXT: FetchContext = FetchContext {
    decode_failed: "Decode Command Result Failed During Get Locale Details.",
    unexpected: "Unexpected Error Occurred During Get Locale Details.",
};

/// Run the active locale command and parse its `KEY=VALUE` lines.
///
/// Returns `Ok(None)` when the command fails; decoding problems are errors.
pub async fn fetch_locale_details<R: CommandRunner + ?Sized>(
    runner: &R,
    command: &CommandSpec,
    encoding: &str,
) -> Result<Option<LocaleEnvironmentMap>> {
    let Some(stdout) = run_for_stdout(runner, command).await else {
        return Ok(None);
    };

    let text = decode_output(&stdout, encoding, CONTEXT)?;
    let details = parse_locale_details(&text);

    debug!(keys = details.len(), "collected locale details");
    Ok(Some(details))
}

/// Parse `locale` output into a map.
///
/// Each line is split on its first `=`; the value is kept verbatim, quotes
/// included. Later lines overwrite earlier ones with the same key. Blank
/// lines are ignored and lines without `=` are skipped with a warning.
pub fn parse_locale_details(text: &str) -> LocaleEnvironmentMap {
    let mut details = LocaleEnvironmentMap::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => {
                details.insert(key.to_string(), value.to_string());
            }
            None => {
                warn!(line_no = idx + 1, line, "skipping locale line without '='");
            }
        }
    }

    details
}
