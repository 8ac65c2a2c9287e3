// src/locale/list.rs

use tracing::{debug, warn};

use crate::config::CommandSpec;
use crate::errors::Result;
use crate::exec::CommandRunner;
use crate::types::LocaleIdentifier;

use super::output::{decode_output, run_for_stdout, FetchContext};

const CONTEXT: FetchContext = FetchContext {
    decode_failed: "Decoding Stdout Failed During Get Available Locale List.",
    unexpected: "Unexpected Error Occurred During Get Available Locale List.",
};

/// Run the locale listing command and return the locales it prints.
///
/// - `Ok(None)`: the command failed or printed nothing.
/// - `Ok(Some(list))`: non-empty, in the order the command printed them.
/// - `Err(_)`: the output could not be decoded as `encoding`.
pub async fn fetch_available_locales<R: CommandRunner + ?Sized>(
    runner: &R,
    command: &CommandSpec,
    encoding: &str,
) -> Result<Option<Vec<LocaleIdentifier>>> {
    let Some(stdout) = run_for_stdout(runner, command).await else {
        return Ok(None);
    };

    let text = decode_output(&stdout, encoding, CONTEXT)?;
    let locales = parse_locale_list(&text);

    if locales.is_empty() {
        warn!(cmd = %command, "locale listing command printed no locales");
        return Ok(None);
    }

    debug!(count = locales.len(), "collected available locales");
    Ok(Some(locales))
}

/// Non-empty lines of `text`, in order.
pub fn parse_locale_list(text: &str) -> Vec<LocaleIdentifier> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
