// src/locale/gather.rs

use tracing::info;

use crate::config::FetchConfig;
use crate::errors::Result;
use crate::exec::CommandRunner;
use crate::types::{LocaleEnvironmentMap, LocaleIdentifier};

use super::details::fetch_locale_details;
use super::list::fetch_available_locales;

/// `(available_locales, locale_details)`, always in this order.
pub type GatheredLocales = (Option<Vec<LocaleIdentifier>>, Option<LocaleEnvironmentMap>);

/// Run both fetchers concurrently and wait for both.
///
/// The two futures are polled on the current task, so the commands overlap
/// while waiting on their child processes. Neither is cancelled when the
/// other fails; once both settle, the listing error is reported before the
/// details error.
pub async fn gather_locale_facts<R: CommandRunner + ?Sized>(
    runner: &R,
    config: &FetchConfig,
    encoding: &str,
) -> Result<GatheredLocales> {
    info!(encoding, "gathering locale facts");

    let (available, details) = tokio::join!(
        fetch_available_locales(runner, &config.list_command, encoding),
        fetch_locale_details(runner, &config.detail_command, encoding),
    );

    Ok((available?, details?))
}
