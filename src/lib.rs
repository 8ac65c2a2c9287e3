// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod locale;
pub mod logging;
pub mod report;
pub mod types;

use tracing::{error, info, warn};

use crate::cli::{CliArgs, LogLevel};
use crate::config::{load_and_validate, FetchConfig};
use crate::errors::Result;
use crate::exec::{CommandRunner, ProcessRunner};
use crate::locale::{gather_locale_facts, HostLocale, LocaleProvider, SystemEnv};
use crate::report::{
    LocaleReport, ModuleOutcome, LOCALE_MALFORMED_MESSAGE, LOCALE_MISSING_MESSAGE,
    SUCCESS_MESSAGE,
};

/// Install logging with `init_logging`, then [`run`].
///
/// A logging setup failure still produces a failure outcome, so stdout
/// always carries a JSON document.
pub async fn start<F>(args: &CliArgs, init_logging: F) -> ModuleOutcome
where
    F: FnOnce(Option<LogLevel>) -> anyhow::Result<()>,
{
    if let Err(e) = init_logging(args.log_level) {
        eprintln!("get_locale: {e:#}");
        return ModuleOutcome::failure(format!("Logging Initialization Failed: {e:#}"));
    }
    run(args).await
}

/// Loads the module arguments and gathers locale facts from the real host.
///
/// Loads the module arguments, then gathers locale facts from the real host.
/// Every error is folded into a failure outcome so the controller always
/// gets a JSON document back.
pub async fn run(args: &CliArgs) -> ModuleOutcome {
    let module_args = match load_and_validate(args.args_file.as_deref()) {
        Ok(a) => a,
        Err(e) => {
            error!(error = %e, "invalid module arguments");
            return ModuleOutcome::failure(e.to_string());
        }
    };
    info!(check_mode = module_args.check_mode, "module arguments accepted");

    let provider = HostLocale::new(SystemEnv);
    match collect_locale_report(&provider, &ProcessRunner, &FetchConfig::default()).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "gathering locale facts failed");
            ModuleOutcome::failure(e.to_string())
        }
    }
}

/// Query the host locale, gather both command results and build the report.
///
/// A missing or malformed host locale is reported as a failure outcome and
/// no command is run. Decoding problems are returned as errors.
pub async fn collect_locale_report<P, R>(
    provider: &P,
    runner: &R,
    config: &FetchConfig,
) -> Result<ModuleOutcome>
where
    P: LocaleProvider + ?Sized,
    R: CommandRunner + ?Sized,
{
    let Some(query) = provider.current_locale() else {
        warn!("no host locale configured");
        return Ok(ModuleOutcome::failure(LOCALE_MISSING_MESSAGE));
    };

    let Some((language_code, encoding)) = query.language_and_encoding() else {
        warn!(locale = %query, parts = query.parts().len(), "host locale is not <language>.<encoding>");
        return Ok(ModuleOutcome::failure(LOCALE_MALFORMED_MESSAGE));
    };

    let (available_locales, locale_details) =
        gather_locale_facts(runner, config, encoding).await?;

    info!(
        language_code,
        encoding,
        available = available_locales.as_ref().map(Vec::len),
        details = locale_details.as_ref().map(|d| d.len()),
        "locale facts gathered"
    );

    Ok(ModuleOutcome::Success(LocaleReport {
        system_locale: encoding.to_string(),
        language_code: language_code.to_string(),
        changed: false,
        message: SUCCESS_MESSAGE.to_string(),
        available_locales,
        locale_details,
    }))
}
