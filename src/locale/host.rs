// src/locale/host.rs

//! Host locale lookup.
//!
//! The locale is taken from the usual POSIX variables in priority order
//! `LC_ALL`, `LC_CTYPE`, `LANG`; the first non-empty one wins. Reading goes
//! through [`EnvProvider`] so tests never depend on the real environment.

use tracing::debug;

use crate::types::LocaleQuery;

/// Variables consulted for the character-type locale, highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Read-only environment access.
pub trait EnvProvider {
    fn var(&self, key: &str) -> Option<String>;
}

/// Environment provider backed by the process environment.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Source of the host's current locale.
pub trait LocaleProvider {
    /// `None` when no locale is configured at all.
    fn current_locale(&self) -> Option<LocaleQuery>;
}

/// [`LocaleProvider`] that reads the locale variables from an environment.
#[derive(Debug, Default, Clone)]
pub struct HostLocale<E = SystemEnv> {
    env: E,
}

impl<E: EnvProvider> HostLocale<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: EnvProvider> LocaleProvider for HostLocale<E> {
    fn current_locale(&self) -> Option<LocaleQuery> {
        let (name, raw) = LOCALE_ENV_VARS.iter().find_map(|name| {
            self.env
                .var(name)
                .filter(|v| !v.trim().is_empty())
                .map(|v| (*name, v))
        })?;

        let query = parse_locale_value(&raw);
        debug!(var = name, value = %raw, parts = ?query.parts(), "resolved host locale");
        Some(query)
    }
}

/// Split a locale value such as `en_US.UTF-8@euro` into its components.
///
/// The `@modifier` suffix is dropped; the rest is split on `.`, giving
/// `["en_US", "UTF-8"]`. Values without a codeset (`C`, `en_US`) yield a
/// single component.
pub fn parse_locale_value(raw: &str) -> LocaleQuery {
    let trimmed = raw.trim();
    let without_modifier = trimmed.split('@').next().unwrap_or(trimmed);
    LocaleQuery::new(without_modifier.split('.'))
}
