// src/locale/mod.rs

//! Locale fact gathering.
//!
//! - [`host`] answers "what locale is this process running under?" through
//!   injectable providers.
//! - [`decode`] turns raw command output into text using an encoding label.
//! - [`output`] runs a command and separates soft failures (non-zero exit,
//!   missing binary) from output that must be decoded.
//! - [`list`] and [`details`] are the two fetchers.
//! - [`gather`] runs both fetchers concurrently.

pub mod decode;
pub mod details;
pub mod gather;
pub mod host;
pub mod list;
pub mod output;

pub use details::{fetch_locale_details, parse_locale_details};
pub use gather::{gather_locale_facts, GatheredLocales};
pub use host::{EnvProvider, HostLocale, LocaleProvider, SystemEnv, parse_locale_value};
pub use list::{fetch_available_locales, parse_locale_list};
