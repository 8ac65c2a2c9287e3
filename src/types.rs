// src/types.rs

use std::collections::BTreeMap;
use std::fmt;

/// Opaque locale name as printed by `localectl list-locales`.
pub type LocaleIdentifier = String;

/// `KEY=VALUE` pairs printed by `locale`.
///
/// Inserting a key that is already present overwrites it, so the last
/// occurrence in the command output wins.
pub type LocaleEnvironmentMap = BTreeMap<String, String>;

/// Host locale decomposed into its dot-separated components.
///
/// A well-formed query has exactly two parts: language code and encoding
/// (`en_US.UTF-8` -> `["en_US", "UTF-8"]`). Anything else is kept as-is so
/// the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleQuery {
    parts: Vec<String>,
}

impl LocaleQuery {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// `(language_code, encoding)` when the query has exactly two non-empty
    /// parts. `en_US.` and `.UTF-8` do not qualify.
    pub fn language_and_encoding(&self) -> Option<(&str, &str)> {
        match self.parts.as_slice() {
            [language, encoding] if !language.is_empty() && !encoding.is_empty() => {
                Some((language.as_str(), encoding.as_str()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for LocaleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join("."))
    }
}
