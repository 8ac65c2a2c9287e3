use std::collections::HashMap;

use get_locale::locale::{EnvProvider, LocaleProvider};
use get_locale::types::LocaleQuery;

/// Locale provider returning a fixed answer.
#[derive(Debug, Clone, Default)]
pub struct FakeLocale(pub Option<LocaleQuery>);

impl FakeLocale {
    pub fn missing() -> Self {
        Self(None)
    }

    pub fn parts(parts: &[&str]) -> Self {
        Self(Some(LocaleQuery::new(parts.iter().copied())))
    }
}

impl LocaleProvider for FakeLocale {
    fn current_locale(&self) -> Option<LocaleQuery> {
        self.0.clone()
    }
}

/// Environment backed by a map instead of the process environment.
#[derive(Debug, Clone, Default)]
pub struct FakeEnv {
    vars: HashMap<String, String>,
}

impl FakeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvProvider for FakeEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
