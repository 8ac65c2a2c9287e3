// src/report.rs

//! Result documents handed back to the controller on stdout.

use serde::Serialize;

use crate::types::{LocaleEnvironmentMap, LocaleIdentifier};

pub const SUCCESS_MESSAGE: &str = "Gather Locales Informations End Successfully.";
pub const LOCALE_MISSING_MESSAGE: &str = "Get System Locale Failed.";
pub const LOCALE_MALFORMED_MESSAGE: &str = "Get System Locale or Language Code Failed";

/// Successful gathering result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleReport {
    pub system_locale: String,
    pub language_code: String,
    pub changed: bool,
    pub message: String,
    pub available_locales: Option<Vec<LocaleIdentifier>>,
    pub locale_details: Option<LocaleEnvironmentMap>,
}

/// Failure document: `{"msg": ..., "changed": false, "failed": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub msg: String,
    pub changed: bool,
    pub failed: bool,
}

impl FailureReport {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            changed: false,
            failed: true,
        }
    }
}

/// What a single invocation produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ModuleOutcome {
    Success(LocaleReport),
    Failure(FailureReport),
}

impl ModuleOutcome {
    pub fn failure(msg: impl Into<String>) -> Self {
        ModuleOutcome::Failure(FailureReport::new(msg))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ModuleOutcome::Success(_))
    }

    /// Process exit status the controller expects for this outcome.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
