// src/config/validate.rs

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{GetLocaleError, Result};

/// Name the module reports itself under in argument errors.
pub const MODULE_NAME: &str = "get_locale";

/// Prefix of keys the controller injects for its own bookkeeping.
const INTERNAL_KEY_PREFIX: &str = "_ansible_";

/// Arguments exactly as they appear in the JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawModuleArgs {
    pub params: Map<String, Value>,
}

/// Validated module arguments.
///
/// The module declares no options. The only thing carried over is whether
/// the controller asked for check mode; a read-only module behaves the same
/// either way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleArgs {
    pub check_mode: bool,
}

impl TryFrom<RawModuleArgs> for ModuleArgs {
    type Error = GetLocaleError;

    fn try_from(raw: RawModuleArgs) -> std::result::Result<Self, Self::Error> {
        reject_unsupported(&raw)?;
        let check_mode = raw
            .params
            .get("_ansible_check_mode")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Ok(ModuleArgs { check_mode })
    }
}

fn reject_unsupported(raw: &RawModuleArgs) -> Result<()> {
    let mut unsupported: Vec<&str> = raw
        .params
        .keys()
        .map(String::as_str)
        .filter(|k| !k.starts_with(INTERNAL_KEY_PREFIX))
        .collect();

    if unsupported.is_empty() {
        return Ok(());
    }

    unsupported.sort_unstable();
    Err(GetLocaleError::Arguments(format!(
        "Unsupported parameters for ({MODULE_NAME}) module: {}. Supported parameters include: .",
        unsupported.join(", ")
    )))
}
