// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::validate::{ModuleArgs, RawModuleArgs};
use crate::errors::{GetLocaleError, Result};

/// Read the controller's JSON arguments file without validating it.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawModuleArgs> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        GetLocaleError::Arguments(format!(
            "failed to read module arguments file {}: {e}",
            path.display()
        ))
    })?;

    // Empty file means no arguments.
    if contents.trim().is_empty() {
        return Ok(RawModuleArgs::default());
    }

    let raw: RawModuleArgs = serde_json::from_str(&contents).map_err(|e| {
        GetLocaleError::Arguments(format!(
            "failed to parse module arguments file {} as a JSON object: {e}",
            path.display()
        ))
    })?;

    Ok(raw)
}

/// Load the arguments file (if any) and validate it.
///
/// `None` means the binary was started without an arguments file, which is
/// the same as passing `{}`.
pub fn load_and_validate(path: Option<&Path>) -> Result<ModuleArgs> {
    let raw = match path {
        Some(p) => load_from_path(p)?,
        None => RawModuleArgs::default(),
    };
    ModuleArgs::try_from(raw)
}
