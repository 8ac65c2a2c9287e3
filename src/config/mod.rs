// src/config/mod.rs

//! Configuration for a single module invocation.
//!
//! - [`commands`] describes the two external commands and their defaults.
//! - [`loader`] reads the JSON arguments file handed over by the controller.
//! - [`validate`] turns the raw arguments into [`ModuleArgs`], rejecting
//!   parameters the module does not declare.

pub mod commands;
pub mod loader;
pub mod validate;

pub use commands::{CommandSpec, FetchConfig};
pub use loader::{load_and_validate, load_from_path};
pub use validate::{ModuleArgs, RawModuleArgs, MODULE_NAME};
