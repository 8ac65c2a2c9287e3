// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] defines the `CommandRunner` trait and `CommandOutput`.
//! - [`process`] provides `ProcessRunner`, the `tokio::process` implementation
//!   used in production.

pub mod backend;
pub mod process;

pub use backend::{CommandOutput, CommandRunner, RunFuture};
pub use process::ProcessRunner;
