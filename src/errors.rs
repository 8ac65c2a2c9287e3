// src/errors.rs

//! Crate-wide error type.
//!
//! A command that exits non-zero is *not* an error here: fetchers turn it
//! into a `None` result. Everything below is a hard failure that ends the
//! invocation with a failure document.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GetLocaleError {
    /// Command output is not valid in the requested encoding.
    #[error("{context} (encoding: {encoding})")]
    Decoding { context: String, encoding: String },

    /// Any other failure while processing command output.
    #[error("{context}: {reason}")]
    Unexpected { context: String, reason: String },

    /// The module arguments file could not be used.
    #[error("{0}")]
    Arguments(String),
}

pub type Result<T> = std::result::Result<T, GetLocaleError>;
