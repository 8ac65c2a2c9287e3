// src/locale/decode.rs

//! Strict byte-to-text decoding keyed by an encoding label.
//!
//! Labels come from POSIX locale codesets (`UTF-8`, `ANSI_X3.4-1968`,
//! `ISO-8859-1`, ...). ASCII and Latin-1 are handled here because the web
//! label table in `encoding_rs` maps both to windows-1252; every other label
//! goes through `encoding_rs`.

use encoding_rs::Encoding;
use thiserror::Error;

/// Why a buffer could not be turned into text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeFailure {
    /// The label does not name any encoding we know.
    #[error("unknown encoding label '{0}'")]
    UnknownEncoding(String),

    /// The bytes contain a sequence that is invalid in the encoding.
    #[error("malformed {encoding} byte sequence")]
    Malformed { encoding: &'static str },
}

const ASCII_LABELS: [&str; 5] = ["ascii", "usascii", "ansix3.41968", "646", "iso646us"];
const LATIN1_LABELS: [&str; 5] = ["iso88591", "latin1", "l1", "iso885911987", "cp819"];

/// Decode `bytes` as `label` (`"UTF-8"`, `"utf8"`, `"ISO-8859-1"`, ...).
///
/// Malformed input is an error rather than being replaced with U+FFFD. A
/// leading BOM is kept as part of the text.
pub fn decode_bytes(bytes: &[u8], label: &str) -> Result<String, DecodeFailure> {
    let key = codeset_key(label);

    if ASCII_LABELS.contains(&key.as_str()) {
        if !bytes.is_ascii() {
            return Err(DecodeFailure::Malformed { encoding: "US-ASCII" });
        }
        return Ok(bytes.iter().map(|&b| b as char).collect());
    }

    if LATIN1_LABELS.contains(&key.as_str()) {
        // Every byte is the code point of the same value.
        return Ok(bytes.iter().map(|&b| b as char).collect());
    }

    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| DecodeFailure::UnknownEncoding(label.to_string()))?;

    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or(DecodeFailure::Malformed {
            encoding: encoding.name(),
        })
}

/// Lowercase with `-` and `_` removed, so `ISO_8859-1` and `iso88591` match.
fn codeset_key(label: &str) -> String {
    label
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
