//! JSON persistence for derived constants.
//!
//! The multiplier C is random by default, so addresses issued in one run are
//! garbage in the next unless the constants are saved and reloaded. The file
//! also records the alphabet fingerprint taken at save time: loading against
//! a drifted catalog fails instead of silently decoding every old index to
//! different content.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alphabet::Alphabet;
use crate::constants::Constants;

/// Errors that can occur while persisting or loading constants.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Alphabet fingerprint mismatch: constants were derived for {expected}, current catalog is {actual}")]
    FingerprintMismatch { expected: String, actual: String },

    #[error("Constants were derived for an alphabet of {expected} symbols, current catalog has {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// On-disk representation of a constants file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConstantsFile {
    /// Fingerprint of the alphabet the constants were derived against.
    alphabet_fingerprint: String,
    constants: Constants,
}

/// Saves constants next to the fingerprint of the alphabet they belong to.
pub fn save_constants(
    path: &Path,
    constants: &Constants,
    alphabet: &Alphabet,
) -> Result<(), StoreError> {
    let file = ConstantsFile {
        alphabet_fingerprint: alphabet.fingerprint(),
        constants: constants.clone(),
    };

    let content = serde_json::to_string_pretty(&file)?;
    fs::write(path, content)?;
    Ok(())
}

/// Loads constants, refusing catalogs that no longer match.
pub fn load_constants(path: &Path, alphabet: &Alphabet) -> Result<Constants, StoreError> {
    let content = fs::read_to_string(path)?;
    let file: ConstantsFile = serde_json::from_str(&content)?;

    if file.constants.m != alphabet.len() {
        return Err(StoreError::SizeMismatch {
            expected: file.constants.m,
            actual: alphabet.len(),
        });
    }

    let actual = alphabet.fingerprint();
    if file.alphabet_fingerprint != actual {
        return Err(StoreError::FingerprintMismatch {
            expected: file.alphabet_fingerprint,
            actual,
        });
    }

    Ok(file.constants)
}
