//! Configuration loading.
//!
//! Summing behavior can be configured from an `ocrsum.toml` discovered in
//! the project hierarchy, with command-line flags layered on top by the
//! caller.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OcrsumError, Result};

/// Options governing how a set of reports is summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumConfig {
    /// Skip files with format errors instead of aborting the whole sum.
    #[serde(default)]
    pub lenient: bool,

    /// Read files on a thread pool, merging per-file results afterwards.
    #[serde(default)]
    pub parallel: bool,
}

impl SumConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            OcrsumError::validation(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            OcrsumError::validation(format!(
                "Invalid TOML in {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    /// Find and load `ocrsum.toml` from the current directory or any parent.
    ///
    /// Returns `Ok(None)` when no configuration file exists.
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(OcrsumError::Io)?;

        loop {
            let ocrsum_toml = current.join("ocrsum.toml");
            if ocrsum_toml.exists() {
                return Ok(Some(Self::from_toml_file(ocrsum_toml)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }
}
