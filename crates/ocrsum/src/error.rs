//! Error types for ocrsum.
//!
//! All fallible operations in the crate return [`Result`], and every failure
//! is an [`OcrsumError`]:
//!
//! - `Io` - File system errors; these always bubble up unchanged so callers
//!   see the real system problem.
//! - `Format` - An input report violated the fixed report layout. Fatal for
//!   that file only; the error names the offending file and stage.
//! - `Validation` - Invalid configuration or parameters.
//!
//! Recoverable conditions (an undecodable character token inside an otherwise
//! well-formed table row) are *not* errors: they are collected as
//! [`crate::report::ReadWarning`] values and logged, never changing
//! control flow.

use thiserror::Error;

/// Result type alias using `OcrsumError`.
pub type Result<T> = std::result::Result<T, OcrsumError>;

/// Main error type for all ocrsum operations.
#[derive(Debug, Error)]
pub enum OcrsumError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error in {path}: {message}")]
    Format { path: String, message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl OcrsumError {
    /// Create a `Format` error for the named input file.
    pub fn format<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a `Validation` error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
