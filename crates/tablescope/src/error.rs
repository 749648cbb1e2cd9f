//! Error types for the Tablescope library.

use serde::Serialize;
use thiserror::Error;

/// Main error type for Tablescope operations.
///
/// Every variant is fatal to the call that produced it; no partial results
/// are returned alongside an error.
#[derive(Debug, Error)]
pub enum TablescopeError {
    /// File extension is not one of the supported delimited-text or
    /// spreadsheet formats.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding succeeded but produced no data rows.
    #[error("Empty file: {0}")]
    EmptyFile(String),

    /// Every decoded row was blank.
    #[error("No valid rows: every row is empty or blank")]
    NoValidRows,

    /// The underlying decoder rejected the input.
    #[error("Failed to decode {format}: {message}")]
    DecodeFailure { format: String, message: String },
}

/// Stable, machine-readable error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnsupportedFormat,
    EmptyFile,
    NoValidRows,
    DecodeFailure,
}

impl TablescopeError {
    /// Build a decode failure for the given format from any displayable error.
    pub(crate) fn decode(format: impl Into<String>, source: impl std::fmt::Display) -> Self {
        TablescopeError::DecodeFailure {
            format: format.into(),
            message: source.to_string(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TablescopeError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            TablescopeError::EmptyFile(_) => ErrorKind::EmptyFile,
            TablescopeError::NoValidRows => ErrorKind::NoValidRows,
            TablescopeError::DecodeFailure { .. } => ErrorKind::DecodeFailure,
        }
    }
}

/// Result type alias for Tablescope operations.
pub type Result<T> = std::result::Result<T, TablescopeError>;
