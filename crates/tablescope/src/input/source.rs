//! Row model and upload metadata.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, TablescopeError};

/// A raw cell value as produced by the decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Native numeric value (spreadsheet cells only).
    Number(f64),
    /// Raw text, never coerced.
    Text(String),
    /// Empty cell.
    Null,
}

impl CellValue {
    /// Returns true for null cells and text that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Get the text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// One record: column name to raw value, in column order.
///
/// A key missing from a row is equivalent to [`CellValue::Null`].
pub type Row = IndexMap<String, CellValue>;

/// Decoding strategy selected from a filename's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// Comma-family delimited text with delimiter auto-detection.
    Csv,
    /// Tab-separated text.
    Tsv,
    /// Workbook; only the first sheet is read.
    Spreadsheet,
}

impl SourceFormat {
    /// Select a format from a filename (case-insensitive extension).
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.trim().rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "csv" | "txt" => Some(SourceFormat::Csv),
            "tsv" => Some(SourceFormat::Tsv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SourceFormat::Spreadsheet),
            _ => None,
        }
    }

    /// Like [`SourceFormat::from_filename`], failing with `UnsupportedFormat`.
    pub fn detect(filename: &str) -> Result<Self> {
        Self::from_filename(filename).ok_or_else(|| {
            let message = match filename.trim().rsplit_once('.') {
                Some((_, ext)) if !ext.is_empty() => format!("'.{}' files are not supported", ext),
                _ => format!("'{}' has no file extension", filename),
            };
            TablescopeError::UnsupportedFormat(message)
        })
    }

    /// Short label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Tsv => "tsv",
            SourceFormat::Spreadsheet => "spreadsheet",
        }
    }
}

/// Metadata about an uploaded buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    /// Filename as supplied by the caller.
    pub filename: String,
    /// Format chosen by extension.
    pub format: SourceFormat,
    /// Buffer size in bytes.
    pub size_bytes: u64,
    /// SHA-256 of the buffer (`sha256:<hex>`).
    pub hash: String,
}

impl SourceInfo {
    /// Describe a buffer that has been accepted for decoding.
    pub fn new(filename: impl Into<String>, format: SourceFormat, bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);

        Self {
            filename: filename.into(),
            format,
            size_bytes: bytes.len() as u64,
            hash: format!("sha256:{:x}", hasher.finalize()),
        }
    }
}
