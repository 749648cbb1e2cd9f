//! Core type definitions for schema representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type inferred for a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// Calendar dates, optionally with a time part.
    Date,
    /// Numbers, including currency and accounting formats.
    Number,
    /// Anything else. Also the fallback for mixed columns.
    String,
}

impl DataType {
    /// Label used on the wire and in CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Date => "DATE",
            DataType::Number => "NUMBER",
            DataType::String => "STRING",
        }
    }
}

impl Default for DataType {
    fn default() -> Self {
        DataType::String
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
