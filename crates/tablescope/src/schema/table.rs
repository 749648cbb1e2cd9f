//! Table-level result of decoding and inference.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::Row;

use super::types::DataType;

/// Column name to inferred type, in column order.
pub type ColumnTypes = IndexMap<String, DataType>;

/// A decoded, sanitized and typed table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTable {
    /// Unique column names, taken from the first row.
    pub headers: Vec<String>,
    /// Sanitized rows.
    pub rows: Vec<Row>,
    /// Equal to `rows.len()`.
    pub row_count: usize,
    /// One entry per header.
    pub column_types: ColumnTypes,
}

impl ParsedTable {
    /// Assemble a table from sanitized rows and their inferred column types.
    ///
    /// Headers come from the first row; types are reordered to match and any
    /// header without an inferred type is recorded as [`DataType::String`].
    pub fn new(rows: Vec<Row>, column_types: &ColumnTypes) -> Self {
        let headers: Vec<String> = rows
            .first()
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default();

        let column_types = headers
            .iter()
            .map(|h| (h.clone(), column_types.get(h).copied().unwrap_or_default()))
            .collect();

        Self {
            headers,
            row_count: rows.len(),
            rows,
            column_types,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the inferred type of a column.
    pub fn column_type(&self, name: &str) -> Option<DataType> {
        self.column_types.get(name).copied()
    }

    /// Columns of the given type, in column order.
    pub fn columns_of(&self, data_type: DataType) -> impl Iterator<Item = &str> {
        self.column_types
            .iter()
            .filter(move |(_, t)| **t == data_type)
            .map(|(name, _)| name.as_str())
    }
}
