//! Blank-row filtering.

use crate::error::{Result, TablescopeError};

use super::source::Row;

/// Returns true if every value in the row is null or blank after trimming.
pub fn is_blank_row(row: &Row) -> bool {
    row.values().all(|v| v.is_blank())
}

/// Drop rows whose values are all null or blank.
///
/// Surviving rows are returned untouched and in their original order.
pub fn sanitize(rows: Vec<Row>) -> Result<Vec<Row>> {
    let total = rows.len();
    let kept: Vec<Row> = rows.into_iter().filter(|row| !is_blank_row(row)).collect();

    if kept.is_empty() {
        return Err(TablescopeError::NoValidRows);
    }

    if kept.len() < total {
        tracing::debug!(
            dropped = total - kept.len(),
            kept = kept.len(),
            "dropped blank rows"
        );
    }

    Ok(kept)
}
