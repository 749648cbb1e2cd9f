//! Schema types for representing inferred table structure.

mod table;
mod types;

pub use table::{ColumnTypes, ParsedTable};
pub use types::DataType;
