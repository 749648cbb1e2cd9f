//! Input decoding and row sanitization.

mod parser;
mod sanitize;
mod source;

pub use parser::{decode, decode_as};
pub use sanitize::{is_blank_row, sanitize};
pub use source::{CellValue, Row, SourceFormat, SourceInfo};
