//! Column type inference from sampled values.
//!
//! Each column is classified as exactly one [`DataType`](crate::DataType) by
//! testing a prefix sample against the number predicate, then the date
//! predicate, falling back to string. The sample is a prefix of the rows, so
//! identical input always yields identical types.

mod classifier;
mod date;
mod number;

pub use classifier::{
    ColumnInference, InferenceConfig, TypeInferencer, infer_column_type, infer_types,
};
pub use date::{MAX_YEAR, MIN_YEAR, is_date, parse_date};
pub use number::{is_number, parse_number};
