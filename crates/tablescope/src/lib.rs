//! Tablescope: schema-less ingestion, type inference and chart recommendation
//! for user-uploaded tables.
//!
//! An upload passes through four pure stages:
//!
//! 1. [`decode`] turns bytes plus a filename into rows,
//! 2. [`sanitize`] drops blank rows,
//! 3. [`infer_types`] classifies each column as `DATE`, `NUMBER` or `STRING`,
//! 4. [`recommend`] proposes charts for the inferred shape.
//!
//! [`Engine`] runs all four with one configuration.
//!
//! # Example
//!
//! ```
//! use tablescope::{ChartType, DataType, Engine};
//!
//! let csv = b"region,sales\nWest,100\nEast,200\nWest,150\n";
//! let analysis = Engine::new().analyze(csv, "sales.csv").unwrap();
//!
//! assert_eq!(analysis.table.column_types["sales"], DataType::Number);
//! assert_eq!(analysis.suggestions[0].title, "Sales by Region");
//! assert_eq!(analysis.suggestions.last().unwrap().chart_type, ChartType::Table);
//! ```

pub mod error;
pub mod inference;
pub mod input;
pub mod schema;
pub mod visualization;

mod engine;

pub use crate::engine::{Analysis, Engine, EngineConfig};
pub use error::{ErrorKind, Result, TablescopeError};
pub use inference::{
    ColumnInference, InferenceConfig, TypeInferencer, infer_column_type, infer_types,
};
pub use input::{CellValue, Row, SourceFormat, SourceInfo, decode, sanitize};
pub use schema::{ColumnTypes, DataType, ParsedTable};
pub use visualization::{
    Aggregation, ChartType, ColorPolicy, Recommender, RecommenderConfig, VisualizationSuggestion,
    YAxis, recommend,
};
