//! Main Engine struct and public API.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::inference::{ColumnInference, InferenceConfig, TypeInferencer};
use crate::input::{self, SourceFormat, SourceInfo};
use crate::schema::ParsedTable;
use crate::visualization::{Recommender, RecommenderConfig, VisualizationSuggestion};

/// Configuration for the whole pipeline.
///
/// Every field has a default, so a partial JSON document deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Type inference configuration.
    pub inference: InferenceConfig,
    /// Recommender configuration.
    pub recommender: RecommenderConfig,
}

/// Result of analyzing one upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Metadata about the uploaded buffer.
    pub source: SourceInfo,
    /// Decoded, sanitized and typed table.
    pub table: ParsedTable,
    /// Suggested visualizations, most relevant first.
    pub suggestions: Vec<VisualizationSuggestion>,
}

/// Runs decode, sanitize, infer and recommend over an uploaded buffer.
///
/// The engine holds configuration only and can be shared across threads.
pub struct Engine {
    inference: TypeInferencer,
    recommender: Recommender,
}

impl Engine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            inference: TypeInferencer::with_config(config.inference),
            recommender: Recommender::with_config(config.recommender),
        }
    }

    /// Get the type inferencer.
    pub fn inferencer(&self) -> &TypeInferencer {
        &self.inference
    }

    /// Get the recommender.
    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    /// Analyze an uploaded buffer. Only the extension of `filename` selects
    /// the decoder.
    pub fn analyze(&self, bytes: &[u8], filename: &str) -> Result<Analysis> {
        let source = Self::describe(bytes, filename)?;
        let table = self.parse(bytes, source.format)?;
        let suggestions = self.recommender.recommend(&table.rows, &table.column_types);

        tracing::info!(
            file = %source.filename,
            rows = table.row_count,
            columns = table.column_count(),
            suggestions = suggestions.len(),
            "analyzed upload"
        );

        Ok(Analysis {
            source,
            table,
            suggestions,
        })
    }

    /// Decode, sanitize and type an uploaded buffer without recommending.
    pub fn parse_table(&self, bytes: &[u8], filename: &str) -> Result<ParsedTable> {
        let source = Self::describe(bytes, filename)?;
        self.parse(bytes, source.format)
    }

    /// Per-column inference diagnostics for an uploaded buffer.
    pub fn inspect(&self, bytes: &[u8], filename: &str) -> Result<Vec<ColumnInference>> {
        let source = Self::describe(bytes, filename)?;
        let rows = input::sanitize(input::decode_as(bytes, source.format)?)?;

        let columns: Vec<String> = rows[0].keys().cloned().collect();
        Ok(columns
            .iter()
            .map(|column| self.inference.inspect_column(&rows, column))
            .collect())
    }

    fn describe(bytes: &[u8], filename: &str) -> Result<SourceInfo> {
        // Surface the unsupported-format error before hashing anything
        let format = SourceFormat::detect(filename)?;
        Ok(SourceInfo::new(filename, format, bytes))
    }

    fn parse(&self, bytes: &[u8], format: SourceFormat) -> Result<ParsedTable> {
        let rows = input::decode_as(bytes, format)?;
        let rows = input::sanitize(rows)?;
        let column_types = self.inference.infer_types(&rows);
        Ok(ParsedTable::new(rows, &column_types))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
