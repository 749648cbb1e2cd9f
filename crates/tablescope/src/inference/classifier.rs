//! Column type classification from sampled values.

use serde::{Deserialize, Serialize};

use crate::input::{CellValue, Row};
use crate::schema::{ColumnTypes, DataType};

use super::date::is_date;
use super::number::is_number;

/// Configuration for type inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Minimum fraction of valid samples that must match a type (inclusive).
    pub confidence_threshold: f64,
    /// Smallest sample window.
    pub min_sample: usize,
    /// Largest sample window.
    pub max_sample: usize,
    /// Fraction of the table sampled before clamping.
    pub sample_ratio: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.85,
            min_sample: 100,
            max_sample: 2048,
            sample_ratio: 0.1,
        }
    }
}

/// Diagnostics for one classified column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInference {
    /// Column name.
    pub column: String,
    /// Assigned type.
    pub data_type: DataType,
    /// Values examined (the sample window, bounded by the row count).
    pub sampled: usize,
    /// Sampled values that were neither null nor blank.
    pub valid: usize,
    /// Valid samples accepted by the number predicate.
    pub number_matches: usize,
    /// Valid samples accepted by the date predicate.
    pub date_matches: usize,
    /// Confidence in the assigned type (0.0-1.0).
    pub confidence: f64,
}

/// Classifies columns as [`DataType::Number`], [`DataType::Date`] or
/// [`DataType::String`] from a deterministic prefix sample.
///
/// Holds configuration only; every method is a pure function of its input.
#[derive(Debug, Clone, Default)]
pub struct TypeInferencer {
    config: InferenceConfig,
}

impl TypeInferencer {
    /// Create an inferencer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inferencer with custom configuration.
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Sample window for a table of `total_rows` rows:
    /// `clamp(max(min_sample, floor(ratio * total)), min_sample, max_sample)`.
    pub fn sample_size(&self, total_rows: usize) -> usize {
        let scaled = (self.config.sample_ratio * total_rows as f64).floor() as usize;
        scaled.max(self.config.min_sample).min(self.config.max_sample)
    }

    /// Infer a type for every column of the first row, in column order.
    pub fn infer_types(&self, rows: &[Row]) -> ColumnTypes {
        let Some(first) = rows.first() else {
            return ColumnTypes::new();
        };

        first
            .keys()
            .map(|column| (column.clone(), self.infer_column_type(rows, column)))
            .collect()
    }

    /// Infer the type of a single column.
    pub fn infer_column_type(&self, rows: &[Row], column: &str) -> DataType {
        self.inspect_column(rows, column).data_type
    }

    /// Classify a column and report the counts behind the decision.
    pub fn inspect_column(&self, rows: &[Row], column: &str) -> ColumnInference {
        let window = self.sample_size(rows.len()).min(rows.len());

        let valid: Vec<&CellValue> = rows[..window]
            .iter()
            .filter_map(|row| row.get(column))
            .filter(|value| !value.is_blank())
            .collect();

        let mut inference = ColumnInference {
            column: column.to_string(),
            data_type: DataType::String,
            sampled: window,
            valid: valid.len(),
            number_matches: 0,
            date_matches: 0,
            confidence: 0.0,
        };

        if valid.is_empty() {
            tracing::debug!(
                column,
                sampled = window,
                "no valid samples, defaulting to STRING"
            );
            return inference;
        }

        let total = valid.len() as f64;
        let threshold = self.config.confidence_threshold;

        // NUMBER before DATE so bare integers like "2025" stay numeric
        inference.number_matches = valid.iter().filter(|v| is_number(v)).count();
        let number_ratio = inference.number_matches as f64 / total;

        if number_ratio >= threshold {
            inference.data_type = DataType::Number;
            inference.confidence = number_ratio;
        } else {
            inference.date_matches = valid.iter().filter(|v| is_date(v)).count();
            let date_ratio = inference.date_matches as f64 / total;

            if date_ratio >= threshold {
                inference.data_type = DataType::Date;
                inference.confidence = date_ratio;
            } else {
                inference.confidence = 1.0 - number_ratio.max(date_ratio);
            }
        }

        tracing::debug!(
            column,
            data_type = %inference.data_type,
            sampled = inference.sampled,
            valid = inference.valid,
            confidence = inference.confidence,
            "classified column"
        );

        inference
    }
}

/// Infer column types with the default configuration.
pub fn infer_types(rows: &[Row]) -> ColumnTypes {
    TypeInferencer::new().infer_types(rows)
}

/// Infer one column's type with the default configuration.
pub fn infer_column_type(rows: &[Row], column: &str) -> DataType {
    TypeInferencer::new().infer_column_type(rows, column)
}
