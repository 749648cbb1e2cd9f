//! Visualization suggestion types.

use serde::{Deserialize, Serialize};

/// Kind of visualization to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Area,
    Table,
    MetricCard,
}

impl ChartType {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Line => "Line Chart",
            ChartType::Bar => "Bar Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Area => "Area Chart",
            ChartType::Table => "Table",
            ChartType::MetricCard => "Metric Card",
        }
    }

    /// Whether suggestions of this kind carry a display color.
    pub fn uses_color(&self) -> bool {
        matches!(
            self,
            ChartType::Line | ChartType::Bar | ChartType::Area | ChartType::MetricCard
        )
    }
}

/// Aggregation applied to a value column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    Sum,
    Average,
    Count,
    Min,
    Max,
}

/// Y-axis binding: one column, or an ordered list of series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YAxis {
    Column(String),
    Series(Vec<String>),
}

impl YAxis {
    /// Column names bound to the axis, in order.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            YAxis::Column(c) => vec![c.as_str()],
            YAxis::Series(cs) => cs.iter().map(|c| c.as_str()).collect(),
        }
    }
}

/// An advisory visualization for the downstream renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationSuggestion {
    /// Kind of visualization.
    #[serde(rename = "type")]
    pub chart_type: ChartType,

    /// Display title.
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<YAxis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<Aggregation>,

    /// Decimal places for displayed values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,

    /// Palette color token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl VisualizationSuggestion {
    /// Create a new suggestion with only a type and title.
    pub fn new(chart_type: ChartType, title: impl Into<String>) -> Self {
        Self {
            chart_type,
            title: title.into(),
            x_axis: None,
            y_axis: None,
            name_key: None,
            value_key: None,
            aggregation: None,
            precision: None,
            color: None,
        }
    }

    /// Set the x-axis column.
    pub fn with_x_axis(mut self, column: impl Into<String>) -> Self {
        self.x_axis = Some(column.into());
        self
    }

    /// Set the y-axis binding.
    pub fn with_y_axis(mut self, y_axis: YAxis) -> Self {
        self.y_axis = Some(y_axis);
        self
    }

    /// Set the name (category) column.
    pub fn with_name_key(mut self, column: impl Into<String>) -> Self {
        self.name_key = Some(column.into());
        self
    }

    /// Set the value column.
    pub fn with_value_key(mut self, column: impl Into<String>) -> Self {
        self.value_key = Some(column.into());
        self
    }

    /// Set the aggregation.
    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = Some(aggregation);
        self
    }

    /// Set the display precision.
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
