//! Heuristic visualization recommendation.
//!
//! A fixed list of independent strategies each inspects the shape of the
//! table (which columns are dates, numbers and strings) and may contribute
//! suggestions. Strategy order determines suggestion order, and a plain table
//! is always appended last.

use serde::{Deserialize, Serialize};

use crate::input::Row;
use crate::schema::{ColumnTypes, DataType};

use super::humanize::humanize;
use super::suggestion::{Aggregation, ChartType, VisualizationSuggestion, YAxis};

/// Display colors assigned to charts and metric cards.
pub const PALETTE: [&str; 8] = [
    "#2563eb", // blue
    "#16a34a", // green
    "#f59e0b", // amber
    "#dc2626", // red
    "#7c3aed", // violet
    "#0891b2", // cyan
    "#db2777", // pink
    "#65a30d", // lime
];

/// How colors are chosen from [`PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ColorPolicy {
    /// `PALETTE[index % len]` by position in the suggestion list.
    #[default]
    Cycle,
    /// One draw per colored suggestion from an RNG seeded with `seed`.
    Seeded { seed: u64 },
}

/// Configuration for the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Maximum numeric series charted by the time-series and all-numeric strategies.
    pub max_series: usize,
    /// Maximum metric cards.
    pub max_metric_cards: usize,
    /// Minimum rows before a pie chart is suggested.
    pub pie_min_rows: usize,
    /// Color selection policy.
    pub color_policy: ColorPolicy,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_series: 3,
            max_metric_cards: 4,
            pie_min_rows: 3,
            color_policy: ColorPolicy::Cycle,
        }
    }
}

/// Column names grouped by type, in column order.
#[derive(Debug, Clone, Default)]
pub struct TableShape<'a> {
    pub dates: Vec<&'a str>,
    pub numbers: Vec<&'a str>,
    pub strings: Vec<&'a str>,
    pub row_count: usize,
}

impl<'a> TableShape<'a> {
    /// Group columns by inferred type.
    pub fn new(column_types: &'a ColumnTypes, row_count: usize) -> Self {
        let mut shape = TableShape {
            row_count,
            ..Default::default()
        };

        for (name, data_type) in column_types {
            match data_type {
                DataType::Date => shape.dates.push(name),
                DataType::Number => shape.numbers.push(name),
                DataType::String => shape.strings.push(name),
            }
        }

        shape
    }
}

/// A heuristic that proposes suggestions for a table shape.
pub trait VisualizationStrategy: Send + Sync {
    /// Name of this strategy.
    fn name(&self) -> &'static str;

    /// Propose zero or more suggestions.
    fn propose(
        &self,
        shape: &TableShape<'_>,
        config: &RecommenderConfig,
    ) -> Vec<VisualizationSuggestion>;
}

/// One line chart per numeric column against the first date column.
pub struct TimeSeriesStrategy;

impl VisualizationStrategy for TimeSeriesStrategy {
    fn name(&self) -> &'static str {
        "time_series"
    }

    fn propose(
        &self,
        shape: &TableShape<'_>,
        config: &RecommenderConfig,
    ) -> Vec<VisualizationSuggestion> {
        let Some(&date) = shape.dates.first() else {
            return Vec::new();
        };

        shape
            .numbers
            .iter()
            .take(config.max_series)
            .map(|&number| {
                VisualizationSuggestion::new(
                    ChartType::Line,
                    format!("{} Over Time", humanize(number)),
                )
                .with_x_axis(date)
                .with_y_axis(YAxis::Series(vec![number.to_string()]))
            })
            .collect()
    }
}

/// Bar and pie charts of the first numeric column by the first string column.
pub struct CategoryComparisonStrategy;

impl VisualizationStrategy for CategoryComparisonStrategy {
    fn name(&self) -> &'static str {
        "category_comparison"
    }

    fn propose(
        &self,
        shape: &TableShape<'_>,
        config: &RecommenderConfig,
    ) -> Vec<VisualizationSuggestion> {
        let (Some(&category), Some(&number)) = (shape.strings.first(), shape.numbers.first()) else {
            return Vec::new();
        };

        let mut suggestions = vec![
            VisualizationSuggestion::new(
                ChartType::Bar,
                format!("{} by {}", humanize(number), humanize(category)),
            )
            .with_x_axis(category)
            .with_y_axis(YAxis::Column(number.to_string())),
        ];

        if shape.row_count >= config.pie_min_rows {
            suggestions.push(
                VisualizationSuggestion::new(
                    ChartType::Pie,
                    format!("Distribution of {}", humanize(number)),
                )
                .with_name_key(category)
                .with_value_key(number),
            );
        }

        suggestions
    }
}

/// For tables of numbers only: bars of each numeric column against the first.
pub struct AllNumericStrategy;

impl VisualizationStrategy for AllNumericStrategy {
    fn name(&self) -> &'static str {
        "all_numeric"
    }

    fn propose(
        &self,
        shape: &TableShape<'_>,
        config: &RecommenderConfig,
    ) -> Vec<VisualizationSuggestion> {
        if shape.numbers.len() < 2 || !shape.dates.is_empty() || !shape.strings.is_empty() {
            return Vec::new();
        }

        let x = shape.numbers[0];
        shape.numbers[1..]
            .iter()
            .take(config.max_series)
            .map(|&y| {
                VisualizationSuggestion::new(
                    ChartType::Bar,
                    format!("{} vs {}", humanize(y), humanize(x)),
                )
                .with_x_axis(x)
                .with_y_axis(YAxis::Column(y.to_string()))
            })
            .collect()
    }
}

/// Summed metric cards for the leading numeric columns.
pub struct MetricCardStrategy;

impl VisualizationStrategy for MetricCardStrategy {
    fn name(&self) -> &'static str {
        "metric_cards"
    }

    fn propose(
        &self,
        shape: &TableShape<'_>,
        config: &RecommenderConfig,
    ) -> Vec<VisualizationSuggestion> {
        shape
            .numbers
            .iter()
            .take(config.max_metric_cards)
            .map(|&number| {
                VisualizationSuggestion::new(
                    ChartType::MetricCard,
                    format!("Total {}", humanize(number)),
                )
                .with_value_key(number)
                .with_aggregation(Aggregation::Sum)
                .with_precision(2)
            })
            .collect()
    }
}

/// The plain data table, always offered.
pub struct FallbackTableStrategy;

impl VisualizationStrategy for FallbackTableStrategy {
    fn name(&self) -> &'static str {
        "fallback_table"
    }

    fn propose(
        &self,
        _shape: &TableShape<'_>,
        _config: &RecommenderConfig,
    ) -> Vec<VisualizationSuggestion> {
        vec![VisualizationSuggestion::new(ChartType::Table, "Data Table")]
    }
}

/// Applies the strategies in order and colors the result.
pub struct Recommender {
    config: RecommenderConfig,
    strategies: Vec<Box<dyn VisualizationStrategy>>,
}

impl Recommender {
    /// Create a recommender with default settings.
    pub fn new() -> Self {
        Self::with_config(RecommenderConfig::default())
    }

    /// Create a recommender with custom configuration.
    pub fn with_config(config: RecommenderConfig) -> Self {
        Self {
            config,
            strategies: vec![
                Box::new(TimeSeriesStrategy),
                Box::new(CategoryComparisonStrategy),
                Box::new(AllNumericStrategy),
                Box::new(MetricCardStrategy),
                Box::new(FallbackTableStrategy),
            ],
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Names of the registered strategies, in application order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Suggest visualizations for a table. Column order is the iteration
    /// order of `column_types`.
    pub fn recommend(
        &self,
        rows: &[Row],
        column_types: &ColumnTypes,
    ) -> Vec<VisualizationSuggestion> {
        let shape = TableShape::new(column_types, rows.len());

        let mut suggestions = Vec::new();
        for strategy in &self.strategies {
            let proposed = strategy.propose(&shape, &self.config);
            if !proposed.is_empty() {
                tracing::debug!(
                    strategy = strategy.name(),
                    count = proposed.len(),
                    "strategy proposed"
                );
            }
            suggestions.extend(proposed);
        }

        self.assign_colors(&mut suggestions);
        suggestions
    }

    fn assign_colors(&self, suggestions: &mut [VisualizationSuggestion]) {
        match self.config.color_policy {
            ColorPolicy::Cycle => {
                for (i, suggestion) in suggestions.iter_mut().enumerate() {
                    if suggestion.chart_type.uses_color() {
                        suggestion.color = Some(PALETTE[i % PALETTE.len()].to_string());
                    }
                }
            }
            ColorPolicy::Seeded { seed } => {
                let mut rng = fastrand::Rng::with_seed(seed);
                for suggestion in suggestions.iter_mut().filter(|s| s.chart_type.uses_color()) {
                    suggestion.color = Some(PALETTE[rng.usize(..PALETTE.len())].to_string());
                }
            }
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Suggest visualizations with the default configuration.
pub fn recommend(rows: &[Row], column_types: &ColumnTypes) -> Vec<VisualizationSuggestion> {
    Recommender::new().recommend(rows, column_types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CellValue;

    fn types(pairs: &[(&str, DataType)]) -> ColumnTypes {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| [("i".to_string(), CellValue::Number(i as f64))].into_iter().collect())
            .collect()
    }

    fn kinds(suggestions: &[VisualizationSuggestion]) -> Vec<ChartType> {
        suggestions.iter().map(|s| s.chart_type).collect()
    }

    #[test]
    fn test_time_series() {
        let column_types = types(&[("date", DataType::Date), ("revenue", DataType::Number)]);
        let suggestions = recommend(&rows(2), &column_types);

        assert_eq!(
            kinds(&suggestions),
            vec![ChartType::Line, ChartType::MetricCard, ChartType::Table]
        );
        assert_eq!(suggestions[0].title, "Revenue Over Time");
        assert_eq!(suggestions[0].x_axis.as_deref(), Some("date"));
        assert_eq!(suggestions[0].y_axis, Some(YAxis::Series(vec!["revenue".into()])));
        assert_eq!(suggestions[1].title, "Total Revenue");
    }

    #[test]
    fn test_time_series_caps_at_three() {
        let column_types = types(&[
            ("a", DataType::Number),
            ("day", DataType::Date),
            ("b", DataType::Number),
            ("c", DataType::Number),
            ("d", DataType::Number),
        ]);
        let suggestions = recommend(&rows(5), &column_types);
        let lines: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.chart_type == ChartType::Line)
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(lines, vec!["A Over Time", "B Over Time", "C Over Time"]);
        assert!(
            suggestions
                .iter()
                .filter(|s| s.chart_type == ChartType::Line)
                .all(|s| s.x_axis.as_deref() == Some("day"))
        );
    }

    #[test]
    fn test_category_comparison() {
        let column_types = types(&[("region", DataType::String), ("sales", DataType::Number)]);
        let suggestions = recommend(&rows(3), &column_types);

        assert_eq!(
            kinds(&suggestions),
            vec![ChartType::Bar, ChartType::Pie, ChartType::MetricCard, ChartType::Table]
        );
        assert_eq!(suggestions[0].title, "Sales by Region");
        assert_eq!(suggestions[0].y_axis, Some(YAxis::Column("sales".into())));
        assert_eq!(suggestions[1].title, "Distribution of Sales");
        assert_eq!(suggestions[1].name_key.as_deref(), Some("region"));
        assert_eq!(suggestions[1].value_key.as_deref(), Some("sales"));
    }

    #[test]
    fn test_pie_requires_three_rows() {
        let column_types = types(&[("region", DataType::String), ("sales", DataType::Number)]);
        let suggestions = recommend(&rows(2), &column_types);
        assert!(!kinds(&suggestions).contains(&ChartType::Pie));
    }

    #[test]
    fn test_all_numeric() {
        let column_types = types(&[
            ("spend", DataType::Number),
            ("clicks", DataType::Number),
            ("adImpressions", DataType::Number),
        ]);
        let suggestions = recommend(&rows(10), &column_types);

        assert_eq!(suggestions[0].title, "Clicks vs Spend");
        assert_eq!(suggestions[1].title, "Ad Impressions vs Spend");
        assert_eq!(suggestions[1].x_axis.as_deref(), Some("spend"));
        assert_eq!(
            kinds(&suggestions),
            vec![
                ChartType::Bar,
                ChartType::Bar,
                ChartType::MetricCard,
                ChartType::MetricCard,
                ChartType::MetricCard,
                ChartType::Table,
            ]
        );
    }

    #[test]
    fn test_all_numeric_skipped_with_strings() {
        let column_types = types(&[
            ("a", DataType::Number),
            ("b", DataType::Number),
            ("label", DataType::String),
        ]);
        let suggestions = recommend(&rows(2), &column_types);
        assert!(suggestions.iter().all(|s| !s.title.contains(" vs ")));
    }

    #[test]
    fn test_metric_cards_cap_at_four() {
        let column_types = types(&[
            ("a", DataType::Number),
            ("b", DataType::Number),
            ("c", DataType::Number),
            ("d", DataType::Number),
            ("e", DataType::Number),
        ]);
        let suggestions = recommend(&rows(1), &column_types);
        let cards: Vec<&VisualizationSuggestion> = suggestions
            .iter()
            .filter(|s| s.chart_type == ChartType::MetricCard)
            .collect();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[3].title, "Total D");
        assert_eq!(cards[0].aggregation, Some(Aggregation::Sum));
        assert_eq!(cards[0].precision, Some(2));
    }

    #[test]
    fn test_strings_only_gets_table() {
        let column_types = types(&[("name", DataType::String), ("notes", DataType::String)]);
        let suggestions = recommend(&rows(4), &column_types);
        assert_eq!(kinds(&suggestions), vec![ChartType::Table]);
        assert_eq!(suggestions[0].title, "Data Table");
        assert_eq!(suggestions[0].color, None);
    }

    #[test]
    fn test_cycle_colors_by_position() {
        let column_types = types(&[("region", DataType::String), ("sales", DataType::Number)]);
        let suggestions = recommend(&rows(3), &column_types);

        assert_eq!(suggestions[0].color.as_deref(), Some(PALETTE[0]));
        assert_eq!(suggestions[1].color, None);
        assert_eq!(suggestions[2].color.as_deref(), Some(PALETTE[2]));
    }

    #[test]
    fn test_seeded_colors_are_reproducible() {
        let config = RecommenderConfig {
            color_policy: ColorPolicy::Seeded { seed: 7 },
            ..RecommenderConfig::default()
        };
        let column_types = types(&[
            ("date", DataType::Date),
            ("a", DataType::Number),
            ("b", DataType::Number),
        ]);

        let first = Recommender::with_config(config.clone()).recommend(&rows(5), &column_types);
        let second = Recommender::with_config(config).recommend(&rows(5), &column_types);

        assert_eq!(first, second);
        assert!(
            first
                .iter()
                .filter(|s| s.chart_type.uses_color())
                .all(|s| s.color.as_deref().is_some_and(|c| PALETTE.contains(&c)))
        );
    }

    #[test]
    fn test_strategy_order() {
        assert_eq!(
            Recommender::new().strategy_names(),
            vec![
                "time_series",
                "category_comparison",
                "all_numeric",
                "metric_cards",
                "fallback_table",
            ]
        );
    }
}
