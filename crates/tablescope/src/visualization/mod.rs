//! Chart and table recommendations for inferred tables.
//!
//! This module defines the suggestion types handed to a downstream renderer
//! and the strategy-based recommender that produces them.

mod humanize;
mod recommender;
mod suggestion;

pub use humanize::humanize;
pub use recommender::{
    AllNumericStrategy, CategoryComparisonStrategy, ColorPolicy, FallbackTableStrategy,
    MetricCardStrategy, PALETTE, Recommender, RecommenderConfig, TableShape, TimeSeriesStrategy,
    VisualizationStrategy, recommend,
};
pub use suggestion::{Aggregation, ChartType, VisualizationSuggestion, YAxis};
