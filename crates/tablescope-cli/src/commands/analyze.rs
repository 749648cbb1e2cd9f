//! Analyze command - decode, type and suggest charts for an upload.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::{Analysis, DataType, Engine, VisualizationSuggestion, YAxis};

use super::{ConfigArgs, read_upload};

pub fn run(
    file: PathBuf,
    json_output: bool,
    output: Option<PathBuf>,
    config: ConfigArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let (bytes, filename) = read_upload(&file)?;
    let engine = Engine::with_config(config.resolve()?);

    if !json_output {
        println!("{} {}", "Analyzing".cyan().bold(), file.display());
    }

    let analysis = engine.analyze(&bytes, &filename)?;

    if let Some(path) = &output {
        std::fs::write(path, serde_json::to_string_pretty(&analysis)?)?;
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_summary(&analysis);

    if let Some(path) = output {
        println!();
        println!("{} {}", "Analysis written to".green(), path.display());
    }

    Ok(())
}

fn print_summary(analysis: &Analysis) {
    let table = &analysis.table;

    println!();
    println!(
        "{} {} rows, {} columns ({})",
        "Table:".bold(),
        table.row_count.to_string().white().bold(),
        table.column_count().to_string().white().bold(),
        analysis.source.format.label()
    );
    println!("  {}", analysis.source.hash.dimmed());

    println!();
    println!("{}", "Columns:".bold());
    for header in &table.headers {
        let data_type = table.column_type(header).unwrap_or_default();
        let tag = match data_type {
            DataType::Date => data_type.as_str().magenta(),
            DataType::Number => data_type.as_str().blue(),
            DataType::String => data_type.as_str().normal(),
        };
        println!("  {:<8} {}", tag, header);
    }

    println!();
    println!(
        "{} ({})",
        "Suggested visualizations".bold(),
        analysis.suggestions.len()
    );
    for (i, suggestion) in analysis.suggestions.iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            format!("[{}]", suggestion.chart_type.label()).cyan(),
            suggestion.title.white().bold()
        );
        let detail = describe(suggestion);
        if !detail.is_empty() {
            println!("     {}", detail.dimmed());
        }
    }
}

fn describe(suggestion: &VisualizationSuggestion) -> String {
    let mut parts = Vec::new();

    if let Some(x) = &suggestion.x_axis {
        parts.push(format!("x: {}", x));
    }
    match &suggestion.y_axis {
        Some(YAxis::Column(y)) => parts.push(format!("y: {}", y)),
        Some(YAxis::Series(series)) => parts.push(format!("y: {}", series.join(", "))),
        None => {}
    }
    if let Some(name) = &suggestion.name_key {
        parts.push(format!("name: {}", name));
    }
    if let Some(value) = &suggestion.value_key {
        parts.push(format!("value: {}", value));
    }
    if let Some(aggregation) = suggestion.aggregation {
        parts.push(format!("{:?}", aggregation).to_lowercase());
    }
    if let Some(color) = &suggestion.color {
        parts.push(color.clone());
    }

    parts.join("  ")
}
