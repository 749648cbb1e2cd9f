//! Types command - per-column inference diagnostics.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::{DataType, Engine};

use super::{ConfigArgs, read_upload};

pub fn run(
    file: PathBuf,
    json_output: bool,
    config: ConfigArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let (bytes, filename) = read_upload(&file)?;
    let engine = Engine::with_config(config.resolve()?);
    let columns = engine.inspect(&bytes, &filename)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&columns)?);
        return Ok(());
    }

    let threshold = engine.inferencer().config().confidence_threshold;
    println!(
        "{} {} (threshold {:.0}%)",
        "Column types for".cyan().bold(),
        file.display(),
        threshold * 100.0
    );
    println!();
    println!(
        "  {:<24} {:<8} {:>7} {:>7} {:>7} {:>7} {:>6}",
        "column", "type", "sampled", "valid", "number", "date", "conf"
    );

    for column in &columns {
        let data_type = match column.data_type {
            DataType::Date => "DATE".magenta(),
            DataType::Number => "NUMBER".blue(),
            DataType::String => "STRING".normal(),
        };
        let confidence = format!("{:.0}%", column.confidence * 100.0);
        let confidence = if column.data_type != DataType::String && column.confidence < 1.0 {
            confidence.yellow()
        } else {
            confidence.normal()
        };

        println!(
            "  {:<24} {:<8} {:>7} {:>7} {:>7} {:>7} {:>6}",
            column.column,
            data_type,
            column.sampled,
            column.valid,
            column.number_matches,
            column.date_matches,
            confidence
        );
    }

    Ok(())
}
