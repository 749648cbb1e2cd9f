//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Tablescope: infer column types and suggest charts for tabular files
#[derive(Parser)]
#[command(name = "tablescope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a file, infer column types and suggest visualizations
    Analyze {
        /// Path to the data file (CSV/TSV/TXT or XLSX/XLS/ODS)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,

        /// Write the analysis JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON configuration file (partial documents are fine)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Minimum fraction of samples that must match a type (0.0-1.0)
        #[arg(long, value_parser = parse_fraction)]
        confidence: Option<f64>,

        /// Largest number of rows sampled per column
        #[arg(long)]
        max_sample: Option<usize>,

        /// Seed for palette color draws (default: cycle through the palette)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show per-column type inference diagnostics
    Types {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn parse_fraction(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is outside 0.0-1.0", value))
    }
}
