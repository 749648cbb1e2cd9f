//! Tablescope CLI - inspect tabular uploads and their suggested charts.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            file,
            json,
            output,
            config,
            confidence,
            max_sample,
            seed,
        } => commands::analyze::run(
            file,
            json,
            output,
            commands::ConfigArgs {
                config,
                confidence,
                max_sample,
                seed,
            },
        ),

        Commands::Types { file, json, config } => commands::types::run(
            file,
            json,
            commands::ConfigArgs {
                config,
                ..Default::default()
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
