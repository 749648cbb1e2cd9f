//! Logging setup using `tracing-subscriber`.
//!
//! `RUST_LOG` takes precedence; otherwise the `-v` count picks the level.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a level (warn by default).
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a compact stderr subscriber.
pub fn init(verbosity: u8) {
    let default_level = level_for(verbosity).as_str().to_lowercase();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
