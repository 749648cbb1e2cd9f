//! Fuzz target for the full pipeline.
//!
//! This fuzzer tests that decoding and analysis:
//! 1. Never panic on malformed delimited text or workbooks
//! 2. Always end the suggestion list with a table when they succeed

#![no_main]

use libfuzzer_sys::fuzz_target;
use tablescope::{ChartType, Engine};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let engine = Engine::new();
    for filename in ["upload.csv", "upload.tsv", "upload.xlsx"] {
        if let Ok(analysis) = engine.analyze(data, filename) {
            let last = analysis.suggestions.last().map(|s| s.chart_type);
            assert_eq!(last, Some(ChartType::Table));
        }
    }
});
