//! Fuzz target for the number and date predicates.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tablescope::inference::{parse_date, parse_number};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(n) = parse_number(s) {
            assert!(n.is_finite());
        }
        let _ = parse_date(s);
    }
});
