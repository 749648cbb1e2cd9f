//! Numeric value recognition.
//!
//! Accepts the formats people actually type into spreadsheets: currency
//! symbols and codes, thousands separators, percentages and accounting-style
//! negatives such as `(42.50)`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::CellValue;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

static CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₹'];

static CURRENCY_CODE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([+-]?)(?:rp|usd|eur|gbp|jpy|inr|idr)\.?").unwrap());

static CURRENCY_CODE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:rp|usd|eur|gbp|jpy|inr|idr)$").unwrap());

static SCIENTIFIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?[eE][+-]?\d+$").unwrap());

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d*\.?\d+$").unwrap());

/// Parse a formatted number such as `$1,200.50`, `12%` or `(42.50)`.
///
/// Returns `None` unless the cleaned text is a plain decimal or scientific
/// literal with a finite value.
pub fn parse_number(value: &str) -> Option<f64> {
    let cleaned: String = value.chars().filter(|c| !is_decoration(*c)).collect();

    // Codes may sit outside or inside accounting parentheses: `Rp(1000)`, `(Rp1000)`
    let cleaned = strip_currency_code(&cleaned);
    let cleaned = match cleaned.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => format!("-{}", strip_currency_code(inner)),
        None => cleaned,
    };

    if !SCIENTIFIC.is_match(&cleaned) && !DECIMAL.is_match(&cleaned) {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn is_decoration(c: char) -> bool {
    CURRENCY_SYMBOLS.contains(&c) || c == '%' || c == ',' || c.is_whitespace()
}

/// Remove a leading or trailing currency code, keeping any sign before it.
fn strip_currency_code(value: &str) -> String {
    let value = CURRENCY_CODE_PREFIX.replace(value, "$1");
    CURRENCY_CODE_SUFFIX.replace(&value, "").into_owned()
}

/// Number predicate over a raw cell.
pub fn is_number(value: &CellValue) -> bool {
    match value {
        CellValue::Number(n) => n.is_finite(),
        CellValue::Text(s) => parse_number(s).is_some(),
        CellValue::Null => false,
    }
}
