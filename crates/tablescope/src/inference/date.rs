//! Date value recognition.
//!
//! A value is a date only if it matches one of the separator-based patterns
//! below *and* names a real calendar day between 1800 and 2100. Bare integers
//! and decimals are never dates.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::CellValue;

/// Earliest accepted year.
pub const MIN_YEAR: i32 = 1800;

/// Latest accepted year.
pub const MAX_YEAR: i32 = 2100;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// How the captured groups of a pattern map onto a date.
#[derive(Debug, Clone, Copy)]
enum FieldOrder {
    /// `(year, month, day)`
    YearMonthDay,
    /// `(month, day, year)`, read day-first when the month is out of range.
    MonthDayYear,
    /// `(day, month, year)`
    DayMonthYear,
    /// `(month name, day, year)`
    NameDayYear,
    /// `(day, month name, year)`
    DayNameYear,
}

struct DatePattern {
    regex: Regex,
    order: FieldOrder,
}

impl DatePattern {
    fn new(pattern: &str, order: FieldOrder) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            order,
        }
    }
}

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

static BARE_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+$").unwrap());

static BARE_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d*\.\d+$").unwrap());

static DATE_PATTERNS: Lazy<Vec<DatePattern>> = Lazy::new(|| {
    vec![
        // ISO, optional time suffix
        DatePattern::new(
            concat!(
                r"^(\d{4})-(\d{1,2})-(\d{1,2})",
                r"(?:[T ]\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?\s*(?:Z|[+-]\d{2}:?\d{2})?)?$",
            ),
            FieldOrder::YearMonthDay,
        ),
        DatePattern::new(r"^(\d{1,2})/(\d{1,2})/(\d{2}|\d{4})$", FieldOrder::MonthDayYear),
        DatePattern::new(r"^(\d{4})/(\d{1,2})/(\d{1,2})$", FieldOrder::YearMonthDay),
        DatePattern::new(r"^(\d{1,2})-(\d{1,2})-(\d{2}|\d{4})$", FieldOrder::MonthDayYear),
        DatePattern::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{2}|\d{4})$", FieldOrder::DayMonthYear),
        // Month D, YYYY
        DatePattern::new(
            r"^([A-Za-z]+)\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})$",
            FieldOrder::NameDayYear,
        ),
        // D Month YYYY
        DatePattern::new(
            r"^(\d{1,2})(?:st|nd|rd|th)?\s+([A-Za-z]+)\.?,?\s+(\d{4})$",
            FieldOrder::DayNameYear,
        ),
        // D-Mon-YY[YY]
        DatePattern::new(r"^(\d{1,2})-([A-Za-z]{3,})-(\d{2}|\d{4})$", FieldOrder::DayNameYear),
    ]
});

/// Parse a date in one of the recognized formats.
///
/// Returns `None` for bare numbers, unrecognized shapes, impossible calendar
/// days and years outside `[1800, 2100]`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();

    if BARE_INTEGER.is_match(trimmed) || BARE_DECIMAL.is_match(trimmed) {
        return None;
    }

    DATE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.regex.captures(trimmed)?;
        let (a, b, c) = (&caps[1], &caps[2], &caps[3]);

        match pattern.order {
            FieldOrder::YearMonthDay => build(parse_year(a)?, parse_part(b)?, parse_part(c)?),
            FieldOrder::MonthDayYear => {
                let (month, day, year) = (parse_part(a)?, parse_part(b)?, parse_year(c)?);
                build(year, month, day).or_else(|| {
                    if month > 12 {
                        build(year, day, month)
                    } else {
                        None
                    }
                })
            }
            FieldOrder::DayMonthYear => build(parse_year(c)?, parse_part(b)?, parse_part(a)?),
            FieldOrder::NameDayYear => build(parse_year(c)?, month_from_name(a)?, parse_part(b)?),
            FieldOrder::DayNameYear => build(parse_year(c)?, month_from_name(b)?, parse_part(a)?),
        }
    })
}

/// Date predicate over a raw cell. Native numbers are never dates.
pub fn is_date(value: &CellValue) -> bool {
    match value {
        CellValue::Text(s) => parse_date(s).is_some(),
        CellValue::Number(_) | CellValue::Null => false,
    }
}

fn build(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|d| (MIN_YEAR..=MAX_YEAR).contains(&d.year()))
}

fn parse_part(s: &str) -> Option<u32> {
    s.parse().ok()
}

/// Parse a year, pivoting two-digit years: 00-69 are 2000s, 70-99 are 1900s.
fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() == 2 {
        Some(if year < 70 { 2000 + year } else { 1900 + year })
    } else {
        Some(year)
    }
}

/// Resolve an English month name or abbreviation of at least three letters.
fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    if lower == "sept" {
        return Some(9);
    }
    if lower.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.starts_with(&lower))
        .map(|i| i as u32 + 1)
}
