//! Table decoding for delimited text and spreadsheets.

use std::io::{BufRead, BufReader, Cursor};

use calamine::{Data, DataType, Reader, open_workbook_auto_from_rs};
use chrono::{NaiveDateTime, Timelike};
use indexmap::IndexSet;

use crate::error::{Result, TablescopeError};

use super::source::{CellValue, Row, SourceFormat};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Lines inspected by delimiter detection.
const DETECTION_LINES: usize = 10;

/// Decode a buffer into rows, choosing a strategy from the filename extension.
///
/// The first line (or first sheet row) is the header. Delimited-text cells are
/// returned as raw text; no numeric or date coercion happens here.
pub fn decode(buffer: &[u8], filename: &str) -> Result<Vec<Row>> {
    decode_as(buffer, SourceFormat::detect(filename)?)
}

/// Decode a buffer with an already selected format.
pub fn decode_as(buffer: &[u8], format: SourceFormat) -> Result<Vec<Row>> {
    let rows = match format {
        SourceFormat::Csv => decode_delimited(buffer, detect_delimiter(buffer))?,
        SourceFormat::Tsv => decode_delimited(buffer, b'\t')?,
        SourceFormat::Spreadsheet => decode_spreadsheet(buffer)?,
    };

    if rows.is_empty() {
        return Err(TablescopeError::EmptyFile(format!(
            "no data rows found in {} input",
            format.label()
        )));
    }

    tracing::debug!(
        format = format.label(),
        rows = rows.len(),
        columns = rows[0].len(),
        "decoded table"
    );

    Ok(rows)
}

/// Decode delimited text with the given delimiter.
fn decode_delimited(bytes: &[u8], delimiter: u8) -> Result<Vec<Row>> {
    let label = if delimiter == b'\t' { "tsv" } else { "csv" };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quote(b'"')
        .flexible(true)
        .from_reader(bytes);

    let mut records = reader
        .records()
        .map(|result| result.map_err(|e| TablescopeError::decode(label, e)))
        .filter(|result| !result.as_ref().is_ok_and(is_blank_line));

    // The first non-blank record names the columns
    let headers = match records.next() {
        Some(record) => unique_headers(record?.iter().map(|s| s.to_string())),
        None => return Ok(Vec::new()),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        let cells = record.iter().map(|field| {
            if field.is_empty() {
                CellValue::Null
            } else {
                CellValue::Text(field.to_string())
            }
        });
        rows.push(build_row(&headers, cells));
    }

    Ok(rows)
}

/// A whitespace-only line reads as a single blank field.
fn is_blank_line(record: &csv::StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(|f| f.trim().is_empty())
}

/// Decode the first sheet of a workbook.
fn decode_spreadsheet(bytes: &[u8]) -> Result<Vec<Row>> {
    let label = SourceFormat::Spreadsheet.label();

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| TablescopeError::decode(label, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TablescopeError::decode(label, "workbook contains no sheets"))?
        .map_err(|e| TablescopeError::decode(label, e))?;

    let mut sheet_rows = range
        .rows()
        .filter(|cells| !cells.iter().all(|c| matches!(c, Data::Empty)));
    let headers = match sheet_rows.next() {
        Some(header_row) => unique_headers(header_row.iter().map(header_text)),
        None => return Ok(Vec::new()),
    };

    let rows = sheet_rows
        .map(|cells| build_row(&headers, cells.iter().map(cell_value)))
        .collect();

    Ok(rows)
}

/// Zip cells onto headers, truncating extra cells and padding missing ones.
fn build_row(headers: &[String], cells: impl Iterator<Item = CellValue>) -> Row {
    let mut cells = cells.fuse();
    headers
        .iter()
        .map(|h| (h.clone(), cells.next().unwrap_or(CellValue::Null)))
        .collect()
}

/// Trim header names, name empty ones by position and suffix duplicates.
fn unique_headers(raw: impl Iterator<Item = String>) -> Vec<String> {
    let raw: Vec<String> = raw.map(|h| h.trim().to_string()).collect();

    let mut seen: IndexSet<String> = IndexSet::with_capacity(raw.len());
    for (i, name) in raw.into_iter().enumerate() {
        let base = if name.is_empty() {
            format!("column_{}", i + 1)
        } else {
            name
        };

        let mut candidate = base.clone();
        let mut suffix = 2;
        while seen.contains(&candidate) {
            candidate = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        seen.insert(candidate);
    }

    seen.into_iter().collect()
}

fn header_text(cell: &Data) -> String {
    match cell_value(cell) {
        CellValue::Text(s) => s,
        CellValue::Number(n) => n.to_string(),
        CellValue::Null => String::new(),
    }
}

/// Convert a spreadsheet cell into a raw value.
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) if s.trim().is_empty() => CellValue::Null,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) => CellValue::Text(format_datetime(dt)),
            None => CellValue::Text(cell.to_string()),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Null,
    }
}

fn format_datetime(dt: NaiveDateTime) -> String {
    if dt.num_seconds_from_midnight() == 0 {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> u8 {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .take(DETECTION_LINES)
        .collect();

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = match counts.first() {
            Some(&c) if c > 0 => c,
            _ => continue,
        };

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            let squares: f64 = counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum();
            squares / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; comma breaks ties
        let score = if consistent {
            first_count * 1000 + usize::from(delim == b',')
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    best_delimiter
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
