//! Integration tests for Tablescope.

use std::path::Path;

use tablescope::{
    CellValue, ChartType, DataType, Engine, EngineConfig, ErrorKind, Row, YAxis, decode,
    infer_column_type, infer_types, inference::parse_number, recommend, sanitize,
};

/// Helper to build rows from `(column, value)` pairs.
fn rows(records: &[&[(&str, &str)]]) -> Vec<Row> {
    records
        .iter()
        .map(|record| {
            record
                .iter()
                .map(|(k, v)| (k.to_string(), CellValue::from(*v)))
                .collect()
        })
        .collect()
}

/// Helper to build a single-column table.
fn column(name: &str, values: &[&str]) -> Vec<Row> {
    values
        .iter()
        .map(|v| [(name.to_string(), CellValue::from(*v))].into_iter().collect())
        .collect()
}

// =============================================================================
// End-to-end Scenarios
// =============================================================================

#[test]
fn test_time_series_scenario() {
    let rows = rows(&[
        &[("date", "2024-01-01"), ("revenue", "1500")],
        &[("date", "2024-01-02"), ("revenue", "1800")],
    ]);

    let types = infer_types(&rows);
    assert_eq!(types["date"], DataType::Date);
    assert_eq!(types["revenue"], DataType::Number);

    let suggestions = recommend(&rows, &types);
    let first = &suggestions[0];
    assert_eq!(first.chart_type, ChartType::Line);
    assert_eq!(first.title, "Revenue Over Time");
    assert_eq!(first.x_axis.as_deref(), Some("date"));
    assert_eq!(first.y_axis, Some(YAxis::Series(vec!["revenue".to_string()])));

    assert!(suggestions
        .iter()
        .any(|s| s.chart_type == ChartType::MetricCard && s.title == "Total Revenue"));
    assert_eq!(suggestions.last().unwrap().chart_type, ChartType::Table);
}

#[test]
fn test_category_scenario() {
    let rows = rows(&[
        &[("region", "West"), ("sales", "100")],
        &[("region", "East"), ("sales", "200")],
        &[("region", "West"), ("sales", "150")],
    ]);

    let types = infer_types(&rows);
    assert_eq!(types["region"], DataType::String);
    assert_eq!(types["sales"], DataType::Number);

    let suggestions = recommend(&rows, &types);
    assert!(suggestions
        .iter()
        .any(|s| s.chart_type == ChartType::Bar && s.title == "Sales by Region"));
    assert!(suggestions
        .iter()
        .any(|s| s.chart_type == ChartType::Pie && s.title == "Distribution of Sales"));
    assert_eq!(suggestions.last().unwrap().title, "Data Table");
}

#[test]
fn test_engine_end_to_end_csv() {
    let content = "Date,Campaign Name,amount_spent,adImpressions\n\
                   01/15/2024,Spring Promo,\"$1,200.50\",\"12,000\"\n\
                   01/16/2024,Spring Promo,$980.00,\"9,500\"\n\
                   ,,,\n\
                   01/17/2024,Retargeting,\"(42.50)\",\"1,100\"\n";

    let analysis = Engine::new()
        .analyze(content.as_bytes(), "campaigns.CSV")
        .expect("analysis failed");

    let table = &analysis.table;
    assert_eq!(table.row_count, 3);
    assert_eq!(table.rows.len(), table.row_count);
    assert_eq!(table.headers, vec!["Date", "Campaign Name", "amount_spent", "adImpressions"]);
    assert_eq!(table.column_types.len(), table.headers.len());
    assert_eq!(table.column_types["Date"], DataType::Date);
    assert_eq!(table.column_types["Campaign Name"], DataType::String);
    assert_eq!(table.column_types["amount_spent"], DataType::Number);
    assert_eq!(table.column_types["adImpressions"], DataType::Number);

    // Raw values survive untouched
    assert_eq!(table.rows[0]["amount_spent"], CellValue::from("$1,200.50"));

    let titles: Vec<&str> = analysis
        .suggestions
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Amount Spent Over Time",
            "Ad Impressions Over Time",
            "Amount Spent by Campaign Name",
            "Distribution of Amount Spent",
            "Total Amount Spent",
            "Total Ad Impressions",
            "Data Table",
        ]
    );
}

#[test]
fn test_engine_tsv_semicolon_and_hash() {
    let tsv = Engine::new()
        .analyze(b"name\tscore\nA\t1\nB\t2\n", "scores.tsv")
        .unwrap();
    assert_eq!(tsv.table.column_types["score"], DataType::Number);
    assert!(tsv.source.hash.starts_with("sha256:"));
    assert_eq!(tsv.source.size_bytes, 19);

    let semicolon = Engine::new()
        .analyze(b"item;price\nTea;3.50\nCake;4.25\n", "menu.csv")
        .unwrap();
    assert_eq!(semicolon.table.headers, vec!["item", "price"]);
    assert_eq!(semicolon.table.column_types["price"], DataType::Number);
}

/// Helper to load a workbook from the shared test data directory.
fn spreadsheet(filename: &str) -> Vec<u8> {
    let path = Path::new("../../test_data/spreadsheets").join(filename);
    std::fs::read(&path).unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e))
}

#[test]
fn test_decode_spreadsheet_first_sheet() {
    let rows = decode(&spreadsheet("campaigns.xlsx"), "campaigns.xlsx").unwrap();

    // Header from the first row; the blank sheet row is skipped and the
    // second sheet is never read
    assert_eq!(rows.len(), 3);
    let keys: Vec<&str> = rows[0].keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["Date", "Campaign", "Spend", "Clicks"]);

    assert_eq!(rows[0]["Date"], CellValue::from("2024-01-15"));
    assert_eq!(rows[0]["Campaign"], CellValue::from("Spring Promo"));
    assert_eq!(rows[0]["Spend"], CellValue::Number(1200.5));
    assert_eq!(rows[0]["Clicks"], CellValue::Number(120.0));

    assert_eq!(rows[1]["Date"], CellValue::from("2024-01-16"));
    assert_eq!(rows[1]["Spend"], CellValue::Number(980.0));
    assert_eq!(rows[1]["Clicks"], CellValue::Null);

    assert_eq!(rows[2]["Spend"], CellValue::Number(42.25));
}

#[test]
fn test_engine_spreadsheet_types() {
    let analysis = Engine::new()
        .analyze(&spreadsheet("campaigns.xlsx"), "campaigns.xlsx")
        .unwrap();

    let table = &analysis.table;
    assert_eq!(table.row_count, 3);
    assert_eq!(table.column_types["Date"], DataType::Date);
    assert_eq!(table.column_types["Campaign"], DataType::String);
    assert_eq!(table.column_types["Spend"], DataType::Number);
    assert_eq!(table.column_types["Clicks"], DataType::Number);
    assert_eq!(analysis.suggestions[0].title, "Spend Over Time");
}

#[test]
fn test_analysis_serializes() {
    let analysis = Engine::new()
        .analyze(b"region,sales\nWest,100\nEast,\n", "s.csv")
        .unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["table"]["rowCount"], 2);
    assert_eq!(json["table"]["columnTypes"]["sales"], "NUMBER");
    assert_eq!(json["table"]["rows"][1]["sales"], serde_json::Value::Null);
    assert_eq!(json["suggestions"][0]["type"], "bar");
    assert_eq!(json["suggestions"][0]["xAxis"], "region");
    assert_eq!(json["source"]["format"], "csv");
}

// =============================================================================
// Type Inference Properties
// =============================================================================

#[test]
fn test_bare_integers_are_numbers() {
    let rows = column("v", &["1", "42", "2025"]);
    assert_eq!(infer_column_type(&rows, "v"), DataType::Number);
}

#[test]
fn test_currency_tolerance() {
    let values = ["$1,200.50", "$980.00", "$1,050.25"];
    assert_eq!(infer_column_type(&column("v", &values), "v"), DataType::Number);
    let parsed: Vec<f64> = values.iter().filter_map(|v| parse_number(v)).collect();
    assert_eq!(parsed, vec![1200.5, 980.0, 1050.25]);

    let values = ["(42.50)", "(10.00)", "5.00"];
    assert_eq!(infer_column_type(&column("v", &values), "v"), DataType::Number);
    let parsed: Vec<f64> = values.iter().filter_map(|v| parse_number(v)).collect();
    assert_eq!(parsed, vec![-42.5, -10.0, 5.0]);
}

#[test]
fn test_date_pattern_set() {
    let iso = column("d", &["2024-01-01", "2024-02-15", "2024-03-20"]);
    assert_eq!(infer_column_type(&iso, "d"), DataType::Date);

    let named = column("d", &["15-Jan-2025", "02-Mar-2025", "10-Dec-2025"]);
    assert_eq!(infer_column_type(&named, "d"), DataType::Date);

    let mixed = column("d", &["2024-01-01", "not-a-date", "also-not"]);
    assert_eq!(infer_column_type(&mixed, "d"), DataType::String);
}

#[test]
fn test_threshold_boundary_dates() {
    let mut values: Vec<String> = (0..85)
        .map(|i| format!("2024-01-{:02}", i % 28 + 1))
        .collect();
    values.extend((0..15).map(|i| format!("pending {}", i)));
    let refs: Vec<&str> = values.iter().map(|s| s.as_str()).collect();
    assert_eq!(infer_column_type(&column("d", &refs), "d"), DataType::Date);

    let mut values: Vec<String> = (0..84)
        .map(|i| format!("2024-01-{:02}", i % 28 + 1))
        .collect();
    values.extend((0..16).map(|i| format!("pending {}", i)));
    let refs: Vec<&str> = values.iter().map(|s| s.as_str()).collect();
    assert_eq!(infer_column_type(&column("d", &refs), "d"), DataType::String);
}

#[test]
fn test_blank_column_is_string() {
    let rows = rows(&[&[("a", "1"), ("b", "")], &[("a", "2"), ("b", "   ")]]);
    let types = infer_types(&rows);
    assert_eq!(types["a"], DataType::Number);
    assert_eq!(types["b"], DataType::String);
}

#[test]
fn test_inference_is_deterministic() {
    let rows = rows(&[
        &[("when", "3/4/2024"), ("amount", "€12"), ("who", "Ana")],
        &[("when", "3/5/2024"), ("amount", "€13"), ("who", "Ben")],
    ]);
    assert_eq!(infer_types(&rows), infer_types(&rows));
    assert_eq!(recommend(&rows, &infer_types(&rows)), recommend(&rows, &infer_types(&rows)));
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn test_error_kinds() {
    assert_eq!(decode(b"a\n1", "data.parquet").unwrap_err().kind(), ErrorKind::UnsupportedFormat);
    assert_eq!(decode(b"", "data.csv").unwrap_err().kind(), ErrorKind::EmptyFile);
    assert_eq!(
        decode(b"PK\x03\x04junk", "data.xlsx").unwrap_err().kind(),
        ErrorKind::DecodeFailure
    );

    let blank = decode(b"a,b\n,\n,\n", "data.csv").unwrap();
    assert_eq!(blank.len(), 2);
    assert_eq!(sanitize(blank).unwrap_err().kind(), ErrorKind::NoValidRows);
}

#[test]
fn test_custom_config() {
    let config: EngineConfig = serde_json::from_str(
        r#"{
            "recommender": {
                "max_metric_cards": 1,
                "color_policy": {"policy": "seeded", "seed": 42}
            }
        }"#,
    )
    .unwrap();
    let engine = Engine::with_config(config);

    let analysis = engine
        .analyze(b"a,b,c\n1,2,3\n4,5,6\n", "n.csv")
        .unwrap();
    let cards = analysis
        .suggestions
        .iter()
        .filter(|s| s.chart_type == ChartType::MetricCard)
        .count();
    assert_eq!(cards, 1);
    assert_eq!(
        analysis.suggestions,
        engine.analyze(b"a,b,c\n1,2,3\n4,5,6\n", "n.csv").unwrap().suggestions
    );
}
