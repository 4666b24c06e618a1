use sobs_core::{Granularity, Location, Network, YearMonth};

use super::*;

fn row(brand: &str, period: &str, volume: u64, share: f64, color: &str) -> ResultRow {
    ResultRow {
        brand: brand.to_string(),
        period: period.to_string(),
        volume,
        share,
        color: color.to_string(),
    }
}

fn sample_rows() -> Vec<ResultRow> {
    vec![
        row("Acme", "2024-01", 100, 25.0, "#1f77b4"),
        row("Globex", "2024-01", 300, 75.0, "#ff7f0e"),
        row("Globex", "2024-02", 50, 100.0, "#ff7f0e"),
    ]
}

fn brands() -> Vec<Brand> {
    vec![
        Brand::new("Acme", &["acme"], true, "#1f77b4"),
        Brand::new("Globex", &["globex"], false, "#ff7f0e"),
    ]
}

fn settings() -> Settings {
    Settings {
        location: Location::Named("Czech Republic".to_string()),
        network: Network::GoogleSearch,
        date_from: "2024-01".parse::<YearMonth>().unwrap(),
        date_to: "2024-02".parse::<YearMonth>().unwrap(),
        granularity: Granularity::Monthly,
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
}

fn rendered(format: OutputFormat) -> String {
    let brands = brands();
    let settings = settings();
    let context = ReportContext {
        brands: &brands,
        settings: &settings,
        generated: today(),
    };
    render(format, &sample_rows(), &context).unwrap()
}

#[test]
fn csv_has_export_columns_and_one_decimal_share() {
    assert_eq!(
        rendered(OutputFormat::Csv),
        "brand,period,volume,share,color\n\
         Acme,2024-01,100,25.0,#1f77b4\n\
         Globex,2024-01,300,75.0,#ff7f0e\n\
         Globex,2024-02,50,100.0,#ff7f0e\n"
    );
}

#[test]
fn csv_quotes_brand_names_with_commas() {
    let rows = vec![row("Acme, Inc.", "2024-01", 1, 100.0, "#1f77b4")];
    let out = render_csv(&rows).unwrap();
    assert!(out.contains("\"Acme, Inc.\",2024-01,1,100.0,#1f77b4"));
}

#[test]
fn json_is_array_of_rows() {
    let out = rendered(OutputFormat::Json);
    let parsed: Vec<ResultRow> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, sample_rows());
    assert!(out.ends_with('\n'));
}

#[test]
fn table_has_header_and_line_per_row() {
    let out = rendered(OutputFormat::Table);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("PERIOD"));
    assert!(lines[1].starts_with("2024-01   Acme"));
    assert!(lines[1].ends_with("25.0%"));
}

#[test]
fn table_brand_column_fits_long_names() {
    let rows = vec![
        row("Acme", "2024-01", 100, 25.0, "#1f77b4"),
        row("Very Long Brand Name Corporation Ltd", "2024-01", 300, 75.0, "#ff7f0e"),
    ];
    let out = render_table(&rows);
    let lines: Vec<&str> = out.lines().collect();
    let volume_end = lines[0].find("VOLUME").unwrap() + "VOLUME".len();
    for line in &lines[1..] {
        assert_eq!(line.chars().count(), lines[0].chars().count(), "{out}");
        assert!(line[..volume_end].ends_with(char::is_numeric), "{out}");
    }
}

#[test]
fn pivot_has_one_line_per_period_in_brand_order() {
    let out = rendered(OutputFormat::Pivot);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);

    let header: Vec<&str> = lines[0].split_whitespace().collect();
    assert_eq!(
        header,
        vec!["period", "volume_Acme", "volume_Globex", "share_Acme", "share_Globex"]
    );
    let feb: Vec<&str> = lines[2].split_whitespace().collect();
    assert_eq!(feb, vec!["2024-02", "-", "50", "-", "100.0"]);
}

#[test]
fn markdown_summarises_settings() {
    let out = rendered(OutputFormat::Markdown);
    assert!(out.starts_with("# Share of Search Report\n"));
    assert!(out.contains("**Generated**: 2025-03-09"));
    assert!(out.contains("**Range**: 2024-01 to 2024-02 (monthly)"));
    assert!(out.contains("**Location**: Czech Republic"));
    assert!(out.contains("**Network**: GOOGLE_SEARCH"));
    assert!(out.contains("| 2024-01 | Globex | 300 | 75.0% |"));
}

#[test]
fn output_into_directory_uses_dated_name() {
    let dir = std::env::temp_dir();
    let path = resolve_output_path(&dir, OutputFormat::Csv, today());
    assert_eq!(path, dir.join("share_of_search_data_20250309.csv"));
}

#[test]
fn output_file_path_is_kept() {
    let path = Path::new("/nonexistent/report.json");
    assert_eq!(
        resolve_output_path(path, OutputFormat::Json, today()),
        PathBuf::from("/nonexistent/report.json")
    );
}
