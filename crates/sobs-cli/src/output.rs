//! Report rendering for the `generate` command.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::ValueEnum;
use sobs_core::{Brand, ResultRow, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Aligned columns, one line per brand and period
    Table,
    /// One line per period with volume and share columns per brand
    Pivot,
    Markdown,
    Csv,
    Json,
}

impl OutputFormat {
    pub(crate) fn extension(self) -> &'static str {
        match self {
            OutputFormat::Table | OutputFormat::Pivot => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// What a rendered report describes besides its rows.
pub(crate) struct ReportContext<'a> {
    /// Report brands in configured order.
    pub brands: &'a [Brand],
    pub settings: &'a Settings,
    pub generated: NaiveDate,
}

/// Render `rows` in `format`. Output always ends with a newline.
///
/// # Errors
///
/// Returns an error if CSV or JSON serialization fails.
pub(crate) fn render(
    format: OutputFormat,
    rows: &[ResultRow],
    context: &ReportContext<'_>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Pivot => Ok(render_pivot(rows, context.brands)),
        OutputFormat::Markdown => Ok(render_markdown(rows, context)),
        OutputFormat::Csv => render_csv(rows),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(rows)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// `path` itself, or a dated file name inside it when `path` is a directory.
pub(crate) fn resolve_output_path(path: &Path, format: OutputFormat, today: NaiveDate) -> PathBuf {
    if path.is_dir() {
        path.join(format!(
            "share_of_search_data_{}.{}",
            today.format("%Y%m%d"),
            format.extension()
        ))
    } else {
        path.to_path_buf()
    }
}

fn render_table(rows: &[ResultRow]) -> String {
    let brand_width = rows
        .iter()
        .map(|row| row.brand.chars().count())
        .chain(std::iter::once("BRAND".len()))
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10}{:<brand_width$}{:>12}{:>9}",
        "PERIOD", "BRAND", "VOLUME", "SHARE"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<10}{:<brand_width$}{:>12}{:>8.1}%",
            row.period, row.brand, row.volume, row.share
        );
    }
    out
}

/// Periods in first-seen order; rows arrive ordered by period.
fn periods_in_order(rows: &[ResultRow]) -> Vec<&str> {
    let mut periods: Vec<&str> = Vec::new();
    for row in rows {
        if periods.last() != Some(&row.period.as_str()) {
            periods.push(row.period.as_str());
        }
    }
    periods
}

fn render_pivot(rows: &[ResultRow], brands: &[Brand]) -> String {
    let mut header: Vec<String> = vec!["period".to_string()];
    header.extend(brands.iter().map(|b| format!("volume_{}", b.name)));
    header.extend(brands.iter().map(|b| format!("share_{}", b.name)));

    let mut table: Vec<Vec<String>> = vec![header];
    for period in periods_in_order(rows) {
        let cell = |brand: &Brand| {
            rows.iter()
                .find(|r| r.period == period && r.brand == brand.name)
        };
        let mut line = vec![period.to_string()];
        line.extend(brands.iter().map(|b| {
            cell(b).map_or_else(|| "-".to_string(), |r| r.volume.to_string())
        }));
        line.extend(brands.iter().map(|b| {
            cell(b).map_or_else(|| "-".to_string(), |r| format!("{:.1}", r.share))
        }));
        table.push(line);
    }

    let columns = table[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| table.iter().map(|line| line[c].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for line in &table {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(c, (cell, &width))| {
                if c == 0 {
                    format!("{cell:<width$}")
                } else {
                    format!("{cell:>width$}")
                }
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join("  "));
    }
    out
}

fn render_markdown(rows: &[ResultRow], context: &ReportContext<'_>) -> String {
    let settings = context.settings;
    let mut out = String::new();
    let _ = writeln!(out, "# Share of Search Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Generated**: {}", context.generated.format("%Y-%m-%d"));
    let _ = writeln!(
        out,
        "**Range**: {} to {} ({})",
        settings.date_from, settings.date_to, settings.granularity
    );
    let _ = writeln!(out, "**Location**: {}", settings.location);
    let _ = writeln!(out, "**Network**: {}", settings.network);
    let _ = writeln!(out, "**Brands**: {}", context.brands.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "| Period | Brand | Volume | Share |");
    let _ = writeln!(out, "|--------|-------|-------:|------:|");
    for row in rows {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {:.1}% |",
            row.period, row.brand, row.volume, row.share
        );
    }
    out
}

fn render_csv(rows: &[ResultRow]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["brand", "period", "volume", "share", "color"])?;
    for row in rows {
        let volume = row.volume.to_string();
        let share = format!("{:.1}", row.share);
        writer.write_record([
            row.brand.as_str(),
            row.period.as_str(),
            volume.as_str(),
            share.as_str(),
            row.color.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV output: {e}"))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
