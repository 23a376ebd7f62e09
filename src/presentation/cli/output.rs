//! Text and JSON rendering for CLI output

use crate::application::dto::{RecoveryResult, ScanReport};
use crate::domain::services::SignatureCatalog;
use crate::utils::format::human_readable_size;

const MATCH_HEADERS: [&str; 5] = ["ID", "Offset", "Type", "Size", "Description"];

/// Renders rows as a left-aligned table with a `-+-` divider
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(format_row(&cells, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Human-readable scan output
pub fn render_scan(report: &ScanReport<'_>) -> String {
    if report.is_empty() {
        return "No signatures discovered.".to_string();
    }

    let rows: Vec<Vec<String>> = report
        .matches
        .iter()
        .map(|m| m.to_row().cells().map(str::to_string).to_vec())
        .collect();

    format!(
        "Found {} potential files in {} (size {})\n{}",
        report.total_matches(),
        report.source_path.display(),
        human_readable_size(report.image_size),
        format_table(&MATCH_HEADERS, &rows)
    )
}

/// Pretty-printed JSON array of match records
pub fn render_scan_json(report: &ScanReport<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&report.records())
}

/// Human-readable recovery output
pub fn render_recovery(result: &RecoveryResult) -> String {
    if result.written.is_empty() {
        return "No files written. Check your filters or ensure the image contains known signatures."
            .to_string();
    }

    let mut out = format!(
        "Recovered {} file(s) into {}",
        result.files_recovered(),
        result.output_dir.display()
    );
    for file in &result.written {
        out.push_str(&format!("\n - {}", file.file_name()));
    }
    out
}

/// Table of the catalog's signatures
pub fn render_signatures(catalog: &SignatureCatalog) -> String {
    let rows: Vec<Vec<String>> = catalog
        .iter()
        .map(|s| {
            vec![
                s.extension().to_string(),
                s.name().to_string(),
                hex::encode_upper(s.header()),
                s.footer().map(hex::encode_upper).unwrap_or_else(|| "-".to_string()),
                human_readable_size(s.max_size()),
            ]
        })
        .collect();

    format_table(&["Ext", "Type", "Header", "Footer", "Max size"], &rows)
}
