// src/table/export.rs
// =============================================================================
// Writes a processed table to CSV and picks a safe file name for it.
//
// CSV layout: a "row" column with the row headers, then one column per data
// column, so the row labels survive the export.
// =============================================================================

use std::path::Path;

use crate::error::{Result, ScraperError};

use super::ProcessedTable;

/// Writes `table` as CSV to `path`.
pub fn write_table_csv(path: &Path, table: &ProcessedTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;

    let mut header = vec!["row".to_string()];
    header.extend(table.columns.iter().cloned());
    writer.write_record(&header).map_err(csv_error)?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(row.cells.len() + 1);
        record.push(row.header.as_str());
        record.extend(row.cells.iter().map(String::as_str));
        writer.write_record(&record).map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

/// Turns a search phrase into a file name stem.
///
/// Example:
///   "Type chart (Gen VI+)" -> "Type_chart_Gen_VI"
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        "output".to_string()
    } else {
        cleaned
    }
}

fn csv_error(e: csv::Error) -> ScraperError {
    ScraperError::Io(e.into())
}
