// src/table/processing.rs
// =============================================================================
// This module turns raw table rows into a labelled grid plus value counts.
//
// Layout assumptions (MediaWiki data tables, e.g. the type chart):
// - the first column holds row headers
// - optionally, the first row holds column headers
// - everything else is data
//
// The value counts only look at data cells: row headers, column headers and
// blank cells are never counted.
// =============================================================================

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Result, ScraperError};

/// One data row: its header (first column) and the remaining cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub header: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedTable {
    /// Names of the data columns (row-header column excluded).
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
    /// Sorted by count descending, then value ascending.
    pub value_counts: Vec<ValueCount>,
}

/// Builds a ProcessedTable from extracted rows.
pub fn process_table(rows: &[Vec<String>], first_row_is_header: bool) -> Result<ProcessedTable> {
    let padded = pad_rows(rows);

    let (header_row, body) = match padded.split_first() {
        Some((first, rest)) if first_row_is_header => (Some(first), rest),
        _ => (None, padded.as_slice()),
    };

    if body.is_empty() {
        return Err(ScraperError::Parse(
            "table has no data rows after removing header row".to_string(),
        ));
    }

    let data_width = body.first().map_or(0, |row| row.len().saturating_sub(1));
    let columns = column_names(header_row, data_width);

    let table_rows: Vec<TableRow> = body
        .iter()
        .map(|row| {
            let mut cells = row.clone();
            let header = if cells.is_empty() { String::new() } else { cells.remove(0) };
            TableRow { header, cells }
        })
        .collect();

    let value_counts = count_values(&table_rows);

    Ok(ProcessedTable {
        columns,
        rows: table_rows,
        value_counts,
    })
}

/// True for cells that carry no value (empty or whitespace only).
pub fn is_blank_cell(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// Default name for the `index`-th (0-based) data column.
pub fn default_column_name(index: usize) -> String {
    format!("col_{}", index + 1)
}

// Pads every row with empty cells up to the widest row
fn pad_rows(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    rows.iter()
        .map(|row| {
            let mut padded = row.clone();
            padded.resize(width, String::new());
            padded
        })
        .collect()
}

// Column headers come from the header row (skipping its row-header cell);
// missing or blank ones fall back to col_<i>
fn column_names(header_row: Option<&Vec<String>>, data_width: usize) -> Vec<String> {
    let from_header: Vec<String> = header_row
        .map(|row| row.iter().skip(1).take(data_width).cloned().collect())
        .unwrap_or_default();

    (0..data_width)
        .map(|i| match from_header.get(i) {
            Some(name) if !is_blank_cell(name) => name.clone(),
            _ => default_column_name(i),
        })
        .collect()
}

fn count_values(rows: &[TableRow]) -> Vec<ValueCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for cell in rows.iter().flat_map(|row| row.cells.iter()) {
        if !is_blank_cell(cell) {
            *counts.entry(cell.as_str()).or_insert(0) += 1;
        }
    }

    let mut value_counts: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect();
    value_counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    value_counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_type_chart_counts() {
        let raw = rows(&[
            &["Attacking", "Normal", "Fire", "Water"],
            &["Normal", "1×", "1×", "1×"],
            &["Fire", "1×", "½×", "½×"],
            &["Water", "1×", "2×", "½×"],
            &["Ghost", "0×", "1×", "1×"],
        ]);
        let table = process_table(&raw, true).unwrap();

        assert_eq!(table.columns, vec!["Normal", "Fire", "Water"]);
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[1].header, "Fire");

        let counts: HashMap<_, _> = table
            .value_counts
            .iter()
            .map(|vc| (vc.value.as_str(), vc.count))
            .collect();
        assert_eq!(counts["1×"], 7);
        assert_eq!(counts["½×"], 3);
        assert_eq!(counts["2×"], 1);
        assert_eq!(counts["0×"], 1);
        // headers never counted
        assert!(!counts.contains_key("Attacking"));
        assert!(!counts.contains_key("Ghost"));
        assert_eq!(table.value_counts[0].value, "1×");
    }

    #[test]
    fn test_without_header_row_uses_default_names() {
        let raw = rows(&[&["a", "x", "y"], &["b", "x"]]);
        let table = process_table(&raw, false).unwrap();

        assert_eq!(table.columns, vec!["col_1", "col_2"]);
        // short row padded with a blank cell, which is not counted
        assert_eq!(table.rows[1].cells, vec!["x", ""]);
        assert_eq!(
            table.value_counts,
            vec![
                ValueCount { value: "x".into(), count: 2 },
                ValueCount { value: "y".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_short_header_row_is_padded() {
        let raw = rows(&[&["", "Only"], &["r", "1", "2", "3"]]);
        let table = process_table(&raw, true).unwrap();
        assert_eq!(table.columns, vec!["Only", "col_2", "col_3"]);
    }

    #[test]
    fn test_header_only_table_is_an_error() {
        let raw = rows(&[&["h1", "h2"]]);
        assert!(matches!(process_table(&raw, true), Err(ScraperError::Parse(_))));
    }

    #[test]
    fn test_is_blank_cell() {
        assert!(is_blank_cell(""));
        assert!(is_blank_cell("  \t"));
        assert!(!is_blank_cell("—"));
    }
}
