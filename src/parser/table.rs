// src/parser/table.rs
// =============================================================================
// This module pulls one table out of an article as plain rows of text.
//
// Only tables inside the article content count, numbered from 1 in document
// order (nested tables included, the way a CSS selector finds them).
// Rows without any th/td cells (spacer rows) are skipped.
// =============================================================================

use scraper::Html;

use super::{element_text, selector};
use crate::error::{Result, ScraperError};

/// Raw table contents: one Vec of cell texts per row. Rows may differ in width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub rows: Vec<Vec<String>>,
}

/// Extracts the `n`-th (1-based) table of the article.
pub fn extract_nth_table(html: &str, n: usize) -> Result<TableData> {
    if n < 1 {
        return Err(ScraperError::InvalidArgument("table number must be >= 1".to_string()));
    }

    let document = Html::parse_document(html);
    let tables = selector("#mw-content-text table")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("th, td")?;

    let found: Vec<_> = document.select(&tables).collect();
    let table = found.get(n - 1).ok_or_else(|| {
        ScraperError::Parse(format!(
            "requested table {}, but only {} tables found",
            n,
            found.len()
        ))
    })?;

    let rows: Vec<Vec<String>> = table
        .select(&row_selector)
        .map(|tr| tr.select(&cell_selector).map(element_text).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect();

    if rows.is_empty() {
        return Err(ScraperError::Parse("extracted table is empty".to_string()));
    }

    Ok(TableData { rows })
}
