// src/output.rs
// =============================================================================
// Prints command results to stdout, either as a human-readable table or as
// JSON (--json). Diagnostics go through tracing on stderr, so stdout only
// ever carries results.
// =============================================================================

use anyhow::Result;
use serde::Serialize;

use wiki_scraper::analysis::{RelativeFrequencyRow, SortMode};
use wiki_scraper::crawl::CrawlStats;
use wiki_scraper::table::ProcessedTable;

/// Prints any serializable result as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value)?;
    println!("{}", json_output);
    Ok(())
}

pub fn print_summary(paragraph: &str, final_url: &str) {
    println!("{}", paragraph);
    println!();
    println!("Source: Bulbapedia (content may be under CC BY-NC-SA).");
    println!("URL: {}", final_url);
}

/// Prints the value counts of a processed table.
pub fn print_value_counts(table: &ProcessedTable, json: bool) -> Result<()> {
    if json {
        return print_json(&table.value_counts);
    }

    println!("{:<30} {:>8}", "VALUE", "COUNT");
    println!("{}", "=".repeat(39));
    for entry in &table.value_counts {
        println!("{:<30} {:>8}", truncate(&entry.value, 30), entry.count);
    }
    Ok(())
}

/// Prints the relative frequency comparison.
pub fn print_relative_rows(rows: &[RelativeFrequencyRow], mode: SortMode, json: bool) -> Result<()> {
    if json {
        return print_json(rows);
    }

    println!("📊 Sorted by {} frequency", mode);
    println!("{:<25} {:>10} {:>10}", "WORD", "ARTICLE", "LANGUAGE");
    println!("{}", "=".repeat(47));
    for row in rows {
        let language = row
            .language_frequency
            .map(|score| format!("{:.2}", score))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<25} {:>10} {:>10}",
            truncate(&row.word, 25),
            row.article_frequency,
            language
        );
    }
    Ok(())
}

pub fn print_crawl_stats(stats: &CrawlStats, json: bool) -> Result<()> {
    if json {
        return print_json(stats);
    }

    println!("📊 Summary:");
    println!("   📄 Pages visited: {}", stats.pages_visited);
    println!("   🔗 Unique titles: {}", stats.unique_pages);
    println!("   🔤 Tokens added: {}", stats.tokens_added);
    Ok(())
}

// Shortens long cells so the columns stay aligned
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
