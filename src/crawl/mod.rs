// src/crawl/mod.rs
// =============================================================================
// This module handles crawling the wiki and counting words on the way.
//
// Features:
// - Breadth-first crawling starting from an article title
// - Each title is visited at most once per run
// - Configurable depth limit and page budget
// - Polite crawling with a fixed delay between requests
// - Word counts saved after every page, not at the end
//
// Submodules:
// - pipeline: fetch + count one page
// - queue: the breadth-first crawl itself
// =============================================================================

mod pipeline;
mod queue;

// Re-export the crawling API
pub use pipeline::{count_page_words, PageWords};
pub use queue::{should_wait, CrawlOptions, CrawlStats, WikiCrawler};
