// src/lib.rs
// =============================================================================
// wiki_scraper: crawl a wiki, count the words, compare with the language.
//
// Modules:
// - words: tokenizer + persistent word-count store
// - crawl: single-page pipeline and the breadth-first crawler
// - analysis: relative word-frequency ranking against a language reference
// - fetch: page sources (HTTP, saved HTML file)
// - parser: text, links and tables out of MediaWiki HTML
// - table: table processing and CSV export
// - config / error: shared settings and typed errors
//
// The binary (src/main.rs) only parses arguments, wires these together and
// prints results.
// =============================================================================

pub mod analysis;
pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod parser;
pub mod table;
pub mod words;

pub use error::{Result, ScraperError};
