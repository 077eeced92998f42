// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Layout:
//   wiki-scraper [GLOBAL FLAGS] <COMMAND> [ARGS]
//
// Global flags (base URL, timeout, counts file, verbosity) feed the Config
// shared by every command.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use wiki_scraper::analysis::DEFAULT_TOP_N;
use wiki_scraper::config::{Config, DEFAULT_BASE_URL, DEFAULT_COUNTS_FILE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "wiki-scraper",
    version,
    about = "Scrape wiki articles: summaries, tables and cumulative word counts",
    long_about = "wiki-scraper fetches MediaWiki articles (Bulbapedia by default), prints summaries, \
                  extracts tables, and crawls linked articles to build a persistent word-count file \
                  that can be compared against general language frequencies."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL articles are resolved against (title is appended)
    #[arg(long, global = true, env = "WIKI_SCRAPER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Word-count file updated by count-words / auto-count-words
    #[arg(long, global = true, env = "WIKI_SCRAPER_COUNTS", default_value = DEFAULT_COUNTS_FILE)]
    pub counts_file: PathBuf,

    /// Show debug logs (RUST_LOG overrides this)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Runtime settings built from the global flags.
    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            counts_path: self.counts_file.clone(),
        }
    }
}

// Each variant is one subcommand; its fields are that command's arguments
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the first paragraph of an article
    ///
    /// Example: wiki-scraper summary "Pikachu"
    Summary {
        /// Search phrase used to find the article (quotes recommended)
        search_phrase: String,

        /// Read the article from a saved HTML file instead of the network
        #[arg(long)]
        html_file: Option<PathBuf>,
    },

    /// Extract the N-th table of an article, save it as CSV and count its values
    ///
    /// Example: wiki-scraper table "Type" 2 --first-row-is-header
    Table {
        search_phrase: String,

        /// Which table to extract (1 = first)
        number: usize,

        /// Treat the first row of the table as column headers
        #[arg(long)]
        first_row_is_header: bool,

        #[arg(long)]
        html_file: Option<PathBuf>,

        /// Output value counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count the words of one article into the word-count file
    ///
    /// Example: wiki-scraper count-words "Pikachu"
    CountWords {
        search_phrase: String,

        #[arg(long)]
        html_file: Option<PathBuf>,
    },

    /// Compare accumulated word counts with general language frequency
    ///
    /// Example: wiki-scraper analyze --mode language --n 30
    #[command(name = "analyze", alias = "analyze-relative-word-frequency")]
    Analyze {
        /// Sort by "article" or "language" frequency
        #[arg(long, default_value = "article")]
        mode: String,

        /// Number of top words to show
        #[arg(long, default_value_t = 20)]
        n: usize,

        /// JSON file mapping word -> language frequency score
        #[arg(long, default_value = "language-reference.json")]
        language_file: PathBuf,

        /// How many of the most common language words to keep from the reference
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        vocabulary: usize,

        #[arg(long)]
        json: bool,
    },

    /// Crawl linked articles breadth-first, counting words on every page
    ///
    /// Example: wiki-scraper auto-count-words "Pikachu" 1 --wait 0.5 --max-pages 50
    ///
    /// Depth 0 = just the starting article
    /// Depth 1 = starting article + the articles it links to
    AutoCountWords {
        search_phrase: String,

        /// Maximum link depth from the starting article
        depth: usize,

        /// Delay between requests, in seconds
        #[arg(long, default_value_t = 0.0)]
        wait: f64,

        /// Maximum number of pages to visit
        #[arg(long, default_value_t = 200)]
        max_pages: usize,

        #[arg(long)]
        html_file: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
}
