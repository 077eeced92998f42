// src/config.rs
// =============================================================================
// Runtime settings shared by the fetcher and the commands.
//
// Defaults point at Bulbapedia. Every field can be overridden from the
// command line (see cli.rs), and the base URL / counts file also read from
// environment variables through clap's `env` support.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://bulbapedia.bulbagarden.net/wiki/";
pub const DEFAULT_USER_AGENT: &str = "WikiScraper/1.0 (Educational project)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_COUNTS_FILE: &str = "word-counts.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Article URLs are built as `base_url + <title>`.
    pub base_url: String,
    /// Per-request timeout for the HTTP client.
    pub timeout: Duration,
    pub user_agent: String,
    /// Where the cumulative word counts live.
    pub counts_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            counts_path: PathBuf::from(DEFAULT_COUNTS_FILE),
        }
    }
}
