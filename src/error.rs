// src/error.rs
// =============================================================================
// Typed errors shared by every module of the scraper.
//
// The application layer (main.rs) still works with anyhow, but everything
// below it returns ScraperError so main can tell the failure kinds apart and
// pick a distinct exit code for each one.
//
// Recoverability:
// - NotFound is swallowed by the crawler (page skipped, crawl continues)
// - everything else propagates up to main
// =============================================================================

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ScraperError>;

#[derive(Debug, Error)]
pub enum ScraperError {
    /// An out-of-range bound or otherwise unusable argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested page does not exist on the wiki.
    #[error("article not found for phrase: {0}")]
    NotFound(String),

    /// Transport or server failure (anything that is not a 404).
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The word-count file exists but is not a JSON object.
    #[error("word-count store {path} is corrupt: {message}")]
    CorruptStore { path: String, message: String },

    /// Analysis requested before any words were counted.
    #[error("word-count store is empty; run count-words or auto-count-words first")]
    EmptyStore,

    /// Sort mode other than "article" or "language".
    #[error("unknown mode: {0} (expected \"article\" or \"language\")")]
    UnknownMode(String),

    /// The page (or a reference file) did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScraperError {
    /// Process exit code reported to the operator for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScraperError::NotFound(_) => 2,
            ScraperError::Fetch { .. } => 3,
            ScraperError::Parse(_) => 4,
            ScraperError::InvalidArgument(_) | ScraperError::UnknownMode(_) => 5,
            ScraperError::EmptyStore => 6,
            ScraperError::CorruptStore { .. } => 7,
            ScraperError::Io(_) => 8,
        }
    }
}
