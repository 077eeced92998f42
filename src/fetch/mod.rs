// src/fetch/mod.rs
// =============================================================================
// This module gets raw page HTML for a wiki title.
//
// Submodules:
// - http: fetches articles from the live wiki with reqwest
// - file: serves a saved HTML file (offline mode, --html-file)
//
// Both implement the PageSource trait, which is all the crawler and the
// commands depend on. Tests plug in their own in-memory PageSource.
// =============================================================================

mod file;
mod http;

use async_trait::async_trait;

use crate::error::Result;

pub use file::HtmlFileSource;
pub use http::PageFetcher;

/// A fetched page: where we ended up (after redirects) and its HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub final_url: String,
    pub html: String,
}

/// Anything that can turn a page title into HTML.
///
/// Contract:
/// - `Err(ScraperError::NotFound)` when the page does not exist
/// - any other error means the source itself is failing
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_document(&self, title: &str) -> Result<FetchResult>;
}

/// Canonical form of a page title: trimmed, whitespace runs become "_".
///
/// Titles are otherwise case-sensitive and compared as plain strings.
///
/// Example:
///   "  Pikachu   (Pokémon) " -> "Pikachu_(Pokémon)"
pub fn canonical_title(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join("_")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_title_collapses_whitespace() {
        assert_eq!(canonical_title("  Pikachu   (Pokémon) "), "Pikachu_(Pokémon)");
        assert_eq!(canonical_title("Type\tchart"), "Type_chart");
    }

    #[test]
    fn test_canonical_title_is_case_sensitive() {
        assert_ne!(canonical_title("pikachu"), canonical_title("Pikachu"));
    }

    #[test]
    fn test_canonical_title_keeps_existing_underscores() {
        assert_eq!(canonical_title("Ash_Ketchum"), "Ash_Ketchum");
    }
}
