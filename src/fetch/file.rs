// src/fetch/file.rs
// =============================================================================
// Offline page source backed by a saved HTML file (--html-file).
//
// The file stands in for exactly one article: the title the user asked for.
// Any other title (for example a link followed by the crawler) is reported
// as NotFound, so an offline crawl simply stops after the start page.
// =============================================================================

use std::path::PathBuf;

use async_trait::async_trait;

use super::{canonical_title, FetchResult, PageSource};
use crate::error::{Result, ScraperError};

#[derive(Debug, Clone)]
pub struct HtmlFileSource {
    title: String,
    path: PathBuf,
}

impl HtmlFileSource {
    pub fn new(title: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            title: canonical_title(title),
            path: path.into(),
        }
    }
}

#[async_trait]
impl PageSource for HtmlFileSource {
    async fn fetch_document(&self, title: &str) -> Result<FetchResult> {
        if canonical_title(title) != self.title {
            return Err(ScraperError::NotFound(title.to_string()));
        }

        let bytes = tokio::fs::read(&self.path).await?;
        // Saved pages are not always clean UTF-8; keep going like a browser would
        let html = String::from_utf8_lossy(&bytes).into_owned();

        Ok(FetchResult {
            final_url: format!("file://{}", self.path.display()),
            html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_serves_the_requested_title() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "<p>hello</p>").unwrap();

        let source = HtmlFileSource::new("Pikachu", file.path());
        let result = source.fetch_document("Pikachu").await.unwrap();
        assert_eq!(result.html, "<p>hello</p>");
        assert!(result.final_url.starts_with("file://"));
    }

    #[tokio::test]
    async fn test_other_titles_are_not_found() {
        let file = NamedTempFile::new().unwrap();
        let source = HtmlFileSource::new("Pikachu", file.path());
        let err = source.fetch_document("Raichu").await.unwrap_err();
        assert!(matches!(err, ScraperError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = HtmlFileSource::new("Pikachu", "/definitely/not/here.html");
        let err = source.fetch_document("Pikachu").await.unwrap_err();
        assert!(matches!(err, ScraperError::Io(_)));
    }
}
