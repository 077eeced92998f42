// src/crawl/pipeline.rs
// =============================================================================
// The single-page word counting pipeline:
//
//   fetch -> extract prose -> tokenize -> merge into word-counts.json
//
// `count-words` runs it once; the crawler runs it for every page it visits.
// The merge is load + merge + save in one step, so once this returns Ok the
// page's words are on disk.
// =============================================================================

use std::path::Path;

use crate::error::Result;
use crate::fetch::PageSource;
use crate::parser::{extract_main_text, extract_outbound_titles};
use crate::words::{update_counts_file, Tokenizer};

/// What one processed page contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWords {
    pub final_url: String,
    pub tokens_added: usize,
    /// Article titles linked from the page, in first-seen order.
    pub links: Vec<String>,
}

/// Fetches `title`, counts its words into `store_path` and returns its links.
///
/// Errors from the source are passed through untouched (including NotFound),
/// so the caller decides which ones are fatal.
pub async fn count_page_words<S>(
    source: &S,
    tokenizer: &Tokenizer,
    title: &str,
    store_path: &Path,
) -> Result<PageWords>
where
    S: PageSource + ?Sized,
{
    let page = source.fetch_document(title).await?;

    let text = extract_main_text(&page.html)?;
    let tokens = tokenizer.tokenize(&text);
    update_counts_file(store_path, &tokens)?;

    let links = extract_outbound_titles(&page.html)?;

    Ok(PageWords {
        final_url: page.final_url,
        tokens_added: tokens.len(),
        links,
    })
}
