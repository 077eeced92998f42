// src/crawl/queue.rs
// =============================================================================
// This module implements the word-counting crawl with a breadth-first approach.
//
// How it works:
// 1. Start with the initial title in a queue at depth 0
// 2. Pop a title; skip it if we've already seen it this run
// 3. Mark it visited (even if the fetch turns out to be a 404)
// 4. Wait politely (never before the first page)
// 5. Fetch the page, count its words into word-counts.json
// 6. Queue its links at depth + 1, unless we're at max depth
// 7. Repeat until the queue is empty or the page budget is spent
//
// Failure policy:
// - 404 (NotFound): log, skip, keep crawling - it doesn't count as a page
// - anything else: stop the whole crawl and return the error
//
// Every page is merged into the store as soon as it's processed, so an
// interrupted crawl keeps everything it finished.
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::pipeline::count_page_words;
use crate::error::{Result, ScraperError};
use crate::fetch::{canonical_title, PageSource};
use crate::words::Tokenizer;

/// Bounds for one crawl run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOptions {
    /// 0 = only the start page.
    pub max_depth: usize,
    /// Pause between consecutive fetches.
    pub wait: Duration,
    /// Stop after this many successfully fetched pages (must be >= 1).
    pub max_pages: usize,
}

/// Counters reported at the end of a crawl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CrawlStats {
    /// Pages fetched and counted.
    pub pages_visited: usize,
    /// Distinct titles taken off the queue, 404s included.
    pub unique_pages: usize,
    pub tokens_added: usize,
}

// Represents a page in the crawl queue
#[derive(Debug, Clone)]
struct CrawlItem {
    title: String,
    depth: usize, // How many links away from the start page
}

/// Crawls a wiki through any PageSource, counting words as it goes.
pub struct WikiCrawler<'a, S: PageSource + ?Sized> {
    source: &'a S,
    tokenizer: Tokenizer,
}

impl<'a, S: PageSource + ?Sized> WikiCrawler<'a, S> {
    pub fn new(source: &'a S) -> Result<Self> {
        Ok(Self {
            source,
            tokenizer: Tokenizer::new()?,
        })
    }

    /// Runs one breadth-first crawl from `start_title`.
    ///
    /// The queue and the visited set live only for this call.
    pub async fn auto_count_words(
        &self,
        start_title: &str,
        options: &CrawlOptions,
        store_path: &Path,
    ) -> Result<CrawlStats> {
        if options.max_pages < 1 {
            return Err(ScraperError::InvalidArgument("--max-pages must be >= 1".to_string()));
        }

        // Queue of pages to crawl. Duplicates are allowed here; the visited
        // check when popping is the one that counts.
        let mut queue = VecDeque::new();
        queue.push_back(CrawlItem {
            title: canonical_title(start_title),
            depth: 0,
        });

        let mut visited: HashSet<String> = HashSet::new();
        let mut stats = CrawlStats::default();

        while stats.pages_visited < options.max_pages {
            let Some(item) = queue.pop_front() else {
                break;
            };

            // Skip if already visited
            if !visited.insert(item.title.clone()) {
                continue;
            }

            if should_wait(stats.pages_visited, options.wait) {
                tokio::time::sleep(options.wait).await;
            }

            let page = match count_page_words(self.source, &self.tokenizer, &item.title, store_path).await {
                Ok(page) => page,
                Err(ScraperError::NotFound(_)) => {
                    warn!(title = %item.title, "[skip] 404");
                    continue;
                }
                Err(e) => return Err(e),
            };

            stats.pages_visited += 1;
            stats.tokens_added += page.tokens_added;

            info!(
                "[{}] depth={} title={} tokens={}",
                stats.pages_visited, item.depth, item.title, page.tokens_added
            );

            if item.depth >= options.max_depth {
                continue;
            }

            let mut queued = 0;
            for link in page.links {
                // Only add if not visited
                if !visited.contains(&link) {
                    queue.push_back(CrawlItem {
                        title: link,
                        depth: item.depth + 1,
                    });
                    queued += 1;
                }
            }
            debug!(title = %item.title, queued, frontier = queue.len(), "queued links");
        }

        stats.unique_pages = visited.len();
        Ok(stats)
    }
}

/// True when we must pause before the next fetch: some page has already been
/// fetched this run and a delay is configured.
pub fn should_wait(pages_visited: usize, wait: Duration) -> bool {
    pages_visited > 0 && !wait.is_zero()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the visited check done when popping, not only when pushing?
//    - Two pages at the same depth can both link to "C" before C is visited
//    - Both copies land in the queue; the pop-time check drops the second one
//    - The push-time check just keeps the queue from growing needlessly
//
// 2. What is `let ... else`?
//    - let Some(item) = queue.pop_front() else { break; };
//    - Binds `item` if the pattern matches, otherwise runs the else block
//      (which must leave the loop or function)
//
// 3. Why is WikiCrawler generic over S: PageSource + ?Sized?
//    - S can be a concrete type (PageFetcher, a test double) or a trait
//      object (dyn PageSource) chosen at runtime in main.rs
//    - ?Sized is what allows the trait-object case
//
// 4. What does HashSet::insert return?
//    - true if the value was new, false if it was already there
//    - So `!visited.insert(x)` means "we've seen x before"
// -----------------------------------------------------------------------------
