// src/parser/article.rs
// =============================================================================
// This module extracts article prose and article links from wiki HTML.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
//
// Link rules (a link is followed only if every rule passes):
// - href starts with "/wiki/" (same-site article path, no external URLs)
// - the "#fragment" and "?query" parts are dropped
// - the remaining title is not empty
// - the title has no namespace prefix (File:, Category:, Special:, ...)
// Titles are percent-decoded and deduplicated, first occurrence wins.
// =============================================================================

use std::collections::HashSet;

use percent_encoding::percent_decode_str;
use scraper::{Html, Node};

use super::{content_container, element_text, selector};
use crate::error::{Result, ScraperError};
use crate::fetch::canonical_title;

const ARTICLE_PATH_PREFIX: &str = "/wiki/";

/// Paragraphs shorter than this are usually navigation or boilerplate.
const MIN_SUMMARY_CHARS: usize = 40;

/// Elements whose text never counts as article prose.
const NON_PROSE_ELEMENTS: [&str; 3] = ["table", "script", "style"];

/// Returns the first real paragraph of the article.
///
/// Fails with a Parse error when the page has no content container or no
/// paragraph long enough to be a summary.
pub fn extract_first_paragraph(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let content = content_container(&document)?.ok_or_else(|| {
        ScraperError::Parse("could not find main content container (#mw-content-text)".to_string())
    })?;

    let paragraph = selector("p")?;
    content
        .select(&paragraph)
        .map(element_text)
        .find(|text| is_summary_paragraph(text))
        .ok_or_else(|| {
            ScraperError::Parse("could not find a suitable first paragraph in the article".to_string())
        })
}

/// Returns all prose of the article as one string, with tables removed.
///
/// Pages without a MediaWiki content container fall back to the whole
/// document so a crawl never aborts on an unusual page layout.
pub fn extract_main_text(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let root = content_container(&document)?.unwrap_or_else(|| document.root_element());
    let root_id = root.id();

    let pieces: Vec<&str> = root
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                // Skip text that sits under a table/script/style inside the root
                let hidden = node
                    .ancestors()
                    .take_while(|ancestor| ancestor.id() != root_id)
                    .filter_map(|ancestor| ancestor.value().as_element())
                    .any(|element| NON_PROSE_ELEMENTS.contains(&element.name()));
                if hidden {
                    None
                } else {
                    Some(text.trim())
                }
            }
            _ => None,
        })
        .filter(|piece| !piece.is_empty())
        .collect();

    Ok(pieces.join(" "))
}

/// Returns the titles of the articles this page links to.
pub fn extract_outbound_titles(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let root = content_container(&document)?.unwrap_or_else(|| document.root_element());
    let anchors = selector("a[href]")?;

    let mut seen = HashSet::new();
    let mut titles = Vec::new();

    for element in root.select(&anchors) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if let Some(title) = article_title_from_href(href) {
            if seen.insert(title.clone()) {
                titles.push(title);
            }
        }
    }

    Ok(titles)
}

/// Turns "/wiki/Pikachu_(Pok%C3%A9mon)#Biology" into "Pikachu_(Pokémon)".
///
/// Returns None for anything that is not a followable article link.
pub fn article_title_from_href(href: &str) -> Option<String> {
    let raw = href.strip_prefix(ARTICLE_PATH_PREFIX)?;
    let raw = strip_fragment_and_query(raw);

    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let title = canonical_title(&decoded);

    if title.is_empty() || is_namespaced_title(&title) {
        return None;
    }
    Some(title)
}

/// True for titles in a non-article namespace ("File:X.png", "Category:Y").
pub fn is_namespaced_title(title: &str) -> bool {
    title.contains(':')
}

/// True when a paragraph is long enough to serve as the article summary.
pub fn is_summary_paragraph(text: &str) -> bool {
    text.chars().count() >= MIN_SUMMARY_CHARS
}

fn strip_fragment_and_query(raw: &str) -> &str {
    let end = raw.find(['#', '?']).unwrap_or(raw.len());
    &raw[..end]
}
