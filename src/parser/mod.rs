// src/parser/mod.rs
// =============================================================================
// This module pulls the pieces we need out of a MediaWiki article page.
//
// Submodules:
// - article: prose text, first paragraph, outbound article titles
// - table: the N-th table as rows of cell text
//
// Everything here is a pure function of the HTML string - no I/O.
// =============================================================================

mod article;
mod table;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScraperError};

pub use article::{
    article_title_from_href, extract_first_paragraph, extract_main_text, extract_outbound_titles,
    is_namespaced_title, is_summary_paragraph,
};
pub use table::{extract_nth_table, TableData};

/// MediaWiki renders the article body inside this element.
const CONTENT_SELECTOR: &str = "#mw-content-text";

// Parses a CSS selector, turning a bad selector into a Parse error instead of
// a panic
fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScraperError::Parse(format!("bad selector '{}': {}", css, e)))
}

// Returns the article content container, if the page has one
fn content_container(document: &Html) -> Result<Option<ElementRef<'_>>> {
    let content = selector(CONTENT_SELECTOR)?;
    Ok(document.select(&content).next())
}

// Collects an element's text the way a reader sees it: trimmed pieces joined
// by single spaces
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_text_joins_pieces() {
        let html = Html::parse_fragment("<p>Pikachu <b>is</b>\n  an <i>Electric</i>-type</p>");
        let p = html.select(&selector("p").unwrap()).next().unwrap();
        assert_eq!(element_text(p), "Pikachu is an Electric -type");
    }

    #[test]
    fn test_missing_container() {
        let document = Html::parse_document("<html><body><p>no wiki here</p></body></html>");
        assert!(content_container(&document).unwrap().is_none());
    }
}
