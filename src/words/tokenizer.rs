// src/words/tokenizer.rs
// =============================================================================
// This module turns extracted article text into word tokens.
//
// How it works:
// 1. Normalize the text to NFC (composed) form so "é" typed two ways
//    becomes the same token
// 2. Find runs of letters, optionally with one interior apostrophe
//    ("pikachu's" stays one token, "Electric-type" becomes two)
// 3. Lower-case every match
// 4. Drop matches shorter than MIN_TOKEN_CHARS (stray "s", "a", "I")
//
// Tokens come back in order of appearance and are NOT deduplicated -
// the word-count store needs every occurrence.
// =============================================================================

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, ScraperError};

/// Letters, optionally followed by an apostrophe and more letters.
const WORD_PATTERN: &str = r"\p{L}+(?:'\p{L}+)?";

/// Shortest token we keep, counted in characters (not bytes).
pub const MIN_TOKEN_CHARS: usize = 2;

/// Compiled word matcher. Build it once and reuse it for every page.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word_re: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        let word_re = Regex::new(WORD_PATTERN)
            .map_err(|e| ScraperError::Parse(format!("bad word pattern: {}", e)))?;
        Ok(Self { word_re })
    }

    /// Splits `text` into lower-cased word tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized: String = text.nfc().collect();

        self.word_re
            .find_iter(&normalized)
            .map(|m| m.as_str().to_lowercase())
            .filter(|token| is_long_enough(token))
            .collect()
    }
}

/// One-shot helper for callers that tokenize a single text.
pub fn tokenize(text: &str) -> Result<Vec<String>> {
    Ok(Tokenizer::new()?.tokenize(text))
}

// Filters out single letters left over from possessives and articles
fn is_long_enough(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_CHARS
}
