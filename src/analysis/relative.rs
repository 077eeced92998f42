// src/analysis/relative.rs
// =============================================================================
// Compares how often words appear in the crawled articles with how common
// they are in the language in general.
//
// Steps:
// 1. Take the top-K words of the word-count store (count desc, word asc -
//    the word tie-break keeps the cut deterministic)
// 2. Look up each word's language score (None = outside the vocabulary)
// 3. Sort the rows by the requested mode:
//    - article:  article count desc, word asc
//    - language: language score desc, word asc, unknown words last
// =============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::LanguageReference;
use crate::error::{Result, ScraperError};
use crate::words::FrequencyStore;

/// One word of the comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelativeFrequencyRow {
    pub word: String,
    pub article_frequency: u64,
    /// None when the word is outside the language reference.
    pub language_frequency: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Article,
    Language,
}

impl FromStr for SortMode {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "article" => Ok(SortMode::Article),
            "language" => Ok(SortMode::Language),
            other => Err(ScraperError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Article => write!(f, "article"),
            SortMode::Language => write!(f, "language"),
        }
    }
}

/// Builds one row per top-`top_k` word of the store.
pub fn compute_relative_frequency(
    store: &FrequencyStore,
    reference: &LanguageReference,
    top_k: usize,
) -> Result<Vec<RelativeFrequencyRow>> {
    if store.is_empty() {
        return Err(ScraperError::EmptyStore);
    }
    if top_k < 1 {
        return Err(ScraperError::InvalidArgument("--n must be >= 1".to_string()));
    }

    let mut words: Vec<(&str, u64)> = store.iter().collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    Ok(words
        .into_iter()
        .take(top_k)
        .map(|(word, count)| RelativeFrequencyRow {
            word: word.to_string(),
            article_frequency: count,
            language_frequency: reference.score(word),
        })
        .collect())
}

/// Sorts rows in place for display.
pub fn sort_rows(rows: &mut [RelativeFrequencyRow], mode: SortMode) {
    match mode {
        SortMode::Article => rows.sort_by(|a, b| {
            b.article_frequency
                .cmp(&a.article_frequency)
                .then_with(|| a.word.cmp(&b.word))
        }),
        SortMode::Language => rows.sort_by(|a, b| {
            compare_language(a.language_frequency, b.language_frequency)
                .then_with(|| a.word.cmp(&b.word))
        }),
    }
}

// Known scores descending; unknown after every known score
fn compare_language(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(tokens: &[&str]) -> FrequencyStore {
        let mut store = FrequencyStore::new();
        store.merge_tokens(tokens);
        store
    }

    fn reference() -> LanguageReference {
        LanguageReference::from_scores(
            vec![
                ("the".to_string(), 7.7),
                ("is".to_string(), 7.2),
                ("tail".to_string(), 4.3),
            ],
            100,
        )
    }

    #[test]
    fn test_empty_store_is_an_error() {
        let err = compute_relative_frequency(&FrequencyStore::new(), &reference(), 10).unwrap_err();
        assert!(matches!(err, ScraperError::EmptyStore));
    }

    #[test]
    fn test_top_k_by_count_with_word_tie_break() {
        let store = store_with(&["pikachu", "pikachu", "pikachu", "the", "the", "zap", "tail"]);
        let rows = compute_relative_frequency(&store, &reference(), 3).unwrap();

        let words: Vec<_> = rows.iter().map(|r| r.word.as_str()).collect();
        // "tail" and "zap" tie at 1; "tail" wins the cut alphabetically
        assert_eq!(words, vec!["pikachu", "the", "tail"]);
        assert_eq!(rows[0].article_frequency, 3);
        assert_eq!(rows[0].language_frequency, None);
        assert_eq!(rows[1].language_frequency, Some(7.7));
    }

    #[test]
    fn test_language_mode_puts_unknown_words_last() {
        let store = store_with(&[
            "pikachu", "pikachu", "pikachu", "pikachu", "electric", "electric", "electric", "the", "tail",
        ]);
        let mut rows = compute_relative_frequency(&store, &reference(), 10).unwrap();
        sort_rows(&mut rows, SortMode::Language);

        let words: Vec<_> = rows.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["the", "tail", "electric", "pikachu"]);
    }

    #[test]
    fn test_article_mode_sorts_by_count_then_word() {
        let store = store_with(&["b", "a", "c", "c"]);
        let mut rows = compute_relative_frequency(&store, &reference(), 10).unwrap();
        sort_rows(&mut rows, SortMode::Language);
        sort_rows(&mut rows, SortMode::Article);

        let words: Vec<_> = rows.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_zero_rows_requested_is_invalid() {
        let store = store_with(&["pikachu"]);
        let err = compute_relative_frequency(&store, &reference(), 0).unwrap_err();
        assert!(matches!(err, ScraperError::InvalidArgument(_)));
    }

    #[test]
    fn test_sort_mode_from_str() {
        assert_eq!("article".parse::<SortMode>().unwrap(), SortMode::Article);
        assert_eq!("language".parse::<SortMode>().unwrap(), SortMode::Language);
        assert!(matches!("Article".parse::<SortMode>(), Err(ScraperError::UnknownMode(_))));
        assert_eq!(SortMode::Language.to_string(), "language");
    }
}
