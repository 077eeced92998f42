// src/analysis/language.rs
// =============================================================================
// The language reference: how common each word is in the language overall.
//
// Scores are on a Zipf-like scale (higher = more common, ~7 for "the",
// ~3 for an everyday word). Only the top-N words of the language are kept;
// anything outside that vocabulary has no score and is treated as rare.
//
// Source file: a JSON object { "word": score, ... }. Entries whose score is
// not a number are dropped.
// =============================================================================

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ScraperError};

/// Vocabulary size used when the caller doesn't ask for another one.
pub const DEFAULT_TOP_N: usize = 2000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageReference {
    scores: HashMap<String, f64>,
}

impl LanguageReference {
    /// Keeps the `top_n` highest-scored words (ties: word ascending).
    ///
    /// A word listed more than once keeps its highest score and takes a
    /// single vocabulary slot.
    pub fn from_scores<I>(scores: I, top_n: usize) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut best: HashMap<String, f64> = HashMap::new();
        for (word, score) in scores.into_iter().filter(|(_, score)| score.is_finite()) {
            best.entry(word)
                .and_modify(|current| *current = current.max(score))
                .or_insert(score);
        }

        let mut ranked: Vec<(String, f64)> = best.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(top_n);

        Self {
            scores: ranked.into_iter().collect(),
        }
    }

    /// Loads a reference table from a JSON file.
    pub fn from_json_file(path: &Path, top_n: usize) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&raw).map_err(|e| {
            ScraperError::Parse(format!("language reference {}: {}", path.display(), e))
        })?;

        let Value::Object(object) = value else {
            return Err(ScraperError::Parse(format!(
                "language reference {} must be a JSON object of word -> score",
                path.display()
            )));
        };

        let scores = object
            .into_iter()
            .filter_map(|(word, score)| score.as_f64().map(|s| (word.to_lowercase(), s)));
        let reference = Self::from_scores(scores, top_n);

        debug!(path = %path.display(), words = reference.len(), "loaded language reference");
        Ok(reference)
    }

    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_keeps_top_n_by_score() {
        let reference = LanguageReference::from_scores(
            vec![
                ("the".to_string(), 7.7),
                ("pokemon".to_string(), 3.9),
                ("and".to_string(), 7.4),
                ("of".to_string(), 7.4),
            ],
            3,
        );
        assert_eq!(reference.len(), 3);
        assert_eq!(reference.score("the"), Some(7.7));
        assert_eq!(reference.score("and"), Some(7.4));
        assert_eq!(reference.score("pokemon"), None);
    }

    #[test]
    fn test_from_json_file_drops_non_numeric_scores() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("en.json");
        fs::write(&path, r#"{"the": 7.73, "Is": 7.2, "bad": "high", "null": null}"#).unwrap();

        let reference = LanguageReference::from_json_file(&path, DEFAULT_TOP_N).unwrap();
        assert_eq!(reference.len(), 2);
        assert_eq!(reference.score("is"), Some(7.2));
    }

    #[test]
    fn test_case_variants_keep_highest_score() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("en.json");
        fs::write(&path, r#"{"the": 7.7, "The": 7.6, "and": 7.4, "pokemon": 3.9}"#).unwrap();

        let reference = LanguageReference::from_json_file(&path, 2).unwrap();
        assert_eq!(reference.len(), 2);
        assert_eq!(reference.score("the"), Some(7.7));
        assert_eq!(reference.score("and"), Some(7.4));
    }

    #[test]
    fn test_from_json_file_rejects_arrays() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("en.json");
        fs::write(&path, "[\"the\"]").unwrap();

        let err = LanguageReference::from_json_file(&path, 10).unwrap_err();
        assert!(matches!(err, ScraperError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LanguageReference::from_json_file(Path::new("/no/such/en.json"), 10).unwrap_err();
        assert!(matches!(err, ScraperError::Io(_)));
    }
}
