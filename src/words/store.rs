// src/words/store.rs
// =============================================================================
// This module owns the persistent word-count store (word-counts.json).
//
// File format:
//   A single JSON object, keys sorted, pretty printed, UTF-8:
//   {
//     "electric": 3,
//     "pikachu": 7
//   }
//
// Rules:
// - Missing file = empty store
// - File that is not a JSON object = CorruptStore error
// - Entries whose value is not a non-negative integer are dropped on load
// - Every save rewrites the whole snapshot through a temp file + rename, so a
//   reader never sees a half-written file
// - Counts only ever go up: merging is additive, not idempotent, and a count
//   already at u64::MAX stays there
// - A save keeps the permissions of the file it replaces (new files: 0644)
// =============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, ScraperError};

/// Cumulative word -> occurrence count mapping.
///
/// BTreeMap keeps keys sorted, which gives us a stable, diff-friendly file
/// on every save for free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyStore {
    counts: BTreeMap<String, u64>,
}

impl FrequencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store from `path`, or returns an empty store if the file
    /// does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no word-count file yet, starting empty");
            return Ok(Self::new());
        }

        let raw = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&raw).map_err(|e| corrupt(path, e.to_string()))?;

        let object = match value {
            Value::Object(map) => map,
            other => {
                return Err(corrupt(
                    path,
                    format!("expected a JSON object, found {}", json_kind(&other)),
                ))
            }
        };

        let total = object.len();
        let counts: BTreeMap<String, u64> = object
            .into_iter()
            .filter_map(|(word, count)| count.as_u64().map(|c| (word, c)))
            .collect();

        if counts.len() < total {
            debug!(
                path = %path.display(),
                dropped = total - counts.len(),
                "dropped word-count entries with non-integer values"
            );
        }

        Ok(Self { counts })
    }

    /// Adds one occurrence per token. Returns how many tokens were merged.
    pub fn merge_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> usize {
        for token in tokens {
            let count = self.counts.entry(token.as_ref().to_string()).or_insert(0);
            *count = count.saturating_add(1);
        }
        tokens.len()
    }

    /// Writes the full snapshot to `path`, replacing the file atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let temp_file = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer_pretty(&mut writer, &self.counts)
                .map_err(|e| ScraperError::Io(e.into()))?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        temp_file.as_file().sync_all()?;
        set_store_permissions(temp_file.path(), path)?;

        temp_file.persist(path).map_err(|e| ScraperError::Io(e.error))?;
        debug!(path = %path.display(), words = self.counts.len(), "saved word counts");
        Ok(())
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Read-only view of every (word, count) pair, sorted by word.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

/// Load, merge and save as one unit - the only way callers update the file.
///
/// Returns the updated store so the caller can report on it.
pub fn update_counts_file<S: AsRef<str>>(path: &Path, tokens: &[S]) -> Result<FrequencyStore> {
    let mut store = FrequencyStore::load(path)?;
    store.merge_tokens(tokens);
    store.save(path)?;
    Ok(store)
}

// NamedTempFile is created 0600; give the snapshot the mode of the file it
// replaces, or a plain 0644 for a brand new store
fn set_store_permissions(temp_path: &Path, target: &Path) -> Result<()> {
    let permissions = match fs::metadata(target) {
        Ok(existing) => existing.permissions(),
        Err(_) => default_permissions(temp_path)?,
    };
    fs::set_permissions(temp_path, permissions)?;
    Ok(())
}

#[cfg(unix)]
fn default_permissions(_temp_path: &Path) -> Result<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(temp_path: &Path) -> Result<fs::Permissions> {
    Ok(fs::metadata(temp_path)?.permissions())
}

fn corrupt(path: &Path, message: String) -> ScraperError {
    ScraperError::CorruptStore {
        path: path.display().to_string(),
        message,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why write to a temp file and then persist()?
//    - persist() is a rename, which replaces the old file in one step
//    - If we crash mid-write, only the temp file is broken; the real
//      word-counts.json still holds the previous snapshot
//
// 2. What is serde_json::Value?
//    - A JSON value whose shape we don't know yet (object, array, number...)
//    - We parse into Value first so one bad entry doesn't fail the whole file
//
// 3. Why `entry(...).or_insert(0) += 1`?
//    - entry() finds the slot for a key, or_insert() creates it if missing
//    - One lookup per token instead of a get followed by an insert
// -----------------------------------------------------------------------------
