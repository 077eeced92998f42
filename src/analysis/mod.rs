// src/analysis/mod.rs
// =============================================================================
// Relative word-frequency analysis.
//
// Submodules:
// - language: per-language commonness scores (the reference side)
// - relative: joins the word-count store against the reference and ranks
// =============================================================================

mod language;
mod relative;

pub use language::{LanguageReference, DEFAULT_TOP_N};
pub use relative::{compute_relative_frequency, sort_rows, RelativeFrequencyRow, SortMode};
