// src/words/mod.rs
// =============================================================================
// Word counting: turning article text into tokens and accumulating them in
// the persistent word-count store.
//
// Submodules:
// - tokenizer: text -> Vec<token>
// - store: token counts on disk (load / merge / save)
// =============================================================================

mod store;
mod tokenizer;

pub use store::{update_counts_file, FrequencyStore};
pub use tokenizer::{tokenize, Tokenizer};
