// src/table/mod.rs
// =============================================================================
// Table support for the `table` command.
//
// Submodules:
// - processing: header handling and value counts
// - export: CSV output and file naming
//
// Extraction of the raw rows from HTML lives in parser::table.
// =============================================================================

mod export;
mod processing;

pub use export::{sanitize_filename, write_table_csv};
pub use processing::{process_table, ProcessedTable, TableRow, ValueCount};
