//! Corpus loading and the byte-buffer document model.
//!
//! - [`types`] - The corpus buffer, document bounds, n-gram histograms
//! - [`loader`] - File/stdin input (memory-mapped where possible)
//! - [`stats`] - Corpus statistics for the `stats` subcommand

pub mod loader;
pub mod stats;
pub mod types;

pub use loader::load_corpus;
pub use types::{document_index, find_document_bounds, Corpus, DELIMITER};
