//! Word lists for Wordle solving
//!
//! Guess and solution vocabularies are read from plain text files, one word
//! per line.

pub mod loader;

pub use loader::{load_from_file, merge_vocabularies, words_from_slice};
