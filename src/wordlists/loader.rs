//! Word list loading utilities

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// token that is not a five-letter word. Case is normalised.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_lookahead::wordlists::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, dropping invalid entries
///
/// # Examples
/// ```
/// use wordle_lookahead::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "SLATE"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Guess words followed by the solution words not already listed
///
/// The feedback table is built over this list so every solution has an id
/// even when the guess list leaves it out.
#[must_use]
pub fn merge_vocabularies(guesses: &[Word], solutions: &[Word]) -> Vec<Word> {
    let mut seen: FxHashSet<&Word> = FxHashSet::default();
    guesses
        .iter()
        .chain(solutions)
        .filter(|&word| seen.insert(word))
        .cloned()
        .collect()
}
