//! Precomputed feedback table
//!
//! Every (guess, solution) pair of the vocabulary is encoded once up front into
//! a dense row-major table, so the search only ever does array reads.

use super::progress;
use super::scheduler::hardware_concurrency;
use crate::core::{FeedbackCode, OutputSink, SolverError, Word, WordIndex};
use log::info;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Dense `N × N` table of feedback codes, `table[guess][solution]`
#[derive(Debug, Clone)]
pub struct FeedbackCache {
    index: WordIndex,
    table: Vec<u8>,
}

impl FeedbackCache {
    /// Build the table over `vocabulary`
    ///
    /// Ids are assigned in insertion order. Guess rows are split into one
    /// contiguous range per hardware thread and filled in parallel; ranges never
    /// overlap, and the call returns only after every row is written.
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::{FeedbackCode, Word};
    /// use wordle_lookahead::solver::FeedbackCache;
    ///
    /// let words: Vec<Word> = ["crane", "slate"].iter().map(|w| Word::new(*w).unwrap()).collect();
    /// let cache = FeedbackCache::build(&words, None);
    ///
    /// assert_eq!(cache.lookup(&words[0], &words[0]).unwrap(), FeedbackCode::ALL_HIT);
    /// ```
    #[must_use]
    pub fn build(vocabulary: &[Word], sink: Option<&dyn OutputSink>) -> Self {
        let start = Instant::now();
        let index = WordIndex::build(vocabulary.iter().cloned());
        let words = index.words();
        let n = words.len();
        let mut table = vec![0u8; n * n];

        if n > 0 {
            let rows_per_worker = n.div_ceil(hardware_concurrency());
            let rows_done = AtomicUsize::new(0);

            progress::watch(&rows_done, n, sink, || {
                table
                    .par_chunks_mut(rows_per_worker * n)
                    .enumerate()
                    .for_each(|(range, rows)| {
                        let first = range * rows_per_worker;
                        for (offset, row) in rows.chunks_mut(n).enumerate() {
                            let guess = &words[first + offset];
                            for (cell, solution) in row.iter_mut().zip(words) {
                                *cell = FeedbackCode::calculate(guess, solution).value();
                            }
                            rows_done.fetch_add(1, Ordering::Relaxed);
                        }
                    });
            });
        }

        info!(
            "feedback table built for {n} words ({} entries) in {:.2?}",
            n * n,
            start.elapsed()
        );

        Self { index, table }
    }

    /// Word ↔ id mapping used by the table
    #[must_use]
    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Number of words in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Id of `word`
    ///
    /// # Errors
    /// `UnknownWord` if the table was not built over `word`.
    pub fn id(&self, word: &Word) -> Result<usize, SolverError> {
        self.index
            .id(word)
            .ok_or_else(|| SolverError::UnknownWord(word.text().to_string()))
    }

    /// Ids for a list of words, in order
    ///
    /// # Errors
    /// `UnknownWord` for the first word missing from the table.
    pub fn ids(&self, words: &[Word]) -> Result<Vec<usize>, SolverError> {
        words.iter().map(|word| self.id(word)).collect()
    }

    /// Cached feedback for two vocabulary words
    ///
    /// # Errors
    /// `UnknownWord` if either word is missing from the table.
    pub fn lookup(&self, guess: &Word, solution: &Word) -> Result<FeedbackCode, SolverError> {
        Ok(self.code(self.id(guess)?, self.id(solution)?))
    }

    /// Cached feedback by id
    ///
    /// # Panics
    /// Panics if either id is out of range.
    #[inline]
    #[must_use]
    pub fn code(&self, guess: usize, solution: usize) -> FeedbackCode {
        FeedbackCode::new(self.table[guess * self.len() + solution])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SilentSink;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    fn sample() -> Vec<Word> {
        words(&[
            "crane", "slate", "trace", "speed", "erase", "robot", "floor", "lolly", "hello",
            "geese", "eerie", "abbey", "kebab", "mamma", "zzzzz",
        ])
    }

    #[test]
    fn lookup_matches_direct_encoding() {
        let vocabulary = sample();
        let cache = FeedbackCache::build(&vocabulary, None);

        assert_eq!(cache.len(), vocabulary.len());
        for guess in &vocabulary {
            for solution in &vocabulary {
                assert_eq!(
                    cache.lookup(guess, solution).unwrap(),
                    FeedbackCode::calculate(guess, solution),
                    "{guess} vs {solution}"
                );
            }
        }
    }

    #[test]
    fn table_is_not_symmetric() {
        let vocabulary = words(&["speed", "erase"]);
        let cache = FeedbackCache::build(&vocabulary, None);
        assert_ne!(cache.code(0, 1), cache.code(1, 0));
    }

    #[test]
    fn diagonal_is_all_hit() {
        let cache = FeedbackCache::build(&sample(), Some(&SilentSink));
        for id in 0..cache.len() {
            assert!(cache.code(id, id).is_all_hit());
        }
    }

    #[test]
    fn unknown_word_is_an_error() {
        let vocabulary = words(&["crane", "slate"]);
        let cache = FeedbackCache::build(&vocabulary, None);
        let stranger = Word::new("trace").unwrap();

        assert_eq!(
            cache.lookup(&vocabulary[0], &stranger),
            Err(SolverError::UnknownWord("trace".to_string()))
        );
        assert!(cache.lookup(&stranger, &vocabulary[0]).is_err());
        assert!(cache.ids(&[vocabulary[1].clone(), stranger]).is_err());
    }

    #[test]
    fn duplicate_vocabulary_entries_share_a_row() {
        let cache = FeedbackCache::build(&words(&["crane", "slate", "crane"]), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn empty_vocabulary_builds_empty_table() {
        let cache = FeedbackCache::build(&[], None);
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_readers_agree() {
        let vocabulary = sample();
        let cache = FeedbackCache::build(&vocabulary, None);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for guess in 0..cache.len() {
                        for solution in 0..cache.len() {
                            assert_eq!(
                                cache.code(guess, solution),
                                FeedbackCode::calculate(&vocabulary[guess], &vocabulary[solution])
                            );
                        }
                    }
                });
            }
        });
    }
}
