//! Parallel best-guess selection
//!
//! Scores every guess in the pool with one scheduler task each, then picks the
//! highest score. Ties go to the lexicographically smallest word, so the
//! choice never depends on pool order or thread timing.

use super::EntropyEngine;
use crate::core::{OutputSink, SolverError, Word};
use crate::solver::progress;
use crate::solver::scheduler::{TaskHandle, WorkScheduler};
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// A chosen guess and its expected information in bits
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
}

impl EntropyEngine {
    /// Best guess from `guesses` against `candidates` with `k`-step lookahead
    ///
    /// Deeper plies search the same guess list.
    ///
    /// # Errors
    /// - `InvalidInput` if `k` is zero
    /// - `EmptyGuessPool` if `guesses` is empty
    /// - `UnknownWord` if a word is missing from the feedback table
    /// - `TaskLost` / `WorkerPanicked` if a scoring task died
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::Word;
    /// use wordle_lookahead::solver::EntropyEngine;
    ///
    /// let words: Vec<Word> = ["aaaaa", "aeros", "slate", "irate", "crate", "grate"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let engine = EntropyEngine::precompute(&words, words.len(), None);
    ///
    /// let best = engine.best_guess(&words[..2], &words[2..], 1, None).unwrap();
    /// assert_eq!(best.word.text(), "aeros");
    /// assert!(best.score > 0.0);
    /// ```
    pub fn best_guess(
        &self,
        guesses: &[Word],
        candidates: &[Word],
        k: usize,
        sink: Option<&dyn OutputSink>,
    ) -> Result<ScoredGuess, SolverError> {
        let guess_pool = self.cache().ids(guesses)?;
        let candidates = self.cache().ids(candidates)?;
        let (guess, score) = self.best_guess_ids(&guess_pool, &candidates, k, sink)?;
        Ok(ScoredGuess {
            word: self.cache().index().word(guess).clone(),
            score,
        })
    }

    /// Id-level form of [`best_guess`](Self::best_guess)
    ///
    /// # Errors
    /// Same as [`best_guess`](Self::best_guess), minus `UnknownWord`.
    pub fn best_guess_ids(
        &self,
        guess_pool: &[usize],
        candidates: &[usize],
        k: usize,
        sink: Option<&dyn OutputSink>,
    ) -> Result<(usize, f64), SolverError> {
        if k == 0 {
            return Err(SolverError::InvalidInput(
                "lookahead depth must be at least 1".to_string(),
            ));
        }
        if guess_pool.is_empty() {
            return Err(SolverError::EmptyGuessPool);
        }

        debug!(
            "searching {} guesses against {} candidates, depth {k}",
            guess_pool.len(),
            candidates.len()
        );
        let start = Instant::now();

        let guess_pool: Arc<[usize]> = Arc::from(guess_pool);
        let candidates: Arc<[usize]> = Arc::from(candidates);
        let completed = Arc::new(AtomicUsize::new(0));

        let scores = progress::watch(&completed, guess_pool.len(), sink, || {
            self.score_pool(&guess_pool, &candidates, k, &completed)
        })?;

        let best = self.select(&guess_pool, &scores);
        debug!(
            "best guess '{}' scores {:.4} bits ({:.2?})",
            self.cache().index().word(best.0),
            best.1,
            start.elapsed()
        );
        Ok(best)
    }

    /// Fork one task per guess onto a fresh scheduler and join them all
    fn score_pool(
        &self,
        guess_pool: &Arc<[usize]>,
        candidates: &Arc<[usize]>,
        k: usize,
        completed: &Arc<AtomicUsize>,
    ) -> Result<Vec<f64>, SolverError> {
        let mut scheduler = WorkScheduler::with_hardware_concurrency();

        let handles = (0..guess_pool.len())
            .map(|slot| {
                let engine = self.clone();
                let guess_pool = Arc::clone(guess_pool);
                let candidates = Arc::clone(candidates);
                let completed = Arc::clone(completed);
                scheduler.submit(move || {
                    let score =
                        engine.k_step_entropy(guess_pool[slot], &candidates, k, &guess_pool);
                    completed.fetch_add(1, Ordering::Relaxed);
                    score
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let scores = handles
            .into_iter()
            .map(TaskHandle::wait)
            .collect::<Result<Vec<_>, _>>()?;

        scheduler.shutdown()?;
        Ok(scores)
    }

    /// Highest score wins, ties to the smaller word
    fn select(&self, guess_pool: &[usize], scores: &[f64]) -> (usize, f64) {
        let words = self.cache().index();
        guess_pool
            .iter()
            .copied()
            .zip(scores.iter().copied())
            .max_by(|&(a, score_a), &(b, score_b)| {
                score_a
                    .total_cmp(&score_b)
                    .then_with(|| words.word(b).cmp(words.word(a)))
            })
            .unwrap_or((guess_pool[0], 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SilentSink;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    fn engine_for(vocabulary: &[Word]) -> EntropyEngine {
        EntropyEngine::precompute(vocabulary, vocabulary.len(), None)
    }

    #[test]
    fn selects_highest_entropy() {
        let vocabulary = words(&["aaaaa", "aeros", "slate", "irate", "crate", "grate"]);
        let engine = engine_for(&vocabulary);

        let best = engine
            .best_guess(&vocabulary[..2], &vocabulary[2..], 1, None)
            .unwrap();

        assert_eq!(best.word.text(), "aeros");
        assert!(best.score > 0.5);
    }

    #[test]
    fn best_score_dominates_every_other_guess() {
        let vocabulary = words(&[
            "crane", "slate", "trace", "irate", "grate", "crate", "plate", "raise", "arise",
            "stare", "snare", "share",
        ]);
        let engine = engine_for(&vocabulary);
        let pool: Vec<usize> = (0..vocabulary.len()).collect();

        for k in 1..=2 {
            let (_, best) = engine.best_guess_ids(&pool, &pool, k, None).unwrap();
            for &guess in &pool {
                assert!(engine.k_step_entropy(guess, &pool, k, &pool) <= best);
            }
        }
    }

    #[test]
    fn ties_break_lexicographically() {
        // Nothing to learn from a single candidate: every guess scores 0
        let vocabulary = words(&["zebra", "bbbbb", "apple", "ccccc"]);
        let engine = engine_for(&vocabulary);

        let best = engine
            .best_guess(&vocabulary, &vocabulary[3..], 1, None)
            .unwrap();
        assert_eq!(best.word.text(), "apple");
        assert!(best.score.abs() < f64::EPSILON);
    }

    #[test]
    fn tie_break_ignores_pool_order() {
        let vocabulary = words(&["crane", "slate", "trace"]);
        let engine = engine_for(&vocabulary);
        let mut reversed = vocabulary.clone();
        reversed.reverse();

        let forward = engine.best_guess(&vocabulary, &vocabulary, 1, None).unwrap();
        let backward = engine.best_guess(&reversed, &vocabulary, 1, None).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.word.text(), "crane");
    }

    #[test]
    fn reports_progress_to_completion() {
        use std::sync::Mutex;

        #[derive(Default)]
        struct Last(Mutex<Option<(usize, usize)>>);

        impl OutputSink for Last {
            fn render(&self, _text: &str) {}

            fn report_progress(&self, done: usize, total: usize) {
                *self.0.lock().unwrap() = Some((done, total));
            }
        }

        let vocabulary = words(&["crane", "slate", "trace", "irate"]);
        let engine = engine_for(&vocabulary);
        let sink = Last::default();

        engine
            .best_guess(&vocabulary, &vocabulary, 2, Some(&sink))
            .unwrap();
        assert_eq!(*sink.0.lock().unwrap(), Some((4, 4)));
    }

    #[test]
    fn rejects_zero_depth_and_empty_pool() {
        let vocabulary = words(&["crane", "slate"]);
        let engine = engine_for(&vocabulary);

        assert!(matches!(
            engine.best_guess(&vocabulary, &vocabulary, 0, None),
            Err(SolverError::InvalidInput(_))
        ));
        assert_eq!(
            engine.best_guess(&[], &vocabulary, 1, Some(&SilentSink)),
            Err(SolverError::EmptyGuessPool)
        );
    }

    #[test]
    fn rejects_unknown_words() {
        let vocabulary = words(&["crane", "slate"]);
        let engine = engine_for(&vocabulary);
        let strangers = words(&["trace"]);

        assert_eq!(
            engine.best_guess(&strangers, &vocabulary, 1, None),
            Err(SolverError::UnknownWord("trace".to_string()))
        );
        assert!(engine.best_guess(&vocabulary, &strangers, 1, None).is_err());
    }
}
