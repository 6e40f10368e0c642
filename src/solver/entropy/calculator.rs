//! Shannon entropy calculation over cached feedback
//!
//! Given a guess and a set of candidate solution ids, computes the expected
//! information gain, either for the guess alone or with a greedy k-step
//! lookahead.

use crate::core::{FeedbackCode, OutputSink, SolverError, Word};
use crate::solver::{FeedbackCache, LogTable};
use std::sync::Arc;

/// Entropy scorer sharing one immutable feedback table and log table
///
/// Cloning is cheap: both tables sit behind `Arc` and are never mutated after
/// construction, so clones can be handed to worker threads freely.
#[derive(Debug, Clone)]
pub struct EntropyEngine {
    cache: Arc<FeedbackCache>,
    logs: Arc<LogTable>,
}

impl EntropyEngine {
    #[must_use]
    pub const fn new(cache: Arc<FeedbackCache>, logs: Arc<LogTable>) -> Self {
        Self { cache, logs }
    }

    /// Build both tables for a session
    ///
    /// The feedback table covers `vocabulary`; the log table covers candidate
    /// sets up to `solution_vocabulary_size`.
    #[must_use]
    pub fn precompute(
        vocabulary: &[Word],
        solution_vocabulary_size: usize,
        sink: Option<&dyn OutputSink>,
    ) -> Self {
        let cache = FeedbackCache::build(vocabulary, sink);
        let logs = LogTable::precompute(solution_vocabulary_size);
        Self::new(Arc::new(cache), Arc::new(logs))
    }

    #[must_use]
    pub fn cache(&self) -> &FeedbackCache {
        &self.cache
    }

    #[must_use]
    pub fn logs(&self) -> &LogTable {
        &self.logs
    }

    /// Count candidates per feedback code
    fn histogram(&self, guess: usize, candidates: &[usize]) -> [u32; FeedbackCode::COUNT] {
        let mut counts = [0u32; FeedbackCode::COUNT];
        for &solution in candidates {
            counts[self.cache.code(guess, solution).index()] += 1;
        }
        counts
    }

    /// Split candidates into buckets by feedback code, keeping their order
    fn partition(&self, guess: usize, candidates: &[usize]) -> Vec<Vec<usize>> {
        let mut buckets = vec![Vec::new(); FeedbackCode::COUNT];
        for &solution in candidates {
            buckets[self.cache.code(guess, solution).index()].push(solution);
        }
        buckets
    }

    /// Shannon entropy of the feedback distribution
    ///
    /// H = -Σ p · log₂(p) over non-empty buckets, p = bucket size / total.
    /// Zero when there is at most one candidate.
    #[must_use]
    pub fn single_step_entropy(&self, guess: usize, candidates: &[usize]) -> f64 {
        let total = candidates.len();
        if total <= 1 {
            return 0.0;
        }

        self.histogram(guess, candidates)
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| {
                let count = count as usize;
                let p = count as f64 / total as f64;
                -p * self.logs.log2_ratio(count, total)
            })
            .sum()
    }

    /// Entropy of `guess` plus the best achievable entropy `k - 1` rounds on
    ///
    /// For `k > 1` every feedback bucket is scored by the best
    /// `k_step_entropy(next, bucket, k - 1)` over `guess_pool`, weighted by the
    /// bucket's share of the candidates. This is a greedy heuristic, not an
    /// exact expectimax. Runs entirely on the calling thread.
    #[must_use]
    pub fn k_step_entropy(
        &self,
        guess: usize,
        candidates: &[usize],
        k: usize,
        guess_pool: &[usize],
    ) -> f64 {
        let current = self.single_step_entropy(guess, candidates);
        if k <= 1 || candidates.len() <= 1 {
            return current;
        }

        let total = candidates.len() as f64;
        let lookahead: f64 = self
            .partition(guess, candidates)
            .iter()
            // A bucket of one has nothing left to learn
            .filter(|bucket| bucket.len() > 1)
            .map(|bucket| {
                let best = guess_pool
                    .iter()
                    .map(|&next| self.k_step_entropy(next, bucket, k - 1, guess_pool))
                    .fold(0.0, f64::max);
                bucket.len() as f64 / total * best
            })
            .sum();

        current + lookahead
    }

    /// Single-step entropy for words rather than ids
    ///
    /// # Errors
    /// `UnknownWord` if any word is missing from the feedback table.
    pub fn entropy_of(&self, guess: &Word, candidates: &[Word]) -> Result<f64, SolverError> {
        let guess = self.cache.id(guess)?;
        let candidates = self.cache.ids(candidates)?;
        Ok(self.single_step_entropy(guess, &candidates))
    }
}
