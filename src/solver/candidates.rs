//! Remaining solution candidates

use super::FeedbackCache;
use crate::core::{FeedbackCode, SolverError};

/// Ordered ids of the solutions still consistent with every observed feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    ids: Vec<usize>,
}

impl CandidateSet {
    #[must_use]
    pub const fn new(ids: Vec<usize>) -> Self {
        Self { ids }
    }

    #[must_use]
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Nothing left to search for
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.ids.len() <= 1
    }

    fn consistent<'a>(
        &'a self,
        cache: &'a FeedbackCache,
        guess: usize,
        feedback: FeedbackCode,
    ) -> impl Iterator<Item = usize> + 'a {
        self.ids
            .iter()
            .copied()
            .filter(move |&solution| cache.code(guess, solution) == feedback)
    }

    /// How many candidates would give `feedback` for `guess`
    #[must_use]
    pub fn count_consistent(
        &self,
        cache: &FeedbackCache,
        guess: usize,
        feedback: FeedbackCode,
    ) -> usize {
        self.consistent(cache, guess, feedback).count()
    }

    /// Candidates that would give `feedback` for `guess`, order preserved
    ///
    /// # Errors
    /// `NoSolution` if none survive.
    pub fn narrowed(
        &self,
        cache: &FeedbackCache,
        guess: usize,
        feedback: FeedbackCode,
    ) -> Result<Self, SolverError> {
        let ids: Vec<usize> = self.consistent(cache, guess, feedback).collect();
        if ids.is_empty() {
            return Err(SolverError::NoSolution);
        }
        Ok(Self::new(ids))
    }
}
