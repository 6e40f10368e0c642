//! Word analysis command
//!
//! Scores one word as an opening guess against the full solution list.

use crate::core::{OutputSink, Word};
use crate::solver::EntropyEngine;
use crate::wordlists::merge_vocabularies;
use anyhow::Result;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub lookahead_entropy: f64,
    pub steps: usize,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
}

/// Single-step and `steps`-deep entropy of `word` against every solution
///
/// Deeper plies choose follow-ups from `guesses`.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is in neither list
/// - `steps` is zero
pub fn analyze_word(
    word: &str,
    steps: usize,
    guesses: &[Word],
    solutions: &[Word],
    sink: &dyn OutputSink,
) -> Result<AnalysisResult> {
    let word = Word::new(word)?;
    anyhow::ensure!(steps > 0, "lookahead depth must be at least 1");

    let vocabulary = merge_vocabularies(guesses, solutions);
    let engine = EntropyEngine::precompute(&vocabulary, solutions.len(), Some(sink));

    let guess = engine.cache().id(&word)?;
    let candidates = engine.cache().ids(solutions)?;
    let pool = engine.cache().ids(guesses)?;

    let entropy = engine.single_step_entropy(guess, &candidates);
    let lookahead_entropy = engine.k_step_entropy(guess, &candidates, steps, &pool);

    let total_candidates = candidates.len();
    let expected_reduction = entropy.exp2();
    let expected_remaining = total_candidates as f64 / expected_reduction;

    Ok(AnalysisResult {
        word,
        entropy,
        lookahead_entropy,
        steps,
        expected_reduction,
        expected_remaining,
        total_candidates,
    })
}
