//! Word solving command
//!
//! Plays an automated game against a hidden answer, given or picked at random.

use super::game::{GameReport, HiddenAnswer, play};
use crate::core::{OutputSink, SolverError, Word};
use crate::solver::{Session, SessionConfig};
use anyhow::Result;
use rand::prelude::IndexedRandom;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Hidden answer; a random solution when `None`
    pub answer: Option<String>,
    pub session: SessionConfig,
}

impl SolveConfig {
    /// Automated play with decaying lookahead from `steps`
    #[must_use]
    pub const fn new(answer: Option<String>, steps: usize) -> Self {
        Self {
            answer,
            session: SessionConfig::new(steps).with_decay(true),
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: Word,
    pub report: GameReport,
}

/// Resolve the hidden answer
///
/// # Errors
/// - `InvalidInput` for a malformed word or an empty solution list
/// - `UnknownWord` if the requested answer is not a solution
pub fn choose_answer(requested: Option<&str>, solutions: &[Word]) -> Result<Word, SolverError> {
    match requested {
        Some(text) => {
            let word = Word::new(text)?;
            if solutions.contains(&word) {
                Ok(word)
            } else {
                Err(SolverError::UnknownWord(word.text().to_string()))
            }
        }
        None => solutions
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| SolverError::InvalidInput("solution list is empty".to_string())),
    }
}

/// Solve one hidden word from scratch
///
/// # Errors
/// Returns an error if the answer cannot be resolved or the search fails.
pub fn solve_word(
    config: &SolveConfig,
    guesses: &[Word],
    solutions: &[Word],
    sink: &dyn OutputSink,
) -> Result<SolveResult> {
    let answer = choose_answer(config.answer.as_deref(), solutions)?;
    let mut session = Session::prepare(guesses, solutions, config.session, Some(sink))?;
    let report = play(&mut session, &mut HiddenAnswer::new(answer.clone()), sink)?;
    Ok(SolveResult { answer, report })
}
