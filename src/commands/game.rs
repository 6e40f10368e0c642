//! Shared round loop for automated and interactive games
//!
//! A game asks the session for a guess, asks a [`FeedbackSource`] what the
//! board said about it, and feeds that back until the session is terminal.

use crate::core::{FeedbackCode, OutputSink, SolverError, Word};
use crate::solver::{Outcome, RoundState, ScoredGuess, Session};
use anyhow::Result;
use log::info;
use std::time::{Duration, Instant};

/// What the board said about a suggested guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Feedback(FeedbackCode),
    /// The game refused the word; suggest something else
    Rejected,
}

/// Where feedback for each guess comes from
pub trait FeedbackSource {
    /// Feedback for the guess the session is waiting on
    ///
    /// # Errors
    /// Whatever stops the source from answering, e.g. closed input.
    fn reply(&mut self, guess: &ScoredGuess, session: &Session) -> Result<Reply>;
}

/// Automated source that knows the answer
#[derive(Debug, Clone)]
pub struct HiddenAnswer {
    answer: Word,
}

impl HiddenAnswer {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self { answer }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }
}

impl FeedbackSource for HiddenAnswer {
    fn reply(&mut self, guess: &ScoredGuess, _session: &Session) -> Result<Reply> {
        Ok(Reply::Feedback(FeedbackCode::calculate(
            &guess.word,
            &self.answer,
        )))
    }
}

/// A single round of a finished game
#[derive(Debug, Clone, PartialEq)]
pub struct GuessStep {
    pub word: Word,
    pub score: f64,
    pub feedback: FeedbackCode,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Everything a driver needs to print about a game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub steps: Vec<GuessStep>,
    pub outcome: Outcome,
    pub guesses_used: usize,
    pub rejected: usize,
    pub duration: Duration,
}

impl GameReport {
    #[must_use]
    pub const fn solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }

    /// Guess count, or `None` if the game ended without a solution
    #[must_use]
    pub const fn guesses(&self) -> Option<usize> {
        if self.solved() {
            Some(self.guesses_used)
        } else {
            None
        }
    }
}

/// Drive `session` to a terminal state with feedback from `source`
///
/// Each finished round is rendered as one line through `sink`, which also
/// receives search progress.
///
/// # Errors
/// - errors from the source
/// - solver errors other than `NoSolution`, which ends the game normally
pub fn play(
    session: &mut Session,
    source: &mut dyn FeedbackSource,
    sink: &dyn OutputSink,
) -> Result<GameReport> {
    let start = Instant::now();
    let mut steps = Vec::new();
    let mut rejected = 0;

    while !matches!(session.state(), RoundState::Terminal(_)) {
        let candidates_before = session.candidate_count();
        let guess = session.next_guess(Some(sink))?;

        let feedback = match source.reply(&guess, session)? {
            Reply::Rejected => {
                session.reject_guess()?;
                rejected += 1;
                continue;
            }
            Reply::Feedback(feedback) => feedback,
        };

        match session.apply_feedback(feedback) {
            Ok(_) | Err(SolverError::NoSolution) => {}
            Err(err) => return Err(err.into()),
        }

        let step = GuessStep {
            word: guess.word,
            score: guess.score,
            feedback,
            candidates_before,
            candidates_after: session.candidate_count(),
        };
        sink.render(&format!(
            "{} {} {:.3} bits, {} -> {} candidates",
            step.word.text().to_uppercase(),
            step.feedback,
            step.score,
            step.candidates_before,
            step.candidates_after
        ));
        steps.push(step);
    }

    let outcome = match session.state() {
        RoundState::Terminal(outcome) => outcome.clone(),
        _ => Outcome::NoSolution,
    };
    let report = GameReport {
        steps,
        outcome,
        guesses_used: session.guesses_used(),
        rejected,
        duration: start.elapsed(),
    };
    info!(
        "game finished after {} guesses ({} rejected) in {:.2?}",
        report.guesses_used, report.rejected, report.duration
    );
    Ok(report)
}
