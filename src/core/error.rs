//! Error type for the solving core

use super::WordError;
use std::fmt;

/// Failures surfaced by the feedback cache, the scheduler and the search engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Malformed input: mismatched lengths, bad tokens, zero lookahead depth
    InvalidInput(String),
    /// A word that was not part of the vocabulary the feedback table was built over
    UnknownWord(String),
    /// A task was submitted after the scheduler began shutting down
    SchedulerClosed,
    /// Observed feedback is consistent with none of the remaining candidates
    NoSolution,
    /// Search was asked to choose from an empty guess pool
    EmptyGuessPool,
    /// A queued task was dropped before it produced a result
    TaskLost,
    /// A worker thread panicked and could not be joined cleanly
    WorkerPanicked,
    /// A session operation was called in the wrong round state
    OutOfTurn(&'static str),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "Invalid input: {reason}"),
            Self::UnknownWord(word) => write!(f, "Word '{word}' is not in the vocabulary"),
            Self::SchedulerClosed => write!(f, "Scheduler is shut down"),
            Self::NoSolution => write!(f, "No candidate matches the observed feedback"),
            Self::EmptyGuessPool => write!(f, "No guesses left to choose from"),
            Self::TaskLost => write!(f, "Task was dropped before completing"),
            Self::WorkerPanicked => write!(f, "Worker thread panicked"),
            Self::OutOfTurn(expected) => write!(f, "Operation requires the {expected} state"),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<WordError> for SolverError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_errors_become_invalid_input() {
        let err = SolverError::from(WordError::InvalidLength(3));
        assert_eq!(
            err,
            SolverError::InvalidInput("Word must be exactly 5 letters, got 3".to_string())
        );
    }

    #[test]
    fn display_names_the_word() {
        let err = SolverError::UnknownWord("qxzzy".to_string());
        assert_eq!(err.to_string(), "Word 'qxzzy' is not in the vocabulary");
    }
}
