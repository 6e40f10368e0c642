//! Game session: the round state machine drivers step through
//!
//! A session owns the shrinking guess pool and candidate set and moves through
//! `Searching → AwaitingFeedback → Filtering → Searching | Terminal` once per
//! round. Drivers decide where feedback comes from; the session only checks
//! that calls arrive in the right order.

use super::{CandidateSet, EntropyEngine, ScoredGuess};
use crate::core::{FeedbackCode, OutputSink, SolverError, Word};
use crate::wordlists::merge_vocabularies;
use log::{debug, warn};
use rustc_hash::FxHashSet;

/// Lookahead settings for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Lookahead depth for the first round
    pub steps: usize,
    /// Shrink the depth by one each round, never below 1
    pub decay: bool,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(steps: usize) -> Self {
        Self {
            steps,
            decay: false,
        }
    }

    #[must_use]
    pub const fn with_decay(mut self, decay: bool) -> Self {
        self.decay = decay;
        self
    }

    /// Lookahead depth for a zero-based round number
    #[must_use]
    pub const fn steps_for_round(&self, round: usize) -> usize {
        let steps = if self.decay {
            self.steps.saturating_sub(round)
        } else {
            self.steps
        };
        if steps == 0 { 1 } else { steps }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exactly one candidate is left
    Solved(Word),
    /// Feedback ruled out every candidate
    NoSolution,
}

/// Where a session is in the current round
#[derive(Debug, Clone, PartialEq)]
pub enum RoundState {
    Searching,
    AwaitingFeedback(ScoredGuess),
    Filtering,
    Terminal(Outcome),
}

/// One game from the first suggestion to a terminal state
#[derive(Debug, Clone)]
pub struct Session {
    engine: EntropyEngine,
    config: SessionConfig,
    guess_pool: Vec<usize>,
    candidates: CandidateSet,
    history: Vec<(Word, FeedbackCode)>,
    state: RoundState,
}

impl Session {
    /// Start a session over already-precomputed tables
    ///
    /// Repeated words in either list count once, at their first position.
    ///
    /// # Errors
    /// `UnknownWord` if a guess or solution is missing from the engine's table.
    pub fn new(
        engine: EntropyEngine,
        guesses: &[Word],
        solutions: &[Word],
        config: SessionConfig,
    ) -> Result<Self, SolverError> {
        let guess_pool = unique(engine.cache().ids(guesses)?);
        let candidates = CandidateSet::new(unique(engine.cache().ids(solutions)?));
        let mut session = Self {
            engine,
            config,
            guess_pool,
            candidates,
            history: Vec::new(),
            state: RoundState::Searching,
        };
        session.settle();
        Ok(session)
    }

    /// Build the tables for `guesses ∪ solutions` and start a session
    ///
    /// # Errors
    /// Propagates errors from [`Session::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::{FeedbackCode, Word};
    /// use wordle_lookahead::solver::{Outcome, RoundState, Session, SessionConfig};
    ///
    /// let words: Vec<Word> = ["crane", "slate", "trace"].iter().map(|w| Word::new(*w).unwrap()).collect();
    /// let mut session = Session::prepare(&words, &words, SessionConfig::new(1), None).unwrap();
    ///
    /// let guess = session.next_guess(None).unwrap();
    /// let feedback = FeedbackCode::calculate(&guess.word, &words[2]);
    /// session.apply_feedback(feedback).unwrap();
    ///
    /// assert_eq!(session.state(), &RoundState::Terminal(Outcome::Solved(words[2].clone())));
    /// ```
    pub fn prepare(
        guesses: &[Word],
        solutions: &[Word],
        config: SessionConfig,
        sink: Option<&dyn OutputSink>,
    ) -> Result<Self, SolverError> {
        let vocabulary = merge_vocabularies(guesses, solutions);
        let engine = EntropyEngine::precompute(&vocabulary, solutions.len(), sink);
        Self::new(engine, guesses, solutions, config)
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &EntropyEngine {
        &self.engine
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Rounds with applied feedback so far
    #[must_use]
    pub fn round(&self) -> usize {
        self.history.len()
    }

    /// Guesses and the feedback they received, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, FeedbackCode)] {
        &self.history
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Remaining candidates as words
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        let index = self.engine.cache().index();
        self.candidates.ids().iter().map(|&id| index.word(id)).collect()
    }

    /// Guesses not yet suggested or rejected
    #[must_use]
    pub fn guess_pool_len(&self) -> usize {
        self.guess_pool.len()
    }

    /// Total guesses a player needs, counting a final guess of the solution
    /// when the last suggestion was not the solution itself
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        match &self.state {
            RoundState::Terminal(Outcome::Solved(solution)) => {
                let already_guessed = self
                    .history
                    .last()
                    .is_some_and(|(guess, _)| guess == solution);
                self.history.len() + usize::from(!already_guessed)
            }
            _ => self.history.len(),
        }
    }

    /// Search for the best guess this round
    ///
    /// The suggestion is taken out of the guess pool so it is never offered
    /// again.
    ///
    /// # Errors
    /// - `OutOfTurn` unless the session is searching
    /// - anything [`EntropyEngine::best_guess_ids`] reports
    pub fn next_guess(&mut self, sink: Option<&dyn OutputSink>) -> Result<ScoredGuess, SolverError> {
        if self.state != RoundState::Searching {
            return Err(SolverError::OutOfTurn("searching"));
        }

        let depth = self.config.steps_for_round(self.round());
        let (id, score) =
            self.engine
                .best_guess_ids(&self.guess_pool, self.candidates.ids(), depth, sink)?;
        self.guess_pool.retain(|&guess| guess != id);

        let scored = ScoredGuess {
            word: self.engine.cache().index().word(id).clone(),
            score,
        };
        self.state = RoundState::AwaitingFeedback(scored.clone());
        Ok(scored)
    }

    /// The pending guess was refused as not a real word
    ///
    /// Goes back to searching without spending a round; the word stays out of
    /// the pool.
    ///
    /// # Errors
    /// `OutOfTurn` unless a guess is awaiting feedback.
    pub fn reject_guess(&mut self) -> Result<(), SolverError> {
        let RoundState::AwaitingFeedback(pending) = &self.state else {
            return Err(SolverError::OutOfTurn("awaiting feedback"));
        };
        debug!("guess '{}' rejected", pending.word);
        self.state = RoundState::Searching;
        Ok(())
    }

    /// How many candidates would survive `feedback` for the pending guess
    ///
    /// # Errors
    /// `OutOfTurn` unless a guess is awaiting feedback.
    pub fn consistent_count(&self, feedback: FeedbackCode) -> Result<usize, SolverError> {
        let guess = self.pending_id()?;
        Ok(self
            .candidates
            .count_consistent(self.engine.cache(), guess, feedback))
    }

    /// Filter the candidates by the feedback for the pending guess
    ///
    /// # Errors
    /// - `OutOfTurn` unless a guess is awaiting feedback
    /// - `NoSolution` if no candidate matches; the session is then terminal
    pub fn apply_feedback(&mut self, feedback: FeedbackCode) -> Result<&RoundState, SolverError> {
        let guess = self.pending_id()?;
        let word = self.engine.cache().index().word(guess).clone();
        self.state = RoundState::Filtering;

        let narrowed = self
            .candidates
            .narrowed(self.engine.cache(), guess, feedback);
        self.history.push((word, feedback));

        match narrowed {
            Ok(candidates) => {
                debug!(
                    "feedback {feedback} narrowed {} candidates to {}",
                    self.candidates.len(),
                    candidates.len()
                );
                self.candidates = candidates;
                self.settle();
                Ok(&self.state)
            }
            Err(err) => {
                warn!("feedback {feedback} matches none of {} candidates", self.candidates.len());
                self.state = RoundState::Terminal(Outcome::NoSolution);
                Err(err)
            }
        }
    }

    fn pending_id(&self) -> Result<usize, SolverError> {
        let RoundState::AwaitingFeedback(pending) = &self.state else {
            return Err(SolverError::OutOfTurn("awaiting feedback"));
        };
        self.engine.cache().id(&pending.word)
    }

    /// Searching, or Terminal once the candidate set is exhausted
    fn settle(&mut self) {
        self.state = match self.candidates.ids() {
            [] => RoundState::Terminal(Outcome::NoSolution),
            [only] => RoundState::Terminal(Outcome::Solved(
                self.engine.cache().index().word(*only).clone(),
            )),
            _ => RoundState::Searching,
        };
    }
}

/// Drop repeated ids, keeping first occurrences in order
fn unique(mut ids: Vec<usize>) -> Vec<usize> {
    let mut seen = FxHashSet::default();
    ids.retain(|&id| seen.insert(id));
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    fn play_against(session: &mut Session, answer: &Word, max_rounds: usize) -> usize {
        for round in 1..=max_rounds {
            let guess = session.next_guess(None).unwrap();
            session
                .apply_feedback(FeedbackCode::calculate(&guess.word, answer))
                .unwrap();
            if matches!(session.state(), RoundState::Terminal(_)) {
                return round;
            }
        }
        panic!("not solved within {max_rounds} rounds");
    }

    #[test]
    fn golden_three_word_game() {
        let vocabulary = words(&["crane", "slate", "trace"]);
        let answer = Word::new("trace").unwrap();
        let mut session =
            Session::prepare(&vocabulary, &vocabulary, SessionConfig::new(1), None).unwrap();

        let first = session.next_guess(None).unwrap();
        assert_eq!(first.word.text(), "crane");
        assert!((first.score - 3f64.log2()).abs() < 1e-12);

        let feedback = FeedbackCode::calculate(&first.word, &answer);
        assert_eq!(feedback.to_string(), "YGGBG");
        session.apply_feedback(feedback).unwrap();

        let remaining: Vec<&str> = session.candidates().iter().map(|w| w.text()).collect();
        assert_eq!(remaining, ["trace"]);
        assert_eq!(session.state(), &RoundState::Terminal(Outcome::Solved(answer)));
        assert_eq!(session.round(), 1);
        assert_eq!(session.guesses_used(), 2);
    }

    #[test]
    fn golden_game_finishes_within_three_rounds_for_every_answer() {
        let vocabulary = words(&["crane", "slate", "trace"]);
        for answer in &vocabulary {
            for steps in 1..=2 {
                let mut session =
                    Session::prepare(&vocabulary, &vocabulary, SessionConfig::new(steps), None)
                        .unwrap();
                assert!(play_against(&mut session, answer, 3) <= 3);
                assert_eq!(
                    session.state(),
                    &RoundState::Terminal(Outcome::Solved(answer.clone()))
                );
            }
        }
    }

    #[test]
    fn larger_game_reaches_answer() {
        let guesses = words(&[
            "crane", "slate", "trace", "irate", "grate", "crate", "plate", "raise", "arise",
            "stare", "snare", "share", "audio", "pious", "tough",
        ]);
        let solutions = guesses[..12].to_vec();

        for answer in &solutions {
            let config = SessionConfig::new(2).with_decay(true);
            let mut session = Session::prepare(&guesses, &solutions, config, None).unwrap();
            play_against(&mut session, answer, solutions.len());
            assert_eq!(
                session.state(),
                &RoundState::Terminal(Outcome::Solved(answer.clone()))
            );
            assert!(session.guesses_used() >= session.round());
        }
    }

    #[test]
    fn solution_missing_from_guess_list_still_indexed() {
        let guesses = words(&["crane", "slate"]);
        let solutions = words(&["slate", "trace"]);

        let mut session =
            Session::prepare(&guesses, &solutions, SessionConfig::default(), None).unwrap();
        assert_eq!(session.candidate_count(), 2);
        assert_eq!(session.guess_pool_len(), 2);

        let guess = session.next_guess(None).unwrap();
        assert!(guesses.contains(&guess.word));
    }

    #[test]
    fn suggested_guess_leaves_the_pool() {
        let vocabulary = words(&["crane", "slate", "trace", "irate"]);
        let mut session =
            Session::prepare(&vocabulary, &vocabulary, SessionConfig::new(1), None).unwrap();

        session.next_guess(None).unwrap();
        assert_eq!(session.guess_pool_len(), 3);
    }

    #[test]
    fn rejected_guess_is_not_suggested_again() {
        let vocabulary = words(&["crane", "slate", "trace", "irate"]);
        let mut session =
            Session::prepare(&vocabulary, &vocabulary, SessionConfig::new(1), None).unwrap();

        let first = session.next_guess(None).unwrap();
        session.reject_guess().unwrap();
        assert_eq!(session.state(), &RoundState::Searching);
        assert_eq!(session.round(), 0);

        let second = session.next_guess(None).unwrap();
        assert_ne!(first.word, second.word);
    }

    #[test]
    fn impossible_feedback_ends_with_no_solution() {
        let vocabulary = words(&["crane", "slate", "trace"]);
        let mut session =
            Session::prepare(&vocabulary, &vocabulary, SessionConfig::new(1), None).unwrap();
        session.next_guess(None).unwrap();

        // Nothing in the vocabulary misses on every letter of CRANE
        let all_miss = FeedbackCode::new(0);
        assert_eq!(session.consistent_count(all_miss), Ok(0));
        assert_eq!(session.apply_feedback(all_miss), Err(SolverError::NoSolution));
        assert_eq!(session.state(), &RoundState::Terminal(Outcome::NoSolution));
        assert!(matches!(
            session.next_guess(None),
            Err(SolverError::OutOfTurn(_))
        ));
    }

    #[test]
    fn calls_out_of_turn_are_errors() {
        let vocabulary = words(&["crane", "slate", "trace"]);
        let mut session =
            Session::prepare(&vocabulary, &vocabulary, SessionConfig::new(1), None).unwrap();

        assert!(matches!(
            session.apply_feedback(FeedbackCode::ALL_HIT),
            Err(SolverError::OutOfTurn(_))
        ));
        assert!(session.reject_guess().is_err());

        session.next_guess(None).unwrap();
        assert!(matches!(
            session.next_guess(None),
            Err(SolverError::OutOfTurn(_))
        ));
    }

    #[test]
    fn single_solution_is_terminal_immediately() {
        let guesses = words(&["crane", "slate"]);
        let solutions = words(&["slate"]);
        let session =
            Session::prepare(&guesses, &solutions, SessionConfig::default(), None).unwrap();

        assert_eq!(
            session.state(),
            &RoundState::Terminal(Outcome::Solved(solutions[0].clone()))
        );
        assert_eq!(session.guesses_used(), 1);
    }

    #[test]
    fn repeated_solutions_count_once() {
        let guesses = words(&["crane", "slate", "trace"]);
        let solutions = words(&["crane", "slate", "crane"]);
        let mut session =
            Session::prepare(&guesses, &solutions, SessionConfig::new(1), None).unwrap();
        assert_eq!(session.candidate_count(), 2);

        let answer = Word::new("crane").unwrap();
        play_against(&mut session, &answer, 2);
        assert_eq!(session.state(), &RoundState::Terminal(Outcome::Solved(answer)));

        let remaining: Vec<&str> = session.candidates().iter().map(|w| w.text()).collect();
        assert_eq!(remaining, ["crane"]);
    }

    #[test]
    fn repeated_guesses_count_once() {
        let guesses = words(&["crane", "crane", "slate"]);
        let solutions = words(&["slate", "trace"]);
        let session =
            Session::prepare(&guesses, &solutions, SessionConfig::default(), None).unwrap();
        assert_eq!(session.guess_pool_len(), 2);
    }

    #[test]
    fn unknown_words_are_rejected() {
        let vocabulary = words(&["crane", "slate"]);
        let engine = EntropyEngine::precompute(&vocabulary, 2, None);
        let strangers = words(&["trace"]);

        assert!(matches!(
            Session::new(engine, &vocabulary, &strangers, SessionConfig::default()),
            Err(SolverError::UnknownWord(_))
        ));
    }

    #[test]
    fn decaying_depth_bottoms_out_at_one() {
        let config = SessionConfig::new(3).with_decay(true);
        let depths: Vec<usize> = (0..5).map(|round| config.steps_for_round(round)).collect();
        assert_eq!(depths, [3, 2, 1, 1, 1]);

        let fixed = SessionConfig::new(2);
        assert_eq!(fixed.steps_for_round(7), 2);
        assert_eq!(SessionConfig::new(0).steps_for_round(0), 1);
    }
}
