//! Entropy-based guess scoring
//!
//! Implements single-step and k-step Shannon entropy over the cached feedback
//! table, and the parallel search for the best-scoring guess.

mod calculator;
mod selector;

pub use calculator::EntropyEngine;
pub use selector::ScoredGuess;
