//! Wordle Lookahead
//!
//! A Wordle guess suggester that ranks guesses by expected information, with
//! an optional multi-step lookahead searched in parallel.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_lookahead::core::Word;
//! use wordle_lookahead::solver::EntropyEngine;
//!
//! let words: Vec<Word> = ["crane", "slate", "trace"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let engine = EntropyEngine::precompute(&words, words.len(), None);
//! let best = engine.best_guess(&words, &words, 1, None).unwrap();
//! println!("{} scores {:.3} bits", best.word, best.score);
//! ```

// Core domain types
pub mod core;

// Tables, scheduler, entropy search and sessions
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
