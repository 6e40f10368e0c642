//! Core domain types for Wordle
//!
//! Words, feedback codes, dense word ids, the error type and the output
//! capability the solver reports through. Nothing here touches threads or
//! terminals.

mod error;
mod feedback;
mod index;
mod sink;
mod word;

pub use error::SolverError;
pub use feedback::{FeedbackCode, Mark, decode, encode};
pub use index::WordIndex;
pub use sink::{OutputSink, SilentSink};
pub use word::{WORD_LENGTH, Word, WordError};
