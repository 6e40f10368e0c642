//! Entropy search and game sessions
//!
//! Precomputed tables (`cache`, `log_table`), the worker pool that fans out
//! guess scoring (`scheduler`), the entropy engine itself, and the session
//! state machine that drivers step through.

mod cache;
mod candidates;
mod engine;
pub mod entropy;
mod log_table;
pub(crate) mod progress;
pub mod scheduler;

pub use cache::FeedbackCache;
pub use candidates::CandidateSet;
pub use engine::{Outcome, RoundState, Session, SessionConfig};
pub use entropy::{EntropyEngine, ScoredGuess};
pub use log_table::LogTable;
pub use scheduler::{TaskHandle, WorkScheduler, hardware_concurrency};
