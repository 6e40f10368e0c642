//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod game;
pub mod interactive;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use game::{FeedbackSource, GameReport, GuessStep, HiddenAnswer, Reply, play};
pub use interactive::Keyboard;
pub use solve::{SolveConfig, SolveResult, choose_answer, solve_word};
