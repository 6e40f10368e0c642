//! Terminal output formatting
//!
//! Display utilities for command results, coloured tiles and the terminal
//! progress sink.

pub mod display;
pub mod formatters;
mod sink;

pub use display::{print_analysis_result, print_benchmark_result, print_game_report};
pub use sink::TerminalSink;
