//! Benchmark command
//!
//! Plays automated games over many answers sharing one precomputed table.

use super::game::{HiddenAnswer, play};
use crate::core::{OutputSink, SilentSink, Word};
use crate::solver::{EntropyEngine, Session, SessionConfig};
use crate::wordlists::merge_vocabularies;
use anyhow::Result;
use log::warn;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Play one game for each of the first `count` solutions
///
/// Games run one after another; each search still fans out over the worker
/// pool. `sink` receives one progress tick per finished game.
///
/// # Errors
/// Returns an error if a game fails for any reason other than running out of
/// candidates, which is counted as a failure instead.
pub fn run_benchmark(
    guesses: &[Word],
    solutions: &[Word],
    count: usize,
    config: SessionConfig,
    sink: &dyn OutputSink,
) -> Result<BenchmarkResult> {
    let vocabulary = merge_vocabularies(guesses, solutions);
    let engine = EntropyEngine::precompute(&vocabulary, solutions.len(), Some(sink));
    let targets: Vec<&Word> = solutions.iter().take(count).collect();

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    for (done, &target) in targets.iter().enumerate() {
        let mut session = Session::new(engine.clone(), guesses, solutions, config)?;
        let report = play(&mut session, &mut HiddenAnswer::new(target.clone()), &SilentSink)?;

        match report.guesses() {
            Some(used) => {
                total_guesses += used;
                min_guesses = min_guesses.min(used);
                max_guesses = max_guesses.max(used);
                *distribution.entry(used).or_insert(0) += 1;
            }
            None => {
                warn!("failed to solve '{target}'");
                failures.push(target.clone());
            }
        }
        sink.report_progress(done + 1, targets.len());
    }

    let duration = start.elapsed();
    let total_words = targets.len();
    let solved = total_words - failures.len();

    Ok(BenchmarkResult {
        total_words,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
