//! Display functions for command results

use super::formatters::{colored_tiles, entropy_bar, feedback_to_emoji};
use crate::commands::{AnalysisResult, BenchmarkResult, GameReport};
use crate::core::Word;
use crate::solver::Outcome;
use colored::Colorize;

/// Print a finished game, optionally revealing the hidden answer
pub fn print_game_report(report: &GameReport, answer: Option<&Word>, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    if let Some(answer) = answer {
        println!(
            "Solving: {}",
            answer.text().to_uppercase().bright_yellow().bold()
        );
        println!("{}", "─".repeat(60).cyan());
    }

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_tiles(&step.word, step.feedback),
            feedback_to_emoji(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {:.3} bits", step.score);
            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    match &report.outcome {
        Outcome::Solved(word) => println!(
            "{}",
            format!(
                "✅ {} in {} guesses ({:.2}s)",
                word.text().to_uppercase(),
                report.guesses_used,
                report.duration.as_secs_f64()
            )
            .green()
            .bold()
        ),
        Outcome::NoSolution => println!(
            "{}",
            "❌ No word matches that feedback".red().bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   {}-step:      {}",
        result.steps,
        format!("{:.3} bits", result.lookahead_entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if !result.failures.is_empty() {
        let failed: Vec<String> = result
            .failures
            .iter()
            .map(|word| word.text().to_uppercase())
            .collect();
        println!(
            "   Failures:         {}",
            failed.join(", ").red()
        );
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }
}
