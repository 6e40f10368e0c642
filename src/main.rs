//! Wordle Lookahead - CLI
//!
//! Suggests Wordle guesses by expected information, interactively or against
//! a hidden answer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_lookahead::{
    commands::{Keyboard, SolveConfig, analyze_word, play, run_benchmark, solve_word},
    core::{OutputSink, SilentSink, Word},
    output::{TerminalSink, print_analysis_result, print_benchmark_result, print_game_report},
    solver::{Session, SessionConfig},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_lookahead",
    about = "Wordle guess suggester using multi-step entropy lookahead",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess vocabulary, one word per line
    #[arg(long, global = true, default_value = "guesses.txt")]
    guesses: PathBuf,

    /// Solution vocabulary, one word per line
    #[arg(long, global = true, default_value = "answers.txt")]
    answers: PathBuf,

    /// Lookahead depth
    #[arg(short = 'k', long, global = true, default_value_t = 2)]
    steps: usize,

    /// Only guess words that can be the answer
    #[arg(short, long, global = true)]
    fast: bool,

    /// No rendering; print only the result
    #[arg(short, long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: type the board's feedback for each suggestion (default)
    Play,

    /// Solve a hidden word automatically
    Solve {
        /// The hidden answer (random solution if omitted)
        word: Option<String>,

        /// Show candidate counts and scores per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score one word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of solution words to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Load (`guess_pool`, `solutions`) from the configured files
///
/// In fast mode the guess pool is the solution list itself.
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let solutions = load_list(&cli.answers)?;
    let guesses = if cli.fast {
        solutions.clone()
    } else {
        load_list(&cli.guesses)?
    };
    Ok((guesses, solutions))
}

fn load_list(path: &Path) -> Result<Vec<Word>> {
    let words = load_from_file(path)
        .with_context(|| format!("reading word list {}", path.display()))?;
    anyhow::ensure!(!words.is_empty(), "word list {} is empty", path.display());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.steps > 0, "lookahead depth must be at least 1");

    let (guesses, solutions) = load_wordlists(&cli)?;

    let terminal = TerminalSink::new();
    let sink: &dyn OutputSink = if cli.silent { &SilentSink } else { &terminal };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.steps, &guesses, &solutions, sink),
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word, cli.steps);
            run_solve_command(&config, verbose, cli.silent, &guesses, &solutions, sink)
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, cli.steps, &guesses, &solutions, sink)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let config = SessionConfig::new(cli.steps).with_decay(true);
            let result = run_benchmark(&guesses, &solutions, count, config, sink)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_solve_command(
    config: &SolveConfig,
    verbose: bool,
    silent: bool,
    guesses: &[Word],
    solutions: &[Word],
    sink: &dyn OutputSink,
) -> Result<()> {
    let result = solve_word(config, guesses, solutions, sink);

    if silent {
        // Machine-readable: guess count, -1 on failure
        let count = result
            .ok()
            .and_then(|solved| solved.report.guesses())
            .and_then(|guesses| i64::try_from(guesses).ok())
            .unwrap_or(-1);
        println!("{count}");
        return Ok(());
    }

    let result = result?;
    print_game_report(&result.report, Some(&result.answer), verbose);
    Ok(())
}

fn run_play_command(
    steps: usize,
    guesses: &[Word],
    solutions: &[Word],
    sink: &dyn OutputSink,
) -> Result<()> {
    let mut session = Session::prepare(guesses, solutions, SessionConfig::new(steps), Some(sink))?;
    let mut keyboard = Keyboard::terminal();
    let report = play(&mut session, &mut keyboard, sink)?;
    print_game_report(&report, None, false);
    Ok(())
}
