//! Interactive play against a real board
//!
//! The solver suggests a word, the player types what the game showed.

use super::game::{FeedbackSource, Reply};
use crate::core::FeedbackCode;
use crate::output::formatters::{colored_tiles, entropy_bar};
use crate::solver::{ScoredGuess, Session};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Feedback typed by a player, one line per guess
///
/// Accepts five of G/Y/B (or the tile emoji), `win` for all green and `N` when
/// the game refused the word. Malformed or impossible feedback is asked for
/// again.
pub struct Keyboard<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl Keyboard<StdinLock<'static>, Stdout> {
    /// Read from stdin, redrawing the terminal every round
    #[must_use]
    pub fn terminal() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            clear_screen: true,
        }
    }
}

impl<R: BufRead, W: Write> Keyboard<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show_board(&mut self, guess: &ScoredGuess, session: &Session) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        writeln!(self.output, "{}", "─".repeat(60).cyan())?;
        for (word, feedback) in session.history() {
            writeln!(
                self.output,
                "  {}   {}",
                colored_tiles(word, *feedback),
                word.text().to_uppercase().bright_white()
            )?;
        }
        writeln!(self.output, "{}", "─".repeat(60).cyan())?;

        let count = session.candidate_count();
        writeln!(
            self.output,
            "Turn {}: {count} candidates remaining",
            session.round() + 1
        )?;
        if count <= 10 {
            let words: Vec<String> = session
                .candidates()
                .iter()
                .map(|word| word.text().to_uppercase())
                .collect();
            writeln!(self.output, "  {}", words.join(" ").bright_black())?;
        }
        writeln!(
            self.output,
            "\nSuggested guess: {}  [{}] {:.3} bits\n",
            guess.word.text().to_uppercase().bright_yellow().bold(),
            entropy_bar(guess.score, 20).green(),
            guess.score
        )?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<String> {
        write!(self.output, "Feedback (G/Y/B, 'win', or N if rejected): ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading feedback")?;
        if read == 0 {
            bail!("input closed before feedback was entered");
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> FeedbackSource for Keyboard<R, W> {
    fn reply(&mut self, guess: &ScoredGuess, session: &Session) -> Result<Reply> {
        self.show_board(guess, session)?;

        loop {
            let input = self.prompt()?;
            let feedback = match input.to_lowercase().as_str() {
                "n" => return Ok(Reply::Rejected),
                "win" | "correct" | "solved" => FeedbackCode::ALL_HIT,
                _ => {
                    let Some(feedback) = FeedbackCode::parse(&input) else {
                        writeln!(
                            self.output,
                            "{}",
                            "Invalid feedback! Enter five of G, Y or B, e.g. BYGBB".red()
                        )?;
                        continue;
                    };
                    feedback
                }
            };

            if session.consistent_count(feedback)? == 0 {
                writeln!(
                    self.output,
                    "{}",
                    format!("No remaining word gives {feedback}; check the tiles and try again")
                        .red()
                )?;
                continue;
            }
            return Ok(Reply::Feedback(feedback));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::game::play;
    use crate::core::{SilentSink, Word};
    use crate::solver::{Outcome, SessionConfig};
    use crate::wordlists::words_from_slice;
    use std::io::Cursor;

    fn session() -> Session {
        let words = words_from_slice(&["crane", "slate", "trace"]);
        Session::prepare(&words, &words, SessionConfig::new(1), None).unwrap()
    }

    fn pending(session: &mut Session) -> ScoredGuess {
        session.next_guess(None).unwrap()
    }

    #[test]
    fn parses_typed_feedback() {
        let mut session = session();
        let guess = pending(&mut session);
        let mut keyboard = Keyboard::new(Cursor::new("yggbg\n"), Vec::new());

        let reply = keyboard.reply(&guess, &session).unwrap();
        assert_eq!(reply, Reply::Feedback("YGGBG".parse().unwrap()));
    }

    #[test]
    fn n_means_rejected() {
        let mut session = session();
        let guess = pending(&mut session);
        let mut keyboard = Keyboard::new(Cursor::new("N\n"), Vec::new());

        assert_eq!(keyboard.reply(&guess, &session).unwrap(), Reply::Rejected);
    }

    #[test]
    fn reprompts_on_malformed_and_impossible_feedback() {
        let mut session = session();
        let guess = pending(&mut session);
        // "gg" is malformed; BBBBB matches no candidate for CRANE
        let mut keyboard = Keyboard::new(Cursor::new("gg\nbbbbb\nwin\n"), Vec::new());

        let reply = keyboard.reply(&guess, &session).unwrap();
        assert_eq!(reply, Reply::Feedback(FeedbackCode::ALL_HIT));

        let output = String::from_utf8(keyboard.into_output()).unwrap();
        assert!(output.contains("Invalid feedback"));
        assert!(output.contains("No remaining word gives BBBBB"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut session = session();
        let guess = pending(&mut session);
        let mut keyboard = Keyboard::new(Cursor::new(""), Vec::new());

        assert!(keyboard.reply(&guess, &session).is_err());
    }

    #[test]
    fn typed_game_reaches_the_answer() {
        let mut session = session();
        let mut keyboard = Keyboard::new(Cursor::new("YGGBG\n"), Vec::new());

        let report = play(&mut session, &mut keyboard, &SilentSink).unwrap();
        assert_eq!(
            report.outcome,
            Outcome::Solved(Word::new("trace").unwrap())
        );

        let output = String::from_utf8(keyboard.into_output()).unwrap();
        assert!(output.contains("CRANE"));
        assert!(output.contains("3 candidates remaining"));
    }
}
