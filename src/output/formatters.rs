//! Formatting utilities for terminal output

use crate::core::{FeedbackCode, Mark, Word};
use colored::{ColoredString, Colorize};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: FeedbackCode) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Miss => '⬜',
            Mark::Present => '🟨',
            Mark::Hit => '🟩',
        })
        .collect()
}

fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase()).bold();
    match mark {
        Mark::Hit => text.black().on_green(),
        Mark::Present => text.black().on_yellow(),
        Mark::Miss => text.white().on_bright_black(),
    }
}

/// Guess letters on coloured tiles, the way the board shows them
#[must_use]
pub fn colored_tiles(word: &Word, feedback: FeedbackCode) -> String {
    word.text()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| tile(letter, mark).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 6.0; // Roughly log2(64)
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_to_emoji_all_miss() {
        assert_eq!(feedback_to_emoji(FeedbackCode::new(0)), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn feedback_to_emoji_all_hit() {
        assert_eq!(feedback_to_emoji(FeedbackCode::ALL_HIT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn feedback_to_emoji_follows_positions() {
        let feedback: FeedbackCode = "YGGBG".parse().unwrap();
        assert_eq!(feedback_to_emoji(feedback), "🟨🟩🟩⬜🟩");
    }

    #[test]
    fn tiles_keep_letter_order() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let tiles = colored_tiles(&word, FeedbackCode::new(0));
        assert_eq!(tiles, " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn entropy_bar_clamps() {
        assert_eq!(entropy_bar(12.0, 4), "████");
        assert_eq!(entropy_bar(-1.0, 4), "░░░░");
    }
}
