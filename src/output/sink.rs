//! Terminal implementation of the core's output capability

use crate::core::OutputSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {elapsed_precise}";

/// Prints text to stdout and shows progress as `indicatif` bars
///
/// A fresh bar starts whenever the reported total changes and is cleared once
/// `done` reaches the total.
#[derive(Default)]
pub struct TerminalSink {
    bar: Mutex<Option<ProgressBar>>,
}

impl TerminalSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn new_bar(total: usize) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template(BAR_TEMPLATE)
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    ProgressBar::new(total as u64).with_style(style)
}

impl OutputSink for TerminalSink {
    fn render(&self, text: &str) {
        match self.bar.lock().ok().as_deref() {
            Some(Some(bar)) => bar.println(text),
            _ => println!("{text}"),
        }
    }

    fn report_progress(&self, done: usize, total: usize) {
        let Ok(mut slot) = self.bar.lock() else {
            return;
        };

        let bar = match slot.take() {
            Some(bar) if bar.length() == Some(total as u64) => bar,
            Some(stale) => {
                stale.finish_and_clear();
                new_bar(total)
            }
            None => new_bar(total),
        };

        bar.set_position(done as u64);
        if done >= total {
            bar.finish_and_clear();
        } else {
            *slot = Some(bar);
        }
    }
}
