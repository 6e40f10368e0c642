//! Output capability handed to the core
//!
//! The core never writes to a terminal itself. Anything it wants shown goes
//! through an `OutputSink`, which is `Sync` so progress can be reported from a
//! polling thread while workers run.

/// Minimal output surface: free text plus a progress counter
pub trait OutputSink: Sync {
    /// Show a line of text
    fn render(&self, text: &str);

    /// Report `done` of `total` units finished
    ///
    /// Called repeatedly while work runs and once more when it ends.
    fn report_progress(&self, done: usize, total: usize);
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl OutputSink for SilentSink {
    fn render(&self, _text: &str) {}

    fn report_progress(&self, _done: usize, _total: usize) {}
}
