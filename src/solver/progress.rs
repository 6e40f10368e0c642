//! Progress polling for long-running parallel work
//!
//! Workers bump a relaxed atomic counter. A watcher thread samples it on a fixed
//! interval and forwards the value to the sink. Sampling is advisory and never
//! holds up the work itself.

use crate::core::OutputSink;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread::{self, Thread};
use std::time::Duration;

/// How often the watcher samples the counter
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

struct StopWatcher<'a> {
    finished: &'a AtomicBool,
    watcher: &'a Thread,
}

impl Drop for StopWatcher<'_> {
    fn drop(&mut self) {
        self.finished.store(true, Ordering::Release);
        self.watcher.unpark();
    }
}

/// Run `work` while reporting `completed / total` to `sink`
///
/// The sink receives a final report after `work` returns.
pub(crate) fn watch<R>(
    completed: &AtomicUsize,
    total: usize,
    sink: Option<&dyn OutputSink>,
    work: impl FnOnce() -> R,
) -> R {
    let Some(sink) = sink else {
        return work();
    };

    let finished = AtomicBool::new(false);
    let result = thread::scope(|scope| {
        let watcher = scope.spawn(|| {
            while !finished.load(Ordering::Acquire) {
                sink.report_progress(completed.load(Ordering::Relaxed), total);
                thread::park_timeout(POLL_INTERVAL);
            }
        });
        // Stops the watcher on unwind too, or the scope would never join it
        let _stop = StopWatcher {
            finished: &finished,
            watcher: watcher.thread(),
        };
        work()
    });

    sink.report_progress(completed.load(Ordering::Relaxed), total);
    result
}
