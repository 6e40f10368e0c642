//! Fixed-size worker pool
//!
//! A FIFO queue of boxed tasks behind a mutex and condition variable, drained
//! by a fixed set of threads. Each submitted task gets a handle that yields its
//! result. A pool lives for one fork-join region and is shut down (explicitly
//! or on drop) before that region returns.

use crate::core::SolverError;
use log::debug;
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

type Task = Box<dyn FnOnce() + Send + 'static>;

/// Number of threads the hardware can run at once (at least 1)
#[must_use]
pub fn hardware_concurrency() -> usize {
    thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}

#[derive(Default)]
struct Queue {
    tasks: VecDeque<Task>,
    stopping: bool,
}

#[derive(Default)]
struct Shared {
    queue: Mutex<Queue>,
    available: Condvar,
}

impl Shared {
    // Tasks run outside the lock, so a poisoned queue still holds consistent data.
    fn lock(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle to the result of a submitted task
pub struct TaskHandle<T> {
    result: Receiver<T>,
}

impl<T> TaskHandle<T> {
    /// Block until the task finishes
    ///
    /// # Errors
    /// `TaskLost` if the task was dropped by shutdown or panicked before
    /// producing a value.
    pub fn wait(self) -> Result<T, SolverError> {
        self.result.recv().map_err(|_| SolverError::TaskLost)
    }
}

/// Worker pool with a shared FIFO task queue
pub struct WorkScheduler {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkScheduler {
    /// Start a pool of `threads` workers (at least one)
    #[must_use]
    pub fn new(threads: usize) -> Self {
        let shared = Arc::new(Shared::default());
        let workers = (0..threads.max(1))
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || worker_loop(&shared))
            })
            .collect::<Vec<_>>();
        debug!("work scheduler started with {} workers", workers.len());
        Self { shared, workers }
    }

    /// Pool sized to the hardware
    #[must_use]
    pub fn with_hardware_concurrency() -> Self {
        Self::new(hardware_concurrency())
    }

    /// Number of worker threads
    #[must_use]
    pub fn threads(&self) -> usize {
        self.workers.len()
    }

    /// Queue a task and wake one worker
    ///
    /// # Errors
    /// `SchedulerClosed` once shutdown has been requested.
    pub fn submit<F, T>(&self, task: F) -> Result<TaskHandle<T>, SolverError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (sender, result) = mpsc::channel();
        {
            let mut queue = self.shared.lock();
            if queue.stopping {
                return Err(SolverError::SchedulerClosed);
            }
            queue.tasks.push_back(Box::new(move || {
                // The caller may have stopped waiting; nothing to do then.
                let _ = sender.send(task());
            }));
        }
        self.shared.available.notify_one();
        Ok(TaskHandle { result })
    }

    /// Stop accepting work, wake every worker and join them
    ///
    /// Tasks still queued when the workers see the stop flag are dropped, and
    /// their handles report `TaskLost`. Calling this twice is a no-op.
    ///
    /// # Errors
    /// `WorkerPanicked` if a worker thread could not be joined cleanly.
    pub fn shutdown(&mut self) -> Result<(), SolverError> {
        let dropped = {
            let mut queue = self.shared.lock();
            queue.stopping = true;
            std::mem::take(&mut queue.tasks).len()
        };
        self.shared.available.notify_all();

        let mut panicked = false;
        for worker in self.workers.drain(..) {
            panicked |= worker.join().is_err();
        }
        if dropped > 0 {
            debug!("work scheduler dropped {dropped} queued tasks on shutdown");
        }

        if panicked {
            Err(SolverError::WorkerPanicked)
        } else {
            Ok(())
        }
    }
}

impl Drop for WorkScheduler {
    fn drop(&mut self) {
        if !self.workers.is_empty() {
            let _ = self.shutdown();
        }
    }
}

fn worker_loop(shared: &Shared) {
    loop {
        let task = {
            let mut queue = shared.lock();
            loop {
                if queue.stopping {
                    return;
                }
                if let Some(task) = queue.tasks.pop_front() {
                    break task;
                }
                queue = shared
                    .available
                    .wait(queue)
                    .unwrap_or_else(PoisonError::into_inner);
            }
        };
        task();
    }
}
