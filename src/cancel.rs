//! Cooperative cancellation: a worker loop that stops when asked, with
//! join-before-read semantics.
//!
//! Cancelling is an asynchronous request; the worker may be mid-step. The
//! caller must call [`Worker::join`] before reading shared state, and any
//! cleanup the worker registered runs on every exit path, including a
//! forced stop and a panicking step.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crossbeam::channel::{bounded, Receiver, Sender};

use crate::failure::Failure;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    /// Request cancellation. The worker stops at its next step boundary.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// How the worker's run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The step function reported it was finished.
    Completed,
    /// The worker stopped because its token was cancelled.
    Cancelled,
}

// Sends the outcome on drop, so the handoff happens even when the step
// function panics.
struct ExitGuard {
    done: Sender<Outcome>,
    token: CancelToken,
    cleanup: Option<Box<dyn FnOnce() + Send>>,
}

impl Drop for ExitGuard {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
        let outcome = if self.token.is_cancelled() {
            Outcome::Cancelled
        } else {
            Outcome::Completed
        };
        let _ = self.done.send(outcome);
    }
}

/// A background unit of work producing items into an explicitly owned,
/// mutex-guarded container. There is no global shared state: the container
/// lives in the `Worker` and is handed back by [`Worker::join`].
pub struct Worker<T> {
    handle: JoinHandle<()>,
    results: Arc<Mutex<Vec<T>>>,
    done: Receiver<Outcome>,
}

impl<T: Send + 'static> Worker<T> {
    /// Spawn a worker that calls `step(iteration)` until the token is
    /// cancelled or `step` returns `None`.
    pub fn spawn<F>(token: CancelToken, step: F) -> Self
    where
        F: FnMut(usize) -> Option<T> + Send + 'static,
    {
        Worker::spawn_with_cleanup(token, step, || {})
    }

    /// Like [`Worker::spawn`], with a cleanup action that runs when the
    /// worker exits for any reason.
    pub fn spawn_with_cleanup<F, C>(token: CancelToken, mut step: F, cleanup: C) -> Self
    where
        F: FnMut(usize) -> Option<T> + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        let results = Arc::new(Mutex::new(Vec::new()));
        let shared = Arc::clone(&results);
        let (done_tx, done_rx) = bounded(1);
        let worker_token = token.clone();
        let handle = thread::spawn(move || {
            let _guard = ExitGuard {
                done: done_tx,
                token: worker_token.clone(),
                cleanup: Some(Box::new(cleanup)),
            };
            let mut iteration = 0;
            while !worker_token.is_cancelled() {
                match step(iteration) {
                    Some(item) => {
                        if let Ok(mut results) = shared.lock() {
                            results.push(item);
                        }
                    }
                    None => break,
                }
                iteration += 1;
            }
        });
        Worker {
            handle,
            results,
            done: done_rx,
        }
    }

    /// Block until the worker acknowledges termination, then hand back its
    /// outcome and everything it produced. Shared state is only safe to
    /// read once this returns.
    pub fn join(self) -> Result<(Outcome, Vec<T>), Failure> {
        let outcome = self.done.recv()?;
        self.handle
            .join()
            .map_err(|_| Failure::assertion("worker thread panicked mid-step"))?;
        let results = match self.results.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        Ok((outcome, results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::FailureKind;
    use std::time::Duration;

    #[test]
    fn test_worker_runs_to_completion() {
        let worker = Worker::spawn(CancelToken::new(), |i| if i < 3 { Some(i * 10) } else { None });
        let (outcome, results) = worker.join().unwrap();
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(results, vec![0, 10, 20]);
    }

    #[test]
    fn test_cancel_stops_the_worker() {
        let token = CancelToken::new();
        let worker = Worker::spawn(token.clone(), |i| {
            thread::sleep(Duration::from_millis(1));
            Some(i)
        });
        thread::sleep(Duration::from_millis(10));
        token.cancel();
        let (outcome, _results) = worker.join().unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_pre_cancelled_token_produces_nothing() {
        let token = CancelToken::new();
        token.cancel();
        let worker = Worker::spawn(token, |i| Some(i));
        let (outcome, results) = worker.join().unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
        assert!(results.is_empty());
    }

    #[test]
    fn test_cleanup_runs_on_cancellation() {
        let cleaned = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cleaned);
        let token = CancelToken::new();
        token.cancel();
        let worker = Worker::spawn_with_cleanup(
            token,
            |i| Some(i),
            move || flag.store(true, Ordering::SeqCst),
        );
        worker.join().unwrap();
        assert!(cleaned.load(Ordering::SeqCst));
    }

    #[test]
    fn test_cleanup_runs_when_step_panics() {
        let cleaned = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cleaned);
        let worker: Worker<usize> = Worker::spawn_with_cleanup(
            CancelToken::new(),
            |_| panic!("step blew up"),
            move || flag.store(true, Ordering::SeqCst),
        );
        let failure = worker.join().unwrap_err();
        assert_eq!(failure.kind(), FailureKind::Assertion);
        assert!(cleaned.load(Ordering::SeqCst));
    }
}
