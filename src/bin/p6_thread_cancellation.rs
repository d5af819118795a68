//! Category 6: Concurrency Cancellation
//! Example: Cancelling a Worker and Joining Before Reading Shared State
//!
//! Run with: cargo run --bin p6_thread_cancellation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde::Serialize;

use failure_taxonomy::banner::section;
use failure_taxonomy::cancel::{CancelToken, Outcome, Worker};
use failure_taxonomy::demo::run_demo;
use failure_taxonomy::Failure;

#[derive(Serialize)]
struct RunSummary {
    outcome: String,
    samples_collected: usize,
    cleanup_ran: bool,
}

fn main() {
    run_demo("Cancelled: Worker Stopped Mid-Run", |logger| {
        println!("{}", section("Worker That Finishes On Its Own"));
        let worker = Worker::spawn(CancelToken::new(), |i| {
            if i < 5 {
                Some(i * i)
            } else {
                None
            }
        });
        let (outcome, samples) = worker.join()?;
        println!("  outcome = {outcome:?}, samples = {samples:?}");

        println!("\n{}", section("Worker Cancelled Mid-Run (provoked)"));
        let cleaned = Arc::new(AtomicBool::new(false));
        let cleanup_flag = Arc::clone(&cleaned);
        let token = CancelToken::new();
        let worker = Worker::spawn_with_cleanup(
            token.clone(),
            |i| {
                // Each step simulates a slow sample.
                thread::sleep(Duration::from_millis(5));
                Some(i)
            },
            move || cleanup_flag.store(true, Ordering::SeqCst),
        );
        thread::sleep(Duration::from_millis(30));
        token.cancel();
        println!("  cancellation requested, waiting for acknowledgement...");

        // Shared state is only safe to read after join returns.
        let (outcome, samples) = worker.join()?;
        if outcome == Outcome::Cancelled {
            logger.log_expected(&Failure::cancelled("worker stopped at a step boundary"));
        }
        logger.log_value(
            "run summary",
            &RunSummary {
                outcome: format!("{outcome:?}"),
                samples_collected: samples.len(),
                cleanup_ran: cleaned.load(Ordering::SeqCst),
            },
        );

        println!("\n{}", section("Key Points"));
        println!("1. Cancellation is a request; the worker may be mid-step");
        println!("2. join() is the only way to read what the worker produced");
        println!("3. Registered cleanup runs even when termination is forced");
        println!("4. The results container is owned by the worker, not a global");
        Ok(())
    });
}
