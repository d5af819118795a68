//! Category 7: Assertion / Invariant Violation
//! Example: Sanity Check Failing on Supposedly Unreachable Input
//!
//! Unexpected failures always escalate: this demonstration ends with the
//! fatal handler logging the violation and exiting with status 1.
//!
//! Run with: cargo run --bin p7_failed_assertion

use failure_taxonomy::banner::section;
use failure_taxonomy::demo::run_demo;
use failure_taxonomy::Failure;

/// Percentages arrive pre-validated; anything outside 0..=100 is a bug in
/// the caller, not an input error.
fn render_progress(percent: u32) -> Result<String, Failure> {
    if percent > 100 {
        return Err(Failure::assertion(format!(
            "progress {percent}% exceeds 100%, upstream validation is broken"
        )));
    }
    let filled = (percent as usize) / 5;
    Ok(format!("[{}{}] {percent}%", "#".repeat(filled), ".".repeat(20 - filled)))
}

fn main() {
    run_demo("Assertion: Invariant Violation", |_logger| {
        println!("{}", section("Validated Inputs"));
        for percent in [0, 40, 100] {
            println!("  {}", render_progress(percent)?);
        }

        println!("\n{}", section("Unreachable Input (a bug, not a demo)"));
        println!("  feeding 250% past the validator...");

        // This violation was not provoked on purpose by the demonstration
        // path; it escapes to run_demo, which logs it as unexpected and
        // exits with status 1. The Key Points below are never reached.
        render_progress(250)?;

        println!("\n{}", section("Key Points"));
        println!("(unreachable)");
        Ok(())
    });
}
