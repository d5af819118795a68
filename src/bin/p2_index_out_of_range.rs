//! Category 2: Bounds / Indexing Failures
//! Example: Collection Access Out of Range
//!
//! Run with: cargo run --bin p2_index_out_of_range

use failure_taxonomy::banner::section;
use failure_taxonomy::demo::run_demo;
use failure_taxonomy::Failure;

/// Bounds-checked lookup that reports the offending index.
fn score_at(scores: &[u32], index: usize) -> Result<u32, Failure> {
    scores.get(index).copied().ok_or_else(|| {
        Failure::bounds(format!(
            "index {index} out of range for slice of length {}",
            scores.len()
        ))
        .with_context("scores")
    })
}

fn main() {
    run_demo("Bounds: Index Out of Range", |logger| {
        let scores = vec![87, 93, 78, 95];

        println!("{}", section("In-Range Access"));
        for index in [0, 3] {
            println!("  scores[{index}] = {}", score_at(&scores, index)?);
        }

        println!("\n{}", section("Out-of-Range Access (provoked)"));
        match score_at(&scores, 9) {
            Ok(score) => println!("  scores[9] = {score}"),
            Err(failure) => logger.log_expected(&failure),
        }

        println!("\n{}", section("Key Points"));
        println!("1. slice.get returns Option instead of panicking");
        println!("2. The failure message carries index and length");
        println!("3. with_context names the collection being indexed");
        Ok(())
    });
}
