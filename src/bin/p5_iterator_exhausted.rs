//! Category 5: Iteration Exhaustion Failures
//! Example: Advancing a Drained Iterator, Absent-Element Lookup
//!
//! Run with: cargo run --bin p5_iterator_exhausted

use std::collections::HashMap;

use failure_taxonomy::banner::section;
use failure_taxonomy::demo::run_demo;
use failure_taxonomy::Failure;

/// Take the next element, reporting exhaustion instead of returning None.
fn next_job<I: Iterator<Item = String>>(queue: &mut I) -> Result<String, Failure> {
    queue
        .next()
        .ok_or_else(|| Failure::iteration("iterator has no remaining elements"))
}

/// Look up an element that the caller believes is present.
fn owner_of<'a>(registry: &'a HashMap<&str, &str>, host: &str) -> Result<&'a str, Failure> {
    registry
        .get(host)
        .copied()
        .ok_or_else(|| Failure::iteration(format!("no element for key {host:?}")))
}

fn main() {
    run_demo("Iteration: Exhausted Iterator", |logger| {
        let jobs = vec!["build".to_string(), "test".to_string()];
        let mut queue = jobs.into_iter();

        println!("{}", section("Draining the Iterator"));
        println!("  job 1 = {}", next_job(&mut queue)?);
        println!("  job 2 = {}", next_job(&mut queue)?);

        println!("\n{}", section("Advancing Past the End (provoked)"));
        match next_job(&mut queue) {
            Ok(job) => println!("  job 3 = {job}"),
            Err(failure) => logger.log_expected(&failure.with_context("job queue")),
        }

        let registry = HashMap::from([("alpha", "ops"), ("beta", "data")]);

        println!("\n{}", section("Absent-Element Lookup (provoked)"));
        match owner_of(&registry, "gamma") {
            Ok(owner) => println!("  gamma is owned by {owner}"),
            Err(failure) => logger.log_expected(&failure),
        }

        println!("\n{}", section("Key Points"));
        println!("1. next() on a drained iterator returns None, never panics");
        println!("2. Absence becomes an Iteration failure only when presence was assumed");
        println!("3. Each failure is logged once and the path ends there");
        Ok(())
    });
}
