//! Category 1: Arithmetic Failures
//! Example: Division by Zero
//!
//! Run with: cargo run --bin p1_divide_by_zero

use failure_taxonomy::banner::section;
use failure_taxonomy::demo::run_demo;
use failure_taxonomy::Failure;

/// Integer division that reports a zero divisor instead of panicking.
fn divide(dividend: i64, divisor: i64) -> Result<i64, Failure> {
    dividend
        .checked_div(divisor)
        .ok_or_else(|| Failure::arithmetic("Attempted to divide by zero"))
}

fn main() {
    run_demo("Arithmetic: Division by Zero", |logger| {
        println!("{}", section("Valid Division"));
        for (a, b) in [(10, 2), (7, 3), (-9, 3)] {
            println!("  {a} / {b} = {}", divide(a, b)?);
        }

        println!("\n{}", section("Division by Zero (provoked)"));
        match divide(10, 0) {
            Ok(q) => println!("  10 / 0 = {q}"),
            Err(failure) => logger.log_expected(&failure),
        }

        println!("\n{}", section("Key Points"));
        println!("1. checked_div returns None for a zero divisor");
        println!("2. The None becomes a classified Arithmetic failure");
        println!("3. Logging is terminal: no retry, no rethrow");
        Ok(())
    });
}
