//! Category 8: Syntax / Parse Failures
//! Example: Malformed JSON and Malformed Numbers
//!
//! Run with: cargo run --bin p8_syntax_error

use serde_json::Value;

use failure_taxonomy::banner::section;
use failure_taxonomy::demo::run_demo;
use failure_taxonomy::{Failure, LogFormat, Logger};

/// Parse a configuration document.
fn parse_config(input: &str) -> Result<Value, Failure> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a retry count typed in by a user.
fn parse_retries(input: &str) -> Result<u32, Failure> {
    Ok(input.trim().parse()?)
}

fn main() {
    run_demo("Syntax: Malformed Textual Input", |logger| {
        println!("{}", section("Well-Formed Input"));
        let config = parse_config(r#"{"retries": 3, "verbose": true}"#)?;
        println!("  config  = {config}");
        println!("  retries = {}", parse_retries("3")?);

        println!("\n{}", section("Malformed JSON (provoked)"));
        match parse_config(r#"{"retries": 3, "verbose" true}"#) {
            Ok(config) => println!("  config = {config}"),
            Err(failure) => logger.log_expected(&failure.with_context("config document")),
        }

        println!("\n{}", section("Malformed Number (provoked)"));
        match parse_retries("thrice") {
            Ok(retries) => println!("  retries = {retries}"),
            Err(failure) => logger.log_expected(&failure),
        }

        println!("\n{}", section("Timestamped Format, Same Line Shape"));
        let mut stamped = Logger::stdout().with_format(LogFormat::Timestamped);
        stamped.log_expected(&Failure::syntax("expected `:` after object key"));

        println!("\n{}", section("Key Points"));
        println!("1. serde_json reports position and expectation in its message");
        println!("2. Both parse errors convert into the Syntax kind");
        println!("3. The timestamped format only prefixes; the line shape is unchanged");
        Ok(())
    });
}
