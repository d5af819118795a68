//! Category 3: Type / Cast Failures
//! Example: Invalid Narrowing and Failed Downcast
//!
//! Run with: cargo run --bin p3_invalid_cast

use std::any::Any;

use failure_taxonomy::banner::section;
use failure_taxonomy::demo::run_demo;
use failure_taxonomy::Failure;

/// Narrow an i32 to u8, reporting values that do not fit.
fn narrow_to_byte(value: i32) -> Result<u8, Failure> {
    Ok(u8::try_from(value)?)
}

/// Recover an i64 from a type-erased value.
fn downcast_to_i64(boxed: Box<dyn Any>) -> Result<i64, Failure> {
    boxed
        .downcast::<i64>()
        .map(|n| *n)
        .map_err(|_| Failure::cast("boxed value is not an i64"))
}

fn main() {
    run_demo("Cast: Invalid Narrowing and Downcast", |logger| {
        println!("{}", section("Valid Narrowing"));
        for value in [0, 200, 255] {
            println!("  {value} as u8 = {}", narrow_to_byte(value)?);
        }

        println!("\n{}", section("Narrowing Overflow (provoked)"));
        match narrow_to_byte(300) {
            Ok(byte) => println!("  300 as u8 = {byte}"),
            Err(failure) => logger.log_expected(&failure),
        }

        println!("\n{}", section("Successful Downcast"));
        println!("  downcast = {}", downcast_to_i64(Box::new(42i64))?);

        println!("\n{}", section("Failed Downcast (provoked)"));
        match downcast_to_i64(Box::new("not a number")) {
            Ok(n) => println!("  downcast = {n}"),
            Err(failure) => logger.log_expected(&failure),
        }

        println!("\n{}", section("Key Points"));
        println!("1. TryFrom makes narrowing failures explicit");
        println!("2. The TryFromIntError converts straight into a Cast failure");
        println!("3. Any::downcast fails by handing the box back, not by panicking");
        Ok(())
    });
}
