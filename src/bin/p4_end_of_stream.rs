//! Category 4: Resource / Stream Termination Failures
//! Example: Reading Past the End of Input
//!
//! Run with: cargo run --bin p4_end_of_stream

use std::io::{Cursor, Read};

use failure_taxonomy::banner::section;
use failure_taxonomy::demo::run_demo;
use failure_taxonomy::Failure;

/// Read an exact-size record from the stream.
fn read_record<R: Read>(stream: &mut R, size: usize) -> Result<Vec<u8>, Failure> {
    let mut record = vec![0u8; size];
    stream.read_exact(&mut record)?;
    Ok(record)
}

fn main() {
    run_demo("StreamEnd: Reading Past End of Input", |logger| {
        let mut stream = Cursor::new(b"HEADerPAYLOAD".to_vec());

        println!("{}", section("Reads Within the Stream"));
        let header = read_record(&mut stream, 6)?;
        println!("  header  = {:?}", String::from_utf8_lossy(&header));
        let payload = read_record(&mut stream, 7)?;
        println!("  payload = {:?}", String::from_utf8_lossy(&payload));

        println!("\n{}", section("Read Past End of Stream (provoked)"));
        match read_record(&mut stream, 4) {
            Ok(record) => println!("  trailer = {record:?}"),
            Err(failure) => logger.log_expected(&failure.with_context("13-byte stream")),
        }

        println!("\n{}", section("Key Points"));
        println!("1. read_exact reports UnexpectedEof when input runs out");
        println!("2. The io::Error converts straight into a StreamEnd failure");
        println!("3. Partial data from the failed read is discarded, not returned");
        Ok(())
    });
}
