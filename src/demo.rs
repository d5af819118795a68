//! Shared scaffolding for the demonstration binaries.

use std::io;
use std::process;

use colored::Colorize;

use crate::banner;
use crate::failure::Failure;
use crate::logger::Logger;

/// Width of the title banner every demonstration prints.
pub const BANNER_WIDTH: usize = 60;

/// Run one demonstration: print the title banner, hand the body a stdout
/// logger, and apply the crate's policy for unexpected failures — any
/// failure that escapes the body is logged as unexpected and the process
/// exits with status 1. Expected failures never reach this point; they are
/// logged inside the body and the path simply ends.
pub fn run_demo<F>(title: &str, body: F)
where
    F: FnOnce(&mut Logger<io::Stdout>) -> Result<(), Failure>,
{
    println!("{}", banner::center(&format!(" {title} "), BANNER_WIDTH, '='));
    println!();
    let mut logger = Logger::stdout();
    if let Err(failure) = body(&mut logger) {
        let failure = logger.fail_fast(failure);
        eprintln!("{} {failure}", "FATAL:".red().bold());
        process::exit(1);
    }
}
