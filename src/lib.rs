//! # Failure Taxonomy
//!
//! Runnable demonstrations of a typed failure taxonomy with
//! expected/unexpected classification and logging.
//!
//! ## Library
//!
//! - [`failure`] — the eight-kind taxonomy and the [`Failure`] value
//! - [`logger`] — the classifier/logger writing `[EXPECTED|UNEXPECTED]` lines
//! - [`banner`] — fixed-width banners and `=== section ===` headings
//! - [`cancel`] — cooperative cancellation with join-before-read semantics
//! - [`demo`] — shared scaffolding for the demonstration binaries
//!
//! ## Running the demonstrations
//!
//! ```bash
//! # Category 1: Arithmetic
//! cargo run --bin p1_divide_by_zero
//!
//! # Category 2: Bounds / Indexing
//! cargo run --bin p2_index_out_of_range
//!
//! # Category 3: Type / Cast
//! cargo run --bin p3_invalid_cast
//!
//! # Category 4: Resource / Stream Termination
//! cargo run --bin p4_end_of_stream
//!
//! # Category 5: Iteration Exhaustion
//! cargo run --bin p5_iterator_exhausted
//!
//! # Category 6: Concurrency Cancellation
//! cargo run --bin p6_thread_cancellation
//!
//! # Category 7: Assertion / Invariant Violation (exits with status 1)
//! cargo run --bin p7_failed_assertion
//!
//! # Category 8: Syntax / Parse Failure
//! cargo run --bin p8_syntax_error
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the failure type
//! - `chrono` - Timestamp prefix for the timestamped log format
//! - `serde` / `serde_json` - Explicit per-type value dumping
//! - `crossbeam` - Channel handoff in the cancellation worker
//! - `colored` - Console emphasis in the demonstration binaries

pub mod banner;
pub mod cancel;
pub mod demo;
pub mod failure;
pub mod logger;

pub use failure::{Failure, FailureKind};
pub use logger::{Expectation, LogFormat, Logger};
