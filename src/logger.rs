//! The classifier/logger: one formatted line per caught failure.
//!
//! Stateless apart from the owned sink. Logging is the terminal action for
//! a failure; the logger itself must never fail.

use std::fmt::Write as _;
use std::io::{self, Write};

use chrono::Local;
use serde::Serialize;

use crate::failure::Failure;

/// Was this failure deliberately provoked by the demonstration?
///
/// The observed convention is that an omitted flag means "expected", hence
/// the `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expectation {
    #[default]
    Expected,
    Unexpected,
}

impl Expectation {
    fn tag(self) -> &'static str {
        match self {
            Expectation::Expected => "[EXPECTED]",
            Expectation::Unexpected => "[UNEXPECTED]",
        }
    }
}

/// Output format selector: plain, or prefixed with a local timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Timestamped,
}

/// Writes classification lines of the form
/// `[EXPECTED|UNEXPECTED] <kind>: <message>` to an owned sink.
pub struct Logger<W: Write> {
    sink: W,
    format: LogFormat,
}

impl Logger<io::Stdout> {
    pub fn stdout() -> Self {
        Logger::to_writer(io::stdout())
    }
}

impl Logger<io::Stderr> {
    pub fn stderr() -> Self {
        Logger::to_writer(io::stderr())
    }
}

impl<W: Write> Logger<W> {
    pub fn to_writer(sink: W) -> Self {
        Logger {
            sink,
            format: LogFormat::default(),
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Classify and log a caught failure. An absent failure is silently
    /// ignored. Sink errors are swallowed: the logger never fails.
    pub fn log(&mut self, failure: Option<&Failure>, expectation: Expectation) {
        let Some(failure) = failure else {
            return;
        };
        let line = self.format_line(failure, expectation);
        let _ = writeln!(self.sink, "{line}");
    }

    pub fn log_expected(&mut self, failure: &Failure) {
        self.log(Some(failure), Expectation::Expected);
    }

    pub fn log_unexpected(&mut self, failure: &Failure) {
        self.log(Some(failure), Expectation::Unexpected);
    }

    /// Log a failure as unexpected and hand it back for propagation to the
    /// top-level fatal handler. Unexpected failures always escalate; they
    /// are never logged-and-forgotten.
    pub fn fail_fast(&mut self, failure: Failure) -> Failure {
        self.log_unexpected(&failure);
        failure
    }

    /// Dump a value through its explicit `Serialize` impl, one indented
    /// line per JSON line. Unserializable values are silently skipped.
    pub fn log_value<T: Serialize>(&mut self, label: &str, value: &T) {
        let Ok(json) = serde_json::to_string_pretty(value) else {
            return;
        };
        let _ = writeln!(self.sink, "{label}:");
        for line in json.lines() {
            let _ = writeln!(self.sink, "  {line}");
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn format_line(&self, failure: &Failure, expectation: Expectation) -> String {
        let mut line = String::new();
        if self.format == LogFormat::Timestamped {
            line.push_str(&Local::now().format("%Y-%m-%d %H:%M:%S ").to_string());
        }
        line.push_str(expectation.tag());
        let _ = write!(line, " {}: {}", failure.kind(), failure.message());
        if let Some(ctx) = failure.context() {
            let _ = write!(line, " ({ctx})");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::FailureKind;
    use std::fs;
    use std::io::Read;

    fn captured(format: LogFormat, f: impl FnOnce(&mut Logger<Vec<u8>>)) -> String {
        let mut logger = Logger::to_writer(Vec::new()).with_format(format);
        f(&mut logger);
        String::from_utf8(logger.into_inner()).unwrap()
    }

    #[test]
    fn test_expected_line_format() {
        let out = captured(LogFormat::Plain, |logger| {
            logger.log_expected(&Failure::arithmetic("Attempted to divide by zero"));
        });
        assert_eq!(out, "[EXPECTED] Arithmetic: Attempted to divide by zero\n");
    }

    #[test]
    fn test_line_starts_with_exactly_one_tag() {
        for expectation in [Expectation::Expected, Expectation::Unexpected] {
            let out = captured(LogFormat::Plain, |logger| {
                logger.log(Some(&Failure::syntax("bad input")), expectation);
            });
            let expected_prefix = out.starts_with("[EXPECTED] ");
            let unexpected_prefix = out.starts_with("[UNEXPECTED] ");
            assert!(expected_prefix ^ unexpected_prefix, "got: {out}");
        }
    }

    #[test]
    fn test_absent_failure_logs_nothing() {
        let out = captured(LogFormat::Plain, |logger| {
            logger.log(None, Expectation::Expected);
            logger.log(None, Expectation::Unexpected);
        });
        assert!(out.is_empty());
    }

    #[test]
    fn test_context_is_appended() {
        let out = captured(LogFormat::Plain, |logger| {
            logger.log_expected(&Failure::bounds("index 9 out of range").with_context("scores"));
        });
        assert_eq!(out, "[EXPECTED] Bounds: index 9 out of range (scores)\n");
    }

    #[test]
    fn test_timestamped_prefix_shape() {
        let out = captured(LogFormat::Timestamped, |logger| {
            logger.log_expected(&Failure::iteration("no remaining elements"));
        });
        // "YYYY-MM-DD HH:MM:SS " is 20 bytes, then the tag.
        assert!(out.len() > 20, "got: {out}");
        let (stamp, rest) = out.split_at(20);
        assert!(rest.starts_with("[EXPECTED] "));
        let bytes = stamp.as_bytes();
        for &i in &[0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15, 17, 18] {
            assert!(bytes[i].is_ascii_digit(), "byte {i} in {stamp:?}");
        }
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
        assert_eq!(bytes[19], b' ');
    }

    #[test]
    fn test_fail_fast_logs_and_returns_the_failure() {
        let mut logger = Logger::to_writer(Vec::new());
        let failure = logger.fail_fast(Failure::assertion("impossible state"));
        assert_eq!(failure.kind(), FailureKind::Assertion);
        let out = String::from_utf8(logger.into_inner()).unwrap();
        assert_eq!(out, "[UNEXPECTED] Assertion: impossible state\n");
    }

    #[test]
    fn test_log_value_uses_explicit_serialization() {
        #[derive(Serialize)]
        struct Snapshot {
            attempts: u32,
            last_input: String,
        }
        let out = captured(LogFormat::Plain, |logger| {
            logger.log_value(
                "parser state",
                &Snapshot {
                    attempts: 2,
                    last_input: "{ nope".into(),
                },
            );
        });
        assert!(out.starts_with("parser state:\n"));
        assert!(out.contains("\"attempts\": 2"));
        assert!(out.contains("\"last_input\": \"{ nope\""));
    }

    #[test]
    fn test_file_sink() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut sink = file.reopen().unwrap();
        {
            let mut logger = Logger::to_writer(&mut sink);
            logger.log_expected(&Failure::stream_end("failed to fill whole buffer"));
        }
        let mut contents = String::new();
        fs::File::open(file.path())
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "[EXPECTED] StreamEnd: failed to fill whole buffer\n");
    }
}
