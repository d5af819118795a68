//! The failure taxonomy: every demonstrated failure is one of eight kinds.
//!
//! Catch-chains over exception class hierarchies become pattern matching
//! over [`FailureKind`]. A [`Failure`] is terminal: it gets classified and
//! logged exactly once, never retried or rethrown.

use std::fmt;
use std::io;
use std::num::{ParseFloatError, ParseIntError, TryFromIntError};

use thiserror::Error;

/// Category of a demonstrated failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Division by zero and friends.
    Arithmetic,
    /// Collection access out of range.
    Bounds,
    /// Invalid narrowing or downcast.
    Cast,
    /// Reading past the end of an input stream.
    StreamEnd,
    /// Advancing an iterator with no remaining elements, or looking up an
    /// absent element.
    Iteration,
    /// Forced termination of a unit of work.
    Cancelled,
    /// Invariant check failing on supposedly unreachable code.
    Assertion,
    /// Malformed textual input.
    Syntax,
}

impl FailureKind {
    /// Label printed in log lines.
    pub fn label(self) -> &'static str {
        match self {
            FailureKind::Arithmetic => "Arithmetic",
            FailureKind::Bounds => "Bounds",
            FailureKind::Cast => "Cast",
            FailureKind::StreamEnd => "StreamEnd",
            FailureKind::Iteration => "Iteration",
            FailureKind::Cancelled => "Cancelled",
            FailureKind::Assertion => "Assertion",
            FailureKind::Syntax => "Syntax",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A caught failure: kind, human-readable message, optional originating
/// context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct Failure {
    kind: FailureKind,
    message: String,
    context: Option<String>,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Failure {
            kind,
            message: message.into(),
            context: None,
        }
    }

    pub fn arithmetic(message: impl Into<String>) -> Self {
        Failure::new(FailureKind::Arithmetic, message)
    }

    pub fn bounds(message: impl Into<String>) -> Self {
        Failure::new(FailureKind::Bounds, message)
    }

    pub fn cast(message: impl Into<String>) -> Self {
        Failure::new(FailureKind::Cast, message)
    }

    pub fn stream_end(message: impl Into<String>) -> Self {
        Failure::new(FailureKind::StreamEnd, message)
    }

    pub fn iteration(message: impl Into<String>) -> Self {
        Failure::new(FailureKind::Iteration, message)
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Failure::new(FailureKind::Cancelled, message)
    }

    pub fn assertion(message: impl Into<String>) -> Self {
        Failure::new(FailureKind::Assertion, message)
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Failure::new(FailureKind::Syntax, message)
    }

    /// Attach the originating context (call site, input name, ...).
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context = Some(ctx.into());
        self
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl From<ParseIntError> for Failure {
    fn from(err: ParseIntError) -> Self {
        Failure::syntax(err.to_string())
    }
}

impl From<ParseFloatError> for Failure {
    fn from(err: ParseFloatError) -> Self {
        Failure::syntax(err.to_string())
    }
}

impl From<TryFromIntError> for Failure {
    fn from(err: TryFromIntError) -> Self {
        Failure::cast(err.to_string())
    }
}

// The taxonomy has no general-I/O category; the demos only provoke
// end-of-input, so every io::Error lands in StreamEnd. Errors other than
// UnexpectedEof keep their ErrorKind name in the message.
impl From<io::Error> for Failure {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Failure::stream_end(err.to_string())
        } else {
            Failure::stream_end(format!("{:?}: {}", err.kind(), err))
        }
    }
}

impl From<serde_json::Error> for Failure {
    fn from(err: serde_json::Error) -> Self {
        Failure::syntax(err.to_string())
    }
}

impl From<crossbeam::channel::RecvError> for Failure {
    fn from(err: crossbeam::channel::RecvError) -> Self {
        Failure::cancelled(err.to_string())
    }
}
