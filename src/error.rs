use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Score loading / metric errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong between opening `scores.jsonl` and printing
/// the rate. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed at line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("line {line}: missing '{field}' field")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: '{field}' must be a number, found {found}")]
    TypeMismatch {
        line: usize,
        field: &'static str,
        found: &'static str,
    },

    #[error("no records to score")]
    EmptyInput,
}

// ---------------------------------------------------------------------------
// Boolean literal errors
// ---------------------------------------------------------------------------

/// Returned by [`crate::flags::parse_bool`] for anything outside the
/// yes/no literal sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Boolean value expected in args (got '{0}')")]
pub struct InvalidBooleanLiteral(pub String);
