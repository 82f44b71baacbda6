//! Domain error types

use thiserror::Error;

/// The grammar failed to match the input text.
///
/// Positions are 1-based and counted in characters, so the error can be
/// shown directly next to the offending line in an editor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("parse error at line {line}, column {column}: expected {expected}")]
pub struct ParseError {
    /// Line of the offending position (1-based).
    pub line: usize,

    /// Column of the offending position (1-based).
    pub column: usize,

    /// What the grammar expected to find at this position.
    pub expected: String,
}

impl ParseError {
    /// Creates a parse error at the given position.
    #[must_use]
    pub fn new(line: usize, column: usize, expected: impl Into<String>) -> Self {
        Self {
            line,
            column,
            expected: expected.into(),
        }
    }
}
