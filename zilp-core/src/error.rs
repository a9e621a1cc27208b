//! Error types for the solver.

use thiserror::Error;

/// Errors that can occur while loading or solving an instance.
#[derive(Error, Debug)]
pub enum BnbError {
    /// Instance file is missing the `num_vars num_constraints` header line.
    #[error("invalid instance: missing header line")]
    MissingHeader,

    /// Variable count in the header is zero.
    #[error("invalid instance: variable count must be positive")]
    NoVariables,

    /// A line does not carry the expected number of values.
    #[error("invalid instance: line {line}: expected {expected} values, found {found}")]
    WrongTokenCount {
        /// 1-based line number in the file.
        line: usize,
        /// Number of values the format requires on this line.
        expected: usize,
        /// Number of values actually present.
        found: usize,
    },

    /// A token could not be parsed as an integer.
    #[error("invalid instance: line {line}: {token:?} is not an integer")]
    BadToken {
        /// 1-based line number in the file.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The number of constraint rows does not match the header.
    #[error("invalid instance: expected {expected} constraint rows, found {found}")]
    RowCount {
        /// Rows announced by the header.
        expected: usize,
        /// Rows actually present.
        found: usize,
    },

    /// Instance file could not be read.
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    /// The relaxation oracle failed to produce a result.
    ///
    /// Fatal for the enclosing search; no partial solution is valid.
    #[error("relaxation oracle failed: {0}")]
    Oracle(String),
}

/// Result type for solver operations.
pub type BnbResult<T> = Result<T, BnbError>;
