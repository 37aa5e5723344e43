use thiserror::Error;

/// Errors that reject a pairing run before any matching happens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchingError {
    #[error("expected {expected} {what}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("score matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("score at ({row}, {col}) is not finite: {value}")]
    InvalidScore { row: usize, col: usize, value: f64 },

    #[error("participant {index}: unknown gender identity {label:?}")]
    UnknownIdentity { index: usize, label: String },

    #[error("participant {index}: unknown gender preference {label:?}")]
    UnknownPreference { index: usize, label: String },

    #[error("invalid side assignment: {0}")]
    InvalidSides(String),
}
