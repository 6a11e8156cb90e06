//! Error types for sequence operations
//!
//! Every failure is a programmer error surfaced immediately to the caller.
//! Inputs that would make the computation divide by zero (or index past the
//! end) are rejected instead of producing `NaN`, `inf` or garbage output.

use thiserror::Error;

/// Sequence operation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeqError {
    /// The operation needs at least one element
    #[error("invalid argument: empty sequence")]
    EmptySequence,

    /// Input range has zero width, so scaling is undefined
    #[error("invalid argument: degenerate range [{min}, {max}]")]
    DegenerateRange { min: f64, max: f64 },

    /// Proportional scaling or looping by a sum of zero
    #[error("invalid argument: zero sum")]
    ZeroSum,

    /// Magnitude-based operations only accept non-negative elements
    #[error("invalid argument: negative magnitude {value} at index {index}")]
    NegativeMagnitude { index: usize, value: f64 },

    /// Computed repetition count is NaN, infinite or too large
    #[error("invalid argument: non-finite value {value}")]
    NonFinite { value: f64 },

    /// Index past the end of the sequence
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl SeqError {
    /// Check if this error belongs to the invalid-argument family
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SeqError>;
