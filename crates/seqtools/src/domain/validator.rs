//! Input validation for sequence operations
//!
//! Checks are fail-fast and ordered from cheap to expensive. Each rejection
//! emits a `debug` event naming the operation before the error is returned;
//! the crate never installs a subscriber itself.

use num_traits::{ToPrimitive, Zero};
use tracing::debug;

use crate::error::{Result, SeqError};

/// Validation utility shared by the sequence operations.
pub struct Validator;

impl Validator {
    /// Reject an empty sequence when the operation needs at least one element.
    pub fn ensure_non_empty(op: &'static str, len: usize) -> Result<()> {
        if len == 0 {
            debug!(op, "rejected empty sequence");
            return Err(SeqError::EmptySequence);
        }
        Ok(())
    }

    /// Reject an element index (`index < len`).
    pub fn ensure_index(op: &'static str, index: usize, len: usize) -> Result<()> {
        if index >= len {
            debug!(op, index, len, "rejected out-of-range index");
            return Err(SeqError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    /// Reject an insertion position (`position <= len`).
    pub fn ensure_position(op: &'static str, position: usize, len: usize) -> Result<()> {
        if position > len {
            debug!(op, position, len, "rejected out-of-range position");
            return Err(SeqError::IndexOutOfRange {
                index: position,
                len,
            });
        }
        Ok(())
    }

    /// Reject a zero-width input range.
    pub fn ensure_range<T: PartialEq + ToPrimitive>(op: &'static str, min: T, max: T) -> Result<()> {
        if min == max {
            let min = min.to_f64().unwrap_or(f64::NAN);
            let max = max.to_f64().unwrap_or(f64::NAN);
            debug!(op, min, max, "rejected degenerate range");
            return Err(SeqError::DegenerateRange { min, max });
        }
        Ok(())
    }

    /// Reject a zero divisor sum.
    pub fn ensure_nonzero_sum<T: Zero>(op: &'static str, total: T) -> Result<()> {
        if total.is_zero() {
            debug!(op, "rejected zero sum");
            return Err(SeqError::ZeroSum);
        }
        Ok(())
    }

    /// Reject negative elements in a sequence of magnitudes.
    pub fn ensure_magnitudes<T>(op: &'static str, seq: &[T]) -> Result<()>
    where
        T: Zero + PartialOrd + Copy + ToPrimitive,
    {
        let zero = T::zero();
        if let Some(index) = seq.iter().position(|&x| x < zero) {
            let value = seq[index].to_f64().unwrap_or(f64::NAN);
            debug!(op, index, value, "rejected negative magnitude");
            return Err(SeqError::NegativeMagnitude { index, value });
        }
        Ok(())
    }

    /// Reject a NaN or infinite intermediate value.
    pub fn ensure_finite(op: &'static str, value: f64) -> Result<()> {
        if !value.is_finite() {
            debug!(op, value, "rejected non-finite value");
            return Err(SeqError::NonFinite { value });
        }
        Ok(())
    }

    /// Convert a repetition count computed in floating point.
    pub fn ensure_count<T: ToPrimitive + Copy>(op: &'static str, count: T) -> Result<usize> {
        count.to_usize().ok_or_else(|| {
            let value = count.to_f64().unwrap_or(f64::NAN);
            debug!(op, value, "rejected unrepresentable repetition count");
            SeqError::NonFinite { value }
        })
    }
}
