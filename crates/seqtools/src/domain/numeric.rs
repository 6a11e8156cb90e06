//! Numeric transforms
//!
//! Rescaling is generic over `num_traits::Float`; `sum` works for any numeric
//! element type including integers.

use num_traits::{Float, Num};

use crate::domain::validator::Validator;
use crate::error::Result;

/// Affine-rescale every element from `[in_min, in_max]` to `[out_min, out_max]`
///
/// Values outside the input range are extrapolated, not clamped.
///
/// # Errors
/// `DegenerateRange` when `in_min == in_max`.
pub fn scale_to_range<T: Float>(
    seq: &[T],
    in_min: T,
    in_max: T,
    out_min: T,
    out_max: T,
) -> Result<Vec<T>> {
    Validator::ensure_range("scale_to_range", in_min, in_max)?;

    let scale = (out_max - out_min) / (in_max - in_min);
    Ok(seq.iter().map(|&x| (x - in_min) * scale + out_min).collect())
}

/// Arithmetic sum of all elements (zero for an empty sequence)
pub fn sum<T: Num + Copy>(seq: &[T]) -> T {
    seq.iter().fold(T::zero(), |acc, &x| acc + x)
}

/// Scale every element proportionally so the sequence sums to `target`
///
/// # Errors
/// - `EmptySequence` when `seq` is empty
/// - `ZeroSum` when the elements sum to zero
pub fn scale_to_sum<T: Float>(target: T, seq: &[T]) -> Result<Vec<T>> {
    Validator::ensure_non_empty("scale_to_sum", seq.len())?;
    let total = sum(seq);
    Validator::ensure_nonzero_sum("scale_to_sum", total)?;

    Ok(seq.iter().map(|&x| x * target / total).collect())
}

/// Logical negation of every element
pub fn flip_booleans(seq: &[bool]) -> Vec<bool> {
    seq.iter().map(|b| !b).collect()
}
