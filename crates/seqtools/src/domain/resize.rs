//! Resizing and assembly operations
//!
//! Two flavours of "make this sequence fit":
//! - By element count: `resize_array`, `take_n` (cyclic tiling)
//! - By magnitude: `take_to`, `loop_to` (running sum reaches a target exactly)

use num_traits::{Num, ToPrimitive};

use crate::domain::build::build_array;
use crate::domain::numeric::sum;
use crate::domain::validator::Validator;
use crate::error::Result;

/// Expand or shrink a sequence to exactly `target_len` elements
///
/// Longer inputs are truncated. Shorter inputs are tiled end-to-end and then
/// truncated, so `resize_array(5, &[0, 1, 2])` is `[0, 1, 2, 0, 1]`.
///
/// # Errors
/// `EmptySequence` when `seq` is empty and `target_len > 0`.
pub fn resize_array<T: Clone>(target_len: usize, seq: &[T]) -> Result<Vec<T>> {
    if seq.len() >= target_len {
        return Ok(seq[..target_len].to_vec());
    }
    Validator::ensure_non_empty("resize_array", seq.len())?;

    Ok(seq.iter().cycle().take(target_len).cloned().collect())
}

/// Take `n` elements by indexing `seq` cyclically (`i mod len`)
///
/// # Errors
/// `EmptySequence` when `seq` is empty and `n > 0`.
pub fn take_n<T: Clone>(seq: &[T], n: usize) -> Result<Vec<T>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    Validator::ensure_non_empty("take_n", seq.len())?;

    let len = seq.len();
    Ok(build_array(n, |i| seq[i % len].clone()))
}

/// Accumulate elements until their running sum reaches `target`
///
/// The element that would overshoot is replaced by the remaining amount, so
/// the output sums to `target` exactly and the running sum never exceeds
/// `target` (no integer overflow). If the whole input sums to less
/// than `target`, the whole input is returned. A non-positive `target`
/// yields an empty sequence.
///
/// # Errors
/// `NegativeMagnitude` when any element is below zero.
pub fn take_to<T>(target: T, seq: &[T]) -> Result<Vec<T>>
where
    T: Num + PartialOrd + Copy + ToPrimitive,
{
    Validator::ensure_magnitudes("take_to", seq)?;
    Ok(accumulate_to(target, seq))
}

/// Tile `seq` until its cumulative magnitude covers `target`, then `take_to`
///
/// The input is repeated `ceil(target / sum(seq))` times before truncation.
/// Works for integer and float magnitudes; the repetition count is computed
/// in `f64` so summing the input cannot overflow `T`.
///
/// # Errors
/// - `EmptySequence` when `seq` is empty
/// - `NegativeMagnitude` when any element is below zero
/// - `NonFinite` when the elements sum to infinity, or `target` is infinite or NaN
/// - `ZeroSum` when the elements sum to zero
pub fn loop_to<T>(target: T, seq: &[T]) -> Result<Vec<T>>
where
    T: Num + PartialOrd + Copy + ToPrimitive,
{
    Validator::ensure_non_empty("loop_to", seq.len())?;
    Validator::ensure_magnitudes("loop_to", seq)?;
    let magnitudes: Vec<f64> = seq
        .iter()
        .map(|x| x.to_f64().unwrap_or(f64::NAN))
        .collect();
    let total = sum(&magnitudes);
    Validator::ensure_finite("loop_to", total)?;
    Validator::ensure_nonzero_sum("loop_to", total)?;

    if target <= T::zero() {
        return Ok(Vec::new());
    }

    let ratio = target.to_f64().unwrap_or(f64::NAN) / total;
    let loops = Validator::ensure_count("loop_to", ratio.ceil())?;
    let tiled = build_array(loops, |_| seq).concat();

    Ok(accumulate_to(target, &tiled))
}

/// Running-sum truncation without validation
///
/// `running < target` holds inside the loop, so `target - running` never
/// underflows and `running + value` never passes `target`.
fn accumulate_to<T>(target: T, seq: &[T]) -> Vec<T>
where
    T: Num + PartialOrd + Copy,
{
    let mut output = Vec::new();
    if target <= T::zero() {
        return output;
    }

    let mut running = T::zero();
    for &value in seq {
        let remaining = target - running;
        if value >= remaining {
            output.push(remaining);
            break;
        }
        output.push(value);
        running = running + value;
    }

    output
}
