//! Random selection and shuffling over an injected source

use super::RandomSource;
use crate::domain::build::build_array;
use crate::domain::validator::Validator;
use crate::error::Result;

/// How a unit float `u` in `[0, 1)` is mapped to an index into `len` elements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexSelection {
    /// `floor(len * u)`: every index is equally likely
    #[default]
    Uniform,
    /// `round((len - 1) * u)`: legacy draw, the first and last index get
    /// half the weight of interior ones
    Rounded,
}

impl IndexSelection {
    /// Map `unit` to an index in `0..len` (0 when `len` is 0)
    #[inline]
    pub fn index(self, unit: f64, len: usize) -> usize {
        let last = len.saturating_sub(1);
        let raw = match self {
            Self::Uniform => (len as f64 * unit).floor(),
            Self::Rounded => (last as f64 * unit).round(),
        };
        // `as` saturates: negatives and NaN land on 0
        (raw as usize).min(last)
    }
}

/// Pick one element uniformly at random
///
/// # Errors
/// `EmptySequence` when `seq` is empty.
pub fn pick<T, S>(seq: &[T], rng: &mut S) -> Result<T>
where
    T: Clone,
    S: RandomSource + ?Sized,
{
    pick_with(seq, rng, IndexSelection::Uniform)
}

/// Pick one element using an explicit index selection
///
/// # Errors
/// `EmptySequence` when `seq` is empty.
pub fn pick_with<T, S>(seq: &[T], rng: &mut S, selection: IndexSelection) -> Result<T>
where
    T: Clone,
    S: RandomSource + ?Sized,
{
    Validator::ensure_non_empty("pick", seq.len())?;
    Ok(draw(seq, rng, selection))
}

/// Pick `n` elements independently, with replacement
///
/// # Errors
/// `EmptySequence` when `seq` is empty and `n > 0`.
pub fn pick_n<T, S>(n: usize, seq: &[T], rng: &mut S) -> Result<Vec<T>>
where
    T: Clone,
    S: RandomSource + ?Sized,
{
    if n == 0 {
        return Ok(Vec::new());
    }
    Validator::ensure_non_empty("pick_n", seq.len())?;

    Ok(build_array(n, |_| draw(seq, &mut *rng, IndexSelection::Uniform)))
}

/// Shuffled copy of `seq` (Fisher-Yates, last index first)
///
/// Draws exactly `seq.len() - 1` unit floats for non-empty input.
pub fn shuffle<T, S>(seq: &[T], rng: &mut S) -> Vec<T>
where
    T: Clone,
    S: RandomSource + ?Sized,
{
    let mut shuffled = seq.to_vec();
    for current in (1..shuffled.len()).rev() {
        let other = IndexSelection::Uniform.index(rng.next_unit(), current + 1);
        shuffled.swap(current, other);
    }
    shuffled
}

fn draw<T, S>(seq: &[T], rng: &mut S, selection: IndexSelection) -> T
where
    T: Clone,
    S: RandomSource + ?Sized,
{
    seq[selection.index(rng.next_unit(), seq.len())].clone()
}
