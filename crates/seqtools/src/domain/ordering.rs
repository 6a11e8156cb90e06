//! Ordering operations
//!
//! Sorts return a sorted copy. Elements that are not comparable with
//! themselves (NaN) are moved to the end in their original relative order,
//! for both directions. With the `parallel` feature, sequences of at least
//! `PARALLEL_SORT_THRESHOLD` elements are sorted with rayon; both paths are
//! stable and give identical results.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use crate::constants::PARALLEL_SORT_THRESHOLD;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sorted copy, smallest first
pub fn low_to_high_sort<T: PartialOrd + Clone + Send>(seq: &[T]) -> Vec<T> {
    let mut sorted = seq.to_vec();
    sort_slice(&mut sorted, |a, b| compare_numeric(a, b, false));
    sorted
}

/// Sorted copy, largest first
pub fn high_to_low_sort<T: PartialOrd + Clone + Send>(seq: &[T]) -> Vec<T> {
    let mut sorted = seq.to_vec();
    sort_slice(&mut sorted, |a, b| compare_numeric(a, b, true));
    sorted
}

/// Total order over `PartialOrd` values with incomparable values last
fn compare_numeric<T: PartialOrd>(a: &T, b: &T, descending: bool) -> Ordering {
    let a_ordered = a.partial_cmp(a).is_some();
    let b_ordered = b.partial_cmp(b).is_some();

    match (a_ordered, b_ordered) {
        (true, true) => {
            let ord = a.partial_cmp(b).unwrap_or(Ordering::Equal);
            if descending { ord.reverse() } else { ord }
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

#[cfg(feature = "parallel")]
fn sort_slice<T, F>(values: &mut [T], compare: F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if values.len() >= PARALLEL_SORT_THRESHOLD {
        values.par_sort_by(compare);
    } else {
        values.sort_by(compare);
    }
}

#[cfg(not(feature = "parallel"))]
fn sort_slice<T, F>(values: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    values.sort_by(compare);
}
