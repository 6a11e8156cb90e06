//! Removal and filtering operations
//!
//! All operations return a new sequence; the input slice is never modified.

use crate::domain::validator::Validator;
use crate::error::Result;

#[cfg(feature = "hashset-filter")]
use rustc_hash::FxHashSet;
#[cfg(feature = "hashset-filter")]
use std::hash::Hash;

/// Remove `remove_count` elements starting at `start_index`
///
/// When `replacement` is given it is inserted as a single element at
/// `start_index`. A `remove_count` running past the end is clamped.
///
/// # Errors
/// `IndexOutOfRange` when `start_index > seq.len()`. A start index equal to
/// the length is allowed and appends the replacement.
pub fn safe_splice<T: Clone>(
    seq: &[T],
    remove_count: usize,
    start_index: usize,
    replacement: Option<T>,
) -> Result<Vec<T>> {
    Validator::ensure_position("safe_splice", start_index, seq.len())?;

    let tail_start = start_index.saturating_add(remove_count).min(seq.len());
    let mut output = Vec::with_capacity(start_index + 1 + (seq.len() - tail_start));
    output.extend_from_slice(&seq[..start_index]);
    output.extend(replacement);
    output.extend_from_slice(&seq[tail_start..]);

    Ok(output)
}

/// Remove every element equal to `item`
pub fn remove_all_instance<T: PartialEq + Clone>(seq: &[T], item: &T) -> Vec<T> {
    seq.iter().filter(|x| *x != item).cloned().collect()
}

/// Remove the first element equal to `item` (unchanged copy if absent)
pub fn remove_first_instance<T: PartialEq + Clone>(seq: &[T], item: &T) -> Vec<T> {
    match seq.iter().position(|x| x == item) {
        Some(index) => without_index(seq, index),
        None => seq.to_vec(),
    }
}

/// Remove the element at `index`, but only if it equals `item`
///
/// # Errors
/// `IndexOutOfRange` when `index >= seq.len()`.
pub fn remove_at_index<T: PartialEq + Clone>(seq: &[T], item: &T, index: usize) -> Result<Vec<T>> {
    Validator::ensure_index("remove_at_index", index, seq.len())?;

    if seq[index] == *item {
        Ok(without_index(seq, index))
    } else {
        Ok(seq.to_vec())
    }
}

/// Remove every element that appears in `items`
///
/// Membership is a linear scan of `items`, so this only needs `PartialEq`.
/// See `remove_multiple_items_hashed` for large removal sets.
pub fn remove_multiple_items<T: PartialEq + Clone>(seq: &[T], items: &[T]) -> Vec<T> {
    seq.iter().filter(|x| !items.contains(*x)).cloned().collect()
}

/// Remove every element that appears in `items`, using a hash set
///
/// Same result as `remove_multiple_items` in O(n + m).
#[cfg(feature = "hashset-filter")]
pub fn remove_multiple_items_hashed<T: Hash + Eq + Clone>(seq: &[T], items: &[T]) -> Vec<T> {
    let removal: FxHashSet<&T> = items.iter().collect();
    seq.iter()
        .filter(|x| !removal.contains(*x))
        .cloned()
        .collect()
}

/// Keep the strings that contain at least one of `substrings`
///
/// An empty `substrings` list keeps nothing.
pub fn gather_by_substring<S, P>(seq: &[S], substrings: &[P]) -> Vec<S>
where
    S: AsRef<str> + Clone,
    P: AsRef<str>,
{
    seq.iter()
        .filter(|s| {
            substrings
                .iter()
                .any(|needle| s.as_ref().contains(needle.as_ref()))
        })
        .cloned()
        .collect()
}

fn without_index<T: Clone>(seq: &[T], index: usize) -> Vec<T> {
    let mut output = Vec::with_capacity(seq.len().saturating_sub(1));
    output.extend_from_slice(&seq[..index]);
    output.extend_from_slice(&seq[index + 1..]);
    output
}
