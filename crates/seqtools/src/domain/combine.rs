//! Combination operations

/// Right-hand element of `build_zip`: a single item or a run of items
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<T> {
    /// Appended as a one-element sequence
    Item(T),
    /// Appended element-wise
    Items(Vec<T>),
}

impl<T> Segment<T> {
    /// View the segment as a slice
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Item(item) => std::slice::from_ref(item),
            Self::Items(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for Segment<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Items(items)
    }
}

/// Pair up elements by position
///
/// The output has `min(a.len(), b.len())` pairs; the longer tail is dropped.
pub fn zip<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    a.iter().cloned().zip(b.iter().cloned()).collect()
}

/// Concatenate `b[i]` onto each row `a[i]`
///
/// The output always has `a.len()` rows. Rows without a partner in `b` are
/// copied unchanged; surplus entries in `b` are ignored.
pub fn build_zip<T: Clone>(a: &[Vec<T>], b: &[Segment<T>]) -> Vec<Vec<T>> {
    a.iter()
        .enumerate()
        .map(|(i, row)| {
            let tail = b.get(i).map(Segment::as_slice).unwrap_or(&[]);
            let mut joined = Vec::with_capacity(row.len() + tail.len());
            joined.extend_from_slice(row);
            joined.extend_from_slice(tail);
            joined
        })
        .collect()
}
