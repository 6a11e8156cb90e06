//! Sequence construction from an index generator

/// Build a sequence of length `n` by calling `generator` once per index
///
/// Indices are visited in ascending order, so stateful generators (such as
/// ones drawing from a random source) observe a deterministic call order.
pub fn build_array<T, F>(n: usize, generator: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..n).map(generator).collect()
}
