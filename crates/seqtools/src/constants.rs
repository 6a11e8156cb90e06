//! Sequence helper constants
//!
//! Compile-time tuning knobs. Behavioral switches live in Cargo features.

// =============================================================================
// Sorting
// =============================================================================

/// Minimum sequence length for the parallel sort path (`parallel` feature)
#[cfg(not(test))]
pub const PARALLEL_SORT_THRESHOLD: usize = 1 << 12; // 4,096

/// Minimum sequence length for the parallel sort path - reduced so unit tests hit it
#[cfg(test)]
pub const PARALLEL_SORT_THRESHOLD: usize = 64;

// =============================================================================
// Floating point
// =============================================================================

/// Relative tolerance for comparing float sums after rescaling
pub const SUM_TOLERANCE: f64 = 1e-9;
