//! Deterministic replay source

use super::RandomSource;

/// Largest `f64` strictly below 1.0
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Replays a fixed list of unit floats, cycling when exhausted
///
/// Values are clamped into `[0, 1)`; NaN reads as 0. An empty list always
/// yields 0.
#[derive(Clone, Debug, Default)]
pub struct ReplaySource {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplaySource {
    /// Create a source replaying `values` in order
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ReplaySource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;

        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, BELOW_ONE)
        }
    }
}
