//! Random selection
//!
//! Selection functions draw from an injected `RandomSource` rather than an
//! ambient generator, so callers can seed them for reproducible output.
//!
//! ## Sources
//!
//! - Any `rand::RngCore` (`rand::thread_rng()`, a seeded `StdRng`, ...)
//! - `ReplaySource`: replays a fixed list of unit floats

mod replay;
mod select;

pub use replay::ReplaySource;
pub use select::{IndexSelection, pick, pick_n, pick_with, shuffle};

use rand::{Rng, RngCore};

/// A producer of uniform floats in `[0, 1)`
pub trait RandomSource {
    /// Next unit float in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}
