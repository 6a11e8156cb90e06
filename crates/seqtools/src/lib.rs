//! seqtools - Sequence helpers for generative and algorithmic composition
//!
//! This crate provides functionality to:
//! - Resize, tile and magnitude-truncate sequences
//! - Remove, filter and splice elements without mutating the input
//! - Rescale numeric sequences to a range or a target sum
//! - Sort, zip and shuffle sequences
//! - Draw random elements from an injectable random source

pub mod constants;
pub mod domain;
pub mod error;
pub mod random;

// Re-export commonly used types
pub use constants::*;
pub use domain::build::build_array;
pub use domain::combine::{Segment, build_zip, zip};
pub use domain::numeric::{flip_booleans, scale_to_range, scale_to_sum, sum};
pub use domain::ordering::{high_to_low_sort, low_to_high_sort};
pub use domain::removal::{
    gather_by_substring, remove_all_instance, remove_at_index, remove_first_instance,
    remove_multiple_items, safe_splice,
};
pub use domain::resize::{loop_to, resize_array, take_n, take_to};
pub use error::{Result, SeqError};
pub use random::{IndexSelection, RandomSource, ReplaySource, pick, pick_n, pick_with, shuffle};

#[cfg(feature = "hashset-filter")]
pub use domain::removal::remove_multiple_items_hashed;
