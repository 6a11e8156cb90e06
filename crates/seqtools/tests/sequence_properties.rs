// Property-based tests for the sequence helpers using proptest.
//
// Covers the length, identity, sum and permutation invariants of the
// resizing, scaling and shuffling operations.
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use seqtools::{
    SUM_TOLERANCE, low_to_high_sort, pick, resize_array, scale_to_sum, shuffle, sum, take_n,
    take_to,
};

fn non_empty_ints() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 1..64)
}

fn positive_floats() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.001f64..1000.0, 1..64)
}

proptest! {
    #[test]
    fn test_resize_array_has_exact_length(seq in non_empty_ints(), n in 0usize..300) {
        let resized = resize_array(n, &seq).unwrap();
        prop_assert_eq!(resized.len(), n);
        // Every element follows the tiling pattern
        for (i, value) in resized.iter().enumerate() {
            prop_assert_eq!(*value, seq[i % seq.len()]);
        }
    }

    #[test]
    fn test_resize_array_own_length_is_identity(seq in non_empty_ints()) {
        prop_assert_eq!(resize_array(seq.len(), &seq).unwrap(), seq);
    }

    #[test]
    fn test_take_n_agrees_with_resize(seq in non_empty_ints(), n in 0usize..300) {
        prop_assert_eq!(take_n(&seq, n).unwrap(), resize_array(n, &seq).unwrap());
    }

    #[test]
    fn test_scale_to_sum_reaches_target(vals in positive_floats(), target in -500.0f64..500.0) {
        let scaled = scale_to_sum(target, &vals).unwrap();
        let tolerance = SUM_TOLERANCE * target.abs().max(1.0) * vals.len() as f64;
        prop_assert!((sum(&scaled) - target).abs() <= tolerance);
    }

    #[test]
    fn test_take_to_sums_to_target(vals in prop::collection::vec(0u32..50, 0..64), target in 0u32..500) {
        let taken = take_to(target, &vals).unwrap();
        let total: u32 = vals.iter().sum();
        if total >= target {
            prop_assert_eq!(sum(&taken), target);
        } else {
            prop_assert_eq!(taken, vals);
        }
    }

    #[test]
    fn test_shuffle_is_permutation(seq in non_empty_ints(), seed in any::<u64>()) {
        let original = seq.clone();
        let shuffled = shuffle(&seq, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(&seq, &original);
        prop_assert_eq!(low_to_high_sort(&shuffled), low_to_high_sort(&seq));
    }

    #[test]
    fn test_pick_returns_member(seq in non_empty_ints(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..16 {
            let picked = pick(&seq, &mut rng).unwrap();
            prop_assert!(seq.contains(&picked));
        }
    }
}
