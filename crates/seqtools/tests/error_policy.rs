use seqtools::{
    ReplaySource, SeqError, loop_to, pick, pick_n, remove_at_index, resize_array, safe_splice,
    scale_to_range, scale_to_sum, take_n, take_to,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_empty_sequence_errors() {
    init_tracing();
    let empty: [f64; 0] = [];
    let mut src = ReplaySource::new([0.5]);

    assert_eq!(resize_array(3, &empty), Err(SeqError::EmptySequence));
    assert_eq!(take_n(&empty, 3), Err(SeqError::EmptySequence));
    assert_eq!(loop_to(3.0, &empty), Err(SeqError::EmptySequence));
    assert_eq!(scale_to_sum(3.0, &empty), Err(SeqError::EmptySequence));
    assert_eq!(pick(&empty, &mut src), Err(SeqError::EmptySequence));
    assert_eq!(pick_n(2, &empty, &mut src), Err(SeqError::EmptySequence));
}

#[test]
fn test_zero_length_requests_on_empty_input_succeed() {
    let empty: [u8; 0] = [];
    let mut src = ReplaySource::new([0.5]);

    assert!(resize_array(0, &empty).unwrap().is_empty());
    assert!(take_n(&empty, 0).unwrap().is_empty());
    assert!(pick_n(0, &empty, &mut src).unwrap().is_empty());
}

#[test]
fn test_degenerate_range() {
    init_tracing();
    let err = scale_to_range(&[1.0, 2.0], 5.0, 5.0, 0.0, 1.0).unwrap_err();
    assert_eq!(err, SeqError::DegenerateRange { min: 5.0, max: 5.0 });
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "invalid argument: degenerate range [5, 5]");
}

#[test]
fn test_zero_sum() {
    assert_eq!(scale_to_sum(1.0, &[0.0, 0.0]), Err(SeqError::ZeroSum));
    assert_eq!(loop_to(1.0, &[0.0]), Err(SeqError::ZeroSum));
}

#[test]
fn test_negative_magnitudes() {
    assert_eq!(
        take_to(5.0, &[1.0, 2.0, -3.0]),
        Err(SeqError::NegativeMagnitude {
            index: 2,
            value: -3.0
        })
    );
}

#[test]
fn test_index_out_of_range() {
    init_tracing();
    let err = safe_splice(&[1, 2, 3], 1, 4, None).unwrap_err();
    assert_eq!(err, SeqError::IndexOutOfRange { index: 4, len: 3 });
    assert!(!err.is_invalid_argument());

    assert_eq!(
        remove_at_index(&[1, 2, 3], &1, 10),
        Err(SeqError::IndexOutOfRange { index: 10, len: 3 })
    );
}
