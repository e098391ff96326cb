mod test_utils;

use small_window::{
    run_partition, CarryForwardColumns, Cell, ErrorKind, Evaluator, ExecutionMode, FrameBound,
    Row, VecCursor, WindowConfig, WindowFrame,
};
use test_utils::*;

#[test]
fn test_partial_merge_rejected() {
    setup();

    let err = Evaluator::setup(
        ExecutionMode::PartialMerge,
        Some(&WindowFrame::running()),
        CarryForwardColumns::default(),
    )
    .err()
    .unwrap();
    assert_eq!(err.kind(), ErrorKind::UnsupportedMode);
}

#[test]
fn test_unsupported_modes_rejected() {
    setup();

    for mode in &[
        ExecutionMode::PartialInit,
        ExecutionMode::PartialMerge,
        ExecutionMode::Final,
    ] {
        let err = Evaluator::setup(*mode, None, CarryForwardColumns::default())
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::UnsupportedMode);
    }
}

#[test]
fn test_streaming_needs_running_frame() {
    setup();

    let columns = CarryForwardColumns::default();

    let err = Evaluator::setup(ExecutionMode::StreamingIncremental, None, columns)
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::UnsupportedMode);

    let sliding = WindowFrame::new(FrameBound::Preceding(1), FrameBound::CurrentRow);
    let err = Evaluator::setup(ExecutionMode::StreamingIncremental, Some(&sliding), columns)
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::UnsupportedMode);
}

/// A rejected configuration fails before any row is pulled from the input.
#[test]
fn test_rejected_before_rows() {
    setup();

    let cursor = VecCursor::new(new_rows(&[(CARRIER, "1"), (SUBJECT, "2")]));
    let config = WindowConfig::new(ExecutionMode::Final, None);

    let err = run_partition(cursor, &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedMode);
}

#[test]
fn test_custom_columns() {
    setup();

    // (signal, payload, flag)
    let rows = vec![
        Row::new(vec![Cell::from("s1"), Cell::Int64(100), Cell::Int64(1)]),
        Row::new(vec![Cell::from("s2"), Cell::Int64(200), Cell::Int64(0)]),
    ];
    let config = WindowConfig::streaming().with_columns(CarryForwardColumns::new(2, 0));

    let out = run_partition(VecCursor::new(rows), &config).unwrap();
    assert_eq!(out[0].get_cell(3), Some(&Cell::Null));
    assert_eq!(out[1].get_cell(3), Some(&Cell::from("s1")));
}
