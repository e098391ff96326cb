use small_window::{
    utils, CarryForwardColumns, Cell, Evaluator, ExecutionMode, Row, SmallResult, StrategyKind,
    WindowFrame,
};

/// # Conduct the initialization
///
/// - Setting up log configurations.
pub fn setup() {
    utils::init_log();
}

pub fn new_buffered() -> Evaluator {
    let evaluator =
        Evaluator::setup(ExecutionMode::Complete, None, CarryForwardColumns::default()).unwrap();
    assert_eq!(evaluator.kind(), StrategyKind::Buffered);
    evaluator
}

pub fn new_streaming() -> Evaluator {
    let evaluator = Evaluator::setup(
        ExecutionMode::StreamingIncremental,
        Some(&WindowFrame::running()),
        CarryForwardColumns::default(),
    )
    .unwrap();
    assert_eq!(evaluator.kind(), StrategyKind::Streaming);
    evaluator
}

/// Run a whole partition in buffered mode. Every `process` call must return
/// nothing, the outputs come from `finish`.
pub fn run_buffered(rows: &[Row]) -> SmallResult<Vec<Cell>> {
    let mut evaluator = new_buffered();
    for row in rows {
        assert_eq!(evaluator.process(row)?, None);
    }
    evaluator.finish()
}

/// Run a whole partition in streaming mode and concatenate the per-row
/// outputs. `finish` must not return anything.
pub fn run_streaming(rows: &[Row]) -> SmallResult<Vec<Cell>> {
    let mut evaluator = new_streaming();
    let mut outputs = Vec::new();
    for row in rows {
        let output = evaluator.process(row)?.expect("streaming mode returns an output per row");
        outputs.push(output);
    }
    assert_eq!(evaluator.stats().peak_buffered, 0);
    assert!(evaluator.finish()?.is_empty());
    Ok(outputs)
}
