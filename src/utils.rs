use crate::storage::tuple::{Cell, Row};

pub use crate::log::init_log;

/// Build a two column `(flag, signal)` row, the shape most callers feed
/// to the evaluator.
pub fn flag_signal_row(flag: i64, signal: &str) -> Row {
    Row::new(vec![Cell::Int64(flag), Cell::String(signal.to_string())])
}

/// Build a `(partition key, flag, signal)` row for the multi-partition
/// driver.
pub fn keyed_row(key: i64, flag: i64, signal: &str) -> Row {
    Row::new(vec![
        Cell::Int64(key),
        Cell::Int64(flag),
        Cell::String(signal.to_string()),
    ])
}
