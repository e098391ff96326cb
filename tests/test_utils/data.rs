use rand::prelude::*;
use small_window::{utils::flag_signal_row, Cell, Row};

pub const SUBJECT: i64 = 0;
pub const CARRIER: i64 = 1;

pub fn new_rows(pairs: &[(i64, &str)]) -> Vec<Row> {
    pairs
        .iter()
        .map(|(flag, signal)| flag_signal_row(*flag, signal))
        .collect()
}

/// `None` is a null output.
pub fn expected(values: &[Option<&str>]) -> Vec<Cell> {
    values
        .iter()
        .map(|v| match v {
            Some(s) => Cell::from(*s),
            None => Cell::Null,
        })
        .collect()
}

/// A random partition of `len` rows, roughly a quarter of them carriers.
/// Some carriers have a null signal.
pub fn random_partition(rng: &mut ThreadRng, len: usize) -> Vec<Row> {
    let mut rows = Vec::with_capacity(len);
    for _ in 0..len {
        let flag = if rng.gen_bool(0.25) { CARRIER } else { SUBJECT };
        let signal = if flag == CARRIER && rng.gen_bool(0.1) {
            Cell::Null
        } else {
            Cell::Int64(rng.gen_range(0, 100))
        };
        rows.push(Row::new(vec![Cell::Int64(flag), signal]));
    }
    rows
}
