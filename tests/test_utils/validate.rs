use small_window::{Cell, Row};

use super::CARRIER;

fn is_carrier(row: &Row) -> bool {
    row.get_cell(0) == Some(&Cell::Int64(CARRIER))
}

fn carries_value(row: &Row) -> bool {
    is_carrier(row) && !row.get_cell(1).map_or(true, Cell::is_null)
}

/// The outputs computed the slow way: look back from every subject for the
/// closest carrier with a non-null signal.
pub fn reference_outputs(rows: &[Row]) -> Vec<Cell> {
    (0..rows.len())
        .map(|i| {
            if is_carrier(&rows[i]) {
                return Cell::Null;
            }
            rows[..i]
                .iter()
                .rev()
                .find(|row| carries_value(row))
                .and_then(|row| row.get_cell(1).cloned())
                .unwrap_or(Cell::Null)
        })
        .collect()
}

/// Check the carry-forward, leading-null and self-exclusion laws.
pub fn check_laws(rows: &[Row], outputs: &[Cell]) {
    assert_eq!(rows.len(), outputs.len());

    // self-exclusion
    for (row, output) in rows.iter().zip(outputs) {
        if is_carrier(row) {
            assert_eq!(output, &Cell::Null, "carrier row {} leaked a value", row);
        }
    }

    // leading-null
    let first_carrier = rows.iter().position(carries_value).unwrap_or(rows.len());
    for output in &outputs[..first_carrier] {
        assert_eq!(output, &Cell::Null);
    }

    // carry-forward: subjects with no value-carrying carrier between them
    // see the same output
    let mut last_subject: Option<usize> = None;
    for (i, row) in rows.iter().enumerate() {
        if carries_value(row) {
            last_subject = None;
        } else if !is_carrier(row) {
            if let Some(prev) = last_subject {
                assert_eq!(outputs[prev], outputs[i], "rows {} and {} differ", prev, i);
            }
            last_subject = Some(i);
        }
    }
}
