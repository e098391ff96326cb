use std::{collections::VecDeque, iter::FromIterator};

use crate::{error::SmallResult, storage::tuple::Row};

/// Delivers the rows of one partition, already in their final order.
pub trait PartitionCursor {
    /// The next row, or `None` once the partition is exhausted.
    fn next_row(&mut self) -> SmallResult<Option<Row>>;
}

/// A cursor over rows that are already in memory.
pub struct VecCursor {
    rows: VecDeque<Row>,
}

impl VecCursor {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl FromIterator<Row> for VecCursor {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl PartitionCursor for VecCursor {
    fn next_row(&mut self) -> SmallResult<Option<Row>> {
        Ok(self.rows.pop_front())
    }
}
