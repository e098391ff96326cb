use crate::{error::SmallResult, storage::tuple::Cell};

use super::{AggregationState, Flag};

/// Emits the output of each row as soon as the row is processed.
///
/// Only the carried signal is retained, memory does not depend on the
/// partition size.
#[derive(Debug, Default)]
pub struct StreamingStrategy {
    state: AggregationState,
}

impl StreamingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, flag: Flag, signal: Option<&Cell>) -> Cell {
        self.state.update(flag, signal)
    }

    /// Nothing is held back, the returned sequence is always empty.
    pub fn finish(self) -> SmallResult<Vec<Cell>> {
        Ok(Vec::new())
    }
}
