use crate::{
    error::{SmallError, SmallResult},
    storage::tuple::Cell,
};

use super::{AggregationState, Flag};

/// Materializes one output per row and hands them all back at `finish`.
///
/// Memory grows with the partition, so a single very large partition can
/// exhaust it. Prefer [`super::StreamingStrategy`] unless the caller needs
/// the whole partition at once anyway.
#[derive(Debug, Default)]
pub struct BufferedStrategy {
    state: AggregationState,
    outputs: Vec<Cell>,

    // counted apart from `outputs` so `finish` can check one against the other
    processed: usize,
}

impl BufferedStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, flag: Flag, signal: Option<&Cell>) {
        self.processed += 1;
        let output = self.state.update(flag, signal);
        self.outputs.push(output);
    }

    pub fn buffered(&self) -> usize {
        self.outputs.len()
    }

    /// Return every output in arrival order.
    ///
    /// The sequence must be exactly as long as the number of processed rows,
    /// a mismatch is reported as an internal invariant error and never
    /// patched up.
    pub fn finish(self) -> SmallResult<Vec<Cell>> {
        if self.outputs.len() != self.processed {
            return Err(SmallError::internal_invariant(&format!(
                "buffered {} outputs for {} processed rows",
                self.outputs.len(),
                self.processed
            )));
        }
        Ok(self.outputs)
    }
}
