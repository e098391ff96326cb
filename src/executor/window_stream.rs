use std::collections::VecDeque;

use crate::{
    error::{SmallError, SmallResult},
    storage::tuple::{Cell, Row},
    window::{Evaluator, StrategyKind, WindowConfig},
};

use super::PartitionCursor;

/// Wraps the cursor of one partition and yields its rows with the
/// carry-forward output appended as the last column.
///
/// In streaming mode one input row is pulled per output row. In buffered mode
/// the first pull drains the whole partition.
///
/// Once an error has been returned the partition is dead: the evaluator
/// and any pending rows are dropped and every later pull returns the same
/// error.
pub struct WindowStream<C: PartitionCursor> {
    input: C,
    evaluator: Option<Evaluator>,

    // buffered mode only
    held: Vec<Row>,
    ready: VecDeque<Row>,

    failed: Option<SmallError>,
}

impl<C: PartitionCursor> WindowStream<C> {
    pub fn new(input: C, config: &WindowConfig) -> SmallResult<Self> {
        let evaluator = Evaluator::from_config(config)?;
        Ok(Self {
            input,
            evaluator: Some(evaluator),
            held: Vec::new(),
            ready: VecDeque::new(),
            failed: None,
        })
    }

    fn pull(&mut self) -> SmallResult<Option<Row>> {
        if let Some(row) = self.ready.pop_front() {
            return Ok(Some(row));
        }

        let evaluator = match self.evaluator.as_mut() {
            Some(evaluator) => evaluator,
            None => return Ok(None),
        };

        match evaluator.kind() {
            StrategyKind::Streaming => match self.input.next_row()? {
                Some(row) => match evaluator.process(&row)? {
                    Some(output) => Ok(Some(row.append(output))),
                    None => Err(SmallError::internal_invariant(
                        "streaming evaluator produced no output for a row",
                    )),
                },
                None => {
                    self.close()?;
                    Ok(None)
                }
            },
            StrategyKind::Buffered => {
                while let Some(row) = self.input.next_row()? {
                    evaluator.process(&row)?;
                    self.held.push(row);
                }

                let outputs = self.close()?;
                if outputs.len() != self.held.len() {
                    return Err(SmallError::internal_invariant(&format!(
                        "got {} outputs for {} rows",
                        outputs.len(),
                        self.held.len()
                    )));
                }

                self.ready = self
                    .held
                    .drain(..)
                    .zip(outputs)
                    .map(|(row, output)| row.append(output))
                    .collect();
                Ok(self.ready.pop_front())
            }
        }
    }

    fn close(&mut self) -> SmallResult<Vec<Cell>> {
        match self.evaluator.take() {
            Some(evaluator) => evaluator.finish(),
            None => Ok(Vec::new()),
        }
    }
}

impl<C: PartitionCursor> PartitionCursor for WindowStream<C> {
    fn next_row(&mut self) -> SmallResult<Option<Row>> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        match self.pull() {
            Ok(row) => Ok(row),
            Err(e) => {
                self.evaluator = None;
                self.held.clear();
                self.ready.clear();
                self.failed = Some(e.clone());
                Err(e)
            }
        }
    }
}

/// Evaluate one whole partition and return its rows with the output
/// appended. On error nothing of the partition is returned.
pub fn run_partition<C: PartitionCursor>(input: C, config: &WindowConfig) -> SmallResult<Vec<Row>> {
    let mut stream = WindowStream::new(input, config)?;
    let mut rows = Vec::new();
    while let Some(row) = stream.next_row()? {
        rows.push(row);
    }
    Ok(rows)
}
