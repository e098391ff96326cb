use std::collections::BTreeMap;

use log::{debug, error};

use crate::{
    error::{SmallError, SmallResult},
    observation::{PartitionStats, Span},
    storage::tuple::{Cell, Row},
};

use super::{
    mode::validate_mode, BufferedStrategy, CarryForwardColumns, ExecutionMode, Flag,
    StrategyKind, StreamingStrategy, WindowConfig, WindowFrame,
};

enum Strategy {
    Buffered(BufferedStrategy),
    Streaming(StreamingStrategy),
}

/// The carry-forward evaluator for exactly one partition.
///
/// Rows go in through [`Evaluator::process`] in their final order. In
/// streaming mode every call returns the output of that row, in buffered mode
/// the outputs come back together from [`Evaluator::finish`]. `finish` takes
/// the evaluator by value, a new one is set up for every partition.
///
/// After a data error the partition is aborted: every later call fails with
/// the same error and nothing more is produced.
pub struct Evaluator {
    columns: CarryForwardColumns,
    strategy: Strategy,

    stats: PartitionStats,
    span: Span,

    aborted: Option<SmallError>,
}

impl Evaluator {
    /// Validate the mode and frame, then allocate the partition state.
    ///
    /// Unsupported combinations fail here, before anything is allocated.
    pub fn setup(
        mode: ExecutionMode,
        frame: Option<&WindowFrame>,
        columns: CarryForwardColumns,
    ) -> SmallResult<Self> {
        let kind = validate_mode(mode, frame)?;

        let strategy = match kind {
            StrategyKind::Buffered => Strategy::Buffered(BufferedStrategy::new()),
            StrategyKind::Streaming => Strategy::Streaming(StreamingStrategy::new()),
        };

        let span = Span::new(BTreeMap::new())
            .tag("mode", &format!("{:?}", mode))
            .tag("strategy", &format!("{:?}", kind));

        Ok(Self {
            columns,
            strategy,
            stats: PartitionStats::new(),
            span,
            aborted: None,
        })
    }

    pub fn from_config(config: &WindowConfig) -> SmallResult<Self> {
        Self::setup(config.mode, config.frame.as_ref(), config.columns)
    }

    pub fn kind(&self) -> StrategyKind {
        match self.strategy {
            Strategy::Buffered(_) => StrategyKind::Buffered,
            Strategy::Streaming(_) => StrategyKind::Streaming,
        }
    }

    pub fn stats(&self) -> &PartitionStats {
        &self.stats
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    /// Number of outputs currently held back for `finish`.
    pub fn buffered(&self) -> usize {
        match &self.strategy {
            Strategy::Buffered(s) => s.buffered(),
            Strategy::Streaming(_) => 0,
        }
    }

    /// Feed the next row of the partition.
    ///
    /// Returns `Some(output)` in streaming mode and `None` in buffered mode.
    pub fn process(&mut self, row: &Row) -> SmallResult<Option<Cell>> {
        if let Some(err) = &self.aborted {
            return Err(err.clone());
        }

        let flag = match self.read_flag(row) {
            Ok(flag) => flag,
            Err(e) => {
                error!(
                    "aborting partition after {} rows: {}, row: {}",
                    self.stats.rows, e, row
                );
                self.aborted = Some(e.clone());
                return Err(e);
            }
        };

        // a missing signal column reads as a null signal
        let signal = row.get_cell(self.columns.signal);

        let output = match &mut self.strategy {
            Strategy::Buffered(s) => {
                s.process(flag, signal);
                None
            }
            Strategy::Streaming(s) => Some(s.process(flag, signal)),
        };

        let buffered = self.buffered();
        self.stats.record(flag, buffered);
        Ok(output)
    }

    /// Close the partition and release its state.
    ///
    /// Buffered mode returns one output per processed row, streaming mode
    /// returns an empty sequence.
    pub fn finish(mut self) -> SmallResult<Vec<Cell>> {
        let elapsed = self.span.finish();

        if let Some(err) = self.aborted {
            return Err(err);
        }

        let outputs = match self.strategy {
            Strategy::Buffered(s) => s.finish()?,
            Strategy::Streaming(s) => s.finish()?,
        };

        debug!(
            "partition finished {}, rows: {}, carriers: {}, subjects: {}, peak buffered: {}, elapsed: {:?}",
            self.span.serialize_tags(),
            self.stats.rows,
            self.stats.carriers,
            self.stats.subjects,
            self.stats.peak_buffered,
            elapsed,
        );

        Ok(outputs)
    }

    fn read_flag(&self, row: &Row) -> SmallResult<Flag> {
        let cell = row.get_cell(self.columns.flag).ok_or_else(|| {
            SmallError::invalid_flag(&format!(
                "row {} has no flag column at index {}",
                row, self.columns.flag
            ))
        })?;
        Flag::decode(cell)
    }
}
