use std::fmt;

use log::debug;

use crate::error::{SmallError, SmallResult};

/// The lifecycle modes a host may ask an aggregate-like evaluator to run in.
///
/// Only `Complete` and `StreamingIncremental` make sense for a carry-forward:
/// the carried value depends on the full row order, so it has no partial or
/// merge form.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ExecutionMode {
    Complete,
    PartialInit,
    PartialMerge,
    Final,
    StreamingIncremental,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FrameBound {
    /// `UNBOUNDED PRECEDING`
    UnboundedPreceding,
    /// `<N> PRECEDING`
    Preceding(usize),
    /// `CURRENT ROW`
    CurrentRow,
    /// `<N> FOLLOWING`
    Following(usize),
    /// `UNBOUNDED FOLLOWING`
    UnboundedFollowing,
}

/// A ROWS frame.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct WindowFrame {
    pub start: FrameBound,
    pub end: FrameBound,
}

impl WindowFrame {
    pub fn new(start: FrameBound, end: FrameBound) -> Self {
        Self { start, end }
    }

    /// `ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW`
    pub fn running() -> Self {
        Self::new(FrameBound::UnboundedPreceding, FrameBound::CurrentRow)
    }

    pub fn is_running(&self) -> bool {
        *self == Self::running()
    }
}

impl fmt::Display for WindowFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ROWS BETWEEN {:?} AND {:?}", self.start, self.end)
    }
}

/// The strategies an evaluator can actually run with. Anything outside this
/// set has been rejected by [`validate_mode`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StrategyKind {
    /// Whole-partition buffering, outputs emitted at `finish`.
    Buffered,
    /// One output per input row, O(1) memory.
    Streaming,
}

/// Check the requested mode and frame before any state is allocated.
///
/// - `Complete` runs buffered. It takes no frame, or the running frame.
/// - `StreamingIncremental` runs streaming and requires the running frame.
/// - Every other combination fails with an unsupported-mode error.
pub fn validate_mode(mode: ExecutionMode, frame: Option<&WindowFrame>) -> SmallResult<StrategyKind> {
    let kind = match (mode, frame) {
        (ExecutionMode::Complete, None) => StrategyKind::Buffered,
        (ExecutionMode::Complete, Some(frame)) if frame.is_running() => StrategyKind::Buffered,
        (ExecutionMode::StreamingIncremental, Some(frame)) if frame.is_running() => {
            StrategyKind::Streaming
        }
        (ExecutionMode::StreamingIncremental, None) => {
            return Err(SmallError::unsupported_mode(
                "streaming mode requires a ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW frame",
            ));
        }
        (ExecutionMode::Complete, Some(frame))
        | (ExecutionMode::StreamingIncremental, Some(frame)) => {
            return Err(SmallError::unsupported_mode(&format!(
                "mode {:?} does not support frame {}",
                mode, frame
            )));
        }
        (ExecutionMode::PartialInit, _)
        | (ExecutionMode::PartialMerge, _)
        | (ExecutionMode::Final, _) => {
            return Err(SmallError::unsupported_mode(&format!(
                "mode {:?} has no meaning for an order-dependent carry-forward",
                mode
            )));
        }
    };

    debug!("mode {:?} accepted, strategy: {:?}", mode, kind);
    Ok(kind)
}
