use super::{ExecutionMode, WindowFrame};

/// Where the evaluator finds its inputs inside a row.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CarryForwardColumns {
    pub flag: usize,
    pub signal: usize,
}

impl CarryForwardColumns {
    pub fn new(flag: usize, signal: usize) -> Self {
        Self { flag, signal }
    }
}

impl Default for CarryForwardColumns {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

/// Everything needed to set up one evaluator per partition.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct WindowConfig {
    pub mode: ExecutionMode,
    pub frame: Option<WindowFrame>,
    pub columns: CarryForwardColumns,
}

impl WindowConfig {
    pub fn new(mode: ExecutionMode, frame: Option<WindowFrame>) -> Self {
        Self {
            mode,
            frame,
            columns: CarryForwardColumns::default(),
        }
    }

    /// `Complete` mode, whole partition buffered.
    pub fn buffered() -> Self {
        Self::new(ExecutionMode::Complete, None)
    }

    /// `StreamingIncremental` over the running frame.
    pub fn streaming() -> Self {
        Self::new(
            ExecutionMode::StreamingIncremental,
            Some(WindowFrame::running()),
        )
    }

    pub fn with_columns(mut self, columns: CarryForwardColumns) -> Self {
        self.columns = columns;
        self
    }
}
