use crate::window::Flag;

/// Counters for one partition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PartitionStats {
    pub rows: usize,
    pub carriers: usize,
    pub subjects: usize,

    /// Largest number of outputs held by the evaluator at any point. Always
    /// zero in streaming mode.
    pub peak_buffered: usize,
}

impl PartitionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, flag: Flag, buffered: usize) {
        self.rows += 1;
        match flag {
            Flag::Carrier => self.carriers += 1,
            Flag::Subject => self.subjects += 1,
        }
        self.peak_buffered = self.peak_buffered.max(buffered);
    }
}
