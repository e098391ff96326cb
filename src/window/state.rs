use crate::{
    error::{SmallError, SmallResult},
    storage::tuple::Cell,
};

/// The two-valued discriminator read from every row.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Flag {
    /// Asks for the most recently carried signal.
    Subject,
    /// Supplies a new signal to carry forward.
    Carrier,
}

impl Flag {
    /// `0`/`false` is a subject, `1`/`true` is a carrier. Anything else,
    /// `Null` included, is rejected.
    pub fn decode(cell: &Cell) -> SmallResult<Flag> {
        match cell {
            Cell::Int64(0) | Cell::Bool(false) => Ok(Flag::Subject),
            Cell::Int64(1) | Cell::Bool(true) => Ok(Flag::Carrier),
            other => Err(SmallError::invalid_flag(&format!(
                "flag must be 0 (subject) or 1 (carrier), got {}",
                other
            ))),
        }
    }
}

/// Per-partition memory shared by both strategies: the most recent non-null
/// carrier signal seen so far.
#[derive(Debug, Default)]
pub struct AggregationState {
    current_signal: Option<Cell>,
}

impl AggregationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_signal(&self) -> Option<&Cell> {
        self.current_signal.as_ref()
    }

    /// Apply one row and return its output.
    ///
    /// A subject reads the carried value without touching it. A carrier
    /// updates the carried value first and then outputs null, so its own
    /// signal is only visible to later rows. A null signal on a carrier
    /// leaves the carried value as it was.
    pub fn update(&mut self, flag: Flag, signal: Option<&Cell>) -> Cell {
        match flag {
            Flag::Subject => self.current_signal.clone().into(),
            Flag::Carrier => {
                if let Some(signal) = signal.filter(|s| !s.is_null()) {
                    self.current_signal = Some(signal.clone());
                }
                Cell::Null
            }
        }
    }
}
