//! Carry-forward window function: every row gets the most recent carrier
//! signal of its partition, as of that row's position in the order.

mod buffered;
mod config;
mod evaluator;
mod mode;
mod state;
mod streaming;

pub use buffered::BufferedStrategy;
pub use config::{CarryForwardColumns, WindowConfig};
pub use evaluator::Evaluator;
pub use mode::{validate_mode, ExecutionMode, FrameBound, StrategyKind, WindowFrame};
pub use state::{AggregationState, Flag};
pub use streaming::StreamingStrategy;
