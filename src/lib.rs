pub mod error;
pub mod executor;
pub mod observation;
pub mod storage;
pub mod utils;
pub mod window;

mod log;

pub use error::{ErrorKind, SmallError, SmallResult};
pub use executor::{evaluate_partitions, run_partition, split_partitions, PartitionCursor, VecCursor};
pub use storage::tuple::{Cell, Row};
pub use window::{
    CarryForwardColumns, Evaluator, ExecutionMode, FrameBound, StrategyKind, WindowConfig,
    WindowFrame,
};
