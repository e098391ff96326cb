mod cursor;
mod driver;
mod window_stream;

pub use cursor::{PartitionCursor, VecCursor};
pub use driver::{evaluate_partitions, split_partitions};
pub use window_stream::{run_partition, WindowStream};
