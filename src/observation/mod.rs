mod span;
mod stats;

pub use span::Span;
pub use stats::PartitionStats;
