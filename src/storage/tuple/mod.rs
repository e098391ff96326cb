mod cell;
mod row;

pub use cell::Cell;
pub use row::Row;
