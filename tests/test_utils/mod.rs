mod data;
mod setup;
mod validate;

pub use data::*;
pub use setup::*;
pub use validate::*;
