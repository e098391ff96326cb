pub mod tuple;
