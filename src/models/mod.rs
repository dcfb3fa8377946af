//! Data models for todo

pub mod csv;
pub mod task;

pub use csv::{CsvError, from_csv, to_csv};
pub use task::{Priority, Task};
