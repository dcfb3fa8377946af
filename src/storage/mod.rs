//! Storage layer for the task file

pub mod json_store;

pub use json_store::{JsonStore, StoreError};
