//! todo - flat-file to-do list manager
//!
//! This library provides the core functionality for managing an ordered task
//! list persisted as a single JSON file: CRUD, reordering, search, CSV/JSON
//! import and export, and bounded undo/redo history.

pub mod cli;
pub mod engine;
pub mod models;
pub mod storage;

pub use engine::{Engine, EngineError, FileFormat, History, TaskFilter};
pub use models::{Priority, Task};
pub use storage::{JsonStore, StoreError};
