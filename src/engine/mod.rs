//! Task engine: every mutating operation over the persisted list
//!
//! Each operation loads the list from the store, validates and applies the
//! mutation, saves the result back, and returns the new list. The store file
//! is the single source of truth; nothing is cached between operations.

pub mod history;

pub use history::History;

use crate::models::{CsvError, Priority, Task, from_csv, to_csv};
use crate::storage::{JsonStore, StoreError};
use chrono::NaiveDate;
use std::path::Path;
use thiserror::Error;

/// Errors returned by engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Index {index} out of bounds (list has {len} tasks)")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Unsupported file format: {0} (use .json or .csv)")]
    UnsupportedFormat(String),
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] CsvError),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Import/export file format, inferred from the path extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    /// Infer the format from a file path
    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FileFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(FileFormat::Csv),
            _ => Err(EngineError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Filter criteria for searching tasks
#[derive(Debug, Default, Clone)]
pub struct TaskFilter {
    /// Case-insensitive substring match on the description
    pub term: Option<String>,
    /// Match done state exactly (None = all)
    pub done: Option<bool>,
    /// Match priority exactly (None = all)
    pub priority: Option<Priority>,
}

impl TaskFilter {
    /// Check if a task matches the filter criteria
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(term) = &self.term
            && !task
                .description
                .to_lowercase()
                .contains(&term.to_lowercase())
        {
            return false;
        }

        if let Some(done) = self.done
            && task.done != done
        {
            return false;
        }

        if let Some(priority) = self.priority
            && task.priority != Some(priority)
        {
            return false;
        }

        true
    }
}

/// Task engine over a JSON store, with in-process undo/redo history
pub struct Engine {
    store: JsonStore,
    history: History,
}

impl Engine {
    /// Create an engine over the given store, with empty history
    pub fn new(store: JsonStore) -> Self {
        Engine {
            store,
            history: History::new(),
        }
    }

    /// Get the backing store
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Append a new undone task
    pub fn add(
        &mut self,
        description: impl Into<String>,
        priority: Option<Priority>,
        due: Option<NaiveDate>,
    ) -> Result<Vec<Task>, EngineError> {
        let mut tasks = self.store.load()?;
        self.history.record(&tasks);

        let mut task = Task::new(description);
        task.priority = priority;
        task.due = due;
        tasks.push(task);

        self.store.save(&tasks)?;
        Ok(tasks)
    }

    /// List all tasks in order
    pub fn list(&self) -> Result<Vec<Task>, EngineError> {
        Ok(self.store.load()?)
    }

    /// List tasks matching the filter, in their original order
    pub fn search(&self, filter: &TaskFilter) -> Result<Vec<Task>, EngineError> {
        let tasks = self.store.load()?;
        Ok(tasks.into_iter().filter(|t| filter.matches(t)).collect())
    }

    /// Mark the task at `index` as done (idempotent)
    pub fn mark_done(&mut self, index: usize) -> Result<Vec<Task>, EngineError> {
        self.set_done(index, true)
    }

    /// Mark the task at `index` as not done (idempotent)
    pub fn mark_undone(&mut self, index: usize) -> Result<Vec<Task>, EngineError> {
        self.set_done(index, false)
    }

    fn set_done(&mut self, index: usize, done: bool) -> Result<Vec<Task>, EngineError> {
        let mut tasks = self.store.load()?;
        check_index(index, tasks.len())?;
        self.history.record(&tasks);

        tasks[index].done = done;

        self.store.save(&tasks)?;
        Ok(tasks)
    }

    /// Replace the description of the task at `index`; priority and due date
    /// are replaced only when provided
    pub fn edit(
        &mut self,
        index: usize,
        description: impl Into<String>,
        priority: Option<Priority>,
        due: Option<NaiveDate>,
    ) -> Result<Vec<Task>, EngineError> {
        let mut tasks = self.store.load()?;
        check_index(index, tasks.len())?;
        self.history.record(&tasks);

        let task = &mut tasks[index];
        task.description = description.into();
        if let Some(p) = priority {
            task.priority = Some(p);
        }
        if let Some(d) = due {
            task.due = Some(d);
        }

        self.store.save(&tasks)?;
        Ok(tasks)
    }

    /// Move the task at `from` to position `to`
    ///
    /// Splice semantics: the task is removed and reinserted at `to` in the
    /// post-removal sequence, so moving index 0 to 2 in [A,B,C] yields
    /// [B,C,A]. Both indices must address an existing task; `to == len` is
    /// rejected rather than treated as append. Moving a task onto its own
    /// index succeeds and changes nothing.
    pub fn move_task(&mut self, from: usize, to: usize) -> Result<Vec<Task>, EngineError> {
        let mut tasks = self.store.load()?;
        check_index(from, tasks.len())?;
        check_index(to, tasks.len())?;
        self.history.record(&tasks);

        let task = tasks.remove(from);
        tasks.insert(to, task);

        self.store.save(&tasks)?;
        Ok(tasks)
    }

    /// Remove the task at `index`
    pub fn delete(&mut self, index: usize) -> Result<Vec<Task>, EngineError> {
        let mut tasks = self.store.load()?;
        check_index(index, tasks.len())?;
        self.history.record(&tasks);

        tasks.remove(index);

        self.store.save(&tasks)?;
        Ok(tasks)
    }

    /// Remove every task
    pub fn clear(&mut self) -> Result<Vec<Task>, EngineError> {
        let tasks = self.store.load()?;
        self.history.record(&tasks);

        let empty = Vec::new();
        self.store.save(&empty)?;
        Ok(empty)
    }

    /// Write the current list to `path` as JSON or CSV, by extension
    ///
    /// Non-mutating: the persisted list and the history are untouched.
    pub fn export_to(&self, path: &Path) -> Result<(), EngineError> {
        let format = FileFormat::from_path(path)?;
        let tasks = self.store.load()?;

        let content = match format {
            FileFormat::Json => serde_json::to_string_pretty(&tasks)?,
            FileFormat::Csv => to_csv(&tasks),
        };
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Replace the entire list with the parsed contents of `path`
    pub fn import_from(&mut self, path: &Path) -> Result<Vec<Task>, EngineError> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let imported = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Csv => from_csv(&content)?,
        };

        let current = self.store.load()?;
        self.history.record(&current);

        self.store.save(&imported)?;
        Ok(imported)
    }

    /// Restore the most recent undo snapshot
    ///
    /// Returns `Ok(None)` when there is nothing to undo; the list is left as
    /// it was.
    pub fn undo(&mut self) -> Result<Option<Vec<Task>>, EngineError> {
        let current = self.store.load()?;
        match self.history.undo(&current) {
            Some(snapshot) => {
                self.store.save(&snapshot)?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    /// Restore the most recent redo snapshot
    ///
    /// Returns `Ok(None)` when there is nothing to redo.
    pub fn redo(&mut self) -> Result<Option<Vec<Task>>, EngineError> {
        let current = self.store.load()?;
        match self.history.redo(&current) {
            Some(snapshot) => {
                self.store.save(&snapshot)?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }
}

fn check_index(index: usize, len: usize) -> Result<(), EngineError> {
    if index < len {
        Ok(())
    } else {
        Err(EngineError::IndexOutOfBounds { index, len })
    }
}
