//! JSON file storage for the task list

use crate::models::Task;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors related to reading or writing the task file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed task file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Flat-file task storage
///
/// The whole list is read and rewritten on every operation; the file on disk
/// is the single source of truth.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStore { path: path.into() }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list
    ///
    /// A missing file is an empty list. A file that exists but does not
    /// parse is an error; it is never silently replaced.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let tasks = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    /// Save the task list, replacing the file contents in full
    ///
    /// Writes to a temporary file in the same directory and renames it over
    /// the target, so a failed write never leaves a truncated file behind.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(tasks)?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
