//! Undo/redo history of task-list snapshots

use crate::models::Task;

/// Maximum number of undo snapshots retained
const UNDO_LIMIT: usize = 20;

/// Bounded undo/redo stacks of full list snapshots
///
/// Owned by the engine and empty at construction; history does not survive
/// the process. Snapshots are deep copies of the list, newest last.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Vec<Task>>,
    redo: Vec<Vec<Task>>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        History::default()
    }

    /// Record the pre-mutation state of the list
    ///
    /// Called before every mutation. Evicts the oldest snapshot once the
    /// undo stack holds `UNDO_LIMIT` entries, and clears the redo stack.
    pub fn record(&mut self, tasks: &[Task]) {
        self.undo.push(tasks.to_vec());
        if self.undo.len() > UNDO_LIMIT {
            self.undo.remove(0);
        }
        self.redo.clear();
    }

    /// Pop the newest undo snapshot, pushing `current` onto the redo stack
    ///
    /// Returns `None` when there is nothing to undo; `current` is untouched
    /// in that case.
    pub fn undo(&mut self, current: &[Task]) -> Option<Vec<Task>> {
        let snapshot = self.undo.pop()?;
        self.redo.push(current.to_vec());
        Some(snapshot)
    }

    /// Pop the newest redo snapshot, pushing `current` onto the undo stack
    ///
    /// Returns `None` when there is nothing to redo. The undo push here does
    /// not clear the redo stack.
    pub fn redo(&mut self, current: &[Task]) -> Option<Vec<Task>> {
        let snapshot = self.redo.pop()?;
        self.undo.push(current.to_vec());
        Some(snapshot)
    }

    /// Number of undo snapshots available
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of redo snapshots available
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(descriptions: &[&str]) -> Vec<Task> {
        descriptions.iter().map(|d| Task::new(*d)).collect()
    }

    #[test]
    fn test_empty_history_has_nothing_to_undo_or_redo() {
        let mut history = History::new();
        assert!(history.undo(&list(&["a"])).is_none());
        assert!(history.redo(&list(&["a"])).is_none());
    }

    #[test]
    fn test_undo_restores_recorded_state() {
        let mut history = History::new();
        let before = list(&["a"]);
        let after = list(&["a", "b"]);

        history.record(&before);
        let restored = history.undo(&after).unwrap();
        assert_eq!(restored, before);
    }

    #[test]
    fn test_redo_restores_pre_undo_state() {
        let mut history = History::new();
        let before = list(&["a"]);
        let after = list(&["a", "b"]);

        history.record(&before);
        history.undo(&after).unwrap();
        let restored = history.redo(&before).unwrap();
        assert_eq!(restored, after);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        let before = list(&["a"]);
        let after = list(&["a", "b"]);

        history.record(&before);
        history.undo(&after).unwrap();
        assert_eq!(history.redo_depth(), 1);

        history.record(&before);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_bounded_to_twenty() {
        let mut history = History::new();
        for i in 0..25 {
            history.record(&[Task::new(format!("task {}", i))]);
        }
        assert_eq!(history.undo_depth(), 20);

        // Oldest snapshots were evicted; the deepest one left is "task 5"
        let mut last = None;
        let current = list(&["current"]);
        while let Some(snapshot) = history.undo(&current) {
            last = Some(snapshot);
        }
        assert_eq!(last.unwrap()[0].description, "task 5");
    }
}
