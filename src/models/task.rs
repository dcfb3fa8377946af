//! Task model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" | "med" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// One entry on the task list
///
/// Serialized field names match the on-disk JSON format: `task`, `done`,
/// `priority`, `dueDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub description: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
}

impl Task {
    /// Create a new undone task with the given description
    pub fn new(description: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            done: false,
            priority: None,
            due: None,
        }
    }

    /// Check if the task is overdue as of `today` (due in the past and not done)
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.done && self.due.is_some_and(|due| due < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::High.to_string(), "High");
        assert_eq!(Priority::Medium.to_string(), "Medium");
        assert_eq!(Priority::Low.to_string(), "Low");
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("med".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert!("invalid".parse::<Priority>().is_err());
    }

    #[test]
    fn test_task_new() {
        let task = Task::new("Buy milk");
        assert_eq!(task.description, "Buy milk");
        assert!(!task.done);
        assert!(task.priority.is_none());
        assert!(task.due.is_none());
    }

    #[test]
    fn test_task_json_field_names() {
        let mut task = Task::new("Buy milk");
        task.priority = Some(Priority::High);
        task.due = NaiveDate::from_ymd_opt(2025, 3, 1);

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"task\":\"Buy milk\""));
        assert!(json.contains("\"done\":false"));
        assert!(json.contains("\"priority\":\"High\""));
        assert!(json.contains("\"dueDate\":\"2025-03-01\""));
    }

    #[test]
    fn test_task_json_optional_fields_absent() {
        let task = Task::new("Buy milk");
        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("priority"));
        assert!(!json.contains("dueDate"));

        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn test_task_json_null_due_date() {
        // Files written by older tools store an explicit null
        let json = r#"{"task":"Buy milk","done":true,"priority":"Low","dueDate":null}"#;
        let parsed: Task = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.description, "Buy milk");
        assert!(parsed.done);
        assert_eq!(parsed.priority, Some(Priority::Low));
        assert!(parsed.due.is_none());
    }

    #[test]
    fn test_task_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let mut task = Task::new("Pay rent");
        assert!(!task.is_overdue(today));

        task.due = NaiveDate::from_ymd_opt(2025, 3, 1);
        assert!(task.is_overdue(today));

        task.done = true;
        assert!(!task.is_overdue(today));

        task.done = false;
        task.due = NaiveDate::from_ymd_opt(2025, 3, 10);
        assert!(!task.is_overdue(today));
    }
}
