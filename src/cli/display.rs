//! Display formatting for CLI output

use crate::models::Task;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

/// Task row for table display
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    number: String,
    #[tabled(rename = "Done")]
    done: String,
    #[tabled(rename = "Task")]
    description: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Due")]
    due: String,
}

impl TaskRow {
    fn new(number: usize, task: &Task) -> Self {
        let today = chrono::Local::now().date_naive();
        let due = match task.due {
            Some(d) if task.is_overdue(today) => format!("{} (overdue)", d),
            Some(d) => d.to_string(),
            None => String::new(),
        };

        TaskRow {
            number: format!("{}", number),
            done: if task.done { "[x]" } else { "[ ]" }.to_string(),
            description: truncate(&task.description, 50),
            priority: task.priority.map(|p| p.to_string()).unwrap_or_default(),
            due,
        }
    }
}

/// Display a list of tasks as a table, numbered from 1
pub fn display_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        log::info!("No tasks found.");
        return;
    }

    let rows: Vec<TaskRow> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| TaskRow::new(i + 1, t))
        .collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(0)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Display the completion summary for a list
pub fn display_progress(tasks: &[Task]) {
    let done = tasks.iter().filter(|t| t.done).count();
    let percent = if tasks.is_empty() {
        0
    } else {
        (done * 100 + tasks.len() / 2) / tasks.len()
    };
    println!("Progress: {}/{} completed ({}%)", done, tasks.len(), percent);
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}

/// Format for success messages
pub fn success(msg: &str) {
    println!("{}", msg);
}

/// Format for error messages
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
    }

    #[test]
    fn test_task_row_checkbox() {
        let mut task = Task::new("Buy milk");
        let row = TaskRow::new(1, &task);
        assert_eq!(row.done, "[ ]");
        assert_eq!(row.number, "1");

        task.done = true;
        let row = TaskRow::new(1, &task);
        assert_eq!(row.done, "[x]");
    }
}
