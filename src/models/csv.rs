//! CSV serialization for task exchange
//!
//! Format: header row `Task,Done,Priority,DueDate`, one row per task. The
//! description is quoted (internal quotes doubled) when it contains a comma
//! or a quote; absent priority/due dates are empty fields.

use crate::models::task::{Priority, Task};
use chrono::NaiveDate;
use thiserror::Error;

/// CSV header row
const HEADER: &str = "Task,Done,Priority,DueDate";

/// Errors that can occur while parsing CSV
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("Row {row}: expected 4 fields, found {found}")]
    FieldCount { row: usize, found: usize },
    #[error("Row {row}: invalid priority '{value}'")]
    InvalidPriority { row: usize, value: String },
    #[error("Row {row}: invalid due date '{value}'")]
    InvalidDate { row: usize, value: String },
    #[error("Row {row}: unterminated quoted field")]
    UnterminatedQuote { row: usize },
}

/// Serialize a task list to CSV
pub fn to_csv(tasks: &[Task]) -> String {
    let mut out = String::from(HEADER);

    for task in tasks {
        out.push('\n');
        out.push_str(&quote_field(&task.description));
        out.push(',');
        out.push_str(if task.done { "true" } else { "false" });
        out.push(',');
        if let Some(priority) = task.priority {
            out.push_str(&priority.to_string());
        }
        out.push(',');
        if let Some(due) = task.due {
            out.push_str(&due.to_string());
        }
    }

    out.push('\n');
    out
}

/// Parse a task list from CSV
///
/// The first line is treated as the header and skipped; blank lines are
/// ignored.
pub fn from_csv(content: &str) -> Result<Vec<Task>, CsvError> {
    let mut tasks = Vec::new();

    for (row, line) in content.lines().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }

        let fields = split_row(line, row)?;
        if fields.len() != 4 {
            return Err(CsvError::FieldCount {
                row,
                found: fields.len(),
            });
        }

        let priority = if fields[2].is_empty() {
            None
        } else {
            Some(
                fields[2]
                    .parse::<Priority>()
                    .map_err(|_| CsvError::InvalidPriority {
                        row,
                        value: fields[2].clone(),
                    })?,
            )
        };

        let due = if fields[3].is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(&fields[3], "%Y-%m-%d").map_err(|_| {
                    CsvError::InvalidDate {
                        row,
                        value: fields[3].clone(),
                    }
                })?,
            )
        };

        tasks.push(Task {
            description: fields[0].clone(),
            done: fields[1] == "true",
            priority,
            due,
        });
    }

    Ok(tasks)
}

/// Quote a field if it contains a comma or quote, doubling internal quotes
fn quote_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Split one CSV row into fields, honoring quoted fields
fn split_row(line: &str, row: usize) -> Result<Vec<String>, CsvError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                // A doubled quote inside a quoted field is a literal quote
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote { row });
    }

    fields.push(current);
    Ok(fields)
}
