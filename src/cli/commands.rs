//! CLI command definitions using clap

use crate::models::Priority;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Flat-file to-do list manager
///
/// Run without a subcommand to enter the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the task file
    #[arg(long, default_value = "todo.json", global = true)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description
        description: String,

        /// Priority (high, medium, low)
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
    },

    /// List tasks, optionally filtered
    List {
        /// Keep only tasks whose description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Keep only completed tasks
        #[arg(long, conflicts_with = "undone")]
        done: bool,

        /// Keep only uncompleted tasks
        #[arg(long)]
        undone: bool,

        /// Keep only tasks with this priority
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,
    },

    /// Mark a task as done
    Done {
        /// Task number as shown by list (starting at 1)
        number: usize,
    },

    /// Mark a task as not done
    Undone {
        /// Task number as shown by list
        number: usize,
    },

    /// Edit a task's description and optionally its priority or due date
    Edit {
        /// Task number as shown by list
        number: usize,

        /// New description
        description: String,

        /// New priority (high, medium, low)
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// New due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
    },

    /// Move a task to a different position
    Move {
        /// Number of the task to move
        from: usize,

        /// Destination position
        to: usize,
    },

    /// Delete a task
    Delete {
        /// Task number as shown by list
        number: usize,

        /// Skip confirmation
        #[arg(short = 'f', long)]
        force: bool,
    },

    /// Delete every task
    Clear {
        /// Skip confirmation
        #[arg(short = 'f', long)]
        force: bool,
    },

    /// Export tasks to a .json or .csv file
    Export {
        /// Destination path; the extension selects the format
        path: PathBuf,
    },

    /// Replace the task list with the contents of a .json or .csv file
    Import {
        /// Source path; the extension selects the format
        path: PathBuf,
    },
}

pub fn parse_priority(s: &str) -> Result<Priority, String> {
    s.parse()
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("Invalid date: {}", e))
}
