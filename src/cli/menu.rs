//! Interactive menu loop
//!
//! One engine operation per iteration: read an action, prompt for its
//! inputs, call the engine, report the outcome. Recoverable errors (bad
//! index, unsupported format, malformed import) are printed and the loop
//! continues.

use crate::cli::commands::{parse_date, parse_priority};
use crate::models::Priority;
use crate::cli::display::{display_progress, display_task_list, error, success};
use crate::engine::{Engine, EngineError, TaskFilter};
use anyhow::Result;
use std::io::{self, Write};

/// Run the interactive menu until quit or end of input
pub fn run(engine: &mut Engine) -> Result<()> {
    println!(
        "todo interactive mode (file: {}). Type 'help' for actions.",
        engine.store().path().display()
    );

    loop {
        let Some(choice) = prompt("\ntodo>")? else {
            break;
        };

        match choice.as_str() {
            "" => {}
            "add" | "a" => action_add(engine)?,
            "list" | "ls" | "l" => action_list(engine),
            "done" => action_set_done(engine, true)?,
            "undone" => action_set_done(engine, false)?,
            "edit" | "e" => action_edit(engine)?,
            "move" | "mv" => action_move(engine)?,
            "delete" | "del" | "rm" => action_delete(engine)?,
            "clear" => action_clear(engine)?,
            "search" | "s" => action_search(engine)?,
            "export" => action_export(engine)?,
            "import" => action_import(engine)?,
            "undo" | "u" => action_undo(engine),
            "redo" | "r" => action_redo(engine),
            "help" | "h" | "?" => print_help(),
            "quit" | "q" | "exit" => break,
            other => println!("Unknown action '{}'. Type 'help' for actions.", other),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn print_help() {
    println!("Available actions:");
    println!("  add     Add a new task");
    println!("  list    List all tasks");
    println!("  done    Mark a task as done");
    println!("  undone  Mark a task as undone");
    println!("  edit    Edit a task");
    println!("  move    Move a task");
    println!("  delete  Delete a task");
    println!("  clear   Clear all tasks");
    println!("  search  Search/filter tasks");
    println!("  export  Export tasks to .json or .csv");
    println!("  import  Import tasks from .json or .csv");
    println!("  undo    Undo the last change");
    println!("  redo    Redo an undone change");
    println!("  help    Show this help");
    println!("  quit    Quit");
}

fn action_add(engine: &mut Engine) -> Result<()> {
    let Some(description) = prompt("Task description:")? else {
        return Ok(());
    };
    let Some(priority) = prompt_priority("Priority (high/medium/low, blank for none):")? else {
        return Ok(());
    };
    let Some(due) = prompt_due("Due date (YYYY-MM-DD, blank for none):")? else {
        return Ok(());
    };

    report(engine.add(description, priority, due), "Task added.");
    Ok(())
}

fn action_list(engine: &Engine) {
    match engine.list() {
        Ok(tasks) => {
            display_task_list(&tasks);
            display_progress(&tasks);
        }
        Err(e) => error(&e.to_string()),
    }
}

fn action_set_done(engine: &mut Engine, done: bool) -> Result<()> {
    let Some(index) = prompt_index("Task number:")? else {
        return Ok(());
    };

    if done {
        report(engine.mark_done(index), "Task marked as done.");
    } else {
        report(engine.mark_undone(index), "Task marked as undone.");
    }
    Ok(())
}

fn action_edit(engine: &mut Engine) -> Result<()> {
    let Some(index) = prompt_index("Task number:")? else {
        return Ok(());
    };
    let Some(description) = prompt("New description:")? else {
        return Ok(());
    };
    let Some(priority) = prompt_priority("New priority (high/medium/low, blank to keep):")?
    else {
        return Ok(());
    };
    let Some(due) = prompt_due("New due date (YYYY-MM-DD, blank to keep):")? else {
        return Ok(());
    };

    report(engine.edit(index, description, priority, due), "Task updated.");
    Ok(())
}

fn action_move(engine: &mut Engine) -> Result<()> {
    let Some(from) = prompt_index("Move task number:")? else {
        return Ok(());
    };
    let Some(to) = prompt_index("To position:")? else {
        return Ok(());
    };

    report(engine.move_task(from, to), "Task moved.");
    Ok(())
}

fn action_delete(engine: &mut Engine) -> Result<()> {
    let Some(index) = prompt_index("Task number:")? else {
        return Ok(());
    };

    if confirm("Delete this task?")? {
        report(engine.delete(index), "Task deleted.");
    } else {
        println!("Cancelled.");
    }
    Ok(())
}

fn action_clear(engine: &mut Engine) -> Result<()> {
    if confirm("Clear all tasks?")? {
        report(engine.clear(), "All tasks cleared.");
    } else {
        println!("Cancelled.");
    }
    Ok(())
}

fn action_search(engine: &Engine) -> Result<()> {
    let Some(term) = prompt("Search keyword (blank for all):")? else {
        return Ok(());
    };
    let Some(status) = prompt("Status (all/done/undone):")? else {
        return Ok(());
    };
    let Some(priority) = prompt_priority("Priority (high/medium/low, blank for all):")? else {
        return Ok(());
    };

    let done = match status.to_lowercase().as_str() {
        "" | "all" => None,
        "done" => Some(true),
        "undone" => Some(false),
        other => {
            error(&format!("Unknown status '{}'", other));
            return Ok(());
        }
    };

    let filter = TaskFilter {
        term: if term.is_empty() { None } else { Some(term) },
        done,
        priority,
    };

    match engine.search(&filter) {
        Ok(tasks) => display_task_list(&tasks),
        Err(e) => error(&e.to_string()),
    }
    Ok(())
}

fn action_export(engine: &Engine) -> Result<()> {
    let Some(path) = prompt("Export file path (.json or .csv):")? else {
        return Ok(());
    };

    match engine.export_to(path.as_ref()) {
        Ok(()) => success(&format!("Tasks exported to {}.", path)),
        Err(e) => error(&e.to_string()),
    }
    Ok(())
}

fn action_import(engine: &mut Engine) -> Result<()> {
    let Some(path) = prompt("Import file path (.json or .csv):")? else {
        return Ok(());
    };

    if let Some(tasks) = report(
        engine.import_from(path.as_ref()),
        &format!("Tasks imported from {}.", path),
    ) {
        display_task_list(&tasks);
    }
    Ok(())
}

fn action_undo(engine: &mut Engine) {
    match engine.undo() {
        Ok(Some(_)) => success("Undo successful."),
        Ok(None) => println!("Nothing to undo."),
        Err(e) => error(&e.to_string()),
    }
}

fn action_redo(engine: &mut Engine) {
    match engine.redo() {
        Ok(Some(_)) => success("Redo successful."),
        Ok(None) => println!("Nothing to redo."),
        Err(e) => error(&e.to_string()),
    }
}

/// Report an engine result, printing either the success message or the error
fn report<T>(result: Result<T, EngineError>, message: &str) -> Option<T> {
    match result {
        Ok(value) => {
            success(message);
            Some(value)
        }
        Err(e) => {
            error(&e.to_string());
            None
        }
    }
}

/// Prompt for one line of input; None on end of input
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{} ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Prompt for a 1-based task number, returning the 0-based index
///
/// Bad input cancels the action (reported, loop continues).
fn prompt_index(message: &str) -> Result<Option<usize>> {
    let Some(input) = prompt(message)? else {
        return Ok(None);
    };

    match input.parse::<usize>() {
        Ok(number) if number >= 1 => Ok(Some(number - 1)),
        _ => {
            error(&format!("'{}' is not a valid task number", input));
            Ok(None)
        }
    }
}

/// Prompt for an optional priority; blank means None
fn prompt_priority(message: &str) -> Result<Option<Option<Priority>>> {
    let Some(input) = prompt(message)? else {
        return Ok(None);
    };
    if input.is_empty() {
        return Ok(Some(None));
    }

    match parse_priority(&input) {
        Ok(priority) => Ok(Some(Some(priority))),
        Err(e) => {
            error(&e);
            Ok(None)
        }
    }
}

/// Prompt for an optional due date; blank means None
fn prompt_due(message: &str) -> Result<Option<Option<chrono::NaiveDate>>> {
    let Some(input) = prompt(message)? else {
        return Ok(None);
    };
    if input.is_empty() {
        return Ok(Some(None));
    }

    match parse_date(&input) {
        Ok(date) => Ok(Some(Some(date))),
        Err(e) => {
            error(&e);
            Ok(None)
        }
    }
}

fn confirm(message: &str) -> Result<bool> {
    let Some(input) = prompt(&format!("{} [y/N]", message))? else {
        return Ok(false);
    };
    Ok(input.eq_ignore_ascii_case("y"))
}
