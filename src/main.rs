//! todo CLI - flat-file to-do list manager

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use todo::cli::display::{display_progress, display_task_list, error, success};
use todo::cli::{Cli, Commands, menu};
use todo::engine::{Engine, TaskFilter};
use todo::storage::JsonStore;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = &result {
        error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let store = JsonStore::new(&cli.file);
    let mut engine = Engine::new(store);

    let Some(command) = cli.command else {
        return menu::run(&mut engine);
    };

    match command {
        Commands::Add {
            description,
            priority,
            due,
        } => {
            let tasks = engine.add(description.as_str(), priority, due)?;
            success(&format!("Added task {}: {}", tasks.len(), description));
        }

        Commands::List {
            search,
            done,
            undone,
            priority,
        } => {
            let filter = TaskFilter {
                term: search,
                done: match (done, undone) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
                priority,
            };

            let tasks = engine.search(&filter)?;
            display_task_list(&tasks);
            display_progress(&tasks);
        }

        Commands::Done { number } => {
            engine.mark_done(to_index(number)?)?;
            success(&format!("Marked task {} as done.", number));
        }

        Commands::Undone { number } => {
            engine.mark_undone(to_index(number)?)?;
            success(&format!("Marked task {} as undone.", number));
        }

        Commands::Edit {
            number,
            description,
            priority,
            due,
        } => {
            engine.edit(to_index(number)?, description, priority, due)?;
            success(&format!("Updated task {}.", number));
        }

        Commands::Move { from, to } => {
            engine.move_task(to_index(from)?, to_index(to)?)?;
            success(&format!("Moved task {} to position {}.", from, to));
        }

        Commands::Delete { number, force } => {
            if !force {
                let tasks = engine.list()?;
                let index = to_index(number)?;
                let Some(task) = tasks.get(index) else {
                    anyhow::bail!("Index {} out of bounds (list has {} tasks)", index, tasks.len());
                };

                print!("Delete task {} '{}'? [y/N] ", number, task.description);
                io::stdout().flush()?;

                let mut input = String::new();
                io::stdin().read_line(&mut input)?;

                if !input.trim().eq_ignore_ascii_case("y") {
                    log::info!("Cancelled.");
                    return Ok(());
                }
            }

            engine.delete(to_index(number)?)?;
            success(&format!("Deleted task {}.", number));
        }

        Commands::Clear { force } => {
            if !force {
                print!("Clear all tasks? [y/N] ");
                io::stdout().flush()?;

                let mut input = String::new();
                io::stdin().read_line(&mut input)?;

                if !input.trim().eq_ignore_ascii_case("y") {
                    log::info!("Cancelled.");
                    return Ok(());
                }
            }

            engine.clear()?;
            success("All tasks cleared.");
        }

        Commands::Export { path } => {
            engine.export_to(&path)?;
            success(&format!("Tasks exported to {}.", path.display()));
        }

        Commands::Import { path } => {
            let tasks = engine.import_from(&path)?;
            success(&format!(
                "Imported {} task(s) from {}.",
                tasks.len(),
                path.display()
            ));
        }
    }

    Ok(())
}

/// Convert a 1-based task number (as shown by `list`) to a 0-based index
fn to_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Task numbers start at 1"))
}
