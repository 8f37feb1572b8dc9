use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::models::Filter;
use crate::store::{StoreError, TaskStore};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A simple to-do list manager")]
#[command(version)]
pub struct Cli {
    /// Path to the task file (overrides the configured path)
    #[arg(short, long)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description
        description: String,
        /// Priority (high, medium or low)
        #[arg(long, short)]
        priority: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks
    List {
        /// Show all, pending or completed tasks
        #[arg(long, short, default_value = "all")]
        filter: Filter,
    },
    /// Mark a task as completed
    Complete {
        /// Task ID
        id: u64,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },
    /// Remove all completed tasks
    ClearCompleted,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    StoreError(#[from] StoreError),
}

/// Handle the add command
pub fn handle_add(
    store: &mut TaskStore,
    description: String,
    priority: Option<String>,
    due: Option<String>,
) -> Result<(), CliError> {
    let task = store.add(&description, priority.as_deref(), due.as_deref())?;
    println!("Task added (ID: {})", task.id);
    Ok(())
}

/// Handle the list command
pub fn handle_list(store: &TaskStore, filter: Filter) -> Result<(), CliError> {
    let tasks = store.list(filter);
    if tasks.is_empty() {
        println!("No tasks.");
        return Ok(());
    }

    println!(
        "{:<4} {:<40} {:<10} {:<12} {}",
        "ID", "Description", "Priority", "Due Date", "Status"
    );
    for task in tasks {
        let status = if task.completed { "Completed" } else { "Pending" };
        println!(
            "{:<4} {:<40} {:<10} {:<12} {}",
            task.id,
            task.description,
            capitalize(&task.priority),
            task.due_date.as_deref().unwrap_or(""),
            status
        );
    }
    Ok(())
}

/// Handle the complete command
pub fn handle_complete(store: &mut TaskStore, id: u64) -> Result<(), CliError> {
    store.complete(id)?;
    println!("Task {} marked as completed", id);
    Ok(())
}

/// Handle the delete command
pub fn handle_delete(store: &mut TaskStore, id: u64) -> Result<(), CliError> {
    store.delete(id)?;
    println!("Task {} deleted", id);
    Ok(())
}

/// Handle the clear-completed command
pub fn handle_clear_completed(store: &mut TaskStore) -> Result<(), CliError> {
    let before = store.len();
    store.clear_completed()?;
    println!("Removed {} completed task(s)", before - store.len());
    Ok(())
}

/// Capitalize the first letter for display; the stored value is untouched
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
