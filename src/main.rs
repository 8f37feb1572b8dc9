use clap::Parser;
use color_eyre::Result;
use todo_cli::cli::{self, Cli, Commands};
use todo_cli::{Config, Storage, TaskStore};

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    // Parse CLI arguments
    let args = Cli::parse();

    // --file overrides the configured storage path
    let storage_path = match &args.file {
        Some(path) => todo_cli::utils::expand_path(path),
        None => Config::load()?.get_storage_path(),
    };

    let mut store = TaskStore::open(Storage::new(storage_path))?;

    // Dispatch to appropriate command handler
    match args.command {
        Commands::Add {
            description,
            priority,
            due,
        } => {
            cli::handle_add(&mut store, description, priority, due)?;
        }
        Commands::List { filter } => {
            cli::handle_list(&store, filter)?;
        }
        Commands::Complete { id } => {
            cli::handle_complete(&mut store, id)?;
        }
        Commands::Delete { id } => {
            cli::handle_delete(&mut store, id)?;
        }
        Commands::ClearCompleted => {
            cli::handle_clear_completed(&mut store)?;
        }
    }

    Ok(())
}
