//! Command-line interface definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::delete::DeleteArgs;
use super::export::ExportArgs;
use super::list::ListArgs;
use super::mark::MarkArgs;
use super::update::UpdateArgs;

#[derive(Parser)]
#[command(name = "tt", version, about = "Track tasks from the command line")]
pub struct Cli {
    /// Directory holding the task store (overrides the config file)
    #[arg(long, global = true, env = "TASKTRACK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// Change the description of a task
    Update(UpdateArgs),

    /// Delete a task
    Delete(DeleteArgs),

    /// Mark a task as in-progress
    MarkInProgress(MarkArgs),

    /// Mark a task as done
    MarkDone(MarkArgs),

    /// List tasks, optionally filtered by status
    List(ListArgs),

    /// Export all tasks to a plain-text file
    Export(ExportArgs),

    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}
