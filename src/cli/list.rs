//! `tt list` command implementation

use anyhow::Result;
use clap::Args;

use crate::store::{Status, Task, TaskStore};

const TABLE_COL_ID: usize = 4;
const TABLE_COL_STATUS: usize = 12;
const TABLE_COL_DESCRIPTION: usize = 48;

#[derive(Args)]
pub struct ListArgs {
    /// Only show tasks with this status (todo, in-progress, done)
    pub status: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn print_table_header() {
    println!(
        "{:<width_id$} {:<width_status$} {:<width_desc$} UPDATED",
        "ID",
        "STATUS",
        "DESCRIPTION",
        width_id = TABLE_COL_ID,
        width_status = TABLE_COL_STATUS,
        width_desc = TABLE_COL_DESCRIPTION
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_ID + TABLE_COL_STATUS + TABLE_COL_DESCRIPTION + 22)
    );
}

fn print_table_row(task: &Task) {
    let description = super::truncate(&task.description, TABLE_COL_DESCRIPTION);
    println!(
        "{:<width_id$} {:<width_status$} {:<width_desc$} {}",
        task.id,
        task.status.label(),
        description,
        task.updated_at.format("%Y-%m-%d %H:%M"),
        width_id = TABLE_COL_ID,
        width_status = TABLE_COL_STATUS,
        width_desc = TABLE_COL_DESCRIPTION
    );
}

pub fn run(store: &TaskStore, args: ListArgs) -> Result<()> {
    let tasks = match args.status.as_deref() {
        // A status outside the three canonical values matches nothing;
        // that is an empty listing, not an error.
        Some(raw) => match Status::parse(raw) {
            Some(status) => store.list(Some(status))?,
            None => Vec::new(),
        },
        None => store.list(None)?,
    };

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    print_table_header();
    for task in &tasks {
        print_table_row(task);
    }
    println!("\nTotal: {} tasks", tasks.len());

    Ok(())
}
