//! `tt update` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::store::{StoreError, TaskStore};

#[derive(Args)]
pub struct UpdateArgs {
    /// Task id
    pub id: u32,

    /// New description
    pub description: String,
}

pub fn run(store: &TaskStore, args: UpdateArgs) -> Result<()> {
    let description = args.description.trim();
    if description.is_empty() {
        bail!("Task description cannot be empty");
    }

    match store.update(args.id, description) {
        Ok(task) => {
            println!("✓ Updated task {}: {}", task.id, task.description);
            Ok(())
        }
        Err(StoreError::NotFound(id)) => {
            println!("Task not found: {}", id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
