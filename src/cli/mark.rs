//! `tt mark-in-progress` / `tt mark-done` command implementation

use anyhow::Result;
use clap::Args;

use crate::store::{Status, StoreError, TaskStore};

#[derive(Args)]
pub struct MarkArgs {
    /// Task id
    pub id: u32,
}

pub fn run(store: &TaskStore, args: MarkArgs, status: Status) -> Result<()> {
    match store.set_status(args.id, status) {
        Ok(task) => {
            println!("✓ Marked task {} as {}", task.id, task.status);
            Ok(())
        }
        Err(StoreError::NotFound(id)) => {
            println!("Task not found: {}", id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
