//! `tt delete` command implementation

use anyhow::Result;
use clap::Args;

use crate::store::{StoreError, TaskStore};

#[derive(Args)]
pub struct DeleteArgs {
    /// Task id
    pub id: u32,
}

pub fn run(store: &TaskStore, args: DeleteArgs) -> Result<()> {
    match store.delete(args.id) {
        Ok(()) => {
            println!("✓ Deleted task {}", args.id);
            Ok(())
        }
        Err(StoreError::NotFound(id)) => {
            println!("Task not found: {}", id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
