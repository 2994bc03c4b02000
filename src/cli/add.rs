//! `tt add` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::store::TaskStore;

#[derive(Args)]
pub struct AddArgs {
    /// Task description
    pub description: String,
}

pub fn run(store: &TaskStore, args: AddArgs) -> Result<()> {
    let description = args.description.trim();
    if description.is_empty() {
        bail!("Task description cannot be empty");
    }

    let task = store.add(description)?;

    println!("✓ Added task: {}", task.description);
    println!("  ID:     {}", task.id);
    println!("  Status: {}", task.status);
    Ok(())
}
