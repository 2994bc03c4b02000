//! `tt export` command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::store::TaskStore;

#[derive(Args)]
pub struct ExportArgs {
    /// Destination file (defaults to the configured export path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(store: &TaskStore, config: &Config, args: ExportArgs) -> Result<()> {
    let mut lines = store.export_lines()?.peekable();

    // An empty collection writes nothing; that is a normal outcome,
    // distinct from a failed write.
    if lines.peek().is_none() {
        println!("No tasks to export.");
        return Ok(());
    }

    let path = args.output.unwrap_or_else(|| config.export.path.clone());
    let file = File::create(&path)
        .with_context(|| format!("Failed to create export file at {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut count = 0usize;
    for line in lines {
        writeln!(writer, "{}", line)?;
        count += 1;
    }
    writer.flush()?;

    println!("✓ Exported {} tasks to {}", count, path.display());
    Ok(())
}
