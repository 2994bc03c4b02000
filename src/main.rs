//! tasktrack - command-line task tracker

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tasktrack::cli::{self, Cli, Commands};
use tasktrack::config::Config;
use tasktrack::store::{Status, TaskStore};

fn main() -> Result<()> {
    if std::env::var("TASKTRACK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("tasktrack=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completion generation needs no app data or store.
    if let Commands::Completion { shell } = cli.command {
        generate(shell, &mut Cli::command(), "tt", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    // --data-dir / TASKTRACK_DATA_DIR beats the config file.
    let data_dir = cli.data_dir.or_else(|| config.data_dir.clone());
    let store = TaskStore::open(data_dir)?;

    match cli.command {
        Commands::Add(args) => cli::add::run(&store, args),
        Commands::Update(args) => cli::update::run(&store, args),
        Commands::Delete(args) => cli::delete::run(&store, args),
        Commands::MarkInProgress(args) => cli::mark::run(&store, args, Status::InProgress),
        Commands::MarkDone(args) => cli::mark::run(&store, args, Status::Done),
        Commands::List(args) => cli::list::run(&store, args),
        Commands::Export(args) => cli::export::run(&store, &config, args),
        Commands::Completion { .. } => unreachable!(),
    }
}
