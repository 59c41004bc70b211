// isoforge/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug isoforge run ... to see every merge decision
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            project_dir,
            strict,
        } => commands::run::execute(project_dir, strict),
        Commands::Check { project_dir } => commands::check::execute(project_dir),
        Commands::Clean { project_dir } => commands::clean::execute(project_dir),
    }
}
