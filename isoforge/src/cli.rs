// isoforge/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "isoforge")]
#[command(about = "Reconciles ISO country, subdivision and currency data into enum constants", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Reconciles every source and writes the enum files
    Run {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Exit non-zero when the run reported issues (files are written anyway).
        /// Also enabled by `strict: true` in isoforge.yaml or ISOFORGE_STRICT=1.
        #[arg(long)]
        strict: bool,
    },

    /// ✅ Validates isoforge.yaml and the static tables without reading any source
    Check {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 🧹 Removes generated files (output/ folder)
    Clean {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
}
