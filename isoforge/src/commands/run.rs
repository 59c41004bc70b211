// isoforge/src/commands/run.rs
//
// USE CASE: Reconcile the sources and write the enum files.

use std::path::PathBuf;

use anyhow::Context;
use isoforge_core::application::{PipelineSources, REPORT_FILE, run_pipeline};
use isoforge_core::infrastructure::adapters::SnapshotSource;
use isoforge_core::infrastructure::config::{load_project_config, load_reference_tables};
use isoforge_core::infrastructure::render::JinjaRenderer;
use isoforge_core::ports::ReferenceSource;
use tracing::debug;

pub fn execute(project_dir: PathBuf, strict: bool) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_project_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    println!("   Project: {} (v{})", config.name, config.version);
    let strict = strict || config.strict;

    // B. Static tables: an inconsistent table stops everything before any source is read
    let tables = match load_reference_tables(&project_dir, &config) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("❌ Invalid reference tables:\n{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    // C. Sources (snapshot adapters)
    let primary = SnapshotSource::from_config(&project_dir, &config.sources.primary);
    let secondary = SnapshotSource::from_config(&project_dir, &config.sources.secondary);
    let markets: Vec<SnapshotSource> = config
        .sources
        .markets
        .iter()
        .map(|market| SnapshotSource::from_config(&project_dir, market))
        .collect();
    let sources = PipelineSources::new(&primary, &secondary).with_markets(
        markets
            .iter()
            .map(|m| m as &dyn ReferenceSource)
            .collect(),
    );
    debug!(
        primary = %primary.root().display(),
        secondary = %secondary.root().display(),
        markets = markets.len(),
        "Snapshot sources opened"
    );

    // D. Run the Pipeline (Application Layer)
    let template_engine = JinjaRenderer::new();
    let result = run_pipeline(&sources, &tables, &template_engine, &project_dir, &config);

    match result {
        Ok(report) => {
            if strict && report.has_issues() {
                eprintln!(
                    "\n❌ FAILURE (strict). {} issue(s) reported:",
                    report.issues.len()
                );
                for issue in &report.issues {
                    eprintln!("   ⚠️  {}", issue);
                }
                eprintln!("   Details in {}", REPORT_FILE);
                std::process::exit(1);
            }
            println!("\n✨ SUCCESS! Enum files generated in {:.2?}", start.elapsed());
        }
        Err(e) => {
            eprintln!("\n💥 CRITICAL PIPELINE ERROR: {:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }

    Ok(())
}
