// isoforge/src/commands/check.rs
//
// USE CASE: Validate the project before any source is touched.

use std::path::PathBuf;

use isoforge_core::infrastructure::config::{load_project_config, load_reference_tables};

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    println!("⚙️  Checking configuration...");

    let config = match load_project_config(&project_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid project:\n{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };
    println!("   Project: {} (v{})", config.name, config.version);

    let tables = match load_reference_tables(&project_dir, &config) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("❌ Invalid reference tables:\n{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    println!(
        "   Sources: primary '{}', secondary '{}', {} market(s)",
        config.sources.primary.name,
        config.sources.secondary.name,
        config.sources.markets.len()
    );
    println!(
        "   Tables: {} renames, {} type aliases, {} continent overrides, {} country currencies",
        tables.renames.len(),
        tables.type_aliases.len(),
        tables.continent_overrides.len(),
        tables.country_currencies.len()
    );
    println!("✨ Configuration is valid.");
    Ok(())
}
