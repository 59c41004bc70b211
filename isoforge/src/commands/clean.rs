// isoforge/src/commands/clean.rs
//
// USE CASE: Remove generated enum files.

use std::path::PathBuf;

use isoforge_core::application::clean_project;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    match clean_project(&project_dir) {
        Ok(removed) if removed.is_empty() => println!("✨ Nothing to clean."),
        Ok(removed) => println!("✨ {} artifact(s) removed.", removed.len()),
        Err(e) => {
            eprintln!("❌ Clean failed: {:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
    Ok(())
}
