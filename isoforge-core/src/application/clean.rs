// isoforge-core/src/application/clean.rs

use crate::error::IsoforgeError;
use crate::infrastructure::config::project::load_project_config;
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::path::{Component, Path};

/// Removes the generated artifacts listed in `clean-targets`
/// (the target path when the key is absent or empty). Returns what was removed.
pub fn clean_project(project_dir: &Path) -> Result<Vec<String>, IsoforgeError> {
    tracing::info!("🧹 Cleaning generated enum files...");

    let config = load_project_config(project_dir).map_err(IsoforgeError::Infrastructure)?;

    let targets = match config.clean_targets {
        Some(targets) if !targets.is_empty() => targets,
        _ => vec![config.target_path.clone()],
    };

    let mut removed = Vec::new();
    for target_rel_path in targets {
        // Path traversal guard: relative, no `..`, stays under the project
        let relative = Path::new(&target_rel_path);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        let full_path = project_dir.join(relative);
        if escapes || !full_path.starts_with(project_dir) {
            return Err(IsoforgeError::UnsafePath(target_rel_path));
        }

        if full_path.exists() {
            if full_path.is_dir() {
                fs::remove_dir_all(&full_path)
                    .map_err(|e| IsoforgeError::Infrastructure(InfrastructureError::Io(e)))?;
            } else {
                fs::remove_file(&full_path)
                    .map_err(|e| IsoforgeError::Infrastructure(InfrastructureError::Io(e)))?;
            }
            println!("   🗑️  Artifact removed: {}", target_rel_path);
            removed.push(target_rel_path);
        }
    }

    Ok(removed)
}
