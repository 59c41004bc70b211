// isoforge-core/src/infrastructure/config/project.rs

use anyhow::Context;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::project::configuration::ProjectConfig;
use crate::infrastructure::error::InfrastructureError;

/// Main manifest names, looked up in this order.
pub const CONFIG_CANDIDATES: [&str; 2] = ["isoforge.yaml", "isoforge_project.yaml"];

#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    // 1. Discovery
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project manifest");

    // 2. Base YAML
    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read project config at {:?}", config_path))?;
    let mut config: ProjectConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse project config YAML at {:?}", config_path))?;

    // 3. Layering: ISOFORGE_TARGET_PATH=/tmp/enums isoforge run
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(format!("Invalid {:?}: {}", config_path, e)))?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    for filename in CONFIG_CANDIDATES {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, CONFIG_CANDIDATES
    )))
}

/// Loads one typed configuration fragment. `T` is the wrapper struct the file holds.
pub(crate) fn load_fragment<T: DeserializeOwned>(path: &Path) -> Result<T, InfrastructureError> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config fragment at {:?}", path))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML fragment at {:?}", path))
        .map_err(Into::into)
}

fn apply_env_overrides<F>(config: &mut ProjectConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("ISOFORGE_TARGET_PATH") {
        info!(old = ?config.target_path, new = ?val, "Overriding target path via ENV");
        config.target_path = val;
    }
    if let Some(val) = lookup("ISOFORGE_STRICT") {
        let strict = matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        info!(old = config.strict, new = strict, "Overriding strict mode via ENV");
        config.strict = strict;
    }
}
