// src/domain/project/configuration.rs

use crate::domain::project::templates::EnumTemplates;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[validate(length(min = 1, message = "Project name cannot be empty"))]
    pub name: String,
    pub version: String,

    #[serde(rename = "config-paths", default)]
    pub config_paths: Vec<String>,

    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,

    /// Extra artifacts for `clean`. Absent means the target path.
    #[serde(rename = "clean-targets", default)]
    pub clean_targets: Option<Vec<String>>,

    #[validate(nested)]
    pub sources: SourcesConfig,

    /// Destination of subdivisions whose country has no continent.
    #[serde(
        rename = "unassigned-continent",
        default = "default_unassigned_continent"
    )]
    #[validate(length(min = 1, message = "unassigned-continent cannot be empty"))]
    pub unassigned_continent: String,

    #[serde(rename = "escape-names", default = "default_true")]
    pub escape_names: bool,

    /// Exit non-zero when the run reported issues (files are written anyway).
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub templates: EnumTemplates,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct SourcesConfig {
    /// Standards body: authoritative for naming and detail.
    #[validate(nested)]
    pub primary: SourceConfig,

    /// Gazetteer: authoritative for existence and continent.
    #[validate(nested)]
    pub secondary: SourceConfig,

    /// Market-data sites: currencies only.
    #[serde(default)]
    #[validate(nested)]
    pub markets: Vec<SourceConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct SourceConfig {
    #[validate(length(min = 1, message = "Source name cannot be empty"))]
    pub name: String,
    /// Snapshot directory, relative to the project.
    #[validate(length(min = 1, message = "Source path cannot be empty"))]
    pub path: String,
}

fn default_target_path() -> String {
    "output".to_string()
}
fn default_unassigned_continent() -> String {
    "unassigned".to_string()
}
fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
name: iso3166
version: "1.0.0"
sources:
  primary: { name: iso, path: data/iso }
  secondary: { name: geonames, path: data/geonames }
"#;

    #[test]
    fn test_defaults_are_applied() -> anyhow::Result<()> {
        let config: ProjectConfig = serde_yaml::from_str(MINIMAL)?;

        assert_eq!(config.target_path, "output");
        assert!(config.clean_targets.is_none());
        assert_eq!(config.unassigned_continent, "unassigned");
        assert!(config.escape_names);
        assert!(!config.strict);
        assert!(config.sources.markets.is_empty());
        assert!(config.validate().is_ok());
        Ok(())
    }

    #[test]
    fn test_empty_source_name_fails_validation() -> anyhow::Result<()> {
        let yaml = MINIMAL.replace("name: iso,", "name: \"\",");
        let config: ProjectConfig = serde_yaml::from_str(&yaml)?;
        assert!(config.validate().is_err());
        Ok(())
    }
}
