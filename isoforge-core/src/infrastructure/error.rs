// isoforge-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(isoforge::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(isoforge::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(isoforge::infra::config))]
    ConfigError(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(isoforge::infra::config_missing))]
    ConfigNotFound(String),

    // --- SOURCES ---
    #[error("Snapshot '{item}' missing for source '{source_name}'")]
    #[diagnostic(
        code(isoforge::infra::snapshot_missing),
        help("Fetch the source again or remove it from isoforge.yaml.")
    )]
    SnapshotMissing { source_name: String, item: String },

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(
        code(isoforge::infra::template),
        help("Check the line templates ({{ ... }}) declared in isoforge.yaml.")
    )]
    TemplateError(#[from] minijinja::Error),
}

// `load_fragment` style helpers chain context with anyhow before converting.
impl From<anyhow::Error> for InfrastructureError {
    fn from(err: anyhow::Error) -> Self {
        InfrastructureError::ConfigError(format!("{:#}", err))
    }
}
