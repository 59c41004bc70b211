// isoforge-core/src/domain/project/mod.rs

pub mod configuration;
pub mod templates;

pub use configuration::{ProjectConfig, SourceConfig, SourcesConfig};
pub use templates::EnumTemplates;
