// isoforge-core/src/infrastructure/config/mod.rs

pub mod project;
pub mod tables;

pub use crate::domain::project::ProjectConfig;
pub use project::{CONFIG_CANDIDATES, load_project_config};
pub use tables::load_reference_tables;
