// isoforge-core/src/domain/mod.rs

pub mod emission;
pub mod error;
pub mod hierarchy;
pub mod identifier;
pub mod merge;
pub mod project;
pub mod reference;
pub mod report;
pub mod tables;

// Handy re-exports to keep imports short elsewhere
pub use error::DomainError;
pub use report::{Issue, RunReport};
