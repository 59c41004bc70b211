// isoforge-core/src/domain/hierarchy/mod.rs

pub mod resolver;

pub use resolver::{Depth, HierarchyResolver};
