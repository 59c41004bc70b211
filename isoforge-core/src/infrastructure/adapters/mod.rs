// isoforge-core/src/infrastructure/adapters/mod.rs

pub mod snapshot;

pub use snapshot::SnapshotSource;
