// isoforge-core/src/domain/emission/mod.rs
//
// Everything that decides WHAT gets emitted and in WHICH order.
// Formatting belongs to the application serializer.

pub mod legacy;
pub mod ordering;
pub mod type_enum;

pub use legacy::{LegacyCodeExpander, SubdivisionLine};
pub use ordering::{ContinentGroup, OrderingEngine};
pub use type_enum::{TypeEntry, collect_types};
