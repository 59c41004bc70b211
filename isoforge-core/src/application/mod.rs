// isoforge-core/src/application/mod.rs

pub mod clean;
pub mod pipeline;
pub mod ports;
pub mod reconcile;
pub mod serializer;
pub mod writer;

// --- RE-EXPORTS (FACADE) ---
// The CLI only needs `use isoforge_core::application::{run_pipeline, clean_project, ...};`

pub use clean::clean_project;
pub use pipeline::{REPORT_FILE, run_pipeline};
pub use reconcile::{ContinentFile, EmissionPlan, PipelineSources, reconcile};
pub use serializer::EnumSerializer;
pub use writer::OutputWriter;
