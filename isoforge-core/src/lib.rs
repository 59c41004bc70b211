// isoforge-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// What the core needs from the outside world: the reference-data fetchers.
pub mod ports;

// 2. Domain (business core)
// Records, reference tables, merge, hierarchy, ordering, legacy codes.
// Depends on NOTHING else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// YAML config, snapshot sources, Jinja rendering, atomic writes.
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (Pipeline, Serializer, Writer, Clean)
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use isoforge_core::IsoforgeError;
pub use error::IsoforgeError;
