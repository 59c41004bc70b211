// isoforge/src/commands/mod.rs

pub mod check;
pub mod clean;
pub mod run;
