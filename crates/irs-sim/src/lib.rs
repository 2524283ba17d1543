//! Pipeline composition and artefact output for the IRS toolkit.
//!
//! The numerical crates never touch the filesystem; this crate wires them
//! together, loads configuration and persists results.

pub mod config;
pub mod output;
pub mod pipeline;

pub use config::PipelineConfig;
