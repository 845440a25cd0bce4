// src/models/mod.rs

//! Domain models for the ingest application.

mod config;
mod filing;

// Re-export all public types
pub use config::{Config, EdgarConfig, LoggingConfig, StorageConfig};
pub use filing::{Filing, accession_from_filename};
